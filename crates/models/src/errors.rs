use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid reference: {0}")]
    InvalidReference(String),
}
