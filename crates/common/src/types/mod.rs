use serde::{Deserialize, Serialize};

/// Body returned by the liveness probe at `/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Liveness {
    pub status: bool,
    pub message: String,
}

impl Default for Liveness {
    fn default() -> Self {
        Self { status: true, message: "Boom".to_string() }
    }
}
