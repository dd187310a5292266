pub mod filter;
pub mod repository;

pub use filter::BikeFilter;
pub use repository::{BikeRepository, SeaOrmBikeRepository};
