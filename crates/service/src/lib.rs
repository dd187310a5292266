//! Service layer providing the catalog and order operations on top of models.
//! - Repository traits are the seam the HTTP handlers talk to.
//! - SeaORM implementations live in `db`, an in-memory one in `storage`.

pub mod errors;
pub mod bike;
pub mod order;
pub mod db;
pub mod storage;
#[cfg(test)]
pub mod test_support;
