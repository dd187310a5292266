//! Persisted entities and the schema parsers that guard them.

pub mod errors;
pub mod db;
pub mod validation;
pub mod bike;
pub mod order;

#[cfg(test)]
mod tests;
