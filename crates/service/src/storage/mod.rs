//! Storage backends that do not need a database.

pub mod memory;
