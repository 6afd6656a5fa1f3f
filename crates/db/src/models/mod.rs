//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` seed DTO for bulk inserts
//! - `Serialize` projection DTOs for listing responses

pub mod school;
