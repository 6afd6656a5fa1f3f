//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod school_repo;

pub use school_repo::{SchoolFilter, SchoolRepo};
