//! Storyhub domain core.
//!
//! Pure logic shared by the repository and API layers: error taxonomy,
//! ID/timestamp types, enumeration constants, declarative request-shape
//! rules, and pagination math. Nothing in this crate performs I/O.

pub mod chapter;
pub mod error;
pub mod pagination;
pub mod story;
pub mod types;
pub mod validation;
