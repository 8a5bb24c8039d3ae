//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Wire-facing structs serialize camelCase: that is the JSON contract the
//! client consumes (`coverUrl`, `storyId`, `createdAt`, ...).

pub mod chapter;
pub mod story;
