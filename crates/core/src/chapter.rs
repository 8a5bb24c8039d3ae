//! Chapter request-shape rules.
//!
//! Create and update share one rule set: both fields are required on every
//! write, so a chapter can never be persisted with a blank title or body.
//! `content` is rich-text markup and is otherwise opaque to the backend.

use crate::validation::{Constraint, FieldRule};

/// Shape rules for chapter create and update payloads.
pub const PAYLOAD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        constraint: Constraint::Text,
        required: true,
        message: "Chapter title is required",
    },
    FieldRule {
        field: "content",
        constraint: Constraint::Text,
        required: true,
        message: "Chapter content is required",
    },
];
