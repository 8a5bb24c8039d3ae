//! Story enumeration constants and request-shape rules.
//!
//! `category` and `status` are stored as plain text columns; the values
//! below are the only ones accepted by the API and by the table CHECK
//! constraints. `status` carries no transition rules: any DRAFT/PUBLISH
//! change is permitted through update.

use crate::validation::{Constraint, FieldRule};

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CATEGORY_FINANCIAL: &str = "FINANCIAL";
pub const CATEGORY_TECHNOLOGY: &str = "TECHNOLOGY";
pub const CATEGORY_HEALTH: &str = "HEALTH";

/// All valid story categories.
pub const VALID_CATEGORIES: &[&str] =
    &[CATEGORY_FINANCIAL, CATEGORY_TECHNOLOGY, CATEGORY_HEALTH];

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// A story being written, hidden from readers.
pub const STATUS_DRAFT: &str = "DRAFT";
/// A story visible to readers.
pub const STATUS_PUBLISH: &str = "PUBLISH";

/// All valid story statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISH];

/// Check whether a value names a known category.
pub fn is_valid_category(value: &str) -> bool {
    VALID_CATEGORIES.contains(&value)
}

/// Check whether a value names a known status.
pub fn is_valid_status(value: &str) -> bool {
    VALID_STATUSES.contains(&value)
}

// ---------------------------------------------------------------------------
// Request-shape rules
// ---------------------------------------------------------------------------

const CATEGORY_MESSAGE: &str = "Category must be FINANCIAL, TECHNOLOGY, or HEALTH";
const STATUS_MESSAGE: &str = "Status must be DRAFT or PUBLISH";
const COVER_URL_MESSAGE: &str = "Cover URL must be a valid URL";
const TAGS_MESSAGE: &str = "Tags must be an array of non-empty strings";

/// Shape rules for story creation payloads.
pub const CREATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        constraint: Constraint::Text,
        required: true,
        message: "Title is required",
    },
    FieldRule {
        field: "author",
        constraint: Constraint::Text,
        required: true,
        message: "Author is required",
    },
    FieldRule {
        field: "synopsis",
        constraint: Constraint::Text,
        required: true,
        message: "Synopsis is required",
    },
    FieldRule {
        field: "category",
        constraint: Constraint::OneOf(VALID_CATEGORIES),
        required: true,
        message: CATEGORY_MESSAGE,
    },
    FieldRule {
        field: "coverUrl",
        constraint: Constraint::UrlShaped,
        required: false,
        message: COVER_URL_MESSAGE,
    },
    FieldRule {
        field: "tags",
        constraint: Constraint::TextArray,
        required: true,
        message: TAGS_MESSAGE,
    },
    FieldRule {
        field: "status",
        constraint: Constraint::OneOf(VALID_STATUSES),
        required: true,
        message: STATUS_MESSAGE,
    },
];

/// Shape rules for story update payloads: same constraints, nothing required.
pub const UPDATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        constraint: Constraint::Text,
        required: false,
        message: "Title cannot be empty",
    },
    FieldRule {
        field: "author",
        constraint: Constraint::Text,
        required: false,
        message: "Author cannot be empty",
    },
    FieldRule {
        field: "synopsis",
        constraint: Constraint::Text,
        required: false,
        message: "Synopsis cannot be empty",
    },
    FieldRule {
        field: "category",
        constraint: Constraint::OneOf(VALID_CATEGORIES),
        required: false,
        message: CATEGORY_MESSAGE,
    },
    FieldRule {
        field: "coverUrl",
        constraint: Constraint::UrlShaped,
        required: false,
        message: COVER_URL_MESSAGE,
    },
    FieldRule {
        field: "tags",
        constraint: Constraint::TextArray,
        required: false,
        message: TAGS_MESSAGE,
    },
    FieldRule {
        field: "status",
        constraint: Constraint::OneOf(VALID_STATUSES),
        required: false,
        message: STATUS_MESSAGE,
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
