//! Shared response envelope types for API handlers.
//!
//! Every response uses the `{success, message, data, pagination}` envelope.
//! Use these instead of ad-hoc `serde_json::json!({ ... })` to get
//! compile-time type safety and consistent serialization. Error envelopes
//! (`success: false`) are produced by the `IntoResponse` impl on `AppError`.

use serde::Serialize;
use storyhub_core::pagination::Pagination;

/// Success envelope for a single payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying `data`.
    pub fn with_data(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no payload (deletes).
    pub fn message_only(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            data: None,
        }
    }
}

/// Success envelope for list pages: payload plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> PagedResponse<T> {
    pub fn new(message: &'static str, data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            message,
            data,
            pagination,
        }
    }
}
