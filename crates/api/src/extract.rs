//! Request-body decoding with declarative shape validation.

use serde::de::DeserializeOwned;
use serde_json::Value;
use storyhub_core::validation::{evaluate, FieldRule};

use crate::error::AppError;

/// Check a raw JSON body against a rule set, then deserialize it.
///
/// Rule violations become a 400 with field-level errors before any store
/// call. A body that passes the rules but still fails to deserialize
/// (wrong types on unruled fields, e.g. a malformed inline chapter)
/// becomes a generic 400.
pub fn validated_body<T: DeserializeOwned>(
    body: Value,
    rules: &[FieldRule],
) -> Result<T, AppError> {
    let violations = match body.as_object() {
        Some(object) => evaluate(rules, object),
        None => {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ))
        }
    };
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    serde_json::from_value(body)
        .map_err(|err| AppError::BadRequest(format!("Malformed request body: {err}")))
}
