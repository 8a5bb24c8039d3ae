//! Declarative request-shape validation.
//!
//! Each endpoint's body shape is a static table of [`FieldRule`]s (see
//! [`crate::story`] and [`crate::chapter`]) evaluated against the raw JSON
//! payload before the request reaches the repository layer. Evaluation is a
//! pure function of the payload: no store access, no side effects.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

/// URL shape accepted for cover images. The scheme is optional; the host may
/// be `localhost`, the loopback IP, or a dotted domain, with optional port
/// and path.
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(localhost|127\.0\.0\.1|[\w-]+(\.[\w-]+)+)(:\d+)?(/.*)?$")
        .expect("URL_SHAPE pattern compiles")
});

/// A single field-level rule violation, serialized into the error envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Constraint kinds a field rule can check.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// A string that is non-blank after trimming.
    Text,
    /// A string drawn from a fixed set of values.
    OneOf(&'static [&'static str]),
    /// A URL-shaped string. Empty strings pass (an unset cover is sent as
    /// `""` by the client form).
    UrlShaped,
    /// An array whose elements are all non-blank strings.
    TextArray,
}

/// One declarative rule: field name, the constraint to check, whether the
/// field must be present, and the message reported on violation.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub required: bool,
    pub message: &'static str,
}

/// Evaluate a rule set against a JSON object, returning every violation.
pub fn evaluate(rules: &[FieldRule], data: &Map<String, Value>) -> Vec<FieldViolation> {
    rules
        .iter()
        .filter_map(|rule| check_rule(rule, data.get(rule.field)))
        .collect()
}

fn check_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        // Absent and null are equivalent: a violation only for required fields.
        None | Some(Value::Null) => return rule.required.then(|| violation(rule)),
        Some(v) => v,
    };

    let ok = match rule.constraint {
        Constraint::Text => value.as_str().is_some_and(|s| !s.trim().is_empty()),
        Constraint::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        Constraint::UrlShaped => value
            .as_str()
            .is_some_and(|s| s.is_empty() || URL_SHAPE.is_match(s)),
        Constraint::TextArray => value.as_array().is_some_and(|items| {
            items
                .iter()
                .all(|item| item.as_str().is_some_and(|s| !s.trim().is_empty()))
        }),
    };

    if ok {
        None
    } else {
        Some(violation(rule))
    }
}

fn violation(rule: &FieldRule) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        message: rule.message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().expect("test payload is an object").clone()
    }

    const TITLE_RULE: FieldRule = FieldRule {
        field: "title",
        constraint: Constraint::Text,
        required: true,
        message: "Title is required",
    };

    const OPTIONAL_TITLE_RULE: FieldRule = FieldRule {
        field: "title",
        constraint: Constraint::Text,
        required: false,
        message: "Title cannot be empty",
    };

    #[test]
    fn missing_required_field_is_a_violation() {
        let violations = evaluate(&[TITLE_RULE], &obj(json!({})));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "title");
        assert_eq!(violations[0].message, "Title is required");
    }

    #[test]
    fn null_counts_as_absent() {
        assert_eq!(evaluate(&[TITLE_RULE], &obj(json!({"title": null}))).len(), 1);
        assert!(evaluate(&[OPTIONAL_TITLE_RULE], &obj(json!({"title": null}))).is_empty());
    }

    #[test]
    fn blank_text_is_a_violation_even_when_optional() {
        assert_eq!(
            evaluate(&[OPTIONAL_TITLE_RULE], &obj(json!({"title": "   "}))).len(),
            1
        );
    }

    #[test]
    fn non_string_text_is_a_violation() {
        assert_eq!(evaluate(&[TITLE_RULE], &obj(json!({"title": 42}))).len(), 1);
    }

    #[test]
    fn one_of_accepts_listed_values_only() {
        let rule = FieldRule {
            field: "status",
            constraint: Constraint::OneOf(&["DRAFT", "PUBLISH"]),
            required: true,
            message: "Status must be DRAFT or PUBLISH",
        };
        assert!(evaluate(&[rule], &obj(json!({"status": "DRAFT"}))).is_empty());
        assert_eq!(evaluate(&[rule], &obj(json!({"status": "draft"}))).len(), 1);
        assert_eq!(evaluate(&[rule], &obj(json!({"status": "ARCHIVED"}))).len(), 1);
    }

    #[test]
    fn url_shape_accepts_common_forms() {
        let rule = FieldRule {
            field: "coverUrl",
            constraint: Constraint::UrlShaped,
            required: false,
            message: "Cover URL must be a valid URL",
        };
        for url in [
            "https://example.com/cover.png",
            "http://localhost:5000/uploads/a.png",
            "example.com/x",
            "",
        ] {
            assert!(
                evaluate(&[rule], &obj(json!({"coverUrl": url}))).is_empty(),
                "expected '{url}' to pass"
            );
        }
        assert_eq!(
            evaluate(&[rule], &obj(json!({"coverUrl": "not a url"}))).len(),
            1
        );
    }

    #[test]
    fn text_array_rejects_blank_elements_and_non_arrays() {
        let rule = FieldRule {
            field: "tags",
            constraint: Constraint::TextArray,
            required: true,
            message: "Tags must be an array of non-empty strings",
        };
        assert!(evaluate(&[rule], &obj(json!({"tags": ["a", "b"]}))).is_empty());
        assert!(evaluate(&[rule], &obj(json!({"tags": []}))).is_empty());
        assert_eq!(evaluate(&[rule], &obj(json!({"tags": ["a", ""]}))).len(), 1);
        assert_eq!(evaluate(&[rule], &obj(json!({"tags": "a"}))).len(), 1);
        assert_eq!(evaluate(&[rule], &obj(json!({"tags": [1]}))).len(), 1);
    }

    #[test]
    fn all_violations_are_collected() {
        let rules = [
            TITLE_RULE,
            FieldRule {
                field: "content",
                constraint: Constraint::Text,
                required: true,
                message: "Content is required",
            },
        ];
        let violations = evaluate(&rules, &obj(json!({"title": "", "content": ""})));
        assert_eq!(violations.len(), 2);
    }
}
