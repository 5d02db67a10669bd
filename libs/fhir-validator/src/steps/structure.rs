//! Structural validation
//!
//! Checks that apply to every resource regardless of its type:
//! - `resourceType` must be present (unknown types only warn)
//! - `id`, when present, must be 1-64 characters of `[A-Za-z0-9\-\.]`

use super::{describe, is_present};
use crate::validator::{IssueCode, ValidationIssue};
use fhirkit_models::is_known_resource_type;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

pub(crate) const MISSING_RESOURCE_TYPE: &str = "Missing required field: resourceType";
pub(crate) const INVALID_ID: &str =
    "Invalid ID format — must be 1-64 characters, alphanumeric, hyphens, dots only";

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("valid id regex"))
}

/// Returns true if `id` is a well-formed FHIR logical id.
pub fn is_valid_id(id: &str) -> bool {
    id_pattern().is_match(id)
}

/// Runs the type-agnostic checks and returns the resource type, if it is usable
/// for resource-specific dispatch.
pub fn validate_structure<'v>(
    resource: &'v Value,
    issues: &mut Vec<ValidationIssue>,
) -> Option<&'v str> {
    let resource_type = check_resource_type(resource, issues);
    check_id(resource, issues);
    resource_type
}

fn check_resource_type<'v>(resource: &'v Value, issues: &mut Vec<ValidationIssue>) -> Option<&'v str> {
    let value = resource.get("resourceType");
    if !is_present(value) {
        issues.push(ValidationIssue::error(IssueCode::Required, MISSING_RESOURCE_TYPE));
        return None;
    }

    let Some(resource_type) = value.and_then(Value::as_str) else {
        issues.push(
            ValidationIssue::error(
                IssueCode::Structure,
                format!(
                    "Invalid resourceType: expected a string, got {}",
                    value.map(describe).unwrap_or_default()
                ),
            )
            .with_location("resourceType"),
        );
        return None;
    };

    if !is_known_resource_type(resource_type) {
        issues.push(
            ValidationIssue::warning(
                IssueCode::NotSupported,
                format!("Unknown resource type: {}", resource_type),
            )
            .with_location("resourceType"),
        );
    }

    Some(resource_type)
}

fn check_id(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(id) = resource.get("id").filter(|v| !v.is_null()) else {
        return;
    };

    let well_formed = id.as_str().is_some_and(is_valid_id);
    if !well_formed {
        let location = match resource.get("resourceType").and_then(Value::as_str) {
            Some(rt) => format!("{}.id", rt),
            None => "id".to_string(),
        };
        issues.push(ValidationIssue::error(IssueCode::Invalid, INVALID_ID).with_location(location));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(resource: Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        validate_structure(&resource, &mut issues);
        issues
    }

    #[test]
    fn id_pattern_bounds() {
        assert!(is_valid_id("a"));
        assert!(is_valid_id("example-1.v2"));
        assert!(is_valid_id(&"x".repeat(64)));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id(&"x".repeat(65)));
        assert!(!is_valid_id("a/b"));
        assert!(!is_valid_id("with space"));
        assert!(!is_valid_id("under_score"));
    }

    #[test]
    fn missing_resource_type_is_an_error() {
        let issues = run(json!({ "id": "x" }));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].diagnostics, MISSING_RESOURCE_TYPE);
    }

    #[test]
    fn null_resource_type_counts_as_missing() {
        let issues = run(json!({ "resourceType": null }));
        assert_eq!(issues[0].diagnostics, MISSING_RESOURCE_TYPE);
    }

    #[test]
    fn non_string_resource_type_is_a_structure_error() {
        let mut issues = Vec::new();
        let resource = json!({ "resourceType": 42 });
        assert_eq!(validate_structure(&resource, &mut issues), None);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::Structure);
        assert!(issues[0].diagnostics.contains("42"));
    }

    #[test]
    fn unknown_resource_type_only_warns() {
        let mut issues = Vec::new();
        let resource = json!({ "resourceType": "Foo" });
        assert_eq!(validate_structure(&resource, &mut issues), Some("Foo"));
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(issues[0].diagnostics, "Unknown resource type: Foo");
    }

    #[test]
    fn non_string_id_is_invalid() {
        let issues = run(json!({ "resourceType": "Patient", "id": 123 }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].diagnostics, INVALID_ID);
        assert_eq!(issues[0].location.as_deref(), Some("Patient.id"));
    }

    #[test]
    fn non_object_document_is_missing_resource_type() {
        let issues = run(json!(["Patient"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].diagnostics, MISSING_RESOURCE_TYPE);
    }
}
