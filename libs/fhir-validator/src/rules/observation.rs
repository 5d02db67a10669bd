use super::ResourceRules;
use crate::steps::{describe, is_present};
use crate::validator::{IssueCode, ValidationIssue};
use serde_json::Value;

/// `ObservationStatus` codes.
pub const OBSERVATION_STATUSES: &[&str] = &[
    "registered",
    "preliminary",
    "final",
    "amended",
    "corrected",
    "cancelled",
    "entered-in-error",
    "unknown",
];

/// Observation rules: `status`, `code` and `subject` are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservationRules;

impl ResourceRules for ObservationRules {
    fn validate(&self, resource: &Value, issues: &mut Vec<ValidationIssue>) {
        check_status(resource, issues);
        check_code(resource, issues);
        check_subject(resource, issues);
    }
}

fn missing(field: &str) -> ValidationIssue {
    ValidationIssue::error(IssueCode::Required, format!("Missing required field: {}", field))
        .with_location(format!("Observation.{}", field))
}

fn check_status(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(status) = resource.get("status").filter(|v| !v.is_null()) else {
        issues.push(missing("status"));
        return;
    };

    if !status.as_str().is_some_and(|s| OBSERVATION_STATUSES.contains(&s)) {
        issues.push(
            ValidationIssue::error(
                IssueCode::Value,
                format!(
                    "Invalid status: '{}'. Must be one of: {}",
                    describe(status),
                    OBSERVATION_STATUSES.join(", ")
                ),
            )
            .with_location("Observation.status"),
        );
    }
}

fn check_code(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    if !is_present(resource.get("code")) {
        issues.push(missing("code"));
    }
}

fn check_subject(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(subject) = resource.get("subject").filter(|v| !v.is_null()) else {
        issues.push(missing("subject"));
        return;
    };

    if let Some(reference) = subject.get("reference").and_then(Value::as_str) {
        if !reference.contains('/') {
            issues.push(
                ValidationIssue::warning(
                    IssueCode::Value,
                    format!(
                        "Subject reference '{}' should include the resource type (e.g. Patient/123)",
                        reference
                    ),
                )
                .with_location("Observation.subject.reference"),
            );
        }
    }
}
