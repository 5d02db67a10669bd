use super::ResourceRules;
use crate::steps::is_present;
use crate::validator::{IssueCode, ValidationIssue};
use serde_json::Value;

/// Bundle rules: `type` is required and every `entry[i].resource` is
/// validated in turn.
///
/// Errors from a nested resource are re-emitted on the Bundle, prefixed with
/// `Bundle.entry[i]: `. Nested warnings are not carried over.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundleRules;

impl ResourceRules for BundleRules {
    fn validate(&self, resource: &Value, issues: &mut Vec<ValidationIssue>) {
        check_type(resource, issues);
        check_entries(resource, issues);
    }
}

fn check_type(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    if !is_present(resource.get("type")) {
        issues.push(
            ValidationIssue::error(IssueCode::Required, "Missing required field: type")
                .with_location("Bundle.type"),
        );
    }
}

fn check_entries(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(entries) = resource.get("entry").and_then(Value::as_array) else {
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        let Some(nested) = entry.get("resource").filter(|v| !v.is_null()) else {
            continue;
        };

        let outcome = crate::validate(nested);
        tracing::trace!(
            index = i,
            resource_type = outcome.resource_type.as_deref().unwrap_or("-"),
            valid = outcome.valid,
            "validated bundle entry"
        );

        let prefix = format!("Bundle.entry[{}]", i);
        issues.extend(
            outcome
                .issues
                .into_iter()
                .filter(ValidationIssue::is_error)
                .map(|issue| nest_issue(&prefix, issue)),
        );
    }
}

fn nest_issue(prefix: &str, issue: ValidationIssue) -> ValidationIssue {
    let location = match issue.location.as_deref().and_then(|l| l.split_once('.')) {
        Some((_, path)) => format!("{}.resource.{}", prefix, path),
        None => format!("{}.resource", prefix),
    };

    ValidationIssue {
        diagnostics: format!("{}: {}", prefix, issue.diagnostics),
        location: Some(location),
        ..issue
    }
}
