use super::ResourceRules;
use crate::steps::{describe, is_present};
use crate::validator::{IssueCode, ValidationIssue};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// `AdministrativeGender` codes.
pub const ADMINISTRATIVE_GENDERS: &[&str] = &["male", "female", "other", "unknown"];

fn birth_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid birthDate regex"))
}

/// Patient rules: name completeness, gender code, birthDate shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientRules;

impl ResourceRules for PatientRules {
    fn validate(&self, resource: &Value, issues: &mut Vec<ValidationIssue>) {
        check_names(resource, issues);
        check_gender(resource, issues);
        check_birth_date(resource, issues);
    }
}

fn check_names(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(names) = resource.get("name").and_then(Value::as_array) else {
        return;
    };

    for (i, name) in names.iter().enumerate() {
        if !is_present(name.get("family")) && !is_present(name.get("given")) {
            issues.push(
                ValidationIssue::warning(
                    IssueCode::Incomplete,
                    format!("Patient.name[{}]: Should have either family or given name", i),
                )
                .with_location(format!("Patient.name[{}]", i)),
            );
        }
    }
}

fn check_gender(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(gender) = resource.get("gender").filter(|v| !v.is_null()) else {
        return;
    };

    if !gender.as_str().is_some_and(|g| ADMINISTRATIVE_GENDERS.contains(&g)) {
        issues.push(
            ValidationIssue::error(
                IssueCode::Value,
                format!(
                    "Invalid gender: '{}'. Must be one of: {}",
                    describe(gender),
                    ADMINISTRATIVE_GENDERS.join(", ")
                ),
            )
            .with_location("Patient.gender"),
        );
    }
}

fn check_birth_date(resource: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(birth_date) = resource.get("birthDate").filter(|v| !v.is_null()) else {
        return;
    };

    if !birth_date.as_str().is_some_and(|d| birth_date_pattern().is_match(d)) {
        issues.push(
            ValidationIssue::error(
                IssueCode::Value,
                format!(
                    "Invalid birthDate format: '{}'. Expected YYYY-MM-DD",
                    describe(birth_date)
                ),
            )
            .with_location("Patient.birthDate"),
        );
    }
}
