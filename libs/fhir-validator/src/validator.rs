use crate::rules::rules_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validates a single resource document.
///
/// Every applicable check runs; a failing check never short-circuits the
/// others. Malformed-but-parseable documents never abort validation, every
/// anomaly becomes an issue on the returned outcome.
pub fn validate(resource: &Value) -> ValidationOutcome {
    ValidationRun::new(resource).execute()
}

pub fn validate_batch(resources: &[Value]) -> Vec<ValidationOutcome> {
    resources.iter().map(validate).collect()
}

/// Short-lived validation execution
struct ValidationRun<'a> {
    resource: &'a Value,
    issues: Vec<ValidationIssue>,
}

impl<'a> ValidationRun<'a> {
    fn new(resource: &'a Value) -> Self {
        Self {
            resource,
            issues: Vec::new(),
        }
    }

    fn execute(mut self) -> ValidationOutcome {
        let resource_type = crate::steps::structure::validate_structure(self.resource, &mut self.issues);

        if let Some(resource_type) = resource_type {
            rules_for(resource_type).validate(self.resource, &mut self.issues);
        }

        let outcome = ValidationOutcome {
            resource_type: resource_type.map(str::to_string),
            valid: !self.has_errors(),
            issues: self.issues,
        };

        tracing::debug!(
            resource_type = outcome.resource_type.as_deref().unwrap_or("-"),
            valid = outcome.valid,
            errors = outcome.error_count(),
            warnings = outcome.warning_count(),
            "validation finished"
        );

        outcome
    }

    fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }
}

/// Validation result for a single resource
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub resource_type: Option<String>,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    pub fn success(resource_type: Option<String>) -> Self {
        Self {
            resource_type,
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    /// Error messages, in the order the checks produced them.
    pub fn errors(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages(IssueSeverity::Error)
    }

    /// Warning messages, in the order the checks produced them.
    pub fn warnings(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages(IssueSeverity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    fn messages(&self, severity: IssueSeverity) -> impl Iterator<Item = &str> + '_ {
        self.issues
            .iter()
            .filter(move |i| i.severity == severity)
            .map(|i| i.diagnostics.as_str())
    }

    /// Flattens the outcome into the plain `{valid, errors, warnings}` record.
    pub fn to_result(&self) -> ValidationResult {
        ValidationResult {
            valid: self.valid,
            errors: self.errors().map(str::to_string).collect(),
            warnings: self.warnings().map(str::to_string).collect(),
        }
    }

    pub fn to_operation_outcome(&self) -> Value {
        let issues: Vec<Value> = if self.issues.is_empty() {
            vec![serde_json::json!({
                "severity": "information",
                "code": "informational",
                "diagnostics": "No issues detected",
            })]
        } else {
            self.issues.iter().map(ValidationIssue::to_json).collect()
        };

        serde_json::json!({
            "resourceType": "OperationOutcome",
            "issue": issues
        })
    }
}

/// Plain validation record: `valid` is true iff `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: IssueCode,
    pub diagnostics: String,
    pub location: Option<String>,
}

impl ValidationIssue {
    pub fn error(code: IssueCode, diagnostics: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            code,
            diagnostics: diagnostics.into(),
            location: None,
        }
    }

    pub fn warning(code: IssueCode, diagnostics: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            code,
            diagnostics: diagnostics.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    fn to_json(&self) -> Value {
        let mut issue = serde_json::json!({
            "severity": self.severity.to_string().to_lowercase(),
            "code": self.code.to_string(),
            "diagnostics": self.diagnostics,
        });

        if let Some(ref loc) = self.location {
            issue["location"] = serde_json::json!([loc]);
            issue["expression"] = serde_json::json!([loc]);
        }

        issue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// FHIR `IssueType` codes used by the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    Invalid,
    Structure,
    Required,
    Value,
    Incomplete,
    NotSupported,
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Invalid => "invalid",
            Self::Structure => "structure",
            Self::Required => "required",
            Self::Value => "value",
            Self::Incomplete => "incomplete",
            Self::NotSupported => "not-supported",
        };
        write!(f, "{}", s)
    }
}
