//! Rule-based FHIR resource validation
//!
//! Validates an untyped FHIR JSON document in two steps:
//! - structural checks shared by every resource (`resourceType`, `id`)
//! - resource-specific rules selected by `resourceType` (Patient, Observation, Bundle)
//!
//! ```rust
//! use serde_json::json;
//!
//! let outcome = fhirkit_validator::validate(&json!({ "resourceType": "Observation" }));
//! assert!(!outcome.valid);
//! assert_eq!(outcome.error_count(), 3);
//! ```

pub mod rules;
pub mod steps;
pub mod validator;

pub use rules::{rules_for, BundleRules, DefaultRules, ObservationRules, PatientRules, ResourceRules};
pub use steps::structure::is_valid_id;
pub use validator::{
    validate, validate_batch, IssueCode, IssueSeverity, ValidationIssue, ValidationOutcome,
    ValidationResult,
};
