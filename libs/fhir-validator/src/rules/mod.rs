//! Resource-specific rule sets
//!
//! Each supported resource type maps to one [`ResourceRules`] strategy.
//! Types without dedicated rules fall back to [`DefaultRules`], which only
//! relies on the structural checks that already ran.

mod bundle;
mod observation;
mod patient;

pub use bundle::BundleRules;
pub use observation::{ObservationRules, OBSERVATION_STATUSES};
pub use patient::{PatientRules, ADMINISTRATIVE_GENDERS};

use crate::validator::ValidationIssue;
use serde_json::Value;

/// Validation strategy for one resource type.
pub trait ResourceRules: Sync {
    /// Appends every issue found in `resource` to `issues`.
    fn validate(&self, resource: &Value, issues: &mut Vec<ValidationIssue>);
}

/// Strategy for resource types without dedicated rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRules;

impl ResourceRules for DefaultRules {
    fn validate(&self, _resource: &Value, _issues: &mut Vec<ValidationIssue>) {}
}

/// Selects the rule set for `resource_type`.
pub fn rules_for(resource_type: &str) -> &'static dyn ResourceRules {
    match resource_type {
        "Patient" => &PatientRules,
        "Observation" => &ObservationRules,
        "Bundle" => &BundleRules,
        _ => &DefaultRules,
    }
}
