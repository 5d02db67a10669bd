//! FHIR resource models
//!
//! This crate holds the version-agnostic, process-wide constants the rest of
//! the workspace builds on.
//!
//! # Module Organization
//!
//! - `common::resource_type`: the set of known FHIR R4 resource type names
//! - `common::example`: canned, internally consistent example resources
//!
//! # Example
//!
//! ```rust
//! use fhirkit_models::{generate_example, is_known_resource_type};
//!
//! assert!(is_known_resource_type("Patient"));
//! assert!(!is_known_resource_type("Foo"));
//!
//! let patient = generate_example("Patient").expect("Patient has an example");
//! assert_eq!(patient["resourceType"], "Patient");
//! assert!(generate_example("Foo").is_none());
//! ```

pub mod common;

// Re-export commonly used items
pub use common::*;
