//! Version-agnostic FHIR model constants
//!
//! Data that holds for FHIR R4, R4B and R5 alike.

pub mod example;
pub mod resource_type;

// Re-export commonly used items
pub use example::{example_resource_types, generate_example};
pub use resource_type::{is_known_resource_type, known_resource_types, KNOWN_RESOURCE_TYPES};
