//! Canned example resources
//!
//! One complete, internally consistent document per supported resource type.
//! The Observation refers to the Patient example, and the Bundle example wraps
//! both, so the three can be used together in fixtures.

use serde_json::{json, Value};

const EXAMPLE_RESOURCE_TYPES: &[&str] = &["Patient", "Observation", "Bundle"];

const PATIENT_ID: &str = "example";
const OBSERVATION_ID: &str = "example-weight";
const BUNDLE_ID: &str = "example-bundle";

/// Builds the canned example for `resource_type`.
///
/// Returns `None` for any label without a canned example, including labels
/// that name a known resource type (e.g. `Encounter`). Callers should treat
/// that as a normal not-found outcome.
pub fn generate_example(resource_type: &str) -> Option<Value> {
    match resource_type {
        "Patient" => Some(patient_example()),
        "Observation" => Some(observation_example()),
        "Bundle" => Some(bundle_example()),
        _ => None,
    }
}

/// Resource types that have a canned example, in presentation order.
pub fn example_resource_types() -> &'static [&'static str] {
    EXAMPLE_RESOURCE_TYPES
}

fn patient_example() -> Value {
    json!({
        "resourceType": "Patient",
        "id": PATIENT_ID,
        "meta": {
            "versionId": "1",
            "lastUpdated": "2024-01-15T10:30:00Z",
            "profile": ["http://hl7.org/fhir/StructureDefinition/Patient"]
        },
        "identifier": [{
            "use": "usual",
            "system": "http://example.org/fhir/mrn",
            "value": "MRN-0012345"
        }],
        "active": true,
        "name": [{
            "use": "official",
            "family": "Chalmers",
            "given": ["Peter", "James"]
        }],
        "telecom": [{
            "system": "phone",
            "value": "(03) 5555 6473",
            "use": "work"
        }],
        "gender": "male",
        "birthDate": "1974-12-25",
        "address": [{
            "use": "home",
            "line": ["534 Erewhon St"],
            "city": "PleasantVille",
            "postalCode": "3999",
            "country": "AU"
        }]
    })
}

fn observation_example() -> Value {
    json!({
        "resourceType": "Observation",
        "id": OBSERVATION_ID,
        "meta": {
            "versionId": "1",
            "lastUpdated": "2024-01-15T10:45:00Z"
        },
        "status": "final",
        "category": [{
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/observation-category",
                "code": "vital-signs",
                "display": "Vital Signs"
            }]
        }],
        "code": {
            "coding": [{
                "system": "http://loinc.org",
                "code": "29463-7",
                "display": "Body weight"
            }],
            "text": "Body weight"
        },
        "subject": {
            "reference": format!("Patient/{PATIENT_ID}"),
            "display": "Peter James Chalmers"
        },
        "effectiveDateTime": "2024-01-15T10:40:00Z",
        "valueQuantity": {
            "value": 72.5,
            "unit": "kg",
            "system": "http://unitsofmeasure.org",
            "code": "kg"
        }
    })
}

fn bundle_example() -> Value {
    json!({
        "resourceType": "Bundle",
        "id": BUNDLE_ID,
        "meta": {
            "lastUpdated": "2024-01-15T11:00:00Z"
        },
        "type": "collection",
        "timestamp": "2024-01-15T11:00:00Z",
        "entry": [
            {
                "fullUrl": format!("urn:uuid:{PATIENT_ID}"),
                "resource": patient_example()
            },
            {
                "fullUrl": format!("urn:uuid:{OBSERVATION_ID}"),
                "resource": observation_example()
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_known_resource_type;

    #[test]
    fn every_listed_type_has_an_example() {
        for rt in example_resource_types() {
            let example = generate_example(rt).unwrap();
            assert_eq!(example["resourceType"], *rt);
            assert!(is_known_resource_type(rt));
        }
    }

    #[test]
    fn unsupported_labels_are_absent() {
        assert!(generate_example("Foo").is_none());
        assert!(generate_example("patient").is_none());
        assert!(generate_example("").is_none());
        // Known to the registry, but no canned example.
        assert!(generate_example("Encounter").is_none());
    }

    #[test]
    fn observation_refers_to_patient_example() {
        let patient = generate_example("Patient").unwrap();
        let observation = generate_example("Observation").unwrap();
        let reference = observation["subject"]["reference"].as_str().unwrap();
        assert_eq!(reference, format!("Patient/{}", patient["id"].as_str().unwrap()));
    }

    #[test]
    fn bundle_wraps_patient_and_observation() {
        let bundle = generate_example("Bundle").unwrap();
        let entries = bundle["entry"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["resource"], generate_example("Patient").unwrap());
        assert_eq!(entries[1]["resource"], generate_example("Observation").unwrap());
    }

    #[test]
    fn examples_are_fresh_values() {
        let mut first = generate_example("Patient").unwrap();
        first["id"] = json!("changed");
        assert_eq!(generate_example("Patient").unwrap()["id"], PATIENT_ID);
    }
}
