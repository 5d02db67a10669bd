use fhirkit_validator::{validate, validate_batch, ValidationOutcome, ValidationResult};
use serde_json::{json, Value};

const INVALID_ID: &str =
    "Invalid ID format — must be 1-64 characters, alphanumeric, hyphens, dots only";

fn errors(outcome: &ValidationOutcome) -> Vec<&str> {
    outcome.errors().collect()
}

fn warnings(outcome: &ValidationOutcome) -> Vec<&str> {
    outcome.warnings().collect()
}

fn assert_consistent(outcome: &ValidationOutcome) {
    assert_eq!(outcome.valid, outcome.error_count() == 0, "{outcome:?}");
}

// ============================================================================
// Structural checks
// ============================================================================

#[test]
fn missing_resource_type_invalidates() {
    for doc in [json!({}), json!({ "id": "abc" }), json!({ "name": [{ "family": "Doe" }] })] {
        let outcome = validate(&doc);
        assert!(!outcome.valid);
        assert!(errors(&outcome).contains(&"Missing required field: resourceType"));
        assert_consistent(&outcome);
    }
}

#[test]
fn unknown_resource_type_warns_but_stays_valid() {
    let outcome = validate(&json!({ "resourceType": "Foo", "id": "foo-1" }));
    assert!(outcome.valid);
    assert_eq!(warnings(&outcome), vec!["Unknown resource type: Foo"]);
    assert_eq!(outcome.resource_type.as_deref(), Some("Foo"));
}

#[test]
fn malformed_ids_invalidate() {
    let too_long = "a".repeat(65);
    for id in ["", "a/b", "has space", "ünïcode", too_long.as_str()] {
        let outcome = validate(&json!({ "resourceType": "Basic", "id": id }));
        assert!(!outcome.valid, "id {id:?} should be rejected");
        assert_eq!(errors(&outcome), vec![INVALID_ID]);
    }
}

#[test]
fn well_formed_ids_never_trigger_the_id_error() {
    let longest = "Z".repeat(64);
    for id in ["1", "abc-DEF.123", "a.b.c", "---", longest.as_str()] {
        let outcome = validate(&json!({ "resourceType": "Basic", "id": id }));
        assert!(outcome.valid, "id {id:?} should be accepted: {outcome:?}");
    }
}

#[test]
fn checks_do_not_short_circuit() {
    let outcome = validate(&json!({ "id": "bad/id" }));
    assert_eq!(
        errors(&outcome),
        vec!["Missing required field: resourceType", INVALID_ID]
    );
}

// ============================================================================
// Patient
// ============================================================================

#[test]
fn patient_gender_and_birth_date() {
    let bad_gender = validate(&json!({ "resourceType": "Patient", "gender": "F" }));
    assert!(!bad_gender.valid);

    let bad_date = validate(&json!({ "resourceType": "Patient", "birthDate": "1990-1-1" }));
    assert!(!bad_date.valid);
    assert_eq!(bad_date.error_count(), 1);

    let good = validate(&json!({
        "resourceType": "Patient",
        "gender": "unknown",
        "birthDate": "1990-01-01"
    }));
    assert!(good.valid);
    assert!(good.issues.is_empty());
}

#[test]
fn patient_name_warning_does_not_invalidate() {
    let outcome = validate(&json!({
        "resourceType": "Patient",
        "name": [{ "given": ["Ann"] }, { "text": "Ann Smith" }]
    }));
    assert!(outcome.valid);
    assert_eq!(
        warnings(&outcome),
        vec!["Patient.name[1]: Should have either family or given name"]
    );
}

// ============================================================================
// Observation
// ============================================================================

#[test]
fn bare_observation_has_exactly_three_errors() {
    let outcome = validate(&json!({ "resourceType": "Observation" }));
    assert!(!outcome.valid);
    assert_eq!(outcome.error_count(), 3);
    let errs = errors(&outcome);
    assert!(errs.iter().any(|e| e.contains("status")));
    assert!(errs.iter().any(|e| e.contains("code")));
    assert!(errs.iter().any(|e| e.contains("subject")));
}

#[test]
fn observation_reference_without_type_warns() {
    let outcome = validate(&json!({
        "resourceType": "Observation",
        "status": "preliminary",
        "code": { "text": "Heart rate" },
        "subject": { "reference": "example" }
    }));
    assert!(outcome.valid);
    assert_eq!(outcome.warning_count(), 1);
}

// ============================================================================
// Bundle
// ============================================================================

#[test]
fn bundle_propagates_nested_errors_with_prefix() {
    let outcome = validate(&json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{ "resource": { "resourceType": "Observation", "status": "bogus" } }]
    }));

    assert!(!outcome.valid);
    let errs = errors(&outcome);
    assert_eq!(errs.len(), 3);
    assert!(errs.iter().all(|e| e.starts_with("Bundle.entry[0]: ")));
    assert!(errs[0].contains("Invalid status: 'bogus'"));
    assert_eq!(errs[1], "Bundle.entry[0]: Missing required field: code");
}

/// Known quirk: nested warnings are dropped by the enclosing Bundle while
/// nested errors propagate. Kept as-is on purpose.
#[test]
fn bundle_drops_nested_warnings_known_quirk() {
    let nested = json!({
        "resourceType": "Observation",
        "subject": { "reference": "no-type-prefix" }
    });
    let standalone = validate(&nested);
    assert_eq!(standalone.warning_count(), 1);

    let outcome = validate(&json!({
        "resourceType": "Bundle",
        "type": "batch",
        "entry": [{ "resource": nested }]
    }));
    assert!(!outcome.valid);
    assert_eq!(outcome.error_count(), 2);
    assert_eq!(outcome.warning_count(), 0);
    let result = outcome.to_result();
    assert!(result
        .errors
        .iter()
        .chain(result.warnings.iter())
        .all(|m| !m.contains("no-type-prefix")));
}

#[test]
fn bundle_without_type_and_entries() {
    let outcome = validate(&json!({ "resourceType": "Bundle" }));
    assert_eq!(errors(&outcome), vec!["Missing required field: type"]);
}

#[test]
fn bundle_null_entry_resource_counts_as_absent() {
    let outcome = validate(&json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{ "resource": null }]
    }));
    assert!(outcome.valid, "{outcome:?}");
    assert_eq!(outcome.issues.len(), 0);
}

// ============================================================================
// Examples and batch
// ============================================================================

#[test]
fn canned_examples_validate_cleanly() {
    for rt in fhirkit_models::example_resource_types() {
        let example = fhirkit_models::generate_example(rt).unwrap();
        let outcome = validate(&example);
        assert!(outcome.valid, "{rt} example invalid: {outcome:?}");
        assert!(outcome.issues.is_empty(), "{rt} example has issues: {outcome:?}");
    }
    assert!(fhirkit_models::generate_example("Foo").is_none());
}

#[test]
fn batch_preserves_order() {
    let docs: Vec<Value> = vec![
        json!({ "resourceType": "Patient" }),
        json!({}),
        json!({ "resourceType": "Observation" }),
    ];
    let results: Vec<ValidationResult> = validate_batch(&docs).iter().map(|o| o.to_result()).collect();
    assert_eq!(
        results.iter().map(|r| r.valid).collect::<Vec<_>>(),
        vec![true, false, false]
    );
}

#[test]
fn validation_is_deterministic() {
    let doc = json!({
        "resourceType": "Bundle",
        "id": "b/1",
        "entry": [{ "resource": { "resourceType": "Patient", "gender": "?" } }]
    });
    assert_eq!(validate(&doc), validate(&doc));
}
