//! Known FHIR resource types
//!
//! Compile-time perfect hash set of FHIR R4 resource type names. Membership is
//! informational only: a resource whose `resourceType` is missing from this set
//! is still validated, it just earns an "unknown resource type" warning.

use phf::phf_set;

/// FHIR R4 resource type names.
pub static KNOWN_RESOURCE_TYPES: phf::Set<&'static str> = phf_set! {
    // Foundation
    "Binary",
    "Bundle",
    "CapabilityStatement",
    "CodeSystem",
    "CompartmentDefinition",
    "ConceptMap",
    "GraphDefinition",
    "ImplementationGuide",
    "MessageDefinition",
    "MessageHeader",
    "NamingSystem",
    "OperationDefinition",
    "OperationOutcome",
    "Parameters",
    "SearchParameter",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "TerminologyCapabilities",
    "ValueSet",
    // Base
    "Device",
    "Endpoint",
    "Group",
    "HealthcareService",
    "Location",
    "Organization",
    "OrganizationAffiliation",
    "Patient",
    "Person",
    "Practitioner",
    "PractitionerRole",
    "RelatedPerson",
    "Schedule",
    "Slot",
    "Appointment",
    "AppointmentResponse",
    "Encounter",
    "EpisodeOfCare",
    "Task",
    "Communication",
    "CommunicationRequest",
    "AuditEvent",
    "Consent",
    "Provenance",
    "Composition",
    "DocumentManifest",
    "DocumentReference",
    "List",
    "Basic",
    "Linkage",
    // Clinical
    "AllergyIntolerance",
    "AdverseEvent",
    "CarePlan",
    "CareTeam",
    "ClinicalImpression",
    "Condition",
    "DetectedIssue",
    "FamilyMemberHistory",
    "Goal",
    "Procedure",
    "RiskAssessment",
    "ServiceRequest",
    "NutritionOrder",
    "VisionPrescription",
    // Diagnostics
    "BodyStructure",
    "DiagnosticReport",
    "ImagingStudy",
    "Media",
    "MolecularSequence",
    "Observation",
    "QuestionnaireResponse",
    "Specimen",
    // Medications
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    // Workflow and definitional
    "ActivityDefinition",
    "Library",
    "Measure",
    "MeasureReport",
    "PlanDefinition",
    "Questionnaire",
    "RequestGroup",
    // Financial
    "Account",
    "ChargeItem",
    "Claim",
    "ClaimResponse",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "ExplanationOfBenefit",
    "Invoice",
    "PaymentNotice",
    "PaymentReconciliation",
};

/// Returns true if `resource_type` names a known FHIR R4 resource type.
///
/// The comparison is exact: FHIR type names are case-sensitive.
pub fn is_known_resource_type(resource_type: &str) -> bool {
    KNOWN_RESOURCE_TYPES.contains(resource_type)
}

/// All known resource type names, sorted alphabetically.
pub fn known_resource_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = KNOWN_RESOURCE_TYPES.iter().copied().collect();
    types.sort_unstable();
    types
}
