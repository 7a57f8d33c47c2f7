//! Health assessment intake: required-field validation, submission and
//! the urgent-symptom advisory.
//!
//! Submission never looks at the urgent checklist for gating. Checked items
//! only add an advisory to the result.

use serde::Serialize;

use crate::models::{
    Gender, IntakeField, IntakeForm, PatientIntake, Severity, SymptomDuration, UrgentSymptom,
};

pub const URGENT_ADVISORY_TITLE: &str = "Urgent Symptoms Detected";
pub const URGENT_ADVISORY_MESSAGE: &str = "Please seek immediate medical attention";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please fill in all required fields: {}", field_labels(.0))]
    MissingFields(Vec<IntakeField>),
}

fn field_labels(fields: &[IntakeField]) -> String {
    fields
        .iter()
        .map(IntakeField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    UrgentSymptoms,
}

/// A non-blocking message surfaced alongside a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub title: &'static str,
    pub message: &'static str,
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub intake: PatientIntake,
    pub advisories: Vec<Advisory>,
}

/// Required fields left empty, in form order. Any entered text counts,
/// including whitespace.
pub fn missing_fields(form: &IntakeForm) -> Vec<IntakeField> {
    [
        (IntakeField::Name, &form.name),
        (IntakeField::Age, &form.age),
        (IntakeField::CurrentSymptoms, &form.current_symptoms),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect()
}

/// Validate the draft and freeze it into a [`PatientIntake`].
///
/// The draft is borrowed, so a rejected submit leaves it exactly as the
/// patient left it.
pub fn submit(form: &IntakeForm) -> Result<Submission, IntakeError> {
    let missing = missing_fields(form);
    if !missing.is_empty() {
        tracing::info!(missing = ?missing, "Intake rejected: required fields empty");
        return Err(IntakeError::MissingFields(missing));
    }

    let intake = PatientIntake::commit(form);

    let mut advisories = Vec::new();
    if intake.has_urgent_flags() {
        tracing::warn!(
            assessment_id = %intake.assessment_id,
            flags = intake.urgent_flags.len(),
            "Urgent symptoms reported"
        );
        advisories.push(Advisory {
            kind: AdvisoryKind::UrgentSymptoms,
            title: URGENT_ADVISORY_TITLE,
            message: URGENT_ADVISORY_MESSAGE,
        });
    }

    tracing::info!(assessment_id = %intake.assessment_id, "Intake submitted");
    Ok(Submission { intake, advisories })
}

// ═══════════════════════════════════════════
// Form options: static data for the view
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub genders: Vec<ChoiceOption>,
    pub durations: Vec<ChoiceOption>,
    pub severities: Vec<ChoiceOption>,
    pub urgent_symptoms: Vec<ChoiceOption>,
    pub required_fields: Vec<ChoiceOption>,
}

pub fn urgent_symptom_checklist() -> Vec<ChoiceOption> {
    UrgentSymptom::ALL
        .iter()
        .map(|s| ChoiceOption {
            value: s.as_str(),
            label: s.label(),
        })
        .collect()
}

pub fn form_options() -> FormOptions {
    FormOptions {
        genders: Gender::ALL
            .iter()
            .map(|g| ChoiceOption { value: g.as_str(), label: g.label() })
            .collect(),
        durations: SymptomDuration::ALL
            .iter()
            .map(|d| ChoiceOption { value: d.as_str(), label: d.label() })
            .collect(),
        severities: Severity::ALL
            .iter()
            .map(|s| ChoiceOption { value: s.as_str(), label: s.label() })
            .collect(),
        urgent_symptoms: urgent_symptom_checklist(),
        required_fields: IntakeField::ALL
            .iter()
            .map(|f| ChoiceOption { value: f.as_str(), label: f.label() })
            .collect(),
    }
}
