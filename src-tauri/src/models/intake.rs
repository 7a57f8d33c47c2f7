use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Gender, Severity, SymptomDuration, UrgentSymptom};

/// Editable intake draft, as filled in on the assessment screen.
///
/// Every field has a default so the frontend may send a partial form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub current_symptoms: String,
    pub duration: Option<SymptomDuration>,
    pub severity: Option<Severity>,
    pub medical_history: String,
    pub medications: String,
    pub allergies: String,
    pub urgent_flags: BTreeSet<UrgentSymptom>,
}

impl IntakeForm {
    /// Check or uncheck one item of the urgent-symptom checklist.
    pub fn set_urgent(&mut self, symptom: UrgentSymptom, checked: bool) {
        if checked {
            self.urgent_flags.insert(symptom);
        } else {
            self.urgent_flags.remove(&symptom);
        }
    }
}

/// A committed intake. Immutable for the rest of the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientIntake {
    pub assessment_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub current_symptoms: String,
    pub duration: Option<SymptomDuration>,
    pub severity: Option<Severity>,
    pub medical_history: String,
    pub medications: String,
    pub allergies: String,
    pub urgent_flags: BTreeSet<UrgentSymptom>,
}

impl PatientIntake {
    /// Freeze a draft under a fresh assessment id.
    pub fn commit(form: &IntakeForm) -> Self {
        Self {
            assessment_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: form.name.clone(),
            age: form.age.clone(),
            gender: form.gender,
            current_symptoms: form.current_symptoms.clone(),
            duration: form.duration,
            severity: form.severity,
            medical_history: form.medical_history.clone(),
            medications: form.medications.clone(),
            allergies: form.allergies.clone(),
            urgent_flags: form.urgent_flags.clone(),
        }
    }

    pub fn has_urgent_flags(&self) -> bool {
        !self.urgent_flags.is_empty()
    }
}
