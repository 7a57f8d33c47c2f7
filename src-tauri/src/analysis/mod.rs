//! Results screen: classification of the committed intake plus the
//! summary the patient sees next to it.
//!
//! Nothing here is cached. The report is rebuilt from the intake on every
//! read.

pub mod classify;

use serde::Serialize;
use uuid::Uuid;

use crate::models::{PatientIntake, Tone};

pub use classify::{classify, AnalysisResult, RuleId};

pub const NOT_SPECIFIED: &str = "Not specified";

pub const ASSESSMENT_NOTICE: &str = "This is a preliminary assessment and should not replace \
    professional medical advice. If your symptoms worsen or you have concerns, please consult \
    with a healthcare provider immediately.";

/// Duration / severity / age cards under the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeSummary {
    pub duration: String,
    pub severity: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub assessment_id: Uuid,
    pub patient_name: String,
    pub rule: RuleId,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub description: &'static str,
    pub tone: Tone,
    pub summary: IntakeSummary,
    pub notice: &'static str,
}

pub fn summarize(intake: &PatientIntake) -> IntakeSummary {
    IntakeSummary {
        duration: intake
            .duration
            .map_or(NOT_SPECIFIED, |d| d.label())
            .to_string(),
        severity: intake
            .severity
            .map_or(NOT_SPECIFIED, |s| s.label())
            .to_string(),
        age: format!("{} years", intake.age),
    }
}

/// Build the results screen for a committed intake.
pub fn analyze(intake: &PatientIntake) -> AnalysisReport {
    let finding = classify::find(&intake.current_symptoms, intake.severity);

    tracing::debug!(
        assessment_id = %intake.assessment_id,
        rule = ?finding.rule,
        confidence = finding.confidence,
        "Symptoms classified"
    );

    AnalysisReport {
        assessment_id: intake.assessment_id,
        patient_name: intake.name.clone(),
        rule: finding.rule,
        result: finding.to_result(),
        description: finding.description,
        tone: finding.tone,
        summary: summarize(intake),
        notice: ASSESSMENT_NOTICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        IntakeForm, RecommendedAction, Severity, SymptomDuration, UrgentSymptom,
    };

    fn intake(symptoms: &str, severity: Option<Severity>) -> PatientIntake {
        PatientIntake::commit(&IntakeForm {
            name: "Meena".into(),
            age: "58".into(),
            current_symptoms: symptoms.into(),
            severity,
            ..Default::default()
        })
    }

    #[test]
    fn report_reflects_classification() {
        let report = analyze(&intake("pressure in my chest", Some(Severity::Moderate)));
        assert_eq!(report.rule, RuleId::NeedsAttention);
        assert_eq!(report.result.action, RecommendedAction::Doctor);
        assert_eq!(report.tone, Tone::Warning);
        assert_eq!(report.patient_name, "Meena");
    }

    #[test]
    fn report_result_matches_classifier_for_every_rule() {
        for (symptoms, severity, rule) in [
            ("fever and chills", None, RuleId::CommonCold),
            ("tight chest", Some(Severity::Mild), RuleId::NeedsAttention),
            ("tired", Some(Severity::Severe), RuleId::NeedsAttention),
            ("tired", Some(Severity::Mild), RuleId::MildCondition),
        ] {
            let report = analyze(&intake(symptoms, severity));
            assert_eq!(report.rule, rule);
            assert_eq!(report.result, classify(symptoms, severity));
        }
    }

    #[test]
    fn unset_choices_display_not_specified() {
        let summary = summarize(&intake("tired", None));
        assert_eq!(summary.duration, NOT_SPECIFIED);
        assert_eq!(summary.severity, NOT_SPECIFIED);
        assert_eq!(summary.age, "58 years");
    }

    #[test]
    fn set_choices_display_labels() {
        let mut committed = intake("tired", Some(Severity::Mild));
        committed.duration = Some(SymptomDuration::Weeks);
        let summary = summarize(&committed);
        assert_eq!(summary.duration, "Several weeks");
        assert_eq!(summary.severity, "Mild (1-3)");
    }

    #[test]
    fn only_symptoms_and_severity_affect_result() {
        let plain = intake("tired and achy", Some(Severity::Moderate));
        let mut loaded = plain.clone();
        loaded.age = "91".into();
        loaded.medical_history = "Heart surgery in 2019".into();
        loaded.medications = "Aspirin".into();
        loaded.allergies = "Penicillin".into();
        loaded.duration = Some(SymptomDuration::Weeks);
        loaded.urgent_flags.insert(UrgentSymptom::ChestPain);

        assert_eq!(analyze(&plain).result, analyze(&loaded).result);
        assert_eq!(analyze(&loaded).rule, RuleId::MildCondition);
    }

    #[test]
    fn report_serializes_flat_result_fields() {
        let json = serde_json::to_value(analyze(&intake("fever", None))).unwrap();
        assert_eq!(json["condition"], "Common Cold/Headache");
        assert_eq!(json["confidence"], 85);
        assert_eq!(json["action"], "minor");
        assert_eq!(json["severity"], "Minor");
        assert_eq!(json["rule"], "common_cold");
    }
}
