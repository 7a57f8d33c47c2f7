//! Keyword classifier over the free-text symptom description.
//!
//! An ordered rule table, first match wins. Only the symptom text and the
//! self-rated severity are inputs; every other intake field is ignored.

use serde::Serialize;

use crate::models::{RecommendedAction, Severity, SeverityLevel, Tone};

/// Which rule produced a result. Safe to log (carries no patient text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    CommonCold,
    NeedsAttention,
    MildCondition,
}

/// Coarse preliminary assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub condition: String,
    pub severity: SeverityLevel,
    pub confidence: u8,
    pub action: RecommendedAction,
}

/// Fixed outcome attached to a rule, including its presentation text.
#[derive(Debug)]
pub(crate) struct Finding {
    pub rule: RuleId,
    pub condition: &'static str,
    pub severity: SeverityLevel,
    pub confidence: u8,
    pub action: RecommendedAction,
    pub tone: Tone,
    pub description: &'static str,
}

impl Finding {
    pub(crate) fn to_result(&self) -> AnalysisResult {
        AnalysisResult {
            condition: self.condition.to_string(),
            severity: self.severity,
            confidence: self.confidence,
            action: self.action,
        }
    }
}

struct Rule {
    /// Receives the lowercased symptom text.
    matches: fn(&str, Option<Severity>) -> bool,
    finding: Finding,
}

const COMMON_COLD_KEYWORDS: &[&str] = &["headache", "fever", "cold"];
const CARDIAC_KEYWORDS: &[&str] = &["chest", "heart"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

static RULES: &[Rule] = &[
    Rule {
        matches: |text, _| contains_any(text, COMMON_COLD_KEYWORDS),
        finding: Finding {
            rule: RuleId::CommonCold,
            condition: "Common Cold/Headache",
            severity: SeverityLevel::Minor,
            confidence: 85,
            action: RecommendedAction::Minor,
            tone: Tone::Success,
            description: "Based on your symptoms, this appears to be a minor condition that \
                          may resolve with rest and basic care.",
        },
    },
    Rule {
        matches: |text, severity| {
            contains_any(text, CARDIAC_KEYWORDS) || severity == Some(Severity::Severe)
        },
        finding: Finding {
            rule: RuleId::NeedsAttention,
            condition: "Requires Medical Attention",
            severity: SeverityLevel::Serious,
            confidence: 75,
            action: RecommendedAction::Doctor,
            tone: Tone::Warning,
            description: "Your symptoms indicate a condition that should be evaluated by a \
                          healthcare professional.",
        },
    },
];

static FALLBACK: Finding = Finding {
    rule: RuleId::MildCondition,
    condition: "Mild Condition",
    severity: SeverityLevel::Minor,
    confidence: 80,
    action: RecommendedAction::Minor,
    tone: Tone::Success,
    description: "Your symptoms suggest a minor condition that may be manageable with home care.",
};

/// Resolve the finding for the given inputs.
pub(crate) fn find(symptoms: &str, severity: Option<Severity>) -> &'static Finding {
    let text = symptoms.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&text, severity))
        .map(|rule| &rule.finding)
        .unwrap_or(&FALLBACK)
}

/// Classify symptom text plus severity. Total: every input yields a result.
pub fn classify(symptoms: &str, severity: Option<Severity>) -> AnalysisResult {
    find(symptoms, severity).to_result()
}
