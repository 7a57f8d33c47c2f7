use serde::{Deserialize, Serialize};

/// A wire string that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The literal doubles as the serde wire name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $s)]
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ═══════════════════════════════════════════
// Intake form choices
// ═══════════════════════════════════════════

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(SymptomDuration {
    Hours => "hours",
    OneToTwoDays => "1-2days",
    Week => "week",
    Weeks => "weeks",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

// Declaration order is checklist order (BTreeSet iteration relies on it).
str_enum!(UrgentSymptom {
    ChestPain => "chest_pain",
    DifficultyBreathing => "difficulty_breathing",
    SevereHeadache => "severe_headache",
    HighFever => "high_fever",
    SuddenWeakness => "sudden_weakness",
    SevereAbdominalPain => "severe_abdominal_pain",
    HeavyBleeding => "heavy_bleeding",
    LossOfConsciousness => "loss_of_consciousness",
});

str_enum!(IntakeField {
    Name => "name",
    Age => "age",
    CurrentSymptoms => "current_symptoms",
});

// ═══════════════════════════════════════════
// Analysis outcome
// ═══════════════════════════════════════════

str_enum!(SeverityLevel {
    Minor => "Minor",
    Serious => "Serious",
});

str_enum!(RecommendedAction {
    Minor => "minor",
    Doctor => "doctor",
});

str_enum!(Tone {
    Success => "success",
    Warning => "warning",
});

// ═══════════════════════════════════════════
// Presentation
// ═══════════════════════════════════════════

str_enum!(Icon {
    Stethoscope => "stethoscope",
    Heart => "heart",
    Brain => "brain",
    Eye => "eye",
    Pill => "pill",
    Thermometer => "thermometer",
    Package => "package",
});

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl SymptomDuration {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hours => "Few hours",
            Self::OneToTwoDays => "1-2 days",
            Self::Week => "About a week",
            Self::Weeks => "Several weeks",
        }
    }
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild (1-3)",
            Self::Moderate => "Moderate (4-6)",
            Self::Severe => "Severe (7-10)",
        }
    }
}

impl UrgentSymptom {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChestPain => "Chest pain or pressure",
            Self::DifficultyBreathing => "Difficulty breathing",
            Self::SevereHeadache => "Severe headache",
            Self::HighFever => "High fever (above 102°F)",
            Self::SuddenWeakness => "Sudden weakness or numbness",
            Self::SevereAbdominalPain => "Severe abdominal pain",
            Self::HeavyBleeding => "Heavy bleeding",
            Self::LossOfConsciousness => "Loss of consciousness",
        }
    }
}

impl IntakeField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Age => "Age",
            Self::CurrentSymptoms => "Symptoms",
        }
    }
}
