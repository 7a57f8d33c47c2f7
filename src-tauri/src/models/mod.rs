pub mod catalog;
pub mod enums;
pub mod intake;

pub use catalog::{
    DoctorListing, DoctorRecord, EmergencyContact, HomeRemedy, MedicineListing, MedicineRecord,
};
pub use enums::{
    Gender, Icon, IntakeField, InvalidEnum, RecommendedAction, Severity, SeverityLevel,
    SymptomDuration, Tone, UrgentSymptom,
};
pub use intake::{IntakeForm, PatientIntake};
