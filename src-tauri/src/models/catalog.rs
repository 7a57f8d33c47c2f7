use serde::Serialize;

use super::enums::Icon;

/// A doctor listed on the "Nearby Doctors" screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub experience_years: u8,
    pub distance: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub availability: &'static str,
    pub consultation_fee: &'static str,
    pub hospital: &'static str,
    pub specialties: &'static [&'static str],
}

/// An over-the-counter medicine suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicineRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub generic_name: &'static str,
    pub form: &'static str,
    pub dosage: &'static str,
    pub frequency: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub side_effects: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeRemedy {
    pub name: &'static str,
    pub description: &'static str,
    pub preparation: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
}

/// Doctor row as rendered: the record plus its specialty icon.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorListing {
    #[serde(flatten)]
    pub doctor: DoctorRecord,
    pub icon: Icon,
}

/// Medicine row as rendered: the record plus its category icon.
#[derive(Debug, Clone, Serialize)]
pub struct MedicineListing {
    #[serde(flatten)]
    pub medicine: MedicineRecord,
    pub icon: Icon,
}
