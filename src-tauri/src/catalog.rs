//! Static reference catalogs: doctors, over-the-counter medicines and
//! home remedies. Read-only for the life of the process.
//!
//! The doctor and medicine screens carry location / specialty / category
//! inputs. They are accepted and logged but never narrow the lists.

use serde::Deserialize;

use crate::models::{
    DoctorListing, DoctorRecord, EmergencyContact, HomeRemedy, Icon, MedicineListing,
    MedicineRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown doctor: {0}")]
    UnknownDoctor(String),
}

// ═══════════════════════════════════════════
// Data
// ═══════════════════════════════════════════

static DOCTORS: &[DoctorRecord] = &[
    DoctorRecord {
        id: "1",
        name: "Dr. Rajesh Kumar",
        specialty: "General Medicine",
        rating: 4.8,
        experience_years: 15,
        distance: "2.5 km",
        address: "City Hospital, Main Road, District Center",
        phone: "+91-98765-43210",
        availability: "Available Today",
        consultation_fee: "₹500",
        hospital: "City Hospital",
        specialties: &["General Medicine", "Internal Medicine"],
    },
    DoctorRecord {
        id: "2",
        name: "Dr. Priya Sharma",
        specialty: "Family Medicine",
        rating: 4.9,
        experience_years: 12,
        distance: "3.2 km",
        address: "Rural Health Center, Village Road",
        phone: "+91-98765-43211",
        availability: "Available Tomorrow",
        consultation_fee: "₹400",
        hospital: "Rural Health Center",
        specialties: &["Family Medicine", "Pediatrics"],
    },
    DoctorRecord {
        id: "3",
        name: "Dr. Amit Patel",
        specialty: "Cardiology",
        rating: 4.7,
        experience_years: 20,
        distance: "5.8 km",
        address: "District Hospital, Medical Complex",
        phone: "+91-98765-43212",
        availability: "Available in 2 days",
        consultation_fee: "₹800",
        hospital: "District Hospital",
        specialties: &["Cardiology", "Heart Surgery"],
    },
    DoctorRecord {
        id: "4",
        name: "Dr. Sunita Reddy",
        specialty: "Neurology",
        rating: 4.6,
        experience_years: 18,
        distance: "8.1 km",
        address: "Specialty Clinic, Medical Plaza",
        phone: "+91-98765-43213",
        availability: "Available Today",
        consultation_fee: "₹700",
        hospital: "Specialty Clinic",
        specialties: &["Neurology", "Headache Treatment"],
    },
];

static MEDICINES: &[MedicineRecord] = &[
    MedicineRecord {
        id: "1",
        name: "Paracetamol",
        generic_name: "Acetaminophen",
        form: "Tablet",
        dosage: "500mg",
        frequency: "Every 6-8 hours",
        duration: "3-5 days",
        price: "₹25",
        description: "Effective for fever, headache, and mild pain relief",
        side_effects: &["Nausea (rare)", "Skin rash (rare)"],
        warnings: &["Do not exceed 4g in 24 hours", "Avoid alcohol"],
        category: "Pain Relief",
    },
    MedicineRecord {
        id: "2",
        name: "Ibuprofen",
        generic_name: "Ibuprofen",
        form: "Tablet",
        dosage: "200mg",
        frequency: "Every 8 hours",
        duration: "3-5 days",
        price: "₹35",
        description: "Anti-inflammatory drug for pain, fever, and inflammation",
        side_effects: &["Stomach upset", "Drowsiness"],
        warnings: &["Take with food", "Not for stomach ulcer patients"],
        category: "Pain Relief",
    },
    MedicineRecord {
        id: "3",
        name: "Cetirizine",
        generic_name: "Cetirizine HCl",
        form: "Tablet",
        dosage: "10mg",
        frequency: "Once daily",
        duration: "5-7 days",
        price: "₹45",
        description: "Antihistamine for allergies, cold symptoms, and runny nose",
        side_effects: &["Drowsiness", "Dry mouth"],
        warnings: &["May cause sleepiness", "Avoid driving"],
        category: "Allergy Relief",
    },
    MedicineRecord {
        id: "4",
        name: "ORS Solution",
        generic_name: "Oral Rehydration Salt",
        form: "Powder",
        dosage: "1 sachet in 200ml water",
        frequency: "As needed",
        duration: "Until symptoms improve",
        price: "₹15",
        description: "Rehydration solution for dehydration, fever, and weakness",
        side_effects: &["None reported"],
        warnings: &["Prepare fresh solution", "Complete within 24 hours"],
        category: "Hydration",
    },
];

static HOME_REMEDIES: &[HomeRemedy] = &[
    HomeRemedy {
        name: "Ginger Tea",
        description: "Natural remedy for nausea, cold, and digestive issues",
        preparation: "Boil fresh ginger in water for 10-15 minutes",
        benefits: &["Reduces nausea", "Soothes sore throat", "Aids digestion"],
    },
    HomeRemedy {
        name: "Honey & Lemon",
        description: "Traditional remedy for cough and sore throat",
        preparation: "Mix 1 tsp honey with warm water and lemon juice",
        benefits: &["Soothes throat", "Natural antibacterial", "Boosts immunity"],
    },
    HomeRemedy {
        name: "Steam Inhalation",
        description: "Helps with congestion and respiratory issues",
        preparation: "Inhale steam from hot water for 5-10 minutes",
        benefits: &["Clears nasal congestion", "Soothes airways", "Natural decongestant"],
    },
];

static EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact { service: "Ambulance", number: "108" },
    EmergencyContact { service: "Police", number: "100" },
    EmergencyContact { service: "Fire", number: "101" },
];

pub const MEDICINE_ADVICE: &str = "These are general suggestions based on common symptoms. \
    Always consult a pharmacist or doctor before taking any medication, especially if you have \
    allergies, existing conditions, or are taking other medications.";

pub const PHARMACY_NOTICE: &str = "Always verify the pharmacy is licensed and the medicines \
    are genuine. Keep prescriptions and medical records handy when ordering.";

// ═══════════════════════════════════════════
// Icon lookup tables (first match wins)
// ═══════════════════════════════════════════

static SPECIALTY_ICONS: &[(&[&str], Icon)] = &[
    (&["Cardiology", "Heart"], Icon::Heart),
    (&["Neurology", "Brain"], Icon::Brain),
    (&["Eye", "Ophthalmology"], Icon::Eye),
];

static CATEGORY_ICONS: &[(&str, Icon)] = &[
    ("Pain Relief", Icon::Heart),
    ("Allergy Relief", Icon::Thermometer),
    ("Hydration", Icon::Package),
];

/// Icon for a doctor's specialty (substring match).
pub fn specialty_icon(specialty: &str) -> Icon {
    SPECIALTY_ICONS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| specialty.contains(n)))
        .map_or(Icon::Stethoscope, |(_, icon)| *icon)
}

/// Icon for a medicine category (exact match).
pub fn medicine_category_icon(category: &str) -> Icon {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(Icon::Pill, |(_, icon)| *icon)
}

// ═══════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════

/// Inputs of the "Search Doctors" card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DoctorQuery {
    pub location: Option<String>,
    pub specialty: Option<String>,
}

/// Inputs of the medicine category selector.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MedicineQuery {
    pub category: Option<String>,
}

/// All doctors in catalog order. The query does not filter.
pub fn doctors(query: &DoctorQuery) -> Vec<DoctorListing> {
    tracing::debug!(
        location_set = query.location.is_some(),
        specialty = ?query.specialty,
        "Listing doctors (filters not applied)"
    );
    DOCTORS
        .iter()
        .map(|doctor| DoctorListing {
            doctor: doctor.clone(),
            icon: specialty_icon(doctor.specialty),
        })
        .collect()
}

/// All medicines in catalog order. The query does not filter.
pub fn medicines(query: &MedicineQuery) -> Vec<MedicineListing> {
    tracing::debug!(category = ?query.category, "Listing medicines (filters not applied)");
    MEDICINES
        .iter()
        .map(|medicine| MedicineListing {
            medicine: medicine.clone(),
            icon: medicine_category_icon(medicine.category),
        })
        .collect()
}

pub fn home_remedies() -> &'static [HomeRemedy] {
    HOME_REMEDIES
}

pub fn emergency_contacts() -> &'static [EmergencyContact] {
    EMERGENCY_CONTACTS
}

pub fn find_doctor(id: &str) -> Result<&'static DoctorRecord, CatalogError> {
    DOCTORS
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| CatalogError::UnknownDoctor(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctors_ignore_filters() {
        let all = doctors(&DoctorQuery::default());
        let filtered = doctors(&DoctorQuery {
            location: Some("Nowhere".into()),
            specialty: Some("Dermatology".into()),
        });
        assert_eq!(all.len(), 4);
        let ids: Vec<_> = all.iter().map(|l| l.doctor.id).collect();
        let filtered_ids: Vec<_> = filtered.iter().map(|l| l.doctor.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(ids, filtered_ids);
    }

    #[test]
    fn medicines_ignore_category() {
        let listed = medicines(&MedicineQuery { category: Some("Hydration".into()) });
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].medicine.name, "Paracetamol");
    }

    #[test]
    fn specialty_icons_first_match_wins() {
        assert_eq!(specialty_icon("Cardiology"), Icon::Heart);
        assert_eq!(specialty_icon("Heart Surgery"), Icon::Heart);
        assert_eq!(specialty_icon("Neurology"), Icon::Brain);
        assert_eq!(specialty_icon("Pediatric Ophthalmology"), Icon::Eye);
        assert_eq!(specialty_icon("General Medicine"), Icon::Stethoscope);
        // Both "Heart" and "Brain" present: the heart entry comes first.
        assert_eq!(specialty_icon("Heart and Brain Institute"), Icon::Heart);
    }

    #[test]
    fn doctor_listings_carry_icons() {
        let listed = doctors(&DoctorQuery::default());
        let icons: Vec<_> = listed.iter().map(|l| l.icon).collect();
        assert_eq!(
            icons,
            vec![Icon::Stethoscope, Icon::Stethoscope, Icon::Heart, Icon::Brain]
        );
    }

    #[test]
    fn category_icons() {
        assert_eq!(medicine_category_icon("Pain Relief"), Icon::Heart);
        assert_eq!(medicine_category_icon("Allergy Relief"), Icon::Thermometer);
        assert_eq!(medicine_category_icon("Hydration"), Icon::Package);
        assert_eq!(medicine_category_icon("Vitamins"), Icon::Pill);
    }

    #[test]
    fn find_doctor_by_id() {
        assert_eq!(find_doctor("3").unwrap().name, "Dr. Amit Patel");
        let err = find_doctor("99").unwrap_err();
        assert_eq!(err.to_string(), "Unknown doctor: 99");
    }

    #[test]
    fn emergency_numbers() {
        let numbers: Vec<_> = emergency_contacts().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec!["108", "100", "101"]);
    }

    #[test]
    fn listing_serializes_flat() {
        let listed = doctors(&DoctorQuery::default());
        let json = serde_json::to_value(&listed[2]).unwrap();
        assert_eq!(json["name"], "Dr. Amit Patel");
        assert_eq!(json["icon"], "heart");
        assert_eq!(json["specialties"], serde_json::json!(["Cardiology", "Heart Surgery"]));
        assert_eq!(home_remedies().len(), 3);
    }
}
