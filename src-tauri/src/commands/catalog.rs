//! Doctor / medicine / remedy lists: Tauri IPC commands.
//!
//! Query arguments are optional and do not filter.

use serde::Serialize;

use crate::catalog::{self, DoctorQuery, MedicineQuery};
use crate::models::{DoctorListing, HomeRemedy, MedicineListing};

#[tauri::command]
pub fn list_doctors(query: Option<DoctorQuery>) -> Vec<DoctorListing> {
    catalog::doctors(&query.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicineScreen {
    pub medicines: Vec<MedicineListing>,
    pub advice: &'static str,
    pub pharmacy_notice: &'static str,
}

#[tauri::command]
pub fn list_medicines(query: Option<MedicineQuery>) -> MedicineScreen {
    MedicineScreen {
        medicines: catalog::medicines(&query.unwrap_or_default()),
        advice: catalog::MEDICINE_ADVICE,
        pharmacy_notice: catalog::PHARMACY_NOTICE,
    }
}

#[tauri::command]
pub fn list_home_remedies() -> Vec<HomeRemedy> {
    catalog::home_remedies().to_vec()
}
