pub mod actions;
pub mod catalog;
pub mod intake;
pub mod navigation;

use serde::Serialize;

use crate::catalog as reference;
use crate::config;
use crate::models::EmergencyContact;

/// Health check IPC command: verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Header and footer content shared by every screen.
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
    pub emergency_footer: &'static str,
    pub emergency_contacts: &'static [EmergencyContact],
}

#[tauri::command]
pub fn get_app_info() -> AppInfo {
    AppInfo {
        name: config::APP_NAME,
        tagline: config::APP_TAGLINE,
        version: config::APP_VERSION,
        emergency_footer: config::EMERGENCY_FOOTER,
        emergency_contacts: reference::emergency_contacts(),
    }
}
