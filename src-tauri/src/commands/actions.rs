//! Doctor card buttons: Tauri IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::actions::{CopyOutcome, DirectionsOutcome};
use crate::core_state::CoreState;

/// "Call Now". Returns the `tel:` URI handed to the platform.
#[tauri::command]
pub fn call_doctor(
    doctor_id: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<String, String> {
    state.call_doctor(&doctor_id).map_err(|e| e.to_string())
}

/// "Get Directions". Falls back to a list of map links, never errors
/// for a known doctor.
#[tauri::command]
pub fn get_directions(
    doctor_id: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<DirectionsOutcome, String> {
    state.directions(&doctor_id).map_err(|e| e.to_string())
}

/// "Copy Address". Falls back to returning the address as text.
#[tauri::command]
pub fn copy_doctor_address(
    doctor_id: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<CopyOutcome, String> {
    state.copy_address(&doctor_id).map_err(|e| e.to_string())
}
