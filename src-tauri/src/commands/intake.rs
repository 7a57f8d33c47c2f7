//! Assessment form: Tauri IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::intake::{self, FormOptions, Submission};
use crate::models::IntakeForm;

/// Radio and checklist options for the form (static data).
#[tauri::command]
pub fn get_form_options() -> FormOptions {
    intake::form_options()
}

/// Validates the form, commits it and moves to the results screen.
/// A rejected form leaves the wizard on the intake screen.
#[tauri::command]
pub fn submit_intake(
    form: IntakeForm,
    state: State<'_, Arc<CoreState>>,
) -> Result<Submission, String> {
    state.submit_intake(&form).map_err(|e| e.to_string())
}
