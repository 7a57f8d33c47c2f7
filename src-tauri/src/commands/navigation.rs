//! View router: Tauri IPC commands.

use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::analysis::AnalysisReport;
use crate::core_state::CoreState;
use crate::navigation::{NavEvent, View};

#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub view: View,
    pub show_new_assessment: bool,
}

impl From<View> for ViewState {
    fn from(view: View) -> Self {
        Self {
            view,
            show_new_assessment: view.shows_new_assessment(),
        }
    }
}

#[tauri::command]
pub fn get_current_view(state: State<'_, Arc<CoreState>>) -> Result<ViewState, String> {
    state
        .current_view()
        .map(ViewState::from)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn navigate(
    event: NavEvent,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewState, String> {
    state
        .navigate(event)
        .map(ViewState::from)
        .map_err(|e| e.to_string())
}

/// "New Assessment" / "Start New Assessment": discards the intake.
#[tauri::command]
pub fn start_over(state: State<'_, Arc<CoreState>>) -> Result<ViewState, String> {
    state.start_over().map_err(|e| e.to_string())?;
    Ok(ViewState::from(View::Intake))
}

#[tauri::command]
pub fn get_analysis(state: State<'_, Arc<CoreState>>) -> Result<AnalysisReport, String> {
    state.analysis().map_err(|e| e.to_string())
}
