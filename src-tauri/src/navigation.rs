//! Four-screen navigation: intake → results → doctors | medicines → back.
//!
//! `transition` is a pure function over (view, event). `WizardSession`
//! pairs the current view with the committed intake and keeps the two
//! consistent: results are only reachable with an intake on hand, and
//! start-over always drops it.

use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisReport};
use crate::intake::{self, IntakeError, Submission};
use crate::models::{IntakeForm, PatientIntake};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Intake,
    Results,
    Doctors,
    Medicines,
}

impl View {
    /// The header's "New Assessment" link shows everywhere but the form.
    pub fn shows_new_assessment(&self) -> bool {
        *self != View::Intake
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    Submit,
    FindDoctors,
    MedicineSuggestions,
    Back,
    StartOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Cannot {event:?} from the {from:?} screen")]
    InvalidTransition { from: View, event: NavEvent },
    #[error("No assessment in progress")]
    NoIntake,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

pub fn transition(from: View, event: NavEvent) -> Result<View, NavigationError> {
    match (from, event) {
        (_, NavEvent::StartOver) => Ok(View::Intake),
        (View::Intake, NavEvent::Submit) => Ok(View::Results),
        (View::Results, NavEvent::FindDoctors) => Ok(View::Doctors),
        (View::Results, NavEvent::MedicineSuggestions) => Ok(View::Medicines),
        (View::Doctors | View::Medicines, NavEvent::Back) => Ok(View::Results),
        (from, event) => Err(NavigationError::InvalidTransition { from, event }),
    }
}

/// Navigation state plus the intake it was built from.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    view: View,
    intake: Option<PatientIntake>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn intake(&self) -> Option<&PatientIntake> {
        self.intake.as_ref()
    }

    /// Validate and commit the form, then move to results.
    ///
    /// On any error the view and the stored intake are left untouched.
    pub fn submit(&mut self, form: &IntakeForm) -> Result<Submission, WizardError> {
        let next = transition(self.view, NavEvent::Submit)?;
        let submission = intake::submit(form)?;
        self.intake = Some(submission.intake.clone());
        self.view = next;
        Ok(submission)
    }

    /// Apply a navigation event that carries no form data.
    pub fn navigate(&mut self, event: NavEvent) -> Result<View, NavigationError> {
        if event == NavEvent::StartOver {
            self.start_over();
            return Ok(self.view);
        }
        let next = transition(self.view, event)?;
        if next == View::Results && self.intake.is_none() {
            return Err(NavigationError::NoIntake);
        }
        tracing::debug!(from = ?self.view, to = ?next, "View changed");
        self.view = next;
        Ok(next)
    }

    /// Drop the intake and return to a blank form.
    pub fn start_over(&mut self) {
        if let Some(previous) = self.intake.take() {
            tracing::info!(assessment_id = %previous.assessment_id, "Assessment discarded");
        }
        self.view = View::Intake;
    }

    /// Results screen for the stored intake, recomputed on every call.
    pub fn analysis(&self) -> Result<AnalysisReport, NavigationError> {
        self.intake
            .as_ref()
            .map(analysis::analyze)
            .ok_or(NavigationError::NoIntake)
    }
}
