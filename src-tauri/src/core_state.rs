//! Application state shared by every IPC command.
//!
//! `CoreState` owns the wizard session behind an `RwLock` together with
//! the platform seams used by the doctor actions. Transitions are short
//! synchronous critical sections; external actions run with the lock
//! released.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::actions::{
    self, ActionError, Clipboard, CopyOutcome, DirectionsOutcome, SystemClipboard, SystemOpener,
    UrlOpener,
};
use crate::analysis::AnalysisReport;
use crate::catalog::{self, CatalogError};
use crate::intake::Submission;
use crate::models::IntakeForm;
use crate::navigation::{NavEvent, NavigationError, View, WizardError, WizardSession};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    /// Current screen and committed intake. `None` intake on the form.
    session: RwLock<WizardSession>,
    opener: Box<dyn UrlOpener>,
    clipboard: Box<dyn Clipboard>,
}

impl CoreState {
    /// State wired to the desktop's URL handler and clipboard.
    pub fn new() -> Self {
        Self::with_platform(Box::new(SystemOpener), Box::new(SystemClipboard))
    }

    pub fn with_platform(opener: Box<dyn UrlOpener>, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            session: RwLock::new(WizardSession::new()),
            opener,
            clipboard,
        }
    }

    // ── Session access ──────────────────────────────────────

    pub fn read_session(&self) -> Result<RwLockReadGuard<'_, WizardSession>, CoreError> {
        self.session.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_session(&self) -> Result<RwLockWriteGuard<'_, WizardSession>, CoreError> {
        self.session.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn current_view(&self) -> Result<View, CoreError> {
        Ok(self.read_session()?.view())
    }

    // ── Wizard transitions ──────────────────────────────────

    pub fn submit_intake(&self, form: &IntakeForm) -> Result<Submission, CoreError> {
        Ok(self.write_session()?.submit(form)?)
    }

    pub fn navigate(&self, event: NavEvent) -> Result<View, CoreError> {
        Ok(self.write_session()?.navigate(event)?)
    }

    pub fn start_over(&self) -> Result<(), CoreError> {
        self.write_session()?.start_over();
        Ok(())
    }

    pub fn analysis(&self) -> Result<AnalysisReport, CoreError> {
        Ok(self.read_session()?.analysis()?)
    }

    // ── Doctor actions (lock not held) ──────────────────────

    pub fn call_doctor(&self, doctor_id: &str) -> Result<String, CoreError> {
        let doctor = catalog::find_doctor(doctor_id)?;
        Ok(actions::call_doctor(self.opener.as_ref(), doctor.phone)?)
    }

    pub fn directions(&self, doctor_id: &str) -> Result<DirectionsOutcome, CoreError> {
        let doctor = catalog::find_doctor(doctor_id)?;
        Ok(actions::open_directions(self.opener.as_ref(), doctor.name, doctor.address))
    }

    pub fn copy_address(&self, doctor_id: &str) -> Result<CopyOutcome, CoreError> {
        let doctor = catalog::find_doctor(doctor_id)?;
        Ok(actions::copy_address(self.clipboard.as_ref(), doctor.address))
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// CoreError
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Could not start the call: {0}")]
    Action(#[from] ActionError),
}

impl From<NavigationError> for CoreError {
    fn from(e: NavigationError) -> Self {
        CoreError::Wizard(WizardError::Navigation(e))
    }
}
