use std::fmt;
use crate::error::{Error, Result};
use crate::font::{load_available_fonts, FontRegistry};
use crate::host::DocumentModel;
use super::applier::{apply_font_mapping, ApplyReport};
use super::collector::collect_used_fonts;
use super::presenter::{Decision, MappingForm, MappingPresenter};

/// Where a remapping run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Collecting,
    Presenting,
    Cancelled,
    Applying,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Collecting => write!(f, "collecting"),
            SessionState::Presenting => write!(f, "presenting"),
            SessionState::Cancelled => write!(f, "cancelled"),
            SessionState::Applying => write!(f, "applying"),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Cancelled,
    Applied {
        report: ApplyReport,
        show_report: bool,
    },
}

/// Drives one collect → present → apply run. Nothing carries over between
/// runs: every run re-scans the live document.
#[derive(Debug)]
pub struct RemapSession {
    state: SessionState,
    trail: Vec<SessionState>,
}

impl Default for RemapSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RemapSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            trail: vec![SessionState::Idle],
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// States visited so far, starting with `Idle`
    pub fn trail(&self) -> &[SessionState] {
        &self.trail
    }

    fn enter(&mut self, next: SessionState) {
        log::debug!("Session {} -> {}", self.state, next);
        self.state = next;
        self.trail.push(next);
    }

    pub fn run<D, P>(
        &mut self,
        doc: &mut D,
        registry: &dyn FontRegistry,
        presenter: &mut P,
    ) -> Result<SessionOutcome>
    where
        D: DocumentModel + ?Sized,
        P: MappingPresenter + ?Sized,
    {
        if doc.item_count() == 0 {
            return Err(Error::NoProject);
        }

        self.enter(SessionState::Collecting);
        let used = collect_used_fonts(&*doc);
        let available = load_available_fonts(registry);

        self.enter(SessionState::Presenting);
        let decision = presenter.present(MappingForm::new(&used, available));
        let decision = match decision {
            Ok(decision) => decision,
            Err(e) => {
                self.enter(SessionState::Idle);
                return Err(e);
            }
        };

        let outcome = match decision {
            Decision::Cancelled => {
                self.enter(SessionState::Cancelled);
                SessionOutcome::Cancelled
            }
            Decision::Confirmed {
                mapping,
                show_report,
            } => {
                self.enter(SessionState::Applying);
                let report = apply_font_mapping(doc, &mapping);
                SessionOutcome::Applied {
                    report,
                    show_report,
                }
            }
        };

        self.enter(SessionState::Idle);
        Ok(outcome)
    }
}
