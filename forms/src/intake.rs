//! Careers intake wizard.
//!
//! DESIGN
//! ======
//! Five fixed steps, each owning a disjoint slice of [`IntakeField`]s. The
//! form is a tagged state (`Editing` on a step, `Submitting`, `Submitted`)
//! so a submit from any step other than the last one has no representation
//! beyond an error. Back navigation never touches the draft; forward
//! navigation is gated on the current step only.
//!
//! The server rebuilds posted applications through [`IntakeForm::resume`],
//! which walks `next()` from the first step, so both sides enforce the same
//! rules.

use std::fmt;

use crate::draft::{ApplicationDraft, IntakeField};
use crate::email::is_valid_email;
use crate::relay::{Ack, Relay, RelayError, RelayPayload, RelayTemplate};

/// Role identifier sent with every intake submission.
pub const INTERNSHIP_ROLE: &str = "internship";

// =============================================================================
// STEP
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntakeStep {
    Personal,
    Education,
    Motivation,
    Skills,
    Additional,
}

impl IntakeStep {
    pub const ALL: [Self; 5] = [Self::Personal, Self::Education, Self::Motivation, Self::Skills, Self::Additional];

    /// 1-based position shown to the user.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Education => 2,
            Self::Motivation => 3,
            Self::Skills => 4,
            Self::Additional => 5,
        }
    }

    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Additional
    }

    /// Fields rendered and validated on this step.
    #[must_use]
    pub fn fields(self) -> &'static [IntakeField] {
        match self {
            Self::Personal => &[IntakeField::FullName, IntakeField::Email, IntakeField::Phone, IntakeField::Address],
            Self::Education => {
                &[IntakeField::University, IntakeField::Faculty, IntakeField::Course, IntakeField::GradYear]
            }
            Self::Motivation => &[IntakeField::Objective, IntakeField::Experience],
            Self::Skills => &[IntakeField::Skills, IntakeField::Languages],
            Self::Additional => &[IntakeField::Additional],
        }
    }
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("step {step} is incomplete: missing {}", join_keys(.missing))]
    Incomplete { step: IntakeStep, missing: Vec<IntakeField> },
    #[error("invalid email address")]
    InvalidEmail,
    #[error("already on the last step")]
    NoNextStep,
    #[error("already on the first step")]
    NoPreviousStep,
    #[error("submission is only available on step 5 (currently on step {step})")]
    NotOnFinalStep { step: IntakeStep },
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error("no submission in progress")]
    NotSubmitting,
    #[error("application already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Relay(#[from] RelayError),
}

fn join_keys(fields: &[IntakeField]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeState {
    Editing { step: IntakeStep, draft: ApplicationDraft },
    /// Request outstanding; the draft is frozen.
    Submitting { draft: ApplicationDraft },
    /// Terminal. The draft is gone.
    Submitted,
}

/// One intake session: the wizard state plus the last relay failure, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeForm {
    state: IntakeState,
    last_error: Option<String>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    /// Fresh session on step 1 with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self { state: IntakeState::Editing { step: IntakeStep::Personal, draft: ApplicationDraft::default() }, last_error: None }
    }

    /// Rebuild a session from a complete draft, advancing step by step.
    ///
    /// # Errors
    ///
    /// Returns the first step's validation error if the draft is incomplete.
    pub fn resume(draft: ApplicationDraft) -> Result<Self, IntakeError> {
        let mut form = Self { state: IntakeState::Editing { step: IntakeStep::Personal, draft }, last_error: None };
        while form.step().is_some_and(|s| !s.is_last()) {
            form.next()?;
        }
        Ok(form)
    }

    #[must_use]
    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    /// Current step; `None` once submitted.
    #[must_use]
    pub fn step(&self) -> Option<IntakeStep> {
        match &self.state {
            IntakeState::Editing { step, .. } => Some(*step),
            IntakeState::Submitting { .. } => Some(IntakeStep::Additional),
            IntakeState::Submitted => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&ApplicationDraft> {
        match &self.state {
            IntakeState::Editing { draft, .. } | IntakeState::Submitting { draft } => Some(draft),
            IntakeState::Submitted => None,
        }
    }

    /// Field value for display; empty once submitted.
    #[must_use]
    pub fn value(&self, field: IntakeField) -> &str {
        self.draft().map_or("", |d| d.get(field))
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, IntakeState::Submitting { .. })
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self.state, IntakeState::Submitted)
    }

    /// Message of the most recent failed submission.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// # Errors
    ///
    /// Rejected while a submission is outstanding or after it succeeded.
    pub fn set_field(&mut self, field: IntakeField, value: impl Into<String>) -> Result<(), IntakeError> {
        match &mut self.state {
            IntakeState::Editing { draft, .. } => {
                draft.set(field, value);
                Ok(())
            }
            IntakeState::Submitting { .. } => Err(IntakeError::SubmissionInFlight),
            IntakeState::Submitted => Err(IntakeError::AlreadySubmitted),
        }
    }

    /// Advance one step if the current step is complete.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Incomplete`] or [`IntakeError::InvalidEmail`]
    /// without changing the step, or [`IntakeError::NoNextStep`] on step 5.
    pub fn next(&mut self) -> Result<IntakeStep, IntakeError> {
        match &mut self.state {
            IntakeState::Editing { step, draft } => {
                let target = step.next().ok_or(IntakeError::NoNextStep)?;
                check_step(draft, *step)?;
                *step = target;
                Ok(target)
            }
            IntakeState::Submitting { .. } => Err(IntakeError::SubmissionInFlight),
            IntakeState::Submitted => Err(IntakeError::AlreadySubmitted),
        }
    }

    /// Go back one step. Entered values are kept on every step.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::NoPreviousStep`] on step 1.
    pub fn back(&mut self) -> Result<IntakeStep, IntakeError> {
        match &mut self.state {
            IntakeState::Editing { step, .. } => {
                let target = step.prev().ok_or(IntakeError::NoPreviousStep)?;
                *step = target;
                Ok(target)
            }
            IntakeState::Submitting { .. } => Err(IntakeError::SubmissionInFlight),
            IntakeState::Submitted => Err(IntakeError::AlreadySubmitted),
        }
    }

    /// Freeze the draft for submission and return the snapshot to send.
    ///
    /// # Errors
    ///
    /// Only allowed on step 5 with every step complete; a second call while
    /// the first is outstanding returns [`IntakeError::SubmissionInFlight`].
    pub fn begin_submit(&mut self) -> Result<ApplicationDraft, IntakeError> {
        match &self.state {
            IntakeState::Editing { step, draft } => {
                if !step.is_last() {
                    return Err(IntakeError::NotOnFinalStep { step: *step });
                }
                for s in IntakeStep::ALL {
                    check_step(draft, s)?;
                }
                let snapshot = draft.clone();
                self.state = IntakeState::Submitting { draft: snapshot.clone() };
                self.last_error = None;
                Ok(snapshot)
            }
            IntakeState::Submitting { .. } => Err(IntakeError::SubmissionInFlight),
            IntakeState::Submitted => Err(IntakeError::AlreadySubmitted),
        }
    }

    /// Apply the relay outcome. Success is terminal; failure returns to step
    /// 5 with the draft untouched and the message kept for display.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::NotSubmitting`] if no submission is outstanding.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) -> Result<(), IntakeError> {
        if !self.is_submitting() {
            return Err(IntakeError::NotSubmitting);
        }
        let previous = std::mem::replace(&mut self.state, IntakeState::Submitted);
        match outcome {
            Ok(()) => self.last_error = None,
            Err(message) => {
                if let IntakeState::Submitting { draft } = previous {
                    self.state = IntakeState::Editing { step: IntakeStep::Additional, draft };
                }
                self.last_error = Some(message);
            }
        }
        Ok(())
    }

    /// Submit through `relay` in one best-effort request.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Self::begin_submit`] or the relay
    /// failure; in the latter case the form is back on step 5.
    pub async fn submit(&mut self, relay: &dyn Relay) -> Result<Ack, IntakeError> {
        let draft = self.begin_submit()?;
        match relay.submit(&internship_payload(&draft)).await {
            Ok(ack) => {
                self.finish_submit(Ok(()))?;
                Ok(ack)
            }
            Err(e) => {
                self.finish_submit(Err(e.to_string()))?;
                Err(e.into())
            }
        }
    }
}

fn check_step(draft: &ApplicationDraft, step: IntakeStep) -> Result<(), IntakeError> {
    let missing = draft.missing(step.fields());
    if !missing.is_empty() {
        return Err(IntakeError::Incomplete { step, missing });
    }
    if step.fields().contains(&IntakeField::Email) && !is_valid_email(&draft.email) {
        return Err(IntakeError::InvalidEmail);
    }
    Ok(())
}

/// Relay payload for a finished application.
#[must_use]
pub fn internship_payload(draft: &ApplicationDraft) -> RelayPayload {
    RelayPayload::new(RelayTemplate::Internship, draft.to_params(INTERNSHIP_ROLE))
}

#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;
