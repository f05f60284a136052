// Wizard state: sequencer + draft store + per-step feedback, driven by actions
use tracing::debug;

use super::sequencer::StepSequencer;
use super::store::FormDataStore;
use super::submission::SubmissionOutcome;
use super::types::{DraftField, DraftUpdate, MemberType, RegistrationDraft, WizardStep};
use super::validation::{
    validate_step, LocationErrors, LocationField, PasswordChecklist, ValidationError,
};
use crate::services::client::RegisterRequest;

/// Password inputs for the security step; only copied into the draft once valid
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PasswordEntry {
    pub password: String,
    pub confirm_password: String,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    UpdateDraft(DraftUpdate),
    SelectMemberType(MemberType),
    SetPassword(String),
    SetConfirmPassword(String),
    Next,
    Previous,
    SubmissionFinished(SubmissionOutcome),
    Reset,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationState {
    pub sequencer: StepSequencer,
    pub store: FormDataStore,
    pub password_entry: PasswordEntry,
    /// Single inline error for the active step
    pub step_error: Option<String>,
    /// Per-field errors for the location step
    pub location_errors: LocationErrors,
    pub is_submitting: bool,
}

impl RegistrationState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::UpdateDraft(update) => {
                // Typing into a field drops its pending feedback
                for field in update.fields.iter().filter_map(LocationField::of) {
                    self.location_errors.clear(field);
                }
                self.step_error = None;
                self.store.set(update);
            }
            RegistrationAction::SelectMemberType(member_type) => {
                self.store.set(DraftField::MemberType(Some(member_type)));
                self.step_error = None;
            }
            RegistrationAction::SetPassword(password) => {
                self.password_entry.password = password;
                self.step_error = None;
            }
            RegistrationAction::SetConfirmPassword(password) => {
                self.password_entry.confirm_password = password;
                self.step_error = None;
            }
            RegistrationAction::Next => {
                self.try_advance();
            }
            RegistrationAction::Previous => {
                self.retreat();
            }
            RegistrationAction::SubmissionFinished(outcome) => {
                self.finish_submission(outcome);
            }
            RegistrationAction::Reset => {
                self.sequencer.reset();
                self.store.reset();
                self.clear_step_feedback();
            }
        }
    }

    pub fn position(&self) -> i32 {
        self.sequencer.position()
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.sequencer.current()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        self.store.get()
    }

    pub fn password_checklist(&self) -> PasswordChecklist {
        PasswordChecklist::evaluate(&self.password_entry.password)
    }

    /// Validate the active step and move forward only if it passes.
    ///
    /// Confirmation advances through a successful submission instead, and
    /// success is terminal. Returns whether the cursor moved.
    pub fn try_advance(&mut self) -> bool {
        let step = match self.current_step() {
            Some(WizardStep::Confirmation) | Some(WizardStep::Success) | None => return false,
            Some(step) => step,
        };

        let result = validate_step(
            step,
            self.store.get(),
            &self.password_entry.password,
            &self.password_entry.confirm_password,
        );

        match result {
            Ok(()) => {
                if step == WizardStep::Password {
                    let password = std::mem::take(&mut self.password_entry.password);
                    self.store.set(DraftField::Password(password));
                }
                self.move_to_next();
                true
            }
            Err(ValidationError::Location(errors)) => {
                debug!("Location step incomplete: {} field(s) missing", errors.len());
                self.location_errors = errors;
                false
            }
            Err(error) => {
                debug!("Step {:?} rejected: {}", step, error);
                self.step_error = Some(error.to_string());
                false
            }
        }
    }

    /// Unconditional step back; not clamped at zero
    pub fn retreat(&mut self) {
        self.sequencer.retreat();
        self.clear_step_feedback();
    }

    /// Claim the submission slot and build the request body.
    ///
    /// Returns `None` while a submission is already outstanding or when the
    /// wizard is not on the confirmation step.
    pub fn begin_submission(&mut self) -> Option<RegisterRequest> {
        if self.is_submitting || self.current_step() != Some(WizardStep::Confirmation) {
            return None;
        }
        self.is_submitting = true;
        self.step_error = None;
        Some(RegisterRequest::from_draft(self.store.get()))
    }

    /// Apply the submission result; on success the draft is discarded
    pub fn finish_submission(&mut self, outcome: SubmissionOutcome) {
        self.is_submitting = false;
        match outcome {
            SubmissionOutcome::Registered => {
                self.store.reset();
                if self.current_step() == Some(WizardStep::Confirmation) {
                    self.move_to_next();
                } else {
                    self.clear_step_feedback();
                }
            }
            SubmissionOutcome::Failed(message) => {
                self.step_error = Some(message);
            }
        }
    }

    fn move_to_next(&mut self) {
        self.sequencer.advance();
        self.clear_step_feedback();
    }

    // Leaving a step drops its local inputs and feedback
    fn clear_step_feedback(&mut self) {
        self.step_error = None;
        self.location_errors = LocationErrors::default();
        self.password_entry = PasswordEntry::default();
    }
}
