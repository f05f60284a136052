//! iTribe Registration Wizard
//!
//! A five-step sign-up flow ending in a success screen:
//!
//! - **Account Type**: community member or community leader
//! - **Personal Info**: names, username, email, date of birth, gender
//! - **Additional Info**: country, state, city, village, community
//! - **Security**: password with live requirement checklist
//! - **Confirmation**: read-only review, then `POST /register`
//!
//! The cursor lives in [`StepSequencer`], the accumulated answers in
//! [`FormDataStore`], and [`RegistrationState`] ties both to the per-step
//! validators. Components hold a `Signal<RegistrationState>` and dispatch
//! [`RegistrationAction`]s.

pub mod sequencer;
pub mod state;
pub mod store;
pub mod submission;
pub mod types;
pub mod validation;

pub use sequencer::StepSequencer;
pub use state::{PasswordEntry, RegistrationAction, RegistrationState};
pub use store::FormDataStore;
pub use submission::{classify_registration, submit_registration, SubmissionOutcome};
pub use types::*;
pub use validation::{
    is_valid_email, validate_step, LocationErrors, LocationField, PasswordChecklist,
    ValidationError,
};
