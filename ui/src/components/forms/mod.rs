//! Registration wizard step forms and the login form

pub mod account_type_form;
pub mod confirmation_form;
pub mod location_form;
pub mod login_form;
pub mod password_form;
pub mod personal_info_form;
pub mod step_navigation;
pub mod success_panel;

pub use account_type_form::*;
pub use confirmation_form::*;
pub use location_form::*;
pub use login_form::*;
pub use password_form::*;
pub use personal_info_form::*;
pub use step_navigation::*;
pub use success_panel::*;

use dioxus::prelude::*;

use crate::registration::{DraftField, RegistrationAction, RegistrationState};

/// Props shared by every wizard step
#[derive(Props, PartialEq, Clone)]
pub struct WizardStepProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
}

/// Route an input change to the draft by its form name
pub(crate) fn update_field(dispatch: EventHandler<RegistrationAction>, name: &str, value: String) {
    if let Some(field) = DraftField::from_input(name, value) {
        dispatch.call(RegistrationAction::UpdateDraft(field.into()));
    }
}
