use dioxus::prelude::*;

use super::context::use_app_config;
use crate::components::display::StepProgress;
use crate::components::forms::{
    AccountTypeForm, ConfirmationForm, LocationForm, PasswordForm, PersonalInfoForm,
    SuccessPanel,
};
use crate::registration::{submit_registration, RegistrationAction, RegistrationState, WizardStep};
use crate::services::client::ITribeClient;
use crate::{console_info, console_warn};

const WIZARD_CSS: Asset = asset!("/assets/styling/registration_wizard.css");

/// Render the form for the active step; positions outside the wizard render nothing
fn render_step(
    state: Signal<RegistrationState>,
    dispatch: EventHandler<RegistrationAction>,
    on_submit: EventHandler<()>,
) -> Element {
    match state().current_step() {
        Some(WizardStep::AccountType) => rsx! { AccountTypeForm { state, dispatch } },
        Some(WizardStep::PersonalInfo) => rsx! { PersonalInfoForm { state, dispatch } },
        Some(WizardStep::Location) => rsx! { LocationForm { state, dispatch } },
        Some(WizardStep::Password) => rsx! { PasswordForm { state, dispatch } },
        Some(WizardStep::Confirmation) => rsx! {
            ConfirmationForm { state, dispatch, on_submit }
        },
        Some(WizardStep::Success) => rsx! {
            SuccessPanel {
                on_restart: move |_| dispatch.call(RegistrationAction::Reset),
            }
        },
        None => rsx! {},
    }
}

#[component]
pub fn RegistrationWizard() -> Element {
    let config = use_app_config();

    // Consolidated state management
    let mut state = use_signal(RegistrationState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let on_submit = EventHandler::new(move |_: ()| {
        let Some(request) = state.with_mut(|s| s.begin_submission()) else {
            console_warn!("[Registration] Submission already in progress");
            return;
        };
        let client = ITribeClient::new(&config);
        console_info!("[Registration] Submitting {}", request.username);

        spawn(async move {
            let outcome = submit_registration(&client, request).await;
            dispatch.call(RegistrationAction::SubmissionFinished(outcome));
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: WIZARD_CSS }

        div {
            class: "registration-wizard",
            StepProgress { position: state().position() }
            {render_step(state, dispatch, on_submit)}
        }
    }
}
