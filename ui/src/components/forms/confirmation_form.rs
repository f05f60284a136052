use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::registration::{RegistrationAction, RegistrationState};

#[derive(Props, PartialEq, Clone)]
pub struct ConfirmationFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub on_submit: EventHandler<()>,
}

/// Read-only review of the draft before it is sent
#[component]
pub fn ConfirmationForm(props: ConfirmationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;
    let current = state();
    let draft = current.draft();

    let rows: Vec<(&'static str, String)> = vec![
        (
            "Account Type",
            draft
                .member_type
                .map(|m| m.title().to_string())
                .unwrap_or_default(),
        ),
        ("First Name", draft.first_name.clone()),
        ("Last Name", draft.last_name.clone()),
        ("Username", draft.username.clone()),
        ("Email", draft.email.clone()),
        (
            "Date of Birth",
            draft.date_of_birth_display().unwrap_or_default(),
        ),
        (
            "Gender",
            draft
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
        ),
        ("Country", draft.country.clone()),
        ("State", draft.state.clone()),
        ("City", draft.city.clone()),
        (
            "Village",
            draft.village.map(|v| v.name().to_string()).unwrap_or_default(),
        ),
        ("Community", draft.community.clone()),
    ];

    rsx! {
        div {
            class: "wizard-form confirmation-form",
            h2 { class: "form-title", "Confirm your details" }

            dl {
                class: "review-list",
                for (label, value) in rows {
                    div {
                        key: "{label}",
                        class: "review-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }

            if let Some(error) = current.step_error.clone() {
                p { class: "step-error", "{error}" }
            }

            if current.is_submitting {
                LoadingIndicator { message: "Creating your account...".to_string() }
            }

            div {
                class: "button-section step-navigation",
                button {
                    class: "secondary-button",
                    r#type: "button",
                    disabled: current.is_submitting,
                    onclick: move |_| dispatch.call(RegistrationAction::Previous),
                    "Back"
                }
                button {
                    class: "primary-button",
                    r#type: "button",
                    disabled: current.is_submitting,
                    onclick: move |_| on_submit.call(()),
                    if current.is_submitting { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}
