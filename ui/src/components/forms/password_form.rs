use dioxus::prelude::*;

use super::{StepNavigation, WizardStepProps};
use crate::components::display::PasswordChecklistView;
use crate::components::inputs::{FormField, InputType, ValidatedInput};
use crate::registration::RegistrationAction;

#[component]
pub fn PasswordForm(props: WizardStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();
    let entry = current.password_entry.clone();

    rsx! {
        div {
            class: "wizard-form password-form",
            h2 { class: "form-title", "Secure your account" }

            FormField {
                label: "Password",
                html_for: "password",
                ValidatedInput {
                    name: "password",
                    value: entry.password,
                    placeholder: "Create a password",
                    input_type: InputType::Password,
                    on_change: move |value: String| dispatch.call(RegistrationAction::SetPassword(value)),
                }
            }

            PasswordChecklistView { checklist: current.password_checklist() }

            FormField {
                label: "Confirm Password",
                html_for: "confirmPassword",
                ValidatedInput {
                    name: "confirmPassword",
                    value: entry.confirm_password,
                    placeholder: "Repeat your password",
                    input_type: InputType::Password,
                    on_change: move |value: String| dispatch.call(RegistrationAction::SetConfirmPassword(value)),
                }
            }

            if let Some(error) = current.step_error.clone() {
                p { class: "step-error", "{error}" }
            }

            StepNavigation { dispatch: dispatch }
        }
    }
}
