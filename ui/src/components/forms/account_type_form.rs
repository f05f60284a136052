use dioxus::prelude::*;

use super::{StepNavigation, WizardStepProps};
use crate::registration::{MemberType, RegistrationAction};

const MEMBER_TYPES: [MemberType; 2] = [MemberType::CommunityMember, MemberType::CommunityLeader];

#[component]
pub fn AccountTypeForm(props: WizardStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let selected = state().draft().member_type;

    rsx! {
        div {
            class: "wizard-form account-type-form",
            h2 { class: "form-title", "Choose your account type" }

            div {
                class: "member-type-options",
                for member_type in MEMBER_TYPES {
                    button {
                        key: "{member_type.as_str()}",
                        r#type: "button",
                        class: if selected == Some(member_type) { "member-type-card selected" } else { "member-type-card" },
                        onclick: move |_| dispatch.call(RegistrationAction::SelectMemberType(member_type)),
                        h3 { "{member_type.title()}" }
                        p { "{member_type.description()}" }
                    }
                }
            }

            if let Some(error) = state().step_error {
                p { class: "step-error", "{error}" }
            }

            StepNavigation {
                dispatch: dispatch,
                show_back: false,
            }
        }
    }
}
