use dioxus::prelude::*;

use crate::registration::RegistrationAction;

#[derive(Props, PartialEq, Clone)]
pub struct StepNavigationProps {
    pub dispatch: EventHandler<RegistrationAction>,
    #[props(default = true)]
    pub show_back: bool,
    #[props(into, default = "Next".to_string())]
    pub next_label: String,
}

#[component]
pub fn StepNavigation(props: StepNavigationProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "button-section step-navigation",
            if props.show_back {
                button {
                    class: "secondary-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(RegistrationAction::Previous),
                    "Back"
                }
            }
            button {
                class: "primary-button",
                r#type: "button",
                onclick: move |_| dispatch.call(RegistrationAction::Next),
                "{props.next_label}"
            }
        }
    }
}
