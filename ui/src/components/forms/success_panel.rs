use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SuccessPanelProps {
    /// Start a fresh registration from the first step
    pub on_restart: EventHandler<()>,
}

#[component]
pub fn SuccessPanel(props: SuccessPanelProps) -> Element {
    rsx! {
        div {
            class: "wizard-form success-panel",
            div { class: "success-icon", "✓" }
            h2 { class: "form-title", "Registration Complete!" }
            p { "Your account has been created. You can now sign in." }
            div {
                class: "primary-link",
                Link { to: "/login", "Go to Login" }
            }
            button {
                class: "secondary-button",
                r#type: "button",
                onclick: move |_| props.on_restart.call(()),
                "Register another member"
            }
        }
    }
}
