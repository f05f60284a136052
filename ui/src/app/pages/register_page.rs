use dioxus::prelude::*;

use crate::app::RegistrationWizard;
use crate::components::layout::NavBar;

#[component]
pub fn RegisterPage() -> Element {
    rsx! {
        NavBar {}
        main {
            class: "auth-page",
            RegistrationWizard {}
        }
    }
}
