use dioxus::prelude::*;

use crate::components::forms::LoginForm;
use crate::components::layout::NavBar;

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        NavBar {}
        main {
            class: "auth-page",
            LoginForm {}
        }
    }
}
