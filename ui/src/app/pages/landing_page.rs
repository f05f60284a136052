use dioxus::prelude::*;

use crate::components::layout::NavBar;

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        NavBar {}
        main {
            class: "landing",
            section {
                class: "landing-hero",
                h2 { "Welcome to iTribe" }
                p {
                    "iTribe is a community dedicated to connecting the lost tribes of Israel. "
                    "We believe in fostering unity, understanding, and mutual respect among all tribes."
                }
                p {
                    "Our platform offers community profiles, polls and forums for members "
                    "to share their experiences and learn from each other."
                }
                div {
                    class: "landing-actions",
                    Link { to: "/register", "Join Us Today" }
                    Link { to: "/polls", "See Community Polls" }
                }
            }
        }
    }
}
