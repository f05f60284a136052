use dioxus::prelude::*;

use crate::app::use_app_context;
use crate::components::display::{StatCard, UserTotalsBox};
use crate::components::layout::NavBar;
use crate::dashboard::{default_stats, USER_TOTALS};

#[component]
pub fn DashboardPage() -> Element {
    let app = use_app_context();
    let stats = use_signal(default_stats);

    if !app.is_authenticated() {
        return rsx! {
            NavBar {}
            main {
                class: "dashboard locked",
                p { "Please sign in to view the dashboard." }
                Link { to: "/login", "Login" }
            }
        };
    }

    rsx! {
        NavBar {}
        main {
            class: "dashboard",
            div { class: "banner", h1 { "Dashboard" } }
            UserTotalsBox {
                registered: USER_TOTALS.registered,
                verified: USER_TOTALS.verified,
            }
            div {
                class: "stat-grid",
                for (idx, stat) in stats().into_iter().enumerate() {
                    StatCard { key: "{idx}", stat }
                }
            }
        }
    }
}
