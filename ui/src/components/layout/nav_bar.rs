use dioxus::prelude::*;

use crate::app::{use_app_context, AppAction};
use crate::console_info;
use crate::services::storage::LocalStorageManager;

#[component]
pub fn NavBar() -> Element {
    let app = use_app_context();
    let dark_mode = app.dark_mode();
    let is_authenticated = app.is_authenticated();
    let router = navigator();

    let logout = move |_: MouseEvent| {
        LocalStorageManager::clear_session();
        app.dispatch.call(AppAction::SetAuthenticated(false));
        console_info!("[NavBar] Logged out");
        router.push("/");
    };

    rsx! {
        nav {
            class: if dark_mode { "nav-bar dark" } else { "nav-bar" },
            div {
                class: "nav-brand",
                Link { to: "/", "iTribe" }
            }
            div {
                class: "nav-links",
                if is_authenticated {
                    Link { to: "/dashboard", "Dashboard" }
                    Link { to: "/polls", "Polls" }
                    Link { to: "/users", "Members" }
                    Link { to: "/map", "Map" }
                } else {
                    Link { to: "/login", "Login" }
                    Link { to: "/register", "Register" }
                }
            }
            div {
                class: "nav-actions",
                button {
                    class: "theme-toggle",
                    title: if dark_mode { "Light Mode" } else { "Dark Mode" },
                    onclick: move |_| app.dispatch.call(AppAction::ToggleDarkMode),
                    if dark_mode { "☀" } else { "☾" }
                }
                if is_authenticated {
                    button {
                        class: "logout-button",
                        title: "Logout",
                        onclick: logout,
                        "Logout"
                    }
                }
            }
        }
    }
}
