use dioxus::prelude::*;

use super::state::{AppAction, AppState};
use crate::services::config::AppConfig;
use crate::services::storage::LocalStorageManager;
use crate::{console_error, console_info};

/// Handle on the app-wide state, provided once by [`AppShell`]
#[derive(Clone, Copy, PartialEq)]
pub struct AppContext {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
}

impl AppContext {
    pub fn dark_mode(&self) -> bool {
        self.state.read().dark_mode
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

fn load_config() -> AppConfig {
    match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            console_error!("[iTribe] Invalid API configuration ({}), using defaults", e);
            AppConfig::default()
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AppShellProps {
    pub children: Element,
}

/// Root provider for configuration and app state
#[component]
pub fn AppShell(props: AppShellProps) -> Element {
    use_context_provider(load_config);

    let mut state = use_signal(|| AppState::restored(LocalStorageManager::is_authenticated()));

    let dispatch = EventHandler::new(move |action: AppAction| {
        if let AppAction::SetAuthenticated(authenticated) = &action {
            if let Err(e) = LocalStorageManager::store_authenticated(*authenticated) {
                console_error!("[iTribe] {}", e);
            }
        }
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    use_context_provider(|| AppContext { state, dispatch });

    use_effect(move || {
        console_info!("[iTribe] authenticated: {}", state().is_authenticated);
    });

    let theme = crate::utils::theme_class(state().dark_mode);

    rsx! {
        div {
            class: "app-root {theme}",
            {props.children}
        }
    }
}
