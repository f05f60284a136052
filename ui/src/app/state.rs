// App-wide state shared through Dioxus context
use tracing::debug;

#[derive(Clone, Debug)]
pub enum AppAction {
    ToggleDarkMode,
    SetAuthenticated(bool),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AppState {
    pub dark_mode: bool,
    pub is_authenticated: bool,
}

impl AppState {
    /// Initial state with the persisted authentication flag
    pub fn restored(is_authenticated: bool) -> Self {
        Self {
            dark_mode: false,
            is_authenticated,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: AppAction) {
        match action {
            AppAction::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            AppAction::SetAuthenticated(authenticated) => {
                debug!("Authentication flag set to {}", authenticated);
                self.is_authenticated = authenticated;
            }
        }
    }
}
