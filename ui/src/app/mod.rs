//! Top-level app wiring: context providers, app state, the registration
//! wizard view and the routed pages.

pub mod context;
pub mod pages;
pub mod registration_wizard;
pub mod state;

pub use context::{use_app_config, use_app_context, AppContext, AppShell};
pub use pages::*;
pub use registration_wizard::RegistrationWizard;
pub use state::{AppAction, AppState};
