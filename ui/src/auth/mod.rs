//! Login form state and the `/login` round trip.
//!
//! Browser persistence (auth flag, remembered email) is applied by the
//! login component through `LocalStorageManager`; everything here is plain
//! state so it can be exercised without a browser.

use tracing::{info, warn};

use crate::services::client::{ApiMessageResponse, AuthApi, ClientResult, LoginRequest};

pub const LOGIN_SUCCESS_MESSAGE: &str = "User authenticated successfully!";
pub const LOGIN_FAILED_MESSAGE: &str = "Authentication failed";
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred during login";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

#[derive(Clone, PartialEq, Debug)]
pub enum LoginOutcome {
    Authenticated,
    Failed(String),
}

#[derive(Clone, Debug)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    SetRememberMe(bool),
    /// Prefill from a remembered login
    RestoreRemembered(String),
    LoginFinished(LoginOutcome),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub errors: Vec<String>,
    pub is_loading: bool,
}

impl LoginState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => {
                self.email = email;
                self.errors.clear();
            }
            LoginAction::SetPassword(password) => {
                self.password = password;
                self.errors.clear();
            }
            LoginAction::SetRememberMe(remember) => {
                self.remember_me = remember;
            }
            LoginAction::RestoreRemembered(email) => {
                self.email = email;
                self.remember_me = true;
            }
            LoginAction::LoginFinished(outcome) => {
                self.finish_login(outcome);
            }
        }
    }

    /// Validate the form and claim the loading slot.
    ///
    /// Returns `None` when a login is already in flight or the form is
    /// incomplete; in the latter case `errors` lists every problem.
    pub fn begin_login(&mut self) -> Option<LoginRequest> {
        if self.is_loading {
            return None;
        }
        let errors = validate_login(&self.email, &self.password);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors.clear();
        self.is_loading = true;
        Some(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish_login(&mut self, outcome: LoginOutcome) {
        self.is_loading = false;
        match outcome {
            LoginOutcome::Authenticated => {
                self.errors.clear();
                self.password.clear();
            }
            LoginOutcome::Failed(message) => {
                self.errors = vec![message];
                self.email.clear();
                self.password.clear();
            }
        }
    }
}

/// Collect every problem with the login form, in display order
pub fn validate_login(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(EMAIL_REQUIRED.to_string());
    }
    if password.trim().is_empty() {
        errors.push(PASSWORD_REQUIRED.to_string());
    }
    errors
}

pub fn classify_login(result: ClientResult<ApiMessageResponse>) -> LoginOutcome {
    match result {
        Ok(response) => match response.message {
            Some(message) if message == LOGIN_SUCCESS_MESSAGE => LoginOutcome::Authenticated,
            Some(message) => LoginOutcome::Failed(message),
            None => LoginOutcome::Failed(LOGIN_FAILED_MESSAGE.to_string()),
        },
        Err(error) => {
            warn!("Login request failed: {}", error);
            LoginOutcome::Failed(
                error
                    .server_message()
                    .unwrap_or(LOGIN_ERROR_MESSAGE)
                    .to_string(),
            )
        }
    }
}

pub async fn authenticate<A>(api: &A, request: LoginRequest) -> LoginOutcome
where
    A: AuthApi + ?Sized,
{
    info!("Authenticating {}", request.email);
    classify_login(api.login(&request).await)
}
