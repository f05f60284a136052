//! The wizard's one side effect: sending the finished draft to `/register`.

use tracing::{info, warn};

use crate::services::client::{ApiMessageResponse, ClientResult, RegisterRequest, RegistrationApi};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "User registered successfully!";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const REGISTRATION_ERROR_MESSAGE: &str =
    "An error occurred during registration. Please try again.";

#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionOutcome {
    Registered,
    /// Message to show inline on the confirmation step
    Failed(String),
}

/// Map the backend reply onto what the user sees.
///
/// A 2xx whose message does not announce success is a business failure and
/// its message is echoed. Rejections echo the server message when one was
/// sent; transport and decode failures fall back to a generic message.
pub fn classify_registration(result: ClientResult<ApiMessageResponse>) -> SubmissionOutcome {
    match result {
        Ok(response) => match response.message {
            Some(message) if message.contains(REGISTRATION_SUCCESS_MESSAGE) => {
                SubmissionOutcome::Registered
            }
            Some(message) => SubmissionOutcome::Failed(message),
            None => SubmissionOutcome::Failed(REGISTRATION_FAILED_MESSAGE.to_string()),
        },
        Err(error) => {
            warn!("Registration request failed: {}", error);
            let message = error
                .server_message()
                .unwrap_or(REGISTRATION_ERROR_MESSAGE)
                .to_string();
            SubmissionOutcome::Failed(message)
        }
    }
}

pub async fn submit_registration<A>(api: &A, request: RegisterRequest) -> SubmissionOutcome
where
    A: RegistrationApi + ?Sized,
{
    info!("Submitting registration for {}", request.username);
    let outcome = classify_registration(api.register(&request).await);
    if outcome == SubmissionOutcome::Registered {
        info!("Registration accepted for {}", request.username);
    }
    outcome
}
