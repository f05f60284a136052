use dioxus::prelude::*;

use crate::app::{use_app_config, use_app_context, AppAction};
use crate::auth::{authenticate, LoginAction, LoginOutcome, LoginState};
use crate::components::display::LoadingIndicator;
use crate::components::inputs::{FormField, InputType, ValidatedInput};
use crate::services::client::ITribeClient;
use crate::services::storage::LocalStorageManager;
use crate::{console_error, console_info};

#[component]
pub fn LoginForm() -> Element {
    let app = use_app_context();
    let config = use_app_config();
    let router = navigator();
    let mut state = use_signal(LoginState::default);

    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Prefill from a remembered login
    use_effect(move || {
        if let Some(email) = LocalStorageManager::remembered_email() {
            dispatch.call(LoginAction::RestoreRemembered(email));
        }
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(request) = state.with_mut(|s| s.begin_login()) else {
            return;
        };
        let remember_me = state().remember_me;
        let client = ITribeClient::new(&config);

        spawn(async move {
            let email = request.email.clone();
            let outcome = authenticate(&client, request).await;

            if outcome == LoginOutcome::Authenticated {
                console_info!("[Login] Authenticated {}", email);
                if remember_me {
                    if let Err(e) = LocalStorageManager::remember_login(&email) {
                        console_error!("[Login] {}", e);
                    }
                } else {
                    LocalStorageManager::forget_login();
                }
                dispatch.call(LoginAction::LoginFinished(outcome));
                app.dispatch.call(AppAction::SetAuthenticated(true));
                router.push("/dashboard");
            } else {
                dispatch.call(LoginAction::LoginFinished(outcome));
            }
        });
    };

    let current = state();

    rsx! {
        div {
            class: "login-form",
            div {
                class: "login-header",
                h2 { class: "form-title", "Welcome Back" }
                p { "Sign in to continue to your account" }
            }

            form {
                onsubmit: on_submit,

                FormField {
                    label: "Email Address",
                    html_for: "email",
                    ValidatedInput {
                        name: "email",
                        value: current.email.clone(),
                        placeholder: "Enter your email",
                        input_type: InputType::Email,
                        on_change: move |value: String| dispatch.call(LoginAction::SetEmail(value)),
                    }
                }

                FormField {
                    label: "Password",
                    html_for: "password",
                    ValidatedInput {
                        name: "password",
                        value: current.password.clone(),
                        placeholder: "Enter your password",
                        input_type: InputType::Password,
                        on_change: move |value: String| dispatch.call(LoginAction::SetPassword(value)),
                    }
                }

                if !current.errors.is_empty() {
                    div {
                        class: "auth-result error",
                        for error in current.errors.iter() {
                            p { key: "{error}", "{error}" }
                        }
                    }
                }

                label {
                    class: "remember-me",
                    input {
                        r#type: "checkbox",
                        checked: current.remember_me,
                        onchange: move |event| dispatch.call(LoginAction::SetRememberMe(event.checked())),
                    }
                    span { "Remember me" }
                }

                if current.is_loading {
                    LoadingIndicator { message: "Signing in...".to_string() }
                }

                button {
                    class: "login-button",
                    r#type: "submit",
                    disabled: current.is_loading,
                    "Sign In"
                }
            }

            p {
                class: "login-footer",
                "Don't have an account? "
                Link { to: "/register", "Create an account" }
            }
        }
    }
}
