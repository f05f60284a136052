//! Browser local storage for the authentication flag and the remembered login.
//!
//! The password is never written here; only the email survives a reload.

use gloo_storage::{LocalStorage, Storage};

use super::errors::StorageError;

const AUTHENTICATED_KEY: &str = "isAuthenticated";
const REMEMBER_ME_KEY: &str = "rememberMe";
const EMAIL_KEY: &str = "email";

pub struct LocalStorageManager;

impl LocalStorageManager {
    // Authentication flag
    pub fn store_authenticated(authenticated: bool) -> Result<(), StorageError> {
        LocalStorage::set(AUTHENTICATED_KEY, authenticated)
            .map_err(|e| StorageError::for_key(AUTHENTICATED_KEY, e))
    }

    pub fn is_authenticated() -> bool {
        LocalStorage::get::<bool>(AUTHENTICATED_KEY).unwrap_or(false)
    }

    // Remembered login
    pub fn remember_login(email: &str) -> Result<(), StorageError> {
        LocalStorage::set(REMEMBER_ME_KEY, true)
            .map_err(|e| StorageError::for_key(REMEMBER_ME_KEY, e))?;
        LocalStorage::set(EMAIL_KEY, email).map_err(|e| StorageError::for_key(EMAIL_KEY, e))
    }

    pub fn forget_login() {
        LocalStorage::delete(REMEMBER_ME_KEY);
        LocalStorage::delete(EMAIL_KEY);
    }

    /// The stored email, only when "remember me" was ticked at the last login
    pub fn remembered_email() -> Option<String> {
        let remember = LocalStorage::get::<bool>(REMEMBER_ME_KEY).unwrap_or(false);
        if !remember {
            return None;
        }
        LocalStorage::get::<String>(EMAIL_KEY)
            .ok()
            .filter(|email| !email.is_empty())
    }

    // Cleanup
    pub fn clear_session() {
        Self::forget_login();
        LocalStorage::delete(AUTHENTICATED_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_authenticated_flag_round_trip() {
        LocalStorageManager::clear_session();
        assert!(!LocalStorageManager::is_authenticated());

        LocalStorageManager::store_authenticated(true).unwrap();
        assert!(LocalStorageManager::is_authenticated());

        LocalStorageManager::clear_session();
        assert!(!LocalStorageManager::is_authenticated());
    }

    #[wasm_bindgen_test]
    fn test_remembered_email_requires_flag() {
        LocalStorageManager::clear_session();
        assert_eq!(LocalStorageManager::remembered_email(), None);

        LocalStorageManager::remember_login("ada@example.com").unwrap();
        assert_eq!(
            LocalStorageManager::remembered_email(),
            Some("ada@example.com".to_string())
        );

        LocalStorageManager::forget_login();
        assert_eq!(LocalStorageManager::remembered_email(), None);
    }
}
