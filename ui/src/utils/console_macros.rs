/// Macros for browser console logging from components.
/// Every line is prefixed with the `js_sys::Date::now()` timestamp so console
/// output lines up with network traces in devtools. Domain code logs through
/// `tracing` instead, which keeps it runnable off the browser.

/// Prefix a message with the current browser timestamp
pub fn stamp(message: impl std::fmt::Display) -> String {
    format!("[{}] {}", js_sys::Date::now(), message)
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)+) => {
        gloo_console::info!($crate::utils::console_macros::stamp(format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)+) => {
        gloo_console::log!($crate::utils::console_macros::stamp(format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)+) => {
        gloo_console::warn!($crate::utils::console_macros::stamp(format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)+) => {
        gloo_console::error!($crate::utils::console_macros::stamp(format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)+) => {
        gloo_console::debug!($crate::utils::console_macros::stamp(format!($($arg)+)))
    };
}
