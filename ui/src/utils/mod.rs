//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging for components
//! - **validation**: CSS classes for form feedback and date-of-birth select options

pub mod console_macros;
pub mod validation;

pub use validation::*;
