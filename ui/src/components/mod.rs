//! User Interface Components
//!
//! Reusable Dioxus components for the iTribe app:
//!
//! - **forms**: the registration wizard steps and the login form
//! - **display**: step progress, password checklist, poll and stat cards
//! - **inputs**: labelled text inputs and selects
//! - **layout**: navigation bar

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
