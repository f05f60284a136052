//! This crate contains the shared state, services and UI components for the iTribe app.

pub mod app;
pub use app::{
    AppShell, DashboardPage, DirectoryPage, LandingPage, LoginPage, MapPage, PollsPage,
    RegisterPage, RegistrationWizard,
};

pub mod auth;
pub mod components;
pub mod dashboard;
pub mod directory;
pub mod map;
pub mod polls;
pub mod registration;
pub mod services;
pub mod utils;
