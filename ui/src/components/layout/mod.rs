pub mod nav_bar;

pub use nav_bar::*;
