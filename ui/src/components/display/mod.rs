pub mod loading_indicator;
pub mod password_checklist;
pub mod poll_card;
pub mod stat_card;
pub mod step_progress;

pub use loading_indicator::*;
pub use password_checklist::*;
pub use poll_card::*;
pub use stat_card::*;
pub use step_progress::*;
