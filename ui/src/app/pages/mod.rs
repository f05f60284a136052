pub mod dashboard_page;
pub mod directory_page;
pub mod landing_page;
pub mod login_page;
pub mod map_page;
pub mod polls_page;
pub mod register_page;

pub use dashboard_page::*;
pub use directory_page::*;
pub use landing_page::*;
pub use login_page::*;
pub use map_page::*;
pub use polls_page::*;
pub use register_page::*;
