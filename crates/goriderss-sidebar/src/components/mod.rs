//! Dioxus components that render the dashboard sidebar.

mod account_actions;
mod mobile_topbar;
mod nav_sections;
mod profile_card;
mod rewards_card;
mod sidebar;

pub use account_actions::*;
pub use mobile_topbar::*;
pub use nav_sections::*;
pub use profile_card::*;
pub use rewards_card::*;
pub use sidebar::*;
