//! Navigation sidebar for the GoRiderss rider dashboard.
//!
//! Provides the compiled-in navigation model, the active-route matcher,
//! session identity loading with per-field fallbacks, the mobile drawer
//! state, account actions, and the Dioxus components that render them.

pub mod actions;
pub mod components;
pub mod config;
pub mod drawer;
pub mod error;
pub mod hooks;
pub mod identity;
pub mod nav;
pub mod session;

pub use actions::{log_out, open_settings, Navigation};
pub use components::{AccountActions, MobileTopbar, NavSections, ProfileCard, RewardsCard, Sidebar};
pub use config::{Branding, RewardsSummary, SidebarConfig, API_BASE_ENV};
pub use drawer::DrawerState;
pub use error::{ConfigError, SessionError};
pub use hooks::{use_drawer, use_session_identity};
pub use identity::{
    avatar_url_for, resolve_field, IdentitySnapshot, MeResponse, PresenceStatus, ResolvedIdentity,
    SecondaryLine, SessionUser, UserProfile, DEFAULT_AVATAR, FILE_BASE,
};
pub use nav::{is_active, label_for, routes, NavItem, NavSection, MAIN_SECTIONS};
pub use session::{load_identity, HttpSessionClient, Liveness, SessionApi, SessionHandle};

/// Sidebar styles: fixed rail on wide screens, drawer below 1024px.
pub const SIDEBAR_CSS: &str = include_str!("../assets/sidebar.css");
