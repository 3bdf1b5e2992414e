//! Desktop host for the GoRiderss dashboard sidebar.
//!
//! Owns the route history the sidebar navigates through and renders a
//! placeholder page for the active route.

pub mod app;
pub mod history;
pub mod pages;
