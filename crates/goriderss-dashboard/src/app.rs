//! Root component: sidebar plus page area over a [`RouteHistory`].

use std::sync::Arc;

use dioxus::prelude::*;

use goriderss_sidebar::{routes, Navigation, SessionHandle, Sidebar, SidebarConfig};

use crate::history::RouteHistory;
use crate::pages::{LoginPage, PagePlaceholder};

/// Everything the root component needs, prepared by `main` and handed to
/// the launcher as root context (`Arc<LaunchSettings>`).
pub struct LaunchSettings {
    pub config: SidebarConfig,
    pub session: SessionHandle,
    pub start_path: String,
}

#[component]
pub fn DashboardApp() -> Element {
    let settings = use_context::<Arc<LaunchSettings>>();

    use_context_provider(|| settings.session.clone());
    let mut history = use_signal(|| RouteHistory::new(settings.start_path.clone()));

    let current = history.read().current().to_string();
    let can_go_back = history.read().len() > 1;
    let config = &settings.config;

    let navigate = move |nav: Navigation| {
        tracing::debug!(?nav, "navigating");
        history.write().apply(nav);
    };

    if current == routes::LOGIN {
        return rsx! {
            LoginPage { on_navigate: navigate }
        };
    }

    rsx! {
        div {
            class: "dashboard",
            Sidebar {
                current_path: current.clone(),
                on_navigate: navigate,
                branding: config.branding.clone(),
                user: config.user.clone(),
                rewards: config.rewards.clone(),
                secondary_line: config.secondary_line,
                on_create_trip: move |_| {
                    tracing::info!("create trip requested");
                    history.write().push(routes::TRIPS_MINE);
                },
            }
            main {
                class: "dashboard-main",
                PagePlaceholder {
                    path: current,
                    can_go_back,
                    on_back: move |_| {
                        history.write().back();
                    },
                }
            }
        }
    }
}
