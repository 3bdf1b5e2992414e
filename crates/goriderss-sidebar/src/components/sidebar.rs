//! Dashboard sidebar: desktop rail plus mobile drawer.

use dioxus::prelude::*;

use crate::actions::Navigation;
use crate::config::{Branding, RewardsSummary};
use crate::hooks::{use_drawer, use_session_identity};
use crate::identity::{ResolvedIdentity, SecondaryLine, UserProfile};

use super::{AccountActions, MobileTopbar, NavSections, ProfileCard, RewardsCard};

/// Persistent navigation sidebar for the dashboard area.
///
/// Requires a [`SessionHandle`](crate::SessionHandle) in context. Navigation
/// requests (link clicks, settings, the post-logout redirect) are emitted
/// through `on_navigate`; the host decides how to apply them.
#[component]
pub fn Sidebar(
    current_path: String,
    on_navigate: EventHandler<Navigation>,
    #[props(default)] branding: Branding,
    #[props(default)] user: UserProfile,
    #[props(default)] rewards: RewardsSummary,
    #[props(default)] secondary_line: SecondaryLine,
    on_create_trip: Option<EventHandler<()>>,
) -> Element {
    let identity = use_session_identity();
    let mut drawer = use_drawer(current_path.clone());

    let resolved = ResolvedIdentity::resolve(identity.read().as_ref(), &user, secondary_line);
    let drawer_open = drawer.read().is_open();
    let aside_class = if drawer_open { "sidebar sidebar-open" } else { "sidebar" };

    rsx! {
        MobileTopbar {
            branding: branding.clone(),
            on_open: move |_| drawer.write().open_drawer(),
        }

        aside {
            id: "sidebar",
            class: "{aside_class}",
            "aria-label": "Sidebar",

            div {
                class: "sidebar-brand",
                img {
                    class: "brand-logo",
                    src: "{branding.image}",
                    alt: "{branding.alt}",
                }
                button {
                    class: "icon-button sidebar-close",
                    "aria-label": "Close",
                    onclick: move |_| drawer.write().close_drawer(),
                    svg {
                        class: "topbar-icon",
                        view_box: "0 0 24 24",
                        fill: "currentColor",
                        path { d: "M6.225 4.811 4.811 6.225 10.586 12l-5.775 5.775 1.414 1.414L12 13.414l5.775 5.775 1.414-1.414L13.414 12l5.775-5.775-1.414-1.414L12 10.586 6.225 4.811z" }
                    }
                }
            }

            ProfileCard { identity: resolved, status: user.status }

            nav {
                class: "sidebar-nav",
                NavSections { current_path: current_path.clone(), on_navigate }

                div {
                    class: "sidebar-footer",
                    RewardsCard { rewards: rewards.clone() }
                    AccountActions {
                        on_navigate,
                        on_create_trip: move |_| request_create_trip(on_create_trip),
                    }
                }
            }
        }

        if drawer_open {
            div {
                class: "drawer-backdrop",
                onclick: move |_| drawer.write().close_drawer(),
            }
        }
    }
}

/// Forwards a create-trip click to the caller, if one was supplied.
pub(crate) fn request_create_trip(handler: Option<EventHandler<()>>) {
    if let Some(handler) = handler {
        handler.call(());
    }
}
