//! Profile summary card.

use dioxus::prelude::*;

use crate::identity::{PresenceStatus, ResolvedIdentity};

/// Avatar, display name, secondary line, and presence dot.
#[component]
pub fn ProfileCard(identity: ResolvedIdentity, status: PresenceStatus) -> Element {
    let dot_class = match status {
        PresenceStatus::Online => "presence-dot presence-online",
        PresenceStatus::Offline => "presence-dot presence-offline",
    };

    rsx! {
        div {
            class: "sidebar-profile",
            div {
                class: "profile-card",
                img {
                    class: "profile-avatar",
                    src: "{identity.avatar_url}",
                    alt: "avatar",
                }
                div {
                    class: "profile-text",
                    div { class: "profile-name", "{identity.display_name}" }
                    div { class: "profile-secondary", "{identity.secondary_line}" }
                }
                span { class: "{dot_class}" }
            }
        }
    }
}
