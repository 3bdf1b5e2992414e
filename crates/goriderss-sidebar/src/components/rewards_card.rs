use dioxus::prelude::*;

use crate::config::RewardsSummary;

/// Rewards badge with trip count and live status.
#[component]
pub fn RewardsCard(rewards: RewardsSummary) -> Element {
    rsx! {
        div {
            class: "rewards-card",
            div {
                class: "rewards-header",
                div {
                    class: "rewards-title",
                    svg {
                        class: "sidebar-icon",
                        view_box: "0 0 24 24",
                        fill: "currentColor",
                        path { d: "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z" }
                    }
                    span { "Rewards" }
                }
                span { class: "rewards-badge", "{rewards.trips_label()}" }
            }
            div {
                class: "rewards-live",
                span { class: "presence-dot presence-online" }
                span { "{rewards.live_label()}" }
            }
        }
    }
}
