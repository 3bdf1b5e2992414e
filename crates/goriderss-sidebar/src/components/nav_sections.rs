//! Grouped navigation links.

use dioxus::prelude::*;

use crate::actions::Navigation;
use crate::nav::{is_active, MAIN_SECTIONS};

/// Every section of [`MAIN_SECTIONS`], highlighting the links that match
/// `current_path`.
#[component]
pub fn NavSections(current_path: String, on_navigate: EventHandler<Navigation>) -> Element {
    rsx! {
        for section in MAIN_SECTIONS.iter() {
            div {
                key: "{section.key()}",
                class: "nav-section",
                if let Some(heading) = section.heading {
                    div { class: "nav-section-heading", "{heading}" }
                }
                for item in section.items.iter() {
                    {
                        let destination = item.destination;
                        let link_class = if is_active(&current_path, destination) {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        rsx! {
                            a {
                                key: "{destination}",
                                class: "{link_class}",
                                href: "{destination}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate.call(Navigation::push(destination));
                                },
                                svg {
                                    class: "sidebar-icon",
                                    view_box: "0 0 24 24",
                                    fill: "currentColor",
                                    path { d: "M4 6h16v2H4zM4 11h16v2H4zM4 16h10v2H4z" }
                                }
                                span { class: "nav-label", "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
