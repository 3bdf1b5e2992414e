use dioxus::prelude::*;

use crate::config::Branding;

/// Top bar shown on narrow screens, with the drawer toggle.
#[component]
pub fn MobileTopbar(branding: Branding, on_open: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "mobile-topbar",
            button {
                class: "icon-button",
                "aria-label": "Open",
                onclick: move |_| on_open.call(()),
                svg {
                    class: "topbar-icon",
                    view_box: "0 0 24 24",
                    fill: "currentColor",
                    path { d: "M3 6h18v2H3zM3 11h18v2H3zM3 16h18v2H3z" }
                }
            }
            div {
                class: "topbar-brand",
                img {
                    class: "topbar-logo",
                    src: "{branding.image}",
                    alt: "{branding.alt}",
                }
                span { class: "topbar-caption", "{branding.alt}" }
            }
        }
    }
}
