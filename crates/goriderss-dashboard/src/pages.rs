//! Placeholder pages rendered next to the sidebar.

use dioxus::prelude::*;

use goriderss_sidebar::{label_for, routes, Navigation};

/// Heading for a dashboard route.
pub fn page_title(path: &str) -> String {
    match path {
        routes::SETTINGS => "Settings".to_string(),
        routes::LOGIN => "Log In".to_string(),
        _ => label_for(path).map(str::to_string).unwrap_or_else(|| path.to_string()),
    }
}

/// Stand-in content for the page at `path`.
#[component]
pub fn PagePlaceholder(path: String, can_go_back: bool, on_back: EventHandler<()>) -> Element {
    let title = page_title(&path);

    rsx! {
        section {
            class: "page",
            header {
                class: "page-header",
                button {
                    class: "page-back",
                    disabled: !can_go_back,
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "page-title", "{title}" }
            }
            p { class: "page-path", "{path}" }
        }
    }
}

/// Shown after logging out.
#[component]
pub fn LoginPage(on_navigate: EventHandler<Navigation>) -> Element {
    rsx! {
        section {
            class: "page login-page",
            h1 { class: "page-title", "Signed out" }
            p { "Log in again to return to your dashboard." }
            button {
                class: "login-button",
                onclick: move |_| on_navigate.call(Navigation::replace(routes::DASHBOARD)),
                "Log In"
            }
        }
    }
}
