//! Create-trip, settings, and log-out buttons.

use dioxus::prelude::*;

use crate::actions::{log_out, open_settings, Navigation};
use crate::nav::routes;
use crate::session::SessionHandle;

#[component]
pub fn AccountActions(
    on_navigate: EventHandler<Navigation>,
    on_create_trip: EventHandler<()>,
) -> Element {
    let session = use_context::<SessionHandle>();

    rsx! {
        button {
            class: "create-trip-button",
            onclick: move |_| on_create_trip.call(()),
            "+ Create Trip"
        }

        div {
            class: "account-actions",
            a {
                class: "account-button",
                href: routes::SETTINGS,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(open_settings());
                },
                "Settings"
            }
            button {
                class: "account-button",
                onclick: move |_| {
                    let session = session.clone();
                    spawn(async move {
                        let next = log_out(session.api()).await;
                        on_navigate.call(next);
                    });
                },
                "Log Out"
            }
        }
    }
}
