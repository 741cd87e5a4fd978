use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card};

use crate::routes::Route;

/// Catch-all for paths no route matches.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "unmatched route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            Card {
                class: "not-found-card",
                title: "404",
                description: "Nothing lives at {path}.",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_: MouseEvent| {
                        navigator().push(Route::Landing {});
                    },
                    "Back to DeliveryOS"
                }
            }
        }
    }
}
