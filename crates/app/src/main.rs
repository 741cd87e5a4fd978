use std::rc::Rc;

use dioxus::prelude::*;
use shared_ui::theme::ThemeSeed;

mod api;
mod auth;
mod config;
mod layout;
mod notifications;
mod routes;
mod shipping_label;

use api::ApiClient;
use auth::AuthState;
use notifications::NotificationFeed;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let app_config = use_context_provider(config::load_config);
    let api = use_context_provider(|| ApiClient::new(app_config.api_base_url()));
    let auth = use_context_provider(|| AuthState::new(Rc::new(api.clone())));
    use_context_provider(NotificationFeed::new);

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            api = app_config.api_base_url(),
            "DeliveryOS starting"
        );
    });

    use_future(move || {
        let auth = auth.clone();
        async move { auth.refresh().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ThemeSeed {
            Router::<Route> {}
        }
    }
}
