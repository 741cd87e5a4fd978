use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPackage;
use dioxus_free_icons::Icon;
use shared_types::home_path;
use shared_ui::Button;

use crate::auth::use_auth;
use crate::routes::Route;

/// Public entry page. Signed-in users get a shortcut to their dashboard.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let profile = auth.profile.read().clone();
    let resolved = (auth.resolved)();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            div { class: "landing-card",
                span { class: "landing-mark",
                    Icon::<LdPackage> { icon: LdPackage, width: 40, height: 40 }
                }
                h1 { class: "landing-title", "DeliveryOS" }
                p { class: "landing-tagline", "Orders, drivers and labels in one place." }

                match (resolved, profile) {
                    (false, _) => rsx! {
                        p { class: "landing-status", "Checking your session..." }
                    },
                    (true, Some(profile)) => {
                        let home = home_path(&profile.role);
                        rsx! {
                            Button {
                                onclick: move |_: MouseEvent| {
                                    if let Ok(route) = home.parse::<Route>() {
                                        navigator().push(route);
                                    }
                                },
                                "Go to dashboard"
                            }
                        }
                    }
                    (true, None) => rsx! {
                        p { class: "landing-status",
                            "Sign in through your company portal to continue."
                        }
                    },
                }
            }
        }
    }
}
