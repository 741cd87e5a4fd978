use dioxus::prelude::*;
use dioxus_primitives::avatar::{Avatar, AvatarFallback};

/// Round avatar showing a user's initial. No image source is supported.
#[component]
pub fn UserAvatar(initial: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "dos-avatar-frame",
            Avatar { class: "dos-avatar",
                AvatarFallback { class: "dos-avatar-fallback", "{initial}" }
            }
        }
    }
}
