use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_ui::CountBadge;

/// Unread notification count shown in the header.
///
/// The app only reads `unread`. Whatever hosts the feed (a push channel or a
/// poller) owns writing it; until one is attached the bell shows no badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotificationFeed {
    pub unread: Signal<u32>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self {
            unread: Signal::new(0),
        }
    }
}

/// Bell with an unread badge. Renders the bare bell when no feed is provided.
#[component]
pub fn NotificationsBell() -> Element {
    let unread = try_use_context::<NotificationFeed>()
        .map(|feed| (feed.unread)())
        .unwrap_or(0);

    rsx! {
        button {
            class: "notifications-bell",
            r#type: "button",
            "aria-label": "Notifications",
            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
            CountBadge { count: unread }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        unread: u32,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        use_context_provider(|| NotificationFeed {
            unread: Signal::new(props.unread),
        });
        rsx! { NotificationsBell {} }
    }

    fn render(unread: u32) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { unread });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn unread_count_is_shown() {
        let html = render(3);
        assert!(html.contains("dos-count-badge"));
    }

    #[test]
    fn no_badge_without_unread() {
        let html = render(0);
        assert!(html.contains("notifications-bell"));
        assert!(!html.contains("dos-count-badge"));
    }
}
