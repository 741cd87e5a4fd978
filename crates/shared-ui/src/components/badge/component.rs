use dioxus::prelude::*;
use dioxus_primitives::merge_attributes;

/// Colour of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Muted,
    Destructive,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Muted => "muted",
            BadgeVariant::Destructive => "destructive",
        }
    }
}

/// Small pill for role chips and counters.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let own = vec![
        Attribute::new("class", "dos-badge", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let attrs = merge_attributes(vec![own, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..attrs, {children} }
    }
}

/// Text for a counter badge: `None` for zero, `"{max}+"` past `max`.
pub fn count_label(count: u32, max: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > max => Some(format!("{max}+")),
        n => Some(n.to_string()),
    }
}

/// Destructive counter pinned to an icon. Renders nothing for zero.
#[component]
pub fn CountBadge(
    count: u32,
    #[props(default = 99)] max: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let Some(text) = count_label(count, max) else {
        return rsx! {};
    };
    let own = vec![Attribute::new("class", "dos-count-badge", None, false)];
    let attrs = merge_attributes(vec![own, attributes]);

    rsx! {
        Badge { variant: BadgeVariant::Destructive, ..attrs, "{text}" }
    }
}
