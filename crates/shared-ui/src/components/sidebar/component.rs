use dioxus::prelude::*;

// ─── Containers ────────────────────────────────────────────────────────

/// Fixed navigation column. Hidden below the `lg` breakpoint unless
/// `mobile` is set, in which case it fills its parent (e.g. a sheet).
#[component]
pub fn Sidebar(
    #[props(default = false)] mobile: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let variant = if mobile { "mobile" } else { "desktop" };
    let own = vec![
        Attribute::new("class", "dos-sidebar", None, false),
        Attribute::new("data-variant", variant, None, false),
    ];
    let attrs = dioxus_primitives::merge_attributes(vec![own, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "dos-sidebar-header", {children} }
    }
}

/// Scrollable middle section.
#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "dos-sidebar-content", {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "dos-sidebar-menu", {children} }
    }
}

/// One navigation entry: a list item holding a button.
///
/// `active` marks the current section with `data-active` and
/// `aria-current="page"`.
#[component]
pub fn SidebarLink(
    #[props(default)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "dos-sidebar-menu-item",
            button {
                class: "dos-sidebar-menu-button",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| onclick.call(evt),
                {children}
            }
        }
    }
}

/// Content column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "dos-sidebar-inset", {children} }
    }
}
