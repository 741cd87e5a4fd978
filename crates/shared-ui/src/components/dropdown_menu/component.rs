use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

/// Popover menu opened by clicking `trigger`. Children are the menu body.
#[component]
pub fn DropdownMenu(trigger: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { class: "dos-dropdown-menu",
            prim::DropdownMenuTrigger { class: "dos-dropdown-menu-trigger", {trigger} }
            prim::DropdownMenuContent { class: "dos-dropdown-menu-content", {children} }
        }
    }
}

/// Selectable row. `index` sets its keyboard order within the menu.
#[component]
pub fn DropdownMenuAction(
    index: usize,
    on_select: EventHandler<()>,
    #[props(default)] destructive: bool,
    children: Element,
) -> Element {
    let class = if destructive {
        "dos-dropdown-menu-item dos-dropdown-menu-item-destructive"
    } else {
        "dos-dropdown-menu-item"
    };

    rsx! {
        prim::DropdownMenuItem::<usize> {
            class: "{class}",
            value: index,
            index,
            on_select: move |_: usize| on_select.call(()),
            {children}
        }
    }
}

/// Non-interactive heading block at the top of a menu.
#[component]
pub fn DropdownMenuLabel(children: Element) -> Element {
    rsx! {
        div { class: "dos-dropdown-menu-label", {children} }
    }
}

#[component]
pub fn DropdownMenuSeparator() -> Element {
    rsx! {
        div { class: "dos-dropdown-menu-separator", role: "separator" }
    }
}
