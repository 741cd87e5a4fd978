use dioxus::prelude::*;

/// Left-edge off-canvas panel with a backdrop. Renders nothing while closed.
///
/// Clicking the backdrop calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Sheet(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dos-sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "dos-sheet-panel",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "dos-sheet-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
