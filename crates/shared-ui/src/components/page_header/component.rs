use dioxus::prelude::*;

/// Title row at the top of a page. Children render on the right as actions.
#[component]
pub fn PageHeader(title: String, #[props(default = VNode::empty())] children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "dos-page-header",
            h1 { class: "dos-page-title", "{title}" }
            div { class: "dos-page-actions", {children} }
        }
    }
}
