use dioxus::prelude::*;
use dioxus_primitives::merge_attributes;

/// Bordered surface. The header is only drawn when `title` or
/// `description` is non-empty.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] description: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let own = vec![Attribute::new("class", "dos-card", None, false)];
    let attrs = merge_attributes(vec![own, attributes]);
    let has_header = !title.is_empty() || !description.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { ..attrs,
            if has_header {
                header { class: "dos-card-header",
                    if !title.is_empty() {
                        h3 { class: "dos-card-title", "{title}" }
                    }
                    if !description.is_empty() {
                        p { class: "dos-card-description", "{description}" }
                    }
                }
            }
            div { class: "dos-card-body", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn header_follows_title_and_description() {
        let html = render(|| rsx! { Card { title: "Orders", description: "All of them" } });
        assert!(html.contains("dos-card-header"));
        assert!(html.contains("Orders"));
        assert!(html.contains("All of them"));
    }

    #[test]
    fn body_only_card_has_no_header() {
        let html = render(|| rsx! { Card { p { "body" } } });
        assert!(!html.contains("dos-card-header"));
        assert!(html.contains("body"));
    }
}
