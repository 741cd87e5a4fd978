use dioxus::prelude::*;
use dioxus_primitives::merge_attributes;

/// Visual weight of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Footprint of a [`Button`]. `Icon` is square and meant for a lone glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Regular,
    Compact,
    Icon,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Regular => "regular",
            ButtonSize::Compact => "compact",
            ButtonSize::Icon => "icon",
        }
    }
}

/// `type="button"` so it never submits an enclosing form.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let own = vec![
        Attribute::new("class", "dos-button", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
        Attribute::new("data-size", size.as_str(), None, false),
    ];
    let attrs = merge_attributes(vec![own, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..attrs,
            {children}
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
    fn defaults_to_regular_primary() {
        let html = render(|| rsx! { Button { "Save" } });
        assert!(html.contains(r#"data-variant="primary""#));
        assert!(html.contains(r#"data-size="regular""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("Save"));
    }

    #[test]
    fn variant_and_size_are_exposed() {
        let html = render(|| {
            rsx! {
                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Icon, "x" }
            }
        });
        assert!(html.contains(r#"data-variant="ghost""#));
        assert!(html.contains(r#"data-size="icon""#));
    }
}
