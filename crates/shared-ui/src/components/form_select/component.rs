use dioxus::prelude::*;

/// One `<option>` of a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Labelled native `<select>`. `on_change` receives the chosen option's value.
#[component]
pub fn FormSelect(
    label: String,
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "dos-form-select",
            span { class: "dos-form-select-label", "{label}" }
            select {
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_option_per_entry() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                FormSelect {
                    label: "Size",
                    value: "large",
                    options: vec![
                        SelectOption::new("small", "Small"),
                        SelectOption::new("large", "Large"),
                    ],
                    on_change: |_| {},
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Size"));
        assert_eq!(html.matches("<option").count(), 2);
    }
}
