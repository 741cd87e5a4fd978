use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdPrinter};
use dioxus_free_icons::Icon;
use shared_types::{
    AppConfig, FontSize, LabelConfig, LabelSize, LabelTheme, ALL_FONT_SIZES, ALL_LABEL_SIZES,
    ALL_LABEL_THEMES,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, FormSelect, PageHeader, SelectOption, SwitchField,
};

use crate::api::ApiClient;
use crate::routes::Route;
use crate::shipping_label::ShippingLabel;

/// Print preview for one order's shipping label.
#[component]
pub fn OrderLabel(id: String) -> Element {
    let api = use_context::<ApiClient>();
    let defaults = try_use_context::<AppConfig>()
        .map(|config| config.label)
        .unwrap_or_default();
    let config = use_signal(|| defaults);

    let order_id = id.clone();
    let mut order = use_resource(move || {
        let api = api.clone();
        let id = order_id.clone();
        async move {
            tracing::debug!(order = %id, "loading order for label");
            api.fetch_order(&id).await
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./label_preview.css") }

        PageHeader { title: "Shipping Label",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Compact,
                onclick: move |_: MouseEvent| {
                    navigator().push(Route::AdminOrders {});
                },
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                "Back"
            }
            Button {
                size: ButtonSize::Compact,
                disabled: !matches!(&*order.read(), Some(Ok(_))),
                onclick: move |_: MouseEvent| {
                    let _ = document::eval("window.print();");
                },
                Icon::<LdPrinter> { icon: LdPrinter, width: 16, height: 16 }
                "Print"
            }
        }

        match &*order.read() {
            None => rsx! {
                p { class: "label-preview-status", "Loading order #{id}..." }
            },
            Some(Ok(loaded)) => rsx! {
                div { class: "label-preview",
                    LabelOptions { config }
                    div { class: "label-preview-canvas",
                        ShippingLabel { order: Some(loaded.clone()), config: config() }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    class: "label-preview-error",
                    title: "Could not load order",
                    description: err.friendly_message(),
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| order.restart(),
                        "Retry"
                    }
                }
            },
        }
    }
}

/// Size, font, theme and content switches bound to `config`.
#[component]
fn LabelOptions(mut config: Signal<LabelConfig>) -> Element {
    let current = config();
    let sizes = ALL_LABEL_SIZES
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect::<Vec<_>>();
    let fonts = ALL_FONT_SIZES
        .iter()
        .map(|f| SelectOption::new(f.as_str(), f.label()))
        .collect::<Vec<_>>();
    let themes = ALL_LABEL_THEMES
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "label-preview-options",
            FormSelect {
                label: "Label size",
                value: current.size.as_str(),
                options: sizes,
                on_change: move |key: String| config.write().size = LabelSize::from_key(&key),
            }
            FormSelect {
                label: "Font size",
                value: current.font_size.as_str(),
                options: fonts,
                on_change: move |key: String| config.write().font_size = FontSize::from_key(&key),
            }
            FormSelect {
                label: "Theme",
                value: current.theme.as_str(),
                options: themes,
                on_change: move |key: String| config.write().theme = LabelTheme::from_key(&key),
            }
            SwitchField {
                label: "QR code",
                checked: current.include_qr,
                on_change: move |on: bool| config.write().include_qr = on,
            }
            SwitchField {
                label: "Barcode",
                checked: current.include_barcode,
                on_change: move |on: bool| config.write().include_barcode = on,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        config: LabelConfig,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let config = use_signal(|| props.config);
        rsx! { LabelOptions { config } }
    }

    fn render(config: LabelConfig) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { config });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn options_list_every_preset() {
        let html = render(LabelConfig::default());
        for size in ALL_LABEL_SIZES {
            assert!(html.contains(size.label()), "missing {}", size.label());
        }
        for theme in ALL_LABEL_THEMES {
            assert!(html.contains(theme.label()), "missing {}", theme.label());
        }
        assert!(html.contains("QR code"));
        assert!(html.contains("Barcode"));
    }
}
