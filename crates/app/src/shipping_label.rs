use dioxus::prelude::*;
use shared_types::{
    barcode_bars, AppConfig, LabelConfig, Order, TrackingPayload, BARCODE_BAR_GAP,
    BARCODE_BAR_HEIGHT,
};
use shared_ui::QrCode;

/// Sender block printed on every label.
const FROM_ADDRESS: [&str; 3] = [
    "Your Company Name",
    "123 Business Street",
    "City, State 12345",
];

/// Printable shipping label for `order`.
///
/// The tracking URL base comes from the [`AppConfig`] context when one is
/// provided. The footer carries today's date.
#[component]
pub fn ShippingLabel(
    order: Option<Order>,
    #[props(default)] config: LabelConfig,
    #[props(default)] class: String,
) -> Element {
    let app_config = try_use_context::<AppConfig>().unwrap_or_default();

    let Some(order) = order else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./shipping_label.css") }
            div { class: "label-empty {class}",
                p { "No order data available." }
            }
        };
    };

    let tracking = TrackingPayload::for_order(&order, app_config.tracking_base_url());
    let qr_data = match tracking.to_json() {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::error!(
                error = %err,
                order = %order.order_number,
                "could not encode tracking payload"
            );
            None
        }
    };
    let generated = chrono::Local::now().format("%-m/%-d/%Y").to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shipping_label.css") }

        div {
            class: "shipping-label {config.font_size.class()} {class}",
            style: config.size.style(),
            "data-size": config.size.as_str(),
            "data-theme": config.theme.as_str(),

            div { class: "label-header",
                div {
                    h1 { class: "label-title", "SHIPPING LABEL" }
                    p { class: "label-order", "Order: #{order.order_number}" }
                }
                if config.include_qr {
                    if let Some(payload) = qr_data {
                        div { class: "label-qr", "data-payload": "{payload}",
                            QrCode { value: payload.clone(), size: config.size.qr_size() }
                        }
                    }
                }
            }

            div { class: "label-section",
                p { class: "label-heading", "FROM:" }
                for line in FROM_ADDRESS {
                    p { "{line}" }
                }
            }

            div { class: "label-section label-to",
                p { class: "label-heading", "TO:" }
                p { class: "label-strong", "{order.customer_name}" }
                p { "{order.delivery_address}" }
                if let Some(phone) = order.phone() {
                    p { "Phone: {phone}" }
                }
            }

            div { class: "label-section label-grid",
                div {
                    p { class: "label-strong", "Priority:" }
                    p { class: "label-priority", "{order.priority_label()}" }
                }
                div {
                    p { class: "label-strong", "Status:" }
                    p { class: "label-status", "{order.status_label()}" }
                }
            }

            if let Some(notes) = order.notes() {
                div { class: "label-section label-notes",
                    p { class: "label-heading", "NOTES:" }
                    p { "{notes}" }
                }
            }

            if config.include_barcode {
                Barcode { text: order.order_number.clone() }
            }

            div { class: "label-footer",
                p { "Generated: {generated}" }
            }
        }
    }
}

/// Decorative bar pattern with the text printed underneath.
///
/// Not a scannable symbology; see [`shared_types::barcode_bars`].
#[component]
fn Barcode(text: String) -> Element {
    let bars = barcode_bars(&text);

    rsx! {
        div { class: "label-barcode",
            div { class: "label-barcode-bars", "aria-hidden": "true",
                for (i, bar) in bars.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "label-barcode-bar",
                        style: "width: {bar.width}px; height: {BARCODE_BAR_HEIGHT}px; margin-right: {BARCODE_BAR_GAP}px;",
                    }
                }
            }
            p { class: "label-barcode-text", "{text}" }
        }
    }
}
