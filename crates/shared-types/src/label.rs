use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::Order;

/// Base URL used for tracking links when none is configured.
pub const DEFAULT_APP_URL: &str = "https://example.com";

/// Height of every decorative barcode bar, in pixels.
pub const BARCODE_BAR_HEIGHT: u32 = 30;

/// Gap after each decorative barcode bar, in pixels.
pub const BARCODE_BAR_GAP: u32 = 1;

/// Physical footprint of a printed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSize {
    Small,
    #[default]
    Medium,
    Large,
}

pub const ALL_LABEL_SIZES: &[LabelSize] = &[LabelSize::Small, LabelSize::Medium, LabelSize::Large];

impl LabelSize {
    /// `(width, height)` in CSS pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            LabelSize::Small => (225, 125),
            LabelSize::Medium => (400, 300),
            LabelSize::Large => (400, 600),
        }
    }

    /// Inline style fixing the label footprint.
    pub fn style(&self) -> String {
        let (w, h) = self.dimensions();
        format!("width: {w}px; height: {h}px;")
    }

    /// Edge length of the QR code drawn on a label of this size.
    pub fn qr_size(&self) -> u32 {
        match self {
            LabelSize::Small => 40,
            LabelSize::Medium | LabelSize::Large => 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSize::Small => "small",
            LabelSize::Medium => "medium",
            LabelSize::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LabelSize::Small => "Small (225 x 125)",
            LabelSize::Medium => "Medium (400 x 300)",
            LabelSize::Large => "Large (400 x 600)",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "small" => LabelSize::Small,
            "large" => LabelSize::Large,
            _ => LabelSize::Medium,
        }
    }
}

/// Visual theme for a label. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelTheme {
    Minimal,
    #[default]
    Standard,
    Branded,
}

pub const ALL_LABEL_THEMES: &[LabelTheme] = &[
    LabelTheme::Minimal,
    LabelTheme::Standard,
    LabelTheme::Branded,
];

impl LabelTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelTheme::Minimal => "minimal",
            LabelTheme::Standard => "standard",
            LabelTheme::Branded => "branded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LabelTheme::Minimal => "Minimal",
            LabelTheme::Standard => "Standard",
            LabelTheme::Branded => "Branded",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "minimal" => LabelTheme::Minimal,
            "branded" => LabelTheme::Branded,
            _ => LabelTheme::Standard,
        }
    }
}

/// Text scale applied to the whole label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

pub const ALL_FONT_SIZES: &[FontSize] = &[FontSize::Small, FontSize::Medium, FontSize::Large];

impl FontSize {
    /// CSS class carrying the text scale.
    pub fn class(&self) -> &'static str {
        match self {
            FontSize::Small => "text-xs",
            FontSize::Medium => "text-sm",
            FontSize::Large => "text-base",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }
}

/// Rendering options for a shipping label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelConfig {
    pub size: LabelSize,
    pub theme: LabelTheme,
    #[serde(rename = "includeQR")]
    pub include_qr: bool,
    pub include_barcode: bool,
    pub font_size: FontSize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            size: LabelSize::default(),
            theme: LabelTheme::default(),
            include_qr: true,
            include_barcode: true,
            font_size: FontSize::default(),
        }
    }
}

/// JSON object encoded into a label's QR code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingPayload {
    pub order_id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub tracking_url: String,
}

impl TrackingPayload {
    pub fn for_order(order: &Order, base_url: &str) -> Self {
        Self {
            order_id: order.id,
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            delivery_address: order.delivery_address.clone(),
            tracking_url: tracking_url(base_url, &order.order_number),
        }
    }

    /// Compact JSON in declaration order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Public tracking link for an order number.
pub fn tracking_url(base_url: &str, order_number: &str) -> String {
    format!("{base_url}/track/{order_number}")
}

/// One bar of the decorative label barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeBar {
    /// Width in pixels, always 1..=3.
    pub width: u32,
}

/// Decorative bar pattern for `text`: one bar per character, width
/// `(code point mod 3) + 1`.
///
/// Characters are Unicode scalar values, so a character outside the Basic
/// Multilingual Plane yields a single bar rather than one per UTF-16 unit.
///
/// This is not a barcode symbology and cannot be scanned back into text.
pub fn barcode_bars(text: &str) -> Vec<BarcodeBar> {
    text.chars()
        .map(|c| BarcodeBar {
            width: (c as u32 % 3) + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn order() -> Order {
        Order {
            id: Uuid::nil(),
            order_number: "A1".into(),
            customer_name: "X".into(),
            delivery_address: "Y".into(),
            customer_phone: None,
            priority: None,
            status: "pending".into(),
            delivery_notes: None,
        }
    }

    #[test]
    fn payload_json_has_fixed_field_order() {
        let json = TrackingPayload::for_order(&order(), DEFAULT_APP_URL)
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"orderId":"00000000-0000-0000-0000-000000000000","orderNumber":"A1","customerName":"X","deliveryAddress":"Y","trackingUrl":"https://example.com/track/A1"}"#
        );
    }

    #[test]
    fn payload_json_is_deterministic() {
        let a = TrackingPayload::for_order(&order(), "https://ship.test")
            .to_json()
            .unwrap();
        let b = TrackingPayload::for_order(&order(), "https://ship.test")
            .to_json()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn payload_excludes_non_tracking_fields() {
        let o = Order {
            customer_phone: Some("555".into()),
            delivery_notes: Some("side door".into()),
            ..order()
        };
        let json = TrackingPayload::for_order(&o, DEFAULT_APP_URL)
            .to_json()
            .unwrap();
        assert!(!json.contains("555"));
        assert!(!json.contains("side door"));
    }

    #[test]
    fn barcode_widths_follow_char_codes() {
        // 'A' = 65 -> 65 % 3 = 2 -> 3px; '1' = 49 -> 49 % 3 = 1 -> 2px
        assert_eq!(
            barcode_bars("A1"),
            vec![BarcodeBar { width: 3 }, BarcodeBar { width: 2 }]
        );
        // 'B' = 66 -> 0 -> 1px
        assert_eq!(barcode_bars("B"), vec![BarcodeBar { width: 1 }]);
        assert!(barcode_bars("").is_empty());
    }

    #[test]
    fn astral_characters_make_one_bar() {
        // U+1F4E6 = 128230 -> 128230 % 3 = 1 -> 2px
        assert_eq!(barcode_bars("\u{1F4E6}"), vec![BarcodeBar { width: 2 }]);
    }

    #[test]
    fn barcode_widths_stay_in_range() {
        for bar in barcode_bars("ORD-2026-000123-xyz") {
            assert!((1..=3).contains(&bar.width));
        }
    }

    #[test]
    fn qr_size_depends_on_label_size() {
        assert_eq!(LabelSize::Small.qr_size(), 40);
        assert_eq!(LabelSize::Medium.qr_size(), 60);
        assert_eq!(LabelSize::Large.qr_size(), 60);
    }

    #[test]
    fn size_presets() {
        assert_eq!(LabelSize::Small.dimensions(), (225, 125));
        assert_eq!(LabelSize::Medium.dimensions(), (400, 300));
        assert_eq!(LabelSize::Large.dimensions(), (400, 600));
        assert_eq!(LabelSize::Small.style(), "width: 225px; height: 125px;");
    }

    #[test]
    fn font_size_classes() {
        assert_eq!(FontSize::Small.class(), "text-xs");
        assert_eq!(FontSize::Medium.class(), "text-sm");
        assert_eq!(FontSize::Large.class(), "text-base");
    }

    #[test]
    fn config_uses_camel_case_keys() {
        let config: LabelConfig = serde_json::from_str(
            r#"{"size":"small","theme":"branded","includeQR":false,"includeBarcode":true,"fontSize":"large"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            LabelConfig {
                size: LabelSize::Small,
                theme: LabelTheme::Branded,
                include_qr: false,
                include_barcode: true,
                font_size: FontSize::Large,
            }
        );
    }

    #[test]
    fn config_missing_keys_use_defaults() {
        let config: LabelConfig = serde_json::from_str(r#"{"size":"large"}"#).unwrap();
        assert_eq!(config.size, LabelSize::Large);
        assert!(config.include_qr);
        assert_eq!(config.font_size, FontSize::Medium);
    }

    #[test]
    fn keys_fall_back_to_defaults() {
        for size in ALL_LABEL_SIZES {
            assert_eq!(LabelSize::from_key(size.as_str()), *size);
        }
        for theme in ALL_LABEL_THEMES {
            assert_eq!(LabelTheme::from_key(theme.as_str()), *theme);
        }
        for font in ALL_FONT_SIZES {
            assert_eq!(FontSize::from_key(font.as_str()), *font);
        }
        assert_eq!(LabelSize::from_key("huge"), LabelSize::Medium);
    }
}
