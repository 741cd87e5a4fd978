use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::types::QrError;

/// Encode `value` as an SVG QR code at least `size` pixels square.
pub fn qr_svg(value: &str, size: u32) -> Result<String, QrError> {
    let code = qrcode::QrCode::new(value.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(false)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Scannable QR code for `value`, drawn `size` pixels square.
///
/// Values too long to encode render nothing and log a warning.
#[component]
pub fn QrCode(
    value: String,
    size: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let svg = match qr_svg(&value, size) {
        Ok(svg) => svg,
        Err(err) => {
            tracing::warn!(error = %err, len = value.len(), "could not encode QR code");
            return rsx! {};
        }
    };

    let base = vec![
        Attribute::new("class", "dos-qr-code", None, false),
        Attribute::new("data-size", size.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            style: "width: {size}px; height: {size}px;",
            dangerous_inner_html: svg,
            ..merged,
        }
    }
}
