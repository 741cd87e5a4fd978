use dioxus::prelude::*;
use dioxus_primitives::switch::{Switch, SwitchThumb};

/// Labelled on/off switch. `on_change` receives the new state.
#[component]
pub fn SwitchField(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "dos-switch-field",
            Switch {
                class: "dos-switch",
                checked,
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb { class: "dos-switch-thumb" }
            }
            span { class: "dos-switch-label", "{label}" }
        }
    }
}
