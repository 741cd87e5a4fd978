//! Styled DeliveryOS component library built on `dioxus-primitives`.

pub mod components;
pub mod theme;

pub use components::*;
