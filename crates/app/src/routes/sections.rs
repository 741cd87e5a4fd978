use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Button, Card, PageHeader};

use crate::auth::use_auth;
use crate::routes::Route;

/// Page title plus a short summary for a section that has no content yet.
#[component]
fn SectionPage(title: String, description: String) -> Element {
    rsx! {
        PageHeader { title: title.clone() }
        Card { description }
    }
}

#[component]
pub fn SuperAdminHome() -> Element {
    rsx! {
        SectionPage {
            title: "Dashboard",
            description: "Platform overview across all companies.",
        }
    }
}

#[component]
pub fn SuperAdminAdmins() -> Element {
    rsx! {
        SectionPage {
            title: "Admins",
            description: "Company administrators with access to DeliveryOS.",
        }
    }
}

#[component]
pub fn SuperAdminDrivers() -> Element {
    rsx! {
        SectionPage {
            title: "All Drivers",
            description: "Every driver registered on the platform.",
        }
    }
}

#[component]
pub fn SuperAdminStats() -> Element {
    rsx! {
        SectionPage {
            title: "System Stats",
            description: "Delivery volume and platform health.",
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        SectionPage {
            title: "Dashboard",
            description: "Today's deliveries at a glance.",
        }
    }
}

/// Orders section with a shortcut to an order's printable label.
#[component]
pub fn AdminOrders() -> Element {
    let mut order_id = use_signal(String::new);
    let nav = navigator();

    let open_label = move |_: MouseEvent| {
        let id = order_id.read().trim().to_string();
        if !id.is_empty() {
            nav.push(Route::OrderLabel { id });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }

        PageHeader { title: "Orders" }
        Card {
            title: "Shipping labels",
            description: "Enter an order ID to preview and print its label.",
            div { class: "orders-label-lookup",
                input {
                    class: "orders-label-input",
                    r#type: "text",
                    placeholder: "Order ID",
                    value: "{order_id}",
                    oninput: move |evt| order_id.set(evt.value()),
                }
                Button {
                    disabled: order_id.read().trim().is_empty(),
                    onclick: open_label,
                    "Open label"
                }
            }
        }
    }
}

#[component]
pub fn AdminDrivers() -> Element {
    rsx! {
        SectionPage {
            title: "Drivers",
            description: "Drivers working for your company.",
        }
    }
}

#[component]
pub fn DriverHome() -> Element {
    rsx! {
        SectionPage {
            title: "Dashboard",
            description: "Your deliveries for today.",
        }
    }
}

#[component]
pub fn DriverOrders() -> Element {
    rsx! {
        SectionPage {
            title: "Orders",
            description: "Orders assigned to you.",
        }
    }
}

#[component]
pub fn DriverScanner() -> Element {
    rsx! {
        SectionPage {
            title: "QR Scanner",
            description: "Scan a shipping label to look up its order.",
        }
    }
}

#[component]
pub fn DriverInvitations() -> Element {
    rsx! {
        SectionPage {
            title: "Invitations",
            description: "Companies that invited you to drive for them.",
        }
    }
}

#[component]
pub fn DriverProfile() -> Element {
    rsx! { ProfileDetails {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileDetails {} }
}

/// Read-only view of the signed-in user's profile.
#[component]
fn ProfileDetails() -> Element {
    let auth = use_auth();
    let profile = auth.profile.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }

        PageHeader { title: "Profile" }
        if let Some(profile) = profile {
            Card {
                title: profile.full_name(),
                description: profile.email.clone().unwrap_or_default(),
                dl { class: "profile-details",
                    dt { "Role" }
                    dd {
                        Badge { variant: BadgeVariant::Muted, "{profile.role.label()}" }
                    }
                    dt { "User ID" }
                    dd { code { "{profile.id}" } }
                }
            }
        }
    }
}
