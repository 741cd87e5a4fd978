use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBell, LdLayoutDashboard, LdLogOut, LdMenu, LdPackage, LdScan, LdSettings,
    LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{is_active, nav_items_for, AppConfig, NavIcon, Role, UserProfile};
use shared_ui::theme::ThemeToggle;
use shared_ui::{
    Badge, BadgeVariant, DropdownMenu, DropdownMenuAction, DropdownMenuLabel, DropdownMenuSeparator,
    Sheet, SheetClose, Sidebar, SidebarContent, SidebarHeader, SidebarInset, SidebarLink,
    SidebarMenu, UserAvatar,
};

use crate::notifications::NotificationsBell;

/// Dashboard chrome: header, role navigation and user menu around `children`.
///
/// Router-agnostic. The caller supplies the current path and decides what
/// navigating and signing out mean. While `profile` is `None` only a loading
/// screen is shown.
#[component]
pub fn DashboardLayout(
    profile: Option<UserProfile>,
    current_path: String,
    on_navigate: EventHandler<String>,
    on_sign_out: EventHandler<()>,
    children: Element,
) -> Element {
    let mut mobile_open = use_signal(|| false);
    let features = try_use_context::<AppConfig>()
        .map(|config| config.features)
        .unwrap_or_default();

    let Some(profile) = profile else {
        return rsx! { LoadingScreen {} };
    };
    let role = profile.role.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "dashboard-shell",
            Sidebar {
                SidebarHeader { Brand {} }
                SidebarContent {
                    NavMenu {
                        role: role.clone(),
                        current_path: current_path.clone(),
                        on_select: move |href: String| on_navigate.call(href),
                    }
                }
            }

            Sheet {
                open: mobile_open(),
                on_close: move |_| mobile_open.set(false),
                Sidebar { mobile: true,
                    SidebarHeader {
                        Brand {}
                        SheetClose { on_close: move |_| mobile_open.set(false) }
                    }
                    SidebarContent {
                        NavMenu {
                            role: role.clone(),
                            current_path: current_path.clone(),
                            on_select: move |href: String| {
                                select_from_panel(
                                    href,
                                    || mobile_open.set(false),
                                    |href| on_navigate.call(href),
                                );
                            },
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "dashboard-header",
                    button {
                        class: "dashboard-mobile-trigger",
                        r#type: "button",
                        "aria-label": "Open navigation",
                        onclick: move |_| mobile_open.set(true),
                        Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                    }
                    div { class: "dashboard-header-brand", Brand {} }
                    div { class: "dashboard-header-spacer" }
                    div { class: "dashboard-header-actions",
                        if features.theme_toggle {
                            ThemeToggle {}
                        }
                        if features.notifications {
                            NotificationsBell {}
                        }
                        UserMenu { profile, on_navigate, on_sign_out }
                    }
                }

                main { class: "dashboard-main",
                    div { class: "dashboard-container", {children} }
                }
            }
        }
    }
}

/// Close the mobile panel, then follow the selected entry.
fn select_from_panel(href: String, close: impl FnOnce(), navigate: impl FnOnce(String)) {
    close();
    navigate(href);
}

/// Full-screen placeholder shown until the session resolves.
#[component]
fn LoadingScreen() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "dashboard-loading", role: "status",
            div { class: "dashboard-loading-icon",
                Icon::<LdPackage> { icon: LdPackage, width: 48, height: 48 }
            }
            p { "Loading..." }
        }
    }
}

#[component]
fn Brand() -> Element {
    rsx! {
        div { class: "dashboard-brand",
            span { class: "dashboard-brand-mark",
                Icon::<LdPackage> { icon: LdPackage, width: 24, height: 24 }
            }
            span { class: "dashboard-brand-name", "DeliveryOS" }
        }
    }
}

/// Role navigation list. Shared by the desktop sidebar and the mobile sheet.
#[component]
fn NavMenu(role: Role, current_path: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        SidebarMenu {
            for item in nav_items_for(&role).iter() {
                SidebarLink {
                    key: "{item.href}",
                    active: is_active(&current_path, item.href),
                    onclick: move |_| on_select.call(item.href.to_string()),
                    NavGlyph { icon: item.icon }
                    span { "{item.name}" }
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        NavIcon::Admins => rsx! {
            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
        },
        NavIcon::Drivers => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        NavIcon::Stats => rsx! {
            Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 }
        },
        NavIcon::Orders => rsx! {
            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
        },
        NavIcon::Scanner => rsx! {
            Icon::<LdScan> { icon: LdScan, width: 18, height: 18 }
        },
        NavIcon::Invitations => rsx! {
            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
        },
        NavIcon::Profile => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
    }
}

/// Avatar button opening the account menu.
#[component]
fn UserMenu(
    profile: UserProfile,
    on_navigate: EventHandler<String>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let initial = profile.avatar_initial();
    let full_name = profile.full_name();
    let email = profile.email.clone().unwrap_or_default();
    let role_label = profile.role.label();
    let settings_path = profile.role.settings_path();

    rsx! {
        DropdownMenu {
            trigger: rsx! { UserAvatar { initial } },
            DropdownMenuLabel {
                p { class: "user-menu-name", "{full_name}" }
                p { class: "user-menu-email", "{email}" }
                Badge { variant: BadgeVariant::Muted, "{role_label}" }
            }
            DropdownMenuSeparator {}
            DropdownMenuAction {
                index: 0,
                on_select: move |_| on_navigate.call(settings_path.to_string()),
                Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                span { "Settings" }
            }
            DropdownMenuSeparator {}
            DropdownMenuAction {
                index: 1,
                destructive: true,
                on_select: move |_| on_sign_out.call(()),
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                span { "Sign out" }
            }
        }
    }
}
