pub mod label_preview;
pub mod landing;
pub mod not_found;
pub mod sections;

use dioxus::prelude::*;

use crate::auth::{complete_sign_out, use_auth};
use crate::layout::DashboardLayout;

use label_preview::OrderLabel;
use landing::Landing;
use not_found::NotFound;
use sections::{
    AdminDashboard, AdminDrivers, AdminOrders, DriverHome, DriverInvitations, DriverOrders,
    DriverProfile, DriverScanner, Profile, SuperAdminAdmins, SuperAdminDrivers, SuperAdminHome,
    SuperAdminStats,
};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[layout(AppLayout)]
        #[route("/super-admin")]
        SuperAdminHome {},
        #[route("/super-admin/admins")]
        SuperAdminAdmins {},
        #[route("/super-admin/drivers")]
        SuperAdminDrivers {},
        #[route("/super-admin/stats")]
        SuperAdminStats {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/orders")]
        AdminOrders {},
        #[route("/admin/orders/:id/label")]
        OrderLabel { id: String },
        #[route("/admin/drivers")]
        AdminDrivers {},
        #[route("/driver/home")]
        DriverHome {},
        #[route("/driver/orders")]
        DriverOrders {},
        #[route("/driver/scanner")]
        DriverScanner {},
        #[route("/driver/invitations")]
        DriverInvitations {},
        #[route("/driver/profile")]
        DriverProfile {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Push an href from the navigation table onto the router.
fn push_path(nav: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(_) => tracing::warn!(%path, "no route for navigation target"),
    }
}

/// Router-aware wrapper feeding [`DashboardLayout`] from auth state.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let nav = navigator();

    let profile = auth.profile;
    let resolved = auth.resolved;
    use_effect(move || {
        if resolved() && profile.read().is_none() {
            tracing::debug!("no active session, leaving dashboard");
            nav.replace(Route::Landing {});
        }
    });

    let on_sign_out = move |_: ()| {
        let mut auth = auth.clone();
        let sign_out = auth.session.sign_out();
        spawn(async move {
            let _ = complete_sign_out(sign_out, |path| {
                push_path(nav, path);
                auth.clear();
            })
            .await;
        });
    };

    rsx! {
        DashboardLayout {
            profile: profile(),
            current_path: route.to_string(),
            on_navigate: move |path: String| push_path(nav, &path),
            on_sign_out,
            Outlet::<Route> {}
        }
    }
}
