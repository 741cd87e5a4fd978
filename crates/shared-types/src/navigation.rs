use crate::profile::Role;

/// Icon shown next to a navigation entry. The UI layer maps each variant to
/// a concrete glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Admins,
    Drivers,
    Stats,
    Orders,
    Scanner,
    Invitations,
    Profile,
}

/// A single sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

const fn item(name: &'static str, href: &'static str, icon: NavIcon) -> NavItem {
    NavItem { name, href, icon }
}

const SUPER_ADMIN_NAV: &[NavItem] = &[
    item("Dashboard", "/super-admin", NavIcon::Dashboard),
    item("Admins", "/super-admin/admins", NavIcon::Admins),
    item("All Drivers", "/super-admin/drivers", NavIcon::Drivers),
    item("System Stats", "/super-admin/stats", NavIcon::Stats),
];

const ADMIN_NAV: &[NavItem] = &[
    item("Dashboard", "/admin/dashboard", NavIcon::Dashboard),
    item("Orders", "/admin/orders", NavIcon::Orders),
    item("Drivers", "/admin/drivers", NavIcon::Drivers),
];

const DRIVER_NAV: &[NavItem] = &[
    item("Dashboard", "/driver/home", NavIcon::Dashboard),
    item("Orders", "/driver/orders", NavIcon::Orders),
    item("QR Scanner", "/driver/scanner", NavIcon::Scanner),
    item("Invitations", "/driver/invitations", NavIcon::Invitations),
    item("Profile", "/driver/profile", NavIcon::Profile),
];

/// Unrecognised roles only get a dashboard link.
const DEFAULT_NAV: &[NavItem] = &[item("Dashboard", "/admin/dashboard", NavIcon::Dashboard)];

/// Ordered sidebar entries for a role.
pub fn nav_items_for(role: &Role) -> &'static [NavItem] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN_NAV,
        Role::Admin => ADMIN_NAV,
        Role::Driver => DRIVER_NAV,
        Role::Other(_) => DEFAULT_NAV,
    }
}

/// Landing page for a role (its "Dashboard" entry).
pub fn home_path(role: &Role) -> &'static str {
    nav_items_for(role)
        .first()
        .map(|item| item.href)
        .unwrap_or("/")
}

/// Whether `href` should be highlighted for `current_path`.
///
/// Matches the exact path or any nested route below it on a segment
/// boundary, so `/admin/orders/42` highlights `/admin/orders` but
/// `/admin/ordersx` does not.
pub fn is_active(current_path: &str, href: &str) -> bool {
    match current_path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(role: &Role) -> Vec<&'static str> {
        nav_items_for(role).iter().map(|i| i.name).collect()
    }

    fn hrefs(role: &Role) -> Vec<&'static str> {
        nav_items_for(role).iter().map(|i| i.href).collect()
    }

    #[test]
    fn super_admin_navigation() {
        assert_eq!(
            names(&Role::SuperAdmin),
            vec!["Dashboard", "Admins", "All Drivers", "System Stats"]
        );
        assert_eq!(hrefs(&Role::SuperAdmin)[0], "/super-admin");
    }

    #[test]
    fn admin_navigation() {
        assert_eq!(
            names(&Role::Admin),
            vec!["Dashboard", "Orders", "Drivers"]
        );
        assert_eq!(
            hrefs(&Role::Admin),
            vec!["/admin/dashboard", "/admin/orders", "/admin/drivers"]
        );
    }

    #[test]
    fn driver_navigation() {
        assert_eq!(
            names(&Role::Driver),
            vec!["Dashboard", "Orders", "QR Scanner", "Invitations", "Profile"]
        );
        assert_eq!(hrefs(&Role::Driver)[0], "/driver/home");
    }

    #[test]
    fn unknown_role_gets_dashboard_only() {
        let role = Role::Other("auditor".into());
        assert_eq!(names(&role), vec!["Dashboard"]);
    }

    #[test]
    fn roles_share_only_dashboard() {
        let roles = [Role::SuperAdmin, Role::Admin, Role::Driver];
        for (i, a) in roles.iter().enumerate() {
            for b in roles.iter().skip(i + 1) {
                let shared: Vec<_> = nav_items_for(a)
                    .iter()
                    .filter(|x| nav_items_for(b).iter().any(|y| y.href == x.href))
                    .collect();
                assert!(shared.is_empty(), "{a} and {b} share {shared:?}");
            }
            assert_eq!(nav_items_for(a)[0].icon, NavIcon::Dashboard);
        }
    }

    #[test]
    fn home_path_is_dashboard_entry() {
        assert_eq!(home_path(&Role::SuperAdmin), "/super-admin");
        assert_eq!(home_path(&Role::Admin), "/admin/dashboard");
        assert_eq!(home_path(&Role::Driver), "/driver/home");
    }

    #[test]
    fn exact_path_is_active() {
        assert!(is_active("/admin/orders", "/admin/orders"));
    }

    #[test]
    fn nested_path_is_active() {
        assert!(is_active("/admin/orders/42", "/admin/orders"));
        assert!(is_active("/admin/orders/42/label", "/admin/orders"));
    }

    #[test]
    fn sibling_path_is_not_active() {
        assert!(!is_active("/admin/reports", "/admin/orders"));
        assert!(!is_active("/admin/ordersx", "/admin/orders"));
        assert!(!is_active("/admin", "/admin/orders"));
    }
}
