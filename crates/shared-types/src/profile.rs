use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dashboard role controlling navigation and default routes.
///
/// - `SuperAdmin`: platform operator. Manages admins and sees every driver.
/// - `Admin`: dispatch office. Manages orders and its own drivers.
/// - `Driver`: delivers orders and scans labels.
/// - `Other`: any role string the session provider sends that we do not
///   know about. Kept verbatim so it round-trips, rendered with the minimal
///   navigation set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    Admin,
    Driver,
    Other(String),
}

impl Role {
    /// Parse the wire value. Unknown values never fail.
    pub fn parse(s: &str) -> Self {
        match s {
            "super_admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "driver" => Role::Driver,
            other => Role::Other(other.to_string()),
        }
    }

    /// Wire value as stored by the session provider.
    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Driver => "driver",
            Role::Other(s) => s.as_str(),
        }
    }

    /// Human-readable label for the user menu (`super_admin` → `super admin`).
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// Target of the user menu's "Settings" entry.
    pub fn settings_path(&self) -> &'static str {
        match self {
            Role::Driver => "/driver/profile",
            _ => "/profile",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in user as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

impl UserProfile {
    /// Single uppercase letter for the avatar fallback.
    ///
    /// First letter of the first name, else of the email, else `U`.
    pub fn avatar_initial(&self) -> String {
        [self.first_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|s| s.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }

    /// "First Last", skipping whichever half is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
