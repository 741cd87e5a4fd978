use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority shown on a label when the order carries none.
pub const DEFAULT_PRIORITY: &str = "NORMAL";

/// A delivery order as returned by the orders API.
///
/// Optional fields are rendered when present; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub delivery_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_notes: Option<String>,
}

impl Order {
    /// Uppercased priority, `NORMAL` when missing or blank.
    pub fn priority_label(&self) -> String {
        self.priority
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string())
    }

    pub fn status_label(&self) -> String {
        self.status.to_uppercase()
    }

    /// Phone number, if the customer gave a non-empty one.
    pub fn phone(&self) -> Option<&str> {
        self.customer_phone.as_deref().filter(|p| !p.is_empty())
    }

    /// Delivery notes, if non-empty.
    pub fn notes(&self) -> Option<&str> {
        self.delivery_notes.as_deref().filter(|n| !n.is_empty())
    }
}
