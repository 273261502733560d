//! Status and role enums for ShopJoy entities.
//!
//! The backend is authoritative for every transition; [`OrderStatus::available_actions`]
//! only describes which transitions it will accept from a given state, so the
//! frontend can offer exactly that subset.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Matches the backend's order state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The actions the backend will accept for an order in this status.
    ///
    /// This table drives both which buttons a view renders and which
    /// transition requests the client will issue.
    #[must_use]
    pub const fn available_actions(self) -> &'static [OrderAction] {
        match self {
            Self::Pending => &[OrderAction::Confirm, OrderAction::Cancel],
            Self::Processing => &[OrderAction::Ship, OrderAction::Cancel],
            Self::Shipped => &[OrderAction::Complete],
            Self::Delivered | Self::Cancelled => &[],
        }
    }

    /// Whether `action` is a legal transition from this status.
    #[must_use]
    pub fn allows(self, action: OrderAction) -> bool {
        self.available_actions().contains(&action)
    }

    /// All statuses, in lifecycle order. Used for filter dropdowns.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pending,
            Self::Processing,
            Self::Shipped,
            Self::Delivered,
            Self::Cancelled,
        ]
    }

    /// The wire representation (`PENDING`, `PROCESSING`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(InvalidStatus(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown status or action string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid value: {0}")]
pub struct InvalidStatus(pub String);

/// A status transition an operator can request for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Confirm,
    Ship,
    Complete,
    Cancel,
}

impl OrderAction {
    /// The backend path segment for this transition
    /// (`PATCH /orders/{id}/{segment}`).
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Ship => "ship",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        }
    }

    /// Label shown on the action button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirm => "Accept",
            Self::Ship => "Ship Order",
            Self::Complete => "Mark Delivered",
            Self::Cancel => "Cancel",
        }
    }
}

impl std::fmt::Display for OrderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl std::str::FromStr for OrderAction {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirm" => Ok(Self::Confirm),
            "ship" => Ok(Self::Ship),
            "complete" => Ok(Self::Complete),
            "cancel" => Ok(Self::Cancel),
            _ => Err(InvalidStatus(s.to_string())),
        }
    }
}

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// Account role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// Full access to the admin dashboards.
    Admin,
    /// Storefront customer.
    Customer,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Customer => write!(f, "CUSTOMER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_offers_confirm_and_cancel() {
        assert_eq!(
            OrderStatus::Pending.available_actions(),
            &[OrderAction::Confirm, OrderAction::Cancel]
        );
    }

    #[test]
    fn test_processing_offers_ship_and_cancel() {
        assert_eq!(
            OrderStatus::Processing.available_actions(),
            &[OrderAction::Ship, OrderAction::Cancel]
        );
    }

    #[test]
    fn test_shipped_offers_only_complete() {
        assert_eq!(
            OrderStatus::Shipped.available_actions(),
            &[OrderAction::Complete]
        );
    }

    #[test]
    fn test_terminal_statuses_offer_nothing() {
        assert!(OrderStatus::Delivered.available_actions().is_empty());
        assert!(OrderStatus::Cancelled.available_actions().is_empty());
    }

    #[test]
    fn test_allows_consults_table() {
        assert!(OrderStatus::Pending.allows(OrderAction::Confirm));
        assert!(!OrderStatus::Pending.allows(OrderAction::Ship));
        assert!(!OrderStatus::Delivered.allows(OrderAction::Cancel));
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Shipped).expect("serialize");
        assert_eq!(json, "\"SHIPPED\"");
        let back: OrderStatus = serde_json::from_str("\"CANCELLED\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Cancelled);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "PROCESSING".parse::<OrderStatus>().expect("parse"),
            OrderStatus::Processing
        );
        assert!("SHIPPING".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_action_path_segments() {
        assert_eq!(OrderAction::Confirm.path_segment(), "confirm");
        assert_eq!(OrderAction::Complete.path_segment(), "complete");
        assert_eq!("ship".parse::<OrderAction>().expect("parse"), OrderAction::Ship);
    }

    #[test]
    fn test_user_type_wire_format() {
        let admin: UserType = serde_json::from_str("\"ADMIN\"").expect("deserialize");
        assert_eq!(admin, UserType::Admin);
        assert_eq!(
            serde_json::to_string(&UserType::Customer).expect("serialize"),
            "\"CUSTOMER\""
        );
    }
}
