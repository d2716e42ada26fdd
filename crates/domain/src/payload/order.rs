//! Store order payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, not yet approved.
    #[default]
    Placed,
    /// Order approved.
    Approved,
    /// Order delivered.
    Delivered,
}

impl OrderStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Approved => "approved",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchase order for a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    pub id: i64,
    /// Identifier of the pet being ordered.
    pub pet_id: i64,
    /// Number of pets ordered.
    pub quantity: i32,
    /// Requested shipping date.
    pub ship_date: DateTime<Utc>,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Whether the order is complete.
    pub complete: bool,
}

impl Order {
    /// Creates an order for one pet, shipping now, placed and incomplete.
    #[must_use]
    pub fn new(id: i64, pet_id: i64) -> Self {
        Self {
            id,
            pet_id,
            quantity: 1,
            ship_date: Utc::now(),
            status: OrderStatus::Placed,
            complete: false,
        }
    }

    /// Sets the quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the shipping date.
    #[must_use]
    pub const fn with_ship_date(mut self, ship_date: DateTime<Utc>) -> Self {
        self.ship_date = ship_date;
        self
    }

    /// Sets the fulfillment status.
    #[must_use]
    pub const fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the order complete.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.complete = true;
        self
    }
}
