//! Order status state machine.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Lifecycle state of an order.
///
/// `Completed` is reversible: the kitchen can restore a ticket to `Paid`.
/// Both directions are always allowed, so the only invalid request is a
/// status name that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Paid,
    Completed,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Completed => "Completed",
        }
    }

    /// The status a kitchen action button moves this order to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Paid => Self::Completed,
            Self::Completed => Self::Paid,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised order status: {0:?}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(Self::Paid),
            "Completed" => Ok(Self::Completed),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Outcome of applying a status to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl StatusChange {
    #[must_use]
    pub fn is_noop(self) -> bool {
        self.from == self.to
    }
}
