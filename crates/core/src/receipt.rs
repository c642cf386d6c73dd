use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{round_money, Money, OrderId};

/// Priced outcome of a checkout. Holds no reference back to the order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Receipt {
    order_id: OrderId,
    subtotal: Money,
    shipping: Money,
    tax: Money,
    total: Money,
}

impl Receipt {
    /// Amounts are rounded to cents before the total is summed.
    pub fn new(order_id: &str, subtotal: Money, shipping: Money, tax: Money) -> Self {
        let subtotal = round_money(subtotal);
        let shipping = round_money(shipping);
        let tax = round_money(tax);
        Self {
            order_id: order_id.to_string(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn shipping(&self) -> Money {
        self.shipping
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Receipt for order {}", self.order_id)?;
        writeln!(f, "  Subtotal: {:>10}", self.subtotal)?;
        writeln!(f, "  Shipping: {:>10}", self.shipping)?;
        writeln!(f, "  Tax:      {:>10}", self.tax)?;
        write!(f, "  Total:    {:>10}", self.total)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OrderEventKind {
    CheckoutStarted,
    CheckoutCompleted,
    CheckoutFailed,
}

impl fmt::Display for OrderEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderEventKind::CheckoutStarted => "CheckoutStarted",
            OrderEventKind::CheckoutCompleted => "CheckoutCompleted",
            OrderEventKind::CheckoutFailed => "CheckoutFailed",
        };
        f.write_str(label)
    }
}

/// A checkout milestone. Transient; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderEvent {
    pub order_id: OrderId,
    pub kind: OrderEventKind,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl OrderEvent {
    pub fn now(order_id: &str, kind: OrderEventKind, message: impl Into<String>) -> Self {
        Self {
            order_id: order_id.to_string(),
            kind,
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_rounded_parts() {
        let receipt = Receipt::new("ORD-1", Money::new(8997, 2), Money::new(799, 2), Money::new(80817, 4));
        assert_eq!(receipt.tax(), Money::new(808, 2));
        assert_eq!(receipt.total(), Money::new(10604, 2));
        assert_eq!(receipt.total(), receipt.subtotal() + receipt.shipping() + receipt.tax());
    }

    #[test]
    fn display_lists_every_amount() {
        let receipt = Receipt::new("ORD-1", Money::new(1000, 2), Money::ZERO, Money::new(83, 2));
        let text = receipt.to_string();
        assert!(text.starts_with("Receipt for order ORD-1"));
        assert!(text.contains("10.83"));
    }

    #[test]
    fn waived_shipping_prints_as_cents() {
        let receipt = Receipt::new("ORD-2", Money::new(120, 0), Money::ZERO, Money::new(99, 1));
        let text = receipt.to_string();
        assert!(text.contains("Shipping:       0.00"));
        assert!(text.contains("Subtotal:     120.00"));
        assert_eq!(receipt.total().to_string(), "129.90");
    }

    #[test]
    fn event_serializes_kind_by_name() {
        let event = OrderEvent::now("ORD-9", OrderEventKind::CheckoutStarted, "starting");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "CheckoutStarted");
        assert_eq!(json["order_id"], "ORD-9");
    }
}
