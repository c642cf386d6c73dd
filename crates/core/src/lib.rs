//! Core types for Pattern Checkout.

use rust_decimal::{Decimal, RoundingStrategy};

pub type OrderId = String;
pub type Sku = String;
pub type Money = Decimal;

/// Round a monetary amount half-up to whole cents, always carrying two decimal places.
pub fn round_money(amount: Money) -> Money {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
    #[error("unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CoreError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument { field, reason: reason.into() }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument { .. })
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub mod config;
pub mod model;
pub mod receipt;

pub use config::{CheckoutConfig, Environment, NotificationChannel, PaymentMethod, ShippingMethod};
pub use model::{Address, Customer, Order, OrderItem};
pub use receipt::{OrderEvent, OrderEventKind, Receipt};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::new(80817, 4), Decimal::new(808, 2))]
    #[case(Decimal::new(8125, 3), Decimal::new(813, 2))]
    #[case(Decimal::new(825, 2), Decimal::new(825, 2))]
    #[case(Decimal::ZERO, Decimal::ZERO)]
    fn rounds_half_up_to_cents(#[case] input: Money, #[case] expected: Money) {
        assert_eq!(round_money(input), expected);
    }

    #[rstest]
    #[case(Decimal::ZERO, "0.00")]
    #[case(Decimal::new(100, 0), "100.00")]
    #[case(Decimal::new(5, 1), "0.50")]
    #[case(Decimal::new(80817, 4), "8.08")]
    fn rounded_amounts_print_two_decimals(#[case] input: Money, #[case] expected: &str) {
        assert_eq!(round_money(input).to_string(), expected);
    }

    #[test]
    fn blank_values_are_rejected() {
        let err = require_non_empty("email", "   ").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument `email`: must not be empty");
    }
}
