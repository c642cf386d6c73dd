//! Adapter over a gateway whose interface predates [`PaymentProcessor`].

use pc_core::{round_money, Money};
use tracing::{info, warn};

use crate::{PaymentError, PaymentProcessor};

pub const STATUS_APPROVED: u16 = 0;
pub const STATUS_LIMIT_EXCEEDED: u16 = 51;

/// Old-style gateway: integer cents in, numeric status code out.
#[derive(Debug, Clone, Default)]
pub struct LegacyPaymentGateway {
    limit_cents: Option<i64>,
}

impl LegacyPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decline any submission above `limit_cents`.
    pub fn with_limit(limit_cents: i64) -> Self {
        Self { limit_cents: Some(limit_cents) }
    }

    pub fn submit(&self, reference: &str, amount_cents: i64, currency: &str) -> u16 {
        if self.limit_cents.is_some_and(|limit| amount_cents > limit) {
            return STATUS_LIMIT_EXCEEDED;
        }
        println!("[legacy-gateway] SUBMIT ref={reference} cents={amount_cents} cur={currency}");
        STATUS_APPROVED
    }
}

pub struct LegacyGatewayAdapter {
    gateway: LegacyPaymentGateway,
    currency: String,
}

impl LegacyGatewayAdapter {
    pub fn new(gateway: LegacyPaymentGateway, currency: &str) -> Self {
        Self { gateway, currency: currency.to_string() }
    }
}

/// Whole cents for a money amount, rounded half-up.
pub fn to_cents(amount: Money) -> Result<i64, PaymentError> {
    let cents = round_money(amount) * Money::ONE_HUNDRED;
    i64::try_from(cents.trunc())
        .map_err(|_| PaymentError::Unavailable(format!("amount {amount} out of gateway range")))
}

impl PaymentProcessor for LegacyGatewayAdapter {
    fn charge(&self, order_id: &str, amount: Money) -> Result<(), PaymentError> {
        let cents = to_cents(amount)?;
        match self.gateway.submit(order_id, cents, &self.currency) {
            STATUS_APPROVED => {
                info!(order_id, cents, "legacy gateway approved");
                Ok(())
            }
            code => {
                warn!(order_id, cents, code, "legacy gateway declined");
                Err(PaymentError::Declined {
                    order_id: order_id.to_string(),
                    reason: format!("gateway status {code}"),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Money::new(10604, 2), 10604)]
    #[case(Money::new(1, 0), 100)]
    #[case(Money::new(12345, 4), 123)]
    #[case(Money::new(125, 3), 13)]
    fn converts_to_cents(#[case] amount: Money, #[case] cents: i64) {
        assert_eq!(to_cents(amount).unwrap(), cents);
    }

    #[test]
    fn approved_submission_is_ok() {
        let adapter = LegacyGatewayAdapter::new(LegacyPaymentGateway::new(), "USD");
        assert!(adapter.charge("ORD-1", Money::new(10604, 2)).is_ok());
    }

    #[test]
    fn status_codes_become_declines() {
        let adapter = LegacyGatewayAdapter::new(LegacyPaymentGateway::with_limit(10_000), "USD");
        let err = adapter.charge("ORD-2", Money::new(10604, 2)).unwrap_err();
        assert_eq!(
            err,
            PaymentError::Declined { order_id: "ORD-2".into(), reason: "gateway status 51".into() }
        );
    }
}
