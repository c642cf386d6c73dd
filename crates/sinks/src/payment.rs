use std::sync::{Mutex, PoisonError};

use pc_core::Money;
use serde::Serialize;
use tracing::info;

use crate::{PaymentError, PaymentProcessor};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChargeRecord {
    pub order_id: String,
    pub amount: Money,
    pub provider: &'static str,
}

#[derive(Default)]
struct Ledger {
    entries: Mutex<Vec<ChargeRecord>>,
}

impl Ledger {
    fn record(&self, provider: &'static str, order_id: &str, amount: Money) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(ChargeRecord { order_id: order_id.to_string(), amount, provider });
    }

    fn entries(&self) -> Vec<ChargeRecord> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

macro_rules! ledger_processor {
    ($(#[$doc:meta])* $name:ident, $provider:literal, $line:literal) => {
        $(#[$doc])*
        #[derive(Default)]
        pub struct $name {
            ledger: Ledger,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Every charge accepted so far, oldest first.
            pub fn charges(&self) -> Vec<ChargeRecord> {
                self.ledger.entries()
            }
        }

        impl PaymentProcessor for $name {
            fn charge(&self, order_id: &str, amount: Money) -> Result<(), PaymentError> {
                info!(provider = $provider, order_id, %amount, "charge accepted");
                println!($line, order_id = order_id, amount = amount);
                self.ledger.record($provider, order_id, amount);
                Ok(())
            }
        }
    };
}

ledger_processor!(
    /// Test-mode processor; nothing leaves the process.
    SandboxPaymentProcessor,
    "sandbox",
    "[sandbox] pretend-charged {amount} for order {order_id}"
);
ledger_processor!(
    CardPaymentProcessor,
    "card",
    "[card] charged {amount} to card on file for order {order_id}"
);
ledger_processor!(
    PayPalPaymentProcessor,
    "paypal",
    "[paypal] captured {amount} for order {order_id}"
);
ledger_processor!(
    /// B2B customers are billed on net terms instead of charged up front.
    InvoicePaymentProcessor,
    "invoice",
    "[invoice] issued invoice for {amount} against order {order_id}"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_keeps_a_ledger() {
        let sandbox = SandboxPaymentProcessor::new();
        sandbox.charge("ORD-1", Money::new(10604, 2)).unwrap();
        sandbox.charge("ORD-2", Money::ONE).unwrap();
        let charges = sandbox.charges();
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0].order_id, "ORD-1");
        assert_eq!(charges[0].amount, Money::new(10604, 2));
        assert_eq!(charges[1].provider, "sandbox");
    }

    #[test]
    fn paypal_charges_are_recorded_under_its_brand_name() {
        let paypal = PayPalPaymentProcessor::new();
        paypal.charge("ORD-3", Money::new(2500, 2)).unwrap();
        assert_eq!(paypal.charges()[0].provider, "paypal");
    }

    #[test]
    fn every_builtin_processor_succeeds() {
        let processors: Vec<Box<dyn PaymentProcessor>> = vec![
            Box::new(SandboxPaymentProcessor::new()),
            Box::new(CardPaymentProcessor::new()),
            Box::new(PayPalPaymentProcessor::new()),
            Box::new(InvoicePaymentProcessor::new()),
        ];
        for processor in processors {
            assert!(processor.charge("ORD-1", Money::new(500, 2)).is_ok());
        }
    }
}
