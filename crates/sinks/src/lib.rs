//! Payment and notification sinks.
//!
//! The built-in sinks print a line and keep an in-memory record of what they
//! did. None of them can fail; the error types exist for sinks that can.

use pc_core::{Customer, Money, Receipt};

pub mod factory;
pub mod legacy;
pub mod notification;
pub mod payment;

pub use factory::{create_notifier, create_payment_processor};
pub use legacy::{LegacyGatewayAdapter, LegacyPaymentGateway};
pub use notification::{ConsoleNotifier, EmailNotifier, SentConfirmation, SmsNotifier};
pub use payment::{
    CardPaymentProcessor, ChargeRecord, InvoicePaymentProcessor, PayPalPaymentProcessor,
    SandboxPaymentProcessor,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment for order {order_id} declined: {reason}")]
    Declined { order_id: String, reason: String },
    #[error("payment provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("could not deliver confirmation to {recipient}: {reason}")]
    DeliveryFailed { recipient: String, reason: String },
}

pub trait PaymentProcessor: Send + Sync {
    fn charge(&self, order_id: &str, amount: Money) -> Result<(), PaymentError>;
}

pub trait Notifier: Send + Sync {
    fn send_order_confirmation(&self, customer: &Customer, receipt: &Receipt) -> Result<(), NotificationError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use pc_core::{Customer, Money, Receipt};

    pub fn customer() -> Customer {
        Customer::new("C-7", "Alan Turing", "alan@example.com").unwrap()
    }

    pub fn receipt() -> Receipt {
        Receipt::new("ORD-7", Money::new(8997, 2), Money::new(799, 2), Money::new(808, 2))
    }
}
