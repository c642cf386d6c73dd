use std::sync::{Mutex, PoisonError};

use pc_core::{Customer, Money, Receipt};
use serde::Serialize;
use tracing::info;

use crate::{NotificationError, Notifier};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SentConfirmation {
    pub recipient: String,
    pub order_id: String,
    pub total: Money,
}

/// Keeps every confirmation in an outbox instead of sending mail.
#[derive(Default)]
pub struct EmailNotifier {
    outbox: Mutex<Vec<SentConfirmation>>,
}

impl EmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outbox(&self) -> Vec<SentConfirmation> {
        self.outbox.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for EmailNotifier {
    fn send_order_confirmation(&self, customer: &Customer, receipt: &Receipt) -> Result<(), NotificationError> {
        info!(recipient = customer.email(), order_id = receipt.order_id(), "confirmation email queued");
        println!(
            "[email] to {}: order {} confirmed, total {}",
            customer.email(),
            receipt.order_id(),
            receipt.total()
        );
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentConfirmation {
                recipient: customer.email().to_string(),
                order_id: receipt.order_id().to_string(),
                total: receipt.total(),
            });
        Ok(())
    }
}

pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn send_order_confirmation(&self, customer: &Customer, receipt: &Receipt) -> Result<(), NotificationError> {
        info!(customer_id = customer.id(), order_id = receipt.order_id(), "confirmation sms sent");
        println!(
            "[sms] to customer {}: order {} confirmed ({})",
            customer.id(),
            receipt.order_id(),
            receipt.total()
        );
        Ok(())
    }
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn send_order_confirmation(&self, customer: &Customer, receipt: &Receipt) -> Result<(), NotificationError> {
        println!("Thank you, {}! Your order is confirmed.", display_name(customer));
        println!("{receipt}");
        Ok(())
    }
}

fn display_name(customer: &Customer) -> &str {
    if customer.name().is_empty() {
        customer.id()
    } else {
        customer.name()
    }
}
