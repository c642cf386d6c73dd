use std::sync::Arc;

use pc_core::{NotificationChannel, PaymentMethod};
use tracing::debug;

use crate::{
    CardPaymentProcessor, ConsoleNotifier, EmailNotifier, InvoicePaymentProcessor, Notifier,
    PayPalPaymentProcessor, PaymentProcessor, SmsNotifier,
};

pub fn create_payment_processor(method: PaymentMethod) -> Arc<dyn PaymentProcessor> {
    debug!(%method, "creating payment processor");
    match method {
        PaymentMethod::Card => Arc::new(CardPaymentProcessor::new()),
        PaymentMethod::PayPal => Arc::new(PayPalPaymentProcessor::new()),
        PaymentMethod::Invoice => Arc::new(InvoicePaymentProcessor::new()),
    }
}

pub fn create_notifier(channel: NotificationChannel) -> Arc<dyn Notifier> {
    debug!(%channel, "creating notifier");
    match channel {
        NotificationChannel::Email => Arc::new(EmailNotifier::new()),
        NotificationChannel::Sms => Arc::new(SmsNotifier),
        NotificationChannel::Console => Arc::new(ConsoleNotifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{customer, receipt};
    use pc_core::Money;

    #[test]
    fn every_payment_method_has_a_processor() {
        for method in PaymentMethod::ALL {
            assert!(create_payment_processor(*method).charge("ORD-1", Money::ONE).is_ok());
        }
    }

    #[test]
    fn every_channel_has_a_notifier() {
        for channel in NotificationChannel::ALL {
            assert!(create_notifier(*channel).send_order_confirmation(&customer(), &receipt()).is_ok());
        }
    }
}
