use std::sync::Arc;

use pc_core::{CheckoutConfig, Order, Receipt};
use pc_rates::{ShippingCalculator, TaxCalculator};
use pc_sinks::{Notifier, PaymentProcessor};
use tracing::info;

use crate::factory::{components_for, CheckoutComponents};
use crate::{Checkout, CheckoutError};

/// The checkout orchestrator.
///
/// `place_order` prices the order, charges it, then sends the confirmation.
/// Each step needs the previous one's result; a failing sink stops the run
/// and nothing is rolled back or retried.
#[derive(Clone)]
pub struct CheckoutService {
    cfg: Arc<CheckoutConfig>,
    shipping: Arc<dyn ShippingCalculator>,
    tax: Arc<dyn TaxCalculator>,
    payment: Arc<dyn PaymentProcessor>,
    notifier: Arc<dyn Notifier>,
}

impl CheckoutService {
    pub fn new(
        cfg: Arc<CheckoutConfig>,
        shipping: Arc<dyn ShippingCalculator>,
        tax: Arc<dyn TaxCalculator>,
        payment: Arc<dyn PaymentProcessor>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { cfg, shipping, tax, payment, notifier }
    }

    /// Wire every collaborator from one component family.
    pub fn from_components(cfg: Arc<CheckoutConfig>, components: &dyn CheckoutComponents) -> Self {
        Self::new(
            cfg,
            components.shipping(),
            components.tax(),
            components.payment_processor(),
            components.notifier(),
        )
    }

    /// Wire the family selected by `cfg.environment`.
    pub fn from_config(cfg: Arc<CheckoutConfig>) -> Self {
        let components = components_for(Arc::clone(&cfg));
        Self::from_components(cfg, components.as_ref())
    }

    /// Same collaborators, different shipping strategy.
    pub fn with_shipping(&self, shipping: Arc<dyn ShippingCalculator>) -> Self {
        Self { shipping, ..self.clone() }
    }

    pub fn config(&self) -> &Arc<CheckoutConfig> {
        &self.cfg
    }

    pub fn shipping_name(&self) -> &str {
        self.shipping.name()
    }

    /// Price an order without charging or notifying anyone.
    pub fn quote(&self, order: &Order) -> Receipt {
        let subtotal = order.subtotal();
        let shipping = self.shipping.calculate_shipping(order);
        let tax = self.tax.calculate_tax(subtotal + shipping, order.ship_to());
        let receipt = Receipt::new(order.order_id(), subtotal, shipping, tax);
        info!(
            order_id = order.order_id(),
            strategy = self.shipping.name(),
            shipping = %receipt.shipping(),
            tax = %receipt.tax(),
            currency = %self.cfg.currency,
            "order priced"
        );
        receipt
    }
}

impl Checkout for CheckoutService {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        let receipt = self.quote(order);
        self.payment.charge(order.order_id(), receipt.total())?;
        self.notifier.send_order_confirmation(order.customer(), &receipt)?;
        info!(order_id = order.order_id(), total = %receipt.total(), "checkout complete");
        Ok(receipt)
    }
}
