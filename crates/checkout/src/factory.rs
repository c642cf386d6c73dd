//! Component families: every collaborator a checkout needs, built to match.

use std::sync::Arc;

use pc_core::{CheckoutConfig, Environment};
use pc_rates::{shipping_strategy, tax_calculator, FlatRateShipping, ShippingCalculator, TaxCalculator};
use pc_sinks::{
    create_notifier, create_payment_processor, ConsoleNotifier, Notifier, PaymentProcessor,
    SandboxPaymentProcessor,
};

pub trait CheckoutComponents {
    fn label(&self) -> &'static str;
    fn payment_processor(&self) -> Arc<dyn PaymentProcessor>;
    fn notifier(&self) -> Arc<dyn Notifier>;
    fn shipping(&self) -> Arc<dyn ShippingCalculator>;
    fn tax(&self) -> Arc<dyn TaxCalculator>;
}

/// Sandbox payments, console confirmations and the flat shipping fee.
pub struct SandboxComponents {
    cfg: Arc<CheckoutConfig>,
}

impl SandboxComponents {
    pub fn new(cfg: Arc<CheckoutConfig>) -> Self {
        Self { cfg }
    }
}

impl CheckoutComponents for SandboxComponents {
    fn label(&self) -> &'static str {
        "sandbox"
    }

    fn payment_processor(&self) -> Arc<dyn PaymentProcessor> {
        Arc::new(SandboxPaymentProcessor::new())
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(ConsoleNotifier)
    }

    fn shipping(&self) -> Arc<dyn ShippingCalculator> {
        Arc::new(FlatRateShipping::new(self.cfg.flat_shipping_fee))
    }

    fn tax(&self) -> Arc<dyn TaxCalculator> {
        Arc::new(tax_calculator(&self.cfg))
    }
}

/// Whatever payment method, channel and shipping method the config names.
pub struct ProductionComponents {
    cfg: Arc<CheckoutConfig>,
}

impl ProductionComponents {
    pub fn new(cfg: Arc<CheckoutConfig>) -> Self {
        Self { cfg }
    }
}

impl CheckoutComponents for ProductionComponents {
    fn label(&self) -> &'static str {
        "production"
    }

    fn payment_processor(&self) -> Arc<dyn PaymentProcessor> {
        create_payment_processor(self.cfg.payment_method)
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        create_notifier(self.cfg.notification_channel)
    }

    fn shipping(&self) -> Arc<dyn ShippingCalculator> {
        Arc::from(shipping_strategy(self.cfg.shipping_method, &self.cfg))
    }

    fn tax(&self) -> Arc<dyn TaxCalculator> {
        Arc::new(tax_calculator(&self.cfg))
    }
}

pub fn components_for(cfg: Arc<CheckoutConfig>) -> Box<dyn CheckoutComponents> {
    match cfg.environment {
        Environment::Sandbox => Box::new(SandboxComponents::new(cfg)),
        Environment::Production => Box::new(ProductionComponents::new(cfg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::ShippingMethod;

    #[test]
    fn environment_picks_the_family() {
        let sandbox = components_for(Arc::new(CheckoutConfig::default()));
        assert_eq!(sandbox.label(), "sandbox");

        let cfg = CheckoutConfig { environment: Environment::Production, ..CheckoutConfig::default() };
        assert_eq!(components_for(Arc::new(cfg)).label(), "production");
    }

    #[test]
    fn sandbox_ignores_the_configured_shipping_method() {
        let cfg = CheckoutConfig { shipping_method: ShippingMethod::Expedited, ..CheckoutConfig::default() };
        let sandbox = SandboxComponents::new(Arc::new(cfg));
        assert_eq!(sandbox.shipping().name(), "flat-rate");
    }

    #[test]
    fn production_follows_the_configured_shipping_method() {
        let cfg = CheckoutConfig {
            environment: Environment::Production,
            shipping_method: ShippingMethod::FreeOverThreshold,
            ..CheckoutConfig::default()
        };
        let production = ProductionComponents::new(Arc::new(cfg));
        assert_eq!(production.shipping().name(), "free-over-threshold");
    }
}
