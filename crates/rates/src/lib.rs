//! Shipping and tax rate calculators.

use pc_core::{Address, CheckoutConfig, Money, Order, ShippingMethod};

pub mod shipping;
pub mod tax;

pub use shipping::{ExpeditedShipping, FlatRateShipping, FreeShippingOver};
pub use tax::PercentageTax;

/// Computes the shipping charge for an order. Implementations are pure.
pub trait ShippingCalculator: Send + Sync {
    fn calculate_shipping(&self, order: &Order) -> Money;

    fn name(&self) -> &str;
}

/// Computes tax on a taxable amount (subtotal plus shipping).
///
/// The destination is passed so jurisdiction-based calculators can exist;
/// [`PercentageTax`] ignores it.
pub trait TaxCalculator: Send + Sync {
    fn calculate_tax(&self, taxable: Money, ship_to: &Address) -> Money;
}

impl<T: ShippingCalculator + ?Sized> ShippingCalculator for Box<T> {
    fn calculate_shipping(&self, order: &Order) -> Money {
        (**self).calculate_shipping(order)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: ShippingCalculator + ?Sized> ShippingCalculator for std::sync::Arc<T> {
    fn calculate_shipping(&self, order: &Order) -> Money {
        (**self).calculate_shipping(order)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Build the shipping strategy named by `method` using the configured fees.
pub fn shipping_strategy(method: ShippingMethod, cfg: &CheckoutConfig) -> Box<dyn ShippingCalculator> {
    match method {
        ShippingMethod::Standard => Box::new(FlatRateShipping::new(cfg.flat_shipping_fee)),
        ShippingMethod::Expedited => Box::new(ExpeditedShipping::new(cfg.expedited_shipping_fee)),
        ShippingMethod::FreeOverThreshold => Box::new(FreeShippingOver::new(
            cfg.free_shipping_threshold,
            FlatRateShipping::new(cfg.flat_shipping_fee),
        )),
    }
}

pub fn tax_calculator(cfg: &CheckoutConfig) -> PercentageTax {
    PercentageTax::new(cfg.tax_rate)
}
