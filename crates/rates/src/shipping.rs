use pc_core::{Money, Order};
use tracing::debug;

use crate::ShippingCalculator;

/// Same fee for every order.
#[derive(Debug, Clone, Copy)]
pub struct FlatRateShipping {
    fee: Money,
}

impl FlatRateShipping {
    pub fn new(fee: Money) -> Self {
        Self { fee }
    }
}

impl ShippingCalculator for FlatRateShipping {
    fn calculate_shipping(&self, _order: &Order) -> Money {
        self.fee
    }

    fn name(&self) -> &str {
        "flat-rate"
    }
}

/// Premium next-day fee.
#[derive(Debug, Clone, Copy)]
pub struct ExpeditedShipping {
    fee: Money,
}

impl ExpeditedShipping {
    pub fn new(fee: Money) -> Self {
        Self { fee }
    }
}

impl ShippingCalculator for ExpeditedShipping {
    fn calculate_shipping(&self, _order: &Order) -> Money {
        self.fee
    }

    fn name(&self) -> &str {
        "expedited"
    }
}

/// Waives shipping once the subtotal reaches `threshold`; otherwise defers to `base`.
pub struct FreeShippingOver<S> {
    threshold: Money,
    base: S,
}

impl<S: ShippingCalculator> FreeShippingOver<S> {
    pub fn new(threshold: Money, base: S) -> Self {
        Self { threshold, base }
    }
}

impl<S: ShippingCalculator> ShippingCalculator for FreeShippingOver<S> {
    fn calculate_shipping(&self, order: &Order) -> Money {
        let subtotal = order.subtotal();
        if subtotal >= self.threshold {
            debug!(order_id = order.order_id(), %subtotal, threshold = %self.threshold, "shipping waived");
            return Money::ZERO;
        }
        self.base.calculate_shipping(order)
    }

    fn name(&self) -> &str {
        "free-over-threshold"
    }
}
