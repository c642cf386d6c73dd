use pc_core::{round_money, Address, Money};

use crate::TaxCalculator;

/// Fixed-percentage tax, rounded half-up to cents.
#[derive(Debug, Clone, Copy)]
pub struct PercentageTax {
    rate: Money,
}

impl PercentageTax {
    /// `rate` is a fraction, e.g. `0.0825` for 8.25%.
    pub fn new(rate: Money) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Money {
        self.rate
    }
}

impl TaxCalculator for PercentageTax {
    fn calculate_tax(&self, taxable: Money, _ship_to: &Address) -> Money {
        round_money(taxable * self.rate)
    }
}
