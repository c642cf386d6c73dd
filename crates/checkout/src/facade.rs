use std::sync::Arc;

use pc_core::{Address, CheckoutConfig, Customer, Money, Order, Receipt};

use crate::builder::OrderBuilder;
use crate::decorators::LoggingCheckout;
use crate::service::CheckoutService;
use crate::{Checkout, CheckoutError};

/// One-call checkout: picks the component family, wires the service and
/// wraps it in logging.
pub struct CheckoutFacade {
    checkout: LoggingCheckout<CheckoutService>,
}

impl CheckoutFacade {
    pub fn from_config(cfg: Arc<CheckoutConfig>) -> Self {
        Self::with_service(CheckoutService::from_config(cfg))
    }

    pub fn with_service(service: CheckoutService) -> Self {
        Self { checkout: LoggingCheckout::new(service) }
    }

    /// Receipt for `order` with no payment or notification.
    pub fn quote(&self, order: &Order) -> Receipt {
        self.checkout.inner().quote(order)
    }

    pub fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        self.checkout.place_order(order)
    }

    /// Build an order from plain `(sku, name, quantity, unit_price)` lines and place it.
    pub fn checkout(
        &self,
        customer: Customer,
        ship_to: Address,
        lines: &[(&str, &str, u32, Money)],
    ) -> Result<Receipt, CheckoutError> {
        let order = lines
            .iter()
            .fold(OrderBuilder::new().customer(customer).ship_to(ship_to), |builder, (sku, name, qty, price)| {
                builder.line(sku, name, *qty, *price)
            })
            .build()?;
        self.place_order(&order)
    }
}
