//! Checkout orchestration and the pattern layer built around it.

use std::sync::Arc;

use pc_core::{CoreError, Order, Receipt};
use pc_sinks::{NotificationError, PaymentError};

pub mod builder;
pub mod decorators;
pub mod events;
pub mod facade;
pub mod factory;
pub mod repository;
pub mod sample;
pub mod service;

pub use builder::OrderBuilder;
pub use decorators::{EventPublishingCheckout, LoggingCheckout, PersistingCheckout, TimingCheckout};
pub use events::{EventBus, SubscriptionId};
pub use facade::CheckoutFacade;
pub use factory::{components_for, CheckoutComponents, ProductionComponents, SandboxComponents};
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::CheckoutService;

#[derive(thiserror::Error, Debug)]
pub enum CheckoutError {
    #[error(transparent)]
    Invalid(#[from] CoreError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Anything that can turn an order into a receipt.
///
/// Implemented by [`CheckoutService`] and by every wrapper in
/// [`decorators`], so wrappers stack in whatever order the caller builds them.
pub trait Checkout {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError>;
}

impl<C: Checkout + ?Sized> Checkout for &C {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        (**self).place_order(order)
    }
}

impl<C: Checkout + ?Sized> Checkout for Box<C> {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        (**self).place_order(order)
    }
}

impl<C: Checkout + ?Sized> Checkout for Arc<C> {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        (**self).place_order(order)
    }
}
