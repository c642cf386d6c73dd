//! Wrappers that observe or extend a [`Checkout`] without changing its receipt.
//!
//! Each wrapper owns the next link. Stack them in any order:
//!
//! ```ignore
//! let checkout = LoggingCheckout::new(TimingCheckout::new(service, metrics));
//! ```

use std::sync::Arc;

use pc_core::{Order, OrderEvent, OrderEventKind, Receipt};
use pc_runtime::metrics::{saturating_micros, CheckoutTimer, MetricsRegistry};
use tracing::{error, info, info_span};

use crate::events::EventBus;
use crate::repository::OrderRepository;
use crate::{Checkout, CheckoutError};

pub struct LoggingCheckout<C> {
    inner: C,
}

impl<C: Checkout> LoggingCheckout<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Checkout> Checkout for LoggingCheckout<C> {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        let span = info_span!("checkout", order_id = order.order_id());
        let _guard = span.enter();
        info!(
            customer = order.customer().id(),
            items = order.items().len(),
            subtotal = %order.subtotal(),
            "placing order"
        );
        match self.inner.place_order(order) {
            Ok(receipt) => {
                info!(total = %receipt.total(), "order placed");
                Ok(receipt)
            }
            Err(err) => {
                error!(error = %err, "order failed");
                Err(err)
            }
        }
    }
}

pub struct TimingCheckout<C> {
    inner: C,
    metrics: MetricsRegistry,
}

impl<C: Checkout> TimingCheckout<C> {
    pub fn new(inner: C, metrics: MetricsRegistry) -> Self {
        Self { inner, metrics }
    }
}

impl<C: Checkout> Checkout for TimingCheckout<C> {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        let timer = CheckoutTimer::start();
        let result = self.inner.place_order(order);
        let elapsed = timer.elapsed();
        self.metrics.record_checkout_time(elapsed);
        match &result {
            Ok(_) => self.metrics.inc_checkouts_completed(1),
            Err(_) => self.metrics.inc_checkouts_failed(1),
        }
        info!(order_id = order.order_id(), elapsed_us = saturating_micros(elapsed), "checkout timed");
        result
    }
}

/// Publishes `CheckoutStarted`, then `CheckoutCompleted` or `CheckoutFailed`.
pub struct EventPublishingCheckout<C> {
    inner: C,
    bus: Arc<EventBus>,
}

impl<C: Checkout> EventPublishingCheckout<C> {
    pub fn new(inner: C, bus: Arc<EventBus>) -> Self {
        Self { inner, bus }
    }
}

impl<C: Checkout> Checkout for EventPublishingCheckout<C> {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        let order_id = order.order_id();
        self.bus.publish(&OrderEvent::now(
            order_id,
            OrderEventKind::CheckoutStarted,
            format!("checkout started for {} item(s)", order.items().len()),
        ));
        let result = self.inner.place_order(order);
        let event = match &result {
            Ok(receipt) => OrderEvent::now(
                order_id,
                OrderEventKind::CheckoutCompleted,
                format!("charged {}", receipt.total()),
            ),
            Err(err) => OrderEvent::now(order_id, OrderEventKind::CheckoutFailed, err.to_string()),
        };
        self.bus.publish(&event);
        result
    }
}

/// Saves the order once the inner checkout succeeds.
pub struct PersistingCheckout<C, R> {
    inner: C,
    repository: R,
    metrics: Option<MetricsRegistry>,
}

impl<C: Checkout, R: OrderRepository> PersistingCheckout<C, R> {
    pub fn new(inner: C, repository: R) -> Self {
        Self { inner, repository, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: MetricsRegistry) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<C: Checkout, R: OrderRepository> Checkout for PersistingCheckout<C, R> {
    fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
        let receipt = self.inner.place_order(order)?;
        self.repository.save(order.clone());
        if let Some(metrics) = &self.metrics {
            metrics.inc_orders_saved(1);
        }
        info!(order_id = order.order_id(), stored = self.repository.len(), "order saved");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryOrderRepository;
    use crate::sample;
    use pc_core::Money;
    use pc_sinks::PaymentError;
    use std::sync::Mutex;

    struct Fixed;

    impl Checkout for Fixed {
        fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
            Ok(Receipt::new(order.order_id(), order.subtotal(), Money::ONE, Money::ONE))
        }
    }

    struct Declining;

    impl Checkout for Declining {
        fn place_order(&self, order: &Order) -> Result<Receipt, CheckoutError> {
            Err(PaymentError::Declined { order_id: order.order_id().into(), reason: "nope".into() }.into())
        }
    }

    #[test]
    fn stacked_wrappers_return_the_inner_receipt() {
        let order = sample::order().unwrap();
        let expected = Fixed.place_order(&order).unwrap();
        let stacked = LoggingCheckout::new(TimingCheckout::new(Fixed, MetricsRegistry::default()));
        assert_eq!(stacked.place_order(&order).unwrap(), expected);
    }

    #[test]
    fn timing_counts_outcomes() {
        let metrics = MetricsRegistry::default();
        let order = sample::order().unwrap();
        TimingCheckout::new(Fixed, metrics.clone()).place_order(&order).unwrap();
        TimingCheckout::new(Declining, metrics.clone()).place_order(&order).unwrap_err();
        let snap = metrics.snapshot();
        assert_eq!(snap.checkouts_completed, 1);
        assert_eq!(snap.checkouts_failed, 1);
    }

    #[test]
    fn events_bracket_the_checkout() {
        let bus = Arc::new(EventBus::new());
        let kinds = Arc::new(Mutex::new(Vec::new()));
        {
            let kinds = Arc::clone(&kinds);
            bus.subscribe(move |e| kinds.lock().unwrap().push(e.kind));
        }
        let order = sample::order().unwrap();
        EventPublishingCheckout::new(Fixed, Arc::clone(&bus)).place_order(&order).unwrap();
        EventPublishingCheckout::new(Declining, bus).place_order(&order).unwrap_err();
        assert_eq!(
            *kinds.lock().unwrap(),
            vec![
                OrderEventKind::CheckoutStarted,
                OrderEventKind::CheckoutCompleted,
                OrderEventKind::CheckoutStarted,
                OrderEventKind::CheckoutFailed,
            ]
        );
    }

    #[test]
    fn failed_checkouts_are_not_saved() {
        let order = sample::order().unwrap();
        let metrics = MetricsRegistry::default();

        let saving = PersistingCheckout::new(Fixed, InMemoryOrderRepository::new()).with_metrics(metrics.clone());
        saving.place_order(&order).unwrap();
        assert_eq!(saving.repository().find_by_id(order.order_id()), Some(order.clone()));

        let declining = PersistingCheckout::new(Declining, InMemoryOrderRepository::new());
        declining.place_order(&order).unwrap_err();
        assert!(declining.repository().is_empty());
        assert_eq!(metrics.snapshot().orders_saved, 1);
    }
}
