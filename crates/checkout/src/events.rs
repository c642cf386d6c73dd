//! Synchronous publish/subscribe for checkout milestones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use pc_core::OrderEvent;
use pc_runtime::metrics::MetricsRegistry;
use tracing::debug;

pub type Subscriber = Arc<dyn Fn(&OrderEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscribers run on the publishing thread, in the order they subscribed.
///
/// Each publish delivers to the subscribers present when it started; changes
/// made from inside a callback apply from the next publish on.
#[derive(Default)]
pub struct EventBus {
    next_id: AtomicU64,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
    metrics: Option<MetricsRegistry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: MetricsRegistry) -> Self {
        Self { metrics: Some(metrics), ..Self::default() }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&OrderEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    /// Deliver `event` to every subscriber; returns how many received it.
    pub fn publish(&self, event: &OrderEvent) -> usize {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        debug!(order_id = %event.order_id, kind = %event.kind, subscribers = subscribers.len(), "publishing");
        for callback in &subscribers {
            callback(event);
        }
        if let Some(metrics) = &self.metrics {
            metrics.inc_events_published(1);
        }
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
