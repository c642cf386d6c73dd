use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    checkouts_completed: AtomicU64,
    checkouts_failed: AtomicU64,
    events_published: AtomicU64,
    orders_saved: AtomicU64,
    checkout_micros_total: AtomicU64,
    checkout_micros_peak: AtomicU64,
}

impl MetricsRegistry {
    pub fn inc_checkouts_completed(&self, delta: u64) {
        self.inner.checkouts_completed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_checkouts_failed(&self, delta: u64) {
        self.inner.checkouts_failed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_events_published(&self, delta: u64) {
        self.inner.events_published.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_orders_saved(&self, delta: u64) {
        self.inner.orders_saved.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn record_checkout_time(&self, elapsed: Duration) {
        let micros = saturating_micros(elapsed);
        self.inner.checkout_micros_total.fetch_add(micros, Ordering::Relaxed);
        self.inner.checkout_micros_peak.fetch_max(micros, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            checkouts_completed: self.inner.checkouts_completed.load(Ordering::Relaxed),
            checkouts_failed: self.inner.checkouts_failed.load(Ordering::Relaxed),
            events_published: self.inner.events_published.load(Ordering::Relaxed),
            orders_saved: self.inner.orders_saved.load(Ordering::Relaxed),
            checkout_micros_total: self.inner.checkout_micros_total.load(Ordering::Relaxed),
            checkout_micros_peak: self.inner.checkout_micros_peak.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub checkouts_completed: u64,
    pub checkouts_failed: u64,
    pub events_published: u64,
    pub orders_saved: u64,
    pub checkout_micros_total: u64,
    pub checkout_micros_peak: u64,
}

impl MetricsSnapshot {
    pub fn to_json_line(&self, label: &str, elapsed: Option<Duration>) -> String {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            label: &'a str,
            #[serde(flatten)]
            counters: &'a MetricsSnapshot,
            elapsed_ms: Option<u128>,
        }

        let payload = Snapshot {
            label,
            counters: self,
            elapsed_ms: elapsed.map(|d| d.as_millis()),
        };
        serde_json::to_string(&payload).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Whole microseconds, clamped to `u64::MAX`.
pub fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

pub struct CheckoutTimer {
    start: Instant,
}

impl CheckoutTimer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
