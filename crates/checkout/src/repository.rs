use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use pc_core::Order;

/// Keyed order storage. Lookups ignore the case of the order id.
pub trait OrderRepository {
    /// Insert or replace the order stored under the same id.
    fn save(&self, order: Order);

    /// `None` when no order has that id.
    fn find_by_id(&self, order_id: &str) -> Option<Order>;

    fn remove(&self, order_id: &str) -> Option<Order>;

    /// Every stored order, sorted by normalized id.
    fn all(&self) -> Vec<Order>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<BTreeMap<String, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(order_id: &str) -> String {
    order_id.trim().to_lowercase()
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: Order) {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key(order.order_id()), order);
    }

    fn find_by_id(&self, order_id: &str) -> Option<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key(order_id))
            .cloned()
    }

    fn remove(&self, order_id: &str) -> Option<Order> {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key(order_id))
    }

    fn all(&self) -> Vec<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.orders.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<R: OrderRepository + ?Sized> OrderRepository for std::sync::Arc<R> {
    fn save(&self, order: Order) {
        (**self).save(order)
    }

    fn find_by_id(&self, order_id: &str) -> Option<Order> {
        (**self).find_by_id(order_id)
    }

    fn remove(&self, order_id: &str) -> Option<Order> {
        (**self).remove(order_id)
    }

    fn all(&self) -> Vec<Order> {
        (**self).all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
