use chrono::{DateTime, Utc};
use pc_core::{Address, CoreError, Customer, Money, Order, OrderItem};
use uuid::Uuid;

enum Line {
    Ready(OrderItem),
    Raw { sku: String, name: String, quantity: u32, unit_price: Money },
}

/// Fluent order construction. Nothing is validated until [`OrderBuilder::build`].
#[derive(Default)]
pub struct OrderBuilder {
    order_id: Option<String>,
    customer: Option<Customer>,
    ship_to: Option<Address>,
    lines: Vec<Line>,
    created_at: Option<DateTime<Utc>>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_id(mut self, order_id: &str) -> Self {
        self.order_id = Some(order_id.to_string());
        self
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn ship_to(mut self, address: Address) -> Self {
        self.ship_to = Some(address);
        self
    }

    pub fn item(mut self, item: OrderItem) -> Self {
        self.lines.push(Line::Ready(item));
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = OrderItem>) -> Self {
        self.lines.extend(items.into_iter().map(Line::Ready));
        self
    }

    pub fn line(mut self, sku: &str, name: &str, quantity: u32, unit_price: Money) -> Self {
        self.lines.push(Line::Raw {
            sku: sku.to_string(),
            name: name.to_string(),
            quantity,
            unit_price,
        });
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Without an explicit id one is generated as `ORD-` plus eight hex digits.
    pub fn build(self) -> Result<Order, CoreError> {
        let customer = self
            .customer
            .ok_or_else(|| CoreError::invalid("order.customer", "is required"))?;
        let ship_to = self
            .ship_to
            .ok_or_else(|| CoreError::invalid("order.ship_to", "is required"))?;
        let items = self
            .lines
            .into_iter()
            .map(|line| match line {
                Line::Ready(item) => Ok(item),
                Line::Raw { sku, name, quantity, unit_price } => {
                    OrderItem::new(&sku, &name, quantity, unit_price)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let order_id = self.order_id.unwrap_or_else(generate_order_id);
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Order::with_created_at(&order_id, customer, items, ship_to, created_at)
    }
}

fn generate_order_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use chrono::TimeZone;

    fn filled() -> OrderBuilder {
        OrderBuilder::new()
            .customer(sample::customer().unwrap())
            .ship_to(sample::address().unwrap())
            .line("KB-001", "Keyboard", 1, Money::new(4999, 2))
    }

    #[test]
    fn builds_with_explicit_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let order = filled()
            .order_id("ORD-77")
            .items(sample::items().unwrap())
            .created_at(at)
            .build()
            .unwrap();
        assert_eq!(order.order_id(), "ORD-77");
        assert_eq!(order.items().len(), 3);
        assert_eq!(order.created_at(), at);
    }

    #[test]
    fn generates_an_id_when_missing() {
        let order = filled().build().unwrap();
        assert!(order.order_id().starts_with("ORD-"));
        assert_eq!(order.order_id().len(), 12);
    }

    #[test]
    fn missing_customer_or_address_is_invalid() {
        let no_customer = OrderBuilder::new()
            .ship_to(sample::address().unwrap())
            .line("A", "a", 1, Money::ONE)
            .build()
            .unwrap_err();
        assert!(no_customer.is_invalid_argument());

        let no_address = OrderBuilder::new()
            .customer(sample::customer().unwrap())
            .line("A", "a", 1, Money::ONE)
            .build()
            .unwrap_err();
        assert!(no_address.is_invalid_argument());
    }

    #[test]
    fn bad_lines_and_empty_orders_are_invalid() {
        let bad_line = filled().line("X", "broken", 0, Money::ONE).build().unwrap_err();
        assert!(bad_line.is_invalid_argument());

        let empty = OrderBuilder::new()
            .customer(sample::customer().unwrap())
            .ship_to(sample::address().unwrap())
            .build()
            .unwrap_err();
        assert!(empty.is_invalid_argument());
    }
}
