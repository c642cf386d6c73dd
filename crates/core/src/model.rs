use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{require_non_empty, CoreError, Money, OrderId, Sku};

pub const DEFAULT_COUNTRY: &str = "US";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Customer {
    id: String,
    name: String,
    email: String,
}

impl Customer {
    pub fn new(id: &str, name: &str, email: &str) -> Result<Self, CoreError> {
        Ok(Self {
            id: require_non_empty("customer.id", id)?,
            name: name.trim().to_string(),
            email: require_non_empty("customer.email", email)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Address {
    line1: String,
    city: String,
    state: String,
    postal: String,
    country: String,
}

impl Address {
    /// Domestic address; the country defaults to [`DEFAULT_COUNTRY`].
    pub fn new(line1: &str, city: &str, state: &str, postal: &str) -> Result<Self, CoreError> {
        Self::with_country(line1, city, state, postal, DEFAULT_COUNTRY)
    }

    pub fn with_country(
        line1: &str,
        city: &str,
        state: &str,
        postal: &str,
        country: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            line1: require_non_empty("address.line1", line1)?,
            city: require_non_empty("address.city", city)?,
            state: require_non_empty("address.state", state)?,
            postal: require_non_empty("address.postal", postal)?,
            country: require_non_empty("address.country", country)?,
        })
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal(&self) -> &str {
        &self.postal
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderItem {
    sku: Sku,
    name: String,
    quantity: u32,
    unit_price: Money,
}

impl OrderItem {
    pub fn new(sku: &str, name: &str, quantity: u32, unit_price: Money) -> Result<Self, CoreError> {
        if quantity == 0 {
            return Err(CoreError::invalid("item.quantity", "must be greater than zero"));
        }
        if unit_price < Money::ZERO {
            return Err(CoreError::invalid("item.unit_price", "must not be negative"));
        }
        if unit_price.checked_mul(Money::from(quantity)).is_none() {
            return Err(CoreError::invalid("item.unit_price", "line total overflows"));
        }
        Ok(Self {
            sku: require_non_empty("item.sku", sku)?,
            name: name.trim().to_string(),
            quantity,
            unit_price,
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn line_total(&self) -> Money {
        self.unit_price * Money::from(self.quantity)
    }
}

/// An immutable order. Owns its items; the caller's collection is moved in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Order {
    order_id: OrderId,
    customer: Customer,
    items: Vec<OrderItem>,
    ship_to: Address,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        order_id: &str,
        customer: Customer,
        items: Vec<OrderItem>,
        ship_to: Address,
    ) -> Result<Self, CoreError> {
        Self::with_created_at(order_id, customer, items, ship_to, Utc::now())
    }

    pub fn with_created_at(
        order_id: &str,
        customer: Customer,
        items: Vec<OrderItem>,
        ship_to: Address,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let order_id = require_non_empty("order.order_id", order_id)?;
        if items.is_empty() {
            return Err(CoreError::invalid("order.items", "an order needs at least one item"));
        }
        let subtotal = items
            .iter()
            .try_fold(Money::ZERO, |acc, item| acc.checked_add(item.line_total()));
        if subtotal.is_none() {
            return Err(CoreError::invalid("order.items", "subtotal overflows"));
        }
        Ok(Self { order_id, customer, items, ship_to, created_at })
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn ship_to(&self) -> &Address {
        &self.ship_to
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn customer() -> Customer {
        Customer::new("C-100", "Ada Lovelace", "ada@example.com").unwrap()
    }

    fn address() -> Address {
        Address::new("1 Main St", "Austin", "TX", "78701").unwrap()
    }

    fn item(quantity: u32, cents: i64) -> OrderItem {
        OrderItem::new("SKU-1", "Widget", quantity, Money::new(cents, 2)).unwrap()
    }

    #[test]
    fn address_defaults_to_us() {
        assert_eq!(address().country(), "US");
    }

    #[rstest]
    #[case("", "ada@example.com")]
    #[case("C-1", "")]
    #[case("  ", "  ")]
    fn customer_requires_id_and_email(#[case] id: &str, #[case] email: &str) {
        let err = Customer::new(id, "Ada", email).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[rstest]
    #[case("", "Austin", "TX", "78701")]
    #[case("1 Main St", "", "TX", "78701")]
    #[case("1 Main St", "Austin", "", "78701")]
    #[case("1 Main St", "Austin", "TX", "")]
    fn address_requires_every_field(
        #[case] line1: &str,
        #[case] city: &str,
        #[case] state: &str,
        #[case] postal: &str,
    ) {
        assert!(Address::new(line1, city, state, postal).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn item_rejects_zero_quantity_and_negative_price() {
        assert!(OrderItem::new("SKU", "x", 0, Money::ONE).unwrap_err().is_invalid_argument());
        assert!(OrderItem::new("SKU", "x", 1, Money::new(-1, 2)).unwrap_err().is_invalid_argument());
        assert!(OrderItem::new("SKU", "free sample", 1, Money::ZERO).is_ok());
    }

    #[test]
    fn item_rejects_line_total_that_overflows() {
        let err = OrderItem::new("SKU", "big", 2, Money::MAX).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(OrderItem::new("SKU", "big", 1, Money::MAX).is_ok());
    }

    #[test]
    fn order_rejects_subtotal_that_overflows() {
        let big = OrderItem::new("SKU", "big", 1, Money::MAX).unwrap();
        let err = Order::new("ORD-1", customer(), vec![big.clone(), big], address()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn order_requires_items() {
        let err = Order::new("ORD-1", customer(), Vec::new(), address()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn order_requires_id() {
        let err = Order::new(" ", customer(), vec![item(1, 100)], address()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn order_is_detached_from_source_items() {
        let mut source = vec![item(1, 4999)];
        let order = Order::new("ORD-1", customer(), source.clone(), address()).unwrap();
        source.push(item(5, 100));
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn subtotal_of_sample_order() {
        let order = Order::new("ORD-1", customer(), vec![item(1, 4999), item(2, 1999)], address()).unwrap();
        assert_eq!(order.subtotal(), Money::new(8997, 2));
    }

    proptest! {
        #[test]
        fn subtotal_is_sum_of_line_totals(lines in prop::collection::vec((1u32..50, 0i64..100_000), 1..10)) {
            let items: Vec<OrderItem> = lines.iter().map(|(q, c)| item(*q, *c)).collect();
            let expected: Money = lines
                .iter()
                .map(|(q, c)| Money::new(*c, 2) * Money::from(*q))
                .sum();
            let order = Order::new("ORD-P", customer(), items, address()).unwrap();
            prop_assert_eq!(order.subtotal(), expected);
        }
    }
}
