//! The hardcoded order every demo checks out.

use pc_core::{Address, CoreError, Customer, Money, Order, OrderItem};

pub const SAMPLE_ORDER_ID: &str = "ORD-1001";

pub fn customer() -> Result<Customer, CoreError> {
    Customer::new("C-42", "Jordan Rivera", "jordan.rivera@example.com")
}

/// A business account; its id prefix routes it to invoice billing.
pub fn business_customer() -> Result<Customer, CoreError> {
    Customer::new("B2B-ACME", "Acme Corp Purchasing", "ap@acme.example.com")
}

pub fn address() -> Result<Address, CoreError> {
    Address::new("500 Congress Ave", "Austin", "TX", "78701")
}

pub fn items() -> Result<Vec<OrderItem>, CoreError> {
    Ok(vec![
        OrderItem::new("KB-001", "Mechanical Keyboard", 1, Money::new(4999, 2))?,
        OrderItem::new("CBL-USB", "USB-C Cable", 2, Money::new(1999, 2))?,
    ])
}

/// Subtotal 89.97.
pub fn order() -> Result<Order, CoreError> {
    Order::new(SAMPLE_ORDER_ID, customer()?, items()?, address()?)
}

/// Subtotal 139.96, above the default free-shipping threshold.
pub fn large_order() -> Result<Order, CoreError> {
    let mut items = items()?;
    items.push(OrderItem::new("MSE-02", "Wireless Mouse", 1, Money::new(4999, 2))?);
    Order::new("ORD-1002", customer()?, items, address()?)
}
