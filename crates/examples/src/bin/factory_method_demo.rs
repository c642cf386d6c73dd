use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{sample, Checkout, CheckoutService, OrderBuilder};
use pc_core::{Customer, NotificationChannel, PaymentMethod};
use pc_rates::{shipping_strategy, tax_calculator};
use pc_runtime::{init_tracing, load_config};
use pc_sinks::{create_notifier, create_payment_processor};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured payment method (card, paypal, invoice).
    #[arg(long)]
    payment: Option<PaymentMethod>,
    /// Overrides the configured channel (email, sms, console).
    #[arg(long)]
    channel: Option<NotificationChannel>,
    /// Check out as the B2B sample account.
    #[arg(long)]
    business: bool,
}

/// Business accounts are billed by invoice whatever was requested.
fn payment_method_for(customer: &Customer, requested: PaymentMethod) -> PaymentMethod {
    if customer.id().starts_with("B2B-") {
        PaymentMethod::Invoice
    } else {
        requested
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("factory_method_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let customer = if args.business { sample::business_customer()? } else { sample::customer()? };
    let method = payment_method_for(&customer, args.payment.unwrap_or(cfg.payment_method));
    let channel = args.channel.unwrap_or(cfg.notification_channel);
    println!("Payment method: {method}, notification channel: {channel}");

    let service = CheckoutService::new(
        Arc::clone(&cfg),
        Arc::from(shipping_strategy(cfg.shipping_method, &cfg)),
        Arc::new(tax_calculator(&cfg)),
        create_payment_processor(method),
        create_notifier(channel),
    );

    let order = OrderBuilder::new()
        .order_id(sample::SAMPLE_ORDER_ID)
        .customer(customer)
        .ship_to(sample::address()?)
        .items(sample::items()?)
        .build()?;
    let receipt = service.place_order(&order)?;
    println!("{receipt}");
    Ok(())
}
