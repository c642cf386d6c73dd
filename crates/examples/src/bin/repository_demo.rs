use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{
    sample, Checkout, CheckoutService, InMemoryOrderRepository, OrderRepository, PersistingCheckout,
};
use pc_core::round_money;
use pc_runtime::metrics::MetricsRegistry;
use pc_runtime::{init_tracing, load_config};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Order id to look up after checkout; any case.
    #[arg(long, default_value = "ord-1001")]
    find: String,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("repository_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let repository = Arc::new(InMemoryOrderRepository::new());
    let metrics = MetricsRegistry::default();
    let checkout = PersistingCheckout::new(CheckoutService::from_config(cfg), Arc::clone(&repository))
        .with_metrics(metrics.clone());

    checkout.place_order(&sample::order()?)?;
    checkout.place_order(&sample::large_order()?)?;
    println!("Stored {} order(s)", repository.len());

    match repository.find_by_id(&args.find) {
        Some(order) => println!(
            "Found {} for {} placed {} with subtotal {}",
            order.order_id(),
            order.customer().name(),
            order.created_at().format("%Y-%m-%d %H:%M:%S"),
            round_money(order.subtotal())
        ),
        None => println!("No order with id {}", args.find),
    }
    match repository.find_by_id("ORD-9999") {
        Some(order) => println!("Unexpectedly found {}", order.order_id()),
        None => println!("ORD-9999: not found"),
    }
    println!("Orders saved this run: {}", metrics.snapshot().orders_saved);
    Ok(())
}
