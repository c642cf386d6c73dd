use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{sample, CheckoutService};
use pc_core::ShippingMethod;
use pc_rates::shipping_strategy;
use pc_runtime::{init_tracing, load_config};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Quote with just this strategy instead of all of them.
    #[arg(long)]
    shipping: Option<ShippingMethod>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("strategy_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let base = CheckoutService::from_config(Arc::clone(&cfg));
    let methods = match args.shipping {
        Some(method) => vec![method],
        None => ShippingMethod::ALL.to_vec(),
    };

    let orders = [sample::order()?, sample::large_order()?];
    for method in methods {
        let service = base.with_shipping(Arc::from(shipping_strategy(method, &cfg)));
        for order in &orders {
            let quote = service.quote(order);
            println!(
                "{:<20} order {} subtotal {:>7} shipping {:>6} tax {:>6} total {:>7}",
                service.shipping_name(),
                order.order_id(),
                quote.subtotal(),
                quote.shipping(),
                quote.tax(),
                quote.total()
            );
        }
    }
    Ok(())
}
