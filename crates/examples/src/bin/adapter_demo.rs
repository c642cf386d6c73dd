use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{sample, Checkout, CheckoutError, CheckoutService};
use pc_rates::{shipping_strategy, tax_calculator};
use pc_runtime::{init_tracing, load_config};
use pc_sinks::{ConsoleNotifier, LegacyGatewayAdapter, LegacyPaymentGateway};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Gateway declines submissions above this many cents.
    #[arg(long)]
    limit_cents: Option<i64>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("adapter_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let gateway = match args.limit_cents {
        Some(limit) => LegacyPaymentGateway::with_limit(limit),
        None => LegacyPaymentGateway::new(),
    };
    let service = CheckoutService::new(
        Arc::clone(&cfg),
        Arc::from(shipping_strategy(cfg.shipping_method, &cfg)),
        Arc::new(tax_calculator(&cfg)),
        Arc::new(LegacyGatewayAdapter::new(gateway, &cfg.currency)),
        Arc::new(ConsoleNotifier),
    );

    match service.place_order(&sample::order()?) {
        Ok(receipt) => println!("Legacy gateway accepted {}", receipt.total()),
        Err(CheckoutError::Payment(err)) => println!("Legacy gateway refused the charge: {err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
