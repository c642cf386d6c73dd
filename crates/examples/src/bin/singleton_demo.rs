use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{sample, Checkout, CheckoutService};
use pc_runtime::{init_tracing, load_config};

/// One settings instance per process, handed to every service that needs it.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("singleton_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let storefront = CheckoutService::from_config(Arc::clone(&cfg));
    let mobile = CheckoutService::from_config(Arc::clone(&cfg));

    println!("Store: {} ({})", cfg.store_name, cfg.currency);
    println!(
        "Both services share one config: {} (holders: {})",
        Arc::ptr_eq(storefront.config(), mobile.config()),
        Arc::strong_count(&cfg)
    );

    let order = sample::order()?;
    let web = storefront.place_order(&order)?;
    let app = mobile.place_order(&order)?;
    println!("Storefront total: {}", web.total());
    println!("Mobile total:     {}", app.total());
    Ok(())
}
