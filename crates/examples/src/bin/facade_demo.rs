use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{sample, CheckoutFacade};
use pc_core::Money;
use pc_runtime::{init_tracing, load_config};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("facade_demo starting");

    let facade = CheckoutFacade::from_config(load_config(args.config.as_deref())?);
    let receipt = facade.checkout(
        sample::customer()?,
        sample::address()?,
        &[
            ("KB-001", "Mechanical Keyboard", 1, Money::new(4999, 2)),
            ("CBL-USB", "USB-C Cable", 2, Money::new(1999, 2)),
        ],
    )?;
    println!("Checkout complete, charged {}", receipt.total());
    Ok(())
}
