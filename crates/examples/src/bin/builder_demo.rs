use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use pc_checkout::{sample, Checkout, CheckoutService, OrderBuilder};
use pc_core::{Address, Money};
use pc_runtime::{init_tracing, load_config};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Let the builder generate the order id.
    #[arg(long)]
    generate_id: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("builder_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let service = CheckoutService::from_config(cfg);

    let mut builder = OrderBuilder::new()
        .customer(sample::customer()?)
        .ship_to(Address::with_country("221B Baker St", "London", "Greater London", "NW1 6XE", "GB")?)
        .line("KB-001", "Mechanical Keyboard", 1, Money::new(4999, 2))
        .line("CBL-USB", "USB-C Cable", 2, Money::new(1999, 2));
    if !args.generate_id {
        builder = builder.order_id(sample::SAMPLE_ORDER_ID);
    }
    let order = builder.build()?;
    println!(
        "Built order {} with {} line(s) shipping to {}, {}",
        order.order_id(),
        order.items().len(),
        order.ship_to().city(),
        order.ship_to().country()
    );
    println!("{}", service.place_order(&order)?);

    // Required parts are checked when the order is built.
    match OrderBuilder::new().customer(sample::customer()?).build() {
        Ok(order) => warn!(order_id = order.order_id(), "incomplete order unexpectedly built"),
        Err(err) => println!("Rejected incomplete order: {err}"),
    }
    Ok(())
}
