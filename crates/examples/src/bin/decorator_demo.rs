use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use pc_checkout::{sample, Checkout, CheckoutService, LoggingCheckout, TimingCheckout};
use pc_runtime::metrics::{CheckoutTimer, MetricsRegistry};
use pc_runtime::{init_tracing, load_config};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layer {
    Logging,
    Timing,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Wrappers to apply, innermost first.
    #[arg(long, value_enum, value_delimiter = ',', default_values = ["timing", "logging"])]
    layers: Vec<Layer>,
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("decorator_demo starting");
    let timer = CheckoutTimer::start();

    let cfg = load_config(args.config.as_deref())?;
    let metrics = MetricsRegistry::default();
    let mut checkout: Box<dyn Checkout> = Box::new(CheckoutService::from_config(cfg));
    for layer in &args.layers {
        checkout = match layer {
            Layer::Logging => Box::new(LoggingCheckout::new(checkout)) as Box<dyn Checkout>,
            Layer::Timing => Box::new(TimingCheckout::new(checkout, metrics.clone())),
        };
    }
    println!("Stack (innermost first): service -> {:?}", args.layers);

    let receipt = checkout.place_order(&sample::order()?)?;
    println!("{receipt}");

    if args.metrics {
        println!("{}", metrics.snapshot().to_json_line("decorator_demo", Some(timer.elapsed())));
    }
    Ok(())
}
