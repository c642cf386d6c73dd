use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{
    sample, Checkout, CheckoutComponents, CheckoutService, ProductionComponents, SandboxComponents,
};
use pc_core::{CheckoutConfig, Environment};
use pc_runtime::{init_tracing, load_config};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run only this family instead of both.
    #[arg(long)]
    environment: Option<Environment>,
}

fn family(environment: Environment, cfg: &Arc<CheckoutConfig>) -> Box<dyn CheckoutComponents> {
    match environment {
        Environment::Sandbox => Box::new(SandboxComponents::new(Arc::clone(cfg))),
        Environment::Production => Box::new(ProductionComponents::new(Arc::clone(cfg))),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("abstract_factory_demo starting");

    let cfg = load_config(args.config.as_deref())?;
    let families: Vec<Box<dyn CheckoutComponents>> = match args.environment {
        Some(environment) => vec![family(environment, &cfg)],
        None => Environment::ALL.iter().map(|environment| family(*environment, &cfg)).collect(),
    };

    let order = sample::order()?;
    for components in &families {
        println!("== {} components (shipping: {})", components.label(), components.shipping().name());
        let service = CheckoutService::from_components(Arc::clone(&cfg), components.as_ref());
        let receipt = service.place_order(&order)?;
        println!("Total charged: {}", receipt.total());
    }
    Ok(())
}
