use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pc_checkout::{sample, Checkout, CheckoutService, EventBus, EventPublishingCheckout};
use pc_core::OrderEventKind;
use pc_runtime::metrics::{CheckoutTimer, MetricsRegistry};
use pc_runtime::{init_tracing, load_config};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print a JSON metrics line at the end.
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    info!("observer_demo starting");
    let timer = CheckoutTimer::start();

    let cfg = load_config(args.config.as_deref())?;
    let metrics = MetricsRegistry::default();
    let bus = Arc::new(EventBus::with_metrics(metrics.clone()));

    let audit = bus.subscribe(|event| {
        println!("[audit] {} {} {}: {}", event.timestamp.format("%H:%M:%S"), event.order_id, event.kind, event.message);
    });
    let completed = Arc::new(AtomicUsize::new(0));
    {
        let completed = Arc::clone(&completed);
        bus.subscribe(move |event| {
            if event.kind == OrderEventKind::CheckoutCompleted {
                let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                println!("[analytics] completed checkouts so far: {n}");
            }
        });
    }

    let checkout = EventPublishingCheckout::new(CheckoutService::from_config(cfg), Arc::clone(&bus));
    checkout.place_order(&sample::order()?)?;

    bus.unsubscribe(audit);
    println!("Audit log unsubscribed; {} subscriber(s) remain", bus.subscriber_count());
    checkout.place_order(&sample::large_order()?)?;

    if args.metrics {
        println!("{}", metrics.snapshot().to_json_line("observer_demo", Some(timer.elapsed())));
    }
    Ok(())
}
