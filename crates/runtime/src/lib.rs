//! Runtime bootstrap shared by the demo binaries.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use pc_core::CheckoutConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod metrics;

/// `RUST_LOG` selects the filter; without it only INFO and above are shown.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Load the checkout settings once for the whole process.
///
/// Without a path the built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<Arc<CheckoutConfig>> {
    let cfg = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            CheckoutConfig::from_json(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CheckoutConfig::default(),
    };
    info!(
        environment = %cfg.environment,
        currency = %cfg.currency,
        tax_rate = %cfg.tax_rate,
        "checkout config loaded"
    );
    Ok(Arc::new(cfg))
}
