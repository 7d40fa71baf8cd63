//! # EcoTrace Runtime
//!
//! Builds the services, seeds demo data and prints a dashboard snapshot as
//! JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use eco_telemetry::TelemetryConfig;
use tracing::info;

use eco_runtime::{seed_demo_data, DashboardSnapshot, EcoContainer, RuntimeConfig};

fn main() -> Result<()> {
    // Logging first so config warnings are visible.
    let telemetry = TelemetryConfig::from_env();
    eco_telemetry::init_telemetry(&telemetry).context("Failed to initialize logging")?;

    let config = RuntimeConfig::from_env();

    info!("===========================================");
    info!("  EcoTrace Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("  Policy: {}", config.ledger.transition_policy);
    info!("===========================================");

    let container = EcoContainer::new(config).context("Invalid configuration")?;

    if container.config.seed_demo_data {
        seed_demo_data(
            container.identity.as_ref(),
            container.ledger.as_ref(),
            container.config.ledger.transition_policy,
        )
        .context("Failed to seed demo data")?;
    }

    let snapshot = DashboardSnapshot::capture(&container);
    info!(
        materials = snapshot.stats.total_materials,
        pending_credits = snapshot.pending_credits.len(),
        approved_value = snapshot.stats.approved_carbon_credits,
        "Ledger ready"
    );

    let json = serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?;
    println!("{json}");

    Ok(())
}
