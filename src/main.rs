//! Catalogue entry point.
//!
//! Builds the demonstration registry, runs it against standard output and
//! exits with status 0 whatever the individual demonstrations did. Only a
//! startup failure (registry or runtime construction) exits non-zero.

use lambda_catalogue::catalogue;
use lambda_catalogue::config::CatalogueConfig;
use lambda_catalogue::console::Console;
use lambda_catalogue::logging;

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let config = CatalogueConfig::from_env().unwrap_or_else(|error| {
        tracing::warn!("Failed to load configuration from environment: {error}");
        tracing::info!("Using default configuration");
        CatalogueConfig::default()
    });
    tracing::debug!(
        async_delay = ?config.async_delay,
        worker_threads = config.worker_threads,
        detached = %config.detached,
        "configuration loaded"
    );

    let (registry, runner) =
        catalogue::assemble(catalogue::demonstrations(), config, Console::stdio())?;

    let summary = runner.run_all(&registry);
    runner.finish();

    if !summary.all_succeeded() {
        tracing::warn!(failed = summary.failed, "some demonstrations failed");
    }
    Ok(())
}
