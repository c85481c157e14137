//! Quadtree vs point quadtree query benchmark.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quadbench::{bench, export, Config};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("quadbench v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!("Loaded configuration");
    info!(
        "  Boundary: {:?}, capacity {}",
        config.tree.boundary.to_rect(),
        config.tree.capacity
    );
    info!("  Point counts: {:?}", config.sweep.point_counts);
    if let Some(seed) = config.sweep.seed {
        info!("  Seed: {}", seed);
    }

    let mut rng = bench::rng_for(&config);
    let records = bench::run(&config, &mut rng)?;

    let path = &config.output.results_path;
    export::save_results(path, &records)
        .with_context(|| format!("writing results to {}", path.display()))?;
    info!("Saved {} results to {}", records.len(), path.display());

    bench::export_structure(&config, &mut rng)?;

    Ok(())
}
