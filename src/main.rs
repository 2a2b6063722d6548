// ==========================================
// Shipping Relay Planner - CLI entry point
// ==========================================
// Loads the catalog and a confirmed order batch, generates a relay
// session and prints the per-location trailer plan. The interactive
// dispatch board consumes the same library API.
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context};

use relay_planner::config::AppConfig;
use relay_planner::engine::{InboundAnalyzer, RelayPlanner};
use relay_planner::repository::OrderBatchRepository;
use relay_planner::{logging, Catalog, APP_NAME, VERSION};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    // Usage: relay-planner <batch-file> [data-dir]
    let mut args = std::env::args().skip(1);
    let batch_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: relay-planner <batch-file> [data-dir]"),
    };
    let config = match args.next() {
        Some(dir) => AppConfig::with_data_dir(PathBuf::from(dir)),
        None => AppConfig::from_default_dirs(),
    };

    let catalog = Catalog::load_from_files(&config.products_file(), &config.routes_file())
        .context("loading catalog")?;
    tracing::info!(
        products = catalog.product_count(),
        routes = catalog.route_count(),
        "catalog ready"
    );

    let batch = OrderBatchRepository::new()
        .load(&batch_path)
        .context("loading order batch")?;
    tracing::info!(
        confirmed_date = %batch.metadata.confirmed_date,
        confirmed_day = %batch.metadata.confirmed_day,
        orders = batch.orders.len(),
        "order batch ready"
    );

    let session = RelayPlanner::new().generate(&batch.orders);

    println!(
        "Relay {} for {} {} - {} locations, {} trailers, {} stacks",
        session.session_id,
        batch.metadata.confirmed_date,
        batch.metadata.confirmed_day,
        session.locations.len(),
        session.total_trailers(),
        session.total_stacks()
    );
    for location in &session.locations {
        println!(
            "  {} - {} orders, {} stacks, {} trailers",
            location.name,
            location.order_ids.len(),
            location.total_stacks,
            location.trailers.len()
        );
        for trailer in &location.trailers {
            println!(
                "    #{} {} - {} stacks",
                trailer.number, trailer.load_id, trailer.stacks
            );
        }
    }

    // Products that must be trucked in from other facilities first
    let inbound = InboundAnalyzer::new(config.home_plant).analyze(&batch.orders, &catalog);
    if inbound.is_empty() {
        println!("No inbound trailers needed: every product ships from plant {}", config.home_plant);
    } else {
        for (origin_plant, demands) in &inbound {
            println!("Inbound from plant {}:", origin_plant);
            for d in demands {
                println!(
                    "    {} (#{}) - {} units, {} trays, {} stacks",
                    d.product_name, d.product_number, d.total_units, d.total_trays, d.total_stacks
                );
            }
        }
    }

    Ok(())
}
