//! livingcost explorer
//!
//! Loads the static data set and prints a JSON report: metric domains,
//! heatmap legends, the configured comparison and budget session.

mod report;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use livingcost_data::load_all;
use livingcost_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter. Logs go to stderr so stdout
    // stays valid JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data = load_all(&config.data)?;
    info!(
        locations = data.index.len(),
        currencies = data.rates.len(),
        "Static data loaded"
    );

    let report = report::build(&config, &data)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
