mod filter;

use clap::Parser;
use hotelmerge_core::AppConfig;
use hotelmerge_suppliers::SupplierClient;
use tracing_subscriber::EnvFilter;

use crate::filter::{parse_destination_ids, parse_hotel_ids, HotelFilter, IdFilter};

#[derive(Debug, Parser)]
#[command(name = "hotelmerge")]
#[command(about = "Merge hotel data from every supplier into one catalog")]
#[command(
    after_help = "Example: hotelmerge iJhz,SjyX,f8c9 5432,5432,1122\n         hotelmerge none none"
)]
struct Cli {
    /// Comma-separated hotel ids to keep, or `none` for all.
    #[arg(value_parser = parse_hotel_ids)]
    hotel_ids: IdFilter<String>,

    /// Comma-separated destination ids to keep, or `none` for all.
    #[arg(value_parser = parse_destination_ids)]
    destination_ids: IdFilter<i32>,
}

impl Cli {
    fn filter(&self) -> HotelFilter {
        HotelFilter {
            hotel_ids: self.hotel_ids.clone(),
            destination_ids: self.destination_ids.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Malformed filters exit with a usage error here, before any fetch.
    let cli = Cli::parse();

    let config = hotelmerge_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli, &config).await?;
    println!("{output}");
    Ok(())
}

/// Fetches every supplier, merges, filters and renders the catalog as
/// pretty-printed JSON.
async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<String> {
    let client = SupplierClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build supplier client: {e}"))?;

    let batches = client.fetch_all_suppliers().await;
    if batches.is_empty() {
        tracing::warn!("no supplier returned any records");
    }

    let hotels = cli.filter().apply(hotelmerge_merge::merge(&batches));
    tracing::info!(hotels = hotels.len(), "hotels after filtering");

    Ok(serde_json::to_string_pretty(&hotels)?)
}

#[cfg(test)]
mod tests;
