use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promostandards_client::{ClientConfig, ConfigurationType, PromoStandardsClient, RemoteCall, SoapTransport};
use serde::Serialize;
use tracing::debug;

/// Query a supplier's PromoStandards services.
///
/// Credentials and endpoints are read from PROMOSTANDARDS_ACCESS_ID,
/// PROMOSTANDARDS_PASSWORD, PROMOSTANDARDS_PRODUCT_DATA_URL,
/// PROMOSTANDARDS_INVENTORY_URL, PROMOSTANDARDS_MEDIA_CONTENT_URL and
/// PROMOSTANDARDS_PRICING_URL.
#[derive(Debug, Parser)]
#[command(name = "promostandards", version)]
struct Cli {
    /// Service protocol version; unsupported values fall back to the newest supported one
    #[arg(long = "ws-version", global = true)]
    ws_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List sellable product ids
    SellableIds,
    /// Show inventory levels per part
    Inventory { product_id: String },
    /// Show product data
    Product { product_id: String },
    /// List image media entries
    Media { product_id: String },
    /// Show the primary image entry
    PrimaryImage { product_id: String },
    /// List FOB points
    FobPoints { product_id: String },
    /// Show prices for a product shipped from a FOB point
    Prices {
        product_id: String,
        fob_id: String,
        /// Decorated or Blank; a rejected Decorated request is retried as Blank
        #[arg(long, default_value = "Decorated")]
        configuration_type: ConfigurationType,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("load PromoStandards configuration")?;
    debug!(?config, "configuration loaded");
    let transport = SoapTransport::with_timeout(Duration::from_secs(cli.timeout)).context("build SOAP transport")?;
    let client = PromoStandardsClient::new(config, transport);

    run(&client, cli.command, cli.ws_version.as_deref())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run<T: RemoteCall>(client: &PromoStandardsClient<T>, command: Command, version: Option<&str>) -> Result<()> {
    match command {
        Command::SellableIds => print_json(&client.get_sellable_product_ids(version)?),
        Command::Inventory { product_id } => print_json(&client.get_inventory_levels(&product_id, version)?),
        Command::Product { product_id } => print_json(&client.get_product_data(&product_id, version)?),
        Command::Media { product_id } => print_json(&client.get_media_content(&product_id, version)?),
        Command::PrimaryImage { product_id } => print_json(&client.get_primary_image(&product_id, version)?),
        Command::FobPoints { product_id } => print_json(&client.get_fob_points(&product_id, version)?),
        Command::Prices {
            product_id,
            fob_id,
            configuration_type,
        } => print_json(&client.get_prices(&product_id, &fob_id, configuration_type, version)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn prices_defaults_to_decorated() {
        let cli = Cli::try_parse_from(["promostandards", "prices", "PEN-1", "CHI"]).expect("parse");
        match cli.command {
            Command::Prices {
                product_id,
                fob_id,
                configuration_type,
            } => {
                assert_eq!(product_id, "PEN-1");
                assert_eq!(fob_id, "CHI");
                assert_eq!(configuration_type, ConfigurationType::Decorated);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_version_and_configuration_type_parse() {
        let cli = Cli::try_parse_from([
            "promostandards",
            "prices",
            "PEN-1",
            "CHI",
            "--configuration-type",
            "blank",
            "--ws-version",
            "1.0.0",
        ])
        .expect("parse");
        assert_eq!(cli.ws_version.as_deref(), Some("1.0.0"));
        assert!(matches!(
            cli.command,
            Command::Prices {
                configuration_type: ConfigurationType::Blank,
                ..
            }
        ));
    }

    #[test]
    fn unknown_configuration_type_is_rejected() {
        assert!(Cli::try_parse_from(["promostandards", "prices", "PEN-1", "CHI", "--configuration-type", "foil"]).is_err());
    }
}
