use anyhow::{Context, Result};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, error, info};

use campus_delivery::{init_observability, Config, DeliveryService, OutputFormat};

const DEMO_CATEGORY: &str = "Coffee Drinks";
const DEMO_LOCATION: &str = "ITEC Computer Lab";
const DEMO_ITEMS: [&str; 2] = ["Latte", "Peppermint Patty Coffee"];
const DEMO_HOUR: u32 = 9;
const DEMO_RATING: i32 = 4;

fn main() -> Result<()> {
    let config = Config::from_environment().context("Failed to load configuration")?;

    init_observability(
        &config.observability.service_name,
        &config.observability.service_version,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(config.output.output_format) {
        error!("Demo order failed: {:#}", e);
        return Err(e);
    }

    info!("Demo complete");
    Ok(())
}

fn run(format: OutputFormat) -> Result<()> {
    let mut service = DeliveryService::new();

    let menu = service.show_menu(Some(DEMO_CATEGORY))?;
    emit(format, &menu)?;

    let summary = service.print_order(DEMO_LOCATION, &DEMO_ITEMS, DEMO_HOUR, true, true)?;
    emit(format, &summary)?;

    let outcome = service.rate_delivery(DEMO_RATING);
    match format {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => emit(format, &outcome)?,
    }

    let affordable = service.search_items_under_price(dec!(5.00))?;
    emit(format, &affordable)?;

    Ok(())
}

fn emit<T: Serialize + Display>(format: OutputFormat, report: &T) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}
