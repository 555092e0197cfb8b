use anyhow::Context;
use chrono::{Datelike, Local, Timelike};
use clap::{Parser, Subcommand};
use parkwise_core::{Coordinates, RequestContext};
use parkwise_pipeline::{SpotFinder, SpotQuery};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "parkwise")]
#[command(about = "Nearby parking finder command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one spot search and print the ranked list as JSON
    Search {
        /// User latitude; optional when the catalog source is configured
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// User longitude
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Day of week, 0 = Monday (defaults to today)
        #[arg(long)]
        day: Option<u8>,
        /// Hour of day, 0-23 (defaults to the current hour)
        #[arg(long)]
        hour: Option<u8>,
        /// Weekend flag (defaults to day >= 5)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        weekend: Option<bool>,
    },
    /// Print the Overpass query that would be sent for a position
    Query {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in metres
        #[arg(long, default_value_t = parkwise_overpass::DEFAULT_RADIUS_M)]
        radius_m: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            lat,
            lng,
            day,
            hour,
            weekend,
        }) => run_search(lat.zip(lng), day, hour, weekend).await?,
        Some(Commands::Query { lat, lng, radius_m }) => {
            let origin = Coordinates::new(lat, lng)?;
            print!("{}", parkwise_overpass::build_query(origin, radius_m));
        }
        None => println!("parkwise: run `parkwise --help` for usage"),
    }

    Ok(())
}

/// Builds the search context, filling unset day and hour from local time.
fn build_context(
    day: Option<u8>,
    hour: Option<u8>,
    weekend: Option<bool>,
) -> anyhow::Result<RequestContext> {
    let now = Local::now();
    let day = match day {
        Some(day) => day,
        None => u8::try_from(now.weekday().num_days_from_monday())?,
    };
    let hour = match hour {
        Some(hour) => hour,
        None => u8::try_from(now.hour())?,
    };
    let context = match weekend {
        Some(is_weekend) => RequestContext::new(day, hour, is_weekend)?,
        None => RequestContext::for_day_and_hour(day, hour)?,
    };
    Ok(context)
}

async fn run_search(
    position: Option<(f64, f64)>,
    day: Option<u8>,
    hour: Option<u8>,
    weekend: Option<bool>,
) -> anyhow::Result<()> {
    let config = parkwise_core::load_app_config()?;
    let finder = SpotFinder::from_config(&config).context("failed to build spot finder")?;

    let origin = position
        .map(|(lat, lng)| Coordinates::new(lat, lng))
        .transpose()?;
    let context = build_context(day, hour, weekend)?;

    tracing::info!(
        geo_source = %finder.source_mode(),
        day = context.day_of_week,
        hour = context.hour,
        is_weekend = context.is_weekend,
        "running spot search"
    );

    let spots = finder.find_spots(SpotQuery { origin, context }).await?;
    println!("{}", serde_json::to_string_pretty(&spots)?);
    Ok(())
}
