//! skydrop - inspect routing and quoting over a center catalog file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use skydrop_core::{
    find_complete_route, find_nearest_center, quote_delivery, Coordinate, DistributionCenter,
    PricingConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drone delivery routing and quoting")]
struct Cli {
    /// Path to the center catalog (JSON array of centers)
    #[arg(long, default_value = "centers.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the active center nearest to a customer location
    Nearest {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Compute the full delivery route to a customer location
    Route {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Price a delivery end to end
    Quote {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,

        /// Override the cost per kilometer
        #[arg(long)]
        rate_per_km: Option<f64>,

        /// Override the cruise speed in km/h
        #[arg(long)]
        speed_kmh: Option<f64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skydrop=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let centers = load_catalog(&cli.catalog)?;
    tracing::info!(count = centers.len(), "loaded center catalog");

    match cli.command {
        Command::Nearest { lat, lon } => nearest(&centers, customer(lat, lon)?),
        Command::Route { lat, lon } => route(&centers, customer(lat, lon)?),
        Command::Quote {
            lat,
            lon,
            rate_per_km,
            speed_kmh,
        } => {
            let mut config = PricingConfig::default();
            if let Some(rate) = rate_per_km {
                config.rate_per_km = rate;
            }
            if let Some(speed) = speed_kmh {
                config.drone_speed_kmh = speed;
            }
            quote(&centers, customer(lat, lon)?, &config)
        }
    }
}

fn load_catalog(path: &Path) -> Result<Vec<DistributionCenter>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&raw).context("parsing center catalog JSON")
}

fn customer(lat: f64, lon: f64) -> Result<Coordinate> {
    let coordinate = Coordinate::new(lat, lon);
    if !coordinate.is_valid() {
        bail!("customer location out of range: lat must be in [-90,90], lon in [-180,180]");
    }
    Ok(coordinate)
}

fn nearest(centers: &[DistributionCenter], customer: Coordinate) -> Result<()> {
    match find_nearest_center(centers, customer) {
        Some(center) => {
            println!("Nearest center: {} ({})", center.name, center.id);
            println!(
                "Distance: {:.2} km (max range {:.2} km)",
                skydrop_core::haversine_distance(center.lat, center.lon, customer.lat, customer.lon),
                center.max_range_km
            );
        }
        None => println!("No active distribution centers in the catalog."),
    }
    Ok(())
}

fn route(centers: &[DistributionCenter], customer: Coordinate) -> Result<()> {
    let start = find_nearest_center(centers, customer)
        .context("no active distribution centers in the catalog")?;
    tracing::debug!(start = %start.id, "assigned start center");

    let result = find_complete_route(centers, start, customer)?;
    if !result.feasible {
        println!("No feasible route: the customer location cannot be served.");
        return Ok(());
    }

    println!("Route ({} stops):", result.stop_count());
    for center in &result.route {
        println!("  {} ({})", center.name, center.id);
    }
    println!("  Customer @ {:.5}, {:.5}", customer.lat, customer.lon);
    println!("Total distance: {:.2} km", result.total_distance_km);
    Ok(())
}

fn quote(centers: &[DistributionCenter], customer: Coordinate, config: &PricingConfig) -> Result<()> {
    let quote = quote_delivery(centers, customer, config)?;
    println!("Start center: {}", quote.start_center_name);
    println!("Route: {}", quote.route_summary);
    println!("Total distance: {:.2} km", quote.total_distance_km);
    println!("Service cost: {:.2}", quote.service_cost);
    println!("Estimated delivery: {} min", quote.estimated_minutes);
    Ok(())
}
