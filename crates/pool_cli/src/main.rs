//! Search a JSON offer list for pools matching a rider's route.
//!
//! Run with: cargo run -p pool_cli -- --offers crates/pool_cli/data/sample_offers.json \
//!     --pickup=-1.2864,36.8172 --dropoff=-1.3192,36.9278

use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use pool_core::config::SearchConfig;
use pool_core::currency::format_price;
use pool_core::repository::InMemoryOfferRepository;
use pool_core::search::{Location, PoolSearch, SearchRequest, SearchResults};
use pool_core::{GeoPoint, RideOffer};

#[derive(Parser)]
#[command(
    name = "pool_search",
    about = "Find ride pools near a route",
    long_about = "Ranks offers by distance to the given pickup and drop-off points.\n\
                  Without coordinates for both ends, offers are listed by departure time."
)]
struct Cli {
    /// JSON file holding an array of ride offers
    #[arg(long)]
    offers: PathBuf,
    /// JSON search config (radii, currency); POOL_* env vars override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pickup point as LAT,LNG
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pickup: Option<GeoPoint>,
    /// Drop-off point as LAT,LNG
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    dropoff: Option<GeoPoint>,
    /// Pickup address text
    #[arg(long)]
    pickup_address: Option<String>,
    /// Drop-off address text
    #[arg(long)]
    dropoff_address: Option<String>,
    /// Seats needed
    #[arg(long, default_value_t = 1)]
    seats: u32,
    /// Earliest departure (RFC 3339); defaults to now
    #[arg(long)]
    after: Option<DateTime<Utc>>,
    /// Pickup radius in km (overrides config)
    #[arg(long)]
    pickup_radius_km: Option<f64>,
    /// Drop-off radius in km (overrides config)
    #[arg(long)]
    dropoff_radius_km: Option<f64>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn parse_point(raw: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{raw}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{lat}'"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{lng}'"))?;
    GeoPoint::new(lat, lng).map_err(|err| err.to_string())
}

fn location(point: Option<GeoPoint>, address: Option<String>) -> Location {
    Location {
        coordinates: point,
        address,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SearchConfig, Box<dyn Error>> {
    let config = match path {
        Some(path) => {
            info!("Loading search config from {}", path.display());
            SearchConfig::from_json_file(path)?
        }
        None => SearchConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn build_request(cli: &Cli) -> SearchRequest {
    let mut request = SearchRequest::new(
        location(cli.pickup, cli.pickup_address.clone()),
        location(cli.dropoff, cli.dropoff_address.clone()),
    )
    .with_seats(cli.seats);
    request.departing_after = cli.after;
    request.pickup_radius_km = cli.pickup_radius_km;
    request.dropoff_radius_km = cli.dropoff_radius_km;
    request
}

fn price_label(offer: &RideOffer, fallback_currency: &str) -> String {
    let code = if offer.details.currency.is_empty() {
        fallback_currency
    } else {
        offer.details.currency.as_str()
    };
    format_price(offer.details.price, code)
}

fn driver_label(offer: &RideOffer) -> String {
    let name = if offer.details.driver_name.is_empty() {
        offer.id.to_string()
    } else {
        offer.details.driver_name.clone()
    };
    if offer.details.verified {
        format!("{name} (verified)")
    } else {
        name
    }
}

fn seats_label(offer: &RideOffer) -> String {
    if offer.details.total_seats == 0 {
        format!("{} seat(s) free", offer.seats_available)
    } else {
        format!(
            "{} seat(s) free, {}/{} taken",
            offer.seats_available,
            offer.seats_taken(),
            offer.details.total_seats
        )
    }
}

fn print_offer_line(index: usize, offer: &RideOffer, currency: &str) {
    println!(
        "{:>3}. {}  {}  departs {}  {}",
        index + 1,
        driver_label(offer),
        price_label(offer, currency),
        offer.departure.format("%d/%m/%Y, %-I:%M %p"),
        seats_label(offer),
    );
}

fn print_results(request: &SearchRequest, results: &SearchResults, currency: &str) {
    println!("From: {}", request.pickup.label());
    println!("To:   {}", request.dropoff.label());
    if results.is_empty() {
        println!("\nNo pools found.");
        return;
    }
    match results {
        SearchResults::Ranked(ranked) => {
            println!("\n{} pool(s) near your route:", ranked.len());
            for (i, scored) in ranked.iter().enumerate() {
                print_offer_line(i, &scored.offer, currency);
                println!(
                    "       {:.1} km from your pickup, {:.1} km from your destination",
                    scored.pickup_distance_km, scored.dropoff_distance_km
                );
            }
        }
        SearchResults::Chronological(offers) => {
            println!("\n{} pool(s) by departure time:", offers.len());
            for (i, offer) in offers.iter().enumerate() {
                print_offer_line(i, offer, currency);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let repository = InMemoryOfferRepository::from_json_file(&cli.offers)?;
    info!("Loaded {} offers from {}", repository.len(), cli.offers.display());

    let request = build_request(&cli);
    let currency = config.currency.clone();
    let search = PoolSearch::new(repository, config);
    let results = search.search(&request, Utc::now())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&request, &results, &currency);
    }
    Ok(())
}
