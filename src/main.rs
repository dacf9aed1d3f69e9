//! location-resolver - geocoding lookups from the command line
//!
//! This is the composition root that wires the provider, cache and resolver.
//!
//! Usage:
//!   location-resolver geocode <address>
//!   location-resolver reverse <latitude> <longitude>
//!   location-resolver validate <latitude> <longitude>

use location_resolver::{
    load_config, DashMapLocationCache, EdgeFunctionProvider, GeocodingProvider,
    GoogleGeocodingProvider, LocationCoordinates, LocationResolver, ProviderKind,
};
use std::sync::Arc;
use std::time::Duration;

enum Command {
    Geocode(String),
    Reverse(LocationCoordinates),
    Validate(LocationCoordinates),
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let coordinates = |rest: &[String]| -> anyhow::Result<LocationCoordinates> {
        match rest {
            [lat, lng] => Ok(LocationCoordinates::new(lat.parse()?, lng.parse()?)),
            _ => anyhow::bail!("expected <latitude> <longitude>"),
        }
    };

    match args {
        [cmd, rest @ ..] if cmd == "geocode" && !rest.is_empty() => {
            Ok(Command::Geocode(rest.join(" ")))
        }
        [cmd, rest @ ..] if cmd == "reverse" => Ok(Command::Reverse(coordinates(rest)?)),
        [cmd, rest @ ..] if cmd == "validate" => Ok(Command::Validate(coordinates(rest)?)),
        _ => anyhow::bail!(
            "usage: location-resolver geocode <address> | reverse <lat> <lng> | validate <lat> <lng>"
        ),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging on stderr; stdout carries the JSON result
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    // ===== COMPOSITION ROOT =====

    let timeout = Duration::from_secs(cfg.timeout_secs);

    let provider: Arc<dyn GeocodingProvider> = match cfg.provider {
        ProviderKind::Google => Arc::new(GoogleGeocodingProvider::new(
            cfg.provider_url.clone(),
            cfg.api_key.clone(),
            timeout,
        )?),
        ProviderKind::EdgeFunction => Arc::new(EdgeFunctionProvider::new(
            cfg.provider_url.clone(),
            cfg.api_key.clone(),
            timeout,
        )?),
    };

    let cache = Arc::new(DashMapLocationCache::new(Duration::from_secs(
        cfg.cache_ttl_secs,
    )));
    if cfg.cache_gc_interval_secs > 0 {
        cache.start_gc(Duration::from_secs(cfg.cache_gc_interval_secs));
    }

    tracing::debug!(
        "resolver ready provider={:?} url={} ttl={}s",
        cfg.provider,
        cfg.provider_url,
        cfg.cache_ttl_secs
    );

    let resolver = LocationResolver::with_timeout(provider, cache, timeout);

    let result = match command {
        Command::Geocode(address) => resolver.geocode_address(&address).await,
        Command::Reverse(coordinates) => {
            if !LocationResolver::validate_coordinates(&coordinates) {
                tracing::warn!("coordinates out of range: {}", coordinates);
            }
            resolver.reverse_geocode(coordinates).await
        }
        Command::Validate(coordinates) => {
            let valid = LocationResolver::validate_coordinates(&coordinates);
            println!("{}", serde_json::json!({ "valid": valid }));
            return Ok(());
        }
    };

    match result {
        Some(details) => {
            println!("{}", serde_json::to_string_pretty(&details)?);
            Ok(())
        }
        None => anyhow::bail!("location could not be resolved"),
    }
}
