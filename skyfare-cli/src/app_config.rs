use anyhow::Context;
use chrono::NaiveTime;
use serde::Deserialize;
use skyfare_catalog::{Flight, FlightKind, PricingPolicy};
use skyfare_order::DEFAULT_FIRST_BOOKING_ID;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub seating: SeatingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub flights: Vec<FlightConfig>,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PricingConfig {
    #[serde(default)]
    pub policy: PricingPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    #[serde(default = "default_first_id")]
    pub first_id: u64,
}

fn default_first_id() -> u64 { DEFAULT_FIRST_BOOKING_ID }

impl Default for BookingConfig {
    fn default() -> Self {
        Self { first_id: default_first_id() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatingConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 6 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "skyfare=info,skyfare_order=info,skyfare_catalog=info,skyfare_core=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

/// Catalog entry; times are `HH:MM`
#[derive(Debug, Deserialize, Clone)]
pub struct FlightConfig {
    pub number: String,
    pub kind: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub seats: u32,
}

impl FlightConfig {
    pub fn to_flight(&self) -> anyhow::Result<Flight> {
        let kind: FlightKind = self
            .kind
            .parse()
            .with_context(|| format!("flight {}", self.number))?;
        let departure = NaiveTime::parse_from_str(&self.departure, "%H:%M")
            .with_context(|| format!("flight {}: bad departure time {:?}", self.number, self.departure))?;
        let arrival = NaiveTime::parse_from_str(&self.arrival, "%H:%M")
            .with_context(|| format!("flight {}: bad arrival time {:?}", self.number, self.arrival))?;

        Ok(Flight::new(
            self.number.clone(),
            kind,
            self.origin.clone(),
            self.destination.clone(),
            departure,
            arrival,
            self.seats,
        ))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RouteConfig {
    pub from: String,
    pub to: String,
    pub price: f64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let config_dir = env::var("SKYFARE_CONFIG_DIR").unwrap_or_else(|_| "config".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", config_dir)))
            .add_source(config::File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", config_dir)).required(false))
            // e.g. `SKYFARE__PRICING__POLICY=discount`
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
