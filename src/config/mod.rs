use std::collections::BTreeSet;
use std::env;
use std::fmt;

use crate::workflows::layover::{Constraints, HotelId};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the planning runtime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub constraints: Constraints,
}

impl AppConfig {
    /// Load from the environment; every key has a documented default, so an
    /// absent constraints provider is a valid state.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let constraints = load_constraints()?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            constraints,
        })
    }
}

fn load_constraints() -> Result<Constraints, ConfigError> {
    let mut constraints = Constraints::default();

    if let Some(value) = parse_env("LAYOVER_MAX_COMMUTE_MINUTES")? {
        constraints.max_commute_minutes = value;
    }
    if let Some(value) = parse_env("LAYOVER_MIN_HOTEL_RATING")? {
        constraints.min_hotel_rating = value;
    }
    if let Some(value) = parse_env("LAYOVER_MAX_NIGHTLY_USD")? {
        constraints.max_nightly_usd = value;
    }
    if let Some(value) = parse_env("LAYOVER_MIN_REVIEWS")? {
        constraints.min_reviews = value;
    }
    if let Some(value) = parse_env("LAYOVER_MIN_REST_HOURS")? {
        constraints.min_rest_hours = value;
    }
    if let Ok(value) = env::var("LAYOVER_PREFERRED_BRANDS") {
        constraints.preferred_brands = split_list(&value);
    }
    if let Ok(value) = env::var("LAYOVER_BLACKLIST_HOTELS") {
        constraints.blacklist_hotels = split_list(&value)
            .into_iter()
            .map(HotelId)
            .collect::<BTreeSet<_>>();
    }

    Ok(constraints)
}

fn parse_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(None),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a valid number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
