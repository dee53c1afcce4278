use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ReferenceError;

/// One airport entry from the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub code: String,
    pub name: String,
    pub city: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Synchronous lookup seam over already-loaded airport data.
pub trait AirportDirectory: Send + Sync {
    fn lookup(&self, iata: &str) -> Result<AirportInfo, ReferenceError>;
}

/// Directory backed by an in-process map, seeded with the built-in dataset or
/// refreshed from a CSV export.
#[derive(Debug, Clone)]
pub struct InMemoryAirports {
    by_code: HashMap<String, AirportInfo>,
}

impl InMemoryAirports {
    pub fn new(airports: Vec<AirportInfo>) -> Self {
        let by_code = airports
            .into_iter()
            .map(|airport| (airport.code.to_ascii_uppercase(), airport))
            .collect();
        Self { by_code }
    }

    /// Built-in dataset covering the metros the contract network serves.
    pub fn with_defaults() -> Self {
        let airports = vec![
            entry("SEA", "Seattle-Tacoma International", "Seattle", "America/Los_Angeles", 47.4502, -122.3088),
            entry("ORD", "Chicago O'Hare International", "Chicago", "America/Chicago", 41.9742, -87.9073),
            entry("ATL", "Hartsfield-Jackson Atlanta International", "Atlanta", "America/New_York", 33.6407, -84.4277),
            entry("JFK", "John F. Kennedy International", "New York", "America/New_York", 40.6413, -73.7781),
            entry("LAX", "Los Angeles International", "Los Angeles", "America/Los_Angeles", 33.9416, -118.4085),
            entry("DFW", "Dallas/Fort Worth International", "Dallas", "America/Chicago", 32.8998, -97.0403),
            entry("DEN", "Denver International", "Denver", "America/Denver", 39.8561, -104.6737),
            entry("SFO", "San Francisco International", "San Francisco", "America/Los_Angeles", 37.6213, -122.3790),
            entry("BOS", "Boston Logan International", "Boston", "America/New_York", 42.3656, -71.0096),
            entry("MIA", "Miami International", "Miami", "America/New_York", 25.7959, -80.2870),
            entry("PHX", "Phoenix Sky Harbor International", "Phoenix", "America/Phoenix", 33.4373, -112.0078),
            entry("LHR", "London Heathrow", "London", "Europe/London", 51.4700, -0.4543),
        ];
        Self::new(airports)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReferenceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut airports = Vec::new();
        for record in csv_reader.deserialize::<AirportRow>() {
            let row = record?;
            airports.push(AirportInfo {
                code: row.code,
                name: row.name,
                city: row.city,
                timezone: row.timezone,
                latitude: row.latitude,
                longitude: row.longitude,
            });
        }

        Ok(Self::new(airports))
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl AirportDirectory for InMemoryAirports {
    fn lookup(&self, iata: &str) -> Result<AirportInfo, ReferenceError> {
        self.by_code
            .get(&iata.to_ascii_uppercase())
            .cloned()
            .ok_or_else(|| ReferenceError::AirportNotFound(iata.to_string()))
    }
}

fn entry(
    code: &str,
    name: &str,
    city: &str,
    timezone: &str,
    latitude: f64,
    longitude: f64,
) -> AirportInfo {
    AirportInfo {
        code: code.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        timezone: timezone.to_string(),
        latitude,
        longitude,
    }
}

#[derive(Debug, Deserialize)]
struct AirportRow {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Timezone")]
    timezone: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}
