use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::ReferenceError;

/// One hotel entry from the reference dataset. Rates are optional: some
/// properties publish no nightly figure and surface one only during
/// negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub hotel_id: String,
    pub name: String,
    pub brand: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f32,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub nightly_rate: Option<f64>,
    pub taxes_and_fees: Option<f64>,
}

/// Text-match lookup seam over the hotel reference set. An empty result is a
/// legitimate outcome, not an error.
pub trait HotelDirectory: Send + Sync {
    /// Hotels whose name or address mentions the city or the airport code.
    fn find_in_city(&self, city: &str, airport_code: &str) -> Vec<HotelRecord>;
}

/// Directory backed by an in-process list, seeded from a CSV export.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotels {
    records: Vec<HotelRecord>,
}

impl InMemoryHotels {
    pub fn new(records: Vec<HotelRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReferenceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for record in csv_reader.deserialize::<HotelRow>() {
            let row = record?;
            records.push(row.into_record());
        }

        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HotelDirectory for InMemoryHotels {
    fn find_in_city(&self, city: &str, airport_code: &str) -> Vec<HotelRecord> {
        let city = city.to_ascii_lowercase();
        let airport = airport_code.to_ascii_lowercase();

        self.records
            .iter()
            .filter(|record| {
                let name = record.name.to_ascii_lowercase();
                let address = record.address.to_ascii_lowercase();
                name.contains(&city)
                    || address.contains(&city)
                    || name.contains(&airport)
                    || address.contains(&airport)
            })
            .cloned()
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct HotelRow {
    #[serde(rename = "HotelId")]
    hotel_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Rating", default)]
    rating: f32,
    #[serde(rename = "Reviews", default)]
    review_count: u32,
    #[serde(rename = "Amenities", default)]
    amenities: String,
    #[serde(rename = "NightlyRate", default, deserialize_with = "empty_as_none")]
    nightly_rate: Option<f64>,
    #[serde(rename = "TaxesAndFees", default, deserialize_with = "empty_as_none")]
    taxes_and_fees: Option<f64>,
}

impl HotelRow {
    fn into_record(self) -> HotelRecord {
        let amenities = self
            .amenities
            .split(';')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        HotelRecord {
            hotel_id: self.hotel_id,
            name: self.name,
            brand: self.brand,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            rating: self.rating,
            review_count: self.review_count,
            amenities,
            nightly_rate: self.nightly_rate,
            taxes_and_fees: self.taxes_and_fees,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
