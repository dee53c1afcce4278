//! Read-only airport and hotel reference data consumed by the planning core.
//!
//! Real deployments load these from the storage layer; the directory traits
//! keep that seam explicit so the pipeline can be exercised against in-memory
//! or CSV-backed datasets.

pub mod airports;
pub mod hotels;

pub use airports::{AirportDirectory, AirportInfo, InMemoryAirports};
pub use hotels::{HotelDirectory, HotelRecord, InMemoryHotels};

/// Errors raised by the reference-data directories. An unknown airport is
/// distinct from an empty hotel result set: the former is a lookup failure,
/// the latter legitimate data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("airport {0} not found in reference data")]
    AirportNotFound(String),
    #[error("reference dataset unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("reference dataset malformed: {0}")]
    Csv(#[from] csv::Error),
}
