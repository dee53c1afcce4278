use chrono::{Datelike, Timelike, Weekday};
use serde_json::json;
use tracing::info;

use super::super::context::DecisionLog;
use super::super::domain::{CityProfile, CrewPairing, Outcome, Stage};
use crate::reference::{AirportDirectory, ReferenceError};

pub const FLAG_LATE_NIGHT: &str = "Late night arrival";
pub const FLAG_HIGH_TRAFFIC: &str = "High traffic metro area";
pub const FLAG_WEATHER: &str = "Weather-sensitive location";
pub const FLAG_WEEKEND: &str = "Weekend arrival";

/// Metros where ground congestion routinely stretches crew commutes.
const HIGH_TRAFFIC_AIRPORTS: &[&str] = &["ATL", "ORD", "LAX", "JFK", "LHR", "DFW", "DEN", "SFO"];

/// Airports with recurring weather-driven disruption.
const WEATHER_RISK_AIRPORTS: &[&str] = &["ORD", "DEN", "BOS", "SEA", "MIA", "JFK"];

/// Fatal resolution failure: the pairing's arrival airport is not in the
/// reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum CityContextError {
    #[error("pairing has no final leg to resolve an arrival city from")]
    MissingFinalLeg,
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// Resolve the arrival metro and derive deterministic risk flags from the
/// final leg's arrival context.
pub(crate) fn resolve(
    pairing: &CrewPairing,
    airports: &dyn AirportDirectory,
    log: &DecisionLog,
) -> Result<CityProfile, CityContextError> {
    let final_leg = pairing
        .final_leg()
        .ok_or(CityContextError::MissingFinalLeg)?;
    let airport = match airports.lookup(&final_leg.arrival_airport) {
        Ok(airport) => airport,
        Err(error) => {
            log.record(
                Stage::CityContext,
                Some(final_leg.arrival_airport.clone()),
                Outcome::Reject,
                None,
                vec![error.to_string()],
                None,
            );
            return Err(error.into());
        }
    };

    let arrival = final_leg.arrival_time;
    let hour = arrival.hour();
    let mut risk_flags = Vec::new();
    let mut curfew = false;

    if hour == 23 || hour <= 5 {
        risk_flags.push(FLAG_LATE_NIGHT.to_string());
        curfew = true;
    }
    if HIGH_TRAFFIC_AIRPORTS.contains(&airport.code.as_str()) {
        risk_flags.push(FLAG_HIGH_TRAFFIC.to_string());
    }
    if WEATHER_RISK_AIRPORTS.contains(&airport.code.as_str()) {
        risk_flags.push(FLAG_WEATHER.to_string());
    }
    if matches!(arrival.weekday(), Weekday::Sat | Weekday::Sun) {
        risk_flags.push(FLAG_WEEKEND.to_string());
    }

    info!(
        city = %airport.city,
        airport = %airport.code,
        flags = risk_flags.len(),
        "arrival context resolved"
    );

    log.record(
        Stage::CityContext,
        Some(airport.code.clone()),
        Outcome::Accept,
        None,
        vec![format!(
            "arrival resolved to {} ({}) at {}",
            airport.city, airport.code, arrival
        )],
        Some(json!({
            "city": airport.city,
            "airport": airport.code,
            "risk_flags": risk_flags,
            "curfew": curfew,
        })),
    );

    Ok(CityProfile {
        city: airport.city,
        airport_code: airport.code,
        airport_name: airport.name,
        latitude: airport.latitude,
        longitude: airport.longitude,
        arrival_time: arrival,
        risk_flags,
        curfew,
    })
}
