use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde_json::json;
use tracing::debug;

use super::super::context::{DecisionLog, DistanceCache};
use super::super::domain::{CityProfile, HotelCandidate, Outcome, Stage};
use super::city::FLAG_HIGH_TRAFFIC;

const EARTH_RADIUS_KM: f64 = 6371.0;

const BASE_SPEED_KMH: f64 = 30.0;
const RUSH_HOUR_SPEED_KMH: f64 = 20.0;
const LATE_NIGHT_SPEED_KMH: f64 = 45.0;
const WEEKEND_MULTIPLIER: f64 = 1.2;

pub const NOTE_LONG_DISTANCE: &str = "Long distance from airport";
pub const NOTE_EXTENDED_TRAVEL: &str = "Extended travel time";
pub const NOTE_LATE_ARRIVAL: &str = "Late arrival - consider closer options";
pub const NOTE_TRAFFIC: &str = "Traffic delays possible";

/// Annotate every candidate with great-circle distance and a deterministic
/// travel-time estimate, then order the list closest-first as the default
/// baseline.
pub(crate) fn annotate(
    city: &CityProfile,
    candidates: Vec<HotelCandidate>,
    cache: &DistanceCache,
    log: &DecisionLog,
) -> Vec<HotelCandidate> {
    let speed = speed_kmh(&city.arrival_time);

    let mut annotated: Vec<HotelCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let distance = cache.get_or_compute(&city.airport_code, &candidate.hotel_id.0, || {
                round_one_decimal(haversine_km(
                    city.latitude,
                    city.longitude,
                    candidate.latitude,
                    candidate.longitude,
                ))
            });
            let minutes = (distance / speed * 60.0).round() as u32;

            let mut candidate = HotelCandidate {
                distance_km: Some(distance),
                eta_minutes: Some(minutes),
                ..candidate
            };

            if distance > 20.0 {
                candidate = candidate.with_note(NOTE_LONG_DISTANCE);
            }
            if minutes > 45 {
                candidate = candidate.with_note(NOTE_EXTENDED_TRAVEL);
            }
            if city.curfew && minutes > 30 {
                candidate = candidate.with_note(NOTE_LATE_ARRIVAL);
            }
            if city.has_risk_flag(FLAG_HIGH_TRAFFIC) {
                candidate = candidate.with_note(NOTE_TRAFFIC);
            }

            log.record(
                Stage::GeoDistance,
                Some(candidate.hotel_id.0.clone()),
                Outcome::Score,
                Some(f64::from(minutes)),
                vec![format!("{distance:.1} km from airport, ~{minutes} min")],
                Some(json!({ "distance_km": distance, "eta_minutes": minutes })),
            );

            candidate
        })
        .collect();

    annotated.sort_by_key(|candidate| candidate.eta_minutes.unwrap_or(u32::MAX));

    let count = annotated.len();
    let (avg_distance, avg_eta) = averages(&annotated);
    debug!(
        airport = %city.airport_code,
        count,
        avg_distance,
        avg_eta,
        "distance annotation complete"
    );

    log.record(
        Stage::GeoDistance,
        None,
        Outcome::Accept,
        None,
        vec![format!(
            "{count} candidate(s) measured from {} at {:.1} km / {:.0} min average",
            city.airport_name, avg_distance, avg_eta
        )],
        Some(json!({
            "airport": city.airport_name,
            "candidates": count,
            "avg_distance_km": avg_distance,
            "avg_eta_minutes": avg_eta,
        })),
    );

    annotated
}

/// Piecewise speed model: rush hour slows the commute, late night speeds it
/// up, weekends run lighter regardless of hour.
fn speed_kmh(arrival: &DateTime<Utc>) -> f64 {
    let hour = arrival.hour();
    let mut speed = if matches!(hour, 7..=9 | 16..=19) {
        RUSH_HOUR_SPEED_KMH
    } else if matches!(hour, 22..=23 | 0..=6) {
        LATE_NIGHT_SPEED_KMH
    } else {
        BASE_SPEED_KMH
    };

    if matches!(arrival.weekday(), Weekday::Sat | Weekday::Sun) {
        speed *= WEEKEND_MULTIPLIER;
    }

    speed
}

/// Great-circle distance between two coordinates.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1 * PI / 180.0;
    let lat2_rad = lat2 * PI / 180.0;
    let dlat = (lat2 - lat1) * PI / 180.0;
    let dlon = (lon2 - lon1) * PI / 180.0;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn averages(candidates: &[HotelCandidate]) -> (f64, f64) {
    if candidates.is_empty() {
        return (0.0, 0.0);
    }
    let count = candidates.len() as f64;
    let distance: f64 = candidates
        .iter()
        .filter_map(|candidate| candidate.distance_km)
        .sum();
    let eta: f64 = candidates
        .iter()
        .filter_map(|candidate| candidate.eta_minutes.map(f64::from))
        .sum();
    (
        round_one_decimal(distance / count),
        (eta / count).round(),
    )
}
