use serde_json::json;
use tracing::debug;

use super::super::context::DecisionLog;
use super::super::domain::{CityProfile, Constraints, HotelCandidate, HotelId, Outcome, Stage};
use crate::reference::{HotelDirectory, HotelRecord};

/// Transient ordering bonus for preferred brands. Used only to pre-sort the
/// sourced list; authoritative ranking happens in the schedule optimizer.
const PREFERRED_BRAND_BONUS: f64 = 5.0;

/// Produce the initial candidate set for the resolved city, pre-screened by
/// every constraint that needs no distance data.
pub(crate) fn source(
    city: &CityProfile,
    hotels: &dyn HotelDirectory,
    constraints: &Constraints,
    log: &DecisionLog,
) -> Vec<HotelCandidate> {
    let matches = hotels.find_in_city(&city.city, &city.airport_code);
    let found = matches.len();

    let mut candidates = Vec::new();
    for record in matches {
        match prescreen(&record, constraints) {
            Some(violation) => {
                log.record(
                    Stage::HotelSourcing,
                    Some(record.hotel_id.clone()),
                    Outcome::Reject,
                    None,
                    vec![violation],
                    None,
                );
            }
            None => {
                log.record(
                    Stage::HotelSourcing,
                    Some(record.hotel_id.clone()),
                    Outcome::Accept,
                    None,
                    vec![format!("{} passed pre-screen", record.name)],
                    None,
                );
                candidates.push(into_candidate(record));
            }
        }
    }

    candidates.sort_by(|a, b| {
        presort_key(b, constraints).total_cmp(&presort_key(a, constraints))
    });

    debug!(
        city = %city.city,
        found,
        passed = candidates.len(),
        "hotel sourcing complete"
    );

    log.record(
        Stage::HotelSourcing,
        None,
        Outcome::Score,
        Some(candidates.len() as f64),
        vec![format!(
            "{} hotel(s) matched {}, {} passed pre-screen",
            found,
            city.city,
            candidates.len()
        )],
        Some(json!({ "found": found, "passed": candidates.len() })),
    );

    candidates
}

fn prescreen(record: &HotelRecord, constraints: &Constraints) -> Option<String> {
    if record.rating < constraints.min_hotel_rating {
        return Some(format!(
            "rating {:.1} below minimum {:.1}",
            record.rating, constraints.min_hotel_rating
        ));
    }
    if record.review_count < constraints.min_reviews {
        return Some(format!(
            "{} review(s) below minimum {}",
            record.review_count, constraints.min_reviews
        ));
    }
    if constraints.is_blacklisted(&HotelId(record.hotel_id.clone())) {
        return Some("hotel is blacklisted by the airline contract".to_string());
    }
    if let Some(rate) = record.nightly_rate {
        if rate > constraints.max_nightly_usd {
            return Some(format!(
                "nightly rate {rate:.0} exceeds maximum {:.0}",
                constraints.max_nightly_usd
            ));
        }
    }
    None
}

fn presort_key(candidate: &HotelCandidate, constraints: &Constraints) -> f64 {
    let bonus = if constraints.is_preferred_brand(&candidate.brand) {
        PREFERRED_BRAND_BONUS
    } else {
        0.0
    };
    bonus + f64::from(candidate.rating) * 10.0
}

fn into_candidate(record: HotelRecord) -> HotelCandidate {
    HotelCandidate {
        hotel_id: HotelId(record.hotel_id),
        name: record.name,
        brand: record.brand,
        address: record.address,
        latitude: record.latitude,
        longitude: record.longitude,
        rating: record.rating,
        review_count: record.review_count,
        amenities: record.amenities,
        nightly_rate: record.nightly_rate,
        taxes_and_fees: record.taxes_and_fees,
        distance_km: None,
        eta_minutes: None,
        notes: Vec::new(),
        preference_score: None,
        negotiation: None,
    }
}
