use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::super::context::DecisionLog;
use super::super::domain::{HotelCandidate, Outcome, Stage};

/// Injected brand/amenity weight tables, replacing the hard-coded constants
/// the original carried, so airlines can tune soft preferences without code
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceWeights {
    pub brand_weights: BTreeMap<String, f64>,
    pub amenity_weights: BTreeMap<String, f64>,
    /// Applied to brands missing from the table.
    pub fallback_brand_weight: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        let brand_weights = BTreeMap::from([
            ("Hyatt".to_string(), 9.0),
            ("Hilton".to_string(), 8.0),
            ("Marriott".to_string(), 7.0),
            ("Sheraton".to_string(), 6.0),
            ("Independent".to_string(), 3.0),
        ]);
        let amenity_weights = BTreeMap::from([
            ("Airport Shuttle".to_string(), 10.0),
            ("WiFi".to_string(), 8.0),
            ("Business Center".to_string(), 7.0),
            ("Restaurant".to_string(), 6.0),
            ("Fitness Center".to_string(), 5.0),
            ("Pool".to_string(), 4.0),
        ]);

        Self {
            brand_weights,
            amenity_weights,
            fallback_brand_weight: 3.0,
        }
    }
}

impl PreferenceWeights {
    pub fn brand_weight(&self, brand: &str) -> f64 {
        self.brand_weights
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(brand))
            .map(|(_, weight)| *weight)
            .unwrap_or(self.fallback_brand_weight)
    }

    pub fn amenity_weight(&self, amenity: &str) -> f64 {
        self.amenity_weights
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(amenity))
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }
}

/// Soft-score candidates by brand and amenity weights. Never filters; the
/// returned ordering is advisory only.
pub(crate) fn score(
    candidates: Vec<HotelCandidate>,
    weights: &PreferenceWeights,
    log: &DecisionLog,
) -> Vec<HotelCandidate> {
    let mut scored: Vec<HotelCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let brand_weight = weights.brand_weight(&candidate.brand);
            let amenity_total: f64 = candidate
                .amenities
                .iter()
                .map(|amenity| weights.amenity_weight(amenity))
                .sum();
            let preference = brand_weight + 0.1 * amenity_total;

            log.record(
                Stage::Preference,
                Some(candidate.hotel_id.0.clone()),
                Outcome::Score,
                Some(preference),
                vec![format!(
                    "brand weight {brand_weight:.0}, amenity contribution {:.1}",
                    0.1 * amenity_total
                )],
                Some(json!({
                    "brand": candidate.brand,
                    "brand_weight": brand_weight,
                    "amenity_total": amenity_total,
                })),
            );

            HotelCandidate {
                preference_score: Some(preference),
                ..candidate
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.preference_score
            .unwrap_or(0.0)
            .total_cmp(&a.preference_score.unwrap_or(0.0))
    });

    debug!(count = scored.len(), "preference scoring complete");

    log.record(
        Stage::Preference,
        None,
        Outcome::Accept,
        None,
        vec![format!("{} candidate(s) preference-scored", scored.len())],
        None,
    );

    scored
}
