use serde_json::json;
use tracing::info;

use super::super::context::DecisionLog;
use super::super::defaults;
use super::super::domain::{Constraints, HotelCandidate, Outcome, Stage};

/// Thresholds for the informative notes attached to passing candidates.
const HIGH_RATING: f32 = 4.5;
const EXCELLENT_PROXIMITY_MINUTES: u32 = 15;

/// Hard-filter candidates against the airline contract. The only stage
/// allowed to shrink the working set; input order is preserved for survivors.
pub(crate) fn enforce(
    candidates: Vec<HotelCandidate>,
    constraints: &Constraints,
    log: &DecisionLog,
) -> Vec<HotelCandidate> {
    let total = candidates.len();
    let mut passing = Vec::new();
    let mut rejected = 0usize;

    for candidate in candidates {
        let violations = collect_violations(&candidate, constraints);

        if violations.is_empty() {
            log.record(
                Stage::ContractCompliance,
                Some(candidate.hotel_id.0.clone()),
                Outcome::Accept,
                None,
                pass_notes(&candidate, constraints),
                None,
            );
            passing.push(candidate);
        } else {
            rejected += 1;
            log.record(
                Stage::ContractCompliance,
                Some(candidate.hotel_id.0.clone()),
                Outcome::Reject,
                None,
                violations,
                None,
            );
        }
    }

    info!(total, passed = passing.len(), rejected, "contract compliance applied");

    log.record(
        Stage::ContractCompliance,
        None,
        Outcome::Score,
        Some(passing.len() as f64),
        vec![format!(
            "{} of {total} candidate(s) satisfy the airline contract",
            passing.len()
        )],
        Some(json!({
            "passed": passing.len(),
            "rejected": rejected,
            "max_commute_minutes": constraints.max_commute_minutes,
            "min_hotel_rating": constraints.min_hotel_rating,
            "max_nightly_usd": constraints.max_nightly_usd,
            "min_reviews": constraints.min_reviews,
            "same_hotel_for_crew": constraints.same_hotel_for_crew,
        })),
    );

    passing
}

/// Every violated rule is collected, not just the first.
fn collect_violations(candidate: &HotelCandidate, constraints: &Constraints) -> Vec<String> {
    let mut violations = Vec::new();

    let eta = defaults::eta_or_default(candidate.eta_minutes);
    if eta > constraints.max_commute_minutes {
        violations.push(format!(
            "estimated commute {eta} min exceeds maximum {} min",
            constraints.max_commute_minutes
        ));
    }
    if candidate.rating < constraints.min_hotel_rating {
        violations.push(format!(
            "rating {:.1} below minimum {:.1}",
            candidate.rating, constraints.min_hotel_rating
        ));
    }
    if let Some(rate) = candidate.nightly_rate {
        if rate > constraints.max_nightly_usd {
            violations.push(format!(
                "nightly rate {rate:.0} exceeds maximum {:.0}",
                constraints.max_nightly_usd
            ));
        }
    }
    if candidate.review_count < constraints.min_reviews {
        violations.push(format!(
            "{} review(s) below minimum {}",
            candidate.review_count, constraints.min_reviews
        ));
    }
    if constraints.is_blacklisted(&candidate.hotel_id) {
        violations.push("hotel is blacklisted by the airline contract".to_string());
    }

    violations
}

fn pass_notes(candidate: &HotelCandidate, constraints: &Constraints) -> Vec<String> {
    let mut notes = vec!["all contract constraints satisfied".to_string()];

    if constraints.is_preferred_brand(&candidate.brand) {
        notes.push(format!("preferred brand match: {}", candidate.brand));
    }
    if candidate.rating >= HIGH_RATING {
        notes.push(format!("high guest rating: {:.1}", candidate.rating));
    }
    if candidate
        .eta_minutes
        .is_some_and(|eta| eta <= EXCELLENT_PROXIMITY_MINUTES)
    {
        notes.push("excellent proximity to the airport".to_string());
    }

    notes
}
