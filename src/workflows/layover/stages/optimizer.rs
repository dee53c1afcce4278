use serde_json::json;
use tracing::info;

use super::super::context::DecisionLog;
use super::super::defaults;
use super::super::domain::{Constraints, HotelCandidate, Outcome, Stage};

/// Adjacent totals closer than this are treated as a tie.
const TIE_EPSILON: f64 = 0.1;

const PREFERRED_BRAND_POINTS: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoreBreakdown {
    pub proximity: f64,
    pub rating: f64,
    pub cost: f64,
    pub brand: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.proximity + self.rating + self.cost + self.brand
    }
}

/// Rank the fully annotated candidates by weighted multi-factor score and pick
/// the top one. An empty input is the defined no-result terminal state, not an
/// error.
pub(crate) fn select(
    candidates: Vec<HotelCandidate>,
    constraints: &Constraints,
    log: &DecisionLog,
) -> (Vec<HotelCandidate>, Option<HotelCandidate>) {
    if candidates.is_empty() {
        log.record(
            Stage::ScheduleOptimizer,
            None,
            Outcome::Reject,
            None,
            vec!["No compliant hotels available".to_string()],
            None,
        );
        return (Vec::new(), None);
    }

    let mut scored: Vec<(HotelCandidate, ScoreBreakdown)> = candidates
        .into_iter()
        .map(|candidate| {
            let breakdown = score_candidate(&candidate, constraints);
            (candidate, breakdown)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total().total_cmp(&a.1.total()));
    break_ties(&mut scored);

    for (rank, (candidate, breakdown)) in scored.iter().enumerate() {
        log.record(
            Stage::ScheduleOptimizer,
            Some(candidate.hotel_id.0.clone()),
            Outcome::Score,
            Some(breakdown.total()),
            vec![format!(
                "rank {}: proximity {:.0}, rating {:.0}, cost {:.1}, brand {:.0}",
                rank + 1,
                breakdown.proximity,
                breakdown.rating,
                breakdown.cost,
                breakdown.brand
            )],
            Some(json!({
                "rank": rank + 1,
                "proximity_score": breakdown.proximity,
                "rating_score": breakdown.rating,
                "cost_score": breakdown.cost,
                "brand_score": breakdown.brand,
                "total_score": breakdown.total(),
            })),
        );
    }

    let chosen = scored.first().map(|(candidate, _)| candidate.clone());
    if let Some((candidate, breakdown)) = scored.first() {
        info!(
            hotel = %candidate.name,
            score = breakdown.total(),
            "layover hotel selected"
        );
        log.record(
            Stage::ScheduleOptimizer,
            Some(candidate.hotel_id.0.clone()),
            Outcome::Accept,
            Some(breakdown.total()),
            vec![format!(
                "selected {} with total score {:.1}",
                candidate.name,
                breakdown.total()
            )],
            None,
        );
    }

    let ranked = scored.into_iter().map(|(candidate, _)| candidate).collect();
    (ranked, chosen)
}

fn score_candidate(candidate: &HotelCandidate, constraints: &Constraints) -> ScoreBreakdown {
    let eta = f64::from(defaults::eta_or_default(candidate.eta_minutes));
    let nightly = defaults::nightly_or_default(candidate.nightly_rate);

    ScoreBreakdown {
        proximity: (100.0 - eta).max(0.0),
        rating: f64::from(candidate.rating) * 10.0,
        cost: -(nightly / 10.0),
        brand: if constraints.is_preferred_brand(&candidate.brand) {
            PREFERRED_BRAND_POINTS
        } else {
            0.0
        },
    }
}

/// Single adjacent-pair bubble pass over the score-sorted list. Near-equal
/// neighbors prefer more reviews, then the lower nightly rate. A three-way
/// near-tie cluster may stay partially unresolved; this matches the
/// long-standing ranking behavior downstream consumers expect.
fn break_ties(scored: &mut [(HotelCandidate, ScoreBreakdown)]) {
    for index in 0..scored.len().saturating_sub(1) {
        let left_total = scored[index].1.total();
        let right_total = scored[index + 1].1.total();
        if (left_total - right_total).abs() >= TIE_EPSILON {
            continue;
        }

        let left = &scored[index].0;
        let right = &scored[index + 1].0;

        let prefer_right = match right.review_count.cmp(&left.review_count) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => {
                defaults::nightly_or_default(right.nightly_rate)
                    < defaults::nightly_or_default(left.nightly_rate)
            }
            std::cmp::Ordering::Less => false,
        };

        if prefer_right {
            scored.swap(index, index + 1);
        }
    }
}
