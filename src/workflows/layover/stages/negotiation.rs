use serde_json::json;
use tracing::debug;

use super::super::context::DecisionLog;
use super::super::domain::{
    Constraints, HotelCandidate, NegotiationConfidence, NegotiationStrategy, Outcome, Stage,
};

/// Corporate-partnership reduction applied to preferred brands.
const CORPORATE_RATE_FACTOR: f64 = 0.9;

/// Cap on what the airline should accept relative to the published rate.
const MAX_ACCEPTABLE_FACTOR: f64 = 0.95;

struct MarketStats {
    mean: f64,
    median: f64,
    max: f64,
}

/// Annotate each rated candidate with a target-rate recommendation relative
/// to market statistics. Never removes candidates.
pub(crate) fn annotate(
    candidates: Vec<HotelCandidate>,
    constraints: &Constraints,
    log: &DecisionLog,
) -> Vec<HotelCandidate> {
    let rates: Vec<f64> = candidates
        .iter()
        .filter_map(|candidate| candidate.nightly_rate)
        .collect();

    let Some(stats) = market_stats(&rates) else {
        log.record(
            Stage::RateNegotiation,
            None,
            Outcome::Accept,
            None,
            vec!["no rate data available; negotiation skipped".to_string()],
            None,
        );
        return candidates;
    };

    let mut total_savings = 0.0;
    let annotated: Vec<HotelCandidate> = candidates
        .into_iter()
        .map(|candidate| match candidate.nightly_rate {
            Some(rate) => {
                let strategy = build_strategy(rate, &candidate, constraints, &stats);
                total_savings += (rate - strategy.target_rate).max(0.0);

                log.record(
                    Stage::RateNegotiation,
                    Some(candidate.hotel_id.0.clone()),
                    Outcome::Score,
                    Some(strategy.target_rate),
                    vec![format!(
                        "current {rate:.0}, target {:.0}, confidence {}",
                        strategy.target_rate,
                        strategy.confidence.label()
                    )],
                    Some(json!({
                        "current_rate": rate,
                        "target_rate": strategy.target_rate,
                        "max_acceptable_rate": strategy.max_acceptable_rate,
                        "confidence": strategy.confidence.label(),
                    })),
                );

                HotelCandidate {
                    negotiation: Some(strategy),
                    ..candidate
                }
            }
            None => {
                log.record(
                    Stage::RateNegotiation,
                    Some(candidate.hotel_id.0.clone()),
                    Outcome::Score,
                    None,
                    vec!["no published rate; request a quote directly".to_string()],
                    None,
                );
                candidate
            }
        })
        .collect();

    debug!(
        candidates = annotated.len(),
        total_savings, "rate negotiation targets computed"
    );

    log.record(
        Stage::RateNegotiation,
        None,
        Outcome::Accept,
        None,
        vec![format!(
            "potential savings of {total_savings:.0} across {} candidate(s)",
            annotated.len()
        )],
        Some(json!({
            "total_potential_savings": round_cents(total_savings),
            "market_mean": round_cents(stats.mean),
            "market_median": round_cents(stats.median),
        })),
    );

    annotated
}

fn build_strategy(
    rate: f64,
    candidate: &HotelCandidate,
    constraints: &Constraints,
    stats: &MarketStats,
) -> NegotiationStrategy {
    let mut target = rate;
    let mut talking_points = Vec::new();

    if rate > 1.1 * stats.mean {
        target = stats.mean;
        talking_points.push("rate sits more than 10% above the market average".to_string());
    }
    if rate > 1.15 * stats.median {
        target = target.min(stats.median);
        talking_points.push("rate is well above the market median".to_string());
    }

    let preferred = constraints.is_preferred_brand(&candidate.brand);
    if preferred {
        target *= CORPORATE_RATE_FACTOR;
        talking_points.push("corporate partnership discount applies".to_string());
    }

    let holds_market_max = (rate - stats.max).abs() < f64::EPSILON;
    if holds_market_max {
        talking_points.push("highest-priced option in the market; strong leverage".to_string());
    }

    let confidence = if holds_market_max || rate > 1.1 * stats.mean {
        NegotiationConfidence::High
    } else if target < rate {
        NegotiationConfidence::Medium
    } else {
        NegotiationConfidence::Low
    };

    NegotiationStrategy {
        target_rate: round_cents(target),
        max_acceptable_rate: (rate * MAX_ACCEPTABLE_FACTOR).round(),
        talking_points,
        confidence,
    }
}

fn market_stats(rates: &[f64]) -> Option<MarketStats> {
    if rates.is_empty() {
        return None;
    }

    let mut sorted = rates.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Some(MarketStats {
        mean,
        median,
        max: sorted[sorted.len() - 1],
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
