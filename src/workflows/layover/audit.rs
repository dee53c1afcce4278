//! Decision-trail synthesis into a human-readable rationale.
//!
//! This stage never fails the pipeline: it only reads data produced upstream
//! and degrades to a minimal summary when there is nothing to explain.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::context::DecisionLog;
use super::domain::{CityProfile, Constraints, HotelCandidate, Outcome, Stage};

const NO_SELECTION: &str = "No hotel selected";

/// Full explainability view assembled from the run's decision trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub selection: String,
    pub rationale: String,
    pub evaluated_candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<AlternativesSummary>,
    pub compliance: ComplianceSummary,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Aggregate view of the non-selected candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativesSummary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rate: Option<f64>,
    pub average_rating: f32,
}

/// Pass/fail counts observed at the contract-compliance stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub passed: usize,
    pub rejected: usize,
}

pub(crate) fn synthesize(
    city: &CityProfile,
    candidates: &[HotelCandidate],
    chosen: Option<&HotelCandidate>,
    constraints: &Constraints,
    log: &DecisionLog,
) -> AuditSummary {
    let trail = log.snapshot();

    let mut compliance = ComplianceSummary::default();
    let mut final_score = None;
    for record in &trail {
        match (record.stage, record.outcome, record.subject.as_deref()) {
            (Stage::ContractCompliance, Outcome::Accept, Some(_)) => compliance.passed += 1,
            (Stage::ContractCompliance, Outcome::Reject, Some(_)) => compliance.rejected += 1,
            (Stage::ScheduleOptimizer, Outcome::Accept, Some(subject)) => {
                if chosen.is_some_and(|hotel| hotel.hotel_id.0 == subject) {
                    final_score = record.score;
                }
            }
            _ => {}
        }
    }

    let summary = match chosen {
        Some(hotel) => selected_summary(city, candidates, hotel, constraints, compliance, final_score),
        None => empty_summary(candidates.len(), compliance),
    };

    log.record(
        Stage::Audit,
        chosen.map(|hotel| hotel.hotel_id.0.clone()),
        Outcome::Accept,
        final_score,
        vec![summary.rationale.clone()],
        Some(json!({
            "selection": summary.selection,
            "risks": summary.risks.len(),
            "recommendations": summary.recommendations.len(),
        })),
    );

    summary
}

/// Minimal summary for the legitimate zero-viable-options terminal state.
fn empty_summary(evaluated: usize, compliance: ComplianceSummary) -> AuditSummary {
    AuditSummary {
        selection: NO_SELECTION.to_string(),
        rationale: format!(
            "No viable accommodation satisfied all contract constraints ({evaluated} candidate(s) remained after compliance)"
        ),
        evaluated_candidates: evaluated,
        alternatives: None,
        compliance,
        risks: Vec::new(),
        recommendations: vec![
            "Relax the most restrictive contract constraints and re-plan".to_string(),
            "Expand the search radius beyond the arrival metro".to_string(),
            "Escalate to the crew-accommodation desk for a contract exception".to_string(),
        ],
    }
}

fn selected_summary(
    city: &CityProfile,
    candidates: &[HotelCandidate],
    chosen: &HotelCandidate,
    constraints: &Constraints,
    compliance: ComplianceSummary,
    final_score: Option<f64>,
) -> AuditSummary {
    let mut factors = Vec::new();
    if chosen.eta_minutes.is_some_and(|eta| eta <= 20) {
        factors.push(format!(
            "{} min from the airport",
            chosen.eta_minutes.unwrap_or_default()
        ));
    }
    if chosen.rating >= 4.0 {
        factors.push(format!("{:.1} guest rating", chosen.rating));
    }
    if constraints.is_preferred_brand(&chosen.brand) {
        factors.push(format!("preferred partner brand ({})", chosen.brand));
    }
    if chosen
        .nightly_rate
        .is_some_and(|rate| rate <= constraints.max_nightly_usd)
    {
        factors.push("within the nightly budget".to_string());
    }
    if let Some(score) = final_score {
        factors.push(format!("final score {score:.1}"));
    }

    let rationale = if factors.is_empty() {
        format!("{} was the strongest available option", chosen.name)
    } else {
        format!("{} selected: {}", chosen.name, factors.join(", "))
    };

    let alternatives: Vec<&HotelCandidate> = candidates
        .iter()
        .filter(|candidate| candidate.hotel_id != chosen.hotel_id)
        .collect();
    let alternatives_summary = (!alternatives.is_empty()).then(|| {
        let count = alternatives.len();
        let rates: Vec<f64> = alternatives
            .iter()
            .filter_map(|candidate| candidate.nightly_rate)
            .collect();
        let average_rate = (!rates.is_empty())
            .then(|| (rates.iter().sum::<f64>() / rates.len() as f64 * 100.0).round() / 100.0);
        let average_rating = alternatives
            .iter()
            .map(|candidate| candidate.rating)
            .sum::<f32>()
            / count as f32;

        AlternativesSummary {
            count,
            average_rate,
            average_rating: (average_rating * 10.0).round() / 10.0,
        }
    });

    let mut risks = Vec::new();
    if chosen.eta_minutes.is_some_and(|eta| eta > 25) {
        risks.push("Commute exceeds 25 minutes; guard the rest window".to_string());
    }
    if chosen.rating < 4.0 {
        risks.push(format!(
            "Guest rating {:.1} is below the 4.0 comfort bar",
            chosen.rating
        ));
    }
    if chosen.review_count < 200 {
        risks.push(format!(
            "Only {} review(s); quality signal is thin",
            chosen.review_count
        ));
    }
    if city.curfew && !city.risk_flags.is_empty() {
        risks.push("Late arrival into a flagged metro; confirm front-desk coverage".to_string());
    }

    let mut recommendations =
        vec!["Verify 24h check-in and the airport shuttle schedule before booking".to_string()];
    if chosen
        .negotiation
        .as_ref()
        .zip(chosen.nightly_rate)
        .is_some_and(|(strategy, rate)| strategy.target_rate < rate)
    {
        recommendations
            .push("Open rate negotiation at the recommended target before confirming".to_string());
    }
    if !chosen.has_amenity("WiFi") {
        recommendations
            .push("WiFi is not listed; confirm connectivity for crew rest planning".to_string());
    }

    AuditSummary {
        selection: chosen.name.clone(),
        rationale,
        evaluated_candidates: candidates.len(),
        alternatives: alternatives_summary,
        compliance,
        risks,
        recommendations,
    }
}
