use serde_json::json;
use tracing::{debug, warn};

use super::super::context::DecisionLog;
use super::super::domain::{Constraints, CrewPairing, Outcome, Stage};

/// Fatal validation failure for an inbound pairing. The orchestrator must not
/// run any later stage once this is raised.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("pairing {} failed validation: {}", .pairing_id, .reasons.join("; "))]
    InvalidPairing {
        pairing_id: String,
        reasons: Vec<String>,
    },
}

/// Validate pairing shape and leg continuity. Validation-only: the pairing
/// passes through unchanged on success.
pub(crate) fn validate(
    pairing: &CrewPairing,
    constraints: &Constraints,
    log: &DecisionLog,
) -> Result<(), IngestError> {
    let mut violations = Vec::new();

    if pairing.legs.is_empty() {
        violations.push("pairing has no flight legs".to_string());
    }
    if pairing.crew.is_empty() {
        violations.push("pairing has no crew members".to_string());
    }

    for (index, window) in pairing.legs.windows(2).enumerate() {
        let current = &window[0];
        let next = &window[1];

        if !current
            .arrival_airport
            .eq_ignore_ascii_case(&next.departure_airport)
        {
            violations.push(format!(
                "leg {} arrives at {} but leg {} departs from {}",
                index + 1,
                current.arrival_airport,
                index + 2,
                next.departure_airport
            ));
        }

        if next.departure_time <= current.arrival_time {
            violations.push(format!(
                "leg {} departs at {} before leg {} arrives at {}",
                index + 2,
                next.departure_time,
                index + 1,
                current.arrival_time
            ));
        }
    }

    if !violations.is_empty() {
        warn!(
            pairing = %pairing.pairing_id.0,
            violations = violations.len(),
            "rejecting malformed pairing"
        );
        log.record(
            Stage::FlightIngest,
            Some(pairing.pairing_id.0.clone()),
            Outcome::Reject,
            None,
            violations.clone(),
            None,
        );
        return Err(IngestError::InvalidPairing {
            pairing_id: pairing.pairing_id.0.clone(),
            reasons: violations,
        });
    }

    let duty_hours = pairing.duty_hours().unwrap_or(0.0);
    let mut reasons = vec![format!(
        "pairing validated: {} leg(s), {:.1} duty hour(s)",
        pairing.legs.len(),
        duty_hours
    )];

    // Advisory only; rest-rule legality is out of scope for this core.
    if duty_hours + constraints.min_rest_hours > 24.0 {
        reasons.push(format!(
            "duty stretch leaves less than {:.0}h rest inside a 24h cycle",
            constraints.min_rest_hours
        ));
    }

    debug!(pairing = %pairing.pairing_id.0, duty_hours, "pairing accepted");
    log.record(
        Stage::FlightIngest,
        Some(pairing.pairing_id.0.clone()),
        Outcome::Accept,
        None,
        reasons,
        Some(json!({
            "duty_hours": (duty_hours * 10.0).round() / 10.0,
            "crew_count": pairing.crew.len(),
            "crew_roles": pairing
                .crew
                .iter()
                .map(|member| member.role.label())
                .collect::<Vec<_>>(),
        })),
    );

    Ok(())
}
