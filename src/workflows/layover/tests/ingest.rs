use super::common::*;
use crate::workflows::layover::context::DecisionLog;
use crate::workflows::layover::domain::{CrewPairing, Outcome, PairingId, Stage};
use crate::workflows::layover::stages::ingest;

#[test]
fn accepts_continuous_pairing_and_records_duty_hours() {
    let log = DecisionLog::new();
    let pairing = sea_pairing();

    ingest::validate(&pairing, &constraints(), &log).expect("valid pairing passes");

    let records = log.snapshot();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.stage, Stage::FlightIngest);
    assert_eq!(record.outcome, Outcome::Accept);
    assert_eq!(record.subject.as_deref(), Some("PRG-1001"));
    let detail = record.detail.as_ref().expect("accept carries detail");
    assert_eq!(detail["duty_hours"], 3.0);
    assert_eq!(detail["crew_count"], 3);
}

#[test]
fn rejects_empty_collections() {
    let log = DecisionLog::new();
    let pairing = CrewPairing {
        pairing_id: PairingId("PRG-EMPTY".to_string()),
        legs: Vec::new(),
        crew: Vec::new(),
    };

    let error = ingest::validate(&pairing, &constraints(), &log)
        .expect_err("empty pairing must be fatal");
    let message = error.to_string();
    assert!(message.contains("no flight legs"));
    assert!(message.contains("no crew members"));

    let records = log.snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].outcome, Outcome::Reject);
    assert_eq!(records[0].reasons.len(), 2);
}

#[test]
fn rejects_geographic_discontinuity() {
    let log = DecisionLog::new();
    let pairing = CrewPairing {
        pairing_id: PairingId("PRG-GAP".to_string()),
        legs: vec![
            leg("DEN", "ORD", ts(2025, 3, 12, 8, 0), ts(2025, 3, 12, 10, 0)),
            leg("ATL", "SEA", ts(2025, 3, 12, 12, 0), ts(2025, 3, 12, 16, 0)),
        ],
        crew: crew(),
    };

    let error = ingest::validate(&pairing, &constraints(), &log)
        .expect_err("airport gap must be fatal");
    assert!(error.to_string().contains("arrives at ORD"));
}

#[test]
fn rejects_departure_before_previous_arrival() {
    let log = DecisionLog::new();
    let pairing = CrewPairing {
        pairing_id: PairingId("PRG-TIME".to_string()),
        legs: vec![
            leg("DEN", "ORD", ts(2025, 3, 12, 8, 0), ts(2025, 3, 12, 10, 0)),
            leg("ORD", "SEA", ts(2025, 3, 12, 9, 30), ts(2025, 3, 12, 13, 0)),
        ],
        crew: crew(),
    };

    assert!(ingest::validate(&pairing, &constraints(), &log).is_err());
    let records = log.snapshot();
    assert!(records[0]
        .reasons
        .iter()
        .any(|reason| reason.contains("before leg 1 arrives")));
}

#[test]
fn collects_every_violation_not_just_the_first() {
    let log = DecisionLog::new();
    let pairing = CrewPairing {
        pairing_id: PairingId("PRG-MULTI".to_string()),
        legs: vec![
            leg("DEN", "ORD", ts(2025, 3, 12, 8, 0), ts(2025, 3, 12, 10, 0)),
            leg("ATL", "SEA", ts(2025, 3, 12, 9, 0), ts(2025, 3, 12, 13, 0)),
        ],
        crew: Vec::new(),
    };

    let error = ingest::validate(&pairing, &constraints(), &log)
        .expect_err("multiple violations must be fatal");
    let message = error.to_string();
    assert!(message.contains("no crew members"));
    assert!(message.contains("departs from ATL"));
    assert!(message.contains("before leg 1 arrives"));
}

#[test]
fn flags_tight_rest_window_as_advisory() {
    let log = DecisionLog::new();
    let pairing = CrewPairing {
        pairing_id: PairingId("PRG-LONG".to_string()),
        legs: vec![leg(
            "LHR",
            "SEA",
            ts(2025, 3, 12, 1, 0),
            ts(2025, 3, 12, 17, 0),
        )],
        crew: crew(),
    };

    ingest::validate(&pairing, &constraints(), &log).expect("advisory is non-fatal");

    let records = log.snapshot();
    assert_eq!(records[0].outcome, Outcome::Accept);
    assert!(records[0]
        .reasons
        .iter()
        .any(|reason| reason.contains("rest inside a 24h cycle")));
}
