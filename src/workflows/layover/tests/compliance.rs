use super::common::*;
use crate::workflows::layover::context::DecisionLog;
use crate::workflows::layover::domain::{HotelId, Outcome, Stage};
use crate::workflows::layover::stages::compliance;

#[test]
fn passing_candidates_survive_in_input_order() {
    let log = DecisionLog::new();
    let first = candidate("htl-1");
    let second = candidate("htl-2");

    let surviving = compliance::enforce(vec![first, second], &constraints(), &log);

    assert_eq!(surviving.len(), 2);
    assert_eq!(surviving[0].hotel_id.0, "htl-1");
    assert_eq!(surviving[1].hotel_id.0, "htl-2");
}

#[test]
fn every_violation_is_listed_on_the_reject_record() {
    let log = DecisionLog::new();
    let mut offender = candidate("htl-bad");
    offender.eta_minutes = Some(90);
    offender.rating = 2.0;
    offender.nightly_rate = Some(400.0);
    offender.review_count = 10;

    let surviving = compliance::enforce(vec![offender], &constraints(), &log);

    assert!(surviving.is_empty());
    let records = log.snapshot();
    let reject = records
        .iter()
        .find(|record| record.outcome == Outcome::Reject)
        .expect("reject record");
    assert_eq!(reject.reasons.len(), 4);
    assert!(reject.reasons.iter().any(|r| r.contains("commute")));
    assert!(reject.reasons.iter().any(|r| r.contains("rating")));
    assert!(reject.reasons.iter().any(|r| r.contains("nightly rate")));
    assert!(reject.reasons.iter().any(|r| r.contains("review")));
}

#[test]
fn blacklist_is_enforced_even_after_sourcing() {
    let log = DecisionLog::new();
    let mut constraints = constraints();
    constraints
        .blacklist_hotels
        .insert(HotelId("htl-1".to_string()));

    let surviving = compliance::enforce(vec![candidate("htl-1")], &constraints, &log);

    assert!(surviving.is_empty());
}

#[test]
fn missing_eta_falls_back_to_pessimistic_default() {
    let log = DecisionLog::new();
    let mut unknown_commute = candidate("htl-1");
    unknown_commute.eta_minutes = None;

    // Default ETA of 100 exceeds the 45-minute contract maximum.
    let surviving = compliance::enforce(vec![unknown_commute], &constraints(), &log);

    assert!(surviving.is_empty());
}

#[test]
fn pass_record_carries_informative_notes() {
    let log = DecisionLog::new();
    let mut strong = candidate("htl-1");
    strong.brand = "Hilton".to_string();
    strong.rating = 4.7;
    strong.eta_minutes = Some(8);

    compliance::enforce(vec![strong], &constraints(), &log);

    let records = log.snapshot();
    let accept = records
        .iter()
        .find(|record| record.outcome == Outcome::Accept)
        .expect("accept record");
    assert!(accept.reasons.iter().any(|r| r.contains("preferred brand")));
    assert!(accept.reasons.iter().any(|r| r.contains("high guest rating")));
    assert!(accept.reasons.iter().any(|r| r.contains("excellent proximity")));
}

#[test]
fn empty_input_yields_empty_output_without_error() {
    let log = DecisionLog::new();

    let surviving = compliance::enforce(Vec::new(), &constraints(), &log);

    assert!(surviving.is_empty());
    let records = log.snapshot();
    assert_eq!(records.len(), 1, "summary still recorded");
    assert_eq!(records[0].stage, Stage::ContractCompliance);
    assert_eq!(records[0].outcome, Outcome::Score);
    assert_eq!(records[0].score, Some(0.0));
}

#[test]
fn summary_reports_pass_fail_counts_and_constraint_values() {
    let log = DecisionLog::new();
    let mut offender = candidate("htl-bad");
    offender.rating = 1.0;

    compliance::enforce(vec![candidate("htl-1"), offender], &constraints(), &log);

    let records = log.snapshot();
    let summary = records.last().expect("summary record");
    let detail = summary.detail.as_ref().expect("summary detail");
    assert_eq!(detail["passed"], 1);
    assert_eq!(detail["rejected"], 1);
    assert_eq!(detail["max_commute_minutes"], 45);
    assert_eq!(detail["min_reviews"], 100);
}
