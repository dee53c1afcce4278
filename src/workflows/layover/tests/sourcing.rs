use super::common::*;
use crate::reference::{HotelDirectory, InMemoryHotels};
use crate::workflows::layover::context::DecisionLog;
use crate::workflows::layover::domain::{HotelId, Outcome, Stage};
use crate::workflows::layover::stages::sourcing;

fn directory() -> InMemoryHotels {
    let mut shuttle_inn = hotel_record("htl-1", "SEA Shuttle Inn");
    shuttle_inn.rating = 4.1;

    let mut hilton = hotel_record("htl-2", "Hilton Seattle Airport");
    hilton.brand = "Hilton".to_string();
    hilton.rating = 4.3;

    let mut low_rated = hotel_record("htl-3", "Seattle Budget Stay");
    low_rated.rating = 2.9;

    let mut pricey = hotel_record("htl-4", "Seattle Grand Towers");
    pricey.nightly_rate = Some(410.0);

    let mut elsewhere = hotel_record("htl-5", "Portland City Center");
    elsewhere.address = "1401 SW Naito Pkwy, Portland".to_string();

    InMemoryHotels::new(vec![shuttle_inn, hilton, low_rated, pricey, elsewhere])
}

#[test]
fn matches_city_name_or_airport_code() {
    let hotels = directory();
    let matches = hotels.find_in_city("Seattle", "SEA");

    let ids: Vec<&str> = matches.iter().map(|record| record.hotel_id.as_str()).collect();
    assert!(ids.contains(&"htl-1"), "airport-code match in the name");
    assert!(ids.contains(&"htl-2"), "city match in the name");
    assert!(!ids.contains(&"htl-5"), "other metros stay out");
}

#[test]
fn prescreens_rating_and_rate_violations() {
    let log = DecisionLog::new();
    let candidates = sourcing::source(&sea_profile(), &directory(), &constraints(), &log);

    let ids: Vec<&str> = candidates
        .iter()
        .map(|candidate| candidate.hotel_id.0.as_str())
        .collect();
    assert!(!ids.contains(&"htl-3"), "low rating is screened out");
    assert!(!ids.contains(&"htl-4"), "over-budget rate is screened out");
    assert!(ids.contains(&"htl-1"));
    assert!(ids.contains(&"htl-2"));

    let records = log.snapshot();
    let rejects: Vec<_> = records
        .iter()
        .filter(|record| record.outcome == Outcome::Reject)
        .collect();
    assert_eq!(rejects.len(), 2);
    assert!(rejects.iter().any(|record| {
        record.subject.as_deref() == Some("htl-3")
            && record.reasons[0].contains("rating 2.9 below minimum")
    }));
    assert!(rejects.iter().any(|record| {
        record.subject.as_deref() == Some("htl-4")
            && record.reasons[0].contains("exceeds maximum")
    }));
}

#[test]
fn blacklisted_hotels_are_screened_out() {
    let log = DecisionLog::new();
    let mut constraints = constraints();
    constraints
        .blacklist_hotels
        .insert(HotelId("htl-1".to_string()));

    let candidates = sourcing::source(&sea_profile(), &directory(), &constraints, &log);

    assert!(!candidates
        .iter()
        .any(|candidate| candidate.hotel_id.0 == "htl-1"));
    assert!(log.snapshot().iter().any(|record| {
        record.subject.as_deref() == Some("htl-1")
            && record.reasons[0].contains("blacklisted")
    }));
}

#[test]
fn preferred_brands_presort_ahead_of_peers() {
    let log = DecisionLog::new();
    let candidates = sourcing::source(&sea_profile(), &directory(), &constraints(), &log);

    // Hilton 4.3 with the +5 bonus (48.0) outranks the 4.1 independent (41.0).
    assert_eq!(candidates[0].hotel_id.0, "htl-2");
}

#[test]
fn summary_record_reports_found_versus_passed() {
    let log = DecisionLog::new();
    sourcing::source(&sea_profile(), &directory(), &constraints(), &log);

    let records = log.snapshot();
    let summary = records.last().expect("summary record exists");
    assert_eq!(summary.stage, Stage::HotelSourcing);
    assert_eq!(summary.outcome, Outcome::Score);
    let detail = summary.detail.as_ref().expect("summary detail");
    assert_eq!(detail["found"], 4);
    assert_eq!(detail["passed"], 2);
}

#[test]
fn empty_city_yields_empty_candidate_set() {
    let log = DecisionLog::new();
    let hotels = InMemoryHotels::default();

    let candidates = sourcing::source(&sea_profile(), &hotels, &constraints(), &log);

    assert!(candidates.is_empty());
    let records = log.snapshot();
    assert_eq!(records.len(), 1, "only the summary record");
    assert_eq!(records[0].outcome, Outcome::Score);
}
