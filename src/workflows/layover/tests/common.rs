use chrono::{DateTime, TimeZone, Utc};

use crate::reference::HotelRecord;
use crate::workflows::layover::domain::{
    CityProfile, Constraints, CrewMember, CrewPairing, CrewRole, FlightLeg, HotelCandidate,
    HotelId, PairingId,
};

pub(super) fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn leg(
    departure_airport: &str,
    arrival_airport: &str,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
) -> FlightLeg {
    FlightLeg {
        carrier: "CA".to_string(),
        flight_number: "CA123".to_string(),
        departure_airport: departure_airport.to_string(),
        arrival_airport: arrival_airport.to_string(),
        departure_time,
        arrival_time,
        equipment: "B738".to_string(),
    }
}

pub(super) fn crew() -> Vec<CrewMember> {
    vec![
        CrewMember {
            role: CrewRole::Captain,
            seniority: 12,
        },
        CrewMember {
            role: CrewRole::FirstOfficer,
            seniority: 5,
        },
        CrewMember {
            role: CrewRole::FlightAttendant,
            seniority: 3,
        },
    ]
}

/// Single-leg pairing arriving at SEA on a weekday at 12:00 UTC.
pub(super) fn sea_pairing() -> CrewPairing {
    CrewPairing {
        pairing_id: PairingId("PRG-1001".to_string()),
        legs: vec![leg(
            "DEN",
            "SEA",
            ts(2025, 3, 12, 9, 0),
            ts(2025, 3, 12, 12, 0),
        )],
        crew: crew(),
    }
}

/// SEA profile for a non-rush, non-weekend arrival with no curfew.
pub(super) fn sea_profile() -> CityProfile {
    CityProfile {
        city: "Seattle".to_string(),
        airport_code: "SEA".to_string(),
        airport_name: "Seattle-Tacoma International".to_string(),
        latitude: 47.4502,
        longitude: -122.3088,
        arrival_time: ts(2025, 3, 12, 12, 0),
        risk_flags: vec!["Weather-sensitive location".to_string()],
        curfew: false,
    }
}

pub(super) fn constraints() -> Constraints {
    Constraints::default()
}

/// Candidate with sane defaults; tests override individual fields.
pub(super) fn candidate(id: &str) -> HotelCandidate {
    HotelCandidate {
        hotel_id: HotelId(id.to_string()),
        name: format!("Hotel {id}"),
        brand: "Independent".to_string(),
        address: "18220 International Blvd, Seattle".to_string(),
        latitude: 47.4489,
        longitude: -122.3094,
        rating: 4.0,
        review_count: 500,
        amenities: vec!["WiFi".to_string()],
        nightly_rate: Some(150.0),
        taxes_and_fees: Some(22.5),
        distance_km: Some(0.2),
        eta_minutes: Some(10),
        notes: Vec::new(),
        preference_score: None,
        negotiation: None,
    }
}

pub(super) fn hotel_record(id: &str, name: &str) -> HotelRecord {
    HotelRecord {
        hotel_id: id.to_string(),
        name: name.to_string(),
        brand: "Independent".to_string(),
        address: "18220 International Blvd, Seattle".to_string(),
        latitude: 47.4489,
        longitude: -122.3094,
        rating: 4.0,
        review_count: 500,
        amenities: vec!["WiFi".to_string()],
        nightly_rate: Some(150.0),
        taxes_and_fees: Some(22.5),
    }
}
