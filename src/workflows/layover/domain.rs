use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::audit::AuditSummary;

/// Identifier wrapper for crew duty pairings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairingId(pub String);

/// Identifier wrapper for hotel properties in the reference set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HotelId(pub String);

/// One scheduled flight segment inside a pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub carrier: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub equipment: String,
}

/// Crew positions tracked for accommodation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewRole {
    Captain,
    FirstOfficer,
    Purser,
    FlightAttendant,
}

impl CrewRole {
    pub const fn label(self) -> &'static str {
        match self {
            CrewRole::Captain => "captain",
            CrewRole::FirstOfficer => "first_officer",
            CrewRole::Purser => "purser",
            CrewRole::FlightAttendant => "flight_attendant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub role: CrewRole,
    pub seniority: u8,
}

/// A crew duty assignment: ordered legs plus the crew requiring accommodation.
///
/// Legs must be chronologically and geographically continuous; Flight Ingest
/// rejects pairings that violate this before any later stage runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewPairing {
    pub pairing_id: PairingId,
    pub legs: Vec<FlightLeg>,
    pub crew: Vec<CrewMember>,
}

impl CrewPairing {
    pub fn final_leg(&self) -> Option<&FlightLeg> {
        self.legs.last()
    }

    /// Total duty stretch from first departure to last arrival, in hours.
    pub fn duty_hours(&self) -> Option<f64> {
        let first = self.legs.first()?;
        let last = self.legs.last()?;
        let minutes = (last.arrival_time - first.departure_time).num_minutes();
        Some(minutes as f64 / 60.0)
    }
}

/// Arrival-city context resolved once per pairing from the final leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityProfile {
    pub city: String,
    pub airport_code: String,
    pub airport_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub arrival_time: DateTime<Utc>,
    pub risk_flags: Vec<String>,
    pub curfew: bool,
}

impl CityProfile {
    pub fn has_risk_flag(&self, flag: &str) -> bool {
        self.risk_flags.iter().any(|entry| entry == flag)
    }
}

/// Rate-negotiation guidance attached to a candidate; advisory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationStrategy {
    pub target_rate: f64,
    pub max_acceptable_rate: f64,
    pub talking_points: Vec<String>,
    pub confidence: NegotiationConfidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegotiationConfidence {
    Low,
    Medium,
    High,
}

impl NegotiationConfidence {
    pub const fn label(self) -> &'static str {
        match self {
            NegotiationConfidence::Low => "low",
            NegotiationConfidence::Medium => "medium",
            NegotiationConfidence::High => "high",
        }
    }
}

/// A hotel under evaluation, progressively annotated as it moves through the
/// pipeline. Stages return new annotated copies; only Contract Compliance may
/// drop a candidate from the working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelCandidate {
    pub hotel_id: HotelId,
    pub name: String,
    pub brand: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f32,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub nightly_rate: Option<f64>,
    pub taxes_and_fees: Option<f64>,
    pub distance_km: Option<f64>,
    pub eta_minutes: Option<u32>,
    pub notes: Vec<String>,
    pub preference_score: Option<f64>,
    pub negotiation: Option<NegotiationStrategy>,
}

impl HotelCandidate {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(amenity))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Per-airline contract constraints; loaded once per planning run, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub max_commute_minutes: u32,
    pub min_hotel_rating: f32,
    pub max_nightly_usd: f64,
    pub min_reviews: u32,
    pub preferred_brands: Vec<String>,
    pub blacklist_hotels: BTreeSet<HotelId>,
    pub min_rest_hours: f64,
    pub same_hotel_for_crew: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_commute_minutes: 45,
            min_hotel_rating: 3.5,
            max_nightly_usd: 250.0,
            min_reviews: 100,
            preferred_brands: vec![
                "Hilton".to_string(),
                "Marriott".to_string(),
                "Hyatt".to_string(),
            ],
            blacklist_hotels: BTreeSet::new(),
            min_rest_hours: 10.0,
            same_hotel_for_crew: true,
        }
    }
}

impl Constraints {
    pub fn is_preferred_brand(&self, brand: &str) -> bool {
        self.preferred_brands
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(brand))
    }

    pub fn is_blacklisted(&self, hotel_id: &HotelId) -> bool {
        self.blacklist_hotels.contains(hotel_id)
    }
}

/// Pipeline stages as they appear in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    FlightIngest,
    CityContext,
    HotelSourcing,
    GeoDistance,
    ContractCompliance,
    Preference,
    RateNegotiation,
    ScheduleOptimizer,
    Audit,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::FlightIngest => "flight_ingest",
            Stage::CityContext => "city_context",
            Stage::HotelSourcing => "hotel_sourcing",
            Stage::GeoDistance => "geo_distance",
            Stage::ContractCompliance => "contract_compliance",
            Stage::Preference => "preference",
            Stage::RateNegotiation => "rate_negotiation",
            Stage::ScheduleOptimizer => "schedule_optimizer",
            Stage::Audit => "audit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Accept,
    Reject,
    Score,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Accept => "accept",
            Outcome::Reject => "reject",
            Outcome::Score => "score",
        }
    }
}

/// One immutable audit-trail entry. `seq` is the run-local logical clock;
/// records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub seq: u64,
    pub stage: Stage,
    pub subject: Option<String>,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

/// Terminal output of one orchestrator run. `chosen` absent means no
/// compliant option existed; callers must check rather than expect an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub city: String,
    pub arrival_airport: String,
    pub candidates: Vec<HotelCandidate>,
    pub chosen: Option<HotelCandidate>,
    pub audit: AuditSummary,
    pub decisions: Vec<DecisionRecord>,
}
