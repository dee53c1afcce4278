//! Multi-stage accommodation-selection pipeline for crew layovers.
//!
//! One [`LayoverPlanner::plan_layover`] call runs the fixed stage sequence
//! Ingest → CityContext → Sourcing → Geo → Compliance → Preference →
//! Negotiation → Optimizer → Audit, threading an append-only decision log
//! through every stage so the final [`PlanResult`] carries a complete,
//! ordered account of what happened.

mod audit;
pub mod context;
mod defaults;
pub mod domain;
mod planner;
pub mod stages;

#[cfg(test)]
mod tests;

pub use audit::{AlternativesSummary, AuditSummary, ComplianceSummary};
pub use context::{DecisionLog, DecisionSink, DistanceCache};
pub use domain::{
    CityProfile, Constraints, CrewMember, CrewPairing, CrewRole, DecisionRecord, FlightLeg,
    HotelCandidate, HotelId, NegotiationConfidence, NegotiationStrategy, Outcome, PairingId,
    PlanResult, Stage,
};
pub use planner::{LayoverPlanner, PlanError};
pub use stages::{haversine_km, CityContextError, IngestError, PreferenceWeights};
