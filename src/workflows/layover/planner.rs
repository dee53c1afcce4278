use std::sync::Arc;

use tracing::info;

use super::audit;
use super::context::{DecisionLog, DecisionSink, DistanceCache};
use super::domain::{Constraints, CrewPairing, PlanResult};
use super::stages::{
    city, compliance, geo, ingest, negotiation, optimizer, preference, sourcing, CityContextError,
    IngestError, PreferenceWeights,
};
use crate::reference::{AirportDirectory, HotelDirectory};

/// Fatal planning failures. Everything past city resolution degrades to a
/// normal [`PlanResult`] with an empty candidate list instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    CityContext(#[from] CityContextError),
}

/// Orchestrator sequencing the nine decision stages for one arrival event.
///
/// Holds the read-only collaborators for a planning run: reference
/// directories, airline constraints, preference weights, and the shared
/// distance cache. Each `plan_layover` call owns its own decision log, so
/// separate pairings can be planned from separate threads.
pub struct LayoverPlanner {
    airports: Arc<dyn AirportDirectory>,
    hotels: Arc<dyn HotelDirectory>,
    constraints: Constraints,
    weights: PreferenceWeights,
    distance_cache: Arc<DistanceCache>,
    sink: Option<Arc<dyn DecisionSink>>,
}

impl LayoverPlanner {
    pub fn new(
        airports: Arc<dyn AirportDirectory>,
        hotels: Arc<dyn HotelDirectory>,
        constraints: Constraints,
    ) -> Self {
        Self {
            airports,
            hotels,
            constraints,
            weights: PreferenceWeights::default(),
            distance_cache: Arc::new(DistanceCache::new()),
            sink: None,
        }
    }

    /// Override the default brand/amenity weight tables.
    pub fn with_weights(mut self, weights: PreferenceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Share a distance cache across planners processing the same network.
    pub fn with_distance_cache(mut self, cache: Arc<DistanceCache>) -> Self {
        self.distance_cache = cache;
        self
    }

    /// Tee every decision record into an external sink as it is emitted, so a
    /// partial trail survives fatal aborts.
    pub fn with_decision_sink(mut self, sink: Arc<dyn DecisionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Plan accommodation for one pairing's final arrival.
    ///
    /// Fails only on malformed pairings or an unknown arrival airport; an
    /// empty compliant set is a successful result with `chosen` absent.
    pub fn plan_layover(&self, pairing: &CrewPairing) -> Result<PlanResult, PlanError> {
        let log = match &self.sink {
            Some(sink) => DecisionLog::with_sink(Arc::clone(sink)),
            None => DecisionLog::new(),
        };

        info!(pairing = %pairing.pairing_id.0, "planning layover accommodation");

        ingest::validate(pairing, &self.constraints, &log)?;
        let profile = city::resolve(pairing, self.airports.as_ref(), &log)?;

        let candidates = sourcing::source(&profile, self.hotels.as_ref(), &self.constraints, &log);
        let candidates = geo::annotate(&profile, candidates, &self.distance_cache, &log);
        let candidates = compliance::enforce(candidates, &self.constraints, &log);
        let candidates = preference::score(candidates, &self.weights, &log);
        let candidates = negotiation::annotate(candidates, &self.constraints, &log);
        let (candidates, chosen) = optimizer::select(candidates, &self.constraints, &log);

        let audit = audit::synthesize(&profile, &candidates, chosen.as_ref(), &self.constraints, &log);

        Ok(PlanResult {
            city: profile.city,
            arrival_airport: profile.airport_code,
            candidates,
            chosen,
            audit,
            decisions: log.into_records(),
        })
    }
}
