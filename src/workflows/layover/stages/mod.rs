//! The nine stateless decision stages, invoked in fixed order by the planner.
//!
//! Each stage consumes the previous stage's output, appends its batch of
//! decision records, and returns a new collection; none of them hold state
//! between runs.

pub(crate) mod city;
pub(crate) mod compliance;
pub(crate) mod geo;
pub(crate) mod ingest;
pub(crate) mod negotiation;
pub(crate) mod optimizer;
pub(crate) mod preference;
pub(crate) mod sourcing;

pub use city::CityContextError;
pub use geo::haversine_km;
pub use ingest::IngestError;
pub use preference::PreferenceWeights;
