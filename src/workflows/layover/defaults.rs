//! Missing-data policy shared by every stage.
//!
//! Candidates can reach the optimizer without an ETA or rate when upstream
//! reference data is sparse. All fallbacks live here so no two stages disagree
//! about what "missing" means.

/// ETA assumed for a candidate the geo stage could not annotate, in minutes.
/// Pessimistic on purpose: an unknown commute should never outrank a known one.
pub(crate) const ETA_MINUTES: u32 = 100;

/// Nightly rate assumed when a hotel record carries no rate.
pub(crate) const NIGHTLY_USD: f64 = 200.0;

pub(crate) fn eta_or_default(eta: Option<u32>) -> u32 {
    eta.unwrap_or(ETA_MINUTES)
}

pub(crate) fn nightly_or_default(rate: Option<f64>) -> f64 {
    rate.unwrap_or(NIGHTLY_USD)
}
