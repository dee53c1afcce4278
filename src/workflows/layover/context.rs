use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use super::domain::{DecisionRecord, Outcome, Stage};

/// Injected callback receiving every decision record as it is emitted. The
/// core makes no assumption about where records end up (memory, database,
/// log stream).
pub trait DecisionSink: Send + Sync {
    fn push(&self, record: DecisionRecord);
}

/// Append-only audit trail owned by a single planning run.
///
/// Stamps each record with a strictly increasing sequence number so the trail
/// stays a totally ordered account even if stages are later reworked to emit
/// from multiple call sites. Optionally tees every record into an external
/// [`DecisionSink`] so partial trails survive fatal aborts.
pub struct DecisionLog {
    seq: AtomicU64,
    records: Mutex<Vec<DecisionRecord>>,
    sink: Option<Arc<dyn DecisionSink>>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self {
            seq: AtomicU64::new(0),
            records: Mutex::new(Vec::new()),
            sink: None,
        }
    }

    pub fn with_sink(sink: Arc<dyn DecisionSink>) -> Self {
        Self {
            seq: AtomicU64::new(0),
            records: Mutex::new(Vec::new()),
            sink: Some(sink),
        }
    }

    /// Append one record, assigning the next logical-clock value.
    pub fn record(
        &self,
        stage: Stage,
        subject: Option<String>,
        outcome: Outcome,
        score: Option<f64>,
        reasons: Vec<String>,
        detail: Option<serde_json::Value>,
    ) {
        let record = DecisionRecord {
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            stage,
            subject,
            outcome,
            score,
            reasons,
            detail,
        };

        if let Some(sink) = &self.sink {
            sink.push(record.clone());
        }

        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone of the trail so far; used by the audit stage to synthesize the
    /// rationale from earlier stages' outcomes.
    pub fn snapshot(&self) -> Vec<DecisionRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn into_records(self) -> Vec<DecisionRecord> {
        self.records.into_inner().unwrap_or_default()
    }
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSink for DecisionLog {
    fn push(&self, record: DecisionRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

/// Shared cache of great-circle distances keyed by `(airport_code, hotel_id)`.
///
/// The only mutable state shared between concurrent planning runs. Reads are
/// concurrent; a racing write recomputes the same deterministic value, so
/// duplicate computation is possible but corruption is not.
pub struct DistanceCache {
    inner: RwLock<HashMap<(String, String), f64>>,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, airport_code: &str, hotel_id: &str) -> Option<f64> {
        let guard = self.inner.read().ok()?;
        guard
            .get(&(airport_code.to_string(), hotel_id.to_string()))
            .copied()
    }

    /// Fetch the cached distance or compute and store it.
    pub fn get_or_compute<F>(&self, airport_code: &str, hotel_id: &str, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(distance) = self.get(airport_code, hotel_id) {
            return distance;
        }

        let distance = compute();
        if let Ok(mut guard) = self.inner.write() {
            guard
                .entry((airport_code.to_string(), hotel_id.to_string()))
                .or_insert(distance);
        }
        distance
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DistanceCache {
    fn default() -> Self {
        Self::new()
    }
}
