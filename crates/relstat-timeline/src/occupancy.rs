use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use relstat_core::{RelstatError, TaskSet};
use tracing::debug;

use crate::window::{observation_window, sample_instants, SAMPLE_COUNT};

/// Per-worker pending and running counts at one sampled instant.
///
/// Every worker type observed anywhere in the dataset has an entry in
/// both maps at every sample, zero when idle, so all series align.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSample {
    pub instant: DateTime<Utc>,
    pub pending: BTreeMap<String, u32>,
    pub running: BTreeMap<String, u32>,
}

/// Build the occupancy timeline: [`SAMPLE_COUNT`] instants across the
/// observation window, each classifying every task (completed or not)
/// as pending, running, or neither. O(samples x tasks); fine at the
/// hundreds-to-thousands volumes this sees.
pub fn build_timeline(tasks: &TaskSet) -> Result<Vec<TimeSample>, RelstatError> {
    let (earliest, latest) = observation_window(tasks)?;
    let workers: Vec<&str> = {
        let mut w: Vec<&str> = tasks.values().map(|r| r.worker.as_str()).collect();
        w.sort_unstable();
        w.dedup();
        w
    };

    let mut samples = Vec::with_capacity(SAMPLE_COUNT);
    for instant in sample_instants(earliest, latest, SAMPLE_COUNT) {
        debug!(%instant, "sampling occupancy");
        let zeroed: BTreeMap<String, u32> =
            workers.iter().map(|w| (w.to_string(), 0)).collect();
        let mut pending = zeroed.clone();
        let mut running = zeroed;

        for rec in tasks.values() {
            if rec.pending_at(instant) {
                *pending.get_mut(&rec.worker).expect("worker preseeded") += 1;
            } else if rec.running_at(instant) {
                *running.get_mut(&rec.worker).expect("worker preseeded") += 1;
            }
        }

        samples.push(TimeSample { instant, pending, running });
    }
    Ok(samples)
}
