use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::occupancy::TimeSample;

/// Chart-ready view of a timeline: per worker type, parallel
/// `(instant, count)` pairs for pending and for running. This is the
/// hand-off contract to the external charting consumer; rendering is
/// not our concern.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub pending: BTreeMap<String, Vec<(DateTime<Utc>, u32)>>,
    pub running: BTreeMap<String, Vec<(DateTime<Utc>, u32)>>,
}

pub fn to_chart_series(timeline: &[TimeSample]) -> ChartSeries {
    let mut series = ChartSeries::default();
    for sample in timeline {
        for (worker, count) in &sample.pending {
            series
                .pending
                .entry(worker.clone())
                .or_default()
                .push((sample.instant, *count));
        }
        for (worker, count) in &sample.running {
            series
                .running
                .entry(worker.clone())
                .or_default()
                .push((sample.instant, *count));
        }
    }
    series
}
