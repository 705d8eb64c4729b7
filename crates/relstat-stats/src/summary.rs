use std::collections::BTreeMap;

use relstat_core::{TaskRecord, TaskSet};

/// Five-number summary over a group's duration values, in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub p25: f64,
    pub p75: f64,
    pub min: f64,
    pub max: f64,
}

/// Which duration a grouping draws from. Only wait time is reported
/// today; elapsed time goes through the same machinery.
#[derive(Clone, Copy, Debug)]
pub enum Metric {
    WaitTime,
    Elapsed,
}

impl Metric {
    fn value(self, rec: &TaskRecord) -> Option<f64> {
        match self {
            Metric::WaitTime => rec.wait_time,
            Metric::Elapsed => rec.elapsed,
        }
    }
}

/// Group a duration metric by an arbitrary string key (category, worker
/// type). Only completed records contribute; a group nobody completed
/// in never appears as a key. BTreeMap keeps report order stable.
pub fn group_by(
    tasks: &TaskSet,
    metric: Metric,
    key: impl Fn(&TaskRecord) -> &str,
) -> BTreeMap<String, Vec<f64>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for rec in tasks.values() {
        if !rec.completed {
            continue;
        }
        if let Some(v) = metric.value(rec) {
            groups.entry(key(rec).to_string()).or_default().push(v);
        }
    }
    groups
}

/// Summarize one group. `None` for an empty group — absence of data
/// must not read as zero wait time.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(Summary {
        mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
        p25: percentile(&sorted, 25.0),
        p75: percentile(&sorted, 75.0),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Percentile with linear interpolation between order statistics,
/// matching numpy's default. `sorted` must be ascending and non-empty.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
