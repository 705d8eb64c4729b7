use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized per-task record, keyed by taskid in a [`TaskSet`].
///
/// `wait_time` and `elapsed` are `Some` iff `completed` is true; both
/// are float seconds. The serialized form is the file boundary between
/// extraction and the downstream pipelines, so field names are fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "type")]
    pub category: String,
    pub worker: String,
    pub scheduled: DateTime<Utc>,
    pub started: Option<DateTime<Utc>>,
    pub resolved: Option<DateTime<Utc>>,
    pub completed: bool,
    pub wait_time: Option<f64>,
    pub elapsed: Option<f64>,
}

/// One extraction run's output: a frozen snapshot, read-only input to
/// both the statistics and timeline pipelines.
pub type TaskSet = HashMap<String, TaskRecord>;

impl TaskRecord {
    /// Scheduled but not yet started as of `t`.
    pub fn pending_at(&self, t: DateTime<Utc>) -> bool {
        self.scheduled < t && self.started.map_or(true, |s| s > t)
    }

    /// Started but not yet resolved as of `t`.
    ///
    /// Mutually exclusive with [`pending_at`](Self::pending_at): pending
    /// requires `started` absent or future, running requires it present
    /// and past.
    pub fn running_at(&self, t: DateTime<Utc>) -> bool {
        match self.started {
            Some(s) => s < t && self.resolved.map_or(true, |r| r > t),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_600_000_000 + secs, 0).unwrap()
    }

    fn record(started: Option<i64>, resolved: Option<i64>) -> TaskRecord {
        TaskRecord {
            category: "balrog".to_string(),
            worker: "w1".to_string(),
            scheduled: ts(0),
            started: started.map(ts),
            resolved: resolved.map(ts),
            completed: started.is_some() && resolved.is_some(),
            wait_time: None,
            elapsed: None,
        }
    }

    #[test]
    fn pending_before_start_running_after() {
        let r = record(Some(10), Some(20));
        assert!(r.pending_at(ts(5)));
        assert!(!r.running_at(ts(5)));
        assert!(r.running_at(ts(15)));
        assert!(!r.pending_at(ts(15)));
        assert!(!r.pending_at(ts(25)));
        assert!(!r.running_at(ts(25)));
    }

    #[test]
    fn never_started_task_stays_pending() {
        let r = record(None, None);
        assert!(r.pending_at(ts(100)));
        assert!(!r.running_at(ts(100)));
    }

    #[test]
    fn unresolved_task_stays_running() {
        let r = record(Some(10), None);
        assert!(r.running_at(ts(10_000)));
        assert!(!r.pending_at(ts(10_000)));
    }

    #[test]
    fn never_pending_and_running_at_once() {
        let r = record(Some(10), Some(20));
        for s in 0..30 {
            let t = ts(s);
            assert!(!(r.pending_at(t) && r.running_at(t)));
        }
    }

    #[test]
    fn serialized_form_round_trips() {
        let r = TaskRecord {
            category: "balrog".to_string(),
            worker: "gecko-3-b-linux".to_string(),
            scheduled: ts(0),
            started: Some(ts(5)),
            resolved: Some(ts(15)),
            completed: true,
            wait_time: Some(5.0),
            elapsed: Some(10.0),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"type\":\"balrog\""));
        assert!(json.contains("\"worker\":\"gecko-3-b-linux\""));
        let back: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn incomplete_record_serializes_nulls() {
        let r = record(None, None);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"started\":null"));
        assert!(json.contains("\"wait_time\":null"));
        let back: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
