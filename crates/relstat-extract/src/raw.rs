use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry in the task-graph provider's snapshot.
///
/// Required fields are modeled as `Option` so a missing one surfaces as
/// a `MissingField` error naming the task, not a bare deserialization
/// failure for the whole snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct RawTask {
    pub taskid: String,
    pub name: Option<String>,
    #[serde(rename = "workerType")]
    pub worker_type: Option<String>,
    pub scheduled: Option<DateTime<Utc>>,
    pub started: Option<DateTime<Utc>>,
    pub resolved: Option<DateTime<Utc>>,
    /// Provider's terminal-resolution flag. Absent means "derive from
    /// started/resolved both present".
    pub completed: Option<bool>,
}

impl RawTask {
    pub fn is_completed(&self) -> bool {
        self.completed
            .unwrap_or(self.started.is_some() && self.resolved.is_some())
    }
}
