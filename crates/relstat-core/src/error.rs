use thiserror::Error;

/// Errors are unrecoverable for the current invocation: each run is a
/// short one-shot batch over a fixed snapshot, so a retry would only
/// reproduce the same failure.
#[derive(Debug, Error)]
pub enum RelstatError {
    #[error("task {taskid}: missing required field `{field}`")]
    MissingField { taskid: String, field: &'static str },

    #[error("task {taskid}: {reason}")]
    InconsistentState { taskid: String, reason: String },

    #[error("no completed tasks in dataset; cannot define a sampling window")]
    EmptyWindow,
}
