use relstat_core::{categorize, RelstatError, TaskRecord, TaskSet};

use crate::raw::RawTask;

/// Normalize a raw task-graph snapshot into a [`TaskSet`].
///
/// Pure construction: no aggregation happens here. Fails on the first
/// entry that lacks a required field or claims completion without both
/// lifecycle timestamps; no partial output is produced.
pub fn extract(entries: impl IntoIterator<Item = RawTask>) -> Result<TaskSet, RelstatError> {
    let mut tasks = TaskSet::new();

    for entry in entries {
        let taskid = entry.taskid.clone();
        let missing = |field| RelstatError::MissingField { taskid: taskid.clone(), field };

        let name = entry.name.as_deref().ok_or_else(|| missing("name"))?;
        let worker = entry.worker_type.clone().ok_or_else(|| missing("workerType"))?;
        let scheduled = entry.scheduled.ok_or_else(|| missing("scheduled"))?;

        let completed = entry.is_completed();
        let (wait_time, elapsed) = if completed {
            let started = entry.started.ok_or_else(|| RelstatError::InconsistentState {
                taskid: taskid.clone(),
                reason: "marked completed but has no started timestamp".to_string(),
            })?;
            let resolved = entry.resolved.ok_or_else(|| RelstatError::InconsistentState {
                taskid: taskid.clone(),
                reason: "marked completed but has no resolved timestamp".to_string(),
            })?;
            if started < scheduled || resolved < started {
                return Err(RelstatError::InconsistentState {
                    taskid,
                    reason: "lifecycle timestamps out of order (scheduled <= started <= resolved)"
                        .to_string(),
                });
            }
            (
                Some((started - scheduled).num_milliseconds() as f64 / 1000.0),
                Some((resolved - started).num_milliseconds() as f64 / 1000.0),
            )
        } else {
            (None, None)
        };

        tasks.insert(
            taskid,
            TaskRecord {
                category: categorize(name).to_string(),
                worker,
                scheduled,
                started: entry.started,
                resolved: entry.resolved,
                completed,
                wait_time,
                elapsed,
            },
        );
    }

    Ok(tasks)
}
