use chrono::{DateTime, Utc};
use relstat_core::{RelstatError, TaskSet};

/// Number of sample instants across the observation window.
pub const SAMPLE_COUNT: usize = 50;

/// Observation window: earliest scheduled to latest resolved time,
/// taken over completed records only.
pub fn observation_window(tasks: &TaskSet) -> Result<(DateTime<Utc>, DateTime<Utc>), RelstatError> {
    let completed = || tasks.values().filter(|r| r.completed);
    let earliest = completed().map(|r| r.scheduled).min().ok_or(RelstatError::EmptyWindow)?;
    let latest = completed()
        .filter_map(|r| r.resolved)
        .max()
        .ok_or(RelstatError::EmptyWindow)?;
    Ok((earliest, latest))
}

/// Exactly `count` evenly spaced instants: `start + k * interval` for
/// `k = 0..count`, where `interval = (end - start) / count`. The last
/// instant falls strictly before `end`. Generated by index rather than
/// repeated addition, so the sample count never drifts.
pub fn sample_instants(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    count: usize,
) -> Vec<DateTime<Utc>> {
    let interval = (end - start) / count as i32;
    (0..count as i32).map(|k| start + interval * k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use relstat_core::TaskRecord;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_600_000_000 + secs, 0).unwrap()
    }

    fn record(scheduled: i64, started: Option<i64>, resolved: Option<i64>) -> TaskRecord {
        let completed = started.is_some() && resolved.is_some();
        TaskRecord {
            category: String::new(),
            worker: "w1".to_string(),
            scheduled: ts(scheduled),
            started: started.map(ts),
            resolved: resolved.map(ts),
            completed,
            wait_time: None,
            elapsed: None,
        }
    }

    #[test]
    fn window_spans_completed_records_only() {
        let mut tasks = TaskSet::new();
        tasks.insert("a".into(), record(0, Some(5), Some(15)));
        tasks.insert("b".into(), record(2, Some(8), Some(20)));
        // Incomplete outlier must not widen the window.
        tasks.insert("c".into(), record(-100, None, None));

        let (earliest, latest) = observation_window(&tasks).unwrap();
        assert_eq!(earliest, ts(0));
        assert_eq!(latest, ts(20));
    }

    #[test]
    fn no_completed_tasks_is_an_error() {
        let mut tasks = TaskSet::new();
        tasks.insert("a".into(), record(0, Some(5), None));
        assert!(matches!(
            observation_window(&tasks),
            Err(RelstatError::EmptyWindow)
        ));
    }

    #[test]
    fn instants_are_evenly_spaced_and_end_exclusive() {
        let instants = sample_instants(ts(0), ts(500), 50);
        assert_eq!(instants.len(), 50);
        assert_eq!(instants[0], ts(0));
        assert_eq!(instants[1], ts(10));
        assert_eq!(instants[49], ts(490));
        assert!(instants[49] < ts(500));
    }
}
