use std::fmt::Write;

use relstat_core::{TaskSet, TASK_CATEGORIES};

use crate::summary::{group_by, summarize, Metric, Summary};

/// Render the wait-time report: one section grouped by task category,
/// one by worker type. Groups with no completed tasks are omitted.
pub fn wait_time_report(tasks: &TaskSet) -> String {
    let by_category = group_by(tasks, Metric::WaitTime, |r| &r.category);
    let by_worker = group_by(tasks, Metric::WaitTime, |r| &r.worker);

    let mut out = String::new();
    out.push_str("Wait times by task type:\n");
    // Category order follows the fixed category table, not key order.
    for label in TASK_CATEGORIES {
        if let Some(values) = by_category.get(*label) {
            if let Some(s) = summarize(values) {
                write_group(&mut out, label, &s);
            }
        }
    }
    out.push('\n');
    out.push_str("Wait times by worker type:\n");
    for (worker, values) in &by_worker {
        if let Some(s) = summarize(values) {
            write_group(&mut out, worker, &s);
        }
    }
    out
}

fn write_group(out: &mut String, label: &str, s: &Summary) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}:", label);
    let _ = writeln!(out, "    (mean): {}", s.mean);
    let _ = writeln!(out, "    (25th percentile): {}", s.p25);
    let _ = writeln!(out, "    (75th percentile): {}", s.p75);
    let _ = writeln!(out, "    (min): {}", s.min);
    let _ = writeln!(out, "    (max): {}", s.max);
}
