use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use relstat_core::TaskSet;
use relstat_extract::RawTask;

#[derive(Parser)]
#[command(name = "relstat", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a normalized task dataset from a raw task-graph snapshot
    Gather {
        /// Path to the provider's graph snapshot (JSON array of tasks)
        graph: PathBuf,
        /// Write the extracted dataset here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print wait-time statistics grouped by category and worker type
    WaitTimes {
        /// Path to an extracted dataset (output of `gather`)
        tasks: PathBuf,
    },

    /// Emit pending/running occupancy series for charting
    Timeline {
        /// Path to an extracted dataset (output of `gather`)
        tasks: PathBuf,
        /// Write the series JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn load_task_set(path: &PathBuf) -> anyhow::Result<TaskSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read task dataset {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse task dataset {}", path.display()))
}

fn emit(out: Option<PathBuf>, body: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => std::fs::write(&path, body)
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{}", body),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Gather { graph, out } => {
            let raw = std::fs::read_to_string(&graph)
                .with_context(|| format!("read graph snapshot {}", graph.display()))?;
            let entries: Vec<RawTask> = serde_json::from_str(&raw)
                .with_context(|| format!("parse graph snapshot {}", graph.display()))?;
            tracing::info!(tasks = entries.len(), "extracting task records");
            let tasks = relstat_extract::extract(entries)?;
            emit(out, &serde_json::to_string(&tasks)?)?;
        }
        Command::WaitTimes { tasks } => {
            let tasks = load_task_set(&tasks)?;
            print!("{}", relstat_stats::wait_time_report(&tasks));
        }
        Command::Timeline { tasks, out } => {
            let tasks = load_task_set(&tasks)?;
            let timeline = relstat_timeline::build_timeline(&tasks)?;
            tracing::info!(samples = timeline.len(), "built occupancy timeline");
            let series = relstat_timeline::to_chart_series(&timeline);
            emit(out, &serde_json::to_string(&series)?)?;
        }
    }

    Ok(())
}
