//! `waypoint`: run one scenario and print the path.
//!
//! Without `--scenario` the built-in 10×10 reference scenario is used.
//! Logs go to stderr, filtered by `RUST_LOG` (default `waypoint=info`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use waypoint_harness::render::{render_counters, render_map, render_outcome};
use waypoint_harness::runner::run_scenario_with_policy;
use waypoint_harness::scenario::Scenario;
use waypoint_search::policy::DedupPolicy;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Deterministic A* shortest paths on a bounded grid")]
#[command(version)]
struct Cli {
    /// Scenario JSON file (defaults to the built-in reference scenario)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Print an ASCII map with the path overlaid
    #[arg(long)]
    map: bool,

    /// Print the canonical search graph JSON and run counters
    #[arg(long)]
    graph: bool,

    /// Duplicate-node policy, overriding the scenario
    #[arg(long, value_parser = parse_dedup)]
    dedup: Option<DedupPolicy>,

    /// Expansion budget, overriding the scenario
    #[arg(long)]
    max_expansions: Option<u64>,
}

fn parse_dedup(s: &str) -> Result<DedupPolicy, String> {
    s.parse().map_err(|e: waypoint_search::error::SearchError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("waypoint=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::reference(),
    };

    let mut policy = scenario.policy;
    if let Some(dedup) = cli.dedup {
        policy = policy.with_dedup(dedup);
    }
    if let Some(budget) = cli.max_expansions {
        policy = policy.with_max_expansions(budget);
    }

    let report = run_scenario_with_policy(&scenario, &policy)
        .with_context(|| format!("running scenario {}", scenario.name))?;

    println!("{}", render_outcome(&report.outcome));

    if cli.map {
        println!();
        print!(
            "{}",
            render_map(
                &report.grid,
                scenario.start_cell(),
                scenario.goal_cell(),
                report.outcome.path(),
            )
        );
    }

    if cli.graph {
        println!();
        print!("{}", render_counters(&report));
        println!("{}", String::from_utf8_lossy(&report.graph_bytes));
    }

    Ok(())
}
