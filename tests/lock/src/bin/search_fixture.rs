//! Binary that runs the reference scenario under both dedup policies
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines, prefixed by policy name.

use waypoint_harness::runner::run_scenario_with_policy;
use waypoint_harness::scenario::Scenario;
use waypoint_search::policy::{DedupPolicy, SearchPolicy};

fn main() {
    let scenario = Scenario::reference();
    println!(
        "scenario_digest={}",
        scenario.digest().expect("scenario digest").as_str()
    );

    for dedup in [DedupPolicy::BestCost, DedupPolicy::FirstMatch] {
        let policy = SearchPolicy::default().with_dedup(dedup);
        let report = run_scenario_with_policy(&scenario, &policy).expect("search run failed");
        let m = &report.graph.metadata;
        let prefix = dedup.as_str();

        println!("{prefix}.grid_fingerprint={}", report.grid_fingerprint.as_str());
        println!("{prefix}.search_graph_digest={}", report.graph_digest.as_str());
        println!(
            "{prefix}.path_digest={}",
            report
                .path_digest
                .as_ref()
                .map_or("none", |d| d.as_str())
        );
        println!("{prefix}.report_digest={}", report.report_digest.as_str());
        println!("{prefix}.termination_reason={}", m.termination_reason.as_str());
        println!(
            "{prefix}.path_len={}",
            report.outcome.path().map_or(0, |p| p.len())
        );
        println!("{prefix}.total_pops={}", m.total_pops);
        println!("{prefix}.total_nodes_created={}", m.total_nodes_created);
        println!("{prefix}.frontier_high_water={}", m.frontier_high_water);
    }
}
