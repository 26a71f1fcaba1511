//! peak_hour — compares one building under off-peak and peak-hour demand.
//!
//! Runs one simulated hour of each scenario, prints the dashboard KPIs, then
//! replicates both over several seeds and writes everything to
//! `output/peak_hour/summary.json`.  Set `RUST_LOG=debug` to follow every
//! elevator and rider.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;
use serde::Serialize;

use vts_core::{BuildingConfig, PARAMS, SimTime};
use vts_sim::{KPI_NAMES, MetricsSnapshot, SimBuilder, SimObserver, replicate};

// ── Constants ─────────────────────────────────────────────────────────────────

const HORIZON_SECS:       f64       = 3_600.0; // one simulated hour
const REPLICATION_STEPS:  u64       = 20_000;
const REPLICATION_SEEDS:  [u64; 8]  = [1, 2, 3, 4, 5, 6, 7, 8];
const OUTPUT_DIR:         &str      = "output/peak_hour";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tracks the longest lobby line and prints a line every simulated 10 minutes.
#[derive(Default)]
struct ProgressObserver {
    next_report:  f64,
    peak_waiting: usize,
}

impl SimObserver for ProgressObserver {
    fn on_step_end(&mut self, snapshot: &MetricsSnapshot) {
        self.peak_waiting = self.peak_waiting.max(snapshot.waiting);
        if snapshot.time.secs() >= self.next_report {
            println!(
                "  {}  waiting {:>3}  aboard {:>3}  done {:>4}  avg wait {:>6.1}s",
                snapshot.time, snapshot.waiting, snapshot.aboard, snapshot.completed, snapshot.avg_wait_time
            );
            self.next_report += 600.0;
        }
    }
}

// ── Summary file ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ScenarioSummary {
    name:         &'static str,
    config:       BuildingConfig,
    hour:         MetricsSnapshot,
    peak_waiting: usize,
    replications: Vec<MetricsSnapshot>,
}

fn run_scenario(name: &'static str, config: BuildingConfig) -> Result<ScenarioSummary> {
    println!("── {name} (mean arrival gap {:.0} s) ──", config.mean_interarrival_secs());

    let mut sim = SimBuilder::new(config.clone()).strict_ranges().build()?;
    let mut obs = ProgressObserver::default();
    let t0 = Instant::now();
    let steps = sim.run_until(SimTime(HORIZON_SECS), &mut obs)?;
    info!("{name}: {steps} steps in {:.3} s", t0.elapsed().as_secs_f64());

    let hour = sim.metrics();
    println!();
    for (kpi, value) in hour.kpis() {
        println!("  {kpi:<18} {value:>8.3}");
    }
    println!("  {:<18} {:>8}", "Riders completed", hour.completed);
    println!("  {:<18} {:>8}", "Longest queue", obs.peak_waiting);
    println!("  {:<18} {:?}", "Lobby sizes", sim.lobby_sizes());
    println!();

    let t0 = Instant::now();
    let replications = replicate(&config, &REPLICATION_SEEDS, REPLICATION_STEPS)?;
    info!(
        "{name}: {} replications of {REPLICATION_STEPS} steps in {:.3} s",
        replications.len(),
        t0.elapsed().as_secs_f64()
    );

    Ok(ScenarioSummary { name, config, hour, peak_waiting: obs.peak_waiting, replications })
}

fn print_replications(summaries: &[ScenarioSummary]) {
    println!("{:<18} {:<10} {:>10} {:>10} {:>10}", "KPI", "Scenario", "Min", "Mean", "Max");
    println!("{}", "-".repeat(62));
    for kpi in KPI_NAMES {
        for s in summaries {
            let values: Vec<f64> = s.replications.iter().filter_map(|r| r.get(kpi)).collect();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len().max(1) as f64;
            println!("{kpi:<18} {:<10} {min:>10.3} {mean:>10.3} {max:>10.3}", s.name);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    println!("=== peak_hour — vertical transportation ===");
    println!();
    println!("{:<40} {:?}", "Parameter", "Default");
    println!("{}", "-".repeat(52));
    for p in &PARAMS {
        println!("{:<40} {:?}", p.label, p.default);
    }
    println!();

    let off_peak = BuildingConfig::default();
    let peak = BuildingConfig { peak_hour: true, ..off_peak.clone() };

    let summaries = vec![run_scenario("off-peak", off_peak)?, run_scenario("peak", peak)?];

    println!(
        "Replications: {} seeds × {REPLICATION_STEPS} steps",
        REPLICATION_SEEDS.len()
    );
    print_replications(&summaries);

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let path = Path::new(OUTPUT_DIR).join("summary.json");
    std::fs::write(&path, serde_json::to_string_pretty(&summaries)?)?;
    println!();
    println!("Summary written to {}", path.display());

    Ok(())
}
