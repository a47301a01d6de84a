//! Batch runner for the uniform-dispersion engine.
//!
//! Runs one or more independent engine instances over a baked-in map and
//! reports the dispersion metrics per run, optionally as CSV rows for the
//! comparison dashboards.  Instance `i` is seeded with `seed + i`, so a
//! whole sweep is reproducible from a single seed.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ud_core::RobotId;
use ud_map::catalog;
use ud_sim::{Engine, SimObserver};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "ud-cli", version, about = "Uniform-dispersion batch runner")]
struct Args {
    /// Catalog index of the map to run.
    #[arg(short, long, default_value_t = 0)]
    map: usize,

    /// List the baked-in maps and exit.
    #[arg(long)]
    list_maps: bool,

    /// Seed of the first instance; instance i runs with seed + i.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Activation probability in percent (clamped to 0..=100).
    #[arg(short, long, default_value_t = 50)]
    probability: i32,

    /// Tick cap per instance.
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Number of independent instances to run.
    #[arg(short, long, default_value_t = 1)]
    runs: u64,

    /// Write one CSV row per instance to this file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

// ── Per-run summary ───────────────────────────────────────────────────────────

struct RunSummary {
    run:       u64,
    seed:      u64,
    ticks:     u64,
    complete:  bool,
    robots:    usize,
    available: usize,
    t_total:   u64,
    t_max:     u64,
    e_total:   u64,
    e_max:     u64,
}

/// Logs settlements as they happen; numbers feed the summary table instead.
struct SettleLogger {
    run: u64,
}

impl SimObserver for SettleLogger {
    fn on_robot_settled(&mut self, id: RobotId, tick: u64) {
        tracing::debug!(run = self.run, robot = id.0, tick, "settled");
    }

    fn on_complete(&mut self, tick: u64) {
        tracing::info!(run = self.run, tick, "dispersion complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.list_maps {
        println!("{:<4} {:<16} {:<10} {:<10} walkable", "#", "name", "size", "door");
        for (i, map) in catalog::CATALOG.iter().enumerate() {
            println!(
                "{:<4} {:<16} {:<10} {:<10} {}",
                i,
                map.name,
                format!("{}x{}x{}", map.size_x, map.size_y, map.size_z),
                map.door.to_string(),
                map.walkable_cells(),
            );
        }
        return Ok(());
    }

    if args.map >= catalog::map_count() {
        bail!(
            "map index {} out of range (catalog has {} maps; see --list-maps)",
            args.map,
            catalog::map_count()
        );
    }
    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }

    let map = catalog::entry(args.map).expect("index validated above");
    println!(
        "Map: {} ({}x{}x{}, {} walkable cells)  |  p = {}  |  runs = {}",
        map.name,
        map.size_x,
        map.size_y,
        map.size_z,
        map.walkable_cells(),
        args.probability.clamp(0, 100),
        args.runs,
    );
    println!();

    // Each instance is fully independent: own engine, own seed, no shared
    // state.  This is the same shape the multi-simulation dashboard uses.
    let mut summaries = Vec::with_capacity(args.runs as usize);
    for run in 0..args.runs {
        let seed = args.seed + run;
        let mut engine = Engine::new(seed);
        engine.load_map(args.map);
        engine.set_active_probability(args.probability);

        let mut logger = SettleLogger { run };
        let ticks = engine.run_until_complete(args.max_ticks, &mut logger);

        summaries.push(RunSummary {
            run,
            seed,
            ticks,
            complete: engine.is_simulation_complete(),
            robots: engine.get_robot_count(),
            available: engine.get_available_cells(),
            t_total: engine.get_t_total(),
            t_max: engine.get_t_max(),
            e_total: engine.get_e_total(),
            e_max: engine.get_e_max(),
        });
    }

    print_table(&summaries);

    if let Some(path) = &args.csv {
        write_csv(path, &summaries)
            .with_context(|| format!("writing {}", path.display()))?;
        println!();
        println!("Wrote {} rows to {}", summaries.len(), path.display());
    }

    Ok(())
}

fn print_table(summaries: &[RunSummary]) {
    println!(
        "{:<5} {:<8} {:<8} {:<9} {:<8} {:<8} {:<8} {:<8} {:<8} {:<8}",
        "run", "seed", "ticks", "complete", "robots", "cells", "t_total", "t_max", "e_total", "e_max"
    );
    println!("{}", "-".repeat(84));
    for s in summaries {
        println!(
            "{:<5} {:<8} {:<8} {:<9} {:<8} {:<8} {:<8} {:<8} {:<8} {:<8}",
            s.run,
            s.seed,
            s.ticks,
            if s.complete { "yes" } else { "no" },
            s.robots,
            s.available,
            s.t_total,
            s.t_max,
            s.e_total,
            s.e_max,
        );
    }
}

fn write_csv(path: &PathBuf, summaries: &[RunSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "run", "seed", "ticks", "complete", "robots", "available_cells",
        "t_total", "t_max", "e_total", "e_max",
    ])?;
    for s in summaries {
        writer.write_record(&[
            s.run.to_string(),
            s.seed.to_string(),
            s.ticks.to_string(),
            (s.complete as u8).to_string(),
            s.robots.to_string(),
            s.available.to_string(),
            s.t_total.to_string(),
            s.t_max.to_string(),
            s.e_total.to_string(),
            s.e_max.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
