use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "lanegraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks sequentially and with the `parallel` feature
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Feature sets to compare, as `(baseline name, cargo features)`.
const VARIANTS: &[(&str, &str)] = &[("sequential", "tracing"), ("parallel", "tracing,parallel")];

const BENCH: &str = "graph_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for (baseline, features) in VARIANTS {
        println!("\n>>> Benchmarking {baseline} (features: {features})");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench")
            .arg("--bench")
            .arg(BENCH)
            .arg("--no-default-features")
            .arg("--features")
            .arg(features);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {baseline}"))?;

        if status.success() {
            println!("Finished {baseline} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {baseline}");
        }
    }

    Ok(())
}

/// Criterion output directories, relative to `target/criterion`, one per
/// benchmark in `benches/graph_benchmark.rs`.
fn workloads() -> Vec<String> {
    let mut names = vec!["graph_build_chain".to_owned(), "graph_remove_middle_node".to_owned()];
    for function in ["greedy_coloring", "greedy_coloring_by_component", "connected_components"] {
        for size in [256, 1024, 4096] {
            names.push(format!("graph_algorithms/{function}/{size}"));
        }
    }
    for size in [100, 1000, 10_000] {
        names.push(format!("lanes/assign_lanes/{size}"));
    }
    names
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Graph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | sequential | parallel | speedup |")?;
    writeln!(file, "|---|---|---|---|")?;

    for workload in workloads() {
        let dir = criterion_dir.join(&workload);
        let sequential = mean_ns(&dir.join("sequential/estimates.json"));
        let parallel = mean_ns(&dir.join("parallel/estimates.json"));
        let speedup = match (sequential, parallel) {
            (Some(s), Some(p)) if p > 0.0 => format!("{:.2}x", s / p),
            _ => "-".to_owned(),
        };
        writeln!(file, "| {workload} | {} | {} | {speedup} |", format_time(sequential), format_time(parallel))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Reads the mean point estimate, in nanoseconds, from a criterion
/// `estimates.json`.
fn mean_ns(path: &Path) -> Option<f64> {
    let content = fs::read_to_string(path).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;
    json.get("mean")?.get("point_estimate")?.as_f64()
}

fn format_time(ns: Option<f64>) -> String {
    match ns {
        Some(ns) if ns >= 1e6 => format!("{:.2} ms", ns / 1e6),
        Some(ns) if ns >= 1e3 => format!("{:.2} µs", ns / 1e3),
        Some(ns) => format!("{ns:.0} ns"),
        None => "N/A".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workloads_cover_every_benchmark() {
        let names = workloads();
        assert_eq!(names.len(), 2 + 3 * 3 + 3);
        assert!(names.contains(&"lanes/assign_lanes/10000".to_owned()));
    }

    #[test]
    fn times_are_scaled() {
        assert_eq!(format_time(Some(512.0)), "512 ns");
        assert_eq!(format_time(Some(2_500.0)), "2.50 µs");
        assert_eq!(format_time(Some(3_000_000.0)), "3.00 ms");
        assert_eq!(format_time(None), "N/A");
    }
}
