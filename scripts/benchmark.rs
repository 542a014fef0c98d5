// scripts/benchmark.rs
use bsm_greeks::math_utils::Timer;
use bsm_greeks::output::write_summary_to_csv;
use bsm_greeks::{bs_greeks, bs_price, OptionKind, OptionParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    evaluations: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    /// Sum of outputs, so the work cannot be optimized away
    checksum: f64,
}

/// Random but economically sensible parameter sets
fn random_parameters(n: usize, seed: u64) -> Vec<OptionParameters> {
    let mut rng = StdRng::seed_from_u64(seed);
    let spot = Uniform::new(50.0, 200.0);
    let strike = Uniform::new(50.0, 200.0);
    let time = Uniform::new(1.0 / 365.0, 2.0);
    let rate = Uniform::new(0.0, 0.1);
    let vol = Uniform::new(0.01, 1.0);
    let div = Uniform::new(0.0, 0.1);

    (0..n)
        .map(|_| {
            let kind = if rng.gen_bool(0.5) {
                OptionKind::Call
            } else {
                OptionKind::Put
            };
            OptionParameters::new(
                spot.sample(&mut rng),
                strike.sample(&mut rng),
                time.sample(&mut rng),
                rate.sample(&mut rng),
                vol.sample(&mut rng),
                kind,
            )
            .with_dividend_yield(div.sample(&mut rng))
        })
        .collect()
}

fn time_it<F: Fn(&[OptionParameters]) -> f64>(
    name: &str,
    params: &[OptionParameters],
    f: F,
) -> BenchmarkResult {
    let mut timer = Timer::new();
    timer.start();
    let checksum = f(params);
    let time_ms = timer.elapsed_ms();

    BenchmarkResult {
        name: name.to_string(),
        evaluations: params.len(),
        time_ms,
        throughput_per_sec: params.len() as f64 / (time_ms / 1000.0),
        checksum,
    }
}

fn run_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &n in &[10_000, 100_000, 1_000_000] {
        println!("Running benchmarks with {} parameter sets...", n);
        let params = random_parameters(n, 42);

        results.push(time_it(&format!("Price ({}k)", n / 1000), &params, |ps| {
            ps.iter()
                .map(|p| bs_price(p.spot, p.strike, p.time, p.rate, p.volatility, p.kind, p.dividend_yield))
                .sum()
        }));

        results.push(time_it(&format!("Greeks ({}k)", n / 1000), &params, |ps| {
            ps.iter()
                .map(|p| {
                    let g = bs_greeks(p.spot, p.strike, p.time, p.rate, p.volatility, p.kind, p.dividend_yield);
                    g.delta + g.gamma + g.vega + g.theta + g.rho
                })
                .sum()
        }));

        results.push(time_it(&format!("Price + Greeks parallel ({}k)", n / 1000), &params, |ps| {
            ps.par_iter()
                .map(|p| {
                    let g = p.greeks();
                    p.price() + g.delta + g.vega
                })
                .sum()
        }));
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Evaluations,Time_ms,Throughput_per_sec,Checksum")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6}",
            result.name,
            result.evaluations,
            result.time_ms,
            result.throughput_per_sec,
            result.checksum
        )?;
    }

    println!("Results written to {}", filename);
    Ok(())
}

fn main() -> io::Result<()> {
    println!("bsm-greeks Benchmark Suite");
    println!("==========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<36} {:>11} {:>12} {:>15}",
        "Benchmark", "Evaluations", "Time (ms)", "Throughput/s"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<36} {:>11} {:>12.2} {:>15.0}",
            result.name, result.evaluations, result.time_ms, result.throughput_per_sec
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)?;

    let cores = system_info.cpu_cores.to_string();
    let threads = system_info.rayon_threads.to_string();
    let summary_file = format!("benchmark_system_{}.csv", timestamp);
    write_summary_to_csv(
        &summary_file,
        &[
            ("os", system_info.os.as_str()),
            ("cpu_cores", cores.as_str()),
            ("rayon_threads", threads.as_str()),
            ("rust_version", system_info.rust_version.as_str()),
        ],
    )?;

    println!("\nBenchmark complete!");
    println!("Run again with: cargo run --bin benchmark --release");
    Ok(())
}
