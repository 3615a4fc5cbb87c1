// scripts/benchmark.rs
use fast_asian::math_utils::Timer;
use fast_asian::mc::asian::Averaging;
use fast_asian::mc::mc_engine::{mc_price_asian, McConfig};
use std::env;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    physical_cores: usize,
    rayon_threads: usize,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
            rayon_threads: rayon::current_num_threads(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    trials: usize,
    time_ms: f64,
    throughput_trials_per_sec: f64,
    price: f64,
    std_error: f64,
}

fn run_benchmark(name: &str, cfg: &McConfig) -> BenchmarkResult {
    let mut timer = Timer::new();
    timer.start();
    let estimate = mc_price_asian(cfg).expect("Valid configuration");
    let time_ms = timer.elapsed_ms();

    BenchmarkResult {
        name: name.to_string(),
        trials: cfg.trials,
        time_ms,
        throughput_trials_per_sec: timer.rate(cfg.trials),
        price: estimate.price,
        std_error: estimate.std_error,
    }
}

fn run_monte_carlo_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &trials in &[10_000, 100_000, 1_000_000] {
        println!("Running benchmarks with {} trials...", trials);

        for averaging in [Averaging::Arithmetic, Averaging::Geometric] {
            let base = McConfig {
                trials,
                seed: 42,
                averaging,
                ..Default::default()
            };

            let serial = McConfig { threads: Some(1), ..base.clone() };
            results.push(run_benchmark(&format!("{} serial", averaging), &serial));
            results.push(run_benchmark(&format!("{} parallel", averaging), &base));
        }
    }

    results
}

fn main() {
    let info = SystemInfo::gather();
    println!("fast-asian benchmark");
    println!("====================");
    println!(
        "OS: {} | logical cores: {} | physical cores: {} | rayon threads: {} | RUSTFLAGS: {}\n",
        info.os, info.cpu_cores, info.physical_cores, info.rayon_threads, info.rustc_flags
    );

    let results = run_monte_carlo_benchmarks();

    println!(
        "\n{:<22} {:>10} {:>12} {:>16} {:>10} {:>10}",
        "benchmark", "trials", "time (ms)", "trials/sec", "price", "std err"
    );
    for r in &results {
        println!(
            "{:<22} {:>10} {:>12.2} {:>16.0} {:>10.5} {:>10.5}",
            r.name, r.trials, r.time_ms, r.throughput_trials_per_sec, r.price, r.std_error
        );
    }
}
