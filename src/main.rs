//! `asian_price` - price an Asian option by Monte Carlo and print a report.

use anyhow::Context;
use clap::Parser;
use fast_asian::config::Cli;
use fast_asian::math_utils::Timer;
use fast_asian::mc::mc_engine::mc_price_asian;
use fast_asian::output;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cfg = cli.to_config();
    info!(seed = cfg.seed, threads = ?cfg.threads, cores = num_cpus::get(), "pricing run configured");

    let timer = Timer::new();
    let estimate = mc_price_asian(&cfg).context("invalid pricing configuration")?;
    info!(elapsed_ms = timer.elapsed_ms(), trials_per_sec = timer.rate(estimate.trials), "pricing finished");

    let ci = if cli.stats {
        Some(estimate.confidence_interval(0.95)?)
    } else {
        None
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &cfg, &estimate, ci).context("failed to write report")?;

    Ok(())
}
