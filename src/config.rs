//! Command-line and environment configuration
//!
//! Every option can also be supplied through an `ASIAN_*` environment
//! variable; flags win over the environment.

use crate::mc::asian::Averaging;
use crate::mc::mc_engine::McConfig;
use crate::mc::payoffs::PayoffKind;
use crate::rng::Sampler;
use clap::Parser;

/// Monte Carlo pricer for arithmetic and geometric Asian options
#[derive(Debug, Clone, Parser)]
#[command(name = "asian_price")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of simulated paths
    #[arg(long, env = "ASIAN_TRIALS", default_value_t = 100_000)]
    pub trials: usize,

    /// Time steps per path
    #[arg(long, env = "ASIAN_STEPS", default_value_t = 250)]
    pub steps: usize,

    /// Initial underlying price
    #[arg(long, env = "ASIAN_SPOT", default_value_t = 30.0)]
    pub spot: f64,

    /// Strike price
    #[arg(long, env = "ASIAN_STRIKE", default_value_t = 29.0)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, env = "ASIAN_RATE", default_value_t = 0.08, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, env = "ASIAN_VOLATILITY", default_value_t = 0.3)]
    pub volatility: f64,

    /// Time to maturity in years
    #[arg(long, env = "ASIAN_MATURITY", default_value_t = 1.0)]
    pub maturity: f64,

    /// Payoff applied to the averaged price
    #[arg(long, env = "ASIAN_PAYOFF", value_enum, default_value_t = PayoffKind::Call)]
    pub payoff: PayoffKind,

    /// Averaging convention over the path
    #[arg(long, env = "ASIAN_AVERAGE", value_enum, default_value_t = Averaging::Arithmetic)]
    pub average: Averaging,

    /// Normal sampler driving the paths
    #[arg(long, env = "ASIAN_SAMPLER", value_enum, default_value_t = Sampler::Polar)]
    pub sampler: Sampler,

    /// RNG seed; a random seed is drawn and logged when omitted
    #[arg(long, env = "ASIAN_SEED")]
    pub seed: Option<u64>,

    /// Worker threads (defaults to all cores)
    #[arg(long, env = "ASIAN_THREADS")]
    pub threads: Option<usize>,

    /// Also print the standard error and a 95% confidence interval
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the engine configuration, drawing a fresh seed if none was given
    pub fn to_config(&self) -> McConfig {
        McConfig {
            trials: self.trials,
            steps: self.steps,
            s0: self.spot,
            k: self.strike,
            r: self.rate,
            sigma: self.volatility,
            t: self.maturity,
            payoff: self.payoff,
            averaging: self.average,
            sampler: self.sampler,
            seed: self.seed.unwrap_or_else(rand::random),
            threads: self.threads,
        }
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
