// src/mc/mc_engine.rs
use crate::error::{validation::*, SdeError, SdeResult};
use crate::mc::asian::{AsianOption, Averaging};
use crate::mc::payoffs::{Payoff, PayoffKind};
use crate::models::gbm::{initial_path, GbmPathGenerator};
use crate::rng::{RngFactory, Sampler, ShockSource};
use rayon::prelude::*;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{debug, info, warn};

/// Trials simulated per RNG stream by [`mc_price_asian`]
pub const TRIALS_PER_BATCH: usize = 8_192;

#[derive(Debug, Clone)]
pub struct McConfig {
    pub trials: usize,
    pub steps: usize,
    pub s0: f64,
    pub k: f64,
    pub r: f64,
    pub sigma: f64,
    pub t: f64,
    pub payoff: PayoffKind,
    pub averaging: Averaging,
    pub sampler: Sampler,
    pub seed: u64,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl McConfig {
    /// Validate the Monte Carlo configuration
    pub fn validate(&self) -> SdeResult<()> {
        self.params().map(|_| ())
    }

    /// Validated, immutable market and grid parameters
    pub fn params(&self) -> SdeResult<SimulationParameters> {
        if let Some(threads) = self.threads {
            validate_count("threads", threads)?;
        }
        SimulationParameters::new(
            self.s0, self.k, self.r, self.sigma, self.t, self.steps, self.trials,
        )
    }

    /// The option contract described by this configuration
    pub fn option(&self) -> AsianOption {
        AsianOption::new(self.averaging, Payoff::new(self.payoff, self.k))
    }
}

impl Default for McConfig {
    fn default() -> Self {
        McConfig {
            trials: 100_000,
            steps: 250,
            s0: 30.0,
            k: 29.0,
            r: 0.08,
            sigma: 0.3,
            t: 1.0,
            payoff: PayoffKind::Call,
            averaging: Averaging::Arithmetic,
            sampler: Sampler::Polar,
            seed: 12345,
            threads: None,
        }
    }
}

/// Validated simulation inputs; immutable once built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    s0: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
    steps: usize,
    trials: usize,
}

impl SimulationParameters {
    /// Build the parameter set, rejecting anything that would let the
    /// simulation silently produce garbage.
    pub fn new(
        s0: f64,
        k: f64,
        r: f64,
        sigma: f64,
        t: f64,
        steps: usize,
        trials: usize,
    ) -> SdeResult<Self> {
        validate_count("trials", trials)?;
        validate_count("steps", steps)?;
        validate_positive("s0", s0)?;
        validate_non_negative("k", k)?;
        validate_finite("r", r)?;
        validate_non_negative("sigma", sigma)?;
        validate_positive("t", t)?;

        Ok(SimulationParameters {
            s0,
            k,
            r,
            sigma,
            t,
            steps,
            trials,
        })
    }

    pub fn s0(&self) -> f64 {
        self.s0
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }
}

/// Running payoff statistics for a set of trials
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    pub sum: f64,
    pub sum_sq: f64,
    pub count: usize,
}

impl Accumulator {
    #[inline]
    pub fn add(&mut self, payoff: f64) {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
        self.count += 1;
    }

    /// Combine two partial accumulators
    pub fn merge(self, other: Accumulator) -> Accumulator {
        Accumulator {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            count: self.count + other.count,
        }
    }

    /// Mean undiscounted payoff (NaN when empty)
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Unbiased sample variance of the payoffs
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let mean = self.mean();
        // Rounding can push a near-zero variance slightly negative
        ((self.sum_sq / n - mean * mean) * n / (n - 1.0)).max(0.0)
    }
}

/// Discounted price estimate with its Monte Carlo standard error
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    pub price: f64,
    pub std_error: f64,
    pub trials: usize,
}

impl McEstimate {
    pub fn from_accumulator(acc: &Accumulator, discount: f64) -> Self {
        let std_error = if acc.count > 0 {
            discount * (acc.sample_variance() / acc.count as f64).sqrt()
        } else {
            f64::NAN
        };
        McEstimate {
            price: discount * acc.mean(),
            std_error,
            trials: acc.count,
        }
    }

    /// Two-sided normal confidence interval at `level` (e.g. 0.95)
    pub fn confidence_interval(&self, level: f64) -> SdeResult<(f64, f64)> {
        validate_open_unit("level", level)?;
        let normal = Normal::new(0.0, 1.0).map_err(|e| SdeError::InvalidParameter {
            parameter: "level".to_string(),
            value: level,
            constraint: e.to_string(),
        })?;
        let z = normal.inverse_cdf(0.5 + 0.5 * level);
        Ok((self.price - z * self.std_error, self.price + z * self.std_error))
    }
}

/// Simulate `trials` paths into the reusable `path` buffer and accumulate
/// their undiscounted payoffs.
///
/// `path[0]` must already hold the starting price.
pub fn run_trials<S: ShockSource + ?Sized>(
    generator: &GbmPathGenerator,
    option: &AsianOption,
    path: &mut [f64],
    source: &mut S,
    trials: usize,
) -> Accumulator {
    let mut acc = Accumulator::default();
    for _ in 0..trials {
        generator.fill_path(path, source);
        acc.add(option.payoff_price(path));
    }
    acc
}

/// Monte Carlo price of an Asian option driven by a single shock source
///
/// # Algorithm
///
/// 1. Allocate one path of `steps + 1` prices with `S_0` at index 0
/// 2. For each trial, overwrite `S_1..S_N` and evaluate the averaged payoff
/// 3. Discount the mean payoff: `price = e^(-rT) * (Σ payoff / N)`
///
/// The result is a statistical estimate with standard error O(1/√N). Extreme
/// parameters can overflow to a non-finite price, which is returned as is.
pub fn price_asian<S: ShockSource + ?Sized>(
    params: &SimulationParameters,
    option: &AsianOption,
    source: &mut S,
) -> f64 {
    let generator = GbmPathGenerator::from_params(params);
    let mut path = initial_path(params.s0(), params.steps());
    let acc = run_trials(&generator, option, &mut path, source, params.trials());
    acc.mean() * params.discount_factor()
}

/// Batched, seeded Monte Carlo pricing for an Asian option under GBM
///
/// # Parallelism
///
/// Trials are cut into batches of [`TRIALS_PER_BATCH`]. Batch `b` owns the
/// shock stream `b` of an [`RngFactory`] seeded with `cfg.seed`, plus its own
/// path buffer, so batches share nothing and the shocks do not depend on
/// how many threads run them. Partial accumulators are merged with a plain
/// sum reduction; different thread counts only change rounding.
///
/// # Errors
///
/// Returns `SdeError::InvalidParameter` for an invalid configuration and
/// `SdeError::ThreadPool` when a dedicated pool cannot be created.
pub fn mc_price_asian(cfg: &McConfig) -> SdeResult<McEstimate> {
    let params = cfg.params()?;
    let option = cfg.option();
    let generator = GbmPathGenerator::from_params(&params);
    let factory = RngFactory::new(cfg.seed);
    let batches = params.trials().div_ceil(TRIALS_PER_BATCH);

    debug!(
        trials = params.trials(),
        steps = params.steps(),
        batches,
        seed = cfg.seed,
        sampler = %cfg.sampler,
        averaging = %option.averaging(),
        payoff = %option.payoff().kind(),
        "starting Asian option simulation"
    );

    let run_batch = |batch: usize| -> Accumulator {
        let start = batch * TRIALS_PER_BATCH;
        let trials = TRIALS_PER_BATCH.min(params.trials() - start);
        let mut source = factory.create_source(cfg.sampler, batch as u64);
        let mut path = initial_path(params.s0(), params.steps());
        run_trials(&generator, &option, &mut path, &mut source, trials)
    };

    let acc = match cfg.threads {
        Some(1) => (0..batches)
            .map(run_batch)
            .fold(Accumulator::default(), Accumulator::merge),
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SdeError::ThreadPool(e.to_string()))?;
            pool.install(|| {
                (0..batches)
                    .into_par_iter()
                    .map(run_batch)
                    .reduce(Accumulator::default, Accumulator::merge)
            })
        }
        None => (0..batches)
            .into_par_iter()
            .map(run_batch)
            .reduce(Accumulator::default, Accumulator::merge),
    };

    let estimate = McEstimate::from_accumulator(&acc, params.discount_factor());

    if !estimate.price.is_finite() {
        warn!(price = estimate.price, "price estimate is not finite");
    } else {
        info!(
            price = estimate.price,
            std_error = estimate.std_error,
            trials = estimate.trials,
            "simulation complete"
        );
    }

    Ok(estimate)
}
