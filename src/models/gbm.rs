// src/models/gbm.rs
//! Geometric Brownian Motion path generation
//!
//! Under the risk-neutral measure the underlying follows
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//! and is advanced with the exact log-Euler step
//! ```text
//! S_{i} = S_{i-1} * exp((r - σ²/2)Δt) * exp(σ√Δt * Z_i)
//! ```
//! which keeps every price strictly positive for finite shocks.

use crate::mc::mc_engine::SimulationParameters;
use crate::rng::ShockSource;

/// Per-step GBM multipliers for a fixed time grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmPathGenerator {
    drift: f64,
    vol: f64,
}

impl GbmPathGenerator {
    /// Precompute the step factors for `steps` equal intervals over `[0, t]`.
    ///
    /// `steps` must be positive; validated parameters go through
    /// [`GbmPathGenerator::from_params`].
    pub fn new(r: f64, sigma: f64, t: f64, steps: usize) -> Self {
        let dt = t / steps as f64;
        GbmPathGenerator {
            drift: (dt * (r - 0.5 * sigma * sigma)).exp(),
            vol: (sigma * sigma * dt).sqrt(),
        }
    }

    pub fn from_params(params: &SimulationParameters) -> Self {
        Self::new(params.r(), params.sigma(), params.t(), params.steps())
    }

    /// Deterministic growth factor applied on every step
    pub fn drift_factor(&self) -> f64 {
        self.drift
    }

    /// Standard deviation of the log-return over one step
    pub fn step_vol(&self) -> f64 {
        self.vol
    }

    /// Overwrite `path[1..]` in place, leaving `path[0]` as the starting price.
    ///
    /// One shock is drawn per step. Empty and single-element paths are left
    /// untouched.
    pub fn fill_path<S: ShockSource + ?Sized>(&self, path: &mut [f64], source: &mut S) {
        let Some((first, rest)) = path.split_first_mut() else {
            return;
        };

        let mut current = *first;
        for price in rest {
            let z = source.next_standard_normal();
            current = current * self.drift * (self.vol * z).exp();
            *price = current;
        }
    }
}

/// Allocate a path of `steps + 1` prices, all set to `s0`
pub fn initial_path(s0: f64, steps: usize) -> Vec<f64> {
    vec![s0; steps + 1]
}

/// Simulate one independent path and hand back an owned copy
pub fn simulate_path<S: ShockSource + ?Sized>(params: &SimulationParameters, source: &mut S) -> Vec<f64> {
    let mut path = initial_path(params.s0(), params.steps());
    GbmPathGenerator::from_params(params).fill_path(&mut path, source);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PolarBoxMuller;
    use approx::assert_relative_eq;

    /// Counts draws and always returns the same shock
    struct ConstantShock {
        z: f64,
        draws: usize,
    }

    impl ShockSource for ConstantShock {
        fn next_standard_normal(&mut self) -> f64 {
            self.draws += 1;
            self.z
        }
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let (s0, r, t, steps) = (30.0, 0.08, 1.0, 250);
        let generator = GbmPathGenerator::new(r, 0.0, t, steps);
        let dt = t / steps as f64;

        let mut source = PolarBoxMuller::seeded(5);
        let mut path = initial_path(s0, steps);
        generator.fill_path(&mut path, &mut source);

        for (i, &price) in path.iter().enumerate() {
            let expected = s0 * (r * i as f64 * dt).exp();
            assert_relative_eq!(price, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_volatility_ignores_source() {
        let generator = GbmPathGenerator::new(0.05, 0.0, 2.0, 10);

        let mut a = initial_path(100.0, 10);
        let mut b = initial_path(100.0, 10);
        generator.fill_path(&mut a, &mut PolarBoxMuller::seeded(1));
        generator.fill_path(&mut b, &mut ConstantShock { z: 3.0, draws: 0 });

        assert_eq!(a, b);
    }

    #[test]
    fn test_one_draw_per_step_and_first_price_kept() {
        let generator = GbmPathGenerator::new(0.08, 0.3, 1.0, 12);
        let mut source = ConstantShock { z: 0.5, draws: 0 };
        let mut path = initial_path(30.0, 12);

        generator.fill_path(&mut path, &mut source);

        assert_eq!(source.draws, 12);
        assert_eq!(path[0], 30.0);
        let step = generator.drift_factor() * (generator.step_vol() * 0.5).exp();
        assert_relative_eq!(path[12], 30.0 * step.powi(12), max_relative = 1e-12);
    }

    #[test]
    fn test_step_factors() {
        let generator = GbmPathGenerator::new(0.08, 0.3, 1.0, 4);
        let dt = 0.25;

        assert_relative_eq!(generator.drift_factor(), (dt * 0.035_f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(generator.step_vol(), 0.15, max_relative = 1e-12);
    }

    #[test]
    fn test_paths_stay_positive() {
        let generator = GbmPathGenerator::new(0.08, 0.9, 5.0, 500);
        let mut source = PolarBoxMuller::seeded(77);
        let mut path = initial_path(30.0, 500);

        for _ in 0..50 {
            generator.fill_path(&mut path, &mut source);
            assert!(path.iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn test_degenerate_paths_are_noops() {
        let generator = GbmPathGenerator::new(0.08, 0.3, 1.0, 1);
        let mut source = ConstantShock { z: 1.0, draws: 0 };

        let mut empty: Vec<f64> = Vec::new();
        generator.fill_path(&mut empty, &mut source);
        assert!(empty.is_empty());

        let mut single = vec![42.0];
        generator.fill_path(&mut single, &mut source);
        assert_eq!(single, vec![42.0]);

        assert_eq!(source.draws, 0);
    }
}
