//! Asian option evaluation
//!
//! An Asian option pays on an average of the fixings along the path rather
//! than on the terminal price alone:
//! ```text
//! Arithmetic:  A = (1/n) Σ S_i
//! Geometric:   G = exp((1/n) Σ ln S_i)
//! ```
//! where the sum runs over every fixing, including `S_0`. For positive paths
//! G ≤ A (AM-GM), so a geometric call is never worth more than its
//! arithmetic counterpart on the same paths.

use crate::mc::payoffs::Payoff;
use clap::ValueEnum;
use std::fmt;

/// Averaging convention applied to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Averaging {
    #[default]
    Arithmetic,
    Geometric,
}

impl Averaging {
    /// Representative price of a strictly positive path.
    ///
    /// Both means are taken relative to the first fixing, so a flat path
    /// returns its price exactly. An empty path has no average and yields NaN.
    pub fn average(&self, path: &[f64]) -> f64 {
        let Some((&first, rest)) = path.split_first() else {
            return f64::NAN;
        };
        let n = path.len() as f64;

        match self {
            Averaging::Arithmetic => {
                let excess: f64 = rest.iter().map(|&s| s - first).sum();
                first + excess / n
            }
            Averaging::Geometric => {
                let log_excess: f64 = rest.iter().map(|&s| (s / first).ln()).sum();
                first * (log_excess / n).exp()
            }
        }
    }
}

impl fmt::Display for Averaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Averaging::Arithmetic => write!(f, "arithmetic"),
            Averaging::Geometric => write!(f, "geometric"),
        }
    }
}

/// Average-price option: an averaging convention plus a payoff shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsianOption {
    averaging: Averaging,
    payoff: Payoff,
}

impl AsianOption {
    pub fn new(averaging: Averaging, payoff: Payoff) -> Self {
        AsianOption { averaging, payoff }
    }

    pub fn arithmetic(payoff: Payoff) -> Self {
        Self::new(Averaging::Arithmetic, payoff)
    }

    pub fn geometric(payoff: Payoff) -> Self {
        Self::new(Averaging::Geometric, payoff)
    }

    pub fn averaging(&self) -> Averaging {
        self.averaging
    }

    pub fn payoff(&self) -> Payoff {
        self.payoff
    }

    /// Undiscounted payoff of one completed path
    #[inline]
    pub fn payoff_price(&self, path: &[f64]) -> f64 {
        self.payoff.calculate(self.averaging.average(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_path_is_exact() {
        let path = vec![29.7; 251];
        assert_eq!(Averaging::Arithmetic.average(&path), 29.7);
        assert_eq!(Averaging::Geometric.average(&path), 29.7);

        let call = Payoff::Call { k: 29.0 };
        assert_eq!(AsianOption::arithmetic(call).payoff_price(&path), call.calculate(29.7));
        assert_eq!(AsianOption::geometric(call).payoff_price(&path), call.calculate(29.7));
    }

    #[test]
    fn test_known_averages() {
        let path = [1.0, 2.0, 4.0];
        assert_relative_eq!(Averaging::Arithmetic.average(&path), 7.0 / 3.0, max_relative = 1e-14);
        assert_relative_eq!(Averaging::Geometric.average(&path), 2.0, max_relative = 1e-14);
    }

    #[test]
    fn test_first_fixing_counts() {
        // S_0 is part of the average
        let path = [10.0, 20.0];
        assert_relative_eq!(Averaging::Arithmetic.average(&path), 15.0);
        assert_relative_eq!(Averaging::Geometric.average(&path), 200.0_f64.sqrt());
    }

    #[test]
    fn test_geometric_below_arithmetic() {
        let path = [30.0, 31.2, 29.4, 33.9, 35.1, 28.8];
        assert!(Averaging::Geometric.average(&path) < Averaging::Arithmetic.average(&path));

        let call = Payoff::Call { k: 30.0 };
        assert!(
            AsianOption::geometric(call).payoff_price(&path)
                <= AsianOption::arithmetic(call).payoff_price(&path)
        );
    }

    #[test]
    fn test_put_payoff_on_average() {
        let put = AsianOption::arithmetic(Payoff::Put { k: 30.0 });
        assert_relative_eq!(put.payoff_price(&[28.0, 26.0, 24.0]), 4.0);
    }

    #[test]
    fn test_empty_path_has_no_average() {
        assert!(Averaging::Arithmetic.average(&[]).is_nan());
        assert!(Averaging::Geometric.average(&[]).is_nan());
    }
}
