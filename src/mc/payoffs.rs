//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! A payoff maps a single (averaged) underlying price to the cash value
//! received by the holder:
//! - **Call**: max(S - K, 0) - right to buy at strike K
//! - **Put**: max(K - S, 0) - right to sell at strike K
//!
//! Averaging over the path happens in [`crate::mc::asian`]; payoffs here only
//! see the representative price.

use clap::ValueEnum;
use std::fmt;

/// Enumeration of supported payoff shapes
///
/// Each variant carries its strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// Call: max(S - K, 0)
    Call { k: f64 },

    /// Put: max(K - S, 0)
    Put { k: f64 },
}

impl Payoff {
    pub fn new(kind: PayoffKind, k: f64) -> Self {
        match kind {
            PayoffKind::Call => Payoff::Call { k },
            PayoffKind::Put => Payoff::Put { k },
        }
    }

    pub fn kind(&self) -> PayoffKind {
        match self {
            Payoff::Call { .. } => PayoffKind::Call,
            Payoff::Put { .. } => PayoffKind::Put,
        }
    }

    pub fn strike(&self) -> f64 {
        match self {
            Payoff::Call { k } | Payoff::Put { k } => *k,
        }
    }

    /// Non-negative payoff for the given price
    #[inline]
    pub fn calculate(&self, s: f64) -> f64 {
        match self {
            Payoff::Call { k } => (s - k).max(0.0),
            Payoff::Put { k } => (k - s).max(0.0),
        }
    }
}

/// Payoff shape without its strike, as selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PayoffKind {
    #[default]
    Call,
    Put,
}

impl fmt::Display for PayoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffKind::Call => write!(f, "call"),
            PayoffKind::Put => write!(f, "put"),
        }
    }
}
