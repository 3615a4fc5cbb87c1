//! # fast-asian: Monte Carlo Pricing of Asian Options
//!
//! A Rust library for pricing average-price (Asian) options by simulating
//! Geometric Brownian Motion paths.
//!
//! ## Key Features
//!
//! - **Averaging conventions**: arithmetic and geometric means over every fixing
//! - **Payoff shapes**: calls and puts on the averaged price
//! - **Reproducible**: explicitly seeded shock streams, one per batch of trials
//! - **Parallel**: batches run on Rayon with a plain sum reduction
//! - **Validated inputs**: bad parameters are rejected before simulating
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_asian::mc::asian::Averaging;
//! use fast_asian::mc::mc_engine::{mc_price_asian, McConfig};
//! use fast_asian::mc::payoffs::PayoffKind;
//!
//! let config = McConfig {
//!     trials: 10_000,
//!     steps: 50,
//!     s0: 30.0,       // Spot price
//!     k: 29.0,        // Strike
//!     r: 0.08,        // Risk-free rate
//!     sigma: 0.3,     // Volatility
//!     t: 1.0,         // Maturity in years
//!     payoff: PayoffKind::Call,
//!     averaging: Averaging::Geometric,
//!     ..Default::default()
//! };
//!
//! let estimate = mc_price_asian(&config).expect("Valid configuration");
//! println!("Asian price: {:.4} ± {:.4}", estimate.price, estimate.std_error);
//! ```

pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;

pub use error::{SdeError, SdeResult};
