// src/output.rs
use crate::mc::mc_engine::{McConfig, McEstimate};
use std::io::{self, Write};

/// Echo the run inputs one per line, then the discounted price.
///
/// `ci` adds the standard error and a 95% interval after the price line.
pub fn write_report<W: Write>(
    out: &mut W,
    cfg: &McConfig,
    estimate: &McEstimate,
    ci: Option<(f64, f64)>,
) -> io::Result<()> {
    writeln!(out, "Number of Paths: {}", cfg.trials)?;
    writeln!(out, "Number of Steps: {}", cfg.steps)?;
    writeln!(out, "Underlying:      {:.2}", cfg.s0)?;
    writeln!(out, "Strike:          {:.2}", cfg.k)?;
    writeln!(out, "Risk-Free Rate:  {:.2}", cfg.r)?;
    writeln!(out, "Volatility:      {:.2}", cfg.sigma)?;
    writeln!(out, "Maturity:        {:.2}", cfg.t)?;
    writeln!(out, "Payoff:          {}", cfg.payoff)?;
    writeln!(out, "Averaging:       {}", cfg.averaging)?;
    writeln!(out, "Asian Price:     {:.6}", estimate.price)?;

    if let Some((lo, hi)) = ci {
        writeln!(out, "Std Error:       {:.6}", estimate.std_error)?;
        writeln!(out, "95% CI:          [{:.6}, {:.6}]", lo, hi)?;
    }
    Ok(())
}
