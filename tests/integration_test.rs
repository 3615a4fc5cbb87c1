// tests/integration_test.rs
use fast_asian::mc::asian::Averaging;
use fast_asian::mc::mc_engine::{mc_price_asian, McConfig};
use fast_asian::mc::payoffs::PayoffKind;
use fast_asian::rng::Sampler;
use statrs::distribution::{ContinuousCDF, Normal};

// Closed-form price of a discretely monitored geometric Asian option whose
// average includes S_0 and `steps` equally spaced fixings.
fn geometric_asian_closed_form(cfg: &McConfig) -> f64 {
    let n = cfg.steps as f64;
    let mu = cfg.s0.ln() + (cfg.r - 0.5 * cfg.sigma * cfg.sigma) * cfg.t / 2.0;
    let var = cfg.sigma * cfg.sigma * cfg.t * (2.0 * n + 1.0) / (6.0 * (n + 1.0));
    let sd = var.sqrt();
    let forward = (mu + 0.5 * var).exp();
    let d1 = (mu - cfg.k.ln() + var) / sd;
    let d2 = d1 - sd;
    let normal = Normal::new(0.0, 1.0).unwrap();
    let discount = (-cfg.r * cfg.t).exp();

    match cfg.payoff {
        PayoffKind::Call => discount * (forward * normal.cdf(d1) - cfg.k * normal.cdf(d2)),
        PayoffKind::Put => discount * (cfg.k * normal.cdf(-d2) - forward * normal.cdf(-d1)),
    }
}

#[test]
fn test_reference_run_arithmetic_call() {
    let arithmetic = McConfig { seed: 42, ..Default::default() };
    let geometric = McConfig { averaging: Averaging::Geometric, ..arithmetic.clone() };

    let arith = mc_price_asian(&arithmetic).expect("Valid configuration");
    let geo = mc_price_asian(&geometric).expect("Valid configuration");
    let closed_form = geometric_asian_closed_form(&geometric);

    println!("\nArithmetic Asian call: {} ± {}", arith.price, arith.std_error);
    println!("Geometric Asian call:  {} ± {}", geo.price, geo.std_error);
    println!("Geometric closed form: {}", closed_form);

    assert!(
        (geo.price - closed_form).abs() < 0.06,
        "Geometric estimate {} too far from closed form {}",
        geo.price,
        closed_form
    );

    // Same paths: A >= G on every path, and the call payoff is 1-Lipschitz,
    // so the arithmetic price sits at most e^(-rT) E[A - G] above.
    assert!(arith.price >= geo.price);
    assert!(arith.price > closed_form - 0.06);
    assert!(arith.price < closed_form + 0.28);
}

#[test]
fn test_geometric_put_matches_closed_form() {
    let cfg = McConfig {
        trials: 50_000,
        steps: 50,
        seed: 17,
        payoff: PayoffKind::Put,
        averaging: Averaging::Geometric,
        ..Default::default()
    };

    let estimate = mc_price_asian(&cfg).expect("Valid configuration");
    let closed_form = geometric_asian_closed_form(&cfg);

    assert!(
        (estimate.price - closed_form).abs() < 0.05,
        "Geometric put {} vs closed form {}",
        estimate.price,
        closed_form
    );
}

#[test]
fn test_put_ordering_reverses() {
    let geometric = McConfig {
        trials: 30_000,
        steps: 50,
        seed: 5,
        payoff: PayoffKind::Put,
        averaging: Averaging::Geometric,
        ..Default::default()
    };
    let arithmetic = McConfig { averaging: Averaging::Arithmetic, ..geometric.clone() };

    let geo = mc_price_asian(&geometric).unwrap();
    let arith = mc_price_asian(&arithmetic).unwrap();

    // A lower average is worth more to the holder of a put
    assert!(geo.price >= arith.price);
}

#[test]
fn test_samplers_agree() {
    let polar = McConfig { trials: 100_000, steps: 50, seed: 8, ..Default::default() };
    let ziggurat = McConfig { sampler: Sampler::Ziggurat, ..polar.clone() };

    let p = mc_price_asian(&polar).unwrap();
    let z = mc_price_asian(&ziggurat).unwrap();

    assert!((p.price - z.price).abs() < 0.08, "polar {} vs ziggurat {}", p.price, z.price);
}

#[test]
fn test_zero_volatility_has_no_error() {
    let cfg = McConfig { sigma: 0.0, trials: 1_000, steps: 20, ..Default::default() };
    let estimate = mc_price_asian(&cfg).unwrap();

    let dt = cfg.t / cfg.steps as f64;
    let avg = (0..=cfg.steps)
        .map(|i| cfg.s0 * (cfg.r * i as f64 * dt).exp())
        .sum::<f64>()
        / (cfg.steps + 1) as f64;
    let expected = (avg - cfg.k) * (-cfg.r * cfg.t).exp();

    assert!((estimate.price - expected).abs() < 1e-9);
    assert!(estimate.std_error < 1e-6);
}

#[test]
fn test_same_seed_same_price() {
    let cfg = McConfig { trials: 20_000, steps: 25, seed: 2024, ..Default::default() };
    let a = mc_price_asian(&cfg).unwrap();
    let b = mc_price_asian(&McConfig { threads: Some(1), ..cfg.clone() }).unwrap();
    let c = mc_price_asian(&McConfig { seed: 2025, ..cfg }).unwrap();

    assert!((a.price - b.price).abs() < 1e-10);
    assert_ne!(a.price, c.price);
}
