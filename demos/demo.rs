// demos/demo.rs
use fast_asian::error::SdeError;
use fast_asian::mc::asian::{AsianOption, Averaging};
use fast_asian::mc::mc_engine::{mc_price_asian, price_asian, McConfig, SimulationParameters};
use fast_asian::mc::payoffs::{Payoff, PayoffKind};
use fast_asian::models::gbm::simulate_path;
use fast_asian::rng::PolarBoxMuller;

fn main() {
    println!("Running fast-asian Monte Carlo Demo\n");

    let base = McConfig {
        trials: 100_000,
        steps: 250,
        seed: 42,
        ..Default::default()
    };

    println!("1. Batched pricing (S0 = {}, K = {}, r = {}, σ = {}, T = {})", base.s0, base.k, base.r, base.sigma, base.t);
    for payoff in [PayoffKind::Call, PayoffKind::Put] {
        for averaging in [Averaging::Arithmetic, Averaging::Geometric] {
            let cfg = McConfig { payoff, averaging, ..base.clone() };
            match mc_price_asian(&cfg) {
                Ok(estimate) => {
                    let (lo, hi) = estimate
                        .confidence_interval(0.95)
                        .expect("0.95 is a valid level");
                    println!(
                        "   {:<4} {:<10}: {:.4} ± {:.4}  (95% CI [{:.4}, {:.4}])",
                        payoff, averaging, estimate.price, estimate.std_error, lo, hi
                    );
                }
                Err(e) => println!("   Unexpected error: {}", e),
            }
        }
    }

    println!("\n2. Single-stream pricing with an explicit shock source");
    let params = base.params().expect("Valid configuration");
    let option = AsianOption::arithmetic(Payoff::Call { k: base.k });
    let mut source = PolarBoxMuller::seeded(7);
    println!("   arithmetic call: {:.4}", price_asian(&params, &option, &mut source));

    println!("\n3. One simulated path");
    let path = simulate_path(&params, &mut source);
    println!(
        "   S_0 = {:.2}, S_T = {:.2}, arithmetic mean = {:.4}, geometric mean = {:.4}",
        path[0],
        path[path.len() - 1],
        Averaging::Arithmetic.average(&path),
        Averaging::Geometric.average(&path)
    );

    println!("\n4. Invalid configurations are rejected up front");
    let invalid = [
        McConfig { steps: 0, ..base.clone() },
        McConfig { trials: 0, ..base.clone() },
        McConfig { sigma: -0.3, ..base.clone() },
        McConfig { t: 0.0, ..base.clone() },
    ];
    for cfg in &invalid {
        match mc_price_asian(cfg) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(SdeError::InvalidParameter { parameter, value, constraint }) => {
                println!("   ✓ Caught InvalidParameter: {} = {} ({})", parameter, value, constraint);
            }
            Err(other) => println!("   Unexpected error type: {}", other),
        }
    }

    println!("\n✓ Demo complete!");
}
