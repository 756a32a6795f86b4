// demos/favorable.rs
// Run with:
//   RUST_LOG=gamblers_ruin=debug cargo run --example favorable

use gamblers_ruin::WagerConfig;
use gamblers_ruin::systems::batch::Batch;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gamblers_ruin=debug"));
    fmt().with_env_filter(env_filter).with_target(true).init();

    let cfg = WagerConfig::new(0.55, 10).expect("valid wager parameters");
    let mut batch = Batch::new(cfg, 42);
    batch.simulate(2_000, 250).expect("valid batch parameters");

    println!("== Favorable game (p = 0.55, balance 10) ==");
    println!(
        "analytical (infinite horizon)  -> {:.6}",
        batch.ruin_probability_analytical()
    );
    println!(
        "empirical  (250-round horizon) -> {:.6}",
        batch.ruin_probability_empirical()
    );
}
