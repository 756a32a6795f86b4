// demos/fair_coin.rs
// Run with:
//   cargo run --example fair_coin

use gamblers_ruin::WagerConfig;
use gamblers_ruin::systems::batch::Batch;

fn main() {
    // probability of success
    let p = 0.5;
    // initial amount
    let init_balance = 10;
    // number of rounds
    let no_rounds = 100;
    // number of simulations
    let no_simulations = 100;

    let cfg = WagerConfig::new(p, init_balance).expect("valid wager parameters");
    let mut batch = Batch::new(cfg, 7);
    let games = batch
        .simulate(no_simulations, no_rounds)
        .expect("valid batch parameters")
        .len();

    println!("== Fair coin (p = {p}) ==");
    println!("simulated {games} games of up to {no_rounds} rounds");
    for (i, path) in batch.paths().iter().take(3).enumerate() {
        println!("game {i} -> {path:?}");
    }
    println!(
        "analytical ruin probability -> {:.6}",
        batch.ruin_probability_analytical()
    );
    println!(
        "empirical  ruin probability -> {:.6}",
        batch.ruin_probability_empirical()
    );
}
