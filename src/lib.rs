/*!
`gamblers_ruin` — a minimal gambler's-ruin Monte Carlo engine.

What it does
- Draws ±1 coin-toss trials from Bernoulli(p) and sums three of them into
  one round payoff in {-3, -1, 1, 3}.
- Drives a per-game loop that applies round payoffs to a running balance,
  stopping at the absorbing barrier (a round that would push the balance
  negative ends the game unapplied), and records the balance path.
- Repeats games into a batch and exposes the closed-form infinite-horizon
  ruin probability next to the ruin fraction observed in the batch.

How to use (call surface only)
- Build a [`WagerConfig`] from a win probability `p` and a non-negative
  initial balance (both validated at construction).
- Build a `systems::batch::Batch` from the config and a seed; call
  `simulate(no_simulations, no_rounds)`.
- Read `paths()`, `ruin_probability_analytical()` and
  `ruin_probability_empirical()`.

What it does NOT do
- No CLI parsing, printing or plotting; the scenarios under `demos/` show
  how a caller wires those up.
- No variable bet sizes, no house edge beyond `p`, no exact finite-horizon
  analytics.
*/

/// Immutable per-simulator parameters. `q` is derived once at construction.
#[derive(Clone, Copy, Debug)]
pub struct WagerConfig {
    /// Probability that the gambler wins a single toss.
    pub p: f64,
    /// Loss probability, `1 - p`.
    pub q: f64,
    /// Starting capital, in betting units.
    pub init_balance: i64,
}

impl WagerConfig {
    /// Validates `p` ∈ [0, 1] (NaN rejected) and a non-negative balance.
    pub fn new(p: f64, init_balance: i64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::WinProbability(p));
        }
        if init_balance < 0 {
            return Err(ConfigError::InitialBalance(init_balance));
        }
        Ok(Self {
            p,
            q: 1.0 - p,
            init_balance,
        })
    }
}

/// Rejected construction/invocation parameters. Ruin itself is an expected
/// terminal outcome, never an error.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("win probability must lie in [0, 1], got {0}")]
    WinProbability(f64),
    #[error("initial balance must be non-negative, got {0}")]
    InitialBalance(i64),
    #[error("number of simulations must be positive")]
    ZeroSimulations,
    #[error("number of rounds must be positive")]
    ZeroRounds,
}

pub mod mechanics;
pub mod systems;
