//! Batch runner: repeats the single-game simulation and aggregates the
//! recorded paths into a sample for estimating ruin probability.

use tracing::debug;

use crate::mechanics::ruin;
use crate::systems::game::Game;
use crate::{ConfigError, WagerConfig};

/// N independent game realizations under one wager configuration.
pub struct Batch {
    cfg: WagerConfig,
    game: Game,
    paths: Vec<Vec<i64>>,
    horizon: usize,
}

impl Batch {
    pub fn new(cfg: WagerConfig, seed: u64) -> Self {
        Self {
            cfg,
            game: Game::new(cfg, seed),
            paths: Vec::new(),
            horizon: 0,
        }
    }

    /// Runs exactly `no_simulations` games capped at `no_rounds` rounds
    /// each, in simulation order. The stored result set is rebuilt fresh
    /// on every call; previous results are discarded, never appended to.
    ///
    /// Both counts must be positive; validation happens before any
    /// simulation work begins.
    pub fn simulate(
        &mut self,
        no_simulations: usize,
        no_rounds: usize,
    ) -> Result<&[Vec<i64>], ConfigError> {
        if no_simulations == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        if no_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        debug!(no_simulations, no_rounds, "running batch");

        self.paths.clear();
        self.horizon = no_rounds;
        for _ in 0..no_simulations {
            self.paths.push(self.game.run(no_rounds));
        }

        debug!(
            ruin_fraction = ruin::empirical(&self.paths, no_rounds),
            "batch complete"
        );
        Ok(&self.paths)
    }

    /// Paths recorded by the most recent [`Batch::simulate`].
    pub fn paths(&self) -> &[Vec<i64>] {
        &self.paths
    }

    /// Closed-form infinite-horizon ruin probability for this wager.
    pub fn ruin_probability_analytical(&self) -> f64 {
        ruin::analytical(self.cfg.p, self.cfg.q, self.cfg.init_balance)
    }

    /// Ruin fraction observed in the stored batch; 0 before any batch ran.
    pub fn ruin_probability_empirical(&self) -> f64 {
        ruin::empirical(&self.paths, self.horizon)
    }
}
