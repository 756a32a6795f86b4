//! Single-game state machine.
//!
//! One game is a sequence of rounds (three tosses each) applied to a
//! running balance, with an absorbing barrier at zero: a round that
//! would push the balance negative ends the game without being applied
//! or recorded.

use std::cell::RefCell;
use std::rc::Rc;

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use crate::WagerConfig;
use crate::mechanics::stoch;

/// Tosses summed into one round payoff; payoff domain is {-3, -1, 1, 3}.
pub const TOSSES_PER_ROUND: usize = 3;

/// Where a game realization currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// The next round would have made the balance negative.
    Ruined,
    /// The round cap was reached while still solvent.
    Completed,
}

/// One gambler playing rounds against the house. Owns its random stream,
/// so two games with distinct seeds draw independently.
pub struct Game {
    cfg: WagerConfig,
    rng: Rc<RefCell<WyRand>>,
    status: GameStatus,
}

impl Game {
    pub fn new(cfg: WagerConfig, seed: u64) -> Self {
        Self {
            cfg,
            rng: Rc::new(RefCell::new(WyRand::from_seed(seed.to_le_bytes()))),
            status: GameStatus::Running,
        }
    }

    /// Sum of exactly [`TOSSES_PER_ROUND`] independent tosses.
    pub fn play_round(&mut self) -> i64 {
        let mut payoff = 0;
        for _ in 0..TOSSES_PER_ROUND {
            payoff += stoch::toss(&self.rng, self.cfg.p);
        }
        payoff
    }

    /// One full realization, capped at `no_rounds` rounds.
    ///
    /// Balance and path are reinitialized on every call; nothing carries
    /// over from a previous run. The returned path starts at the initial
    /// balance and its last entry is the last solvent balance.
    pub fn run(&mut self, no_rounds: usize) -> Vec<i64> {
        let mut bal = self.cfg.init_balance;
        let mut path = Vec::with_capacity(no_rounds + 1);
        path.push(bal);
        self.status = GameStatus::Running;

        for _ in 0..no_rounds {
            let payoff = self.play_round();
            if bal + payoff < 0 {
                self.status = GameStatus::Ruined;
                return path;
            }
            bal += payoff;
            path.push(bal);
        }

        self.status = GameStatus::Completed;
        path
    }

    /// Terminal status of the most recent [`Game::run`].
    pub fn status(&self) -> GameStatus {
        self.status
    }
}
