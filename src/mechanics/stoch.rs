/// Stochastic mechanics: RNG helpers and the ±1 coin-toss trial.
/// Note: uses `bevy_prng::WyRand` with `Rc<RefCell<>>` so callers
/// can keep closures `Fn` while mutating RNG state.
use bevy_prng::WyRand;
use rand_core::RngCore;
use std::cell::RefCell;

/// Uniform draw in [0,1) with 53-bit resolution, using WyRand.
#[inline]
pub fn uniform01(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p) with WyRand.
#[inline]
pub fn bernoulli(rng: &RefCell<WyRand>, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}

/// One coin toss with payoff (+1, -1) with probability (p, q).
#[inline]
pub fn toss(rng: &RefCell<WyRand>, p: f64) -> i64 {
    if bernoulli(rng, p) { 1 } else { -1 }
}
