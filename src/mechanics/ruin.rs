/// Ruin mechanics: infinite-horizon closed form and the empirical
/// ruin fraction over recorded balance paths.

/// Analytical ruin probability for a walk with an absorbing barrier at 0:
/// `1 - (q/p)^b` for a favorable game, certain ruin otherwise.
#[inline]
pub fn analytical(p: f64, q: f64, init_balance: i64) -> f64 {
    if p > 0.5 {
        1.0 - (q / p).powf(init_balance as f64)
    } else {
        1.0
    }
}

/// Fraction of paths that ruined within the horizon: a path counts as
/// ruined when it terminated early (fewer than `no_rounds + 1` entries)
/// or ended flat at 0. Empty input gives 0.
pub fn empirical(paths: &[Vec<i64>], no_rounds: usize) -> f64 {
    if paths.is_empty() {
        return 0.0;
    }
    let ruined = paths
        .iter()
        .filter(|path| path.len() < no_rounds + 1 || path.last() == Some(&0))
        .count();
    ruined as f64 / paths.len() as f64
}
