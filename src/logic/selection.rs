//! Fairness selector: pick N players, preferring those who have played the least.

use crate::models::Player;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Shuffled copy of `players` (uniform Fisher-Yates permutation).
pub fn shuffled<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Vec<Player> {
    let mut out = players.to_vec();
    out.shuffle(rng);
    out
}

/// Select `count` players from `pool`. Returns None if the pool is too small.
///
/// With `prioritize_fairness`, players are grouped into tiers by exact play count; tiers are
/// consumed in ascending order and each tier is shuffled, so less-played players always win a
/// slot over more-played ones and ties are broken at random on every call.
/// Without it, the pool is shuffled as a whole.
pub fn select_players<R: Rng + ?Sized>(
    pool: &[Player],
    count: usize,
    prioritize_fairness: bool,
    rng: &mut R,
) -> Option<Vec<Player>> {
    if pool.len() < count {
        return None;
    }

    if !prioritize_fairness {
        let mut all = shuffled(pool, rng);
        all.truncate(count);
        return Some(all);
    }

    let mut tiers: BTreeMap<u32, Vec<Player>> = BTreeMap::new();
    for p in pool {
        tiers.entry(p.play_count).or_default().push(p.clone());
    }

    let mut selected = Vec::with_capacity(count);
    for (play_count, mut tier) in tiers {
        if selected.len() == count {
            break;
        }
        tier.shuffle(rng);
        let needed = count - selected.len();
        log::trace!(
            "fairness tier play_count={} size={} taking {}",
            play_count,
            tier.len(),
            needed.min(tier.len())
        );
        selected.extend(tier.into_iter().take(needed));
    }
    Some(selected)
}
