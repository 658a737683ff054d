//! Team composer: turn the chosen players into per-court matches.

use crate::logic::selection::{select_players, shuffled};
use crate::logic::validation::{plan_generation, GenerationPlan, PoolPlan, SlotPool};
use crate::models::{GameMatch, GameMode, GenerateError, Player};
use rand::Rng;

/// Mixed doubles: court `i` takes males `2i, 2i+1` and females `2i, 2i+1`.
/// A coin flip decides which male partners which female. Courts missing a player are skipped.
pub fn compose_mixed<R: Rng + ?Sized>(
    males: &[Player],
    females: &[Player],
    courts: usize,
    rng: &mut R,
) -> Vec<GameMatch> {
    // Courts past the shorter gender list can never be filled.
    let fillable = courts.min(males.len() / 2).min(females.len() / 2);
    let mut matches = Vec::with_capacity(fillable);
    for i in 0..fillable {
        let (Some(m1), Some(m2), Some(f1), Some(f2)) = (
            males.get(2 * i),
            males.get(2 * i + 1),
            females.get(2 * i),
            females.get(2 * i + 1),
        ) else {
            continue;
        };
        let (team_a, team_b) = if rng.gen_bool(0.5) {
            (vec![m1.id, f1.id], vec![m2.id, f2.id])
        } else {
            (vec![m1.id, f2.id], vec![m2.id, f1.id])
        };
        matches.push(GameMatch::new(i + 1, team_a, team_b));
    }
    matches
}

/// Every other mode: consecutive slices of `players_per_match` players per court.
/// Singles: 0 vs 1. Doubles: 0,1 vs 2,3. A short trailing slice is skipped.
pub fn compose_uniform(players: &[Player], mode: GameMode, courts: usize) -> Vec<GameMatch> {
    let per_match = mode.players_per_match();
    players
        .chunks_exact(per_match)
        .take(courts)
        .enumerate()
        .map(|(i, chunk)| {
            let (team_a, team_b) = chunk.split_at(per_match / 2);
            GameMatch::new(
                i + 1,
                team_a.iter().map(|p| p.id).collect(),
                team_b.iter().map(|p| p.id).collect(),
            )
        })
        .collect()
}

/// Priority players plus a fairness selection of regulars, in pool order.
/// A pool that cannot be filled leaves every one of the `courts` empty.
fn fill_slots<R: Rng + ?Sized>(
    pool: &SlotPool,
    courts: usize,
    rng: &mut R,
) -> Result<Vec<Player>, GenerateError> {
    // plan_generation already checked the regular pool size.
    let regulars = select_players(&pool.regular, pool.remaining, true, rng).ok_or(
        GenerateError::InternalShortfall {
            requested: courts,
            produced: 0,
        },
    )?;
    let mut chosen = pool.priority.clone();
    chosen.extend(regulars);
    Ok(chosen)
}

/// Fill a validated plan with players and compose the matches.
pub fn compose_plan<R: Rng + ?Sized>(
    plan: &GenerationPlan,
    rng: &mut R,
) -> Result<Vec<GameMatch>, GenerateError> {
    let matches = match &plan.pools {
        PoolPlan::Mixed { males, females } => {
            let males = shuffled(&fill_slots(males, plan.courts, rng)?, rng);
            let females = shuffled(&fill_slots(females, plan.courts, rng)?, rng);
            compose_mixed(&males, &females, plan.courts, rng)
        }
        PoolPlan::Uniform(pool) => {
            let everyone = shuffled(&fill_slots(pool, plan.courts, rng)?, rng);
            compose_uniform(&everyone, plan.mode, plan.courts)
        }
    };

    if matches.len() < plan.courts {
        log::error!(
            "match generation produced {} of {} courts for {:?}",
            matches.len(),
            plan.courts,
            plan.mode
        );
        return Err(GenerateError::InternalShortfall {
            requested: plan.courts,
            produced: matches.len(),
        });
    }
    Ok(matches)
}

/// Generate one proposal from the selected players.
///
/// 1. Validate headcount and must-play limits for the mode (no randomness yet).
/// 2. Fill each pool: all priority players plus fairness-selected regulars.
/// 3. Shuffle and slice into courts.
pub fn generate_matches<R: Rng + ?Sized>(
    available: &[Player],
    mode: GameMode,
    courts: usize,
    rng: &mut R,
) -> Result<Vec<GameMatch>, GenerateError> {
    let plan = plan_generation(available, mode, courts)?;
    let matches = compose_plan(&plan, rng)?;
    log::debug!(
        "generated {} match(es) for {:?} from {} selected player(s)",
        matches.len(),
        mode,
        available.len()
    );
    Ok(matches)
}
