//! Mode resolution and feasibility checks, run before any random choice is made.

use crate::models::{GameMode, Gender, GenerateError, Player};

/// Players split by role for one gendered (or ungendered) group of slots.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlotPool {
    /// Must-play players; all of them are placed.
    pub priority: Vec<Player>,
    /// Candidates for the remaining slots.
    pub regular: Vec<Player>,
    /// How many regular players must be picked to fill the slots.
    pub remaining: usize,
}

impl SlotPool {
    fn split(players: impl IntoIterator<Item = Player>, slots: usize) -> Self {
        let (priority, regular): (Vec<_>, Vec<_>) =
            players.into_iter().partition(|p| p.priority);
        Self {
            remaining: slots.saturating_sub(priority.len()),
            priority,
            regular,
        }
    }
}

/// What the composer has to fill, per mode family.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolPlan {
    /// Mixed doubles: males and females fill separate halves of every court.
    Mixed { males: SlotPool, females: SlotPool },
    /// Every other mode: one pool (possibly filtered to one gender).
    Uniform(SlotPool),
}

/// Feasible generation: every pool can fill its slots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationPlan {
    pub mode: GameMode,
    pub courts: usize,
    pub players_per_match: usize,
    pub total_needed: usize,
    pub pools: PoolPlan,
}

/// Validate `available` (the selected players) against the mode and court count.
///
/// Checks short-circuit in this order: total headcount, total must-play count, then the
/// mode-specific per-gender (mixed) or filtered-pool checks.
pub fn plan_generation(
    available: &[Player],
    mode: GameMode,
    courts: usize,
) -> Result<GenerationPlan, GenerateError> {
    let players_per_match = mode.players_per_match();
    // A court count this large can never be filled.
    let total_needed = players_per_match.checked_mul(courts).ok_or(
        GenerateError::InsufficientTotalPlayers {
            needed: usize::MAX,
            available: available.len(),
        },
    )?;

    if available.len() < total_needed {
        return Err(GenerateError::InsufficientTotalPlayers {
            needed: total_needed,
            available: available.len(),
        });
    }

    let priority_count = available.iter().filter(|p| p.priority).count();
    if priority_count > total_needed {
        return Err(GenerateError::PriorityOverflow {
            gender: None,
            priority: priority_count,
            slots: total_needed,
        });
    }

    let pools = if mode == GameMode::MixedDoubles {
        // Half of total_needed, which already fit in usize.
        let needed_per_gender = total_needed / 2;
        let males = gender_pool(available, Gender::Male, needed_per_gender);
        let females = gender_pool(available, Gender::Female, needed_per_gender);
        for (gender, pool) in [(Gender::Male, &males), (Gender::Female, &females)] {
            check_priority(pool, Some(gender), needed_per_gender)?;
        }
        for (gender, pool) in [(Gender::Male, &males), (Gender::Female, &females)] {
            check_regular(pool, Some(gender), total_needed)?;
        }
        PoolPlan::Mixed { males, females }
    } else {
        let gender = mode.required_gender();
        let pool = match gender {
            Some(g) => gender_pool(available, g, total_needed),
            None => SlotPool::split(available.iter().cloned(), total_needed),
        };
        check_priority(&pool, gender, total_needed)?;
        check_regular(&pool, gender, total_needed)?;
        PoolPlan::Uniform(pool)
    };

    Ok(GenerationPlan {
        mode,
        courts,
        players_per_match,
        total_needed,
        pools,
    })
}

fn gender_pool(available: &[Player], gender: Gender, slots: usize) -> SlotPool {
    SlotPool::split(
        available.iter().filter(|p| p.gender == gender).cloned(),
        slots,
    )
}

fn check_priority(
    pool: &SlotPool,
    gender: Option<Gender>,
    slots: usize,
) -> Result<(), GenerateError> {
    if pool.priority.len() > slots {
        return Err(GenerateError::PriorityOverflow {
            gender,
            priority: pool.priority.len(),
            slots,
        });
    }
    Ok(())
}

/// A non-gendered pool that is short is a plain headcount problem.
fn check_regular(
    pool: &SlotPool,
    gender: Option<Gender>,
    total_needed: usize,
) -> Result<(), GenerateError> {
    if pool.regular.len() >= pool.remaining {
        return Ok(());
    }
    Err(match gender {
        Some(gender) => GenerateError::GenderShortage {
            gender,
            needed: pool.remaining,
            available: pool.regular.len(),
        },
        None => GenerateError::InsufficientTotalPlayers {
            needed: total_needed,
            available: pool.priority.len() + pool.regular.len(),
        },
    })
}
