//! Property tests for match generation.
//!
//! - Conservation: only selected players appear, each at most once.
//! - Priority inclusion: a feasible generation places every eligible must-play player.
//! - Fairness: a full lowest tier is never skipped for a more-played player.
//! - The post-generation shortfall check never fires once validation passed.

use badminton_match_maker::{
    generate_matches, select_players, GameMode, Gender, GenerateError, Player, PlayerId,
    MAX_COURTS,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn arb_player() -> impl Strategy<Value = Player> {
    (any::<bool>(), 0u32..4, prop::bool::weighted(0.2)).prop_map(|(male, play_count, priority)| {
        let gender = if male { Gender::Male } else { Gender::Female };
        let mut p = Player::new("p", gender);
        p.play_count = play_count;
        p.priority = priority;
        p
    })
}

fn arb_mode() -> impl Strategy<Value = GameMode> {
    prop::sample::select(GameMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn generation_conserves_players(
        pool in prop::collection::vec(arb_player(), 0..24),
        mode in arb_mode(),
        courts in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        if let Ok(matches) = generate_matches(&pool, mode, courts, &mut rng) {
            prop_assert_eq!(matches.len(), courts);
            let ids: Vec<_> = matches.iter().flat_map(|m| m.player_ids()).collect();
            let unique: HashSet<_> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(ids.len(), mode.players_per_match() * courts);
            let pool_ids: HashSet<_> = pool.iter().map(|p| p.id).collect();
            prop_assert!(unique.is_subset(&pool_ids));
            if let Some(g) = mode.required_gender() {
                prop_assert!(pool.iter().filter(|p| unique.contains(&p.id)).all(|p| p.gender == g));
            }
        }
    }

    #[test]
    fn feasible_generation_never_reports_internal_shortfall(
        pool in prop::collection::vec(arb_player(), 0..24),
        mode in arb_mode(),
        courts in prop_oneof![
            1usize..5,
            Just(MAX_COURTS),
            Just(1usize << 63),
            Just(usize::MAX),
            any::<usize>(),
        ],
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = generate_matches(&pool, mode, courts, &mut rng);
        let shortfall = matches!(result, Err(GenerateError::InternalShortfall { .. }));
        prop_assert!(!shortfall, "{:?}", result);
    }

    #[test]
    fn eligible_priority_players_always_play(
        pool in prop::collection::vec(arb_player(), 0..24),
        mode in arb_mode(),
        courts in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        if let Ok(matches) = generate_matches(&pool, mode, courts, &mut rng) {
            let used: HashSet<_> = matches.iter().flat_map(|m| m.player_ids()).collect();
            let eligible = pool.iter().filter(|p| {
                p.priority && mode.required_gender().map_or(true, |g| p.gender == g)
            });
            for p in eligible {
                prop_assert!(used.contains(&p.id));
            }
        }
    }

    #[test]
    fn mixed_doubles_teams_are_one_man_one_woman(
        pool in prop::collection::vec(arb_player(), 0..24),
        courts in 1usize..4,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        if let Ok(matches) = generate_matches(&pool, GameMode::MixedDoubles, courts, &mut rng) {
            let gender = |id: PlayerId| pool.iter().find(|p| p.id == id).map(|p| p.gender);
            for m in &matches {
                for team in [&m.team_a, &m.team_b] {
                    prop_assert_eq!(team.len(), 2);
                    prop_assert_ne!(gender(team[0]), gender(team[1]));
                }
            }
        }
    }

    #[test]
    fn selection_never_skips_a_less_played_player(
        pool in prop::collection::vec(arb_player(), 0..20),
        count in 0usize..20,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        match select_players(&pool, count, true, &mut rng) {
            None => prop_assert!(pool.len() < count),
            Some(chosen) => {
                prop_assert_eq!(chosen.len(), count);
                let chosen_ids: HashSet<_> = chosen.iter().map(|p| p.id).collect();
                let max_chosen = chosen.iter().map(|p| p.play_count).max();
                for p in pool.iter().filter(|p| !chosen_ids.contains(&p.id)) {
                    prop_assert!(max_chosen.map_or(true, |m| p.play_count >= m));
                }
            }
        }
    }
}
