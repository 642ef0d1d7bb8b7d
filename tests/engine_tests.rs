//! Outcome engine integration tests.
//!
//! These tests check the decision rule and match progression through the
//! public API, including property tests over arbitrary move sequences.

use proptest::prelude::*;

use rust_rps::core::{ConfigError, MatchState, Move, RoundOutcome, Side, HISTORY_LIMIT};
use rust_rps::rules::{apply_round, decide, match_result, reset_all, restart_match, set_best_of, MatchResult};

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissors)]
}

// =============================================================================
// Decision Rule
// =============================================================================

#[test]
fn test_fixed_cases() {
    assert_eq!(decide(Move::Rock, Move::Scissors), RoundOutcome::FirstWins);
    assert_eq!(decide(Move::Scissors, Move::Rock), RoundOutcome::SecondWins);
    assert_eq!(decide(Move::Paper, Move::Paper), RoundOutcome::Tie);
}

#[test]
fn test_winning_pairs() {
    for (a, b) in [
        (Move::Rock, Move::Scissors),
        (Move::Paper, Move::Rock),
        (Move::Scissors, Move::Paper),
    ] {
        assert_eq!(decide(a, b), RoundOutcome::FirstWins);
    }
}

proptest! {
    #[test]
    fn prop_same_move_ties(a in any_move()) {
        prop_assert_eq!(decide(a, a), RoundOutcome::Tie);
    }

    #[test]
    fn prop_distinct_moves_are_antisymmetric(a in any_move(), b in any_move()) {
        prop_assume!(a != b);
        let forward = decide(a, b);
        prop_assert_ne!(forward, RoundOutcome::Tie);
        prop_assert_eq!(decide(b, a), forward.inverse());
    }

    #[test]
    fn prop_counters_sum_to_rounds(moves in prop::collection::vec((any_move(), any_move()), 0..200)) {
        let mut state = MatchState::new();
        for &(a, b) in &moves {
            apply_round(&mut state, a, b);
        }
        let total = state.first_score() + state.second_score() + state.tie_count();
        prop_assert_eq!(total as usize, moves.len());
        prop_assert_eq!(state.rounds_played() as usize, moves.len());
    }

    #[test]
    fn prop_history_capped_newest_first(moves in prop::collection::vec((any_move(), any_move()), 1..150)) {
        let mut state = MatchState::new();
        for &(a, b) in &moves {
            apply_round(&mut state, a, b);
            prop_assert!(state.history().len() <= HISTORY_LIMIT);

            let newest = state.history()[0];
            prop_assert_eq!((newest.first, newest.second), (a, b));
            prop_assert_eq!(newest.outcome, decide(a, b));
        }
        prop_assert_eq!(state.history().len(), moves.len().min(HISTORY_LIMIT));
    }

    #[test]
    fn prop_at_most_one_side_reaches_target(
        n in (0i64..6).prop_map(|k| 2 * k + 1),
        moves in prop::collection::vec((any_move(), any_move()), 0..60),
    ) {
        let mut state = MatchState::new();
        set_best_of(&mut state, Some(n)).unwrap();
        let target = state.target().unwrap();

        for &(a, b) in &moves {
            let (_, complete) = apply_round(&mut state, a, b);
            prop_assert_eq!(complete, state.is_complete());
            if complete {
                let first_done = state.first_score() >= target;
                let second_done = state.second_score() >= target;
                prop_assert!(first_done != second_done);
                break;
            }
        }
    }

    #[test]
    fn prop_invalid_best_of_leaves_target(n in any::<i64>()) {
        prop_assume!(n <= 0 || n % 2 == 0);
        let mut state = MatchState::new();
        set_best_of(&mut state, Some(9)).unwrap();

        prop_assert_eq!(set_best_of(&mut state, Some(n)), Err(ConfigError::InvalidBestOf(n)));
        prop_assert_eq!(state.target(), Some(5));
    }
}

// =============================================================================
// Best-of Configuration
// =============================================================================

#[test]
fn test_best_of_validation() {
    let mut state = MatchState::new();

    assert_eq!(set_best_of(&mut state, Some(4)), Err(ConfigError::InvalidBestOf(4)));
    assert_eq!(set_best_of(&mut state, Some(-3)), Err(ConfigError::InvalidBestOf(-3)));
    assert_eq!(state.target(), None);

    assert_eq!(set_best_of(&mut state, Some(5)), Ok(()));
    assert_eq!(state.target(), Some(3));

    assert_eq!(set_best_of(&mut state, None), Ok(()));
    assert_eq!(state.target(), None);
}

#[test]
fn test_unbounded_match_never_completes() {
    let mut state = MatchState::new();
    for _ in 0..100 {
        let (_, complete) = apply_round(&mut state, Move::Paper, Move::Rock);
        assert!(!complete);
    }
    assert_eq!(state.first_score(), 100);
    assert_eq!(match_result(&state), None);
}

// =============================================================================
// Match Completion
// =============================================================================

/// Best-of-5: first side reaches 3 wins while the second has 1.
#[test]
fn test_completion_flag_only_on_deciding_round() {
    let mut state = MatchState::new();
    set_best_of(&mut state, Some(5)).unwrap();

    let rounds = [
        (Move::Rock, Move::Scissors, RoundOutcome::FirstWins),
        (Move::Rock, Move::Paper, RoundOutcome::SecondWins),
        (Move::Paper, Move::Paper, RoundOutcome::Tie),
        (Move::Scissors, Move::Paper, RoundOutcome::FirstWins),
        (Move::Paper, Move::Rock, RoundOutcome::FirstWins),
    ];

    for (i, &(a, b, expected)) in rounds.iter().enumerate() {
        let (outcome, complete) = apply_round(&mut state, a, b);
        assert_eq!(outcome, expected);
        assert_eq!(complete, i == rounds.len() - 1, "round {}", i + 1);
    }

    assert_eq!(state.first_score(), 3);
    assert_eq!(state.second_score(), 1);
    assert_eq!(state.tie_count(), 1);
    assert_eq!(match_result(&state), Some(MatchResult::Winner(Side::First)));
}

#[test]
fn test_second_side_can_win() {
    let mut state = MatchState::new();
    set_best_of(&mut state, Some(3)).unwrap();

    assert!(!apply_round(&mut state, Move::Scissors, Move::Rock).1);
    assert!(apply_round(&mut state, Move::Paper, Move::Scissors).1);
    assert_eq!(match_result(&state), Some(MatchResult::Winner(Side::Second)));
}

#[test]
fn test_shrinking_best_of_picks_leading_side() {
    let mut state = MatchState::new();
    apply_round(&mut state, Move::Rock, Move::Scissors);
    for _ in 0..3 {
        apply_round(&mut state, Move::Rock, Move::Paper);
    }
    assert_eq!(match_result(&state), None);

    set_best_of(&mut state, Some(1)).unwrap();
    assert!(state.is_complete());
    assert_eq!(state.winner(), Some(Side::Second));
    assert_eq!(match_result(&state), Some(MatchResult::Winner(Side::Second)));
}

#[test]
fn test_shrinking_best_of_with_level_scores_is_draw() {
    let mut state = MatchState::new();
    for _ in 0..2 {
        apply_round(&mut state, Move::Paper, Move::Rock);
        apply_round(&mut state, Move::Paper, Move::Scissors);
    }
    assert_eq!(state.first_score(), 2);
    assert_eq!(state.second_score(), 2);

    set_best_of(&mut state, Some(1)).unwrap();
    assert!(state.is_complete());
    assert_eq!(state.winner(), None);

    let result = match_result(&state).unwrap();
    assert_eq!(result, MatchResult::Draw);
    assert!(!result.is_winner(Side::First));
    assert!(!result.is_winner(Side::Second));
}

// =============================================================================
// Restart / Reset
// =============================================================================

#[test]
fn test_restart_preserves_target() {
    let mut state = MatchState::new();
    set_best_of(&mut state, Some(5)).unwrap();
    for _ in 0..3 {
        apply_round(&mut state, Move::Rock, Move::Scissors);
    }

    let restarted = restart_match(&state);
    assert_eq!(restarted.first_score(), 0);
    assert_eq!(restarted.second_score(), 0);
    assert_eq!(restarted.tie_count(), 0);
    assert!(restarted.history().is_empty());
    assert_eq!(restarted.target(), Some(3));
    assert!(!restarted.is_complete());
}

#[test]
fn test_reset_all_clears_target() {
    let mut state = MatchState::new();
    set_best_of(&mut state, Some(5)).unwrap();
    apply_round(&mut state, Move::Rock, Move::Rock);

    let reset = reset_all(&state);
    assert_eq!(reset.tie_count(), 0);
    assert!(reset.history().is_empty());
    assert_eq!(reset.target(), None);
    assert_eq!(reset.best_of(), None);
}

#[test]
fn test_snapshot_is_independent() {
    let mut state = MatchState::new();
    apply_round(&mut state, Move::Rock, Move::Paper);

    let snapshot = state.clone();
    apply_round(&mut state, Move::Rock, Move::Paper);

    assert_eq!(snapshot.history().len(), 1);
    assert_eq!(state.history().len(), 2);
}
