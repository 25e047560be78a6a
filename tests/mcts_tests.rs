//! MCTS integration tests on real Sorry! positions.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sorry_mcts::core::{Action, Card, GameRng, PlayerColor, SorryError};
use sorry_mcts::game::Sorry;
use sorry_mcts::mcts::{
    Budget, ExplicitTerminator, IterationLimit, MctsConfig, Objective, SorryMcts,
};
use sorry_mcts::rules::RuleConfig;

/// One piece a Two away from home; the alternative is a Four backwards.
const ENDGAME_HAND: [Card; 5] = [Card::Two, Card::Four, Card::Three, Card::Five, Card::Eight];
const ENDGAME_POSITIONS: [u8; 4] = [66, 66, 66, 64];

/// Single-player opening with several legal moves.
fn opening() -> Sorry {
    let mut game = Sorry::default();
    let hand = [Card::One, Card::Two, Card::Four, Card::Five, Card::Eight];
    game.set_starting_cards(PlayerColor::Green, hand).unwrap();
    game
}

// =============================================================================
// Best Action Tests
// =============================================================================

#[test]
fn test_finishing_move_minimizes_actions() {
    let mut game = Sorry::default();
    game.set_starting_cards(PlayerColor::Green, ENDGAME_HAND).unwrap();
    game.set_starting_positions(PlayerColor::Green, ENDGAME_POSITIONS).unwrap();

    let search = SorryMcts::new(MctsConfig::default());
    search.run(&game, Budget::Iterations(200)).unwrap();

    let finish = Action::SingleMove { card: Card::Two, piece: 3, destination: 66 };
    assert_eq!(search.pick_best_action(), Ok(finish));

    let scores = search.action_scores();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].action, finish);
    assert_eq!(scores[0].average_action_count, 1.0);
    assert!(scores[1].average_action_count > 1.0);
}

#[test]
fn test_finishing_move_maximizes_wins() {
    let colors = [PlayerColor::Green, PlayerColor::Blue];
    let mut game = Sorry::new(&colors, RuleConfig::default()).unwrap();
    game.set_starting_cards(PlayerColor::Green, ENDGAME_HAND).unwrap();
    game.set_starting_positions(PlayerColor::Green, ENDGAME_POSITIONS).unwrap();
    game.draw_random_starting_cards(&mut GameRng::new(8)).unwrap();

    let search = SorryMcts::new(MctsConfig::default());
    assert_eq!(search.config().objective_for(game.player_count()), Objective::MaximizeWins);
    search.run(&game, Budget::Iterations(200)).unwrap();

    let finish = Action::SingleMove { card: Card::Two, piece: 3, destination: 66 };
    assert_eq!(search.pick_best_action(), Ok(finish));
    let (_, rate) = search.win_rates()[0];
    assert_eq!(rate, 1.0);
}

#[test]
fn test_objective_override() {
    let mut game = Sorry::default();
    game.set_starting_cards(PlayerColor::Green, ENDGAME_HAND).unwrap();
    game.set_starting_positions(PlayerColor::Green, ENDGAME_POSITIONS).unwrap();

    // Every solitaire rollout is a win, so all actions tie and the first expanded wins.
    let search = SorryMcts::new(MctsConfig::default().with_objective(Objective::MaximizeWins));
    search.run(&game, Budget::Iterations(50)).unwrap();
    assert!(search.win_rates().iter().all(|(_, rate)| *rate == 1.0));
    assert_eq!(
        search.pick_best_action(),
        Ok(Action::SingleMove { card: Card::Two, piece: 3, destination: 66 })
    );
}

// =============================================================================
// Budget Tests
// =============================================================================

#[test]
fn test_iteration_budget() {
    let search = SorryMcts::new(MctsConfig::default());
    search.run(&opening(), Budget::Iterations(120)).unwrap();
    assert_eq!(search.iteration_count(), 120);
    assert_eq!(search.stats().iterations, 120);
}

#[test]
fn test_custom_condition() {
    let search = SorryMcts::new(MctsConfig::default());
    let mut limit = IterationLimit::new(40);
    search.run_until(&opening(), &mut limit).unwrap();
    assert_eq!(search.iteration_count(), 40);
}

#[test]
fn test_time_budget() {
    let search = SorryMcts::new(MctsConfig::default());
    search.run(&opening(), Budget::Time(Duration::from_millis(30))).unwrap();

    let stats = search.stats();
    assert!(stats.iterations > 0);
    assert!(stats.time_us >= 25_000, "stopped after {}us", stats.time_us);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_explicit_terminator_stops_search() {
    let search = Arc::new(SorryMcts::new(MctsConfig::default()));
    let terminator = Arc::new(ExplicitTerminator::new());

    let worker = {
        let search = Arc::clone(&search);
        let mut condition = Arc::clone(&terminator);
        thread::spawn(move || search.run_until(&opening(), &mut condition))
    };

    while search.iteration_count() < 10 {
        thread::yield_now();
    }
    terminator.set_done(true);
    worker.join().unwrap().unwrap();

    assert!(terminator.is_done());
    assert!(search.iteration_count() >= 10);
    assert!(search.pick_best_action().is_ok());
}

#[test]
fn test_reads_during_search() {
    let search = Arc::new(SorryMcts::new(MctsConfig::default().with_yield_interval(10)));

    let worker = {
        let search = Arc::clone(&search);
        thread::spawn(move || search.run(&opening(), Budget::Iterations(2_000)))
    };

    let mut observed = 0;
    while !worker.is_finished() {
        let scores = search.action_scores();
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(&s.score)));
        observed = observed.max(search.iteration_count());
        thread::yield_now();
    }
    worker.join().unwrap().unwrap();

    assert!(observed <= 2_000);
    assert_eq!(search.iteration_count(), 2_000);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_same_seed_same_search() {
    let colors = [PlayerColor::Red, PlayerColor::Yellow];
    let mut game = Sorry::new(&colors, RuleConfig::default()).unwrap();
    game.draw_random_starting_cards(&mut GameRng::new(17)).unwrap();

    let config = MctsConfig::default().with_seed(12345);
    let first = SorryMcts::new(config.clone());
    let second = SorryMcts::new(config);
    first.run(&game, Budget::Iterations(100)).unwrap();
    second.run(&game, Budget::Iterations(100)).unwrap();

    assert_eq!(first.action_scores(), second.action_scores());
    assert_eq!(first.stats().nodes_expanded, second.stats().nodes_expanded);
}

#[test]
fn test_rerun_replaces_tree() {
    let search = SorryMcts::new(MctsConfig::default());
    search.run(&opening(), Budget::Iterations(60)).unwrap();
    search.run(&opening(), Budget::Iterations(30)).unwrap();

    let visits: u32 = search.action_scores().iter().map(|s| s.visits).sum();
    assert_eq!(visits, 30);
    assert_eq!(search.iteration_count(), 30);
}

#[test]
fn test_search_requires_dealt_hands() {
    let search = SorryMcts::new(MctsConfig::default());
    let game = Sorry::new(&[PlayerColor::Green, PlayerColor::Red], RuleConfig::default()).unwrap();
    assert!(matches!(
        search.run(&game, Budget::Iterations(5)),
        Err(SorryError::HandsNotDealt { .. })
    ));
}
