//! Multi-player rules: shared track, bumping, Sorry and Eleven swaps.

use sorry_mcts::core::{Action, Card, GameRng, PlayerColor, SorryError};
use sorry_mcts::game::Sorry;
use sorry_mcts::rules::{board, RuleConfig};

const GREEN_HAND: [Card; 5] = [Card::Sorry, Card::Eleven, Card::Three, Card::Five, Card::Eight];

/// Green (to move) against one opponent, with Green holding `GREEN_HAND`.
fn green_vs(opponent: PlayerColor, green: [u8; 4], theirs: [u8; 4]) -> Sorry {
    let mut game = Sorry::new(&[PlayerColor::Green, opponent], RuleConfig::default()).unwrap();
    game.set_starting_cards(PlayerColor::Green, GREEN_HAND).unwrap();
    game.set_starting_positions(PlayerColor::Green, green).unwrap();
    game.set_starting_positions(opponent, theirs).unwrap();
    game.draw_random_starting_cards(&mut GameRng::new(5)).unwrap();
    game
}

fn green_vs_blue(green: [u8; 4], blue: [u8; 4]) -> Sorry {
    green_vs(PlayerColor::Blue, green, blue)
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_seat_validation() {
    assert!(matches!(
        Sorry::new(&[], RuleConfig::default()),
        Err(SorryError::InvalidPlayers { .. })
    ));
    let all = PlayerColor::ALL;
    let five = [all[0], all[1], all[2], all[3], all[0]];
    assert!(matches!(
        Sorry::new(&five, RuleConfig::default()),
        Err(SorryError::InvalidPlayers { .. })
    ));

    let game = Sorry::new(&all, RuleConfig::default()).unwrap();
    assert_eq!(game.player_count(), 4);
    assert_eq!(game.player_turn(), PlayerColor::Green);
}

#[test]
fn test_starting_squares_do_not_overlap() {
    let game = Sorry::new(&PlayerColor::ALL, RuleConfig::default()).unwrap();
    let squares: Vec<_> = game
        .players()
        .iter()
        .map(|p| board::to_track(p.color(), p.positions()[0]).unwrap())
        .collect();
    assert_eq!(squares, vec![2, 17, 32, 47]);
}

#[test]
fn test_turn_order_follows_seats() {
    let mut rng = GameRng::new(1);
    let colors = [PlayerColor::Yellow, PlayerColor::Red];
    let mut game = Sorry::new(&colors, RuleConfig::default()).unwrap();
    game.draw_random_starting_cards(&mut rng).unwrap();

    assert_eq!(game.player_turn(), PlayerColor::Yellow);
    let action = game.get_actions().unwrap()[0];
    game.do_action(&action, &mut rng).unwrap();
    assert_eq!(game.player_turn(), PlayerColor::Red);

    game.set_turn(PlayerColor::Yellow).unwrap();
    assert_eq!(game.player_turn(), PlayerColor::Yellow);
}

// =============================================================================
// Opponent Interaction
// =============================================================================

#[test]
fn test_sorry_targets_every_opponent_on_track() {
    // Blue's 5 and 40 are Green's 35 and 10; Blue's safety square is out of reach.
    let game = green_vs_blue([2, 0, 0, 0], [5, 40, 63, 0]);
    let sorry: Vec<_> = game
        .get_actions()
        .unwrap()
        .into_iter()
        .filter(|a| matches!(a, Action::SingleMove { card: Card::Sorry, piece: 1, .. }))
        .collect();

    assert_eq!(
        sorry,
        vec![
            Action::SingleMove { card: Card::Sorry, piece: 1, destination: 35 },
            Action::SingleMove { card: Card::Sorry, piece: 1, destination: 10 },
        ]
    );
}

#[test]
fn test_sorry_needs_a_piece_in_start() {
    let game = green_vs_blue([2, 20, 25, 30], [5, 0, 0, 0]);
    let actions = game.get_actions().unwrap();
    assert!(!actions
        .iter()
        .any(|a| matches!(a, Action::SingleMove { card: Card::Sorry, destination: 35, .. })));
}

#[test]
fn test_sorry_onto_slide_carries_the_mover() {
    let mut rng = GameRng::new(9);
    // Red's 59 is Green's 14, a slide start; Red's 1 (Green's 16) is swept too.
    let mut game = green_vs(PlayerColor::Red, [2, 0, 0, 0], [59, 1, 0, 0]);
    let action = Action::SingleMove { card: Card::Sorry, piece: 1, destination: 14 };
    assert!(game.get_actions().unwrap().contains(&action));

    game.do_action(&action, &mut rng).unwrap();
    assert_eq!(game.piece_positions(PlayerColor::Green).unwrap(), [2, 17, 0, 0]);
    assert_eq!(game.piece_positions(PlayerColor::Red).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn test_swap_trades_places() {
    let mut rng = GameRng::new(9);
    // Blue's 5 is Green's 35.
    let mut game = green_vs_blue([20, 0, 0, 0], [5, 0, 0, 0]);
    let swap = Action::Swap { card: Card::Eleven, piece: 0, destination: 35 };
    assert!(game.get_actions().unwrap().contains(&swap));

    game.do_action(&swap, &mut rng).unwrap();
    assert_eq!(game.piece_positions(PlayerColor::Green).unwrap(), [35, 0, 0, 0]);
    // Green's 20 is Blue's 50.
    assert_eq!(game.piece_positions(PlayerColor::Blue).unwrap(), [50, 0, 0, 0]);
    assert_eq!(game.player_turn(), PlayerColor::Blue);
}

#[test]
fn test_swap_needs_piece_on_track() {
    let game = green_vs_blue([0, 0, 63, 66], [5, 0, 0, 0]);
    assert!(!game.get_actions().unwrap().iter().any(|a| matches!(a, Action::Swap { .. })));
}

#[test]
fn test_landing_sends_opponent_home_to_start() {
    let mut rng = GameRng::new(9);
    // Green plays Five from 30 to Green's 35, where Blue's piece 0 sits.
    let mut game = green_vs_blue([30, 0, 0, 0], [5, 10, 0, 0]);
    let action = Action::SingleMove { card: Card::Five, piece: 0, destination: 35 };
    game.do_action(&action, &mut rng).unwrap();
    assert_eq!(game.piece_positions(PlayerColor::Blue).unwrap(), [0, 10, 0, 0]);
}

// =============================================================================
// Rule Variants
// =============================================================================

#[test]
fn test_two_extra_turn_variant() {
    let rules = RuleConfig::default().with_extra_turn_on_two(true);
    let mut game = Sorry::new(&[PlayerColor::Green, PlayerColor::Red], rules).unwrap();
    let hand = [Card::Two, Card::Two, Card::Three, Card::Five, Card::Eight];
    game.set_starting_cards(PlayerColor::Green, hand).unwrap();
    game.draw_random_starting_cards(&mut GameRng::new(1)).unwrap();

    let mut rng = GameRng::new(2);
    let two = Action::SingleMove { card: Card::Two, piece: 0, destination: 4 };
    game.do_action(&two, &mut rng).unwrap();
    assert_eq!(game.player_turn(), PlayerColor::Green);

    let three = Action::SingleMove { card: Card::Three, piece: 0, destination: 7 };
    game.do_action(&three, &mut rng).unwrap();
    assert_eq!(game.player_turn(), PlayerColor::Red);
}

#[test]
fn test_first_finisher_wins() {
    let mut rng = GameRng::new(3);
    let colors = [PlayerColor::Blue, PlayerColor::Yellow];
    let mut game = Sorry::new(&colors, RuleConfig::default()).unwrap();
    game.draw_random_starting_cards(&mut rng).unwrap();

    while !game.game_done() {
        let actions = game.get_actions().unwrap();
        let action = *rng.choose(&actions).unwrap();
        game.do_action(&action, &mut rng).unwrap();
    }

    let winner = game.winner().unwrap();
    assert!(game.player(winner).unwrap().is_finished());
    let finished = game.players().iter().filter(|p| p.is_finished()).count();
    assert_eq!(finished, 1);
}

#[test]
fn test_display_hides_other_hands() {
    let game = green_vs_blue([2, 0, 0, 0], [5, 0, 0, 0]);
    let text = game.to_string();
    assert!(text.starts_with("{Deck:35,Turn:Green,(Green:Three,Five,Eight,Eleven,Sorry|2,0,0,0)"));
    assert!(text.ends_with("(Blue:?|5,0,0,0)}"));
    assert!(!game.to_string_revealed().contains('?'));
}
