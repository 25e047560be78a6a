//! Legal-action generation for the player to move.
//!
//! Per distinct card value in hand:
//! - a plain move of every piece by the card's distance (Four goes back)
//! - One and Two can bring a piece out of start
//! - Ten can also go back one
//! - Seven can be split 4/3, 5/2 or 6/1 across two pieces
//! - with opponents at the board, Sorry bumps an opponent from start and
//!   Eleven can swap with an opponent
//!
//! If none of these is legal the player must discard one card.

use crate::core::{Action, Card, Result};
use crate::rules::board::{self, HOME, PIECES_PER_PLAYER, START, START_EXIT};

use super::state::{PlayerState, Sorry};

/// Expected upper bound on the action count of a typical position.
const TYPICAL_ACTION_COUNT: usize = 60;

impl Sorry {
    /// Every legal action for the player to move.
    ///
    /// Duplicate card values in hand produce their moves once. Empty only
    /// when the game is over.
    pub fn get_actions(&self) -> Result<Vec<Action>> {
        self.require_hands("get_actions")?;
        if self.game_done() {
            return Ok(Vec::new());
        }

        let hand = self.current_player().hand();
        let mut actions = Vec::with_capacity(TYPICAL_ACTION_COUNT);
        for (i, &card) in hand.iter().enumerate() {
            if hand[..i].contains(&card) {
                continue;
            }
            self.add_actions_for_card(card, &mut actions);
        }

        if actions.is_empty() {
            for (i, &card) in hand.iter().enumerate() {
                if !hand[..i].contains(&card) {
                    actions.push(Action::Discard { card });
                }
            }
        }
        Ok(actions)
    }

    fn add_actions_for_card(&self, card: Card, actions: &mut Vec<Action>) {
        let me = self.current_player();

        if card != Card::Sorry || self.rules.sorry_moves_forward_four {
            self.add_single_moves(me, card, card.move_distance(), actions);
        }

        if matches!(card, Card::One | Card::Two) && !me.positions.contains(&START_EXIT) {
            // Pieces in start are interchangeable; one exit action covers them all.
            if let Some(piece) = me.positions.iter().position(|&p| p == START) {
                actions.push(Action::SingleMove { card, piece, destination: START_EXIT });
            }
        }

        if card == Card::Ten {
            self.add_single_moves(me, card, -1, actions);
        }

        if card == Card::Seven {
            for first_distance in 4..7 {
                let second_distance = 7 - first_distance;
                for first_piece in 0..PIECES_PER_PLAYER {
                    for second_piece in 0..PIECES_PER_PLAYER {
                        if first_piece == second_piece {
                            continue;
                        }
                        let destinations = double_move_destinations(
                            me,
                            first_piece,
                            first_distance,
                            second_piece,
                            second_distance,
                        );
                        if let Some((first_destination, second_destination)) = destinations {
                            actions.push(Action::DoubleMove {
                                card,
                                first_piece,
                                first_destination,
                                second_piece,
                                second_destination,
                            });
                        }
                    }
                }
            }
        }

        if self.players.len() > 1 {
            match card {
                Card::Sorry => self.add_sorry_actions(me, actions),
                Card::Eleven => self.add_swap_actions(me, actions),
                _ => {}
            }
        }
    }

    fn add_single_moves(
        &self,
        me: &PlayerState,
        card: Card,
        distance: i8,
        actions: &mut Vec<Action>,
    ) {
        // No duplicates: own pieces never share a square outside start and
        // home, and neither of those can move.
        for piece in 0..PIECES_PER_PLAYER {
            if let Some(destination) = single_move_destination(me, piece, distance) {
                actions.push(Action::SingleMove { card, piece, destination });
            }
        }
    }

    /// Replace any opponent piece on the loop with a piece from start.
    fn add_sorry_actions(&self, me: &PlayerState, actions: &mut Vec<Action>) {
        let Some(piece) = me.positions.iter().position(|&p| p == START) else {
            return;
        };
        for destination in self.opponent_squares(me) {
            if !slide_blocked(me, destination, &[piece]) {
                actions.push(Action::SingleMove { card: Card::Sorry, piece, destination });
            }
        }
    }

    /// Trade places between an own piece and an opponent piece, both on the loop.
    fn add_swap_actions(&self, me: &PlayerState, actions: &mut Vec<Action>) {
        for piece in 0..PIECES_PER_PLAYER {
            if !board::is_on_track(me.positions[piece]) {
                continue;
            }
            for destination in self.opponent_squares(me) {
                if !slide_blocked(me, destination, &[piece]) {
                    actions.push(Action::Swap { card: Card::Eleven, piece, destination });
                }
            }
        }
    }

    /// Loop squares held by opponents, in `me`'s frame.
    fn opponent_squares<'a>(&'a self, me: &'a PlayerState) -> impl Iterator<Item = u8> + 'a {
        self.players
            .iter()
            .filter(move |p| p.color != me.color)
            .flat_map(move |p| {
                p.positions
                    .iter()
                    .filter_map(move |&pos| board::translate(p.color, me.color, pos))
            })
    }
}

/// Destination of moving one piece `distance` squares, if legal.
fn single_move_destination(me: &PlayerState, piece: usize, distance: i8) -> Option<u8> {
    let from = me.positions[piece];
    if from == START || from == HOME {
        return None;
    }
    let raw = i16::from(from) + i16::from(distance);
    if raw > i16::from(HOME) {
        return None;
    }
    let destination = board::wrap(raw);
    if destination == HOME {
        return Some(destination);
    }
    if me.positions.contains(&destination) {
        return None;
    }
    if slide_blocked(me, destination, &[piece]) {
        return None;
    }
    Some(destination)
}

/// Destinations of a split Seven, if legal.
fn double_move_destinations(
    me: &PlayerState,
    first_piece: usize,
    first_distance: u8,
    second_piece: usize,
    second_distance: u8,
) -> Option<(u8, u8)> {
    let first_from = me.positions[first_piece];
    let second_from = me.positions[second_piece];
    if first_from == START || second_from == START || first_from == HOME || second_from == HOME {
        return None;
    }
    let first_raw = i16::from(first_from) + i16::from(first_distance);
    let second_raw = i16::from(second_from) + i16::from(second_distance);
    if first_raw > i16::from(HOME) || second_raw > i16::from(HOME) {
        return None;
    }
    let first_to = board::wrap(first_raw);
    let second_to = board::wrap(second_raw);
    if first_to == second_to && first_to != HOME {
        return None;
    }

    let movers = [first_piece, second_piece];
    let lands_on = |to: u8, p: u8| to != HOME && p == to;
    let lands_on_bystander = me.positions.iter().enumerate().any(|(i, &p)| {
        !movers.contains(&i) && (lands_on(first_to, p) || lands_on(second_to, p))
    });
    if lands_on_bystander {
        return None;
    }
    if slide_blocked(me, first_to, &movers) || slide_blocked(me, second_to, &movers) {
        return None;
    }

    // A mover sitting on the other's slide both before and after its own
    // move would be slid over.
    let in_the_way = |slide_from: u8, before: u8, after: u8| {
        let squares = board::slide_squares(slide_from);
        squares.contains(&before) && squares.contains(&after)
    };
    if in_the_way(first_to, second_from, second_to) || in_the_way(second_to, first_from, first_to) {
        return None;
    }

    let first_rest = board::position_after_slide(first_to);
    let second_rest = board::position_after_slide(second_to);
    if first_rest == second_rest && first_rest != HOME {
        return None;
    }
    Some((first_to, second_to))
}

/// Check if landing on `destination` would slide over one of `me`'s own
/// pieces other than `movers`.
fn slide_blocked(me: &PlayerState, destination: u8, movers: &[usize]) -> bool {
    board::slide_squares(destination).any(|square| {
        me.positions
            .iter()
            .enumerate()
            .any(|(i, &p)| !movers.contains(&i) && p == square)
    })
}
