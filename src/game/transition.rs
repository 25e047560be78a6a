//! Applying an action: piece movement, card replacement, the shared-square
//! invariant and turn advance.

use crate::core::{Action, Card, GameRng, Result, SorryError};
use crate::rules::board::{self, HOME, PIECES_PER_PLAYER, START};
use crate::rules::DiscardTiming;

use super::state::Sorry;

impl Sorry {
    /// Apply an action for the player to move.
    ///
    /// Moves the named pieces (sliding and bumping opponents as needed),
    /// replaces the played card with a random draw, bumps the action count
    /// and passes the turn. The action is assumed to come from
    /// [`Sorry::get_actions`] on this state; only the card and piece index
    /// are validated up front.
    ///
    /// # Errors
    ///
    /// - `HandsNotDealt` if any seat has no hand yet.
    /// - `CardNotInHand` if the mover does not hold the card.
    /// - `PieceCollision` if two pieces end up sharing a square. This is a
    ///   move-generation defect and the state is left as it was after the move.
    pub fn do_action(&mut self, action: &Action, rng: &mut GameRng) -> Result<()> {
        self.require_hands("do_action")?;
        let card = action.card();
        let slot = self.current_player().card_slot(card).ok_or(SorryError::CardNotInHand {
            player: self.player_turn(),
            card,
        })?;

        match *action {
            Action::Discard { .. } => {}
            Action::SingleMove { piece, destination, .. } => {
                check_piece(piece)?;
                self.move_piece(piece, destination);
            }
            Action::DoubleMove {
                first_piece,
                first_destination,
                second_piece,
                second_destination,
                ..
            } => {
                check_piece(first_piece)?;
                check_piece(second_piece)?;
                self.move_piece(first_piece, first_destination);
                self.move_piece(second_piece, second_destination);
            }
            Action::Swap { piece, destination, .. } => {
                check_piece(piece)?;
                self.swap_with_opponent(piece, destination);
                self.move_piece(piece, destination);
            }
        }

        self.replace_card(slot, card, rng)?;
        self.action_count += 1;

        if let Err(err) = self.check_no_shared_squares(action) {
            log::error!("{err}\nstate: {}", self.to_string_revealed());
            return Err(err);
        }

        self.advance_turn(card);
        Ok(())
    }

    /// Move one of the mover's pieces to `destination`, apply any slide, and
    /// send every opponent piece landed on or slid over back to start.
    fn move_piece(&mut self, piece: usize, destination: u8) {
        let mover = self.turn;
        let color = self.players[mover].color;
        let rest = board::position_after_slide(destination);

        for square in (destination..=rest).filter_map(|pos| board::to_track(color, pos)) {
            for (index, player) in self.players.iter_mut().enumerate() {
                if index == mover {
                    continue;
                }
                let opponent = player.color;
                for pos in player.positions.iter_mut() {
                    if board::to_track(opponent, *pos) == Some(square) {
                        log::trace!("{color} bumps {opponent} from square {square}");
                        *pos = START;
                    }
                }
            }
        }

        self.players[mover].positions[piece] = rest;
    }

    /// Send the opponent piece on `destination` to the square `piece` is
    /// leaving.
    fn swap_with_opponent(&mut self, piece: usize, destination: u8) {
        let mover = self.turn;
        let color = self.players[mover].color;
        let vacated = self.players[mover].positions[piece];

        for (index, player) in self.players.iter_mut().enumerate() {
            if index == mover {
                continue;
            }
            let opponent = player.color;
            for pos in player.positions.iter_mut() {
                if board::translate(opponent, color, *pos) == Some(destination) {
                    *pos = board::translate(color, opponent, vacated).unwrap_or(START);
                }
            }
        }
    }

    fn replace_card(&mut self, slot: usize, card: Card, rng: &mut GameRng) -> Result<()> {
        let mover = self.turn;
        match self.rules.discard_timing {
            DiscardTiming::BeforeReshuffle => {
                self.deck.discard(card)?;
                self.draw_into(mover, slot, rng)?;
            }
            DiscardTiming::AfterReshuffle => {
                self.draw_into(mover, slot, rng)?;
                self.deck.discard(card)?;
            }
        }
        self.players[mover].hand.sort_unstable();
        Ok(())
    }

    /// No two pieces may share a square other than start or home.
    ///
    /// Loop squares are compared across all colors; safety squares only
    /// within one color.
    fn check_no_shared_squares(&self, action: &Action) -> Result<()> {
        let pieces = || {
            self.players.iter().flat_map(|p| {
                p.positions
                    .iter()
                    .enumerate()
                    .map(move |(piece, &pos)| (p.color, piece, pos))
            })
        };

        for (i, (first_player, first_piece, first_pos)) in pieces().enumerate() {
            if first_pos == START || first_pos == HOME {
                continue;
            }
            for (second_player, second_piece, second_pos) in pieces().skip(i + 1) {
                let shared = if first_player == second_player {
                    first_pos == second_pos
                } else {
                    let track = board::to_track(first_player, first_pos);
                    track.is_some() && track == board::to_track(second_player, second_pos)
                };
                if shared {
                    return Err(SorryError::PieceCollision {
                        first_player,
                        first_piece,
                        second_player,
                        second_piece,
                        square: first_pos,
                        action: *action,
                    });
                }
            }
        }
        Ok(())
    }

    fn advance_turn(&mut self, card: Card) {
        if self.rules.two_grants_extra_turn && card == Card::Two {
            return;
        }
        self.turn = (self.turn + 1) % self.players.len();
    }
}

#[inline]
fn check_piece(piece: usize) -> Result<()> {
    if piece < PIECES_PER_PLAYER {
        Ok(())
    } else {
        Err(SorryError::InvalidPiece { piece })
    }
}
