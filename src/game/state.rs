//! Game state: deck, hands, piece positions and turn order.
//!
//! A `Sorry` value is a complete snapshot. It holds no heap indirection
//! beyond an inline `SmallVec` of at most four players, so the search can
//! copy it freely for every simulated branch.

use smallvec::SmallVec;

use crate::core::{Card, Deck, GameRng, PlayerColor, Result, SorryError, MAX_PLAYERS};
use crate::rules::board::{self, HAND_SIZE, HOME, PIECES_PER_PLAYER, START, START_EXIT};
use crate::rules::RuleConfig;

/// One seat at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub(crate) color: PlayerColor,
    /// Always kept sorted so equal hands compare equal.
    pub(crate) hand: [Card; HAND_SIZE],
    pub(crate) has_hand: bool,
    pub(crate) positions: [u8; PIECES_PER_PLAYER],
}

impl PlayerState {
    fn new(color: PlayerColor, rules: &RuleConfig) -> Self {
        let mut positions = [START; PIECES_PER_PLAYER];
        if rules.start_with_piece_out {
            positions[0] = START_EXIT;
        }
        Self {
            color,
            hand: [Card::One; HAND_SIZE],
            has_hand: false,
            positions,
        }
    }

    /// This seat's color.
    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The hand, sorted. Meaningless until [`PlayerState::has_hand`].
    #[must_use]
    pub fn hand(&self) -> &[Card; HAND_SIZE] {
        &self.hand
    }

    /// Check if starting cards have been dealt to this seat.
    #[must_use]
    pub fn has_hand(&self) -> bool {
        self.has_hand
    }

    /// Piece positions in this seat's own frame.
    #[must_use]
    pub fn positions(&self) -> &[u8; PIECES_PER_PLAYER] {
        &self.positions
    }

    /// Check if every piece is home.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.positions.iter().all(|&p| p == HOME)
    }

    pub(crate) fn card_slot(&self, card: Card) -> Option<usize> {
        self.hand.iter().position(|&c| c == card)
    }
}

/// Full game state for one to four players.
///
/// ## Example
///
/// ```
/// use sorry_mcts::core::GameRng;
/// use sorry_mcts::game::Sorry;
///
/// let mut rng = GameRng::new(42);
/// let mut game = Sorry::default();
/// game.draw_random_starting_cards(&mut rng).unwrap();
///
/// while !game.game_done() {
///     let actions = game.get_actions().unwrap();
///     let action = *rng.choose(&actions).unwrap();
///     game.do_action(&action, &mut rng).unwrap();
/// }
/// assert!(game.total_action_count() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct Sorry {
    pub(crate) rules: RuleConfig,
    pub(crate) deck: Deck,
    pub(crate) players: SmallVec<[PlayerState; MAX_PLAYERS]>,
    pub(crate) turn: usize,
    pub(crate) action_count: u32,
}

impl Default for Sorry {
    fn default() -> Self {
        Self::single_player(RuleConfig::default())
    }
}

impl Sorry {
    /// Create a game for the given seats, in turn order.
    ///
    /// The first listed color moves first.
    pub fn new(colors: &[PlayerColor], rules: RuleConfig) -> Result<Self> {
        if colors.is_empty() {
            return Err(SorryError::InvalidPlayers { reason: "no players" });
        }
        if colors.len() > MAX_PLAYERS {
            return Err(SorryError::InvalidPlayers { reason: "more than four players" });
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(SorryError::InvalidPlayers { reason: "duplicate color" });
            }
        }

        Ok(Self {
            rules,
            deck: Deck::new(),
            players: colors.iter().map(|&c| PlayerState::new(c, &rules)).collect(),
            turn: 0,
            action_count: 0,
        })
    }

    /// Create the solitaire variant: Green alone, racing to get home in as
    /// few actions as possible.
    #[must_use]
    pub fn single_player(rules: RuleConfig) -> Self {
        let mut players = SmallVec::new();
        players.push(PlayerState::new(PlayerColor::Green, &rules));
        Self {
            rules,
            deck: Deck::new(),
            players,
            turn: 0,
            action_count: 0,
        }
    }

    // === Setup ===

    /// Deal five random cards to every seat that has no hand yet.
    pub fn draw_random_starting_cards(&mut self, rng: &mut GameRng) -> Result<()> {
        for index in 0..self.players.len() {
            if self.players[index].has_hand {
                continue;
            }
            for slot in 0..HAND_SIZE {
                self.draw_into(index, slot, rng)?;
            }
            self.players[index].hand.sort_unstable();
            self.players[index].has_hand = true;
        }
        Ok(())
    }

    /// Force a known hand for one seat.
    ///
    /// The cards are taken from the live deck. If the seat already held a
    /// hand, those cards go to the discard pile first.
    pub fn set_starting_cards(
        &mut self,
        color: PlayerColor,
        cards: [Card; HAND_SIZE],
    ) -> Result<()> {
        let index = self.seat(color)?;
        for card in Card::ALL {
            let wanted = cards.iter().filter(|&&c| c == card).count();
            if wanted > self.deck.count_live(card) {
                return Err(SorryError::CardNotFound { card });
            }
        }

        if self.players[index].has_hand {
            for card in self.players[index].hand {
                self.deck.discard(card)?;
            }
        }
        for card in cards {
            self.deck.remove_specific_card(card)?;
        }

        let player = &mut self.players[index];
        player.hand = cards;
        player.hand.sort_unstable();
        player.has_hand = true;
        Ok(())
    }

    /// Place one seat's pieces.
    ///
    /// Rejects squares beyond home, slide starts, two own pieces on one
    /// square, and squares already held by an opponent.
    pub fn set_starting_positions(
        &mut self,
        color: PlayerColor,
        positions: [u8; PIECES_PER_PLAYER],
    ) -> Result<()> {
        let index = self.seat(color)?;
        for (i, &position) in positions.iter().enumerate() {
            if position > HOME {
                return Err(SorryError::InvalidStartingPosition { position, reason: "beyond home" });
            }
            if board::slide_length(position) != 0 {
                return Err(SorryError::InvalidStartingPosition {
                    position,
                    reason: "cannot start on a slide",
                });
            }
            if position != START && position != HOME && positions[..i].contains(&position) {
                return Err(SorryError::InvalidStartingPosition {
                    position,
                    reason: "two pieces on one square",
                });
            }
            if let Some(square) = board::to_track(color, position) {
                let taken = self
                    .players
                    .iter()
                    .filter(|p| p.color != color)
                    .flat_map(|p| p.positions.iter().map(move |&q| board::to_track(p.color, q)))
                    .any(|other| other == Some(square));
                if taken {
                    return Err(SorryError::InvalidStartingPosition {
                        position,
                        reason: "occupied by an opponent",
                    });
                }
            }
        }
        self.players[index].positions = positions;
        Ok(())
    }

    /// Make `color` the player to move.
    pub fn set_turn(&mut self, color: PlayerColor) -> Result<()> {
        self.turn = self.seat(color)?;
        Ok(())
    }

    // === Queries ===

    /// The rules this game is played under.
    #[must_use]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// The shared deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// All seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Color of the player to move.
    #[must_use]
    pub fn player_turn(&self) -> PlayerColor {
        self.players[self.turn].color
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.turn]
    }

    /// Look up a seat by color.
    pub fn player(&self, color: PlayerColor) -> Result<&PlayerState> {
        Ok(&self.players[self.seat(color)?])
    }

    /// A seat's hand, sorted.
    pub fn hand(&self, color: PlayerColor) -> Result<[Card; HAND_SIZE]> {
        Ok(self.player(color)?.hand)
    }

    /// A seat's piece positions in its own frame.
    pub fn piece_positions(&self, color: PlayerColor) -> Result<[u8; PIECES_PER_PLAYER]> {
        Ok(self.player(color)?.positions)
    }

    /// Number of actions applied so far, across all players.
    #[must_use]
    pub fn total_action_count(&self) -> u32 {
        self.action_count
    }

    /// Check if some player has brought every piece home.
    #[must_use]
    pub fn game_done(&self) -> bool {
        self.players.iter().any(PlayerState::is_finished)
    }

    /// The player who finished first, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.players.iter().find(|p| p.is_finished()).map(|p| p.color)
    }

    // === Internals ===

    pub(crate) fn seat(&self, color: PlayerColor) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.color == color)
            .ok_or(SorryError::UnknownPlayer { color })
    }

    pub(crate) fn require_hands(&self, operation: &'static str) -> Result<()> {
        if self.players.iter().all(|p| p.has_hand) {
            Ok(())
        } else {
            Err(SorryError::HandsNotDealt { operation })
        }
    }

    /// Draw into one hand slot, reshuffling the discards once the live pile
    /// runs dry.
    pub(crate) fn draw_into(&mut self, index: usize, slot: usize, rng: &mut GameRng) -> Result<()> {
        self.players[index].hand[slot] = self.deck.draw_random_card(rng)?;
        if self.deck.is_empty() {
            log::trace!("deck exhausted after {} actions, reshuffling", self.action_count);
            self.deck.reshuffle();
        }
        Ok(())
    }
}

/// States are equal when seats, hands, positions, turn and live deck match.
///
/// The action counter and rules are not part of the comparison.
impl PartialEq for Sorry {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.players == other.players && self.deck == other.deck
    }
}

impl Eq for Sorry {}
