//! Playing whole games between agents.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Card, GameRng, PlayerColor, Result, SorryError, MAX_PLAYERS};
use crate::game::Sorry;
use crate::rules::RuleConfig;

use super::agent::Agent;

/// One seat at the table: a color and who plays it.
pub struct Seat<'a> {
    pub color: PlayerColor,
    pub agent: &'a mut dyn Agent,
}

impl<'a> Seat<'a> {
    pub fn new(color: PlayerColor, agent: &'a mut dyn Agent) -> Self {
        Self { color, agent }
    }
}

/// Result of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: PlayerColor,
    /// Actions taken by all players.
    pub total_actions: u32,
    /// Turns played; fewer than `total_actions` when Twos grant extra turns.
    pub turns: u32,
}

/// Play one game to the end. Seats move in the order given.
///
/// Card draws come from `rng`; agents bring their own randomness.
pub fn play_game(
    seats: &mut [Seat<'_>],
    rules: RuleConfig,
    rng: &mut GameRng,
) -> Result<GameRecord> {
    let colors: SmallVec<[PlayerColor; MAX_PLAYERS]> = seats.iter().map(|s| s.color).collect();
    let mut game = Sorry::new(&colors, rules)?;
    game.draw_random_starting_cards(rng)?;

    let mut turns = 0;
    while !game.game_done() {
        let mover = game.player_turn();
        let seat = seats
            .iter_mut()
            .find(|s| s.color == mover)
            .ok_or(SorryError::UnknownPlayer { color: mover })?;

        let action = seat.agent.choose_action(&game)?;
        log::debug!("{mover} ({}) plays {action}", seat.agent.name());
        game.do_action(&action, rng)?;

        if !(rules.two_grants_extra_turn && action.card() == Card::Two) {
            turns += 1;
        }
    }

    let winner = game.winner().ok_or(SorryError::GameNotFinished)?;
    Ok(GameRecord {
        winner,
        total_actions: game.total_action_count(),
        turns,
    })
}

/// Play `games` games with the same seats and count wins per color.
///
/// Each game deals from its own fork of `rng`, so game `n` sees the same
/// cards however long the earlier games ran. Colors that never win are
/// absent from the map.
pub fn play_series(
    seats: &mut [Seat<'_>],
    rules: RuleConfig,
    games: u32,
    rng: &mut GameRng,
) -> Result<FxHashMap<PlayerColor, u32>> {
    let mut wins = FxHashMap::default();
    for index in 0..games {
        let record = play_game(seats, rules, &mut rng.fork())?;
        log::info!(
            "game {}/{games}: {} wins after {} actions",
            index + 1,
            record.winner,
            record.total_actions
        );
        *wins.entry(record.winner).or_insert(0) += 1;
    }
    Ok(wins)
}
