use std::collections::HashSet;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::cards::{Card, Catalog, Face, Suit};
use super::player::Player;
use super::turn::{Turn, TurnError};

/// Whoever is dealt this card makes the first play of the game.
const STARTING_CARD: Card = Card::Suited {
    face: Face::Three,
    suit: Suit::Hearts,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game has already completed")]
    GameAlreadyComplete,
    #[error("a game needs at least two uniquely named players")]
    InvalidPlayers,
    #[error("turn error: {0}")]
    Turn(TurnError),
}

/// A full game: deals the deck, then runs turns until only one player
/// still holds cards. The first player to empty their hand is the winner;
/// the last player left holding cards is the loser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    players: Vec<Player>,
    current_turn: Turn,
    previous_turn: Option<Turn>,
    winner: Option<usize>,
}

impl Game {
    /// Full-state constructor; skips dealing. `starting` indexes `players`.
    pub fn new(players: Vec<Player>, starting: usize) -> Self {
        Self {
            players,
            current_turn: Turn::new(starting),
            previous_turn: None,
            winner: None,
        }
    }

    /// Deals the whole catalog round-robin and hands control to whoever
    /// drew the 3 of Hearts.
    pub fn new_game(catalog: &Catalog, player_ids: &[&str]) -> Result<Self, GameError> {
        let unique: HashSet<&str> = player_ids.iter().copied().collect();
        if player_ids.len() < 2 || unique.len() != player_ids.len() {
            return Err(GameError::InvalidPlayers);
        }

        let mut players: Vec<Player> = player_ids.iter().map(|id| Player::new(*id)).collect();

        let mut deck = catalog.cards().to_vec();
        deck.shuffle(&mut rand::rng());

        let mut starting = None;
        for (position, card) in deck.into_iter().enumerate() {
            let index = position % players.len();
            if card == STARTING_CARD {
                starting = Some(index);
            }
            players[index].deal(card);
        }
        let starting = starting.expect("no player was dealt the starting card");

        info!(starting = players[starting].id(), "dealt a new game");
        Ok(Self::new(players, starting))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_turn(&self) -> &Turn {
        &self.current_turn
    }

    /// The just-finished turn, retained for diagnostics.
    pub fn previous_turn(&self) -> Option<&Turn> {
        self.previous_turn.as_ref()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    /// The last player still holding cards, defined once exactly one
    /// remains. Derived, never stored.
    pub fn loser(&self) -> Option<&Player> {
        self.loser_index().map(|index| &self.players[index])
    }

    pub fn is_done(&self) -> bool {
        self.loser_index().is_some()
    }

    fn loser_index(&self) -> Option<usize> {
        let mut holders = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.has_cards());
        match (holders.next(), holders.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    pub fn play(&mut self, player_id: &str, card_ids: &[&str]) -> Result<(), GameError> {
        if self.is_done() {
            return Err(GameError::GameAlreadyComplete);
        }

        self.current_turn
            .play(&mut self.players, player_id, card_ids)
            .map_err(GameError::Turn)?;

        // First player to empty their hand wins the game
        if self.winner.is_none() {
            let actor = self
                .players
                .iter()
                .position(|player| player.id() == player_id)
                .expect("acting player was validated by the turn");
            if !self.players[actor].has_cards() {
                info!(winner = player_id, "game won");
                self.winner = Some(actor);
            }
        }

        if self.current_turn.is_complete() && !self.is_done() {
            self.start_new_turn();
        }
        Ok(())
    }

    fn start_new_turn(&mut self) {
        let winner = self
            .current_turn
            .winner()
            .expect("finished turn has no winner");

        // The turn winner leads the next turn, or failing that the first
        // player after them still holding cards.
        let count = self.players.len();
        let starting = (0..count)
            .map(|offset| (winner + offset) % count)
            .find(|&index| self.players[index].has_cards())
            .expect("no player with cards to start the next turn");

        debug!(starting = self.players[starting].id(), "starting a new turn");
        self.previous_turn = Some(std::mem::replace(
            &mut self.current_turn,
            Turn::new(starting),
        ));
    }
}
