use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::cards::{Play, PlayKind};
use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("turn has already completed")]
    TurnAlreadyComplete,
    #[error("it is not the player's turn")]
    NotPlayersTurn,
    #[error("player does not have the cards")]
    PlayerLacksCards,
    #[error("cards do not form a playable combination")]
    InvalidCombination,
    #[error("cards do not trump previously played cards")]
    DoesNotTrumpPrevious,
}

/// One round of play: players act in rotation, each either trumping the
/// last play or passing, until everyone left holding cards has passed on
/// the standing play. Player hands are owned by the game and borrowed into
/// each `play` call; the turn tracks indices into that list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    current: usize,
    last_play: Option<Play>,
    passed: HashSet<usize>,
    winner: Option<usize>,
}

impl Turn {
    /// `current` is the player with control (makes the first play).
    pub fn new(current: usize) -> Self {
        Self {
            current,
            last_play: None,
            passed: HashSet::new(),
            winner: None,
        }
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn last_play(&self) -> Option<&Play> {
        self.last_play.as_ref()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether a player has passed since the last non-pass play.
    pub fn has_passed(&self, player: usize) -> bool {
        self.passed.contains(&player)
    }

    /// Players still holding cards, in rotation order starting just after
    /// the current player (the current player comes last).
    fn players_with_cards(&self, players: &[Player]) -> Vec<usize> {
        let count = players.len();
        (1..=count)
            .map(|offset| (self.current + offset) % count)
            .filter(|&index| players[index].has_cards())
            .collect()
    }

    pub fn play(
        &mut self,
        players: &mut [Player],
        player_id: &str,
        card_ids: &[&str],
    ) -> Result<(), TurnError> {
        if self.winner.is_some() {
            return Err(TurnError::TurnAlreadyComplete);
        }
        if players[self.current].id() != player_id {
            return Err(TurnError::NotPlayersTurn);
        }

        if card_ids.is_empty() {
            self.passed.insert(self.current);
            debug!(player = player_id, "passed");
        } else {
            let cards = players[self.current]
                .get_all(card_ids)
                .ok_or(TurnError::PlayerLacksCards)?;

            let candidate = Play::new(self.current, cards);
            if candidate.kind() == PlayKind::Invalid {
                return Err(TurnError::InvalidCombination);
            }
            if let Some(last) = &self.last_play {
                if !last.is_trumped_by(&candidate) {
                    return Err(TurnError::DoesNotTrumpPrevious);
                }
            }

            players[self.current].remove(card_ids);
            self.passed.clear();
            debug!(player = player_id, kind = ?candidate.kind(), "played");
            self.last_play = Some(candidate);
        }

        let remaining = self.players_with_cards(players);

        // The turn is won once every other player still holding cards has
        // passed on the standing play, or nobody else holds cards at all.
        if let Some(last) = &self.last_play {
            let owner = last.player();
            let everyone_else_passed = (0..players.len())
                .filter(|&index| index != owner && players[index].has_cards())
                .all(|index| self.passed.contains(&index));
            if everyone_else_passed || remaining.len() == 1 {
                debug!(winner = players[owner].id(), "turn won");
                self.winner = Some(owner);
                return Ok(());
            }
        }

        self.current = *remaining
            .first()
            .expect("a live turn always has a player with cards");
        Ok(())
    }
}
