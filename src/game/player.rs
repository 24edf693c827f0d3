use serde::{Deserialize, Serialize};

use super::cards::Card;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: String,
    cards: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(id: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id: id.into(),
            cards,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub(crate) fn deal(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards for every requested identifier, or `None` unless the hand
    /// holds them all. A repeated identifier needs a second copy. No
    /// partial result, no side effect.
    pub fn get_all(&self, card_ids: &[&str]) -> Option<Vec<Card>> {
        let mut remaining: Vec<&Card> = self.cards.iter().collect();
        let mut found = Vec::with_capacity(card_ids.len());
        for id in card_ids {
            let index = remaining.iter().position(|card| card.name() == *id)?;
            found.push(*remaining.swap_remove(index));
        }
        Some(found)
    }

    /// Removes every card whose identifier is requested, preserving the
    /// order of the rest. Identifiers not in the hand are a no-op.
    pub fn remove(&mut self, card_ids: &[&str]) {
        self.cards
            .retain(|card| !card_ids.contains(&card.name().as_str()));
    }
}
