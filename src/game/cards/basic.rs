use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
    Clubs = 2,
    Diamonds = 3,
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Hearts => "Hearts",
                Suit::Spades => "Spades",
                Suit::Clubs => "Clubs",
                Suit::Diamonds => "Diamonds",
            }
        )
    }
}

/// Face values in trumping order: threes are low, twos are high.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Face {
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
    Two = 13,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Face::Three => "3",
                Face::Four => "4",
                Face::Five => "5",
                Face::Six => "6",
                Face::Seven => "7",
                Face::Eight => "8",
                Face::Nine => "9",
                Face::Ten => "10",
                Face::Jack => "Jack",
                Face::Queen => "Queen",
                Face::King => "King",
                Face::Ace => "Ace",
                Face::Two => "2",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Card {
    Suited { face: Face, suit: Suit },
    SmallJoker,
    BigJoker,
}

impl Card {
    pub fn new(face: Face, suit: Suit) -> Self {
        Card::Suited { face, suit }
    }

    /// Comparison rank used for ordinary trumping and hand sorting.
    pub fn rank(&self) -> u8 {
        match self {
            Card::Suited { face, .. } => *face as u8,
            Card::SmallJoker => 14,
            Card::BigJoker => 15,
        }
    }

    /// Rank used only when the card is played alone. The Five of Hearts is
    /// elevated above both jokers for single-card trumping.
    pub fn single_rank(&self) -> u8 {
        match self {
            Card::Suited {
                face: Face::Five,
                suit: Suit::Hearts,
            } => 16,
            _ => self.rank(),
        }
    }

    /// Rank used for straight adjacency. Jokers have none, so no straight
    /// can include one.
    pub fn straight_rank(&self) -> Option<u8> {
        match self {
            Card::Suited { face, .. } => Some(*face as u8),
            Card::SmallJoker | Card::BigJoker => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(*suit),
            Card::SmallJoker | Card::BigJoker => None,
        }
    }

    /// The card's unique human-readable identifier, e.g. `"3 of Hearts"`.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.suit().cmp(&other.suit()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { face, suit } => write!(f, "{} of {}", face, suit),
            Card::SmallJoker => write!(f, "Small Joker"),
            Card::BigJoker => write!(f, "Big Joker"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card: {0}")]
pub struct UnknownCard(pub String);

/// The fixed 54-card deck (13 faces x 4 suits plus two jokers) with lookup
/// by card identifier. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    by_id: HashMap<String, Card>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(54);
        for suit in Suit::iter() {
            for face in Face::iter() {
                cards.push(Card::new(face, suit));
            }
        }
        cards.push(Card::SmallJoker);
        cards.push(Card::BigJoker);

        let by_id = cards.iter().map(|card| (card.name(), *card)).collect();
        Self { cards, by_id }
    }

    /// The full deck in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Result<Card, UnknownCard> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| UnknownCard(id.to_string()))
    }

    pub fn get_all(&self, ids: &[&str]) -> Result<Vec<Card>, UnknownCard> {
        ids.iter().map(|id| self.get(id)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
