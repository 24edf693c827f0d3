use serde::{Deserialize, Serialize};

use super::basic::Card;

/// Every playable combination shape. Sister runs and straights carry the
/// number of groups/cards they span; equality therefore means "same
/// category and same multiple", which is exactly the trumping precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayKind {
    Invalid,
    Single,
    Pair,
    Triple,
    PairSisters { multiple: usize },
    TripleSisters { multiple: usize },
    Straight { multiple: usize },
    FullHouse,
    Bomb,
    StraightFlush,
}

impl PlayKind {
    pub fn multiple(&self) -> usize {
        match self {
            PlayKind::PairSisters { multiple }
            | PlayKind::TripleSisters { multiple }
            | PlayKind::Straight { multiple } => *multiple,
            _ => 1,
        }
    }

    /// Bombs and straight flushes beat any other combination outright.
    pub fn is_unconditional(&self) -> bool {
        matches!(self, PlayKind::Bomb | PlayKind::StraightFlush)
    }
}

fn same_rank(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.rank() == cards[0].rank())
}

fn same_suit(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.suit() == cards[0].suit())
}

/// Every card must carry a straight rank (jokers do not), and the sorted
/// ranks must each be one more than the previous.
fn is_straight(cards: &[Card]) -> bool {
    let mut ranks = Vec::with_capacity(cards.len());
    for card in cards {
        match card.straight_rank() {
            Some(rank) => ranks.push(rank),
            None => return false,
        }
    }
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Sister runs: contiguous groups of `group` cards, each group one rank,
/// the group ranks themselves consecutive.
fn is_sisters(cards: &[Card], group: usize) -> bool {
    if cards.len() % group != 0 {
        return false;
    }
    let leads: Vec<Card> = cards.chunks(group).map(|chunk| chunk[0]).collect();
    cards.chunks(group).all(same_rank) && is_straight(&leads)
}

// Assumption: five cards sorted by rank, either XX YYY or XXX YY.
fn is_full_house(cards: &[Card]) -> bool {
    (same_rank(&cards[..2]) && same_rank(&cards[2..]))
        || (same_rank(&cards[..3]) && same_rank(&cards[3..]))
}

// The middle card of a sorted full house always belongs to the triple.
fn full_house_rank(cards: &[Card]) -> u8 {
    cards[2].rank()
}

fn classify(cards: &[Card]) -> PlayKind {
    match cards.len() {
        0 => PlayKind::Invalid,
        1 => PlayKind::Single,
        2 if same_rank(cards) => PlayKind::Pair,
        3 if same_rank(cards) => PlayKind::Triple,
        4 if is_sisters(cards, 2) => PlayKind::PairSisters { multiple: 2 },
        4 if same_rank(cards) => PlayKind::Bomb,
        5 if is_straight(cards) && same_suit(cards) => PlayKind::StraightFlush,
        5 if is_straight(cards) => PlayKind::Straight { multiple: 5 },
        5 if is_full_house(cards) => PlayKind::FullHouse,
        n if n > 5 && is_sisters(cards, 2) => PlayKind::PairSisters { multiple: n / 2 },
        n if n > 5 && is_sisters(cards, 3) => PlayKind::TripleSisters { multiple: n / 3 },
        n if n > 5 && is_straight(cards) => PlayKind::Straight { multiple: n },
        _ => PlayKind::Invalid,
    }
}

/// A classified combination: the acting player (index into the game's
/// player list), the cards sorted ascending by comparison rank, and the
/// derived kind. Classification is total; illegal sets come back as
/// `PlayKind::Invalid` so callers can reject them before mutating state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    player: usize,
    cards: Vec<Card>,
    kind: PlayKind,
}

impl Play {
    pub fn new(player: usize, mut cards: Vec<Card>) -> Self {
        cards.sort();
        let kind = classify(&cards);
        Self {
            player,
            cards,
            kind,
        }
    }

    pub fn player(&self) -> usize {
        self.player
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn kind(&self) -> PlayKind {
        self.kind
    }

    pub fn multiple(&self) -> usize {
        self.kind.multiple()
    }

    fn top_rank(&self) -> u8 {
        self.cards[self.cards.len() - 1].rank()
    }

    /// Whether `candidate` beats this play.
    ///
    /// Combinations of the same kind (and multiple) compare on a single
    /// strict-greater rank: the triple's rank for full houses, the lone
    /// card's single rank for singles, the highest card otherwise. Across
    /// kinds only bombs and straight flushes win, and they always do.
    pub fn is_trumped_by(&self, candidate: &Play) -> bool {
        if candidate.kind == PlayKind::Invalid {
            return false;
        }
        if self.kind == candidate.kind {
            return match self.kind {
                PlayKind::FullHouse => {
                    full_house_rank(&self.cards) < full_house_rank(&candidate.cards)
                }
                PlayKind::Single => self.cards[0].single_rank() < candidate.cards[0].single_rank(),
                _ => self.top_rank() < candidate.top_rank(),
            };
        }
        candidate.kind.is_unconditional()
    }
}
