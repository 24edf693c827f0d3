// Library crate for the Shangyou rules engine
// This file exposes the public API for integration tests and embedding layers

pub mod game;

// Re-export commonly used types for easier access
pub use game::{
    Card, Catalog, Face, Game, GameError, Play, PlayKind, Player, Suit, Turn, TurnError,
    UnknownCard,
};
