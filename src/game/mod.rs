// Public API
pub use cards::{Card, Catalog, Face, Play, PlayKind, Suit, UnknownCard};
pub use logic::{Game, GameError};
pub use player::Player;
pub use turn::{Turn, TurnError};

// Internal modules
pub mod cards;
mod logic;
mod player;
mod turn;
