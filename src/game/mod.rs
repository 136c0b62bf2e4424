pub mod board;
pub mod domain;
pub mod names;
pub mod player;
pub mod roller;
pub mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use domain::Game;
pub use player::Player;
pub use roller::{Roller, StdRngRoller};
pub use types::{GameError, GameEvent, GameStatus, PlayerId, Table};
