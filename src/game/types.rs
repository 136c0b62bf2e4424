use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(usize);

impl PlayerId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished,
}

/// What happened during a turn, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    AwaitingRoll { player_id: PlayerId },
    Rolled { player_id: PlayerId, value: u32 },
    Skipped { player_id: PlayerId },
    BonusTurn { player_id: PlayerId },
    Finished { player_id: PlayerId, rank: usize, score: u64 },
    GameOver,
}

/// Rows of cells, header first.
pub type Table = Vec<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0}")]
    InvalidConfiguration(String),

    #[error("Game is not yet finished")]
    GameNotFinished,

    #[error("Game has already started")]
    AlreadyStarted,

    #[error("Game is not in progress")]
    NotInProgress,
}
