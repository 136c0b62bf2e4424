use crate::game::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Game(#[from] GameError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Turn loop stopped unexpectedly: {0}")]
    Session(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Errors caused by what the user typed rather than by the program.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::Game(GameError::InvalidConfiguration(_)))
    }

    /// Usage errors end the process cleanly once the message is printed.
    pub fn exit_status(&self) -> u8 {
        if self.is_usage_error() {
            0
        } else {
            1
        }
    }
}
