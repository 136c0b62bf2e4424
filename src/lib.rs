pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod session;

use game::{Board, Game, Roller, StdRngRoller};
use session::GameSession;

/// Seats the players, drawing missing names from `roller`, and wraps the game
/// in a session ready to begin.
pub fn create_session(board: Board, names: Vec<String>, roller: &mut impl Roller) -> GameSession {
    let game = Game::with_names(board, names, roller);
    tracing::info!(
        players = game.get_board().player_count(),
        threshold = game.get_board().threshold_score(),
        "Game created"
    );
    GameSession::new(game)
}

pub fn create_roller(seed: Option<u64>) -> StdRngRoller {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded roller");
            StdRngRoller::seeded(seed)
        }
        None => StdRngRoller::new(),
    }
}
