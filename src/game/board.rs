use super::types::{GameError, PlayerId};

const INVALID_PLAYER_COUNT: &str = "Player Count is an invalid number. Please enter a whole number";
const INVALID_THRESHOLD: &str = "The threshold is invalid. Please enter a whole number";

/// Every seat is allocated up front, so the table size is bounded.
pub const MAX_PLAYERS: usize = 10_000;

/// Game-wide settings plus the finishing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    player_count: usize,
    threshold_score: u64,
    standings: Vec<PlayerId>,
}

impl Board {
    pub fn new(player_count: i64, threshold_score: i64) -> Result<Self, GameError> {
        let player_count = usize::try_from(player_count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| GameError::InvalidConfiguration(INVALID_PLAYER_COUNT.into()))?;
        if player_count > MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(format!(
                "Player Count is too large. At most {MAX_PLAYERS} players can play"
            )));
        }
        let threshold_score = u64::try_from(threshold_score)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| GameError::InvalidConfiguration(INVALID_THRESHOLD.into()))?;

        Ok(Self { player_count, threshold_score, standings: Vec::new() })
    }

    /// Same as [`Board::new`] but from raw user input, so non-numeric values are rejected too.
    pub fn parse(player_count: &str, threshold_score: &str) -> Result<Self, GameError> {
        let player_count = player_count
            .trim()
            .parse::<i64>()
            .map_err(|_| GameError::InvalidConfiguration(INVALID_PLAYER_COUNT.into()))?;
        let threshold_score = threshold_score
            .trim()
            .parse::<i64>()
            .map_err(|_| GameError::InvalidConfiguration(INVALID_THRESHOLD.into()))?;
        Self::new(player_count, threshold_score)
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn threshold_score(&self) -> u64 {
        self.threshold_score
    }

    /// Finishers in arrival order; rank is position + 1.
    pub fn standings(&self) -> &[PlayerId] {
        &self.standings
    }

    pub fn is_complete(&self) -> bool {
        self.standings.len() == self.player_count
    }

    /// Callers add each player at most once.
    pub fn add_winner(&mut self, player_id: PlayerId) -> usize {
        debug_assert!(!self.standings.contains(&player_id));
        self.standings.push(player_id);
        self.standings.len()
    }

    pub fn reset_standings(&mut self) {
        self.standings.clear();
    }
}
