use super::roller::Roller;
use super::types::PlayerId;

const SNAKE_EYES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    roll_history: Vec<u32>,
    score: u64,
    skip_turn: bool,
    has_finished: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            roll_history: Vec::new(),
            score: 0,
            skip_turn: false,
            has_finished: false,
        }
    }

    // Getters
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_history(&self) -> &[u32] {
        &self.roll_history
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn skip_turn(&self) -> bool {
        self.skip_turn
    }

    pub fn has_finished(&self) -> bool {
        self.has_finished
    }

    /// The two most recent rolls, oldest first.
    pub fn last_two_rolls(&self) -> (Option<u32>, Option<u32>) {
        let mut recent = self.roll_history.iter().rev().copied();
        let last = recent.next();
        let second_last = recent.next();
        (second_last, last)
    }

    /// Rolls once, or burns a pending skip. `None` means no roll happened.
    pub fn play_turn(&mut self, roller: &mut impl Roller) -> Option<u32> {
        if self.skip_turn {
            self.skip_turn = false;
            return None;
        }

        let value = roller.roll_die();
        self.score += u64::from(value);
        self.roll_history.push(value);

        if self.last_two_rolls() == (Some(SNAKE_EYES), Some(SNAKE_EYES)) {
            self.skip_turn = true;
        }
        Some(value)
    }

    pub fn mark_game_finished(&mut self) {
        self.has_finished = true;
    }

    pub fn reset(&mut self) {
        self.roll_history.clear();
        self.score = 0;
        self.skip_turn = false;
        self.has_finished = false;
    }
}
