use super::board::Board;
use super::names::random_name;
use super::player::Player;
use super::roller::Roller;
use super::types::{GameError, GameEvent, GameStatus, PlayerId, Table};

const BONUS_ROLL: u32 = 6;
const NO_ROLL: &str = "-";

#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    board: Board,
    next_turn: usize,
    status: GameStatus,
}

impl Game {
    #[tracing::instrument(skip(roller))]
    pub fn new(player_count: i64, threshold_score: i64, roller: &mut impl Roller) -> Result<Self, GameError> {
        let board = Board::new(player_count, threshold_score)?;
        Ok(Self::with_names(board, std::iter::empty(), roller))
    }

    /// Seats `board.player_count()` players, taking names in order and
    /// drawing the rest from `roller`.
    pub fn with_names(board: Board, names: impl IntoIterator<Item = String>, roller: &mut impl Roller) -> Self {
        let mut names = names.into_iter();
        let players = (0..board.player_count())
            .map(|index| {
                let name = names.next().unwrap_or_else(|| random_name(roller));
                Player::new(PlayerId::new(index), name)
            })
            .collect();

        Self { players, board, next_turn: 0, status: GameStatus::NotStarted }
    }

    // Getters
    pub fn get_players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn get_board(&self) -> &Board {
        &self.board
    }

    pub fn get_status(&self) -> GameStatus {
        self.status
    }

    pub fn get_next_turn(&self) -> usize {
        self.next_turn
    }

    pub fn is_game_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    //  --- Public mutators ---
    #[tracing::instrument(skip(self, roller))]
    pub fn shuffle_playing_sequence(&mut self, roller: &mut impl Roller) -> Result<(), GameError> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        roller.shuffle(&mut self.players);
        tracing::debug!(order = ?self.players.iter().map(Player::id).collect::<Vec<_>>(), "Players shuffled");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn begin(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.status = GameStatus::InProgress;
        tracing::info!(
            players = self.board.player_count(),
            threshold = self.board.threshold_score(),
            "Game started"
        );
        Ok(())
    }

    /// Moves the turn pointer past finished players and returns whoever is up.
    pub fn next_player(&mut self) -> Result<&Player, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        let index = self.seek_next_player();
        Ok(&self.players[index])
    }

    /// Runs one turn for the player who is up: roll or burn a skip, record a
    /// finish, then hand the turn on unless a 6 earned a bonus.
    #[tracing::instrument(skip(self, roller))]
    pub fn play_turn(&mut self, roller: &mut impl Roller) -> Result<Vec<GameEvent>, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }

        let index = self.seek_next_player();
        let player = &mut self.players[index];
        let player_id = player.id();
        let mut events = vec![];

        let roll = player.play_turn(roller);
        match roll {
            Some(value) => events.push(GameEvent::Rolled { player_id, value }),
            None => events.push(GameEvent::Skipped { player_id }),
        }

        if player.score() >= self.board.threshold_score() {
            player.mark_game_finished();
            let rank = self.board.add_winner(player_id);
            let score = player.score();
            tracing::info!(player_id = %player_id, rank, score, "Player finished");
            events.push(GameEvent::Finished { player_id, rank, score });
        }

        // A finish consumes the bonus: the next seek skips the finished player anyway.
        if roll == Some(BONUS_ROLL) {
            if !player.has_finished() {
                events.push(GameEvent::BonusTurn { player_id });
            }
        } else {
            self.advance_turn();
        }

        if self.board.is_complete() {
            self.status = GameStatus::Finished;
            tracing::info!("Game over");
            events.push(GameEvent::GameOver);
        }

        Ok(events)
    }

    /// Back to `NotStarted` with every score wiped. Seating order is kept.
    #[tracing::instrument(skip(self))]
    pub fn reset(&mut self) {
        self.players.iter_mut().for_each(Player::reset);
        self.board.reset_standings();
        self.next_turn = 0;
        self.status = GameStatus::NotStarted;
    }

    //  --- Views ---
    /// The player the turn pointer rests on.
    pub fn get_player_details(&self) -> &Player {
        &self.players[self.next_turn]
    }

    pub fn get_current_score_board(&self) -> Table {
        let header = ["ID", "Name", "Last Two Turns", "Score"].map(String::from).to_vec();
        let rows = self.players.iter().map(|p| {
            let (second_last, last) = p.last_two_rolls();
            vec![
                p.id().to_string(),
                p.name().to_string(),
                format!("{} {}", format_roll(second_last), format_roll(last)),
                p.score().to_string(),
            ]
        });
        std::iter::once(header).chain(rows).collect()
    }

    pub fn final_score(&self) -> Result<Table, GameError> {
        if !self.is_game_finished() {
            return Err(GameError::GameNotFinished);
        }

        let header = ["Rank", "ID", "Name", "Score"].map(String::from).to_vec();
        let rows = self
            .board
            .standings()
            .iter()
            .filter_map(|&id| self.get_player(id))
            .enumerate()
            .map(|(position, p)| {
                vec![(position + 1).to_string(), p.id().to_string(), p.name().to_string(), p.score().to_string()]
            });
        Ok(std::iter::once(header).chain(rows).collect())
    }

    //  --- Private helpers ---
    fn advance_turn(&mut self) {
        self.next_turn = (self.next_turn + 1) % self.board.player_count();
    }

    // Only called while in progress, so at least one player is still playing.
    fn seek_next_player(&mut self) -> usize {
        while self.players[self.next_turn].has_finished() {
            self.advance_turn();
        }
        self.next_turn
    }
}

fn format_roll(roll: Option<u32>) -> String {
    roll.map_or_else(|| NO_ROLL.to_string(), |value| value.to_string())
}
