use std::sync::{Arc, Mutex};

use tokio::sync::{mpsc, oneshot, RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;
use tracing::instrument;

use crate::error::AppError;
use crate::game::{Game, GameError, GameEvent, Roller};

pub type EventReceiver = mpsc::UnboundedReceiver<GameEvent>;
pub type SharedGame = Arc<RwLock<Game>>;

/// Single-slot handoff between the turn loop and whoever presses "roll".
#[derive(Debug, Default)]
pub struct ConfirmGate {
    pending: Mutex<Option<oneshot::Sender<()>>>,
}

impl ConfirmGate {
    fn park(&self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(tx);
        rx
    }

    /// Resumes the parked turn. Returns `false`, and does nothing, when no turn is waiting.
    pub fn confirm(&self) -> bool {
        let pending = self.pending.lock().unwrap_or_else(|e| e.into_inner()).take();
        match pending {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

/// Owns a game and, once begun, the task that drives its turns.
pub struct GameSession {
    game: SharedGame,
    gate: Arc<ConfirmGate>,
    task: Option<JoinHandle<Result<(), GameError>>>,
}

impl GameSession {
    pub fn new(game: Game) -> Self {
        Self { game: Arc::new(RwLock::new(game)), gate: Arc::new(ConfirmGate::default()), task: None }
    }

    pub async fn game(&self) -> RwLockReadGuard<'_, Game> {
        self.game.read().await
    }

    pub fn has_begun(&self) -> bool {
        self.task.is_some()
    }

    /// Optionally shuffles the seating, starts the game and spawns the turn loop.
    /// Events from every resolved turn arrive on the returned receiver.
    #[instrument(skip(self, roller))]
    pub async fn begin<R>(&mut self, mut roller: R, shuffle: bool) -> Result<EventReceiver, GameError>
    where
        R: Roller + Send + 'static,
    {
        if self.has_begun() {
            return Err(GameError::AlreadyStarted);
        }

        {
            let mut game = self.game.write().await;
            if shuffle {
                game.shuffle_playing_sequence(&mut roller)?;
            }
            game.begin()?;
        }

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_turn_loop(self.game.clone(), self.gate.clone(), roller, events_tx));
        self.task = Some(task);
        Ok(events_rx)
    }

    pub fn confirm_roll(&self) -> bool {
        let resumed = self.gate.confirm();
        if !resumed {
            tracing::debug!("Roll confirmed with no turn pending; ignored");
        }
        resumed
    }

    /// Waits for the turn loop to end. A session that never began returns immediately.
    pub async fn wait(&mut self) -> Result<(), AppError> {
        match self.task.take() {
            Some(task) => Ok(task.await??),
            None => Ok(()),
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

#[instrument(skip_all)]
async fn run_turn_loop<R: Roller>(
    game: SharedGame,
    gate: Arc<ConfirmGate>,
    mut roller: R,
    events: mpsc::UnboundedSender<GameEvent>,
) -> Result<(), GameError> {
    loop {
        let awaiting = {
            let mut game = game.write().await;
            if game.is_game_finished() {
                break;
            }
            let player = game.next_player()?;
            (!player.skip_turn()).then(|| player.id())
        };

        // Skipped turns resolve without asking anyone.
        if let Some(player_id) = awaiting {
            let confirmation = gate.park();
            let _ = events.send(GameEvent::AwaitingRoll { player_id });
            if confirmation.await.is_err() {
                tracing::warn!("Confirmation gate closed; stopping turn loop");
                break;
            }
        }

        let turn = game.write().await.play_turn(&mut roller)?;
        tracing::debug!(events = ?turn, "Turn resolved");
        for event in turn {
            let _ = events.send(event);
        }
    }

    Ok(())
}
