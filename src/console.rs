//! Line-oriented terminal front end: `b` begins, `r` rolls, `q` quits.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::instrument;

use crate::error::AppError;
use crate::game::{GameEvent, PlayerId, Roller, Table};
use crate::session::{EventReceiver, GameSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Begin,
    Roll,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "b" | "begin" => Some(Command::Begin),
            "r" | "roll" => Some(Command::Roll),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Left-aligned columns, with a rule under the header row.
pub fn render_table(table: &Table) -> String {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| table.iter().filter_map(|row| row.get(col)).map(|cell| cell.chars().count()).max().unwrap_or(0))
        .collect();

    let mut rendered = String::new();
    for (index, row) in table.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        rendered.push_str(line.trim_end());
        rendered.push('\n');
        if index == 0 {
            let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
            rendered.push_str(&"-".repeat(rule_width));
            rendered.push('\n');
        }
    }
    rendered
}

pub struct Console<W> {
    out: W,
    events: Option<EventReceiver>,
    ended: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, events: None, ended: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Drives the session from `input` until the user quits or input runs out.
    #[instrument(skip_all)]
    pub async fn run<R, I>(&mut self, session: &mut GameSession, roller: R, shuffle: bool, input: I) -> Result<(), AppError>
    where
        R: Roller + Send + 'static,
        I: AsyncBufRead + Unpin,
    {
        let mut roller = Some(roller);
        self.greet(session).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            match Command::parse(&line) {
                Some(Command::Begin) => match roller.take() {
                    Some(roller) => self.begin(session, roller, shuffle).await?,
                    None => writeln!(self.out, "The game has already started.")?,
                },
                Some(Command::Roll) => self.roll(session).await?,
                Some(Command::Quit) => break,
                None => writeln!(self.out, "Unknown command {:?}. Use b to begin, r to roll, q to quit.", line.trim())?,
            }
            self.out.flush()?;
        }

        tracing::debug!("Console input closed");
        Ok(())
    }

    async fn greet(&mut self, session: &GameSession) -> Result<(), AppError> {
        let game = session.game().await;
        let roster: Table = std::iter::once(vec!["ID".to_string(), "Name".to_string()])
            .chain(game.get_players().iter().map(|p| vec![p.id().to_string(), p.name().to_string()]))
            .collect();

        writeln!(self.out, "Game of Dice")?;
        writeln!(
            self.out,
            "{} players, first to {} points. Press r to roll, q to quit.",
            game.get_board().player_count(),
            game.get_board().threshold_score()
        )?;
        writeln!(self.out, "Assign yourselves a name from the list.")?;
        write!(self.out, "{}", render_table(&roster))?;
        writeln!(self.out, "Press b to begin the game.")?;
        Ok(())
    }

    async fn begin<R>(&mut self, session: &mut GameSession, roller: R, shuffle: bool) -> Result<(), AppError>
    where
        R: Roller + Send + 'static,
    {
        let events = session.begin(roller, shuffle).await?;
        self.events = Some(events);
        if shuffle {
            writeln!(self.out, "Random playing sequence generated!")?;
        }
        write!(self.out, "{}", render_table(&session.game().await.get_current_score_board()))?;
        self.settle(session).await
    }

    async fn roll(&mut self, session: &GameSession) -> Result<(), AppError> {
        if self.events.is_none() {
            writeln!(self.out, "Press b to begin the game first.")?;
            return Ok(());
        }

        // The final ranking is shown once, when the game ends.
        if self.ended {
            return Ok(());
        }

        if session.confirm_roll() {
            self.settle(session).await?;
        }
        Ok(())
    }

    /// Logs events until the loop parks for the next roll or the game ends.
    async fn settle(&mut self, session: &GameSession) -> Result<(), AppError> {
        let mut bonus = false;
        loop {
            let Some(event) = self.next_event().await else {
                return Ok(());
            };

            match event {
                GameEvent::AwaitingRoll { player_id } => {
                    write!(self.out, "{}", render_table(&session.game().await.get_current_score_board()))?;
                    let who = label(session, player_id).await;
                    if bonus {
                        writeln!(self.out, "> {who}'s turn again. 666!!!")?;
                    } else {
                        writeln!(self.out, "> {who}'s turn.")?;
                    }
                    return Ok(());
                }
                GameEvent::Rolled { player_id, value } => {
                    let who = label(session, player_id).await;
                    writeln!(self.out, "{who} rolled a {value}.")?;
                }
                GameEvent::Skipped { player_id } => {
                    let who = label(session, player_id).await;
                    writeln!(self.out, "> {who}'s turn is skipped because of two 1 1.")?;
                }
                GameEvent::BonusTurn { .. } => bonus = true,
                GameEvent::Finished { player_id, rank, score } => {
                    let who = label(session, player_id).await;
                    writeln!(self.out, "{who} finished with {score} points, rank {rank}.")?;
                }
                GameEvent::GameOver => {
                    self.ended = true;
                    writeln!(self.out, "Game has ended")?;
                    return self.print_final_score(session).await;
                }
            }
        }
    }

    async fn next_event(&mut self) -> Option<GameEvent> {
        self.events.as_mut()?.recv().await
    }

    async fn print_final_score(&mut self, session: &GameSession) -> Result<(), AppError> {
        let ranking = session.game().await.final_score()?;
        write!(self.out, "{}", render_table(&ranking))?;
        Ok(())
    }
}

async fn label(session: &GameSession, player_id: PlayerId) -> String {
    let game = session.game().await;
    match game.get_player(player_id) {
        Some(player) => format!("({}) {}", player_id, player.name()),
        None => format!("({player_id})"),
    }
}
