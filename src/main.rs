use std::process::ExitCode;

use clap::Parser;
use game_of_dice::{config::Config, console::Console, create_roller, create_session, error::AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Roll until you reach the threshold. A 6 rolls again, two 1s in a row skip your next turn.
#[derive(Parser, Debug)]
#[command(name = "game-of-dice", version, about, long_about = None)]
struct Args {
    /// Number of players who want to play
    #[arg(short, long, value_name = "PLAYER COUNT")]
    players: Option<String>,

    /// Threshold score at which a player finishes
    #[arg(short, long, value_name = "THRESHOLD SCORE")]
    threshold: Option<String>,

    /// Seed for reproducible rolls and seating
    #[arg(long)]
    seed: Option<u64>,

    /// Player name in seating order; repeat for each player
    #[arg(long = "name", value_name = "NAME")]
    names: Vec<String>,

    /// Keep the listed seating order instead of shuffling it
    #[arg(long)]
    no_shuffle: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_usage_error() {
                tracing::error!("game error: {}", e);
            }
            eprintln!("{}", e);
            ExitCode::from(e.exit_status())
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let board = config.game.board(args.players.as_deref(), args.threshold.as_deref())?;
    let shuffle = config.game.shuffle && !args.no_shuffle;
    let mut roller = create_roller(args.seed.or(config.game.seed));
    let mut session = create_session(board, args.names, &mut roller);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut console = Console::new(std::io::stdout());
    console.run(&mut session, roller, shuffle, input).await?;

    tracing::info!("Exiting");
    Ok(())
}
