use serde::Deserialize;
use std::env;

use crate::game::{Board, GameError};

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub players: i64,
    pub threshold: i64,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = env::var("RUN_ENV").unwrap_or_else(|_| "local".into());

        let builder = ::config::Config::builder()
            .set_default("game.players", 2_i64)?
            .set_default("game.threshold", 20_i64)?
            .set_default("game.shuffle", true)?
            .set_default("logging.level", "warn")?
            .add_source(config::File::with_name("config/default.toml").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::File::with_name("config/local.toml").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__").try_parsing(true));

        builder.build()?.try_deserialize()
    }
}

impl GameConfig {
    /// Builds the board, letting raw command-line values take precedence over configured ones.
    pub fn board(&self, players: Option<&str>, threshold: Option<&str>) -> Result<Board, GameError> {
        let players = players.map_or_else(|| self.players.to_string(), str::to_owned);
        let threshold = threshold.map_or_else(|| self.threshold.to_string(), str::to_owned);
        Board::parse(&players, &threshold)
    }
}
