use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameSession, Player, PlayerId, HEIGHT, MAX_SIZE, MIN_SIZE, WIDTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: Player,
    pub two: Player,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: Player::default_for(PlayerId::One),
            two: Player::default_for(PlayerId::Two),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&self.board.width) {
            return Err(ConfigError::Validation(format!(
                "board.width must be in {MIN_SIZE}..={MAX_SIZE}"
            )));
        }
        if !valid.contains(&self.board.height) {
            return Err(ConfigError::Validation(format!(
                "board.height must be in {MIN_SIZE}..={MAX_SIZE}"
            )));
        }

        let (one, two) = (&self.players.one, &self.players.two);
        if one.name.trim().is_empty() || two.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if one.name == two.name {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }
        if one.color == two.color {
            return Err(ConfigError::Validation(
                "players.one.color and players.two.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// Fresh session for the configured board and players.
    pub fn new_session(&self) -> Result<GameSession, ConfigError> {
        GameSession::with_size(
            self.players.one.clone(),
            self.players.two.clone(),
            self.board.width,
            self.board.height,
        )
        .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
