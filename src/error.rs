use std::path::PathBuf;

use crate::game::Rejection;

/// Errors raised by the board and the game session.
///
/// A full column or a finished game is not an error: those are reported as a
/// rejected [`DropOutcome`](crate::game::DropOutcome). These variants signal a
/// caller bug instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl GameError {
    pub(crate) fn column_out_of_range(column: usize, width: usize) -> Self {
        GameError::InvalidArgument(format!(
            "column {column} out of range (board has {width} columns)"
        ))
    }

    pub(crate) fn cell_out_of_range(row: usize, column: usize, width: usize, height: usize) -> Self {
        GameError::InvalidArgument(format!(
            "cell ({row}, {column}) out of range for a {width}x{height} board"
        ))
    }

    pub(crate) fn cell_occupied(row: usize, column: usize) -> Self {
        GameError::InvalidState(format!("cell ({row}, {column}) is already occupied"))
    }

    pub(crate) fn cell_unsupported(row: usize, column: usize) -> Self {
        GameError::InvalidState(format!(
            "cell ({row}, {column}) is not the lowest empty cell of its column"
        ))
    }
}

/// Errors raised while rebuilding a session from a column sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("move {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: GameError,
    },

    #[error("move {index} (column {column}) rejected: {reason}")]
    Rejected {
        index: usize,
        column: usize,
        reason: Rejection,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_error_display() {
        let err = GameError::column_out_of_range(9, 7);
        assert_eq!(
            err.to_string(),
            "invalid argument: column 9 out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_invalid_state_display() {
        let err = GameError::cell_occupied(5, 2);
        assert_eq!(
            err.to_string(),
            "invalid state: cell (5, 2) is already occupied"
        );
        let err = GameError::cell_unsupported(0, 3);
        assert_eq!(
            err.to_string(),
            "invalid state: cell (0, 3) is not the lowest empty cell of its column"
        );
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::Rejected {
            index: 6,
            column: 0,
            reason: Rejection::ColumnFull,
        };
        assert_eq!(err.to_string(), "move 6 (column 0) rejected: column is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 4"
        );
    }
}
