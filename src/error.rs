use std::path::PathBuf;

/// Errors returned by the game core. None of them leave partial state
/// behind: a rejected call has no effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board size {rows}x{columns}: each side must be at least 4")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: isize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is over")]
    GameOver,
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
