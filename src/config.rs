use std::path::Path;

use crate::error::{ConfigError, GameError};
use crate::game::{GameState, MovePolicy, MIN_DIMENSION};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Board size and move policy for new games.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    /// Reject moves once the game is won or drawn.
    pub stop_at_game_over: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            columns: 7,
            stop_at_game_over: true,
        }
    }
}

impl GameConfig {
    pub fn policy(&self) -> MovePolicy {
        if self.stop_at_game_over {
            MovePolicy::StopAtGameOver
        } else {
            MovePolicy::Permissive
        }
    }

    /// Build a fresh game from these settings.
    pub fn new_game(&self) -> Result<GameState, GameError> {
        GameState::with_policy(self.rows, self.columns, self.policy())
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on (0-based); the middle column if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
}

impl UiConfig {
    pub fn start_column(&self, columns: usize) -> usize {
        self.start_column.unwrap_or(columns / 2)
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
        if self.game.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.rows must be >= {MIN_DIMENSION}"
            )));
        }
        if self.game.columns < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.columns must be >= {MIN_DIMENSION}"
            )));
        }
        if self.game.rows.checked_mul(self.game.columns).is_none() {
            return Err(ConfigError::Validation(
                "game.rows * game.columns is too large".into(),
            ));
        }
        if let Some(col) = self.ui.start_column {
            if col >= self.game.columns {
                return Err(ConfigError::Validation(
                    "ui.start_column must be < game.columns".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.rows, 6);
        assert_eq!(config.game.columns, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.rows, 8);
        assert_eq!(config.game.columns, 7);
        assert!(config.game.stop_at_game_over);
        assert_eq!(config.ui.start_column, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.game.rows = 3;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.columns = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.game.rows = usize::MAX / 2 + 1;
        config.game.columns = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.start_column = Some(7);
        assert!(config.validate().is_err());
        config.ui.start_column = Some(6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_start_column_defaults_to_middle() {
        let ui = UiConfig::default();
        assert_eq!(ui.start_column(7), 3);
        assert_eq!(ui.start_column(4), 2);
        let ui = UiConfig {
            start_column: Some(0),
        };
        assert_eq!(ui.start_column(7), 0);
    }

    #[test]
    fn test_policy_mapping() {
        let mut game = GameConfig::default();
        assert_eq!(game.policy(), MovePolicy::StopAtGameOver);
        game.stop_at_game_over = false;
        assert_eq!(game.policy(), MovePolicy::Permissive);

        let state = game.new_game().unwrap();
        assert_eq!(state.rows(), 6);
        assert_eq!(state.columns(), 7);
        assert_eq!(state.policy(), MovePolicy::Permissive);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
rows = 5
columns = 5
stop_at_game_over = false

[ui]
start_column = 1
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.rows, 5);
        assert_eq!(config.game.columns, 5);
        assert!(!config.game.stop_at_game_over);
        assert_eq!(config.ui.start_column, Some(1));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\ncolumns = 3\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
