//! Game configuration loaded from TOML.

use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings shared by the terminal UI and the replay command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mode the first game starts in.
    mode: Mode,

    /// Pause before the AI plays, in milliseconds.
    ai_delay_ms: u64,

    /// Seed for the AI's random choices. Unseeded games use OS entropy.
    seed: Option<u64>,

    /// Log file for the terminal UI.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            ai_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, ai_delay_ms = config.ai_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the starting mode.
    pub fn with_mode(mut self, mode: Option<Mode>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
    }

    /// Overrides the AI delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: Option<u64>) -> Self {
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// AI delay as a [`std::time::Duration`].
    pub fn ai_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ai_delay_ms)
    }

    /// RNG for the AI: seeded if a seed is configured, else from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.mode(), &Mode::TwoPlayer);
        assert_eq!(config.ai_delay_ms(), &500);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_overrides_only_apply_when_set() {
        let config = GameConfig::default()
            .with_mode(Some(Mode::PlayerVsAi))
            .with_ai_delay_ms(None)
            .with_seed(Some(9));
        assert_eq!(config.mode(), &Mode::PlayerVsAi);
        assert_eq!(config.ai_delay_ms(), &500);
        assert_eq!(config.seed(), &Some(9));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let config = GameConfig::default().with_seed(Some(3));
        let a: u32 = config.rng().gen_range(0..1000);
        let b: u32 = config.rng().gen_range(0..1000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"ai-vs-ai\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"player-vs-ai\"\nseed = 7").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mode(), &Mode::PlayerVsAi);
        assert_eq!(config.seed(), &Some(7));
        assert_eq!(config.ai_delay_ms(), &500);
    }
}
