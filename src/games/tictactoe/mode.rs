//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays X against a random AI playing O.
    PlayerVsAi,
}

impl Mode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Player vs Player",
            Mode::PlayerVsAi => "Player vs AI",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Mode::TwoPlayer => Mode::PlayerVsAi,
            Mode::PlayerVsAi => Mode::TwoPlayer,
        }
    }

    /// Whether O is played by the computer.
    pub fn has_ai(self) -> bool {
        self == Mode::PlayerVsAi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Mode::from_str("player-vs-ai").unwrap(), Mode::PlayerVsAi);
        assert_eq!(Mode::from_str("two-player").unwrap(), Mode::TwoPlayer);
        assert!(Mode::from_str("ai-vs-ai").is_err());
        assert_eq!(Mode::PlayerVsAi.to_string(), "player-vs-ai");
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Mode::TwoPlayer.toggle(), Mode::PlayerVsAi);
        assert_eq!(Mode::TwoPlayer.toggle().toggle(), Mode::TwoPlayer);
    }
}
