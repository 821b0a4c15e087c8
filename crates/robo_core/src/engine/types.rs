//! Shared identifiers for the simulation: teams, player ids, control sources
//! and game modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Positions and velocities, in field units (per frame for velocities).
pub type Vector2 = nalgebra::Vector2<f32>;

/// Players per team. Index 0 is the lead (striker) role.
pub const TEAM_SIZE: usize = 2;

/// Team identifier
///
/// Blue defends the left goal line and attacks rightwards,
/// Red defends the right goal line and attacks leftwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Blue,
    Red,
}

impl TeamSide {
    /// Blue first: this is also the ball-contact iteration order.
    pub const ALL: [TeamSide; 2] = [TeamSide::Blue, TeamSide::Red];

    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Blue => TeamSide::Red,
            TeamSide::Red => TeamSide::Blue,
        }
    }

    /// +1.0 when attacking towards larger x, -1.0 otherwise
    pub fn attack_sign(self) -> f32 {
        match self {
            TeamSide::Blue => 1.0,
            TeamSide::Red => -1.0,
        }
    }

    pub fn is_blue(self) -> bool {
        matches!(self, TeamSide::Blue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TeamSide::Blue => "blue",
            TeamSide::Red => "red",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player identifier within the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId {
    pub team: TeamSide,
    /// 0..TEAM_SIZE within the team
    pub index: usize,
}

impl PlayerId {
    pub const fn new(team: TeamSide, index: usize) -> Self {
        Self { team, index }
    }

    pub const fn lead(team: TeamSide) -> Self {
        Self { team, index: 0 }
    }

    pub fn is_lead(self) -> bool {
        self.index == 0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.team, self.index)
    }
}

/// Who drives a team's players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSource {
    Human,
    Scripted,
}

/// Per-team control sources resolved from a [`GameMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamControls {
    pub blue: ControlSource,
    pub red: ControlSource,
}

impl TeamControls {
    pub fn source(&self, team: TeamSide) -> ControlSource {
        match team {
            TeamSide::Blue => self.blue,
            TeamSide::Red => self.red,
        }
    }

    pub fn is_scripted(&self, team: TeamSide) -> bool {
        self.source(team) == ControlSource::Scripted
    }
}

impl Default for TeamControls {
    fn default() -> Self {
        GameMode::BotVsBot.controls()
    }
}

/// Match mode chosen on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Both teams human
    #[serde(alias = "man-vs-man")]
    ManVsMan,
    /// Blue human, Red scripted
    #[serde(alias = "bot-vs-man")]
    BotVsMan,
    /// Both teams scripted
    #[serde(alias = "bot-vs-bot")]
    BotVsBot,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::ManVsMan, GameMode::BotVsMan, GameMode::BotVsBot];

    pub fn controls(self) -> TeamControls {
        use ControlSource::{Human, Scripted};
        match self {
            GameMode::ManVsMan => TeamControls { blue: Human, red: Human },
            GameMode::BotVsMan => TeamControls { blue: Human, red: Scripted },
            GameMode::BotVsBot => TeamControls { blue: Scripted, red: Scripted },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::ManVsMan => "man_vs_man",
            GameMode::BotVsMan => "bot_vs_man",
            GameMode::BotVsBot => "bot_vs_bot",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "man_vs_man" => Ok(GameMode::ManVsMan),
            "bot_vs_man" => Ok(GameMode::BotVsMan),
            "bot_vs_bot" => Ok(GameMode::BotVsBot),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}
