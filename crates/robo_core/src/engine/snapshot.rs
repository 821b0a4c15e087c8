//! Read-only view of the simulation for renderers.

use serde::{Deserialize, Serialize};

use super::entities::{Ball, Player};
use super::match_state::MatchState;
use super::rules::RestartInfo;
use super::types::{GameMode, TEAM_SIZE};

/// Everything a renderer needs after a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Option<GameMode>,
    pub ball: Ball,
    pub blue: [Player; TEAM_SIZE],
    pub red: [Player; TEAM_SIZE],
    pub match_state: MatchState,
    pub restart: Option<RestartInfo>,
    pub celebration_frames: u32,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Celebration overlay should be drawn
    pub fn celebrating(&self) -> bool {
        self.celebration_frames > 0
    }
}
