use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::match_state::{MatchState, TeamTally};
use crate::engine::rules::{RestartCounts, RestartKind};
use crate::engine::types::{GameMode, TeamSide};

/// Final (or current) figures for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub mode: GameMode,
    pub score_blue: u32,
    pub score_red: u32,
    pub possession_blue_frames: u64,
    pub possession_red_frames: u64,
    /// Percentages (0-100), including any uncommitted possession run
    pub possession_blue_pct: f32,
    pub possession_red_pct: f32,
    pub passes: TeamTally,
    pub restarts: RestartCounts,
    pub frames: u64,
    pub duration: Duration,
    pub ended: bool,
}

impl MatchSummary {
    pub fn from_state(mode: GameMode, state: &MatchState) -> Self {
        let possession = &state.possession;
        Self {
            mode,
            score_blue: state.score_blue,
            score_red: state.score_red,
            possession_blue_frames: possession.live_frames(TeamSide::Blue),
            possession_red_frames: possession.live_frames(TeamSide::Red),
            possession_blue_pct: possession.share(TeamSide::Blue),
            possession_red_pct: possession.share(TeamSide::Red),
            passes: state.passes,
            restarts: state.restarts,
            frames: state.frame_count,
            duration: state.elapsed,
            ended: state.frozen,
        }
    }

    pub fn goals(&self) -> u32 {
        self.score_blue + self.score_red
    }

    pub fn winner(&self) -> Option<TeamSide> {
        match self.score_blue.cmp(&self.score_red) {
            std::cmp::Ordering::Greater => Some(TeamSide::Blue),
            std::cmp::Ordering::Less => Some(TeamSide::Red),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Aggregates for one game mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    pub goals: u32,
    pub possession_blue_frames: u64,
    pub possession_red_frames: u64,
    pub passes: u32,
    pub restarts: RestartCounts,
    pub matches_played: u32,
    pub last_match_duration: Option<Duration>,
}

impl ModeStats {
    /// Blue share of all possession frames in this mode (0-100)
    pub fn possession_blue_pct(&self) -> f32 {
        let total = self.possession_blue_frames + self.possession_red_frames;
        if total == 0 {
            return 0.0;
        }
        self.possession_blue_frames as f32 * 100.0 / total as f32
    }
}

/// Per-mode statistics kept for the life of the process
///
/// Goals, passes and restarts are counted as they happen; possession and
/// duration are folded in when a match ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    modes: BTreeMap<GameMode, ModeStats>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self, mode: GameMode) -> ModeStats {
        self.modes.get(&mode).cloned().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GameMode, &ModeStats)> {
        self.modes.iter()
    }

    pub fn record_goal(&mut self, mode: GameMode) {
        self.entry(mode).goals += 1;
    }

    pub fn record_pass(&mut self, mode: GameMode) {
        self.entry(mode).passes += 1;
    }

    pub fn record_restart(&mut self, mode: GameMode, kind: RestartKind) {
        self.entry(mode).restarts.record(kind);
    }

    pub fn record_match_end(&mut self, summary: &MatchSummary) {
        let stats = self.entry(summary.mode);
        stats.possession_blue_frames += summary.possession_blue_frames;
        stats.possession_red_frames += summary.possession_red_frames;
        stats.matches_played += 1;
        stats.last_match_duration = Some(summary.duration);
    }

    fn entry(&mut self, mode: GameMode) -> &mut ModeStats {
        self.modes.entry(mode).or_default()
    }
}
