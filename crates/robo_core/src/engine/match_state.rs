//! Authoritative match state: score, last touch, possession, phase and clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::rules::{RestartCounts, RestartInfo};
use super::timestep;
use super::types::TeamSide;

/// Phase a pause interrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivePhase {
    InPlay,
    Restarting,
}

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InPlay,
    /// Ball frozen until the awarded team touches it
    Restarting,
    Paused(LivePhase),
    /// Terminal until reset or mode reselect
    MatchEnded,
}

impl Phase {
    pub fn is_paused(&self) -> bool {
        matches!(self, Phase::Paused(_))
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::MatchEnded)
    }
}

impl From<LivePhase> for Phase {
    fn from(live: LivePhase) -> Self {
        match live {
            LivePhase::InPlay => Phase::InPlay,
            LivePhase::Restarting => Phase::Restarting,
        }
    }
}

/// Frames flushed into a team's possession total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossessionDelta {
    pub team: TeamSide,
    pub frames: u64,
}

/// Possession accounting
///
/// Frames accumulate against the current possessor and are committed when
/// possession changes or the match ends. Frames before the first touch are
/// not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Possession {
    pub blue_frames: u64,
    pub red_frames: u64,
    pub current: Option<TeamSide>,
    pub pending_frames: u64,
}

impl Possession {
    /// Count one frame for `last_touch`, flushing first if it changed hands.
    pub fn track(&mut self, last_touch: Option<TeamSide>) -> Option<PossessionDelta> {
        let team = last_touch?;
        let delta = if self.current != Some(team) {
            let flushed = self.flush();
            self.current = Some(team);
            flushed
        } else {
            None
        };
        self.pending_frames += 1;
        delta
    }

    /// Commit pending frames to the current possessor.
    pub fn flush(&mut self) -> Option<PossessionDelta> {
        let team = self.current?;
        if self.pending_frames == 0 {
            return None;
        }
        let frames = std::mem::take(&mut self.pending_frames);
        match team {
            TeamSide::Blue => self.blue_frames += frames,
            TeamSide::Red => self.red_frames += frames,
        }
        Some(PossessionDelta { team, frames })
    }

    /// Committed frames
    pub fn frames(&self, team: TeamSide) -> u64 {
        match team {
            TeamSide::Blue => self.blue_frames,
            TeamSide::Red => self.red_frames,
        }
    }

    /// Frames including the uncommitted run
    pub fn live_frames(&self, team: TeamSide) -> u64 {
        let pending = if self.current == Some(team) { self.pending_frames } else { 0 };
        self.frames(team) + pending
    }

    /// Possession percentage (0-100), 0 before any touch
    pub fn share(&self, team: TeamSide) -> f32 {
        let total = self.live_frames(TeamSide::Blue) + self.live_frames(TeamSide::Red);
        if total == 0 {
            return 0.0;
        }
        self.live_frames(team) as f32 * 100.0 / total as f32
    }
}

/// Per-team counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTally {
    pub blue: u32,
    pub red: u32,
}

impl TeamTally {
    pub fn get(&self, team: TeamSide) -> u32 {
        match team {
            TeamSide::Blue => self.blue,
            TeamSide::Red => self.red,
        }
    }

    pub fn increment(&mut self, team: TeamSide) -> u32 {
        let slot = match team {
            TeamSide::Blue => &mut self.blue,
            TeamSide::Red => &mut self.red,
        };
        *slot += 1;
        *slot
    }

    pub fn total(&self) -> u32 {
        self.blue + self.red
    }
}

/// Match state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub score_blue: u32,
    pub score_red: u32,
    pub last_touch: Option<TeamSide>,
    pub possession: Possession,
    pub phase: Phase,
    /// Present only while a restart is pending
    pub restart: Option<RestartInfo>,
    pub frame_count: u64,
    pub elapsed: Duration,
    pub frames_with_touch: u64,
    /// Read-only once the match has ended
    pub frozen: bool,
    /// Goal celebration frames left, for the renderer
    pub celebration_frames: u32,
    pub passes: TeamTally,
    pub restarts: RestartCounts,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            score_blue: 0,
            score_red: 0,
            last_touch: None,
            possession: Possession::default(),
            phase: Phase::InPlay,
            restart: None,
            frame_count: 0,
            elapsed: Duration::ZERO,
            frames_with_touch: 0,
            frozen: false,
            celebration_frames: 0,
            passes: TeamTally::default(),
            restarts: RestartCounts::default(),
        }
    }

    pub fn score(&self, team: TeamSide) -> u32 {
        match team {
            TeamSide::Blue => self.score_blue,
            TeamSide::Red => self.score_red,
        }
    }

    /// Add one goal, returning the new score.
    pub fn award_goal(&mut self, team: TeamSide) -> u32 {
        let slot = match team {
            TeamSide::Blue => &mut self.score_blue,
            TeamSide::Red => &mut self.score_red,
        };
        *slot += 1;
        *slot
    }

    pub fn begin_restart(&mut self, info: RestartInfo) {
        self.restart = Some(info);
        self.phase = Phase::Restarting;
        self.restarts.record(info.kind);
    }

    /// Back to play; the awarded team becomes the last toucher.
    pub fn end_restart(&mut self) -> Option<RestartInfo> {
        let info = self.restart.take()?;
        self.phase = Phase::InPlay;
        self.last_touch = Some(info.awarded_team);
        Some(info)
    }

    pub fn track_possession(&mut self) -> Option<PossessionDelta> {
        if self.last_touch.is_some() {
            self.frames_with_touch += 1;
        }
        self.possession.track(self.last_touch)
    }

    pub fn advance_clock(&mut self) {
        self.frame_count += 1;
        self.elapsed = timestep::elapsed_for_frames(self.frame_count);
    }

    pub fn tick_celebration(&mut self) {
        self.celebration_frames = self.celebration_frames.saturating_sub(1);
    }

    pub fn time_up(&self) -> bool {
        self.elapsed >= timestep::match_duration()
    }

    /// Returns false when there was nothing to pause.
    pub fn pause(&mut self) -> bool {
        let live = match self.phase {
            Phase::InPlay => LivePhase::InPlay,
            Phase::Restarting => LivePhase::Restarting,
            Phase::Paused(_) | Phase::MatchEnded => return false,
        };
        self.phase = Phase::Paused(live);
        true
    }

    pub fn resume(&mut self) -> bool {
        match self.phase {
            Phase::Paused(live) => {
                self.phase = live.into();
                true
            }
            _ => false,
        }
    }

    /// Flush possession and freeze.
    pub fn finish(&mut self) -> Option<PossessionDelta> {
        let delta = self.possession.flush();
        self.phase = Phase::MatchEnded;
        self.restart = None;
        self.frozen = true;
        delta
    }
}
