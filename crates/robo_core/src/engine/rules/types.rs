//! Rule System Types
//!
//! Decisions produced by the dispatcher and the restart bookkeeping shared
//! with match state and session statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::geometry::Edge;
use crate::engine::types::{TeamSide, Vector2};

/// Set-piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartKind {
    /// After a goal, awarded to the conceding team
    KickOff,
    /// Attacker put the ball over the goal line, awarded to the defender
    GoalKick,
    /// Defender put the ball over its own goal line, awarded to the attacker
    CornerKick,
    /// Ball crossed a sideline, awarded to the team that did not touch it last
    ThrowIn,
}

impl RestartKind {
    pub const ALL: [RestartKind; 4] = [
        RestartKind::KickOff,
        RestartKind::GoalKick,
        RestartKind::CornerKick,
        RestartKind::ThrowIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RestartKind::KickOff => "kick_off",
            RestartKind::GoalKick => "goal_kick",
            RestartKind::CornerKick => "corner_kick",
            RestartKind::ThrowIn => "throw_in",
        }
    }
}

impl fmt::Display for RestartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pending restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartInfo {
    pub kind: RestartKind,
    pub awarded_team: TeamSide,
}

impl RestartInfo {
    pub fn new(kind: RestartKind, awarded_team: TeamSide) -> Self {
        Self { kind, awarded_team }
    }
}

/// Where the ball left play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryExit {
    pub edge: Edge,
    /// Ball center when the edge was reached
    pub point: Vector2,
}

/// Rule decision types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleDecision {
    /// Ball still in play
    Continue,

    /// Ball crossed a goal line inside the goal mouth
    Goal { scorer: TeamSide, exit: BoundaryExit },

    /// Ball crossed a boundary elsewhere
    OutOfPlay { exit: BoundaryExit, restart: RestartInfo },
}

impl RuleDecision {
    /// Check if this decision stops play
    pub fn stops_play(&self) -> bool {
        !matches!(self, RuleDecision::Continue)
    }

    /// Restart that follows this decision (if any)
    pub fn restart(&self) -> Option<RestartInfo> {
        match self {
            RuleDecision::Continue => None,
            RuleDecision::Goal { scorer, .. } => {
                Some(RestartInfo::new(RestartKind::KickOff, scorer.opponent()))
            }
            RuleDecision::OutOfPlay { restart, .. } => Some(*restart),
        }
    }

    pub fn exit(&self) -> Option<BoundaryExit> {
        match self {
            RuleDecision::Continue => None,
            RuleDecision::Goal { exit, .. } | RuleDecision::OutOfPlay { exit, .. } => Some(*exit),
        }
    }
}

/// Restarts taken, per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartCounts {
    pub kick_off: u32,
    pub goal_kick: u32,
    pub corner_kick: u32,
    pub throw_in: u32,
}

impl RestartCounts {
    pub fn record(&mut self, kind: RestartKind) {
        *self.slot(kind) += 1;
    }

    pub fn get(&self, kind: RestartKind) -> u32 {
        match kind {
            RestartKind::KickOff => self.kick_off,
            RestartKind::GoalKick => self.goal_kick,
            RestartKind::CornerKick => self.corner_kick,
            RestartKind::ThrowIn => self.throw_in,
        }
    }

    pub fn total(&self) -> u32 {
        self.kick_off + self.goal_kick + self.corner_kick + self.throw_in
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &RestartCounts) {
        for kind in RestartKind::ALL {
            *self.slot(kind) += other.get(kind);
        }
    }

    fn slot(&mut self, kind: RestartKind) -> &mut u32 {
        match kind {
            RestartKind::KickOff => &mut self.kick_off,
            RestartKind::GoalKick => &mut self.goal_kick,
            RestartKind::CornerKick => &mut self.corner_kick,
            RestartKind::ThrowIn => &mut self.throw_in,
        }
    }
}

/// Dispatcher counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEvaluationStats {
    /// Frames evaluated while in play
    pub frames_evaluated: u64,
    /// Goals detected
    pub goals_detected: u32,
    /// Non-goal boundary exits detected
    pub out_of_play_detected: u32,
}

impl RuleEvaluationStats {
    /// Share of evaluated frames that stopped play
    pub fn stoppage_rate(&self) -> f32 {
        if self.frames_evaluated == 0 {
            return 0.0;
        }
        (self.goals_detected + self.out_of_play_detected) as f32 / self.frames_evaluated as f32
    }
}
