//! Rule Dispatcher
//!
//! ## Evaluation Order (Fixed, Do Not Change)
//! 1. Left goal line
//! 2. Right goal line
//! 3. Top sideline
//! 4. Bottom sideline
//!
//! A goal-line exit inside the goal mouth is a goal for the attacking team.
//! Outside the mouth it is a goal kick when the attacker touched last and a
//! corner otherwise (including when nobody has touched the ball yet).

use super::types::{BoundaryExit, RestartInfo, RestartKind, RuleDecision, RuleEvaluationStats};
use crate::engine::entities::Ball;
use crate::engine::geometry::Field;
use crate::engine::types::TeamSide;

/// Team awarded a throw-in when nobody has touched the ball
const UNTOUCHED_THROW_IN_TEAM: TeamSide = TeamSide::Blue;

/// Centralized rule evaluation for one field
#[derive(Debug, Clone)]
pub struct RuleDispatcher {
    field: Field,
    stats: RuleEvaluationStats,
}

impl RuleDispatcher {
    pub fn new(field: Field) -> Self {
        Self { field, stats: RuleEvaluationStats::default() }
    }

    pub fn stats(&self) -> &RuleEvaluationStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = RuleEvaluationStats::default();
    }

    /// Evaluate one in-play frame after ball physics.
    pub fn evaluate(&mut self, ball: &Ball, last_touch: Option<TeamSide>) -> RuleDecision {
        self.stats.frames_evaluated += 1;

        let decision = classify_exit(&self.field, ball, last_touch);
        match decision {
            RuleDecision::Continue => {}
            RuleDecision::Goal { .. } => self.stats.goals_detected += 1,
            RuleDecision::OutOfPlay { .. } => self.stats.out_of_play_detected += 1,
        }
        decision
    }
}

/// Classify the ball's position against the field boundary.
pub fn classify_exit(field: &Field, ball: &Ball, last_touch: Option<TeamSide>) -> RuleDecision {
    let Some(edge) = field.reached_edge(&ball.body) else {
        return RuleDecision::Continue;
    };
    let exit = BoundaryExit { edge, point: ball.center() };

    match edge.defender() {
        Some(defender) => {
            let attacker = defender.opponent();
            if field.in_goal_mouth(exit.point.y) {
                RuleDecision::Goal { scorer: attacker, exit }
            } else if last_touch == Some(attacker) {
                RuleDecision::OutOfPlay {
                    exit,
                    restart: RestartInfo::new(RestartKind::GoalKick, defender),
                }
            } else {
                RuleDecision::OutOfPlay {
                    exit,
                    restart: RestartInfo::new(RestartKind::CornerKick, attacker),
                }
            }
        }
        None => {
            let awarded = last_touch.map_or(UNTOUCHED_THROW_IN_TEAM, TeamSide::opponent);
            RuleDecision::OutOfPlay { exit, restart: RestartInfo::new(RestartKind::ThrowIn, awarded) }
        }
    }
}
