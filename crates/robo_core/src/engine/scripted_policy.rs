//! Scripted opponent
//!
//! One fixed heuristic: push the ball towards the opponent goal when close,
//! otherwise chase a jittered point around the ball. Movement is per-axis
//! stepping, one unit slower than a human player.

use rand::Rng;

use super::entities::{Ball, Player, Team};
use super::movement::Intent;
use super::physics_constants::{player, scripted};
use super::rules::RestartInfo;
use super::types::{PlayerId, TeamSide, Vector2};

/// Intent magnitude per axis that yields a `SCRIPTED_STEP` displacement
const STEP_INTENT: f32 = player::SCRIPTED_STEP / player::SPEED;

/// Point the player heads for this frame.
///
/// Proximity is measured center to center, but both targets are anchored on
/// the ball's top-left corner, so Red pushes from further behind the ball
/// than Blue. Draws two jitter values from `rng` when chasing and none when
/// pushing.
pub fn scripted_target<R: Rng + ?Sized>(player: &Player, ball: &Ball, rng: &mut R) -> Vector2 {
    let offset = ball.center() - player.center();
    let manhattan = offset.x.abs() + offset.y.abs();
    let anchor = target_anchor(ball);

    if manhattan < scripted::PUSH_PROXIMITY {
        let push = player.id.team.attack_sign() * scripted::PUSH_OFFSET;
        Vector2::new(anchor.x + push, anchor.y)
    } else {
        let jitter = scripted::CHASE_JITTER;
        let dx = rng.gen_range(-jitter..=jitter) as f32;
        let dy = rng.gen_range(-jitter..=jitter) as f32;
        anchor + Vector2::new(dx, dy)
    }
}

/// Top-left corner of the ball's body
fn target_anchor(ball: &Ball) -> Vector2 {
    ball.center() - Vector2::repeat(ball.body.half_extent)
}

/// Per-axis step towards `target`; no step on an axis already aligned.
pub fn step_toward(from: Vector2, target: Vector2) -> Intent {
    let axis = |pos: f32, goal: f32| {
        if pos < goal {
            STEP_INTENT
        } else if pos > goal {
            -STEP_INTENT
        } else {
            0.0
        }
    };
    Intent::new(axis(from.x, target.x), axis(from.y, target.y))
}

/// During a restart only the awarded team may move.
pub fn is_frozen(team: TeamSide, restart: Option<&RestartInfo>) -> bool {
    restart.is_some_and(|info| info.awarded_team != team)
}

/// Intents for every player of a scripted team, lead first.
pub fn plan_team<R: Rng + ?Sized>(
    team: &Team,
    ball: &Ball,
    restart: Option<&RestartInfo>,
    rng: &mut R,
) -> Vec<(PlayerId, Intent)> {
    if is_frozen(team.side, restart) {
        return Vec::new();
    }

    team.iter()
        .map(|player| {
            let target = scripted_target(player, ball, rng);
            (player.id, step_toward(player.center(), target))
        })
        .collect()
}
