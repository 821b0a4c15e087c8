//! Restart placement and resumption.
//!
//! Placement runs once when play stops; resumption is checked every frame
//! while a restart is pending.

use rand::Rng;

use super::types::{BoundaryExit, RestartInfo, RestartKind};
use crate::engine::entities::{Ball, Teams};
use crate::engine::geometry::{Edge, Field};
use crate::engine::movement::clamp_players;
use crate::engine::physics_constants::restart;
use crate::engine::types::{PlayerId, TeamSide, Vector2};

/// Position ball and players for a restart.
///
/// The ball always ends up stationary and fully inside the field. Players are
/// clamped after placement, so a lead placed near a corner may be nudged
/// inwards.
pub fn place_for_restart(
    field: &Field,
    info: RestartInfo,
    exit: BoundaryExit,
    ball: &mut Ball,
    teams: &mut Teams,
) {
    let awarded = info.awarded_team;
    let other = awarded.opponent();

    match info.kind {
        RestartKind::KickOff => {
            ball.place(field.center());
            teams.reset_formation(field);
        }
        RestartKind::GoalKick => {
            let x = field.goal_line_x(awarded) + awarded.attack_sign() * Field::GOAL_KICK_SPOT;
            let spot = Vector2::new(x, field.height / 2.0);
            ball.place(spot);
            teams.get_mut(other).reset_formation(field);
            teams.get_mut(awarded).lead_mut().body.center =
                spot - Vector2::new(0.0, Field::GOAL_KICK_LEAD_GAP);
        }
        RestartKind::CornerKick => {
            // The corner lies on the defending team's goal line.
            let inward = other.attack_sign();
            let x = field.goal_line_x(other) + inward * Field::CORNER_BALL_INSET;
            let y = if exit.point.y < field.height / 2.0 {
                Field::CORNER_BALL_INSET
            } else {
                field.height - Field::CORNER_BALL_INSET
            };
            ball.place(Vector2::new(x, y));
            teams.get_mut(other).reset_formation(field);
            teams.get_mut(awarded).lead_mut().body.center =
                Vector2::new(x + inward * Field::CORNER_LEAD_GAP, y);
        }
        RestartKind::ThrowIn => {
            let min_x = ball.body.half_extent + Field::THROW_IN_LINE_CLEARANCE;
            let x = exit.point.x.clamp(min_x, field.width - min_x);
            let inset = ball.body.half_extent + Field::THROW_IN_INSET;
            let (y, inward) = match exit.edge {
                Edge::Bottom => (field.height - inset, -1.0),
                _ => (inset, 1.0),
            };
            ball.place(Vector2::new(x, y));
            teams.get_mut(other).reset_formation(field);
            teams.get_mut(awarded).lead_mut().body.center =
                Vector2::new(x, y + inward * Field::THROW_IN_LEAD_GAP);
        }
    }

    clamp_players(teams, field);
}

/// First player of the awarded team overlapping the ball
pub fn awarded_touch(info: &RestartInfo, ball: &Ball, teams: &Teams) -> Option<PlayerId> {
    teams
        .get(info.awarded_team)
        .iter()
        .find(|player| player.body.overlaps(&ball.body))
        .map(|player| player.id)
}

/// Small random kick in the team's attacking direction
pub fn restart_kick<R: Rng + ?Sized>(team: TeamSide, rng: &mut R) -> Vector2 {
    let speed = rng.gen_range(restart::KICK_MIN..=restart::KICK_MAX);
    let spread = rng.gen_range(-restart::KICK_SPREAD..=restart::KICK_SPREAD);
    Vector2::new(team.attack_sign() * speed, spread)
}
