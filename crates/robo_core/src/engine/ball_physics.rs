//! Ball physics: integration, friction, wall reflection and player contact.
//!
//! Runs only while the ball is in play. Contacts are first-touch-wins in
//! roster order (Blue lead, Blue 1, Red lead, Red 1).

use serde::{Deserialize, Serialize};

use super::entities::{Ball, Player, Teams};
use super::geometry::Field;
use super::physics_constants::{ball as ball_consts, passing};
use super::types::{PlayerId, TeamSide, Vector2};

/// Result of the contact stage for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TouchOutcome {
    pub team: Option<TeamSide>,
    pub player: Option<PlayerId>,
    /// Red lead passed to its teammate
    pub pass: bool,
}

impl TouchOutcome {
    fn touched_by(player: PlayerId, pass: bool) -> Self {
        Self { team: Some(player.team), player: Some(player), pass }
    }

    /// Receiver of the pass, if one was played
    pub fn pass_target(&self) -> Option<PlayerId> {
        match self.player {
            Some(from) if self.pass => Some(PlayerId::new(from.team, 1)),
            _ => None,
        }
    }
}

/// Integrate, apply friction, reflect off walls.
pub fn integrate_ball(ball: &mut Ball, field: &Field) {
    ball.body.center += ball.velocity;
    ball.velocity *= ball_consts::FRICTION;
    reflect_off_walls(ball, field);
}

/// Clamp the ball to the field and point the velocity inwards on any axis
/// that reached an edge. The reflected component loses friction once more.
pub fn reflect_off_walls(ball: &mut Ball, field: &Field) {
    let h = ball.body.half_extent;
    let friction = ball_consts::FRICTION;
    let center = &mut ball.body.center;
    let velocity = &mut ball.velocity;

    if center.y - h <= 0.0 {
        center.y = h;
        velocity.y = velocity.y.abs() * friction;
    } else if center.y + h >= field.height {
        center.y = field.height - h;
        velocity.y = -velocity.y.abs() * friction;
    }

    if center.x - h <= 0.0 {
        center.x = h;
        velocity.x = velocity.x.abs() * friction;
    } else if center.x + h >= field.width {
        center.x = field.width - h;
        velocity.x = -velocity.x.abs() * friction;
    }
}

/// Resolve the first player overlapping the ball.
pub fn resolve_player_contacts(ball: &mut Ball, teams: &Teams) -> TouchOutcome {
    let Some(toucher) = teams.iter().find(|p| p.body.overlaps(&ball.body)) else {
        return TouchOutcome::default();
    };

    if toucher.id == PlayerId::lead(TeamSide::Red) {
        let mate = teams.player(PlayerId::new(TeamSide::Red, 1));
        if try_pass(ball, mate) {
            log::debug!("pass {} -> {}", toucher.id, mate.id);
            return TouchOutcome::touched_by(toucher.id, true);
        }
    }

    push_away(ball, toucher);
    TouchOutcome::touched_by(toucher.id, false)
}

/// Integrate then resolve contacts.
pub fn step_ball(ball: &mut Ball, teams: &Teams, field: &Field) -> TouchOutcome {
    integrate_ball(ball, field);
    resolve_player_contacts(ball, teams)
}

fn try_pass(ball: &mut Ball, mate: &Player) -> bool {
    let ball_center = ball.center();
    let to_mate = mate.center() - ball_center;
    let ahead = mate.center().x > ball_center.x + passing::AHEAD_THRESHOLD;
    let aligned = to_mate.y.abs() < passing::ALIGN_THRESHOLD;
    let distance = to_mate.norm();

    if !(ahead && aligned) || distance <= 0.0 {
        return false;
    }

    ball.velocity = to_mate / distance * (ball_consts::SPEED * ball_consts::PASS_FORCE);
    true
}

fn push_away(ball: &mut Ball, player: &Player) {
    let offset = ball.center() - player.center();
    let raw = offset.norm();
    let distance = raw.max(ball_consts::MIN_CONTACT_DISTANCE);

    // Coincident centers: kick along the toucher's attacking direction.
    let direction = if raw > 0.0 {
        offset / distance
    } else {
        Vector2::new(player.id.team.attack_sign(), 0.0)
    };

    ball.velocity = direction * (ball_consts::SPEED * ball_consts::COLLISION_FORCE);

    let penetration = player.body.half_extent + ball.body.half_extent - distance;
    if penetration > 0.0 {
        ball.body.center += direction * penetration;
    }
}
