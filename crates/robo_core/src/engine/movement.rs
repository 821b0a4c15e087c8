//! Player movement for one frame.
//!
//! Each player gets at most one intent per frame: from the input frame when
//! its team is human-controlled, from the scripted policy otherwise. Players
//! are clamped back inside the field after moving.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entities::{Player, Teams};
use super::geometry::{Body, Field};
use super::physics_constants::player;
use super::types::{ControlSource, PlayerId, TeamControls, Vector2};

/// Per-axis movement request in [-1, 1], scaled by the player speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub x: f32,
    pub y: f32,
}

impl Intent {
    pub const IDLE: Intent = Intent { x: 0.0, y: 0.0 };

    /// Components are clamped to [-1, 1]; NaN becomes 0.
    pub fn new(x: f32, y: f32) -> Self {
        let axis = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self { x: axis(x), y: axis(y) }
    }

    /// Build from held direction keys.
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Self { x: axis(left, right), y: axis(up, down) }
    }

    pub fn is_idle(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Displacement for one frame
    pub fn displacement(&self) -> Vector2 {
        Vector2::new(self.x, self.y) * player::SPEED
    }
}

/// Human intents for one frame, keyed by player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    intents: HashMap<PlayerId, Intent>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, id: PlayerId, intent: Intent) -> Self {
        self.set(id, intent);
        self
    }

    pub fn set(&mut self, id: PlayerId, intent: Intent) {
        self.intents.insert(id, intent);
    }

    pub fn get(&self, id: PlayerId) -> Option<Intent> {
        self.intents.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Intent)> + '_ {
        self.intents.iter().map(|(id, intent)| (*id, *intent))
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

pub fn apply_intent(player: &mut Player, intent: Intent) {
    player.body.center += intent.displacement();
}

pub fn clamp_to_field(body: &mut Body, field: &Field) {
    field.clamp_body(body);
}

pub fn clamp_players(teams: &mut Teams, field: &Field) {
    for player in teams.iter_mut() {
        clamp_to_field(&mut player.body, field);
    }
}

/// Move every player by its resolved intent, then clamp.
///
/// Human teams read `input`; scripted teams read `scripted`. Intents aimed at
/// players of the other control source are ignored.
pub fn resolve_movement(
    teams: &mut Teams,
    controls: TeamControls,
    input: &InputFrame,
    scripted: &[(PlayerId, Intent)],
    field: &Field,
) {
    for player in teams.iter_mut() {
        let intent = match controls.source(player.id.team) {
            ControlSource::Human => input.get(player.id),
            ControlSource::Scripted => {
                scripted.iter().find(|(id, _)| *id == player.id).map(|(_, intent)| *intent)
            }
        };
        if let Some(intent) = intent {
            apply_intent(player, intent);
        }
        clamp_to_field(&mut player.body, field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{GameMode, TeamSide};

    const BLUE_LEAD: PlayerId = PlayerId::lead(TeamSide::Blue);
    const RED_LEAD: PlayerId = PlayerId::lead(TeamSide::Red);

    #[test]
    fn test_intent_clamps_components() {
        let intent = Intent::new(3.0, f32::NAN);
        assert_eq!(intent, Intent { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_intent_from_keys() {
        assert_eq!(Intent::from_keys(false, true, true, false), Intent { x: 1.0, y: -1.0 });
        assert!(Intent::from_keys(true, true, false, false).is_idle());
    }

    #[test]
    fn test_human_moves_at_full_speed() {
        let field = Field::STANDARD;
        let mut teams = Teams::in_formation(&field);
        let input = InputFrame::new().with(BLUE_LEAD, Intent::new(1.0, 1.0));

        resolve_movement(&mut teams, GameMode::ManVsMan.controls(), &input, &[], &field);

        assert_eq!(teams.blue.lead().center(), Vector2::new(72.0, 172.0));
        assert_eq!(teams.blue.players[1].center(), Vector2::new(68.0, 318.0));
    }

    #[test]
    fn test_input_for_scripted_team_is_ignored() {
        let field = Field::STANDARD;
        let mut teams = Teams::in_formation(&field);
        let before = teams.red.lead().center();
        let input = InputFrame::new().with(RED_LEAD, Intent::new(-1.0, 0.0));

        resolve_movement(&mut teams, GameMode::BotVsMan.controls(), &input, &[], &field);

        assert_eq!(teams.red.lead().center(), before);
    }

    #[test]
    fn test_scripted_intents_apply_to_scripted_team() {
        let field = Field::STANDARD;
        let mut teams = Teams::in_formation(&field);
        let scripted = [(RED_LEAD, Intent::new(-0.75, 0.0))];

        resolve_movement(&mut teams, GameMode::BotVsBot.controls(), &InputFrame::new(), &scripted, &field);

        assert_eq!(teams.red.lead().center(), Vector2::new(745.0, 168.0));
    }

    #[test]
    fn test_player_pressed_into_corner_stays_inside() {
        let field = Field::STANDARD;
        let mut teams = Teams::in_formation(&field);
        teams.blue.lead_mut().body.center = Vector2::new(19.0, 19.0);
        let input = InputFrame::new().with(BLUE_LEAD, Intent::new(-1.0, -1.0));

        for _ in 0..5 {
            resolve_movement(&mut teams, GameMode::ManVsMan.controls(), &input, &[], &field);
        }

        assert_eq!(teams.blue.lead().center(), Vector2::new(18.0, 18.0));
    }
}
