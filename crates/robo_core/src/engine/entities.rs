//! Ball, players and teams.

use serde::{Deserialize, Serialize};

use super::geometry::{Body, Field};
use super::physics_constants::{ball, player};
use super::types::{PlayerId, TeamSide, Vector2, TEAM_SIZE};

/// The single match ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Units per frame
    pub velocity: Vector2,
}

impl Ball {
    /// Stationary ball centered at `center`
    pub fn at(center: Vector2) -> Self {
        Self { body: Body::new(center, ball::HALF_EXTENT), velocity: Vector2::zeros() }
    }

    pub fn center(&self) -> Vector2 {
        self.body.center
    }

    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Move to `center` and stop.
    pub fn place(&mut self, center: Vector2) {
        self.body.center = center;
        self.velocity = Vector2::zeros();
    }

    pub fn stop(&mut self) {
        self.velocity = Vector2::zeros();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub body: Body,
}

impl Player {
    pub fn new(id: PlayerId, center: Vector2) -> Self {
        Self { id, body: Body::new(center, player::HALF_EXTENT) }
    }

    pub fn center(&self) -> Vector2 {
        self.body.center
    }
}

/// One side's players, lead at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub side: TeamSide,
    pub players: [Player; TEAM_SIZE],
}

impl Team {
    pub fn in_formation(side: TeamSide, field: &Field) -> Self {
        let centers = field.formation(side);
        let players =
            std::array::from_fn(|index| Player::new(PlayerId::new(side, index), centers[index]));
        Self { side, players }
    }

    /// Return every player to its kickoff spot.
    pub fn reset_formation(&mut self, field: &Field) {
        for (player, center) in self.players.iter_mut().zip(field.formation(self.side)) {
            player.body.center = center;
        }
    }

    pub fn lead(&self) -> &Player {
        &self.players[0]
    }

    pub fn lead_mut(&mut self) -> &mut Player {
        &mut self.players[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

/// Both teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub blue: Team,
    pub red: Team,
}

impl Teams {
    pub fn in_formation(field: &Field) -> Self {
        Self {
            blue: Team::in_formation(TeamSide::Blue, field),
            red: Team::in_formation(TeamSide::Red, field),
        }
    }

    pub fn reset_formation(&mut self, field: &Field) {
        self.blue.reset_formation(field);
        self.red.reset_formation(field);
    }

    pub fn get(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Blue => &self.blue,
            TeamSide::Red => &self.red,
        }
    }

    pub fn get_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Blue => &mut self.blue,
            TeamSide::Red => &mut self.red,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.get(id.team).players[id.index]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.get_mut(id.team).players[id.index]
    }

    /// Blue players then Red players, each lead first
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.blue.players.iter().chain(self.red.players.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.blue.players.iter_mut().chain(self.red.players.iter_mut())
    }
}
