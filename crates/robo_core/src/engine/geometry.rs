//! Axis-aligned bodies and the rectangular field.
//!
//! Coordinates are field-local: origin at the top-left corner, x grows to
//! the right, y grows downwards.

use serde::{Deserialize, Serialize};

use super::physics_constants::{ball, field, player};
use super::types::{TeamSide, Vector2, TEAM_SIZE};

/// Square body described by its center and half side length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub center: Vector2,
    pub half_extent: f32,
}

impl Body {
    pub fn new(center: Vector2, half_extent: f32) -> Self {
        Self { center, half_extent }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extent
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extent
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half_extent
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extent
    }

    /// Strict overlap: bodies sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Field boundary a body reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Blue's goal line (x = 0)
    Left,
    /// Red's goal line (x = width)
    Right,
    /// Upper sideline (y = 0)
    Top,
    /// Lower sideline (y = height)
    Bottom,
}

impl Edge {
    /// Team defending this edge, `None` for sidelines
    pub fn defender(self) -> Option<TeamSide> {
        match self {
            Edge::Left => Some(TeamSide::Blue),
            Edge::Right => Some(TeamSide::Red),
            Edge::Top | Edge::Bottom => None,
        }
    }
}

/// Playing field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Goal mouth open interval (ball center y), identical on both goal lines
    pub goal_mouth_top: f32,
    pub goal_mouth_bottom: f32,
}

impl Field {
    pub const STANDARD: Field = Field {
        width: field::WIDTH,
        height: field::HEIGHT,
        goal_mouth_top: field::GOAL_MOUTH_TOP,
        goal_mouth_bottom: field::GOAL_MOUTH_BOTTOM,
    };

    /// Goal kick: ball center distance from the defended goal line
    pub const GOAL_KICK_SPOT: f32 = 30.0;
    /// Goal kick: awarded lead stands this far above the ball
    pub const GOAL_KICK_LEAD_GAP: f32 = 30.0;
    /// Corner: ball center distance from both edges of the corner
    pub const CORNER_BALL_INSET: f32 = ball::HALF_EXTENT + 2.0;
    /// Corner: attacking lead offset from the ball, towards the field
    pub const CORNER_LEAD_GAP: f32 = 20.0;
    /// Throw-in: ball edge distance from the sideline
    pub const THROW_IN_INSET: f32 = 15.0;
    /// Throw-in: receiving lead offset from the ball, towards the field
    pub const THROW_IN_LEAD_GAP: f32 = ball::HALF_EXTENT + player::HALF_EXTENT + 10.0;
    /// Throw-in: ball edge clearance from the goal lines
    pub const THROW_IN_LINE_CLEARANCE: f32 = 1.0;

    /// Formation: Blue column center distance from the left goal line
    pub const BLUE_FORMATION_X: f32 = 68.0;
    /// Formation: Red column center distance from the right goal line
    pub const RED_FORMATION_X: f32 = 52.0;
    /// Formation rows (center y), lead first
    pub const FORMATION_ROWS: [f32; TEAM_SIZE] = [168.0, 318.0];

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Body lies fully inside the field; touching an edge counts as inside.
    pub fn contains(&self, body: &Body) -> bool {
        body.left() >= 0.0
            && body.right() <= self.width
            && body.top() >= 0.0
            && body.bottom() <= self.height
    }

    /// Clamp a body fully inside the field, returning which axes moved.
    pub fn clamp_body(&self, body: &mut Body) -> (bool, bool) {
        let h = body.half_extent;
        let x = body.center.x.clamp(h, self.width - h);
        let y = body.center.y.clamp(h, self.height - h);
        let moved = (x != body.center.x, y != body.center.y);
        body.center = Vector2::new(x, y);
        moved
    }

    /// First edge the body has reached or crossed.
    ///
    /// Goal lines are checked before sidelines, left before right,
    /// top before bottom.
    pub fn reached_edge(&self, body: &Body) -> Option<Edge> {
        if body.left() <= 0.0 {
            Some(Edge::Left)
        } else if body.right() >= self.width {
            Some(Edge::Right)
        } else if body.top() <= 0.0 {
            Some(Edge::Top)
        } else if body.bottom() >= self.height {
            Some(Edge::Bottom)
        } else {
            None
        }
    }

    /// Strictly between the goal posts
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        y > self.goal_mouth_top && y < self.goal_mouth_bottom
    }

    /// x of the goal line a team defends
    pub fn goal_line_x(&self, team: TeamSide) -> f32 {
        match team {
            TeamSide::Blue => 0.0,
            TeamSide::Red => self.width,
        }
    }

    /// Kickoff formation centers for a team, lead first
    pub fn formation(&self, team: TeamSide) -> [Vector2; TEAM_SIZE] {
        let x = match team {
            TeamSide::Blue => Self::BLUE_FORMATION_X,
            TeamSide::Red => self.width - Self::RED_FORMATION_X,
        };
        Self::FORMATION_ROWS.map(|y| Vector2::new(x, y))
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::STANDARD
    }
}
