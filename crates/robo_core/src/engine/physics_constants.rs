//! Physics constants for the 2v2 simulation
//!
//! Distances are field units (the field is 800 x 450), speeds are units per
//! frame. Placement offsets used by restarts live on [`crate::engine::Field`].

// ============================================================
// Field
// ============================================================
pub mod field {
    /// Field width (x-direction)
    pub const WIDTH: f32 = 800.0;
    /// Field height (y-direction)
    pub const HEIGHT: f32 = 450.0;
    /// Goal mouth open interval on both goal lines (ball center y)
    pub const GOAL_MOUTH_TOP: f32 = 140.0;
    pub const GOAL_MOUTH_BOTTOM: f32 = 310.0;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    /// Half side of the ball's bounding square
    pub const HALF_EXTENT: f32 = 15.0;
    /// Reference ball speed
    pub const SPEED: f32 = 5.0;
    /// Per-frame velocity retention
    pub const FRICTION: f32 = 0.98;
    /// Generic player contact: speed = SPEED * COLLISION_FORCE
    pub const COLLISION_FORCE: f32 = 1.5;
    /// Lead-to-teammate pass: speed = SPEED * PASS_FORCE
    pub const PASS_FORCE: f32 = 1.2;
    /// Floor for contact distance when normalizing directions
    pub const MIN_CONTACT_DISTANCE: f32 = 1.0;
}

// ============================================================
// Players
// ============================================================
pub mod player {
    /// Half side of a player's bounding square
    pub const HALF_EXTENT: f32 = 18.0;
    /// Units per frame per axis at full intent
    pub const SPEED: f32 = 4.0;
    /// Scripted players step one unit slower than humans
    pub const SCRIPTED_STEP: f32 = SPEED - 1.0;
}

// ============================================================
// Scripted opponent
// ============================================================
pub mod scripted {
    /// Manhattan distance below which the bot pushes instead of chasing
    pub const PUSH_PROXIMITY: f32 = 50.0;
    /// Push target offset from the ball towards the opponent goal
    pub const PUSH_OFFSET: f32 = 30.0;
    /// Chase target jitter, inclusive integer range per axis
    pub const CHASE_JITTER: i32 = 20;
}

// ============================================================
// Red lead pass
// ============================================================
pub mod passing {
    /// Teammate must be this far ahead of the ball (x)
    pub const AHEAD_THRESHOLD: f32 = 50.0;
    /// Teammate must be within this vertical distance of the ball
    pub const ALIGN_THRESHOLD: f32 = 100.0;
}

// ============================================================
// Restarts
// ============================================================
pub mod restart {
    /// Resumption kick speed along the attacking direction, uniform range
    pub const KICK_MIN: f32 = 1.0;
    pub const KICK_MAX: f32 = 3.0;
    /// Resumption kick vertical spread, uniform in [-SPREAD, SPREAD]
    pub const KICK_SPREAD: f32 = 2.0;
    /// Frames the renderer shows the goal celebration
    pub const CELEBRATION_FRAMES: u32 = 60;
}
