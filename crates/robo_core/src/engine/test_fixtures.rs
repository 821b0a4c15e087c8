//! Test Fixtures Module
//!
//! Shared helpers for building simulation contexts and arranging entities.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::engine::test_fixtures::*;
//! ```

use crate::config::SessionConfig;
use crate::engine::feed::FeedRecorder;
use crate::engine::movement::{InputFrame, Intent};
use crate::engine::simulation::{SimulationContext, StepOutcome};
use crate::engine::types::{GameMode, PlayerId, Vector2};

// =============================================================================
// Context Helpers
// =============================================================================

/// Context with a default-capacity recorder, `mode` already selected.
pub fn recording_context(mode: GameMode, seed: u64) -> SimulationContext<FeedRecorder> {
    let config = SessionConfig::default().with_seed(seed).with_mode(mode);
    SimulationContext::with_recorder(config)
}

/// Step `frames` times with no human input, returning the last outcome.
pub fn run_frames<S: crate::engine::feed::FeedSink>(
    ctx: &mut SimulationContext<S>,
    frames: usize,
) -> StepOutcome {
    let input = InputFrame::new();
    let mut outcome = StepOutcome::Idle;
    for _ in 0..frames {
        outcome = ctx.step(&input);
    }
    outcome
}

// =============================================================================
// Entity Helpers
// =============================================================================

pub fn place_ball<S: crate::engine::feed::FeedSink>(
    ctx: &mut SimulationContext<S>,
    center: Vector2,
    velocity: Vector2,
) {
    let ball = ctx.ball_mut();
    ball.body.center = center;
    ball.velocity = velocity;
}

pub fn human_input(id: PlayerId, intent: Intent) -> InputFrame {
    InputFrame::new().with(id, intent)
}
