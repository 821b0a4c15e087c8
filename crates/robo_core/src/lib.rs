//! # robo_core - 2v2 Arcade Soccer Simulation Core
//!
//! Fixed-timestep simulation of a small-sided soccer match: two teams of two
//! players, one ball, friction and wall bounces, a scripted opponent and a
//! rule layer for goals and restarts (kick-off, goal kick, corner, throw-in).
//!
//! ## Features
//! - Deterministic: the same seed and inputs replay the same match
//! - No globals: everything lives in a [`SimulationContext`]
//! - Read-only [`Snapshot`] for renderers, push-based data feed for reporting
//!
//! ## Example
//! ```
//! use robo_core::{GameMode, InputFrame, SessionConfig, SimulationContext, StepOutcome};
//!
//! let config = SessionConfig::default().with_mode(GameMode::BotVsBot);
//! let mut sim = SimulationContext::with_recorder(config);
//! assert_eq!(sim.step(&InputFrame::new()), StepOutcome::Advanced);
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{SessionConfig, SESSION_CONFIG_PATH_ENV};
pub use engine::{
    Ball, FeedEvent, FeedRecorder, FeedSink, FrameRecord, GameMode, InputFrame, Intent,
    MatchState, MatchSummary, NullSink, Phase, PlayerId, RestartInfo, RestartKind, SessionStats,
    SimulationContext, Snapshot, StepOutcome, TeamSide,
};
pub use error::ConfigError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
