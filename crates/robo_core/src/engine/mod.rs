pub mod ball_physics;
pub mod entities;
pub mod feed;
pub mod geometry;
pub mod match_state;
pub mod movement;
pub mod physics_constants;
pub mod rules;
pub mod scripted_policy;
pub mod simulation;
pub mod snapshot;
pub mod stats;
pub mod timestep;
pub mod types;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use ball_physics::TouchOutcome;
pub use entities::{Ball, Player, Team, Teams};
pub use feed::{FeedEvent, FeedRecorder, FeedSink, FrameRecord, NullSink, PossessionDelta};
pub use geometry::{Body, Edge, Field};
pub use match_state::{LivePhase, MatchState, Phase, Possession, TeamTally};
pub use movement::{InputFrame, Intent};
pub use rules::{RestartInfo, RestartKind, RuleDecision};
pub use simulation::{SimulationContext, StepOutcome};
pub use snapshot::Snapshot;
pub use stats::{MatchSummary, ModeStats, SessionStats};
pub use types::{ControlSource, GameMode, PlayerId, TeamControls, TeamSide, Vector2, TEAM_SIZE};
