//! Data feed
//!
//! The simulation pushes one [`FrameRecord`] per advanced frame plus discrete
//! [`FeedEvent`]s to a [`FeedSink`]. Export requests forward the current
//! [`MatchSummary`].

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::rules::RestartKind;
use super::stats::MatchSummary;
use super::types::{PlayerId, TeamSide, Vector2, TEAM_SIZE};

pub use super::match_state::PossessionDelta;

/// Default number of frames kept by [`FeedRecorder`]
pub const DEFAULT_FEED_CAPACITY: usize = 1000;

/// Positions after one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame_index: u64,
    pub timestamp: Duration,
    pub blue: [Vector2; TEAM_SIZE],
    pub red: [Vector2; TEAM_SIZE],
    pub ball: Vector2,
    pub ball_velocity: Vector2,
    pub last_touch: Option<TeamSide>,
    pub possession_delta: Option<PossessionDelta>,
}

/// Discrete match events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FeedEvent {
    GoalScored { team: TeamSide, new_score: u32 },
    RestartBegan { kind: RestartKind, team: TeamSide },
    RestartEnded { kind: RestartKind, team: TeamSide },
    PassPlayed { from: PlayerId, to: PlayerId },
    /// Final possession run committed at match end; frame deltas cover the rest
    PossessionFlushed { team: TeamSide, frames: u64 },
    MatchEnded { summary: MatchSummary },
}

/// Consumer of the data feed
pub trait FeedSink {
    fn on_frame(&mut self, frame: &FrameRecord);

    fn on_event(&mut self, event: &FeedEvent);

    /// Export request from the control surface
    fn on_export(&mut self, _summary: &MatchSummary) {}
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedSink for NullSink {
    fn on_frame(&mut self, _frame: &FrameRecord) {}

    fn on_event(&mut self, _event: &FeedEvent) {}
}

/// Bounded in-memory feed
///
/// Keeps the most recent `capacity` frames (oldest dropped), every event and
/// the summaries of all export requests.
#[derive(Debug, Clone)]
pub struct FeedRecorder {
    capacity: usize,
    frames: VecDeque<FrameRecord>,
    events: Vec<FeedEvent>,
    exports: Vec<MatchSummary>,
    dropped_frames: u64,
}

impl Default for FeedRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

impl FeedRecorder {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            frames: VecDeque::with_capacity(capacity),
            events: Vec::new(),
            exports: Vec::new(),
            dropped_frames: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn frames(&self) -> impl Iterator<Item = &FrameRecord> {
        self.frames.iter()
    }

    pub fn latest_frame(&self) -> Option<&FrameRecord> {
        self.frames.back()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frames evicted to respect the capacity
    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }

    pub fn events(&self) -> &[FeedEvent] {
        &self.events
    }

    pub fn exports(&self) -> &[MatchSummary] {
        &self.exports
    }

    pub fn export_requests(&self) -> usize {
        self.exports.len()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.events.clear();
        self.exports.clear();
        self.dropped_frames = 0;
    }
}

impl FeedSink for FeedRecorder {
    fn on_frame(&mut self, frame: &FrameRecord) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
            self.dropped_frames += 1;
        }
        self.frames.push_back(frame.clone());
    }

    fn on_event(&mut self, event: &FeedEvent) {
        self.events.push(event.clone());
    }

    fn on_export(&mut self, summary: &MatchSummary) {
        self.exports.push(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(index: u64) -> FrameRecord {
        FrameRecord {
            frame_index: index,
            timestamp: Duration::from_millis(index * 16),
            blue: [Vector2::zeros(); TEAM_SIZE],
            red: [Vector2::zeros(); TEAM_SIZE],
            ball: Vector2::new(400.0, 225.0),
            ball_velocity: Vector2::zeros(),
            last_touch: None,
            possession_delta: None,
        }
    }

    #[test]
    fn test_recorder_drops_oldest() {
        let mut recorder = FeedRecorder::new(3);
        for i in 0..5 {
            recorder.on_frame(&frame(i));
        }

        let kept: Vec<u64> = recorder.frames().map(|f| f.frame_index).collect();
        assert_eq!(kept, vec![2, 3, 4]);
        assert_eq!(recorder.dropped_frames(), 2);
        assert_eq!(recorder.latest_frame().map(|f| f.frame_index), Some(4));
    }

    #[test]
    fn test_recorder_zero_capacity() {
        let mut recorder = FeedRecorder::new(0);
        recorder.on_frame(&frame(0));
        recorder.on_frame(&frame(1));
        assert_eq!(recorder.capacity(), 1);
        assert_eq!(recorder.frame_count(), 1);
    }

    #[test]
    fn test_recorder_keeps_all_events() {
        let mut recorder = FeedRecorder::default();
        recorder.on_event(&FeedEvent::GoalScored { team: TeamSide::Red, new_score: 1 });
        recorder.on_event(&FeedEvent::RestartBegan {
            kind: RestartKind::KickOff,
            team: TeamSide::Blue,
        });

        assert_eq!(recorder.events().len(), 2);
        assert_eq!(recorder.export_requests(), 0);

        recorder.clear();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let event = FeedEvent::GoalScored { team: TeamSide::Blue, new_score: 2 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "goal_scored");
        assert_eq!(json["team"], "blue");
        assert_eq!(json["new_score"], 2);
    }
}
