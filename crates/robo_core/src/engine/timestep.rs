/// timestep.rs
/// Fixed timestep constants
///
/// One simulation step per rendered frame at 60 frames per second.
/// Match time is derived from the frame counter, never from a wall clock,
/// so a replayed match ends on exactly the same frame.
use std::time::Duration;

/// Simulation steps per second
pub const FRAME_RATE: u32 = 60;

/// Match duration ceiling (3 minutes)
pub const MATCH_DURATION_SECS: u64 = 180;

/// Frames in a full match
pub const MATCH_FRAMES: u64 = FRAME_RATE as u64 * MATCH_DURATION_SECS;

// Compile-time validation
const _: () = assert!(MATCH_FRAMES == 10_800);

/// Match duration as a `Duration`
pub fn match_duration() -> Duration {
    Duration::from_secs(MATCH_DURATION_SECS)
}

/// Elapsed match time after `frames` steps
pub fn elapsed_for_frames(frames: u64) -> Duration {
    let rate = FRAME_RATE as u64;
    let whole = Duration::from_secs(frames / rate);
    let remainder = Duration::from_nanos((frames % rate) * 1_000_000_000 / rate);
    whole + remainder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestep_consistency() {
        assert_eq!(FRAME_RATE, 60);
        assert_eq!(MATCH_FRAMES / FRAME_RATE as u64, MATCH_DURATION_SECS);
    }

    #[test]
    fn test_elapsed_for_frames() {
        assert_eq!(elapsed_for_frames(0), Duration::ZERO);
        assert_eq!(elapsed_for_frames(60), Duration::from_secs(1));
        assert_eq!(elapsed_for_frames(90), Duration::from_millis(1500));
        assert_eq!(elapsed_for_frames(MATCH_FRAMES), match_duration());
    }

    #[test]
    fn test_elapsed_reaches_ceiling_only_on_last_frame() {
        assert!(elapsed_for_frames(MATCH_FRAMES - 1) < match_duration());
    }
}
