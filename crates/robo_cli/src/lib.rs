//! Headless match driver
//!
//! Runs matches without a renderer: the data feed is streamed as JSON lines
//! and the final summary can be written as an export document.

use anyhow::{Context, Result};
use robo_core::engine::timestep::MATCH_FRAMES;
use robo_core::{
    FeedEvent, FeedSink, FrameRecord, GameMode, InputFrame, MatchSummary, SessionConfig,
    SessionStats, SimulationContext, StepOutcome,
};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Options for one headless run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub mode: GameMode,
    pub seed: u64,
    /// Frame limit; `None` plays the full match
    pub frames: Option<u64>,
    /// JSON-lines feed output
    pub feed_path: Option<PathBuf>,
    /// Export document output
    pub export_path: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::BotVsBot,
            seed: SessionConfig::default().seed,
            frames: None,
            feed_path: None,
            export_path: None,
        }
    }
}

impl RunOptions {
    /// Mode and seed from a session config, falling back to the defaults.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            mode: config.mode.unwrap_or(GameMode::BotVsBot),
            seed: config.seed,
            ..Self::default()
        }
    }
}

/// One line of the JSON-lines feed
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FeedLine<'a> {
    Frame(&'a FrameRecord),
    Event(&'a FeedEvent),
    Export(&'a MatchSummary),
}

/// Feed sink writing one JSON object per line
///
/// The first write error is kept and reported by [`finish`](Self::finish);
/// later records are dropped.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    lines: u64,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0, error: None }
    }

    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_line(&mut self, line: &FeedLine<'_>) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.writer, line)
            .map_err(io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        match result {
            Ok(()) => self.lines += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

impl<W: Write> FeedSink for JsonLinesSink<W> {
    fn on_frame(&mut self, frame: &FrameRecord) {
        self.write_line(&FeedLine::Frame(frame));
    }

    fn on_event(&mut self, event: &FeedEvent) {
        self.write_line(&FeedLine::Event(event));
    }

    fn on_export(&mut self, summary: &MatchSummary) {
        self.write_line(&FeedLine::Export(summary));
    }
}

/// Exported match report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: String,
    /// RFC3339
    pub exported_at: String,
    pub seed: u64,
    pub summary: MatchSummary,
    pub session: SessionStats,
}

impl ExportDocument {
    pub fn new(seed: u64, summary: MatchSummary, session: SessionStats) -> Self {
        Self {
            version: robo_core::VERSION.to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            seed,
            summary,
            session,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize export")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write export file: {}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read export file: {}", path.display()))?;
        serde_json::from_str(&json).context("Failed to parse export file")
    }
}

fn open_feed(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(io::sink()));
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create feed file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Run one match with idle human input.
///
/// Stops at the frame limit or when the match ends, whichever comes first;
/// hitting the frame limit ends the match as a quit would.
pub fn run_headless(options: &RunOptions) -> Result<MatchSummary> {
    let config = SessionConfig::default().with_seed(options.seed).with_mode(options.mode);
    config.validate()?;

    let writer = open_feed(options.feed_path.as_deref())?;
    let mut sim = SimulationContext::new(config, JsonLinesSink::new(writer));

    let limit = options.frames.unwrap_or(MATCH_FRAMES);
    let input = InputFrame::new();
    log::info!("running {} for up to {limit} frames (seed {})", options.mode, options.seed);
    for _ in 0..limit {
        if sim.step(&input) == StepOutcome::Ended {
            break;
        }
    }
    sim.end_match();

    let summary = sim.summary().context("No mode selected")?;

    if let Some(path) = &options.export_path {
        sim.request_export();
        ExportDocument::new(options.seed, summary.clone(), sim.session_stats().clone())
            .save(path)?;
        log::info!("export written to {}", path.display());
    }

    let sink = sim.into_sink();
    let lines = sink.lines_written();
    sink.finish().context("Failed to write feed")?;
    if let Some(path) = &options.feed_path {
        log::info!("{lines} feed lines written to {}", path.display());
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_feed_and_export() -> Result<()> {
        let dir = tempdir()?;
        let feed = dir.path().join("out/feed.jsonl");
        let export = dir.path().join("out/export.json");
        let options = RunOptions {
            frames: Some(120),
            feed_path: Some(feed.clone()),
            export_path: Some(export.clone()),
            ..RunOptions::default()
        };

        let summary = run_headless(&options)?;
        assert_eq!(summary.frames, 120);
        assert!(summary.ended);

        let lines: Vec<serde_json::Value> = fs::read_to_string(&feed)?
            .lines()
            .map(serde_json::from_str)
            .collect::<std::result::Result<_, _>>()?;
        let frames = lines.iter().filter(|l| l["type"] == "frame").count();
        assert_eq!(frames, 120);
        assert_eq!(lines[0]["frame_index"], 0);
        assert!(lines.iter().any(|l| l["type"] == "event" && l["event"] == "match_ended"));
        assert_eq!(lines.last().map(|l| l["type"].clone()), Some("export".into()));

        let doc = ExportDocument::load(&export)?;
        assert_eq!(doc.seed, options.seed);
        assert_eq!(doc.summary.frames, summary.frames);
        assert_eq!(doc.summary.goals(), summary.goals());
        assert!(chrono::DateTime::parse_from_rfc3339(&doc.exported_at).is_ok());
        assert_eq!(doc.session.mode(GameMode::BotVsBot).matches_played, 1);
        Ok(())
    }

    #[test]
    fn test_full_match_without_outputs() -> Result<()> {
        let summary = run_headless(&RunOptions { seed: 5, ..RunOptions::default() })?;

        assert_eq!(summary.frames, MATCH_FRAMES);
        assert_eq!(summary.duration.as_secs(), 180);
        assert_eq!(summary.mode, GameMode::BotVsBot);
        Ok(())
    }

    #[test]
    fn test_runs_are_reproducible() -> Result<()> {
        let options = RunOptions { seed: 31, frames: Some(2000), ..RunOptions::default() };
        assert_eq!(run_headless(&options)?, run_headless(&options)?);
        Ok(())
    }

    #[test]
    fn test_json_lines_sink_counts_lines() -> Result<()> {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.on_event(&FeedEvent::GoalScored { team: robo_core::TeamSide::Red, new_score: 1 });
        sink.on_event(&FeedEvent::RestartBegan {
            kind: robo_core::RestartKind::KickOff,
            team: robo_core::TeamSide::Blue,
        });
        assert_eq!(sink.lines_written(), 2);

        let bytes = sink.finish()?;
        let text = String::from_utf8(bytes)?;
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap_or(""))?;
        assert_eq!(first["type"], "event");
        assert_eq!(first["event"], "goal_scored");
        assert_eq!(first["team"], "red");
        Ok(())
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_lines_sink_reports_first_error() {
        let mut sink = JsonLinesSink::new(BrokenWriter);
        sink.on_event(&FeedEvent::GoalScored { team: robo_core::TeamSide::Blue, new_score: 1 });
        sink.on_event(&FeedEvent::GoalScored { team: robo_core::TeamSide::Blue, new_score: 2 });

        assert_eq!(sink.lines_written(), 0);
        let err = sink.finish().err().map(|e| e.kind());
        assert_eq!(err, Some(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_options_from_config() {
        let config = SessionConfig::default().with_seed(9).with_mode(GameMode::BotVsMan);
        let options = RunOptions::from_config(&config);
        assert_eq!(options.mode, GameMode::BotVsMan);
        assert_eq!(options.seed, 9);

        assert_eq!(RunOptions::from_config(&SessionConfig::default()).mode, GameMode::BotVsBot);
    }
}
