//! Simulation context and control surface
//!
//! `SimulationContext` owns the field, both rosters, the ball, the match
//! state, the seeded RNG, session statistics and the feed sink. One call to
//! [`SimulationContext::step`] advances one frame in a fixed order:
//!
//! 1. scripted policy + human input
//! 2. movement and boundary clamp
//! 3. ball physics and rule evaluation (in play) or resumption check (restart)
//! 4. possession tracking
//! 5. feed frame
//! 6. clock and match-end check

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::ball_physics;
use super::entities::{Ball, Teams};
use super::feed::{FeedEvent, FeedRecorder, FeedSink, FrameRecord, NullSink, PossessionDelta};
use super::geometry::Field;
use super::match_state::{MatchState, Phase};
use super::movement::{self, InputFrame, Intent};
use super::physics_constants::{ball as ball_consts, restart as restart_consts};
use super::rules::{self, RuleDecision, RuleDispatcher, RuleEvaluationStats};
use super::scripted_policy;
use super::snapshot::Snapshot;
use super::stats::{MatchSummary, SessionStats};
use super::types::{GameMode, PlayerId, TeamControls, TeamSide, Vector2};
use crate::config::SessionConfig;

/// What a call to `step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No mode selected yet
    Idle,
    /// Paused, nothing advanced
    Paused,
    /// One frame advanced
    Advanced,
    /// The match is over (possibly ended by this step)
    Ended,
}

pub struct SimulationContext<S: FeedSink = NullSink> {
    field: Field,
    config: SessionConfig,
    mode: Option<GameMode>,
    controls: TeamControls,
    teams: Teams,
    ball: Ball,
    state: MatchState,
    rules: RuleDispatcher,
    rng: ChaCha8Rng,
    stats: SessionStats,
    sink: S,
}

impl SimulationContext<FeedRecorder> {
    /// Context feeding a recorder sized from `config.feed_capacity`
    pub fn with_recorder(config: SessionConfig) -> Self {
        let recorder = FeedRecorder::new(config.feed_capacity);
        Self::new(config, recorder)
    }
}

impl<S: FeedSink> SimulationContext<S> {
    /// Selects `config.mode` right away when set; otherwise stepping is idle
    /// until [`select_mode`](Self::select_mode).
    pub fn new(config: SessionConfig, sink: S) -> Self {
        let field = Field::STANDARD;
        let mut context = Self {
            field,
            mode: None,
            controls: TeamControls::default(),
            teams: Teams::in_formation(&field),
            ball: Ball::at(field.center()),
            state: MatchState::new(),
            rules: RuleDispatcher::new(field),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: SessionStats::new(),
            sink,
            config,
        };
        if let Some(mode) = context.config.mode {
            context.select_mode(mode);
        }
        context
    }

    // ========================================
    // Control surface
    // ========================================

    /// Start a fresh match in `mode`. A match in progress is ended first.
    pub fn select_mode(&mut self, mode: GameMode) {
        self.conclude_running_match();
        log::info!("mode selected: {mode}");
        self.mode = Some(mode);
        self.controls = mode.controls();
        self.start_match();
    }

    /// Restart the current mode with zero scores and clock.
    pub fn reset_match(&mut self) {
        let Some(mode) = self.mode else {
            log::debug!("reset ignored: no mode selected");
            return;
        };
        self.conclude_running_match();
        log::info!("match reset ({mode})");
        self.start_match();
    }

    pub fn pause(&mut self) -> bool {
        if self.mode.is_none() {
            return false;
        }
        let paused = self.state.pause();
        if paused {
            log::info!("paused at frame {}", self.state.frame_count);
        }
        paused
    }

    pub fn resume(&mut self) -> bool {
        let resumed = self.state.resume();
        if resumed {
            log::info!("resumed at frame {}", self.state.frame_count);
        }
        resumed
    }

    /// Forward the current summary to the sink.
    pub fn request_export(&mut self) -> Option<MatchSummary> {
        let summary = self.summary()?;
        log::info!("export requested at frame {}", summary.frames);
        self.sink.on_export(&summary);
        Some(summary)
    }

    /// Quit signal: end the match now.
    pub fn end_match(&mut self) {
        if self.mode.is_none() || self.state.frozen {
            return;
        }
        self.finish_match();
    }

    /// Advance one frame.
    pub fn step(&mut self, input: &InputFrame) -> StepOutcome {
        let Some(mode) = self.mode else {
            return StepOutcome::Idle;
        };
        match self.state.phase {
            Phase::MatchEnded => return StepOutcome::Ended,
            Phase::Paused(_) => return StepOutcome::Paused,
            Phase::InPlay | Phase::Restarting => {}
        }

        self.state.tick_celebration();

        for (id, _) in input.iter().filter(|(id, _)| self.controls.is_scripted(id.team)) {
            log::trace!("ignoring input for scripted player {id}");
        }
        let scripted = self.plan_scripted();
        movement::resolve_movement(&mut self.teams, self.controls, input, &scripted, &self.field);

        if self.state.phase == Phase::Restarting {
            self.check_resumption();
        } else {
            self.play_ball(mode);
        }

        let possession_delta = self.state.track_possession();
        self.emit_frame(possession_delta);
        self.state.advance_clock();
        self.enforce_bounds();

        if self.state.time_up() {
            self.finish_match();
            return StepOutcome::Ended;
        }
        StepOutcome::Advanced
    }

    // ========================================
    // Accessors
    // ========================================

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn controls(&self) -> TeamControls {
        self.controls
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state.phase.is_paused()
    }

    pub fn is_ended(&self) -> bool {
        self.state.frozen
    }

    pub fn session_stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn rule_stats(&self) -> &RuleEvaluationStats {
        self.rules.stats()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            ball: self.ball,
            blue: self.teams.blue.players,
            red: self.teams.red.players,
            match_state: self.state.clone(),
            restart: self.state.restart,
            celebration_frames: self.state.celebration_frames,
        }
    }

    /// `None` until a mode is selected
    pub fn summary(&self) -> Option<MatchSummary> {
        self.mode.map(|mode| MatchSummary::from_state(mode, &self.state))
    }

    // ========================================
    // Frame stages
    // ========================================

    fn plan_scripted(&mut self) -> Vec<(PlayerId, Intent)> {
        let restart = self.state.restart;
        let mut intents = Vec::new();
        for side in TeamSide::ALL {
            if self.controls.is_scripted(side) {
                intents.extend(scripted_policy::plan_team(
                    self.teams.get(side),
                    &self.ball,
                    restart.as_ref(),
                    &mut self.rng,
                ));
            }
        }
        intents
    }

    fn play_ball(&mut self, mode: GameMode) {
        let touch = ball_physics::step_ball(&mut self.ball, &self.teams, &self.field);
        if let Some(team) = touch.team {
            self.state.last_touch = Some(team);
        }
        if let (Some(from), Some(to)) = (touch.player, touch.pass_target()) {
            self.state.passes.increment(from.team);
            self.stats.record_pass(mode);
            self.sink.on_event(&FeedEvent::PassPlayed { from, to });
        }

        let decision = self.rules.evaluate(&self.ball, self.state.last_touch);
        self.apply_decision(mode, decision);
    }

    fn apply_decision(&mut self, mode: GameMode, decision: RuleDecision) {
        let (Some(restart), Some(exit)) = (decision.restart(), decision.exit()) else {
            return;
        };

        if let RuleDecision::Goal { scorer, .. } = decision {
            let new_score = self.state.award_goal(scorer);
            self.state.celebration_frames = restart_consts::CELEBRATION_FRAMES;
            self.stats.record_goal(mode);
            log::info!(
                "goal for {scorer} at frame {}: blue {} - red {}",
                self.state.frame_count, self.state.score_blue, self.state.score_red
            );
            self.sink.on_event(&FeedEvent::GoalScored { team: scorer, new_score });
        }

        rules::place_for_restart(&self.field, restart, exit, &mut self.ball, &mut self.teams);
        self.state.begin_restart(restart);
        self.stats.record_restart(mode, restart.kind);
        log::info!("{} awarded to {} ({:?} edge)", restart.kind, restart.awarded_team, exit.edge);
        self.sink.on_event(&FeedEvent::RestartBegan {
            kind: restart.kind,
            team: restart.awarded_team,
        });
    }

    fn check_resumption(&mut self) {
        self.ball.stop();
        let Some(info) = self.state.restart else {
            return;
        };
        let Some(taker) = rules::awarded_touch(&info, &self.ball, &self.teams) else {
            return;
        };

        self.ball.velocity = rules::restart_kick(info.awarded_team, &mut self.rng);
        self.state.end_restart();
        log::debug!("{} taken by {taker}", info.kind);
        self.sink.on_event(&FeedEvent::RestartEnded { kind: info.kind, team: info.awarded_team });
    }

    fn emit_frame(&mut self, possession_delta: Option<PossessionDelta>) {
        let record = FrameRecord {
            frame_index: self.state.frame_count,
            timestamp: self.state.elapsed,
            blue: self.teams.blue.players.map(|p| p.center()),
            red: self.teams.red.players.map(|p| p.center()),
            ball: self.ball.center(),
            ball_velocity: self.ball.velocity,
            last_touch: self.state.last_touch,
            possession_delta,
        };
        self.sink.on_frame(&record);
    }

    /// Every body must be inside the field after a step; release builds clamp.
    fn enforce_bounds(&mut self) {
        let field = self.field;
        for player in self.teams.iter_mut() {
            debug_assert!(
                field.contains(&player.body),
                "player {} outside the field at {:?}",
                player.id,
                player.body.center
            );
            field.clamp_body(&mut player.body);
        }
        debug_assert!(
            field.contains(&self.ball.body),
            "ball outside the field at {:?}",
            self.ball.body.center
        );
        field.clamp_body(&mut self.ball.body);
    }

    // ========================================
    // Match lifecycle
    // ========================================

    fn start_match(&mut self) {
        self.state = MatchState::new();
        self.rules.reset_stats();
        self.teams.reset_formation(&self.field);

        let mut sign = || if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let kick = Vector2::new(sign(), sign()) * ball_consts::SPEED;
        self.ball = Ball::at(self.field.center());
        self.ball.velocity = kick;
    }

    fn conclude_running_match(&mut self) {
        if self.mode.is_some() && !self.state.frozen && self.state.frame_count > 0 {
            self.finish_match();
        }
    }

    fn finish_match(&mut self) {
        let Some(mode) = self.mode else {
            return;
        };
        let flushed = self.state.finish();
        if let Some(delta) = flushed {
            self.sink.on_event(&FeedEvent::PossessionFlushed {
                team: delta.team,
                frames: delta.frames,
            });
        }

        let summary = MatchSummary::from_state(mode, &self.state);
        self.stats.record_match_end(&summary);
        log::info!(
            "match ended ({mode}) after {} frames: blue {} - red {}, possession {:.1}% / {:.1}%",
            summary.frames,
            summary.score_blue,
            summary.score_red,
            summary.possession_blue_pct,
            summary.possession_red_pct
        );
        log::debug!(
            "rule stoppage rate {:.4} over {} in-play frames",
            self.rules.stats().stoppage_rate(),
            self.rules.stats().frames_evaluated
        );
        self.sink.on_event(&FeedEvent::MatchEnded { summary });
    }

    #[cfg(test)]
    pub(crate) fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    #[cfg(test)]
    pub(crate) fn teams_mut(&mut self) -> &mut Teams {
        &mut self.teams
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::feed::FeedEvent;
    use crate::engine::rules::{RestartInfo, RestartKind};
    use crate::engine::test_fixtures::*;
    use crate::engine::timestep::MATCH_FRAMES;
    use proptest::prelude::*;

    #[test]
    fn test_idle_until_mode_selected() {
        let mut ctx = SimulationContext::with_recorder(SessionConfig::default());
        assert_eq!(ctx.step(&InputFrame::new()), StepOutcome::Idle);
        assert_eq!(ctx.sink().frame_count(), 0);
        assert!(ctx.summary().is_none());
        assert!(ctx.request_export().is_none());
        assert!(!ctx.pause());
    }

    #[test]
    fn test_select_mode_kicks_off() {
        let ctx = recording_context(GameMode::BotVsMan, 5);

        assert_eq!(ctx.controls(), GameMode::BotVsMan.controls());
        assert_eq!(ctx.ball().center(), ctx.field().center());
        assert_eq!(ctx.ball().velocity.x.abs(), 5.0);
        assert_eq!(ctx.ball().velocity.y.abs(), 5.0);
        assert_eq!(ctx.state().phase, Phase::InPlay);
        assert_eq!(*ctx.teams(), Teams::in_formation(ctx.field()));
    }

    #[test]
    fn test_goal_at_left_mouth() {
        let mut ctx = recording_context(GameMode::ManVsMan, 1);
        place_ball(&mut ctx, Vector2::new(20.0, 225.0), Vector2::new(-5.0, 0.0));

        assert_eq!(ctx.step(&InputFrame::new()), StepOutcome::Advanced);

        let state = ctx.state();
        assert_eq!((state.score_blue, state.score_red), (0, 1));
        assert_eq!(state.phase, Phase::Restarting);
        assert_eq!(state.restart, Some(RestartInfo::new(RestartKind::KickOff, TeamSide::Blue)));
        assert_eq!(state.celebration_frames, 60);
        assert_eq!(ctx.ball().center(), ctx.field().center());
        assert_eq!(ctx.ball().velocity, Vector2::zeros());
        assert_eq!(*ctx.teams(), Teams::in_formation(ctx.field()));

        let events = ctx.sink().events();
        assert_eq!(events[0], FeedEvent::GoalScored { team: TeamSide::Red, new_score: 1 });
        assert_eq!(
            events[1],
            FeedEvent::RestartBegan { kind: RestartKind::KickOff, team: TeamSide::Blue }
        );
        assert_eq!(ctx.session_stats().mode(GameMode::ManVsMan).goals, 1);
        assert_eq!(ctx.rule_stats().goals_detected, 1);
        assert_eq!(ctx.rule_stats().frames_evaluated, 1);
        assert!(ctx.snapshot().celebrating());
    }

    #[test]
    fn test_restart_freeze_until_awarded_touch() {
        let mut ctx = recording_context(GameMode::ManVsMan, 1);
        place_ball(&mut ctx, Vector2::new(20.0, 225.0), Vector2::new(-5.0, 0.0));
        ctx.step(&InputFrame::new());
        let spot = ctx.ball().center();

        // the conceding side is awarded the kick-off; Red touching does nothing
        ctx.teams_mut().red.lead_mut().body.center = spot;
        for _ in 0..120 {
            ctx.step(&InputFrame::new());
            assert_eq!(ctx.ball().center(), spot);
            assert_eq!(ctx.ball().velocity, Vector2::zeros());
            assert_eq!(ctx.state().phase, Phase::Restarting);
        }
        assert_eq!(ctx.state().celebration_frames, 0);

        ctx.teams_mut().blue.players[1].body.center = spot + Vector2::new(-20.0, 0.0);
        ctx.step(&InputFrame::new());

        let state = ctx.state();
        assert_eq!(state.phase, Phase::InPlay);
        assert_eq!(state.restart, None);
        assert_eq!(state.last_touch, Some(TeamSide::Blue));
        let kick = ctx.ball().velocity;
        assert!((1.0..=3.0).contains(&kick.x));
        assert!((-2.0..=2.0).contains(&kick.y));
        assert_eq!(
            ctx.sink().events().last(),
            Some(&FeedEvent::RestartEnded { kind: RestartKind::KickOff, team: TeamSide::Blue })
        );
    }

    #[test]
    fn test_top_sideline_throw_in() {
        let mut ctx = recording_context(GameMode::ManVsMan, 1);
        for player in ctx.teams_mut().blue.players.iter_mut() {
            player.body.center = Vector2::new(500.0, 300.0);
        }
        ctx.state_mut().last_touch = Some(TeamSide::Blue);
        place_ball(&mut ctx, Vector2::new(300.0, 20.0), Vector2::new(0.0, -5.0));

        ctx.step(&InputFrame::new());

        let state = ctx.state();
        assert_eq!(state.restart, Some(RestartInfo::new(RestartKind::ThrowIn, TeamSide::Red)));
        assert_eq!(ctx.ball().center(), Vector2::new(300.0, 30.0));
        assert_eq!(ctx.teams().blue, Teams::in_formation(ctx.field()).blue);
        assert_eq!(ctx.teams().red.lead().center(), Vector2::new(300.0, 73.0));
        assert_eq!(state.restarts.throw_in, 1);
    }

    #[test]
    fn test_scripted_team_frozen_during_opponent_restart() {
        let mut ctx = recording_context(GameMode::BotVsBot, 11);
        place_ball(&mut ctx, Vector2::new(20.0, 225.0), Vector2::new(-5.0, 0.0));
        ctx.teams_mut().reset_formation(&Field::STANDARD);
        ctx.step(&InputFrame::new());
        assert_eq!(ctx.state().restart.map(|r| r.awarded_team), Some(TeamSide::Blue));

        let red_before = ctx.teams().red.clone();
        let blue_before = ctx.teams().blue.clone();
        ctx.step(&InputFrame::new());

        assert_eq!(ctx.teams().red, red_before);
        assert_ne!(ctx.teams().blue, blue_before);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut ctx = recording_context(GameMode::BotVsBot, 3);
        ctx.step(&InputFrame::new());

        assert!(ctx.pause());
        let frozen = ctx.snapshot();
        for _ in 0..10 {
            assert_eq!(ctx.step(&InputFrame::new()), StepOutcome::Paused);
        }
        assert_eq!(ctx.snapshot(), frozen);
        assert_eq!(ctx.sink().frame_count(), 1);

        assert!(ctx.resume());
        assert_eq!(ctx.step(&InputFrame::new()), StepOutcome::Advanced);
        assert_eq!(ctx.state().frame_count, 2);
    }

    #[test]
    fn test_end_match_freezes_and_reports() {
        let mut ctx = recording_context(GameMode::BotVsBot, 3);
        run_frames(&mut ctx, 300);
        ctx.end_match();

        assert!(ctx.is_ended());
        assert_eq!(ctx.step(&InputFrame::new()), StepOutcome::Ended);
        assert_eq!(ctx.state().frame_count, 300);
        assert!(!ctx.pause());

        let possession = &ctx.state().possession;
        assert_eq!(possession.blue_frames + possession.red_frames, ctx.state().frames_with_touch);
        assert_eq!(possession.pending_frames, 0);

        match ctx.sink().events().last() {
            Some(FeedEvent::MatchEnded { summary }) => {
                assert!(summary.ended);
                assert_eq!(summary.frames, 300);
            }
            other => panic!("expected match end, got {:?}", other),
        }
        assert_eq!(ctx.session_stats().mode(GameMode::BotVsBot).matches_played, 1);

        // second quit is ignored
        ctx.end_match();
        assert_eq!(ctx.session_stats().mode(GameMode::BotVsBot).matches_played, 1);
    }

    /// Possession frames reported through the feed, frame deltas plus the final flush
    fn fed_possession_frames(recorder: &FeedRecorder) -> u64 {
        let from_frames: u64 = recorder
            .frames()
            .filter_map(|f| f.possession_delta)
            .map(|d| d.frames)
            .sum();
        let from_events: u64 = recorder
            .events()
            .iter()
            .filter_map(|e| match e {
                FeedEvent::PossessionFlushed { frames, .. } => Some(*frames),
                _ => None,
            })
            .sum();
        from_frames + from_events
    }

    #[test]
    fn test_feed_reports_all_committed_possession() {
        let config = SessionConfig::default()
            .with_seed(3)
            .with_mode(GameMode::BotVsBot)
            .with_feed_capacity(100_000);
        let mut ctx = SimulationContext::with_recorder(config);
        run_frames(&mut ctx, 300);
        ctx.end_match();

        let possession = &ctx.state().possession;
        let committed = possession.blue_frames + possession.red_frames;
        assert!(committed > 0);
        assert_eq!(fed_possession_frames(ctx.sink()), committed);

        let events = ctx.sink().events();
        let flush = events
            .iter()
            .position(|e| matches!(e, FeedEvent::PossessionFlushed { .. }));
        let end = events.iter().position(|e| matches!(e, FeedEvent::MatchEnded { .. }));
        assert!(flush.is_some());
        assert_eq!(flush.map(|i| i + 1), end);
    }

    #[test]
    fn test_full_match_ends_on_time() {
        let mut ctx = recording_context(GameMode::BotVsBot, 2024);
        let mut advanced = 0;
        loop {
            match ctx.step(&InputFrame::new()) {
                StepOutcome::Advanced => advanced += 1,
                StepOutcome::Ended => break,
                other => panic!("unexpected {:?}", other),
            }
        }

        assert_eq!(advanced + 1, MATCH_FRAMES);
        assert_eq!(ctx.state().frame_count, MATCH_FRAMES);
        assert!(ctx.state().time_up());
        assert_eq!(ctx.sink().frame_count(), ctx.config().feed_capacity);

        let summary = ctx.summary().unwrap();
        assert!(summary.ended);
        assert_eq!(
            summary.possession_blue_frames + summary.possession_red_frames,
            ctx.state().frames_with_touch
        );
        assert_eq!(
            ctx.session_stats().mode(GameMode::BotVsBot).goals,
            summary.goals()
        );
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = recording_context(GameMode::BotVsBot, 77);
        let mut b = recording_context(GameMode::BotVsBot, 77);
        run_frames(&mut a, 1500);
        run_frames(&mut b, 1500);

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.sink().events(), b.sink().events());
    }

    #[test]
    fn test_reset_records_previous_match() {
        let mut ctx = recording_context(GameMode::BotVsMan, 8);
        run_frames(&mut ctx, 50);
        ctx.state_mut().score_red = 2;

        ctx.reset_match();

        assert_eq!(ctx.state().score_red, 0);
        assert_eq!(ctx.state().frame_count, 0);
        assert!(!ctx.is_ended());
        assert_eq!(ctx.session_stats().mode(GameMode::BotVsMan).matches_played, 1);
        assert_eq!(ctx.mode(), Some(GameMode::BotVsMan));
    }

    #[test]
    fn test_select_mode_switches_controls() {
        let mut ctx = recording_context(GameMode::ManVsMan, 8);
        ctx.select_mode(GameMode::BotVsBot);

        assert_eq!(ctx.controls(), GameMode::BotVsBot.controls());
        // nothing was played, nothing recorded
        assert_eq!(ctx.session_stats().mode(GameMode::ManVsMan).matches_played, 0);
    }

    #[test]
    fn test_request_export_reaches_sink() {
        let mut ctx = recording_context(GameMode::BotVsBot, 4);
        run_frames(&mut ctx, 10);

        let summary = ctx.request_export().unwrap();

        assert_eq!(summary.frames, 10);
        assert!(!summary.ended);
        assert_eq!(ctx.sink().export_requests(), 1);
        assert_eq!(ctx.sink().exports()[0], summary);
    }

    #[test]
    fn test_human_input_moves_player() {
        let mut ctx = recording_context(GameMode::BotVsMan, 4);
        let start = ctx.teams().blue.players[1].center();
        let input = human_input(PlayerId::new(TeamSide::Blue, 1), Intent::new(1.0, 0.0));

        ctx.step(&input);

        assert_eq!(ctx.teams().blue.players[1].center(), start + Vector2::new(4.0, 0.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_bodies_stay_on_field(
            seed in any::<u64>(),
            moves in prop::collection::vec((-1i8..=1, -1i8..=1, -1i8..=1, -1i8..=1), 1..400),
        ) {
            let mut ctx = recording_context(GameMode::ManVsMan, seed);
            for (bx, by, rx, ry) in moves {
                let input = InputFrame::new()
                    .with(PlayerId::lead(TeamSide::Blue), Intent::new(bx as f32, by as f32))
                    .with(PlayerId::lead(TeamSide::Red), Intent::new(rx as f32, ry as f32));
                ctx.step(&input);

                let field = *ctx.field();
                prop_assert!(ctx.teams().iter().all(|p| field.contains(&p.body)));
                prop_assert!(field.contains(&ctx.ball().body));
            }
        }
    }
}
