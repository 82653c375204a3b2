//! Timeline playback state machine.
//!
//! Drives the "current instant" that the pipeline turns into a point-in-time
//! window. Ticks come from an external fixed-cadence timer; each accepted
//! advance pulses an injected feedback sink so the scrub feels tactile
//! without this crate knowing anything about haptics hardware.

use std::sync::Arc;

use time::Duration;

use fluxglobe_core::{InstantRange, UtcDateTime};

/// One simulated hour per tick.
pub const TICK_STEP: Duration = Duration::HOUR;

/// Feedback capability pulsed on every accepted timeline advance.
pub trait FeedbackSink: Send + Sync {
    fn pulse(&self);
}

/// Default sink that swallows pulses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn pulse(&self) {}
}

/// State machine over `{paused, playing}` with an instant and bounds.
///
/// Invariant: `current_instant` always lies within `bounds`. Advances that
/// would leave the bounds are rejected whole, never clamped; narrowing the
/// bounds snaps the instant to the new lower bound.
pub struct TimelineController {
    current_instant: UtcDateTime,
    playing: bool,
    bounds: InstantRange,
    feedback: Arc<dyn FeedbackSink>,
    feedback_enabled: bool,
}

impl Default for TimelineController {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineController {
    pub fn new() -> Self {
        Self::with_feedback(Arc::new(NoopFeedback))
    }

    pub fn with_feedback(feedback: Arc<dyn FeedbackSink>) -> Self {
        Self {
            current_instant: UtcDateTime::now(),
            playing: false,
            bounds: InstantRange::unbounded(),
            feedback,
            feedback_enabled: true,
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_instant(&self) -> UtcDateTime {
        self.current_instant
    }

    pub fn bounds(&self) -> InstantRange {
        self.bounds
    }

    /// External cadence callback. While playing, advances one [`TICK_STEP`];
    /// a step that would overflow the upper bound pauses playback and leaves
    /// the instant at its last valid value.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }

        match self.advanced_by(TICK_STEP) {
            Some(next) => self.commit(next),
            None => self.pause(),
        }
    }

    /// Manual scrub by an arbitrary interval. Out-of-bounds steps are
    /// silently rejected.
    pub fn step(&mut self, by: Duration) {
        if let Some(next) = self.advanced_by(by) {
            self.commit(next);
        }
    }

    pub fn set_bounds(&mut self, bounds: InstantRange) {
        self.bounds = bounds;
        if !bounds.contains(self.current_instant) {
            self.current_instant = bounds.lower();
        }
    }

    pub fn reset_to_start(&mut self) {
        self.current_instant = self.bounds.lower();
    }

    pub fn reset_to_end(&mut self) {
        self.current_instant = self.bounds.upper();
    }

    /// Position within the bounds in [0, 1]; 0 for zero-duration bounds.
    pub fn progress(&self) -> f64 {
        let total = self.bounds.duration_seconds();
        if total <= 0.0 {
            return 0.0;
        }
        self.current_instant.seconds_since(self.bounds.lower()) / total
    }

    /// Inverse of `progress`. The input is clamped to [0, 1], so the mapped
    /// instant is always within bounds and commits unconditionally. Scrubbing
    /// via progress does not pulse feedback.
    pub fn set_progress(&mut self, progress: f64) {
        let clamped = progress.clamp(0.0, 1.0);
        let offset = Duration::seconds_f64(self.bounds.duration_seconds() * clamped);
        self.current_instant = self
            .bounds
            .lower()
            .checked_add(offset)
            .unwrap_or_else(|| self.bounds.upper());
    }

    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.feedback_enabled = enabled;
    }

    fn advanced_by(&self, by: Duration) -> Option<UtcDateTime> {
        self.current_instant
            .checked_add(by)
            .filter(|next| self.bounds.contains(*next))
    }

    fn commit(&mut self, instant: UtcDateTime) {
        self.current_instant = instant;
        if self.feedback_enabled {
            self.feedback.pulse();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    struct CountingFeedback(AtomicU64);

    impl CountingFeedback {
        fn new() -> Arc<Self> {
            Arc::new(Self(AtomicU64::new(0)))
        }

        fn pulses(&self) -> u64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl FeedbackSink for CountingFeedback {
        fn pulse(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn at(input: &str) -> UtcDateTime {
        UtcDateTime::parse(input).expect("must parse")
    }

    fn day_bounds() -> InstantRange {
        InstantRange::new(at("2024-01-01T00:00:00Z"), at("2024-01-02T00:00:00Z"))
            .expect("must validate")
    }

    fn controller_at_start() -> TimelineController {
        let mut timeline = TimelineController::new();
        timeline.set_bounds(day_bounds());
        timeline.reset_to_start();
        timeline
    }

    #[test]
    fn starts_paused() {
        let timeline = TimelineController::new();
        assert!(!timeline.is_playing());
    }

    #[test]
    fn tick_is_a_noop_while_paused() {
        let mut timeline = controller_at_start();
        let before = timeline.current_instant();
        timeline.tick();
        assert_eq!(timeline.current_instant(), before);
    }

    #[test]
    fn tick_advances_one_hour_while_playing() {
        let mut timeline = controller_at_start();
        timeline.play();
        timeline.tick();
        assert_eq!(timeline.current_instant(), at("2024-01-01T01:00:00Z"));
        assert!(timeline.is_playing());
    }

    #[test]
    fn overflowing_tick_pauses_without_moving() {
        let mut timeline = controller_at_start();
        timeline.reset_to_end();
        timeline.play();
        timeline.tick();

        assert!(!timeline.is_playing());
        assert_eq!(timeline.current_instant(), at("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn tick_reaches_the_upper_bound_exactly() {
        let mut timeline = TimelineController::new();
        let bounds = InstantRange::new(at("2024-01-01T00:00:00Z"), at("2024-01-01T01:00:00Z"))
            .expect("must validate");
        timeline.set_bounds(bounds);
        timeline.reset_to_start();
        timeline.play();

        timeline.tick();
        assert_eq!(timeline.current_instant(), at("2024-01-01T01:00:00Z"));
        assert!(timeline.is_playing());

        timeline.tick();
        assert!(!timeline.is_playing());
        assert_eq!(timeline.current_instant(), at("2024-01-01T01:00:00Z"));
    }

    #[test]
    fn out_of_bounds_step_is_silently_rejected() {
        let mut timeline = controller_at_start();
        timeline.step(Duration::days(5));
        assert_eq!(timeline.current_instant(), at("2024-01-01T00:00:00Z"));

        timeline.step(Duration::hours(-1));
        assert_eq!(timeline.current_instant(), at("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn narrowing_bounds_snaps_to_the_lower_bound() {
        let mut timeline = controller_at_start();
        timeline.step(Duration::hours(20));
        assert_eq!(timeline.current_instant(), at("2024-01-01T20:00:00Z"));

        let narrow = InstantRange::new(at("2024-01-01T00:00:00Z"), at("2024-01-01T06:00:00Z"))
            .expect("must validate");
        timeline.set_bounds(narrow);
        assert_eq!(timeline.current_instant(), at("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn progress_maps_linearly_into_bounds() {
        let mut timeline = controller_at_start();
        assert_eq!(timeline.progress(), 0.0);

        timeline.step(Duration::hours(12));
        assert!((timeline.progress() - 0.5).abs() < 1e-9);

        timeline.reset_to_end();
        assert!((timeline.progress() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn progress_is_zero_for_zero_duration_bounds() {
        let mut timeline = TimelineController::new();
        timeline.set_bounds(InstantRange::point(at("2024-01-01T00:00:00Z")));
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn set_progress_clamps_and_commits() {
        let mut timeline = controller_at_start();

        timeline.set_progress(0.5);
        assert_eq!(timeline.current_instant(), at("2024-01-01T12:00:00Z"));

        timeline.set_progress(7.0);
        assert_eq!(timeline.current_instant(), at("2024-01-02T00:00:00Z"));

        timeline.set_progress(-3.0);
        assert_eq!(timeline.current_instant(), at("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn accepted_advances_pulse_feedback() {
        let feedback = CountingFeedback::new();
        let mut timeline = TimelineController::with_feedback(feedback.clone());
        timeline.set_bounds(day_bounds());
        timeline.reset_to_start();
        timeline.play();

        timeline.tick();
        timeline.step(Duration::hours(1));
        assert_eq!(feedback.pulses(), 2);

        // Rejected steps never pulse.
        timeline.step(Duration::days(30));
        assert_eq!(feedback.pulses(), 2);

        timeline.set_feedback_enabled(false);
        timeline.tick();
        assert_eq!(feedback.pulses(), 2);
    }
}
