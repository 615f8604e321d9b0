//! Time-driven interpolation of the displayed value.
//!
//! An [`Animator`] holds at most one run. A run moves the displayed value
//! linearly from wherever it currently is toward a target over a fixed
//! duration; progress is recomputed from wall-clock time on every frame, so a
//! late or dropped frame never slows the run down. Starting a run while
//! another is in flight supersedes it from the current displayed position.

use std::time::{Duration, Instant};

/// Whether a run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run is in progress. Initial state, and terminal state of every run.
    #[default]
    Idle,
    /// A run is advancing toward its target.
    Running,
}

/// Snapshot produced by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Displayed value after this frame.
    pub displayed: f64,
    /// Fraction of the run's duration that has elapsed, capped at 1.
    pub progress: f64,
}

impl Frame {
    /// Whether this frame completed the run.
    pub fn finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Per-instance animation run state.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    displayed: f64,
    target: f64,
    start: f64,
    started_at: Option<Instant>,
    duration: Duration,
    state: RunState,
}

impl Animator {
    /// Creates an idle animator displaying zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run toward `target`, superseding any run in progress.
    ///
    /// The run starts from the value displayed so far.
    pub fn start(&mut self, target: f64, duration: Duration, now: Instant) {
        self.start = self.displayed;
        self.target = target;
        self.duration = duration;
        self.started_at = Some(now);
        self.state = RunState::Running;
    }

    /// Stops the run where it is. The displayed value is kept.
    pub fn cancel(&mut self) {
        self.state = RunState::Idle;
    }

    /// Advances the run to `now`.
    ///
    /// Returns `None` when no run is active. The frame that reaches the target
    /// moves the animator back to [`RunState::Idle`].
    pub fn advance(&mut self, now: Instant) -> Option<Frame> {
        if self.state != RunState::Running {
            return None;
        }
        let started_at = self.started_at?;

        let progress = progress(now.saturating_duration_since(started_at), self.duration);
        self.displayed = self.start + (self.target - self.start) * progress;

        if progress >= 1.0 {
            self.state = RunState::Idle;
        }

        Some(Frame {
            displayed: self.displayed,
            progress,
        })
    }

    /// Value currently displayed.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Value the current (or last) run moves toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Value the current (or last) run started from.
    pub fn start_value(&self) -> f64 {
        self.start
    }

    /// Instant the current (or last) run started.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Duration of the current (or last) run.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

/// `min(elapsed / duration, 1)`; a zero duration is already complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Converts a millisecond count into a run duration.
///
/// Negative and NaN counts become zero; counts too large to represent saturate.
pub fn duration_from_millis(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_is_idle_at_zero() {
        let a = Animator::new();
        assert_eq!(a.state(), RunState::Idle);
        assert_eq!(a.displayed(), 0.0);
        assert!(a.started_at().is_none());
    }

    #[test]
    fn test_idle_advance_is_none() {
        let mut a = Animator::new();
        assert!(a.advance(Instant::now()).is_none());
    }

    #[test]
    fn test_zero_to_fifty_over_one_second() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(50.0, ms(1000), t0);

        let first = a.advance(t0).unwrap();
        assert_eq!(first.displayed, 0.0);
        assert!(!first.finished());

        let half = a.advance(t0 + ms(500)).unwrap();
        assert!((half.displayed - 25.0).abs() < 1e-9);
        assert!(a.is_running());

        let done = a.advance(t0 + ms(1000)).unwrap();
        assert_eq!(done.displayed, 50.0);
        assert!(done.finished());
        assert_eq!(a.state(), RunState::Idle);
    }

    #[test]
    fn test_progress_caps_at_one() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(80.0, ms(200), t0);
        let late = a.advance(t0 + ms(5000)).unwrap();
        assert_eq!(late.progress, 1.0);
        assert_eq!(late.displayed, 80.0);
    }

    #[test]
    fn test_monotonic_within_a_run() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(100.0, ms(1000), t0);

        let mut last = a.displayed();
        for step in (0..=1200).step_by(16) {
            if let Some(frame) = a.advance(t0 + ms(step)) {
                assert!(frame.displayed >= last);
                assert!(frame.displayed <= 100.0);
                last = frame.displayed;
            }
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_decreasing_run_is_monotonic_down() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(60.0, Duration::ZERO, t0);
        a.advance(t0);
        a.start(20.0, ms(400), t0);

        let mut last = a.displayed();
        for step in (0..=400).step_by(40) {
            let frame = a.advance(t0 + ms(step)).unwrap();
            assert!(frame.displayed <= last);
            last = frame.displayed;
        }
        assert_eq!(last, 20.0);
    }

    #[test]
    fn test_restart_resumes_from_displayed() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(100.0, ms(1000), t0);
        a.advance(t0 + ms(300));
        let reached = a.displayed();
        assert!((reached - 30.0).abs() < 1e-9);

        let t1 = t0 + ms(300);
        a.start(50.0, ms(1000), t1);
        assert_eq!(a.start_value(), reached);
        let first = a.advance(t1).unwrap();
        assert!((first.displayed - 30.0).abs() < 1e-9);

        let halfway = a.advance(t1 + ms(500)).unwrap();
        assert!((halfway.displayed - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_completes_on_first_frame() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(42.0, Duration::ZERO, t0);
        let frame = a.advance(t0).unwrap();
        assert_eq!(frame.displayed, 42.0);
        assert!(frame.finished());
        assert!(!a.is_running());
    }

    #[test]
    fn test_cancel_keeps_displayed() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(100.0, ms(1000), t0);
        a.advance(t0 + ms(250));
        a.cancel();
        assert_eq!(a.state(), RunState::Idle);
        assert!(a.advance(t0 + ms(900)).is_none());
        assert!((a.displayed() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_before_start_counts_as_zero_elapsed() {
        let t0 = Instant::now();
        let mut a = Animator::new();
        a.start(10.0, ms(100), t0 + ms(50));
        let frame = a.advance(t0).unwrap();
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.displayed, 0.0);
    }

    #[test]
    fn test_duration_from_millis() {
        assert_eq!(duration_from_millis(-250.0), Duration::ZERO);
        assert_eq!(duration_from_millis(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_millis(0.0), Duration::ZERO);
        assert_eq!(duration_from_millis(1000.0), ms(1000));
        assert_eq!(duration_from_millis(f64::INFINITY), Duration::MAX);
    }
}
