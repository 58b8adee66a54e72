//! Clock-driven timing
//!
//! A tween moves a scalar towards a target over a fixed duration. It is
//! sampled once per frame rather than awaited: every call to [`timing`]
//! advances the state by the time elapsed on its clock since the previous
//! sample.

use super::clock::Clock;
use super::easing::Easing;
use std::time::Duration;

/// Mutable state of one tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenState {
    /// Set once the target has been reached
    pub finished: bool,
    /// Current value
    pub position: f32,
    /// Clock timestamp of the previous sample, `None` before the first one
    pub time: Option<Duration>,
    /// Time accumulated since the tween started
    pub frame_time: Duration,
}

impl TweenState {
    /// Fresh state positioned at `value`
    pub fn starting_at(value: f32) -> Self {
        Self {
            finished: false,
            position: value,
            time: None,
            frame_time: Duration::ZERO,
        }
    }
}

/// Fixed parameters of one tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenConfig {
    /// Total duration, independent of the distance travelled
    pub duration: Duration,
    /// Value to reach
    pub target: f32,
    /// Easing curve
    pub easing: Easing,
}

impl TweenConfig {
    /// Config with a zero target
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            target: 0.0,
            easing,
        }
    }
}

/// Advance `state` to the clock's current time
///
/// The starting value is re-derived from the current position and eased
/// progress, so the curve stays continuous if `config.target` changes while
/// the tween is running.
pub fn timing(clock: &Clock, state: &mut TweenState, config: &TweenConfig) {
    if state.finished {
        return;
    }

    let now = clock.now();
    let last = state.time.unwrap_or(now);
    let new_frame_time = state.frame_time + now.saturating_sub(last);

    if new_frame_time >= config.duration {
        state.position = config.target;
        state.finished = true;
    } else {
        let duration = config.duration.as_secs_f32();
        let progress = config.easing.apply(state.frame_time.as_secs_f32() / duration);
        let next_progress = config.easing.apply(new_frame_time.as_secs_f32() / duration);
        let remaining = 1.0 - progress;

        if remaining <= f32::EPSILON {
            state.position = config.target;
        } else {
            let full_distance = (config.target - state.position) / remaining;
            let start = config.target - full_distance;
            state.position = start + full_distance * next_progress;
        }
    }

    state.frame_time = new_frame_time;
    state.time = Some(now);
}

/// One tween session: state plus config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRun {
    /// Tween state
    pub state: TweenState,
    /// Tween config
    pub config: TweenConfig,
}

impl TimingRun {
    /// New session with the given duration and easing
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            state: TweenState::starting_at(0.0),
            config: TweenConfig::new(duration, easing),
        }
    }

    /// Whether the target has been reached
    pub fn is_finished(&self) -> bool {
        self.state.finished
    }
}

/// Sample a tween from `value` to `dest`, starting it if its clock is stopped
///
/// When the clock is not running the session is reinitialised at `value`,
/// its target set to `dest`, and the clock started. While the clock runs,
/// `value` and `dest` are ignored. The clock is stopped on the sample that
/// reaches the target. Returns the position for this frame.
pub fn run_timing(clock: &mut Clock, run: &mut TimingRun, value: f32, dest: f32) -> f32 {
    if !clock.is_running() {
        run.state = TweenState::starting_at(value);
        run.config.target = dest;
        clock.start();
    }

    timing(clock, &mut run.state, &run.config);

    if run.state.finished {
        clock.stop();
        tracing::debug!(clock = %clock.id(), target = run.config.target, "stop clock");
    }

    run.state.position
}
