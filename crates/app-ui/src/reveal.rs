//! Login reveal animation
//!
//! The login screen switches between a compact view (two sign-in buttons)
//! and an expanded view (the credential form). A single driver value in
//! `[0, 1]` is the source of truth: `1` is fully collapsed, `0` fully
//! expanded. Every visual parameter is a clamped linear mapping of the
//! driver, so they all move in lockstep.
//!
//! Transitions are started by completed taps and run for a fixed duration on
//! a per-direction [`Clock`]. A transition takes its time base from the first
//! frame after the tap, so frames skipped while idle do not count towards it.
//! A reverse tap while a transition is in flight cancels it and starts the
//! reverse transition from the current driver value.

use crate::animation::{interpolate, run_timing, Clock, InterpolationConfig, TimingRun};
use crate::config::RevealConfig;
use crate::gesture::{GestureEvent, GestureRegion};
use crate::tokens::{reveal, z_index};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Driver value when the compact buttons are showing
pub const COLLAPSED_VALUE: f32 = 1.0;

/// Driver value when the credential form is showing
pub const EXPANDED_VALUE: f32 = 0.0;

// =============================================================================
// State
// =============================================================================

/// Semantic state of the reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Compact buttons visible, form hidden
    #[default]
    Collapsed,
    /// Credential form visible
    Expanded,
}

impl RevealState {
    /// Settled driver value for this state
    pub fn driver_value(&self) -> f32 {
        match self {
            RevealState::Collapsed => COLLAPSED_VALUE,
            RevealState::Expanded => EXPANDED_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Expand,
    Collapse,
}

impl Direction {
    fn destination(self) -> RevealState {
        match self {
            Direction::Expand => RevealState::Expanded,
            Direction::Collapse => RevealState::Collapsed,
        }
    }

    fn target(self) -> f32 {
        self.destination().driver_value()
    }
}

// =============================================================================
// Derived Parameters
// =============================================================================

/// A named visual parameter derived from the driver value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedParameter {
    /// Parameter name
    pub name: &'static str,
    /// Mapping from the driver value
    pub mapping: InterpolationConfig,
}

impl DerivedParameter {
    /// Evaluate against a driver value
    pub fn evaluate(&self, driver: f32) -> f32 {
        interpolate(driver, &self.mapping)
    }
}

/// The parameters derived from the driver, for a window of the given height
pub fn derived_parameters(window_height: f32) -> [DerivedParameter; 6] {
    let drive = [EXPANDED_VALUE, COLLAPSED_VALUE];
    [
        DerivedParameter {
            name: "button_y",
            mapping: InterpolationConfig::clamped(drive, [reveal::TRAVEL, 0.0]),
        },
        DerivedParameter {
            name: "background_y",
            mapping: InterpolationConfig::clamped(
                drive,
                [-window_height * reveal::BACKGROUND_LIFT, 0.0],
            ),
        },
        DerivedParameter {
            name: "form_z_index",
            mapping: InterpolationConfig::clamped(drive, [z_index::FORM_FRONT, z_index::FORM_BACK]),
        },
        DerivedParameter {
            name: "form_y",
            mapping: InterpolationConfig::clamped(drive, [0.0, reveal::TRAVEL]),
        },
        DerivedParameter {
            name: "form_opacity",
            mapping: InterpolationConfig::clamped(drive, [1.0, 0.0]),
        },
        DerivedParameter {
            name: "close_rotation_deg",
            mapping: InterpolationConfig::clamped(
                drive,
                [reveal::CLOSE_ROTATION_OPEN, reveal::CLOSE_ROTATION_HIDDEN],
            ),
        },
    ]
}

/// Snapshot of every visual parameter for one driver value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealParams {
    /// The driver value itself
    pub driver: f32,
    /// Opacity of the compact buttons (equal to the driver)
    pub button_opacity: f32,
    /// Vertical offset of the compact buttons
    pub button_y: f32,
    /// Vertical offset of the background illustration
    pub background_y: f32,
    /// Stacking order of the credential form
    pub form_z_index: f32,
    /// Vertical offset of the credential form
    pub form_y: f32,
    /// Opacity of the credential form
    pub form_opacity: f32,
    /// Rotation of the close icon in degrees
    pub close_rotation_deg: f32,
}

impl RevealParams {
    /// Evaluate every derived parameter at `driver`
    pub fn at(driver: f32, window_height: f32) -> Self {
        let [button_y, background_y, form_z_index, form_y, form_opacity, close_rotation_deg] =
            derived_parameters(window_height).map(|p| p.evaluate(driver));

        Self {
            driver,
            button_opacity: driver,
            button_y,
            background_y,
            form_z_index,
            form_y,
            form_opacity,
            close_rotation_deg,
        }
    }
}

// =============================================================================
// State Machine
// =============================================================================

#[derive(Debug)]
struct ActiveTween {
    direction: Direction,
    run: TimingRun,
}

/// Two-state reveal machine driving the login transition
#[derive(Debug)]
pub struct RevealAnimation {
    state: RevealState,
    driver: f32,
    expand_clock: Clock,
    collapse_clock: Clock,
    active: Option<ActiveTween>,
    config: RevealConfig,
    window_height: f32,
}

impl RevealAnimation {
    /// Create a collapsed reveal
    pub fn new(config: RevealConfig, window_height: f32) -> Self {
        Self {
            state: RevealState::Collapsed,
            driver: COLLAPSED_VALUE,
            expand_clock: Clock::new(),
            collapse_clock: Clock::new(),
            active: None,
            config,
            window_height,
        }
    }

    /// Current semantic state (the destination while a transition runs)
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Current driver value
    pub fn driver(&self) -> f32 {
        self.driver
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Derived parameters for the current driver value
    pub fn params(&self) -> RevealParams {
        RevealParams::at(self.driver, self.window_height)
    }

    /// Feed a gesture state change
    ///
    /// Only completed taps count. The button group is live while collapsed,
    /// the close affordance while expanded; anything else is ignored.
    /// Returns the new state if a transition started.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<RevealState> {
        if !event.is_terminal() {
            return None;
        }

        let direction = match (event.region, self.state) {
            (GestureRegion::ButtonGroup, RevealState::Collapsed) => Direction::Expand,
            (GestureRegion::CloseAffordance, RevealState::Expanded) => Direction::Collapse,
            (region, state) => {
                tracing::debug!(?region, ?state, "gesture ignored in current state");
                return None;
            }
        };

        self.start(direction);
        Some(self.state)
    }

    /// Start a transition to `target` without a gesture
    ///
    /// Returns false if already at `target` (settled or heading there).
    pub fn transition_to(&mut self, target: RevealState) -> bool {
        if self.state == target {
            return false;
        }
        let direction = match target {
            RevealState::Expanded => Direction::Expand,
            RevealState::Collapsed => Direction::Collapse,
        };
        self.start(direction);
        true
    }

    /// Advance the in-flight transition to the frame at `timestamp`
    ///
    /// The first frame after a transition starts only fixes its time base.
    pub fn on_frame(&mut self, timestamp: Duration) -> RevealParams {
        let finished = match self.active.as_mut() {
            Some(active) => {
                let clock = match active.direction {
                    Direction::Expand => &mut self.expand_clock,
                    Direction::Collapse => &mut self.collapse_clock,
                };
                clock.advance_to(timestamp);
                self.driver =
                    run_timing(clock, &mut active.run, self.driver, active.direction.target());
                active.run.is_finished()
            }
            None => false,
        };

        if finished {
            self.active = None;
            tracing::debug!(state = ?self.state, "reveal settled");
        }

        self.params()
    }

    fn start(&mut self, direction: Direction) {
        if let Some(active) = self.active.take() {
            if active.direction == direction {
                self.active = Some(active);
                return;
            }
            self.clock_mut(active.direction).stop();
            tracing::debug!(driver = self.driver, "reveal transition interrupted");
        }

        // a stopped clock makes the next frame reinitialise the run at the
        // current driver value
        self.clock_mut(direction).stop();
        self.state = direction.destination();
        tracing::debug!(state = ?self.state, from = self.driver, "reveal transition started");

        self.active = Some(ActiveTween {
            direction,
            run: TimingRun::new(self.config.duration(), self.config.easing),
        });
    }

    fn clock_mut(&mut self, direction: Direction) -> &mut Clock {
        match direction {
            Direction::Expand => &mut self.expand_clock,
            Direction::Collapse => &mut self.collapse_clock,
        }
    }
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::new(RevealConfig::default(), crate::tokens::window::DEFAULT_HEIGHT)
    }
}
