//! Animation primitives
//!
//! Provides the frame-sampled tween engine used by the login reveal:
//! - [`Clock`] - per-direction frame clock
//! - [`Easing`] - easing curves
//! - [`run_timing`] / [`timing`] - eased, fixed-duration tweens
//! - [`interpolate`] - clamped linear range mapping for derived values

mod clock;
mod easing;
mod interpolate;
mod timing;

pub use clock::{Clock, ClockId};
pub use easing::Easing;
pub use interpolate::{interpolate, Extrapolate, InterpolationConfig};
pub use timing::{run_timing, timing, TimingRun, TweenConfig, TweenState};
