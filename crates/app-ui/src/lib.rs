//! User interface for Artdeck
//!
//! This crate provides the UI layer: the animation engine behind the login
//! reveal, the screen view models, and the component and route values handed
//! to the rendering layer.
//!
//! # Modules
//!
//! - [`animation`] - Clocks, easing, timed tweens and range interpolation
//! - [`reveal`] - Login reveal state machine and derived parameters
//! - [`gesture`] - Tap gesture input
//! - [`components`] - Alert and text input models
//! - [`screens`] - Login and feed screens
//! - [`navigation`] - Route values
//! - [`config`] - Screen configuration
//! - [`tokens`] - Design tokens (durations, travel, deck layout)
//!
//! # Example
//!
//! ```rust
//! use app_ui::gesture::{GestureEvent, GestureRegion};
//! use app_ui::reveal::{RevealAnimation, RevealState};
//! use std::time::Duration;
//!
//! let mut reveal = RevealAnimation::default();
//! reveal.handle_gesture(GestureEvent::end(GestureRegion::ButtonGroup));
//!
//! // the first frame after the tap fixes the time base
//! reveal.on_frame(Duration::ZERO);
//! let params = reveal.on_frame(Duration::from_millis(1000));
//! assert_eq!(reveal.state(), RevealState::Expanded);
//! assert_eq!(params.form_opacity, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod config;
pub mod gesture;
pub mod navigation;
pub mod reveal;
pub mod screens;
pub mod tokens;

// Re-export commonly used types
pub use components::{Alert, AlertAction, TextInput};
pub use config::{ConfigError, DeckConfig, RevealConfig, ScreenConfig, WindowMetrics};
pub use gesture::{GestureEvent, GestureRegion, GestureState};
pub use navigation::Route;
pub use reveal::{RevealAnimation, RevealParams, RevealState};
pub use screens::{DeckProps, FeedScreen, FeedView, LoginScreen, LoginView};
