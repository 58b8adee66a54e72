//! Screen configuration
//!
//! All fields have defaults, so a JSON document only needs to name what it
//! overrides:
//!
//! ```rust
//! use app_ui::config::ScreenConfig;
//!
//! let config = ScreenConfig::from_json(r#"{"window": {"height": 900.0}}"#).unwrap();
//! assert_eq!(config.window.height, 900.0);
//! assert_eq!(config.reveal.duration_ms, 1000);
//! ```

use crate::animation::Easing;
use crate::tokens::{deck, duration, window};
use app_core::auth::CredentialPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowMetrics {
    /// Window width
    pub width: f32,
    /// Window height
    pub height: f32,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            width: window::DEFAULT_WIDTH,
            height: window::DEFAULT_HEIGHT,
        }
    }
}

/// Login reveal animation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Transition duration in milliseconds
    pub duration_ms: u64,
    /// Easing curve
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: duration::REVEAL,
            easing: Easing::EaseInOut,
        }
    }
}

impl RevealConfig {
    /// Transition duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Swipe-deck widget settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Cards rendered beneath the top card
    pub stack_size: u32,
    /// Scale step between stacked cards
    pub stack_scale: f32,
    /// Separation between stacked cards
    pub stack_separation: f32,
    /// Swipe-off animation in milliseconds
    pub swipe_animation_ms: u64,
    /// Fraction of the window width that counts as a swipe
    pub horizontal_threshold: f32,
    /// Horizontal card margin
    pub card_horizontal_margin: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            stack_size: deck::STACK_SIZE,
            stack_scale: deck::STACK_SCALE,
            stack_separation: deck::STACK_SEPARATION,
            swipe_animation_ms: duration::DECK_SWIPE,
            horizontal_threshold: deck::HORIZONTAL_THRESHOLD,
            card_horizontal_margin: deck::CARD_HORIZONTAL_MARGIN,
        }
    }
}

/// Configuration for both screens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Window dimensions
    pub window: WindowMetrics,
    /// Login reveal animation
    pub reveal: RevealConfig,
    /// Card deck
    pub deck: DeckConfig,
    /// Credential validation bounds
    pub credentials: CredentialPolicy,
}

impl ScreenConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScreenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check value ranges
    ///
    /// Non-finite numbers are rejected everywhere.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("deck.stack_scale", self.deck.stack_scale),
            ("deck.stack_separation", self.deck.stack_separation),
            ("deck.horizontal_threshold", self.deck.horizontal_threshold),
            ("deck.card_horizontal_margin", self.deck.card_horizontal_margin),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "window must have positive size, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(0.0..=1.0).contains(&self.deck.horizontal_threshold) {
            return Err(ConfigError::Invalid(format!(
                "deck.horizontal_threshold must be within 0..=1, got {}",
                self.deck.horizontal_threshold
            )));
        }
        if self.credentials.min_password_len > self.credentials.max_password_len {
            return Err(ConfigError::Invalid(
                "credentials.min_password_len exceeds max_password_len".to_string(),
            ));
        }
        Ok(())
    }
}
