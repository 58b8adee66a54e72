//! Design tokens for Artdeck
//!
//! This module provides the animation, layering and deck-layout constants
//! shared by the screens and their configuration defaults.

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Login reveal transition (1000ms), fixed regardless of distance
    pub const REVEAL: u64 = 1000;
    /// Card swipe-off animation (500ms)
    pub const DECK_SWIPE: u64 = 500;
}

/// Travel and rotation of the login reveal
pub mod reveal {
    /// Vertical travel of the compact buttons and the form (100px)
    pub const TRAVEL: f32 = 100.0;
    /// Fraction of the window height the background lifts by
    pub const BACKGROUND_LIFT: f32 = 1.0 / 3.0;
    /// Close icon rotation with the form fully open (degrees)
    pub const CLOSE_ROTATION_OPEN: f32 = 180.0;
    /// Close icon rotation with the form fully hidden (degrees)
    pub const CLOSE_ROTATION_HIDDEN: f32 = 360.0;
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Credential form in front of the compact buttons
    pub const FORM_FRONT: f32 = 1.0;
    /// Credential form behind the compact buttons
    pub const FORM_BACK: f32 = -1.0;
}

// =============================================================================
// Window
// =============================================================================

/// Fallback window dimensions (a common phone viewport)
pub mod window {
    /// Default width (390px)
    pub const DEFAULT_WIDTH: f32 = 390.0;
    /// Default height (844px)
    pub const DEFAULT_HEIGHT: f32 = 844.0;
}

// =============================================================================
// Card Deck
// =============================================================================

/// Card deck layout
pub mod deck {
    /// Cards rendered beneath the top card
    pub const STACK_SIZE: u32 = 3;
    /// Scale step between stacked cards (percent)
    pub const STACK_SCALE: f32 = 10.0;
    /// Vertical separation between stacked cards (35px)
    pub const STACK_SEPARATION: f32 = 35.0;
    /// Horizontal card margin (15px)
    pub const CARD_HORIZONTAL_MARGIN: f32 = 15.0;
    /// Fraction of the window width a card must travel to count as a swipe
    pub const HORIZONTAL_THRESHOLD: f32 = 0.5;
}
