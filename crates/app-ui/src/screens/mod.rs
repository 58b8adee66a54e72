//! Screen view models
//!
//! Each screen owns its state and turns input events into a serializable
//! view snapshot for the rendering layer.

pub mod feed;
pub mod login;

pub use feed::{DeckProps, FeedScreen, FeedView, OverlayLabel, OverlayLabels};
pub use login::{LoginScreen, LoginView};
