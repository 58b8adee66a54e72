//! Navigation targets for Artdeck
//!
//! Screens return a [`Route`] when they want to move elsewhere; the host
//! navigator performs the transition.

use app_core::feeds::PostCard;
use serde::{Deserialize, Serialize};

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Sign-in screen
    Login,
    /// Card deck
    Main,
    /// Single post view
    PostView {
        /// The tapped card
        card: PostCard,
    },
}

impl Route {
    /// Screen name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "LoginScreen",
            Route::Main => "Main",
            Route::PostView { .. } => "PostViewScreen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Login.name(), "LoginScreen");
        assert_eq!(Route::Main.name(), "Main");
        let card = PostCard::new("p1", "https://img/1.jpg", "sunset");
        assert_eq!(Route::PostView { card }.name(), "PostViewScreen");
    }

    #[test]
    fn test_route_serialization() {
        let card = PostCard::new("p1", "https://img/1.jpg", "sunset");
        let json = serde_json::to_value(Route::PostView { card }).unwrap();
        assert_eq!(json["route"], "PostView");
        assert_eq!(json["params"]["card"]["downloadURL"], "https://img/1.jpg");

        let unit = serde_json::to_value(Route::Main).unwrap();
        assert_eq!(unit["route"], "Main");
    }
}
