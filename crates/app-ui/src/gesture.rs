//! Gesture input
//!
//! Tap-gesture state changes as delivered by the platform's gesture handler.
//! Only the terminal [`GestureState::End`] state triggers screen actions.

use serde::{Deserialize, Serialize};

/// Gesture handler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureState {
    /// Handler has not recognised anything yet
    Undetermined,
    /// Touch started over the region
    Began,
    /// Gesture is in progress
    Active,
    /// Gesture was cancelled by the system
    Cancelled,
    /// Gesture was not recognised
    Failed,
    /// Press and release completed over the region
    End,
}

/// Interactive region of the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureRegion {
    /// The compact sign-in buttons
    ButtonGroup,
    /// The close affordance on the credential form
    CloseAffordance,
}

/// A gesture state change over a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEvent {
    /// Where the gesture happened
    pub region: GestureRegion,
    /// New handler state
    pub state: GestureState,
}

impl GestureEvent {
    /// Create a new event
    pub fn new(region: GestureRegion, state: GestureState) -> Self {
        Self { region, state }
    }

    /// Completed tap over a region
    pub fn end(region: GestureRegion) -> Self {
        Self::new(region, GestureState::End)
    }

    /// Whether this event completes the gesture
    pub fn is_terminal(&self) -> bool {
        self.state == GestureState::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_end_is_terminal() {
        let region = GestureRegion::ButtonGroup;
        assert!(GestureEvent::end(region).is_terminal());
        for state in [
            GestureState::Undetermined,
            GestureState::Began,
            GestureState::Active,
            GestureState::Cancelled,
            GestureState::Failed,
        ] {
            assert!(!GestureEvent::new(region, state).is_terminal());
        }
    }

    #[test]
    fn test_event_deserialization() {
        let event: GestureEvent =
            serde_json::from_str(r#"{"region":"close_affordance","state":"end"}"#).unwrap();
        assert_eq!(event, GestureEvent::end(GestureRegion::CloseAffordance));
    }
}
