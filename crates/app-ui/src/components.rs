//! UI component models for Artdeck
//!
//! Components are plain serializable structs handed to the rendering layer.
//!
//! # Available Components
//!
//! - [`Alert`] - Blocking modal with a single acknowledgement action
//! - [`TextInput`] - Single-line text field

use app_core::auth::{AuthError, FormField, ValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Alert
// =============================================================================

/// Label of the acknowledgement button
pub const ACKNOWLEDGE_LABEL: &str = "ok";

/// Title shown when the identity provider rejects a sign-in
pub const SIGN_IN_FAILED_TITLE: &str = "Sign In Failed";

/// Alert action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertAction {
    /// Button label
    pub label: String,
    /// Field to focus when pressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FormField>,
}

impl AlertAction {
    /// Create a new action
    pub fn new(label: impl Into<String>, focus: Option<FormField>) -> Self {
        Self {
            label: label.into(),
            focus,
        }
    }
}

/// Blocking modal alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Title text
    pub title: String,
    /// Message text
    pub message: String,
    /// Action buttons
    pub actions: Vec<AlertAction>,
}

impl Alert {
    /// Create an alert with a single acknowledgement action
    pub fn acknowledge(
        title: impl Into<String>,
        message: impl Into<String>,
        focus: Option<FormField>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions: vec![AlertAction::new(ACKNOWLEDGE_LABEL, focus)],
        }
    }

    /// Alert for a credential validation failure
    pub fn validation(error: ValidationError) -> Self {
        Self::acknowledge(error.title(), error.message(), Some(error.field()))
    }

    /// Alert for a rejected sign-in
    pub fn sign_in_failed(error: &AuthError) -> Self {
        Self::acknowledge(
            SIGN_IN_FAILED_TITLE,
            error.to_string(),
            Some(FormField::Password),
        )
    }

    /// Focus request carried by the first action
    pub fn focus(&self) -> Option<FormField> {
        self.actions.first().and_then(|action| action.focus)
    }
}

// =============================================================================
// Text Input
// =============================================================================

/// Single-line text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    /// Which form field this is
    pub field: FormField,
    /// Placeholder text
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Whether the field holds focus
    #[serde(default)]
    pub focused: bool,
}

impl TextInput {
    /// Create an input for a form field
    pub fn new(field: FormField, value: impl Into<String>, focused: bool) -> Self {
        let placeholder = match field {
            FormField::Email => "Email",
            FormField::Password => "PASSWORD",
        };
        Self {
            field,
            placeholder: placeholder.to_string(),
            value: value.into(),
            focused,
        }
    }
}
