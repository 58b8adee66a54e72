//! Login screen
//!
//! Combines the reveal animation with the credential form. Taps on the
//! compact buttons or the close affordance drive the reveal; submitting the
//! form validates locally and hands a [`SignInTask`] to the host, which runs
//! it and reports back through [`LoginScreen::on_sign_in_complete`].

use crate::components::{Alert, TextInput};
use crate::config::ScreenConfig;
use crate::gesture::GestureEvent;
use crate::navigation::Route;
use crate::reveal::{RevealAnimation, RevealParams, RevealState};
use app_core::auth::{self, CredentialForm, FormField, SignInFlow, SignInTask, SubmitError};
use app_state::UserSession;
use serde::Serialize;
use std::time::Duration;

/// Snapshot handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginView {
    /// Reveal state (destination while animating)
    pub state: RevealState,
    /// Derived visual parameters
    pub params: RevealParams,
    /// Email input
    pub email: TextInput,
    /// Password input
    pub password: TextInput,
    /// Alert currently shown, if any
    pub alert: Option<Alert>,
    /// Whether a sign-in is in flight
    pub submitting: bool,
}

/// Login screen state
pub struct LoginScreen {
    reveal: RevealAnimation,
    form: CredentialForm,
    focused: Option<FormField>,
    alert: Option<Alert>,
    flow: SignInFlow,
}

impl LoginScreen {
    /// Create a collapsed login screen
    pub fn new(flow: SignInFlow, config: &ScreenConfig) -> Self {
        Self {
            reveal: RevealAnimation::new(config.reveal, config.window.height),
            form: CredentialForm::default(),
            focused: None,
            alert: None,
            flow,
        }
    }

    // =========================================================================
    // Reveal
    // =========================================================================

    /// Feed a tap gesture state change
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<RevealState> {
        self.reveal.handle_gesture(event)
    }

    /// Advance the reveal to the frame at `timestamp`
    pub fn on_frame(&mut self, timestamp: Duration) -> RevealParams {
        self.reveal.on_frame(timestamp)
    }

    /// Current derived parameters
    pub fn params(&self) -> RevealParams {
        self.reveal.params()
    }

    /// The reveal animation
    pub fn reveal(&self) -> &RevealAnimation {
        &self.reveal
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Email text changed
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.set_email(email);
    }

    /// Password text changed
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.set_password(password);
    }

    /// Current form contents
    pub fn form(&self) -> &CredentialForm {
        &self.form
    }

    /// Field holding input focus
    pub fn focused_field(&self) -> Option<FormField> {
        self.focused
    }

    /// Move input focus
    pub fn focus(&mut self, field: Option<FormField>) {
        self.focused = field;
    }

    /// Alert currently shown
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Whether a sign-in is in flight
    pub fn is_submitting(&self) -> bool {
        self.flow.is_pending()
    }

    /// Submit the form
    ///
    /// Returns the task to run when the form is valid and no other sign-in
    /// is pending. An invalid form raises an alert instead.
    pub fn submit(&mut self) -> Option<SignInTask> {
        match self.flow.begin(&self.form) {
            Ok(task) => {
                tracing::debug!(email = task.email(), "submitting credentials");
                Some(task)
            }
            Err(SubmitError::Validation(error)) => {
                tracing::debug!(%error, "credentials rejected locally");
                self.alert = Some(Alert::validation(error));
                None
            }
            Err(SubmitError::AlreadyPending) => {
                tracing::debug!("sign-in already pending, ignoring submit");
                None
            }
        }
    }

    /// Outcome of a task returned by [`LoginScreen::submit`]
    ///
    /// Success navigates to the main screen. Failure keeps the form as typed
    /// and raises an alert.
    pub fn on_sign_in_complete(&mut self, result: &auth::Result<UserSession>) -> Option<Route> {
        match result {
            Ok(_) => Some(Route::Main),
            Err(error) => {
                self.alert = Some(Alert::sign_in_failed(error));
                None
            }
        }
    }

    /// Dismiss the current alert and apply its focus request
    pub fn acknowledge_alert(&mut self) -> Option<FormField> {
        let focus = self.alert.take()?.focus();
        if focus.is_some() {
            self.focused = focus;
        }
        focus
    }

    /// Snapshot for rendering
    pub fn view(&self) -> LoginView {
        LoginView {
            state: self.reveal.state(),
            params: self.params(),
            email: TextInput::new(
                FormField::Email,
                self.form.email.clone(),
                self.focused == Some(FormField::Email),
            ),
            password: TextInput::new(
                FormField::Password,
                self.form.password.clone(),
                self.focused == Some(FormField::Password),
            ),
            alert: self.alert.clone(),
            submitting: self.is_submitting(),
        }
    }
}
