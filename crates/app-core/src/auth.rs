//! Authentication service for Artdeck
//!
//! This module provides the credential submission flow: local validation of
//! the email/password form, a guard against concurrent submissions, and the
//! hand-off to the external identity provider.

use app_state::{MutationTracker, PendingMutation, SessionStore, UserSession};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Title shown on every credential validation alert
pub const INVALID_CREDENTIALS_TITLE: &str = "Invalid Credentials";

/// Authentication error types reported by the identity provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email is malformed according to the provider
    #[error("Invalid email address")]
    InvalidEmail,

    /// No account exists for the email
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Password does not match
    #[error("Wrong password")]
    WrongPassword,

    /// Account disabled by an administrator
    #[error("User disabled")]
    UserDisabled,

    /// Provider is throttling sign-in attempts
    #[error("Too many requests")]
    TooManyRequests,

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Any other provider failure
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

// =============================================================================
// Credential Form
// =============================================================================

/// Form field that can receive focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Email input
    Email,
    /// Password input
    Password,
}

/// The two text fields of the sign-in form
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl CredentialForm {
    /// Create a form with both fields filled
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Replace the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replace the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Local validation failure for the credential form
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Email field is empty
    #[error("missing email")]
    MissingEmail,

    /// Password is empty or outside the allowed length range
    #[error("invalid password length")]
    InvalidPasswordLength,
}

impl ValidationError {
    /// Field that should receive focus once the user acknowledges the error
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingEmail => FormField::Email,
            ValidationError::InvalidPasswordLength => FormField::Password,
        }
    }

    /// Alert title
    pub fn title(&self) -> &'static str {
        INVALID_CREDENTIALS_TITLE
    }

    /// User-facing alert message
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingEmail => "Please Provide an Email!",
            ValidationError::InvalidPasswordLength => {
                "Please make sure your password is in the range of 6 to 40 characters!"
            }
        }
    }
}

/// Password length bounds, inclusive
///
/// Lengths are counted in Unicode scalar values (`chars()`), not UTF-16 code
/// units: a password of three emoji is three characters long here, where a
/// UTF-16 based check would see six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialPolicy {
    /// Shortest accepted password
    pub min_password_len: usize,
    /// Longest accepted password
    pub max_password_len: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_password_len: 6,
            max_password_len: 40,
        }
    }
}

impl CredentialPolicy {
    /// Validate a form; the first failing check wins
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingEmail` - email is empty
    /// - `ValidationError::InvalidPasswordLength` - password empty, too short or too long
    pub fn validate(&self, form: &CredentialForm) -> std::result::Result<(), ValidationError> {
        if form.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        let len = form.password.chars().count();
        if len == 0 || len < self.min_password_len || len > self.max_password_len {
            return Err(ValidationError::InvalidPasswordLength);
        }

        Ok(())
    }
}

// =============================================================================
// Identity Provider
// =============================================================================

/// External identity provider
///
/// Implementations perform the network sign-in; this crate never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with an email and password
    async fn sign_in(&self, credentials: CredentialForm) -> Result<UserSession>;
}

// =============================================================================
// Submission Flow
// =============================================================================

/// Reasons a submission does not reach the identity provider
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The form failed local validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A previous submission has not completed yet
    #[error("sign-in already pending")]
    AlreadyPending,
}

/// Sign-in flow shared by the login screen
///
/// Validation and the pending-request check run synchronously in
/// [`SignInFlow::begin`]; the provider call happens in the returned
/// [`SignInTask`], which the caller drives on its executor.
#[derive(Clone)]
pub struct SignInFlow {
    provider: Arc<dyn AuthProvider>,
    sessions: SessionStore,
    tracker: MutationTracker,
    policy: CredentialPolicy,
}

impl SignInFlow {
    /// Create a flow with the default credential policy
    pub fn new(provider: Arc<dyn AuthProvider>, sessions: SessionStore) -> Self {
        Self::with_policy(provider, sessions, CredentialPolicy::default())
    }

    /// Create a flow with a custom credential policy
    pub fn with_policy(
        provider: Arc<dyn AuthProvider>,
        sessions: SessionStore,
        policy: CredentialPolicy,
    ) -> Self {
        Self {
            provider,
            sessions,
            tracker: MutationTracker::new("sign_in"),
            policy,
        }
    }

    /// Credential policy in use
    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Session store written on success
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Whether a submission is in flight
    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Validate a form without submitting it
    pub fn validate(&self, form: &CredentialForm) -> std::result::Result<(), ValidationError> {
        self.policy.validate(form)
    }

    /// Start a submission
    ///
    /// # Errors
    ///
    /// - `SubmitError::Validation` - the form is invalid; the provider is not called
    /// - `SubmitError::AlreadyPending` - a previous submission is still in flight
    pub fn begin(&self, form: &CredentialForm) -> std::result::Result<SignInTask, SubmitError> {
        self.validate(form)?;

        let pending = self
            .tracker
            .try_begin()
            .map_err(|_| SubmitError::AlreadyPending)?;

        Ok(SignInTask {
            provider: Arc::clone(&self.provider),
            sessions: self.sessions.clone(),
            credentials: form.clone(),
            pending,
        })
    }
}

/// A validated submission waiting to call the identity provider
pub struct SignInTask {
    provider: Arc<dyn AuthProvider>,
    sessions: SessionStore,
    credentials: CredentialForm,
    pending: PendingMutation,
}

impl SignInTask {
    /// Email being submitted
    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    /// Call the provider once and store the session on success
    ///
    /// Failures are logged and returned; nothing is retried.
    pub async fn run(self) -> Result<UserSession> {
        let SignInTask {
            provider,
            sessions,
            credentials,
            pending,
        } = self;
        let email = credentials.email.clone();

        match provider.sign_in(credentials).await {
            Ok(session) => {
                tracing::info!(uid = %session.uid, "signed in");
                sessions.set(session.clone());
                pending.succeed();
                Ok(session)
            }
            Err(e) => {
                tracing::error!(%email, error = %e, "sign-in failed");
                pending.fail();
                Err(e)
            }
        }
    }
}

impl fmt::Debug for SignInTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInTask")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
