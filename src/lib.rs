//! Artdeck
//!
//! Wires the member crates together: one shared session store, the login
//! screen backed by an [`AuthProvider`] and the feed screen backed by a
//! [`PostSource`].
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # fn demo(auth: Arc<dyn app_core::auth::AuthProvider>, posts: Arc<dyn app_core::feeds::PostSource>) -> anyhow::Result<()> {
//! artdeck::init_tracing("info")?;
//! let app = artdeck::App::from_config_file("artdeck.json", auth, posts)?;
//! assert!(!app.sessions.is_signed_in());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use anyhow::Context;
use app_core::auth::{AuthProvider, SignInFlow};
use app_core::feeds::PostSource;
use app_state::SessionStore;
use app_ui::config::ScreenConfig;
use app_ui::screens::{FeedScreen, LoginScreen};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub use app_core;
pub use app_state;
pub use app_ui;

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Both screens sharing one session store
pub struct App {
    /// Signed-in user
    pub sessions: SessionStore,
    /// Login screen
    pub login: LoginScreen,
    /// Feed screen
    pub feed: FeedScreen,
}

impl App {
    /// Build the screens from a configuration
    pub fn new(
        config: &ScreenConfig,
        auth: Arc<dyn AuthProvider>,
        posts: Arc<dyn PostSource>,
    ) -> Self {
        let sessions = SessionStore::new();
        let flow = SignInFlow::with_policy(auth, sessions.clone(), config.credentials);

        Self {
            login: LoginScreen::new(flow, config),
            feed: FeedScreen::new(posts, sessions.clone(), config.deck, config.window),
            sessions,
        }
    }

    /// Build the screens from a JSON configuration file
    pub fn from_config_file(
        path: impl AsRef<Path>,
        auth: Arc<dyn AuthProvider>,
        posts: Arc<dyn PostSource>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = ScreenConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(Self::new(&config, auth, posts))
    }
}
