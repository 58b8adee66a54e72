//! Feed Deck Integration Tests
//!
//! Tests the feed screen against an in-memory post backend.

use app_core::auth::{AuthError, AuthProvider, CredentialForm};
use app_core::feeds::{self, FeedError, PostCard, PostSource, SwipeDirection};
use app_state::UserSession;
use app_ui::config::ScreenConfig;
use app_ui::navigation::Route;
use app_ui::screens::FeedView;
use artdeck::App;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Backend serving posts from JSON and recording reactions
struct JsonBackend {
    json: Mutex<String>,
    reactions: Mutex<Vec<(String, SwipeDirection)>>,
}

impl JsonBackend {
    fn new(json: &str) -> Self {
        Self {
            json: Mutex::new(json.to_string()),
            reactions: Mutex::new(Vec::new()),
        }
    }

    fn replace(&self, json: &str) {
        *self.json.lock() = json.to_string();
    }

    fn reactions(&self) -> Vec<(String, SwipeDirection)> {
        self.reactions.lock().clone()
    }
}

#[async_trait]
impl PostSource for JsonBackend {
    async fn active_posts(&self) -> feeds::Result<Vec<PostCard>> {
        let json = self.json.lock().clone();
        PostCard::list_from_json(&json)
    }

    async fn like_post(&self, pid: String) -> feeds::Result<()> {
        self.reactions.lock().push((pid, SwipeDirection::Right));
        Ok(())
    }

    async fn nope_post(&self, pid: String) -> feeds::Result<()> {
        self.reactions.lock().push((pid, SwipeDirection::Left));
        Ok(())
    }
}

struct NoAuth;

#[async_trait]
impl AuthProvider for NoAuth {
    async fn sign_in(&self, _credentials: CredentialForm) -> Result<UserSession, AuthError> {
        Err(AuthError::Provider("unavailable".to_string()))
    }
}

const THREE_POSTS: &str = r#"[
    {"pid": "a", "downloadURL": "https://cdn.example/a.jpg", "name": "Dawn"},
    {"pid": "b", "downloadURL": "https://cdn.example/b.jpg", "name": "Dusk"},
    {"pid": "c", "downloadURL": "https://cdn.example/c.jpg", "name": "Night"}
]"#;

fn app(backend: &Arc<JsonBackend>) -> App {
    App::new(&ScreenConfig::default(), Arc::new(NoAuth), backend.clone())
}

/// Swipe through the whole deck and reload
#[tokio::test]
async fn test_swipe_through_and_reload() {
    let backend = Arc::new(JsonBackend::new(THREE_POSTS));
    let mut app = app(&backend);
    let feed = &mut app.feed;

    assert!(matches!(feed.view(), FeedView::Empty { .. }));
    feed.load().await;

    let FeedView::Deck(props) = feed.view() else {
        panic!("expected deck view");
    };
    assert_eq!(props.cards.len(), 3);
    assert_eq!(props.cards[0].download_url, "https://cdn.example/a.jpg");
    assert_eq!(props.horizontal_threshold, 390.0 / 2.0);

    feed.on_swiped(SwipeDirection::Right, 0).await.unwrap();
    feed.on_swiped(SwipeDirection::Left, 1).await.unwrap();
    feed.on_swiped(SwipeDirection::Right, 2).await.unwrap();
    assert_eq!(feed.index(), 3);
    assert_eq!(
        backend.reactions(),
        vec![
            ("a".to_string(), SwipeDirection::Right),
            ("b".to_string(), SwipeDirection::Left),
            ("c".to_string(), SwipeDirection::Right),
        ]
    );

    backend.replace(r#"[{"pid": "d", "downloadURL": "https://cdn.example/d.jpg", "name": "Noon"}]"#);
    feed.on_swiped_all().await;
    assert_eq!(feed.index(), 0);
    assert_eq!(feed.posts().len(), 1);
    assert_eq!(feed.posts()[0].pid, "d");
}

/// Malformed backend data leaves the current deck in place
#[tokio::test]
async fn test_malformed_reload_keeps_deck() {
    let backend = Arc::new(JsonBackend::new(THREE_POSTS));
    let mut app = app(&backend);
    let feed = &mut app.feed;
    feed.load().await;

    backend.replace("{oops");
    feed.on_swiped_all().await;
    assert!(!feed.is_loading());
    assert_eq!(feed.posts().len(), 3);
}

/// Tapping routes to the post view; out-of-range swipes are errors
#[tokio::test]
async fn test_tap_and_unknown_card() {
    let backend = Arc::new(JsonBackend::new(THREE_POSTS));
    let mut app = app(&backend);
    let feed = &mut app.feed;
    feed.load().await;

    match feed.on_tap_card(1) {
        Some(Route::PostView { card }) => assert_eq!(card.name, "Dusk"),
        other => panic!("unexpected route {other:?}"),
    }

    let err = feed.on_swiped(SwipeDirection::Left, 9).await.unwrap_err();
    assert!(matches!(err, FeedError::UnknownCard(9)));
    assert!(backend.reactions().is_empty());
}

/// An empty backend shows the placeholder message
#[tokio::test]
async fn test_empty_backend_message() {
    let backend = Arc::new(JsonBackend::new("[]"));
    let mut app = app(&backend);
    app.feed.load().await;

    let json = serde_json::to_value(app.feed.view()).unwrap();
    assert_eq!(json["kind"], "empty");
    assert_eq!(
        json["message"],
        "Waiting For Someone to Upload Something Interesting 🎨"
    );
    assert!(app.feed.user().is_none());
}
