//! Feed screen
//!
//! Shows the active posts as a swipeable card deck. Swipe physics belong to
//! the deck widget; this screen supplies the widget configuration, forwards
//! reactions to the [`PostSource`] and reloads when the deck runs out.

use crate::config::{DeckConfig, WindowMetrics};
use crate::navigation::Route;
use app_core::feeds::{self, FeedDeck, PostCard, PostSource, SwipeDirection};
use app_state::{SessionStore, UserSession};
use serde::Serialize;
use std::sync::Arc;

/// Text shown when there is nothing to swipe
pub const EMPTY_MESSAGE: &str = "Waiting For Someone to Upload Something Interesting 🎨";

// =============================================================================
// Deck Props
// =============================================================================

/// Label faded in over a card while it is dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayLabel {
    /// Label text
    pub title: &'static str,
    /// Label background
    pub background_color: &'static str,
}

/// Overlay labels for each swipe direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayLabels {
    /// Shown while dragging left
    pub left: OverlayLabel,
    /// Shown while dragging right
    pub right: OverlayLabel,
}

impl Default for OverlayLabels {
    fn default() -> Self {
        Self {
            left: OverlayLabel {
                title: "Nope",
                background_color: "red",
            },
            right: OverlayLabel {
                title: "Like",
                background_color: "green",
            },
        }
    }
}

/// Configuration handed to the swipe-deck widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckProps {
    /// Cards in deck order
    pub cards: Vec<PostCard>,
    /// Index of the top card
    pub card_index: usize,
    /// Card field used as the render key
    pub card_key: &'static str,
    /// Cards rendered beneath the top card
    pub stack_size: u32,
    /// Scale step between stacked cards
    pub stack_scale: f32,
    /// Separation between stacked cards
    pub stack_separation: f32,
    /// Upward swipes disabled
    pub disable_top_swipe: bool,
    /// Downward swipes disabled
    pub disable_bottom_swipe: bool,
    /// Drag overlay labels
    pub overlay_labels: OverlayLabels,
    /// Horizontal travel that completes a swipe
    pub horizontal_threshold: f32,
    /// Swipe-off animation in milliseconds
    pub swipe_animation_ms: u64,
    /// Fade cards while dragging
    pub animate_card_opacity: bool,
    /// Fade overlay labels while dragging
    pub animate_overlay_labels_opacity: bool,
    /// Top margin
    pub margin_top: f32,
    /// Horizontal card margin
    pub card_horizontal_margin: f32,
    /// Render children above the cards
    pub children_on_top: bool,
}

impl DeckProps {
    /// Widget configuration for a deck in a window of the given size
    pub fn new(deck: &FeedDeck, config: &DeckConfig, window: &WindowMetrics) -> Self {
        Self {
            cards: deck.posts().to_vec(),
            card_index: deck.index(),
            card_key: "pid",
            stack_size: config.stack_size,
            stack_scale: config.stack_scale,
            stack_separation: config.stack_separation,
            disable_top_swipe: true,
            disable_bottom_swipe: true,
            overlay_labels: OverlayLabels::default(),
            horizontal_threshold: window.width * config.horizontal_threshold,
            swipe_animation_ms: config.swipe_animation_ms,
            animate_card_opacity: true,
            animate_overlay_labels_opacity: true,
            margin_top: 0.0,
            card_horizontal_margin: config.card_horizontal_margin,
            children_on_top: true,
        }
    }
}

/// What the feed screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedView {
    /// Loading indicator
    Loading,
    /// Placeholder text
    Empty {
        /// Message to show
        message: &'static str,
    },
    /// The card deck
    Deck(DeckProps),
}

// =============================================================================
// Screen
// =============================================================================

/// Feed screen state
pub struct FeedScreen {
    deck: FeedDeck,
    source: Arc<dyn PostSource>,
    sessions: SessionStore,
    config: DeckConfig,
    window: WindowMetrics,
}

impl FeedScreen {
    /// Create an empty feed screen
    pub fn new(
        source: Arc<dyn PostSource>,
        sessions: SessionStore,
        config: DeckConfig,
        window: WindowMetrics,
    ) -> Self {
        Self {
            deck: FeedDeck::new(),
            source,
            sessions,
            config,
            window,
        }
    }

    /// Index of the top card
    pub fn index(&self) -> usize {
        self.deck.index()
    }

    /// Whether a reload is in progress
    pub fn is_loading(&self) -> bool {
        self.deck.is_loading()
    }

    /// Posts in the deck
    pub fn posts(&self) -> &[PostCard] {
        self.deck.posts()
    }

    /// Signed-in user
    pub fn user(&self) -> Option<UserSession> {
        self.sessions.current()
    }

    /// Fetch the active posts, replacing the deck on success
    pub async fn load(&mut self) {
        self.deck.begin_reload();
        let result = self.source.active_posts().await;
        self.deck.finish_reload(result);
    }

    /// Every card has been swiped
    pub async fn on_swiped_all(&mut self) {
        tracing::debug!(swiped = self.deck.posts().len(), "deck exhausted, reloading");
        self.load().await;
    }

    /// A card left the deck
    ///
    /// The deck advances even if the source fails to record the reaction.
    ///
    /// # Errors
    ///
    /// - `FeedError::UnknownCard` - no card at `index`
    /// - any error from the source's `like_post` / `nope_post`
    pub async fn on_swiped(&mut self, direction: SwipeDirection, index: usize) -> feeds::Result<()> {
        let pid = self.deck.card(index)?.pid.clone();
        tracing::debug!(%pid, ?direction, index, "card swiped");
        self.deck.advance_past(index);

        let result = match direction {
            SwipeDirection::Right => self.source.like_post(pid.clone()).await,
            SwipeDirection::Left => self.source.nope_post(pid.clone()).await,
        };
        if let Err(e) = &result {
            tracing::warn!(%pid, "Failed to record swipe: {}", e);
        }
        result
    }

    /// A card was tapped
    pub fn on_tap_card(&self, index: usize) -> Option<Route> {
        let card = self.deck.card(index).ok()?.clone();
        Some(Route::PostView { card })
    }

    /// Snapshot for rendering
    pub fn view(&self) -> FeedView {
        if self.deck.is_loading() {
            FeedView::Loading
        } else if self.deck.is_empty() {
            FeedView::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            FeedView::Deck(DeckProps::new(&self.deck, &self.config, &self.window))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::feeds::FeedError;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct FakeSource {
        posts: Vec<PostCard>,
        fail: bool,
        likes: Mutex<Vec<String>>,
        nopes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PostSource for FakeSource {
        async fn active_posts(&self) -> feeds::Result<Vec<PostCard>> {
            if self.fail {
                return Err(FeedError::Source("offline".to_string()));
            }
            Ok(self.posts.clone())
        }

        async fn like_post(&self, pid: String) -> feeds::Result<()> {
            self.likes.lock().push(pid);
            Ok(())
        }

        async fn nope_post(&self, pid: String) -> feeds::Result<()> {
            self.nopes.lock().push(pid);
            Ok(())
        }
    }

    fn cards(n: usize) -> Vec<PostCard> {
        (0..n)
            .map(|i| PostCard::new(format!("p{i}"), format!("https://img/{i}.jpg"), format!("art {i}")))
            .collect()
    }

    fn screen(source: FakeSource) -> (FeedScreen, Arc<FakeSource>) {
        let source = Arc::new(source);
        let screen = FeedScreen::new(
            source.clone(),
            SessionStore::new(),
            DeckConfig::default(),
            WindowMetrics {
                width: 400.0,
                height: 800.0,
            },
        );
        (screen, source)
    }

    #[test]
    fn test_empty_view() {
        let (screen, _) = screen(FakeSource::default());
        assert_eq!(
            screen.view(),
            FeedView::Empty {
                message: EMPTY_MESSAGE
            }
        );
        assert!(screen.user().is_none());
    }

    #[test]
    fn test_loading_view() {
        let (mut screen, _) = screen(FakeSource::default());
        screen.deck.begin_reload();
        assert_eq!(screen.view(), FeedView::Loading);
    }

    #[tokio::test]
    async fn test_deck_props() {
        let (mut screen, _) = screen(FakeSource {
            posts: cards(4),
            ..FakeSource::default()
        });
        screen.load().await;

        let FeedView::Deck(props) = screen.view() else {
            panic!("expected deck view");
        };
        assert_eq!(props.cards.len(), 4);
        assert_eq!(props.card_index, 0);
        assert_eq!(props.card_key, "pid");
        assert_eq!(props.stack_size, 3);
        assert_eq!(props.stack_scale, 10.0);
        assert_eq!(props.stack_separation, 35.0);
        assert!(props.disable_top_swipe && props.disable_bottom_swipe);
        assert_eq!(props.overlay_labels.left.title, "Nope");
        assert_eq!(props.overlay_labels.right.title, "Like");
        assert_eq!(props.horizontal_threshold, 200.0);
        assert_eq!(props.swipe_animation_ms, 500);
        assert!(props.animate_card_opacity && props.animate_overlay_labels_opacity);
        assert_eq!(props.margin_top, 0.0);
        assert_eq!(props.card_horizontal_margin, 15.0);
        assert!(props.children_on_top);
    }

    #[tokio::test]
    async fn test_swipes_forward_reactions() {
        let (mut screen, source) = screen(FakeSource {
            posts: cards(3),
            ..FakeSource::default()
        });
        screen.load().await;

        screen.on_swiped(SwipeDirection::Right, 0).await.unwrap();
        screen.on_swiped(SwipeDirection::Left, 1).await.unwrap();

        assert_eq!(*source.likes.lock(), vec!["p0".to_string()]);
        assert_eq!(*source.nopes.lock(), vec!["p1".to_string()]);
        assert_eq!(screen.index(), 2);
    }

    #[tokio::test]
    async fn test_swipe_unknown_card() {
        let (mut screen, source) = screen(FakeSource::default());
        let err = screen.on_swiped(SwipeDirection::Right, 0).await.unwrap_err();
        assert!(matches!(err, FeedError::UnknownCard(0)));
        assert!(source.likes.lock().is_empty());
    }

    #[tokio::test]
    async fn test_swiped_all_reloads_and_resets_index() {
        let (mut screen, _) = screen(FakeSource {
            posts: cards(2),
            ..FakeSource::default()
        });
        screen.load().await;
        screen.on_swiped(SwipeDirection::Left, 0).await.unwrap();
        screen.on_swiped(SwipeDirection::Left, 1).await.unwrap();
        assert_eq!(screen.index(), 2);

        screen.on_swiped_all().await;
        assert!(!screen.is_loading());
        assert_eq!(screen.index(), 0);
        assert_eq!(screen.posts().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_posts() {
        let (mut screen, _) = screen(FakeSource {
            fail: true,
            ..FakeSource::default()
        });
        screen.deck = FeedDeck::with_posts(cards(2));

        screen.on_swiped_all().await;
        assert!(!screen.is_loading());
        assert_eq!(screen.posts().len(), 2);
    }

    #[test]
    fn test_tap_card_routes_to_post_view() {
        let (mut screen, _) = screen(FakeSource::default());
        screen.deck = FeedDeck::with_posts(cards(2));

        assert_eq!(
            screen.on_tap_card(1),
            Some(Route::PostView {
                card: cards(2)[1].clone()
            })
        );
        assert_eq!(screen.on_tap_card(5), None);
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let (screen, _) = screen(FakeSource::default());
        let json = serde_json::to_value(screen.view()).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["message"], EMPTY_MESSAGE);
    }
}
