use crate::api::{ApiClient, Comment, FetchError, User};
use crate::config::Config;
use crate::theme::{StyleMap, ThemeVariant};
use crate::view::{visible_page, PageView, PageSize, ViewState};
use ratatui::style::Style;
use std::borrow::Cow;
use tokio::sync::mpsc;
use tokio::time::Instant;

// ============================================================================
// View and Load-State Enums
// ============================================================================

/// Current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The records table.
    Dashboard,
    /// Read-only user profile.
    Profile,
}

/// Lifecycle of a one-shot fetch.
///
/// `Idle` exists only for lazily-fetched data (the profile user); the
/// comments fetch starts at launch. A fetch transitions Loading → Ready or
/// Loading → Failed exactly once per generation; it never re-fetches on
/// its own.
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

// ============================================================================
// Events from background tasks
// ============================================================================

/// Events sent by spawned fetch tasks back to the event loop.
///
/// Each fetch sends exactly one event. The `generation` field carries the
/// counter value at spawn time so a response from a superseded fetch (the
/// user reloaded before it landed) is silently discarded.
pub enum AppEvent {
    CommentsLoaded {
        generation: u64,
        result: Result<Vec<Comment>, FetchError>,
    },
    UserLoaded {
        generation: u64,
        result: Result<User, FetchError>,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    pub client: ApiClient,

    // Theme
    /// Current theme variant (for cycling).
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    // Data
    /// The fetched record collection, fixed per load generation.
    pub records: LoadState<Vec<Comment>>,
    /// Profile user, fetched on first entry to the Profile view.
    pub user: LoadState<User>,
    /// Which user the profile shows.
    pub user_id: i64,

    // UI state
    pub view: View,
    /// Search/sort/pagination configuration driving the pipeline.
    pub view_state: ViewState,
    /// Highlighted row within the visible page (presentation only).
    pub selected_row: usize,
    /// Whether keystrokes edit the search term.
    pub search_mode: bool,

    /// Status message with expiry — Cow avoids allocation for static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,

    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,

    /// Generation counter for the comments fetch. Incremented on every
    /// (re)load; stale responses are rejected by comparing against it.
    pub comments_generation: u64,
    /// Handle to the in-flight comments fetch for abort-on-supersede.
    pub comments_handle: Option<tokio::task::JoinHandle<()>>,

    /// Generation counter for the user fetch.
    pub user_generation: u64,
    /// Handle to the in-flight user fetch.
    pub user_handle: Option<tokio::task::JoinHandle<()>>,
}

impl App {
    pub fn new(client: ApiClient, config: &Config) -> Self {
        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme in config, using dark");
            ThemeVariant::Dark
        });

        let page_size = PageSize::from_count(config.page_size).unwrap_or_else(|| {
            tracing::warn!(
                page_size = config.page_size,
                "Unsupported page size in config (10/50/100), using 10"
            );
            PageSize::Ten
        });

        Self {
            client,
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            records: LoadState::Loading,
            user: LoadState::Idle,
            user_id: config.user_id,
            view: View::Dashboard,
            view_state: ViewState::with_page_size(page_size),
            selected_row: 0,
            search_mode: false,
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
            comments_generation: 0,
            comments_handle: None,
            user_generation: 0,
            user_handle: None,
        }
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to a different theme variant at runtime.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant (Dark → Light → Dark).
    ///
    /// Returns the name of the new theme for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------
    // Pipeline access
    // ------------------------------------------------------------------

    /// Run the view pipeline over the loaded records.
    ///
    /// Returns `None` until the comments fetch has succeeded.
    pub fn page_view(&self) -> Option<PageView<'_>> {
        self.records
            .as_ready()
            .map(|records| visible_page(records, &self.view_state))
    }

    /// Total pages for the current filter and page size (0 before load).
    pub fn total_pages(&self) -> usize {
        self.page_view().map(|v| v.total_pages).unwrap_or(0)
    }

    /// Clamp page and row selection after anything that can shrink the
    /// visible set (new search term, page-size change, reload).
    pub fn clamp_selection(&mut self) {
        let Some(view) = self.page_view() else {
            self.selected_row = 0;
            return;
        };
        let total_pages = view.total_pages;
        let rows = view.rows.len();
        self.view_state.clamp_page(total_pages);

        // Page may have changed; recount rows on the clamped page
        let rows = if total_pages > 0 && rows == 0 {
            self.page_view().map(|v| v.rows.len()).unwrap_or(0)
        } else {
            rows
        };
        self.selected_row = if rows == 0 {
            0
        } else {
            self.selected_row.min(rows - 1)
        };

        debug_assert!(self.view_state.page >= 1);
    }

    // ------------------------------------------------------------------
    // Fetch spawning
    // ------------------------------------------------------------------

    /// Start (or restart) the comments fetch.
    ///
    /// Any in-flight fetch is aborted and its late response rejected by
    /// generation. The view drops to Loading until the new outcome lands.
    pub fn reload_comments(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        if let Some(handle) = self.comments_handle.take() {
            handle.abort();
            tracing::debug!("Aborted superseded comments fetch");
        }

        self.comments_generation = self.comments_generation.wrapping_add(1);
        let generation = self.comments_generation;
        self.records = LoadState::Loading;
        self.selected_row = 0;
        self.needs_redraw = true;

        let client = self.client.clone();
        let tx = event_tx.clone();

        tracing::debug!(generation, "Spawning comments fetch");
        self.comments_handle = Some(tokio::spawn(async move {
            let result = client.fetch_comments().await;
            if let Err(e) = tx.send(AppEvent::CommentsLoaded { generation, result }).await {
                tracing::warn!(error = %e, "Failed to send comments result (receiver dropped)");
            }
        }));
    }

    /// Start (or restart) the profile user fetch.
    pub fn reload_user(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        if let Some(handle) = self.user_handle.take() {
            handle.abort();
            tracing::debug!("Aborted superseded user fetch");
        }

        self.user_generation = self.user_generation.wrapping_add(1);
        let generation = self.user_generation;
        self.user = LoadState::Loading;
        self.needs_redraw = true;

        let client = self.client.clone();
        let user_id = self.user_id;
        let tx = event_tx.clone();

        tracing::debug!(generation, user_id, "Spawning user fetch");
        self.user_handle = Some(tokio::spawn(async move {
            let result = client.fetch_user(user_id).await;
            if let Err(e) = tx.send(AppEvent::UserLoaded { generation, result }).await {
                tracing::warn!(error = %e, "Failed to send user result (receiver dropped)");
            }
        }));
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switch to the profile view, fetching the user on first entry.
    pub fn enter_profile(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        self.view = View::Profile;
        if matches!(self.user, LoadState::Idle) {
            self.reload_user(event_tx);
        }
    }

    /// Back-link from profile to the dashboard.
    pub fn back_to_dashboard(&mut self) {
        self.view = View::Dashboard;
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Resource Cleanup
// ============================================================================

/// Abort in-flight fetch tasks on App drop so no orphaned tokio tasks
/// outlive the event loop.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.comments_handle.take() {
            handle.abort();
            tracing::debug!("Aborted comments fetch on App drop");
        }
        if let Some(handle) = self.user_handle.take() {
            handle.abort();
            tracing::debug!("Aborted user fetch on App drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{self, Duration};

    fn test_app() -> App {
        let client = ApiClient::new(reqwest::Client::new(), "http://localhost:1").unwrap();
        App::new(client, &Config::default())
    }

    fn test_comment(id: i64, post_id: i64, name: &str) -> Comment {
        Comment {
            id,
            post_id,
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            body: "body".to_string(),
        }
    }

    #[tokio::test]
    async fn page_view_none_while_loading() {
        let app = test_app();
        assert!(app.records.is_loading());
        assert!(app.page_view().is_none());
        assert_eq!(app.total_pages(), 0);
    }

    #[tokio::test]
    async fn page_view_after_load() {
        let mut app = test_app();
        app.records = LoadState::Ready(vec![test_comment(1, 1, "Ann"), test_comment(2, 2, "Bob")]);

        let view = app.page_view().unwrap();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.total_pages, 1);
    }

    #[tokio::test]
    async fn clamp_selection_after_shrinking_filter() {
        let mut app = test_app();
        app.records = LoadState::Ready(
            (1..=30)
                .map(|i| test_comment(i, i, &format!("name{}", i)))
                .collect(),
        );
        app.view_state.page = 3;
        app.selected_row = 9;

        // "name3" matches name3 and name30 only — one page
        app.view_state.set_search("name3");
        app.clamp_selection();

        assert_eq!(app.view_state.page, 1);
        assert!(app.selected_row <= 1);
    }

    #[tokio::test]
    async fn clamp_selection_empty_result() {
        let mut app = test_app();
        app.records = LoadState::Ready(vec![test_comment(1, 1, "Ann")]);
        app.view_state.set_search("no such record");
        app.selected_row = 5;

        app.clamp_selection();

        assert_eq!(app.view_state.page, 1);
        assert_eq!(app.selected_row, 0);
    }

    #[tokio::test]
    async fn status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some()); // Still present at 2s

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_none()); // Expired after 3s
    }

    #[tokio::test]
    async fn cycle_theme_round_trips() {
        let mut app = test_app();
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
        assert_eq!(app.cycle_theme(), "Light");
        assert_eq!(app.cycle_theme(), "Dark");
    }

    #[tokio::test]
    async fn enter_profile_requests_user_once() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);

        assert!(matches!(app.user, LoadState::Idle));
        app.enter_profile(&tx);
        assert_eq!(app.view, View::Profile);
        assert!(app.user.is_loading());
        let generation = app.user_generation;

        // Re-entering must not spawn another fetch
        app.back_to_dashboard();
        app.enter_profile(&tx);
        assert_eq!(app.user_generation, generation);
    }

    #[tokio::test]
    async fn reload_comments_bumps_generation() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel(8);

        let before = app.comments_generation;
        app.reload_comments(&tx);
        assert_eq!(app.comments_generation, before + 1);
        assert!(app.records.is_loading());
        assert!(app.comments_handle.is_some());
    }

    #[tokio::test]
    async fn config_page_size_falls_back_on_unsupported() {
        let client = ApiClient::new(reqwest::Client::new(), "http://localhost:1").unwrap();
        let config = Config {
            page_size: 37,
            ..Config::default()
        };
        let app = App::new(client, &config);
        assert_eq!(app.view_state.page_size, PageSize::Ten);
    }
}
