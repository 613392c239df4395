//! Application event handling.
//!
//! Processes the results of background fetch tasks. Each handler rejects
//! responses from superseded fetches by comparing the generation counter
//! carried in the event against the current one.

use crate::app::{App, AppEvent, LoadState};

/// Handle application events from background fetch tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CommentsLoaded { generation, result } => {
            if generation != app.comments_generation {
                tracing::debug!(
                    generation,
                    current = app.comments_generation,
                    "Discarding stale comments response"
                );
                return;
            }
            app.comments_handle = None;

            match result {
                Ok(comments) => {
                    tracing::info!(count = comments.len(), "Records loaded");
                    app.set_status(format!("Loaded {} records", comments.len()));
                    app.records = LoadState::Ready(comments);
                    app.clamp_selection();
                }
                Err(e) => {
                    tracing::error!(error = %e, "Records fetch failed");
                    app.records = LoadState::Failed(e.to_string());
                }
            }
        }

        AppEvent::UserLoaded { generation, result } => {
            if generation != app.user_generation {
                tracing::debug!(
                    generation,
                    current = app.user_generation,
                    "Discarding stale user response"
                );
                return;
            }
            app.user_handle = None;

            match result {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "Profile user loaded");
                    app.user = LoadState::Ready(user);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Profile fetch failed");
                    app.user = LoadState::Failed(e.to_string());
                }
            }
        }
    }
}
