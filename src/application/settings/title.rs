// src/application/settings/title.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::PostSettings;
use crate::domain::post::PostField;

/// Two-state subscription from title edits to slug candidate generation.
/// Starts active only for a never-persisted draft, and the only allowed
/// transition is active -> inactive; once a real slug is committed the
/// title never drives the slug again.
pub struct TitleWatch {
    active: AtomicBool,
}

impl TitleWatch {
    pub fn new(active: bool) -> Self {
        Self {
            active: AtomicBool::new(active),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Idempotent and permanent.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl PostSettings {
    /// Replace the draft title and kick the watcher.
    pub fn set_title(self: &Arc<Self>, title: impl Into<String>) {
        self.draft().set_title(title);
        self.on_title_changed();
    }

    /// Invoked on every title mutation. Schedules debounced candidate
    /// generation, unless the watch is inactive or the title merely matches
    /// the persisted snapshot (programmatic resets must not regenerate).
    pub fn on_title_changed(self: &Arc<Self>) {
        if !self.title_watch().is_active() {
            return;
        }
        let id = {
            let draft = self.draft();
            if !draft.changed_fields().contains(&PostField::Title) {
                return;
            }
            draft.id()
        };

        let this = Arc::clone(self);
        self.debounce().schedule(id, async move {
            this.refresh_slug_placeholder().await;
        });
    }

    /// Whether title edits currently feed the slug placeholder.
    pub fn watches_title(&self) -> bool {
        self.title_watch().is_active()
    }

    async fn refresh_slug_placeholder(&self) {
        let title = self.draft().title().to_owned();
        match self.slug_generator().generate_slug(&title).await {
            Ok(candidate) => {
                // A reconcile or teardown may have landed while the remote
                // call was in flight; its result is stale then.
                if self.title_watch().is_active() {
                    self.store_slug_placeholder(candidate);
                }
            }
            Err(error) => {
                tracing::warn!(%error, "slug placeholder generation failed");
            }
        }
    }
}
