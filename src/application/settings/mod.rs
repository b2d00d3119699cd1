// src/application/settings/mod.rs
pub mod debounce;
pub mod page;
pub mod published_at;
pub mod slug;
pub mod title;

pub use debounce::DebounceScheduler;
pub use page::PageOutcome;
pub use published_at::DateOutcome;
pub use slug::SlugOutcome;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    application::ports::{
        ClockPort, DateTimeParserPort, NotificationsPort, PostStorePort, SlugGeneratorPort,
    },
    config::SettingsConfig,
    domain::post::PostDraft,
};

use self::title::TitleWatch;

/// Settings-panel controller for one post draft.
///
/// Holds a non-owning reference to the draft (the editing session owns it)
/// and the injected remote collaborators. All mutating operations funnel
/// through here so slug, publish date, and page flag stay synchronized with
/// the remote authority.
pub struct PostSettings {
    draft: Arc<Mutex<PostDraft>>,
    slug_placeholder: Mutex<Option<String>>,
    title_watch: TitleWatch,
    debounce: DebounceScheduler,
    slug_generator: Arc<SlugGeneratorPort>,
    store: Arc<PostStorePort>,
    notifications: Arc<NotificationsPort>,
    clock: Arc<ClockPort>,
    dates: Arc<DateTimeParserPort>,
}

impl PostSettings {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        draft: Arc<Mutex<PostDraft>>,
        slug_generator: Arc<SlugGeneratorPort>,
        store: Arc<PostStorePort>,
        notifications: Arc<NotificationsPort>,
        clock: Arc<ClockPort>,
        dates: Arc<DateTimeParserPort>,
        config: &SettingsConfig,
    ) -> Arc<Self> {
        // Only a never-persisted draft gets its slug derived from the title.
        let watch_title = lock(&draft).is_new();
        Arc::new(Self {
            draft,
            slug_placeholder: Mutex::new(None),
            title_watch: TitleWatch::new(watch_title),
            debounce: DebounceScheduler::new(config.debounce()),
            slug_generator,
            store,
            notifications,
            clock,
            dates,
        })
    }

    pub fn draft(&self) -> MutexGuard<'_, PostDraft> {
        lock(&self.draft)
    }

    /// Snapshot of the draft for handing to the store across an await point.
    pub(crate) fn draft_snapshot(&self) -> PostDraft {
        self.draft().clone()
    }

    /// What the slug field shows while no slug is committed: the committed
    /// slug if present, else the last generated candidate, else the raw
    /// title. Display-only; never persisted.
    pub fn slug_placeholder(&self) -> String {
        let draft = self.draft();
        if !draft.slug().is_empty() {
            return draft.slug().to_owned();
        }
        if let Some(candidate) = lock(&self.slug_placeholder).clone() {
            return candidate;
        }
        draft.title().to_owned()
    }

    /// The committed publish date, or the current date while none is set.
    pub fn published_at_placeholder(&self) -> String {
        let committed = self.draft().published_at();
        match committed {
            Some(at) => self.dates.format(at),
            None => self.dates.format(self.clock.now()),
        }
    }

    pub(crate) fn store_slug_placeholder(&self, candidate: String) {
        *lock(&self.slug_placeholder) = Some(candidate);
    }

    /// Cancel pending timers. Results of remote calls still in flight are
    /// discarded when they resolve.
    pub fn detach(&self) {
        self.title_watch.deactivate();
        self.debounce.cancel_all();
    }

    pub(crate) fn title_watch(&self) -> &TitleWatch {
        &self.title_watch
    }

    pub(crate) fn debounce(&self) -> &DebounceScheduler {
        &self.debounce
    }

    pub(crate) fn slug_generator(&self) -> &SlugGeneratorPort {
        self.slug_generator.as_ref()
    }

    pub(crate) fn store(&self) -> &PostStorePort {
        self.store.as_ref()
    }

    pub(crate) fn notifications(&self) -> &NotificationsPort {
        self.notifications.as_ref()
    }

    pub(crate) fn clock(&self) -> &ClockPort {
        self.clock.as_ref()
    }

    pub(crate) fn dates(&self) -> &DateTimeParserPort {
        self.dates.as_ref()
    }
}

/// Lock without propagating poisoning.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
