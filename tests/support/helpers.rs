// tests/support/helpers.rs
use std::sync::{Arc, Mutex};

use pressroom_core::application::ports::{NotificationsPort, PostStorePort, SlugGeneratorPort};
use pressroom_core::application::settings::PostSettings;
use pressroom_core::config::SettingsConfig;
use pressroom_core::domain::post::PostDraft;
use pressroom_core::infrastructure::ChronoDateParser;

use super::mocks::{FixedClock, RecordingNotifications, RecordingStore, ScriptedSlugGenerator};

/// Install a test subscriber once so `tracing` output from the code under
/// test is visible with `--nocapture`.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One controller wired to recording doubles, plus handles to all of them.
pub struct Harness {
    pub settings: Arc<PostSettings>,
    pub draft: Arc<Mutex<PostDraft>>,
    pub slugs: Arc<ScriptedSlugGenerator>,
    pub store: Arc<RecordingStore>,
    pub notices: Arc<RecordingNotifications>,
}

impl Harness {
    pub fn new(draft: PostDraft) -> Self {
        Self::with_config(draft, SettingsConfig::default())
    }

    pub fn with_config(draft: PostDraft, config: SettingsConfig) -> Self {
        init_tracing();

        let draft = Arc::new(Mutex::new(draft));
        let slugs = Arc::new(ScriptedSlugGenerator::echoing());
        let store = Arc::new(RecordingStore::accepting());
        let notices = Arc::new(RecordingNotifications::new());

        let settings = PostSettings::new(
            Arc::clone(&draft),
            Arc::clone(&slugs) as Arc<SlugGeneratorPort>,
            Arc::clone(&store) as Arc<PostStorePort>,
            Arc::clone(&notices) as Arc<NotificationsPort>,
            Arc::new(FixedClock::new()),
            Arc::new(ChronoDateParser::new()),
            &config,
        );

        Self {
            settings,
            draft,
            slugs,
            store,
            notices,
        }
    }

    pub fn committed_slug(&self) -> String {
        self.settings.draft().slug().to_owned()
    }
}
