//! Editor settings core for a CMS admin panel.
//!
//! Owns the slug lifecycle of a single post draft: debounced candidate
//! generation from title edits, round-trip reconciliation against the
//! canonicalizing slug service (including collapse of redundant uniqueness
//! suffixes), and the persist-now-or-defer decision. Publish-date
//! validation and the static-page toggle ride the same save/notify
//! pattern. Remote collaborators are injected as trait objects under
//! [`application::ports`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::settings::PostSettings;
pub use config::SettingsConfig;
pub use domain::post::{PostDraft, PostField, PostId};
