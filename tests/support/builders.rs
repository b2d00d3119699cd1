// tests/support/builders.rs
use chrono::{DateTime, Utc};
use pressroom_core::domain::post::{PostDraft, PostId};

pub fn post_id(id: i64) -> PostId {
    PostId::new(id).unwrap()
}

/// A never-persisted draft with an empty slug.
pub fn unsaved_draft(title: &str) -> PostDraft {
    PostDraft::new_unsaved(post_id(1), title)
}

/// A persisted, unpublished post.
pub fn persisted_draft(title: &str, slug: &str) -> PostDraft {
    PostDraft::persisted(post_id(1), title, slug, None, false, false)
}

/// A persisted post that went out at `published_at`.
pub fn published_draft(title: &str, slug: &str, published_at: DateTime<Utc>) -> PostDraft {
    PostDraft::persisted(post_id(1), title, slug, Some(published_at), false, true)
}

/// A persisted draft with a scheduled date but never published.
pub fn scheduled_draft(title: &str, slug: &str, published_at: DateTime<Utc>) -> PostDraft {
    PostDraft::persisted(post_id(1), title, slug, Some(published_at), false, false)
}
