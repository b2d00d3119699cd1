// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

/// Fields of a draft that participate in change tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Title,
    Slug,
    PublishedAt,
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PersistedSnapshot {
    title: String,
    slug: String,
    published_at: Option<DateTime<Utc>>,
    page: bool,
}

/// The locally edited state of a single post, plus the snapshot of what the
/// remote authority last accepted. The snapshot is what lets callers tell a
/// genuine user edit apart from a programmatic reset to persisted state.
#[derive(Debug, Clone)]
pub struct PostDraft {
    id: PostId,
    title: String,
    slug: String,
    published_at: Option<DateTime<Utc>>,
    page: bool,
    published: bool,
    is_new: bool,
    snapshot: PersistedSnapshot,
}

impl PostDraft {
    /// A draft that has never been persisted. Slug starts empty; the UI shows
    /// a placeholder until one is committed.
    pub fn new_unsaved(id: PostId, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            snapshot: PersistedSnapshot {
                title: title.clone(),
                slug: String::new(),
                published_at: None,
                page: false,
            },
            title,
            slug: String::new(),
            published_at: None,
            page: false,
            published: false,
            is_new: true,
        }
    }

    /// A draft loaded from the remote authority; current state and snapshot
    /// start out identical.
    pub fn persisted(
        id: PostId,
        title: impl Into<String>,
        slug: impl Into<String>,
        published_at: Option<DateTime<Utc>>,
        page: bool,
        published: bool,
    ) -> Self {
        let title = title.into();
        let slug = slug.into();
        Self {
            id,
            snapshot: PersistedSnapshot {
                title: title.clone(),
                slug: slug.clone(),
                published_at,
                page,
            },
            title,
            slug,
            published_at,
            page,
            published,
            is_new: false,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn page(&self) -> bool {
        self.page
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// A draft in the editorial sense: never published.
    pub fn is_draft(&self) -> bool {
        !self.published
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }

    pub fn set_published_at(&mut self, published_at: Option<DateTime<Utc>>) {
        self.published_at = published_at;
    }

    pub fn set_page(&mut self, page: bool) {
        self.page = page;
    }

    /// Fields that differ from the last persisted snapshot.
    pub fn changed_fields(&self) -> HashSet<PostField> {
        let mut changed = HashSet::new();
        if self.title != self.snapshot.title {
            changed.insert(PostField::Title);
        }
        if self.slug != self.snapshot.slug {
            changed.insert(PostField::Slug);
        }
        if self.published_at != self.snapshot.published_at {
            changed.insert(PostField::PublishedAt);
        }
        if self.page != self.snapshot.page {
            changed.insert(PostField::Page);
        }
        changed
    }

    /// Record that the remote authority accepted the current state.
    pub fn mark_persisted(&mut self) {
        self.snapshot = PersistedSnapshot {
            title: self.title.clone(),
            slug: self.slug.clone(),
            published_at: self.published_at,
            page: self.page,
        };
        self.is_new = false;
    }
}
