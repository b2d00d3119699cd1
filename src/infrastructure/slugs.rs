// src/infrastructure/slugs.rs
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use slug::slugify;

use crate::application::ports::slugs::{SlugGenerationError, SlugGenerator};

/// In-process stand-in for the remote canonicalization service: slugifies
/// the input and enforces uniqueness against a registry of taken slugs by
/// appending an incrementing suffix. The registry is fed by `reserve` as
/// posts are persisted; it deliberately includes a post's own slug, which
/// is what makes the self-collision (`my-post` -> `my-post-2`) reproducible.
#[derive(Default)]
pub struct LocalSlugGenerator {
    taken: Mutex<HashSet<String>>,
}

impl LocalSlugGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taken(slugs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            taken: Mutex::new(slugs.into_iter().map(Into::into).collect()),
        }
    }

    /// Record a slug as belonging to a persisted post.
    pub fn reserve(&self, slug: impl Into<String>) {
        self.taken_set().insert(slug.into());
    }

    fn taken_set(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.taken.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SlugGenerator for LocalSlugGenerator {
    async fn generate_slug(&self, input: &str) -> Result<String, SlugGenerationError> {
        let base = slugify(input);
        let base = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base
        };

        let taken = self.taken_set();
        if !taken.contains(&base) {
            return Ok(base);
        }

        let mut counter = 2u64;
        loop {
            let candidate = format!("{base}-{counter}");
            if !taken.contains(&candidate) {
                return Ok(candidate);
            }
            counter += 1;
        }
    }
}
