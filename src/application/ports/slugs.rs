// src/application/ports/slugs.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("slug generation failed: {0}")]
pub struct SlugGenerationError(pub String);

/// The remote canonicalization authority. Given free text it returns a slug
/// that satisfies the site's format rules and is unique among existing
/// posts, possibly by appending a numeric suffix (`-2`, `-3`, ...).
#[async_trait]
pub trait SlugGenerator: Send + Sync {
    async fn generate_slug(&self, input: &str) -> Result<String, SlugGenerationError>;
}
