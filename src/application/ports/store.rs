// src/application/ports/store.rs
use crate::domain::post::PostDraft;
use async_trait::async_trait;
use thiserror::Error;

/// Field-level messages from a rejected save.
#[derive(Debug, Clone, Error)]
#[error("save rejected: {}", errors.join("; "))]
pub struct SaveRejection {
    pub errors: Vec<String>,
}

impl SaveRejection {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn save(&self, post: &PostDraft) -> Result<(), SaveRejection>;
}
