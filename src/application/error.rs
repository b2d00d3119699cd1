// src/application/error.rs
use crate::application::ports::slugs::SlugGenerationError;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    SlugGeneration(#[from] SlugGenerationError),

    /// The persistence authority rejected the save. The in-memory value is
    /// left committed; the caller decides whether to retry.
    #[error("save rejected: {}", .0.join("; "))]
    SaveRejected(Vec<String>),
}

impl SettingsError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
