// src/application/settings/slug.rs
use super::PostSettings;
use crate::application::error::{SettingsError, SettingsResult};

/// What a reconcile run did with the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugOutcome {
    /// Candidate was empty, already committed, or a redundant uniqueness
    /// suffix; nothing changed.
    Unchanged,
    /// Committed in memory on a never-persisted draft; the explicit save
    /// action will carry it.
    Deferred,
    /// Committed and persisted.
    Saved,
}

impl PostSettings {
    /// Reconcile a user-supplied (or generated) slug candidate against the
    /// remote canonicalization authority and commit the result.
    ///
    /// Concurrent calls are not serialized; when two overlap, the
    /// later-resolving remote response wins the committed value.
    pub async fn reconcile_slug(&self, candidate: &str) -> SettingsResult<SlugOutcome> {
        let current = self.draft().slug().to_owned();
        let candidate = candidate.trim();

        // Ignore unchanged slugs and empty candidates.
        if candidate.is_empty() || candidate == current {
            return Ok(SlugOutcome::Unchanged);
        }

        let server_slug = self.slug_generator().generate_slug(candidate).await?;

        // The authority may hand back exactly what is already committed.
        if server_slug == current {
            return Ok(SlugOutcome::Unchanged);
        }

        // The authority enforces uniqueness by appending an incrementing
        // numeric suffix, so re-submitting an unchanged slug can come back
        // as `slug-2`. Treat that as no change rather than visibly mutating
        // the slug the user did not edit.
        if is_redundant_uniqueness_suffix(&server_slug, &current, candidate) {
            return Ok(SlugOutcome::Unchanged);
        }

        let is_new = {
            let mut draft = self.draft();
            draft.set_slug(server_slug.clone());
            draft.is_new()
        };

        // Any real slug commit ends title-driven generation for good.
        self.title_watch().deactivate();

        if is_new {
            return Ok(SlugOutcome::Deferred);
        }

        let snapshot = self.draft_snapshot();
        match self.store().save(&snapshot).await {
            Ok(()) => {
                self.draft().mark_persisted();
                self.notifications().show_success(&format!(
                    "Permalink successfully changed to {server_slug}."
                ));
                Ok(SlugOutcome::Saved)
            }
            Err(rejection) => {
                // Keep the committed value; the user may retry the save.
                self.notifications().show_errors(&rejection.errors);
                Err(SettingsError::SaveRejected(rejection.errors))
            }
        }
    }
}

/// True when `server_slug` is `current` plus a positive-integer `-N` tail
/// and differs from what the user actually typed: the generator re-derived
/// the existing slug and collided with itself.
fn is_redundant_uniqueness_suffix(server_slug: &str, current: &str, candidate: &str) -> bool {
    let Some((base, tail)) = server_slug.rsplit_once('-') else {
        return false;
    };
    match tail.parse::<u64>() {
        Ok(n) if n > 0 => base == current && server_slug != candidate,
        _ => false,
    }
}
