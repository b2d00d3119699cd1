// src/application/settings/published_at.rs
use super::PostSettings;
use crate::application::error::{SettingsError, SettingsResult};

const FORMAT_HINT: &str = "Published Date must be a valid date with format: \
DD MMM YY @ HH:mm (e.g. 6 Dec 14 @ 15:00)";
const FUTURE_DATE: &str = "Published Date cannot currently be in the future.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// Input matched the committed date, or was empty on a published post.
    Unchanged,
    /// Empty input on an unpublished draft cleared the field (not persisted
    /// until the next explicit save).
    Cleared,
    /// Committed and persisted.
    Saved,
}

impl PostSettings {
    /// Parse, validate, and persist a user-entered publish date.
    ///
    /// Unlike the slug path this always saves immediately, even on a
    /// never-persisted draft.
    pub async fn set_published_at(&self, user_input: &str) -> SettingsResult<DateOutcome> {
        if user_input.is_empty() {
            let mut draft = self.draft();
            if draft.is_draft() {
                draft.set_published_at(None);
                return Ok(DateOutcome::Cleared);
            }
            return Ok(DateOutcome::Unchanged);
        }

        let Some(parsed) = self.dates().parse(user_input) else {
            self.notifications().show_error(FORMAT_HINT);
            return Err(SettingsError::validation(FORMAT_HINT));
        };

        // Do nothing if the user didn't actually change the date.
        if self.draft().published_at() == Some(parsed) {
            return Ok(DateOutcome::Unchanged);
        }

        if (parsed - self.clock().now()).num_hours() > 0 {
            self.notifications().show_error(FUTURE_DATE);
            return Err(SettingsError::validation(FUTURE_DATE));
        }

        {
            let mut draft = self.draft();
            draft.set_published_at(Some(parsed));
        }

        let snapshot = self.draft_snapshot();
        match self.store().save(&snapshot).await {
            Ok(()) => {
                self.draft().mark_persisted();
                self.notifications().show_success(&format!(
                    "Publish date successfully changed to {}.",
                    self.dates().format(parsed)
                ));
                Ok(DateOutcome::Saved)
            }
            Err(rejection) => {
                self.notifications().show_errors(&rejection.errors);
                Err(SettingsError::SaveRejected(rejection.errors))
            }
        }
    }
}
