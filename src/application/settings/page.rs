// src/application/settings/page.rs
use super::PostSettings;
use crate::application::error::{SettingsError, SettingsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Unchanged,
    Saved,
}

impl PostSettings {
    /// Flip the post/static-page flag and persist it right away.
    pub async fn set_static_page(&self, page: bool) -> SettingsResult<PageOutcome> {
        {
            let mut draft = self.draft();
            if draft.page() == page {
                return Ok(PageOutcome::Unchanged);
            }
            draft.set_page(page);
        }

        let snapshot = self.draft_snapshot();
        match self.store().save(&snapshot).await {
            Ok(()) => {
                self.draft().mark_persisted();
                let kind = if page { "static page" } else { "post" };
                self.notifications()
                    .show_success(&format!("Successfully converted to {kind}."));
                Ok(PageOutcome::Saved)
            }
            Err(rejection) => {
                self.notifications().show_errors(&rejection.errors);
                Err(SettingsError::SaveRejected(rejection.errors))
            }
        }
    }
}
