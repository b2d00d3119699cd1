// tests/support/mocks/store.rs
use std::sync::Mutex;

use async_trait::async_trait;
use pressroom_core::application::ports::store::{PostStore, SaveRejection};
use pressroom_core::domain::post::PostDraft;

/// Persistence double that records every attempted save and can be made to
/// reject them with field-level messages.
pub struct RecordingStore {
    saves: Mutex<Vec<PostDraft>>,
    rejection: Mutex<Option<Vec<String>>>,
}

impl RecordingStore {
    pub fn accepting() -> Self {
        Self {
            saves: Mutex::new(Vec::new()),
            rejection: Mutex::new(None),
        }
    }

    /// Reject every save from now on with the given messages.
    pub fn reject_with(&self, errors: Vec<String>) {
        *self.rejection.lock().unwrap() = Some(errors);
    }

    pub fn accept_again(&self) {
        *self.rejection.lock().unwrap() = None;
    }

    pub fn saves(&self) -> Vec<PostDraft> {
        self.saves.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl PostStore for RecordingStore {
    async fn save(&self, post: &PostDraft) -> Result<(), SaveRejection> {
        self.saves.lock().unwrap().push(post.clone());
        match self.rejection.lock().unwrap().clone() {
            Some(errors) => Err(SaveRejection::new(errors)),
            None => Ok(()),
        }
    }
}
