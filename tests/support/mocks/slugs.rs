// tests/support/mocks/slugs.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pressroom_core::application::ports::slugs::{SlugGenerationError, SlugGenerator};

/// Scripted canonicalization authority. Queued responses are handed out in
/// order; when the script runs dry the input is echoed back lowercased and
/// hyphenated. Every request is recorded.
pub struct ScriptedSlugGenerator {
    responses: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<String>>,
    latency: Mutex<Option<Duration>>,
}

impl ScriptedSlugGenerator {
    pub fn echoing() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            latency: Mutex::new(None),
        }
    }

    pub fn respond_with(&self, slug: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(slug.into()));
    }

    pub fn fail_with(&self, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Simulate a slow round-trip (tokio virtual time in paused tests).
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = Some(latency);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn echo_slug(input: &str) -> String {
    input.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[async_trait]
impl SlugGenerator for ScriptedSlugGenerator {
    async fn generate_slug(&self, input: &str) -> Result<String, SlugGenerationError> {
        self.requests.lock().unwrap().push(input.to_owned());

        let latency = *self.latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(slug)) => Ok(slug),
            Some(Err(message)) => Err(SlugGenerationError(message)),
            None => Ok(echo_slug(input)),
        }
    }
}
