// src/infrastructure/notify.rs
use crate::application::ports::notify::Notifications;

/// Notification sink that routes to structured logs; useful as a default
/// until a UI surface is attached.
#[derive(Default, Clone)]
pub struct TracingNotifications;

impl Notifications for TracingNotifications {
    fn show_success(&self, message: &str) {
        tracing::info!(%message, "notification");
    }

    fn show_error(&self, message: &str) {
        tracing::error!(%message, "notification");
    }

    fn show_errors(&self, messages: &[String]) {
        for message in messages {
            self.show_error(message);
        }
    }
}
