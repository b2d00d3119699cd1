// src/application/ports/notify.rs

/// Fire-and-forget user notification surface.
pub trait Notifications: Send + Sync {
    fn show_success(&self, message: &str);
    fn show_error(&self, message: &str);
    fn show_errors(&self, messages: &[String]);
}
