// src/application/ports/mod.rs
pub mod dates;
pub mod notify;
pub mod slugs;
pub mod store;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type SlugGeneratorPort = dyn slugs::SlugGenerator;
pub type PostStorePort = dyn store::PostStore;
pub type NotificationsPort = dyn notify::Notifications;
pub type ClockPort = dyn time::Clock;
pub type DateTimeParserPort = dyn dates::DateTimeParser;
