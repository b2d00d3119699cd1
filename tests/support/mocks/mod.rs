// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod slugs;
pub mod store;

pub use notify::{Notice, RecordingNotifications};
pub use slugs::ScriptedSlugGenerator;
pub use store::RecordingStore;
pub use time::{FixedClock, fixed_now};
