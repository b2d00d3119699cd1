pub mod dates;
pub mod notify;
pub mod slugs;
pub mod time;

pub use dates::ChronoDateParser;
pub use notify::TracingNotifications;
pub use slugs::LocalSlugGenerator;
pub use time::SystemClock;
