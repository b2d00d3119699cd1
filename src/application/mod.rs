pub mod error;
pub mod ports;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
