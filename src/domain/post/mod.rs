pub mod entity;

pub use entity::{PostDraft, PostField, PostId};
