//! Common types shared by all entity payloads

pub mod entity_id;

pub use entity_id::{deserialize_id, deserialize_opt_id};
