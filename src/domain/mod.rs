//! Domain primitives shared by the session state machine and its stores.

pub mod errors;
pub mod types;

pub use errors::EditorError;
pub use types::{CommandId, EditId, RegionName, TimestampUtc};
