pub mod config;
pub mod error;
pub mod room;
pub mod types;

pub use config::RoomConfig;
pub use error::RoomError;
pub use room::{FieldGenerator, GeneratedRoom, KeyAddressing};
pub use types::*;
