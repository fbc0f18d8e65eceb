//! Errors raised while configuring a room generator.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    /// Rooms need at least one interior cell, so both sides must be 3 or more.
    #[error("room must be at least 3x3, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Sides past `i32::MAX`, or a rendered text longer than `usize` can index.
    #[error("room {rows}x{cols} is too large to generate")]
    RoomTooLarge { rows: usize, cols: usize },
    /// Flattened key addressing can reach past the end of the rendered text.
    #[error(
        "flattened key offset {offset} does not fit a {rows}x{cols} room ({text_len} characters)"
    )]
    KeyOffsetOutOfRange { rows: usize, cols: usize, offset: usize, text_len: usize },
    #[error("unknown key addressing mode '{0}', expected 'cell' or 'flattened'")]
    UnknownAddressing(String),
    #[error("room config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
