//! Procedural room generation split into producers, classification, keys, and output.

pub mod key;
pub mod model;
pub mod producer;

mod generator;
mod grid;
mod rng;

use crate::error::RoomError;

pub use generator::{FieldGenerator, MAX_DOORS, fill_cells};
pub use grid::{classify, is_border, is_corner};
pub use key::{KeyAddressing, KeyPlacement, KeyStamp};
pub use model::GeneratedRoom;
pub use producer::CellProducer;
pub use rng::generate_runtime_seed;

/// Rows used by the default room profile.
pub const DEFAULT_ROWS: usize = 20;
/// Columns used by the default room profile.
pub const DEFAULT_COLS: usize = 40;
/// Smallest side length that still leaves an interior cell.
pub const MIN_SIDE: usize = 3;
/// Largest side length. Positions are stored as `i32`.
pub const MAX_SIDE: usize = i32::MAX as usize;

pub fn generate_room(rows: usize, cols: usize, seed: u64) -> Result<GeneratedRoom, RoomError> {
    Ok(FieldGenerator::with_seed(rows, cols, seed)?.generate())
}
