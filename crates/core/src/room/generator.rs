//! Room generation pass: classify every cell, draw its glyph, then stamp the key.

use log::{debug, trace};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use super::{MAX_SIDE, MIN_SIDE};
use super::grid::{cell_index, classify};
use super::key::{KeyAddressing, choose_key_placement, text_len};
use super::model::GeneratedRoom;
use super::producer::CellProducer;
use super::rng::generate_runtime_seed;
use crate::config::RoomConfig;
use crate::error::RoomError;
use crate::types::{CellKind, Glyph};

/// Doors allowed on the border of one room.
pub const MAX_DOORS: u8 = 4;

/// Generates rooms of a fixed size from an owned random source.
///
/// Every [`generate`](Self::generate) call draws a fresh room; nothing is
/// cached between calls.
pub struct FieldGenerator<R = ChaCha8Rng> {
    rng: R,
    rows: usize,
    cols: usize,
    addressing: KeyAddressing,
}

impl FieldGenerator<ChaCha8Rng> {
    /// Unseeded generator for production use.
    pub fn new(rows: usize, cols: usize) -> Result<Self, RoomError> {
        Self::with_seed(rows, cols, generate_runtime_seed())
    }

    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, RoomError> {
        Self::with_rng(rows, cols, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(config: &RoomConfig) -> Result<Self, RoomError> {
        let generator = match config.seed {
            Some(seed) => Self::with_seed(config.rows, config.cols, seed)?,
            None => Self::new(config.rows, config.cols)?,
        };
        generator.with_addressing(config.addressing)
    }
}

impl<R: Rng> FieldGenerator<R> {
    pub fn with_rng(rows: usize, cols: usize, rng: R) -> Result<Self, RoomError> {
        validate_shape(rows, cols, KeyAddressing::default())?;
        Ok(Self { rng, rows, cols, addressing: KeyAddressing::default() })
    }

    pub fn with_addressing(mut self, addressing: KeyAddressing) -> Result<Self, RoomError> {
        validate_shape(self.rows, self.cols, addressing)?;
        self.addressing = addressing;
        Ok(self)
    }

    /// Changes the size of future rooms. Rooms already generated are untouched,
    /// and an invalid size leaves the current one in place.
    pub fn set_size(&mut self, rows: usize, cols: usize) -> Result<(), RoomError> {
        validate_shape(rows, cols, self.addressing)?;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn addressing(&self) -> KeyAddressing {
        self.addressing
    }

    pub fn generate(&mut self) -> GeneratedRoom {
        let (rows, cols) = (self.rows, self.cols);
        let (mut cells, mut door_count) =
            fill_grid(rows, cols, |producer| producer.produce(&mut self.rng));

        let key = choose_key_placement(&mut self.rng, rows, cols, self.addressing);
        if let Some(pos) = key.cell(rows, cols) {
            let cell = &mut cells[cell_index(cols, pos.y as usize, pos.x as usize)];
            // Flattened keys can land on a border door.
            if *cell == Glyph::Door {
                door_count -= 1;
            }
            *cell = Glyph::Key;
        }

        let room = GeneratedRoom { rows, cols, cells, door_count, key };
        debug!(
            "generated {rows}x{cols} room: doors={door_count} key={:?} addressing={} fingerprint={:016x}",
            key.stamp,
            self.addressing,
            room.fingerprint()
        );
        room
    }

    pub fn generate_text(&mut self) -> String {
        self.generate().to_text()
    }
}

/// Fills a `rows` x `cols` grid in row-major order, asking `draw` for every
/// border and interior glyph. Once [`MAX_DOORS`] doors are out, remaining border
/// cells become walls without calling `draw`.
pub fn fill_cells<F>(rows: usize, cols: usize, draw: F) -> Result<(Vec<Glyph>, u8), RoomError>
where
    F: FnMut(CellProducer) -> Glyph,
{
    validate_shape(rows, cols, KeyAddressing::Cell)?;
    Ok(fill_grid(rows, cols, draw))
}

fn fill_grid<F>(rows: usize, cols: usize, mut draw: F) -> (Vec<Glyph>, u8)
where
    F: FnMut(CellProducer) -> Glyph,
{
    let mut cells = Vec::with_capacity(rows * cols);
    let mut door_count = 0_u8;

    for row in 0..rows {
        for col in 0..cols {
            let glyph = match classify(rows, cols, row, col) {
                CellKind::Corner => Glyph::Wall,
                CellKind::Border if door_count < MAX_DOORS => {
                    let glyph = draw(CellProducer::Border);
                    if glyph == Glyph::Door {
                        door_count += 1;
                        trace!("door {door_count} at ({row}, {col})");
                    }
                    glyph
                }
                CellKind::Border => Glyph::Wall,
                CellKind::Interior => draw(CellProducer::Interior),
            };
            cells.push(glyph);
        }
    }

    (cells, door_count)
}

fn validate_shape(rows: usize, cols: usize, addressing: KeyAddressing) -> Result<(), RoomError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(RoomError::InvalidDimensions { rows, cols });
    }
    // The rendered text, line breaks included, must stay addressable.
    if rows > MAX_SIDE || cols > MAX_SIDE || text_len(rows, cols).is_none() {
        return Err(RoomError::RoomTooLarge { rows, cols });
    }
    addressing.validate(rows, cols)
}
