//! The finished room: glyph grid, key placement, and text rendering.

use std::fmt;

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use super::grid::cell_index;
use super::key::{KeyPlacement, KeyStamp, text_len};
use crate::types::{Glyph, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedRoom {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) cells: Vec<Glyph>,
    pub(super) door_count: u8,
    pub(super) key: KeyPlacement,
}

impl GeneratedRoom {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major glyphs, key included when it landed on a cell.
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    pub fn door_count(&self) -> u8 {
        self.door_count
    }

    pub fn key(&self) -> KeyPlacement {
        self.key
    }

    pub fn glyph_at(&self, pos: Pos) -> Option<Glyph> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (row, col) = (pos.y as usize, pos.x as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[cell_index(self.cols, row, col)])
    }

    pub fn count(&self, glyph: Glyph) -> usize {
        self.cells.iter().filter(|&&cell| cell == glyph).count()
    }

    /// One line per row, each followed by `\n`. A flattened key that hit a line
    /// break replaces that break.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(text_len(self.rows, self.cols).unwrap_or_default());
        for row in self.cells.chunks(self.cols) {
            text.extend(row.iter().map(|glyph| glyph.as_char()));
            text.push('\n');
        }
        if let KeyStamp::TextOffset(offset) = self.key.stamp
            && self.key.cell(self.rows, self.cols).is_none()
        {
            text.replace_range(offset..=offset, "K");
        }
        text
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() + 32);
        bytes.extend((self.rows as u32).to_le_bytes());
        bytes.extend((self.cols as u32).to_le_bytes());
        for glyph in &self.cells {
            bytes.push(match glyph {
                Glyph::Wall => 0,
                Glyph::Door => 1,
                Glyph::Empty => 2,
                Glyph::Decoration => 3,
                Glyph::Key => 4,
            });
        }
        bytes.push(self.door_count);
        bytes.extend(self.key.pick.y.to_le_bytes());
        bytes.extend(self.key.pick.x.to_le_bytes());
        match self.key.stamp {
            KeyStamp::Cell(_) => bytes.push(0),
            KeyStamp::TextOffset(offset) => {
                bytes.push(1);
                bytes.extend((offset as u64).to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl fmt::Display for GeneratedRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
