//! Per-cell glyph draws for border and interior cells.

use std::ops::RangeInclusive;

use rand_chacha::rand_core::Rng;

use super::rng::uniform_inclusive;
use crate::types::Glyph;

const BORDER_DRAW_MAX: u64 = 100;
const BORDER_DOOR_THRESHOLD: u64 = 95;
const INTERIOR_DRAW_MAX: u64 = 20;
const INTERIOR_DECORATION_THRESHOLD: u64 = 19;

/// Stateless source of one glyph per draw. Each variant owns a fixed draw range
/// and a threshold above which the rarer glyph is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellProducer {
    /// Wall, or a door on a draw of 95..=100.
    Border,
    /// Empty floor, or decoration on a draw of 19..=20.
    Interior,
}

impl CellProducer {
    pub fn draw_range(self) -> RangeInclusive<u64> {
        match self {
            Self::Border => 0..=BORDER_DRAW_MAX,
            Self::Interior => 0..=INTERIOR_DRAW_MAX,
        }
    }

    pub fn glyph_for_draw(self, draw: u64) -> Glyph {
        match self {
            Self::Border if draw >= BORDER_DOOR_THRESHOLD => Glyph::Door,
            Self::Border => Glyph::Wall,
            Self::Interior if draw >= INTERIOR_DECORATION_THRESHOLD => Glyph::Decoration,
            Self::Interior => Glyph::Empty,
        }
    }

    pub fn produce<R: Rng>(self, rng: &mut R) -> Glyph {
        let range = self.draw_range();
        self.glyph_for_draw(uniform_inclusive(rng, *range.start(), *range.end()))
    }
}
