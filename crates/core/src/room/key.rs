//! Key pick and the two ways a pick is mapped onto the finished room.
//!
//! A pick is always `(x, y)` with `x` in `1..=rows-2` and `y` in `1..=cols-2`.
//! [`KeyAddressing::Cell`] treats it as a row/column pair. [`KeyAddressing::Flattened`]
//! treats `x * rows + y` as an offset into the rendered text (rows of `cols`
//! glyphs, each followed by a line break), which lands on the intended cell only
//! when `cols + 1 == rows`.

use std::fmt;
use std::str::FromStr;

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use super::rng::uniform_usize;
use crate::error::RoomError;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAddressing {
    /// Key goes on interior cell `(row = x, col = y)`.
    #[default]
    Cell,
    /// Key goes on text offset `x * rows + y`, line breaks included.
    Flattened,
}

impl KeyAddressing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cell => "cell",
            Self::Flattened => "flattened",
        }
    }

    /// Rejects shapes where the largest reachable flattened offset falls past the text.
    /// Expects `rows` and `cols` to be at least 3. An offset too large for `usize`
    /// is reported as `usize::MAX`.
    pub fn validate(self, rows: usize, cols: usize) -> Result<(), RoomError> {
        if self == Self::Cell {
            return Ok(());
        }
        let text_len = text_len(rows, cols).ok_or(RoomError::RoomTooLarge { rows, cols })?;
        let offset = flattened_offset(rows, rows - 2, cols - 2).unwrap_or(usize::MAX);
        if offset >= text_len {
            return Err(RoomError::KeyOffsetOutOfRange { rows, cols, offset, text_len });
        }
        Ok(())
    }
}

impl fmt::Display for KeyAddressing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyAddressing {
    type Err = RoomError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cell" => Ok(Self::Cell),
            "flattened" => Ok(Self::Flattened),
            _ => Err(RoomError::UnknownAddressing(value.to_owned())),
        }
    }
}

/// Where the key ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyStamp {
    /// Grid cell holding the key.
    Cell(Pos),
    /// Offset into the rendered text; may be a line break.
    TextOffset(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPlacement {
    /// Raw draw as a row/column pair, before addressing is applied.
    pub pick: Pos,
    pub stamp: KeyStamp,
}

impl KeyPlacement {
    /// Grid cell overwritten by the key, `None` when a line break took it.
    pub fn cell(&self, rows: usize, cols: usize) -> Option<Pos> {
        match self.stamp {
            KeyStamp::Cell(pos) => Some(pos),
            KeyStamp::TextOffset(offset) => text_offset_to_cell(rows, cols, offset),
        }
    }

    /// Offset of the key inside the rendered text.
    pub fn text_offset(&self, cols: usize) -> usize {
        match self.stamp {
            KeyStamp::Cell(pos) => (pos.y as usize) * (cols + 1) + pos.x as usize,
            KeyStamp::TextOffset(offset) => offset,
        }
    }
}

pub(super) fn choose_key_placement<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    addressing: KeyAddressing,
) -> KeyPlacement {
    let x = uniform_usize(rng, 1, rows - 2);
    let y = uniform_usize(rng, 1, cols - 2);
    let pick = Pos::from_row_col(x, y);
    let stamp = match addressing {
        KeyAddressing::Cell => KeyStamp::Cell(pick),
        // Validated shapes keep every offset below the text length.
        KeyAddressing::Flattened => {
            KeyStamp::TextOffset(flattened_offset(rows, x, y).unwrap_or(usize::MAX))
        }
    };
    KeyPlacement { pick, stamp }
}

/// Characters in the rendered text, `None` when that overflows `usize`.
pub(super) fn text_len(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols.checked_add(1)?)
}

pub(super) fn text_offset_to_cell(rows: usize, cols: usize, offset: usize) -> Option<Pos> {
    let row = offset / (cols + 1);
    let col = offset % (cols + 1);
    (row < rows && col < cols).then(|| Pos::from_row_col(row, col))
}

fn flattened_offset(rows: usize, x: usize, y: usize) -> Option<usize> {
    x.checked_mul(rows)?.checked_add(y)
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn addressing_parses_case_insensitively_and_rejects_unknown_names() {
        assert_eq!("cell".parse::<KeyAddressing>(), Ok(KeyAddressing::Cell));
        assert_eq!(" Flattened ".parse::<KeyAddressing>(), Ok(KeyAddressing::Flattened));
        assert_eq!(
            "diagonal".parse::<KeyAddressing>(),
            Err(RoomError::UnknownAddressing("diagonal".to_owned()))
        );
        assert_eq!(KeyAddressing::default(), KeyAddressing::Cell);
        assert_eq!(KeyAddressing::Flattened.to_string(), "flattened");
    }

    #[test]
    fn cell_picks_stay_inside_the_interior() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for _ in 0..500 {
            let placement = choose_key_placement(&mut rng, 6, 9, KeyAddressing::Cell);
            let KeyStamp::Cell(pos) = placement.stamp else {
                panic!("cell addressing produced {placement:?}");
            };
            assert!((1..=4).contains(&pos.y) && (1..=7).contains(&pos.x), "{pos:?}");
            assert_eq!(pos, placement.pick);
        }
    }

    #[test]
    fn flattened_offset_uses_row_count_as_stride() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        for _ in 0..500 {
            let placement = choose_key_placement(&mut rng, 20, 40, KeyAddressing::Flattened);
            let expected = (placement.pick.y as usize) * 20 + placement.pick.x as usize;
            assert_eq!(placement.stamp, KeyStamp::TextOffset(expected));
            assert_eq!(placement.text_offset(40), expected);
        }
    }

    #[test]
    fn flattened_offsets_map_back_to_cells_or_line_breaks() {
        // 20x40 text rows are 41 characters wide.
        assert_eq!(text_offset_to_cell(20, 40, 41), Some(Pos { y: 1, x: 0 }));
        assert_eq!(text_offset_to_cell(20, 40, 40), None);
        assert_eq!(text_offset_to_cell(20, 40, 42), Some(Pos { y: 1, x: 1 }));
        assert_eq!(text_offset_to_cell(3, 3, 4), Some(Pos { y: 1, x: 0 }));
    }

    #[test]
    fn flattened_matches_cell_when_rows_equal_cols_plus_one() {
        let placement = KeyPlacement { pick: Pos { y: 2, x: 3 }, stamp: KeyStamp::TextOffset(13) };
        assert_eq!(placement.cell(5, 4), Some(Pos { y: 2, x: 3 }));
    }

    #[test]
    fn flattened_validation_rejects_tall_narrow_rooms() {
        assert!(KeyAddressing::Flattened.validate(20, 40).is_ok());
        assert!(KeyAddressing::Flattened.validate(3, 3).is_ok());
        assert_eq!(
            KeyAddressing::Flattened.validate(20, 3),
            Err(RoomError::KeyOffsetOutOfRange { rows: 20, cols: 3, offset: 361, text_len: 80 })
        );
        assert!(KeyAddressing::Cell.validate(20, 3).is_ok());
    }

    #[test]
    fn flattened_validation_reports_overflowing_shapes_as_errors() {
        let huge = usize::MAX / 2;
        assert_eq!(
            KeyAddressing::Flattened.validate(huge, 3),
            Err(RoomError::RoomTooLarge { rows: huge, cols: 3 })
        );
        assert_eq!(
            KeyAddressing::Flattened.validate(3, usize::MAX),
            Err(RoomError::RoomTooLarge { rows: 3, cols: usize::MAX })
        );
        assert_eq!(text_len(20, 40), Some(820));
        assert_eq!(text_len(2, usize::MAX), None);
        assert_eq!(flattened_offset(usize::MAX, 2, 0), None);
    }
}
