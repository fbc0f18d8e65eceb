use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// Room sides are capped at `i32::MAX`, so every in-room row and column converts exactly.
    pub fn from_row_col(row: usize, col: usize) -> Self {
        debug_assert!(
            i32::try_from(row).is_ok() && i32::try_from(col).is_ok(),
            "({row}, {col}) does not fit a room position"
        );
        Self { y: row as i32, x: col as i32 }
    }
}

/// One rendered room cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Wall,
    Door,
    Empty,
    Decoration,
    Key,
}

impl Glyph {
    pub const ALL: [Glyph; 5] =
        [Glyph::Wall, Glyph::Door, Glyph::Empty, Glyph::Decoration, Glyph::Key];

    pub fn as_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Door => '0',
            Self::Empty => ' ',
            Self::Decoration => '*',
            Self::Key => 'K',
        }
    }

    pub fn from_char(value: char) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.as_char() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Corner,
    Border,
    Interior,
}
