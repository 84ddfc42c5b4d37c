use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// a square on the othello board, 0..63 (a1=0, h1=7, a8=56, h8=63).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub fn new(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// square at `row` (0 = row "1") and `col` (0 = column "a").
    #[inline]
    pub fn make_square(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square((row * 8 + col) as u8)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        (self.0 >> 3) as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        (self.0 & 7) as usize
    }

    /// corners are never flippable once taken.
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(self.0, 0 | 7 | 56 | 63)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_char = (b'a' + self.col() as u8) as char;
        let row_char = (b'1' + self.row() as u8) as char;
        write!(f, "{}{}", col_char, row_char)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if col >= 8 || row >= 8 {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        Ok(Square::make_square(row as usize, col as usize))
    }
}

/// all 64 squares in order a1, b1, ..., h8.
pub const ALL_SQUARES: [Square; 64] = {
    let mut arr = [Square(0); 64];
    let mut i = 0u8;
    while i < 64 {
        arr[i as usize] = Square(i);
        i += 1;
    }
    arr
};


// Same LERF mapping as a bitboard bit index: index = row * 8 + col. Othello notation puts row 1
// at the top of the printed board, so the printed grid reads in index order.
