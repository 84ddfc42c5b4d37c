use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::square::Square;

/// Bitboard is set of squares represented as 64-bit integer.
/// Each bit corresponds to square (bit 0 = a1, bit 63 = h8).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct BitBoard(pub u64);

/// empty bitboard.
pub const EMPTY: BitBoard = BitBoard(0);

const NOT_COL_A: u64 = 0xFEFE_FEFE_FEFE_FEFE;
const NOT_COL_H: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// The eight compass directions a line of discs can run in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];
}

impl BitBoard {
    /// create a bitboard with a single square set.
    #[inline]
    pub fn from_square(sq: Square) -> Self {
        BitBoard(1u64 << sq.to_index())
    }

    /// population count (number of set bits).
    #[inline]
    pub fn popcnt(self) -> u32 {
        self.0.count_ones()
    }

    /// returns true if no bits are set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        !(self & BitBoard::from_square(sq)).is_empty()
    }

    /// move every square one step in `dir`. Squares pushed off the board vanish,
    /// nothing wraps from column h to column a or back.
    #[inline]
    pub fn shift(self, dir: Direction) -> BitBoard {
        let b = self.0;
        BitBoard(match dir {
            Direction::North => b << 8,
            Direction::South => b >> 8,
            Direction::East => (b << 1) & NOT_COL_A,
            Direction::West => (b >> 1) & NOT_COL_H,
            Direction::NorthEast => (b << 9) & NOT_COL_A,
            Direction::NorthWest => (b << 7) & NOT_COL_H,
            Direction::SouthEast => (b >> 7) & NOT_COL_A,
            Direction::SouthWest => (b >> 9) & NOT_COL_H,
        })
    }

    /// iterate over set squares in ascending index order.
    #[inline]
    pub fn iter(self) -> BitBoardIter {
        BitBoardIter(self.0)
    }
}

/// iterator over the set bits of a BitBoard.
pub struct BitBoardIter(u64);

impl Iterator for BitBoardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // clear lowest set bit
            Some(Square::new(idx))
        }
    }
}

// --- operator impls ---
impl BitAnd for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn bitand(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 & rhs.0)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, rhs: BitBoard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn bitor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, rhs: BitBoard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn bitxor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for BitBoard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: BitBoard) {
        self.0 ^= rhs.0;
    }
}

impl Not for BitBoard {
    type Output = BitBoard;
    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}


// Each bit is a square. Shifting by 8 moves a set one row, by 1 one column. The column masks
// drop bits that would otherwise wrap onto the opposite edge of the next row.
