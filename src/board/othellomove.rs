use std::fmt;

use super::color::Color;
use super::square::Square;

/// Disc placement encoded compactly in a u8.
///
/// Layout: `square(6) | color(1) | reserved(1)`
///   - bits 0..5: target square (0-63)
///   - bit 6: color placing the disc (0 = black, 1 = white)
///
/// The color travels with the move so a child position can be derived without
/// consulting the parent's side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OthelloMove(u8);

impl OthelloMove {
    #[inline]
    pub fn new(square: Square, color: Color) -> Self {
        let mut bits = square.to_index() as u8;
        if color == Color::White {
            bits |= 1 << 6;
        }
        OthelloMove(bits)
    }

    #[inline]
    pub fn square(self) -> Square {
        Square::new(self.0 & 0x3F)
    }

    #[inline]
    pub fn color(self) -> Color {
        if self.0 & (1 << 6) == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for OthelloMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.square())
    }
}

impl fmt::Debug for OthelloMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OthelloMove({} {})", self.color().to_char(), self.square())
    }
}
