use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::ParseError;

// disc color: black or white. Also the tag for the two competing sides.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// board-string character: `X` for black, `O` for white.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    pub const ALL: [Color; 2] = [Color::Black, Color::White];
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "X" | "x" | "b" | "black" => Ok(Color::Black),
            "O" | "o" | "w" | "white" => Ok(Color::White),
            _ => Err(ParseError::InvalidSide(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_flip() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn test_color_index() {
        assert_eq!(Color::Black.to_index(), 0);
        assert_eq!(Color::White.to_index(), 1);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("X".parse::<Color>().unwrap(), Color::Black);
        assert_eq!("white".parse::<Color>().unwrap(), Color::White);
        assert!("?".parse::<Color>().is_err());
    }
}
