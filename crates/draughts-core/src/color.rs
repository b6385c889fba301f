//! Draughts piece colors.

use std::fmt;
use std::ops::Not;

/// A draughts piece color: White or Red.
///
/// White men move toward higher rows, Red men toward lower rows. An empty
/// square is represented as the absence of a [`Piece`](crate::Piece), not as
/// a third color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Red = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Red];

    /// Return the index (0 for White, 1 for Red).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Red,
            Color::Red => Color::White,
        }
    }

    /// Return the crowning row for this color (the far rank that promotes a
    /// man to a king): row 7 for White, row 0 for Red.
    #[inline]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Red => 0,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Red => write!(f, "red"),
        }
    }
}
