//! Board squares and the label codec.

use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;

/// Board side length.
pub(crate) const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board, encoded as a `u8`.
///
/// Index = row * 8 + col, so A1 = 0, A2 = 1, ..., H8 = 63. The label codec
/// maps the row to a letter `A`-`H` and the column to a digit `1`-`8`, so
/// "A4" is row 0, column 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if either is
    /// out of `[0, 8)`.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse a two-character label (e.g. "A4") into a square.
    ///
    /// The first byte must be an uppercase letter `A`-`H` (the row) and the
    /// second a digit `1`-`8` (the column). Anything else returns `None`.
    pub fn from_label(label: &str) -> Option<Square> {
        let bytes = label.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let row_byte = bytes[0];
        let col_byte = bytes[1];

        if !(b'A'..=b'H').contains(&row_byte) || !(b'1'..=b'8').contains(&col_byte) {
            return None;
        }

        Square::at(row_byte - b'A', col_byte - b'1')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Return the two-character label for this square.
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Return the square halfway between `self` and `other`.
    ///
    /// Only meaningful for jump endpoints, which are two rows and two
    /// columns apart; the midpoint of two in-bounds squares is in bounds.
    #[inline]
    pub(crate) const fn midpoint(self, other: Square) -> Square {
        let row = (self.row() + other.row()) / 2;
        let col = (self.col() + other.col()) / 2;
        Square::from_index_unchecked(row * BOARD_SIZE + col)
    }

    /// Return `true` if this square is playable (dark) in the initial
    /// layout, i.e. `(row + col)` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Iterate over all 64 squares in index order (A1, A2, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Square, LabelError> {
        Square::from_label(s).ok_or_else(|| LabelError {
            label: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_char = (b'A' + self.row()) as char;
        let col_char = (b'1' + self.col()) as char;
        write!(f, "{row_char}{col_char}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn at_and_accessors() {
        let sq = Square::at(3, 4).unwrap();
        assert_eq!(sq.row(), 3);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 28);
    }

    #[test]
    fn at_out_of_bounds() {
        assert!(Square::at(8, 0).is_none());
        assert!(Square::at(0, 8).is_none());
        assert!(Square::at(255, 255).is_none());
    }

    #[test]
    fn label_examples() {
        // The fixed pairs exercised by the original engine's tests.
        assert_eq!(Square::from_label("A1"), Square::at(0, 0));
        assert_eq!(Square::from_label("D5"), Square::at(3, 4));
        assert_eq!(Square::from_label("H8"), Square::at(7, 7));
        assert_eq!(Square::at(0, 0).unwrap().label(), "A1");
        assert_eq!(Square::at(3, 4).unwrap().label(), "D5");
        assert_eq!(Square::at(7, 7).unwrap().label(), "H8");
    }

    #[test]
    fn label_roundtrip_all_squares() {
        for sq in Square::all() {
            assert_eq!(Square::from_label(&sq.label()), Some(sq));
        }
    }

    #[test]
    fn label_invalid() {
        assert!(Square::from_label("I1").is_none());
        assert!(Square::from_label("A9").is_none());
        assert!(Square::from_label("A0").is_none());
        assert!(Square::from_label("a1").is_none());
        assert!(Square::from_label("").is_none());
        assert!(Square::from_label("A").is_none());
        assert!(Square::from_label("A1b").is_none());
        assert!(Square::from_label("11").is_none());
    }

    #[test]
    fn from_str_error_message() {
        let err = "Z9".parse::<Square>().unwrap_err();
        assert_eq!(format!("{err}"), "invalid square label: \"Z9\"");
    }

    #[test]
    fn midpoint_of_jump_endpoints() {
        let from = Square::at(4, 3).unwrap();
        let to = Square::at(2, 5).unwrap();
        assert_eq!(from.midpoint(to), Square::at(3, 4).unwrap());
        assert_eq!(to.midpoint(from), Square::at(3, 4).unwrap());
    }

    #[test]
    fn dark_square_parity() {
        assert!(!Square::at(0, 0).unwrap().is_dark());
        assert!(Square::at(0, 1).unwrap().is_dark());
        assert!(Square::at(5, 0).unwrap().is_dark());
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn debug_shows_label() {
        assert_eq!(format!("{:?}", Square::at(4, 3).unwrap()), "Square(E4)");
    }
}
