//! A draughts piece: a color plus a king flag.

use std::fmt;

use crate::color::Color;

/// A draughts piece. An empty square holds no `Piece` at all, so a removed
/// piece carries no stale king flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Create an uncrowned man of the given color.
    #[inline]
    pub const fn man(color: Color) -> Piece {
        Piece { color, king: false }
    }

    /// Create a king of the given color.
    #[inline]
    pub const fn king(color: Color) -> Piece {
        Piece { color, king: true }
    }

    /// Return the color of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` if this piece has been crowned.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Return this piece promoted to a king. Crowning a king is a no-op.
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece {
            color: self.color,
            king: true,
        }
    }

    /// Return the diagram character: `w`/`r` for men, `W`/`R` for kings.
    #[inline]
    pub const fn diagram_char(self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
        }
    }

    /// Parse a diagram character into a piece. Returns `None` for any
    /// character that is not one of `w`, `W`, `r`, `R`.
    #[inline]
    pub const fn from_diagram_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.king { "king" } else { "man" };
        write!(f, "Piece({} {})", self.color, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;

    #[test]
    fn man_is_not_king() {
        let piece = Piece::man(Color::White);
        assert_eq!(piece.color(), Color::White);
        assert!(!piece.is_king());
    }

    #[test]
    fn crowned_keeps_color() {
        let piece = Piece::man(Color::Red).crowned();
        assert_eq!(piece.color(), Color::Red);
        assert!(piece.is_king());
    }

    #[test]
    fn crowning_a_king_is_noop() {
        let king = Piece::king(Color::White);
        assert_eq!(king.crowned(), king);
    }

    #[test]
    fn diagram_char_roundtrip() {
        for piece in [
            Piece::man(Color::White),
            Piece::king(Color::White),
            Piece::man(Color::Red),
            Piece::king(Color::Red),
        ] {
            assert_eq!(Piece::from_diagram_char(piece.diagram_char()), Some(piece));
        }
    }

    #[test]
    fn from_diagram_char_invalid() {
        assert_eq!(Piece::from_diagram_char('.'), None);
        assert_eq!(Piece::from_diagram_char('x'), None);
        assert_eq!(Piece::from_diagram_char(' '), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Piece::man(Color::White)), "w");
        assert_eq!(format!("{}", Piece::king(Color::Red)), "R");
        assert_eq!(format!("{:?}", Piece::man(Color::Red)), "Piece(red man)");
        assert_eq!(format!("{:?}", Piece::king(Color::White)), "Piece(white king)");
    }
}
