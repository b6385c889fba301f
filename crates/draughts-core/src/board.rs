//! The draughts board: piece placement, path generation, and path execution.

use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::movegen;
use crate::path::Path;
use crate::piece::Piece;
use crate::square::Square;

/// An 8x8 grid of piece slots. The grid is fixed-size; a capture or a
/// vacated square clears the slot rather than shrinking anything.
///
/// The board is the single mutable entity in the crate: path generation
/// reads it, and only [`Board::execute_path`] writes it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return the initial position: White men on the dark squares of rows
    /// 0-2, Red men on the dark squares of rows 5-7.
    pub fn new() -> Board {
        let mut grid = [None; Square::COUNT];
        for sq in Square::all() {
            if !sq.is_dark() {
                continue;
            }
            if sq.row() < 3 {
                grid[sq.index()] = Some(Piece::man(Color::White));
            } else if sq.row() > 4 {
                grid[sq.index()] = Some(Piece::man(Color::Red));
            }
        }
        Board { grid }
    }

    /// Construct a board from a raw grid. Used by diagram parsing and tests.
    pub fn from_grid(grid: [Option<Piece>; Square::COUNT]) -> Board {
        Board { grid }
    }

    /// Return the piece on the given square, if any. Constant time.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    /// Return `true` if the given square holds no piece.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// Count the pieces of the given color. Full-grid scan; used by the
    /// turn loop to detect a finished game.
    pub fn count_pieces(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|piece| piece.color() == color)
            .count()
    }

    /// Return `true` if `label` names a square holding a piece of `color`.
    ///
    /// This is the sanitization point between human-entered text and board
    /// coordinates: a malformed label, an out-of-board label, or a
    /// mismatched or absent piece all return `false`, never an error.
    pub fn is_own_piece_at(&self, color: Color, label: &str) -> bool {
        match Square::from_label(label) {
            Some(sq) => self.piece_at(sq).is_some_and(|piece| piece.color() == color),
            None => false,
        }
    }

    /// Enumerate every maximal legal path for the piece at `label`.
    ///
    /// Returns an empty vec for a malformed label or an empty square. The
    /// result order is deterministic for a given board state (the caller
    /// numbers paths for the user to pick from).
    pub fn generate_paths(&self, label: &str) -> Vec<Path> {
        match Square::from_label(label) {
            Some(sq) => movegen::generate_paths(self, sq),
            None => Vec::new(),
        }
    }

    /// Apply a chosen path: captures are performed, the piece is moved, and
    /// a man landing on the far rank is crowned.
    ///
    /// Steps are applied strictly in path order so that a capture chain
    /// looping back through its own origin square stays consistent. No
    /// validation is re-performed: the path must have come from
    /// [`Board::generate_paths`] on the current board state. Executing a
    /// stale or foreign path leaves the board in an unspecified state.
    pub fn execute_path(&mut self, path: &Path) {
        let mut current = path.origin();
        for &next in path.squares().iter().skip(1) {
            if current.row().abs_diff(next.row()) == 2 {
                self.grid[current.midpoint(next).index()] = None;
            }
            self.move_piece(current, next);
            current = next;
        }
        debug!(path = %path, "executed path");
    }

    /// Move the piece on `src` to `dst`, crowning it if `dst` is on the far
    /// rank for its color. Clears `src`.
    fn move_piece(&mut self, src: Square, dst: Square) {
        if let Some(piece) = self.grid[src.index()] {
            let landed = if dst.row() == piece.color().crowning_row() {
                piece.crowned()
            } else {
                piece
            };
            self.grid[dst.index()] = Some(landed);
            self.grid[src.index()] = None;
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Wrapper for pretty-printing a board as a labeled 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   1 2 3 4 5 6 7 8")?;
        for row in 0u8..8 {
            let row_char = (b'A' + row) as char;
            write!(f, "{row_char} ")?;
            for col in 0u8..8 {
                let sq = Square::at(row, col).expect("row and col are in range");
                let c = match self.0.piece_at(sq) {
                    Some(piece) => piece.diagram_char(),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
