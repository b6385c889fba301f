//! Board diagram parsing and serialization for [`Board`].
//!
//! A diagram is 8 lines of 8 characters, row 0 (the `A` row) first:
//! `.` for an empty square, `w`/`r` for men, `W`/`R` for kings. It exists
//! for tests and debugging; the interactive layer renders boards through
//! [`Board::pretty`](crate::Board::pretty) instead.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::DiagramError;
use crate::piece::Piece;
use crate::square::Square;

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(diagram: &str) -> Result<Board, DiagramError> {
        let rows: Vec<&str> = diagram.lines().collect();
        if rows.len() != 8 {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut grid = [None; Square::COUNT];
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_str.chars() {
                if col >= 8 {
                    return Err(DiagramError::BadRowLength {
                        row,
                        length: col + 1,
                    });
                }
                if c != '.' {
                    let piece = Piece::from_diagram_char(c)
                        .ok_or(DiagramError::InvalidPieceChar { character: c })?;
                    grid[row * 8 + col] = Some(piece);
                }
                col += 1;
            }
            if col != 8 {
                return Err(DiagramError::BadRowLength { row, length: col });
            }
        }

        Ok(Board::from_grid(grid))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0u8..8 {
                let sq = Square::at(row, col).expect("row and col are in range");
                match self.piece_at(sq) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"")?;
        for row in 0u8..8 {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0u8..8 {
                let sq = Square::at(row, col).expect("row and col are in range");
                match self.piece_at(sq) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        write!(f, "\")")
    }
}
