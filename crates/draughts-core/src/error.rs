//! Error types for label and diagram parsing.
//!
//! These cover the parsing boundaries only. The untrusted-input predicates
//! (`Board::is_own_piece_at`, `Board::generate_paths`) report bad input as
//! `false` or an empty result rather than an error, so interactive callers
//! can simply re-prompt.

/// A square label failed to parse (not `[A-H][1-8]`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square label: \"{label}\"")]
pub struct LabelError {
    /// The string that failed to parse.
    pub label: String,
}

/// Errors from parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The diagram does not have exactly 8 rows.
    #[error("expected 8 rows in diagram, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not describe exactly 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the diagram.
    #[error("invalid diagram character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
