//! Core draughts types: board representation, path generation, and game rules.

mod board;
mod color;
mod diagram;
mod error;
mod movegen;
mod path;
mod piece;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{DiagramError, LabelError};
pub use path::Path;
pub use piece::Piece;
pub use square::Square;
