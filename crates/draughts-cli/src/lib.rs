//! Interactive terminal front end for draughts.

pub mod error;
pub mod game;
pub mod render;

pub use error::CliError;
pub use game::Game;
