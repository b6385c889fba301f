//! The interactive turn loop.

use std::io::{BufRead, Write};

use tracing::info;

use draughts_core::{Board, Color};

use crate::error::CliError;
use crate::render::{PATH_COLORS, RESET, render_paths};

/// One interactive game: a board, the side to move, and the streams it
/// talks through. Generic over the streams so tests can script a session.
pub struct Game<R, W> {
    board: Board,
    turn: Color,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Create a game from the starting position. Red moves first.
    pub fn new(input: R, output: W) -> Game<R, W> {
        Game::with_board(Board::new(), Color::Red, input, output)
    }

    /// Create a game from an arbitrary position and side to move.
    pub fn with_board(board: Board, turn: Color, input: R, output: W) -> Game<R, W> {
        Game {
            board,
            turn,
            input,
            output,
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Play turns until one side has no pieces left.
    pub fn run(&mut self) -> Result<(), CliError> {
        while self.in_progress() {
            self.process_turn()?;
        }
        Ok(())
    }

    fn in_progress(&self) -> bool {
        self.board.count_pieces(Color::Red) != 0 && self.board.count_pieces(Color::White) != 0
    }

    fn process_turn(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "{}", self.board.pretty())?;

        // Re-prompt until the player names one of their own pieces that has
        // somewhere to go.
        let paths = loop {
            write!(
                self.output,
                "Player {}, what piece do you want to move (example: F3): ",
                self.turn
            )?;
            self.output.flush()?;
            let label = self.read_line()?.trim().to_ascii_uppercase();
            if !self.board.is_own_piece_at(self.turn, &label) {
                continue;
            }
            let paths = self.board.generate_paths(&label);
            if !paths.is_empty() {
                break paths;
            }
        };

        writeln!(self.output, "Here are the paths you can move through:")?;
        for (index, path) in paths.iter().enumerate() {
            let color = PATH_COLORS[index % PATH_COLORS.len()];
            writeln!(self.output, "{color}  {index}: {path}{RESET}")?;
        }
        writeln!(self.output, "===========================")?;
        write!(self.output, "{}", render_paths(&self.board, &paths))?;

        let chosen = loop {
            write!(
                self.output,
                "What path do you want to move through (example: 0): "
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            if let Some(index) = parse_path_choice(line.trim(), paths.len()) {
                break index;
            }
        };

        let path = &paths[chosen];
        info!(turn = %self.turn, path = %path, "turn played");
        self.board.execute_path(path);
        self.turn = self.turn.flip();
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line)
    }
}

/// Parse a path index entered by the player. Returns `None` unless the
/// input is a number in `[0, count)`.
pub fn parse_path_choice(input: &str, count: usize) -> Option<usize> {
    let index: usize = input.parse().ok()?;
    (index < count).then_some(index)
}
