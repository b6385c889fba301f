//! Terminal rendering of candidate paths overlaid on the board.

use std::collections::HashMap;

use draughts_core::{Board, Path, Square};

/// ANSI color per path index, cycling when there are more paths than colors.
pub const PATH_COLORS: [&str; 5] = ["\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m"];

/// Overlay glyph per path index, cycling in step with [`PATH_COLORS`].
pub const PATH_GLYPHS: [char; 5] = ['*', '+', 'x', '%', '#'];

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Render the board with every candidate path overlaid.
///
/// The shared origin square is marked `O`; each path's landing squares get
/// the glyph and color for that path's index. Where paths overlap, the
/// later path wins. With no paths, this is just the plain board grid.
pub fn render_paths(board: &Board, paths: &[Path]) -> String {
    let mut overlay: HashMap<Square, usize> = HashMap::new();
    for (index, path) in paths.iter().enumerate() {
        for &square in path.squares().iter().skip(1) {
            overlay.insert(square, index);
        }
    }
    let origin = paths.first().map(Path::origin);

    let mut out = String::from("   1 2 3 4 5 6 7 8\n");
    for row in 0u8..8 {
        out.push((b'A' + row) as char);
        out.push(' ');
        for col in 0u8..8 {
            let sq = Square::at(row, col).expect("row and col are in range");
            out.push(' ');
            if origin == Some(sq) {
                out.push('O');
            } else if let Some(&index) = overlay.get(&sq) {
                out.push_str(PATH_COLORS[index % PATH_COLORS.len()]);
                out.push(PATH_GLYPHS[index % PATH_GLYPHS.len()]);
                out.push_str(RESET);
            } else {
                match board.piece_at(sq) {
                    Some(piece) => out.push(piece.diagram_char()),
                    None => out.push('.'),
                }
            }
        }
        out.push('\n');
    }
    out
}
