//! Legal path generation: the step validator and the depth-first search.

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::path::Path;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};

/// Jump destinations, probed in fixed order. The emission order of the
/// result set follows this order, so it must not change: callers number
/// the paths for the user to pick from.
const JUMP_OFFSETS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Ordinary step destinations, probed in the same fixed order.
const STEP_OFFSETS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The move-class lock for one branch of the search.
///
/// A turn is either one ordinary step or a chain of one or more jumps,
/// never a mix. `None` means no step has been taken yet; the first jump
/// locks the branch to `Capture`, and a branch that found no jumps locks
/// to `Normal` after its single ordinary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveClass {
    None,
    Normal,
    Capture,
}

/// Enumerate every maximal legal path for the piece at `origin`.
///
/// Returns an empty vec if the square holds no piece.
pub(crate) fn generate_paths(board: &Board, origin: Square) -> Vec<Path> {
    let Some(piece) = board.piece_at(origin) else {
        return Vec::new();
    };

    let mut paths = Vec::new();
    dfs(board, origin, Vec::new(), &mut paths, MoveClass::None, piece);
    debug!(origin = %origin, count = paths.len(), "generated paths");
    paths
}

/// One node of the search: extend `path_so_far` from `current` in every
/// legal direction, emitting the accumulated path when no extension exists.
///
/// Each child branch receives its own owned copy of the path, so sibling
/// branches never observe each other's history. Captures are not applied
/// to the board during the search; a capture chain may therefore cross a
/// "captured" square's diagonal again, and only the no-repeat-edge rule in
/// [`is_valid_step`] keeps the recursion finite.
fn dfs(
    board: &Board,
    current: Square,
    mut path_so_far: Vec<Square>,
    paths: &mut Vec<Path>,
    mut class: MoveClass,
    piece: Piece,
) {
    path_so_far.push(current);

    let mut children: Vec<Square> = Vec::new();

    if matches!(class, MoveClass::None | MoveClass::Capture) {
        for (dr, dc) in JUMP_OFFSETS {
            let dest_row = current.row() as i8 + dr;
            let dest_col = current.col() as i8 + dc;
            if is_valid_step(board, current, dest_row, dest_col, piece, &path_so_far) {
                let dest = Square::at(dest_row as u8, dest_col as u8)
                    .expect("validated step stays on the board");
                children.push(dest);
                class = MoveClass::Capture;
            }
        }
    }

    if class == MoveClass::None {
        for (dr, dc) in STEP_OFFSETS {
            let dest_row = current.row() as i8 + dr;
            let dest_col = current.col() as i8 + dc;
            if is_valid_step(board, current, dest_row, dest_col, piece, &path_so_far) {
                let dest = Square::at(dest_row as u8, dest_col as u8)
                    .expect("validated step stays on the board");
                children.push(dest);
            }
        }
        class = MoveClass::Normal;
    }

    if children.is_empty() {
        if path_so_far.len() > 1 {
            paths.push(Path::new(path_so_far));
        }
        return;
    }

    for child in children {
        dfs(board, child, path_so_far.clone(), paths, class, piece);
    }
}

/// Decide whether the piece on `start` may step to `(dest_row, dest_col)`
/// as the next extension of `path_so_far`.
///
/// `path_so_far` already ends with `start`. Checks, in order, each a hard
/// rejection:
///
/// 1. The destination is on the board.
/// 2. The undirected edge (start, destination) does not already appear as
///    a consecutive pair anywhere in the path.
/// 3. The destination is empty, unless it is the path's origin square
///    (vacated only conceptually during the search).
/// 4. A non-king moves strictly forward: White to a greater row, Red to a
///    lesser row.
/// 5. A jump (row delta of 2) crosses a square holding an opposite-color
///    piece.
fn is_valid_step(
    board: &Board,
    start: Square,
    dest_row: i8,
    dest_col: i8,
    piece: Piece,
    path_so_far: &[Square],
) -> bool {
    let bound = BOARD_SIZE as i8;
    if !(0..bound).contains(&dest_row) || !(0..bound).contains(&dest_col) {
        return false;
    }
    let Some(dest) = Square::at(dest_row as u8, dest_col as u8) else {
        return false;
    };

    for window in path_so_far.windows(2) {
        if (window[0] == start && window[1] == dest) || (window[1] == start && window[0] == dest) {
            return false;
        }
    }

    if !board.is_empty_at(dest) && path_so_far.first() != Some(&dest) {
        return false;
    }

    if !piece.is_king() {
        let start_row = start.row() as i8;
        match piece.color() {
            Color::White if dest_row <= start_row => return false,
            Color::Red if dest_row >= start_row => return false,
            _ => {}
        }
    }

    if start.row().abs_diff(dest.row()) == 2 {
        let jumped = board.piece_at(start.midpoint(dest));
        if jumped.map(Piece::color) != Some(piece.color().flip()) {
            return false;
        }
    }

    true
}
