//! End-to-end game scenario exercising generation, execution, capture
//! bookkeeping, and promotion across several turns.

use draughts_core::{Board, Color, Path, Piece, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::at(row, col).unwrap()
}

fn path(squares: &[(u8, u8)]) -> Path {
    Path::new(squares.iter().map(|&(r, c)| sq(r, c)).collect())
}

fn color_at(board: &Board, row: u8, col: u8) -> Option<Color> {
    board.piece_at(sq(row, col)).map(Piece::color)
}

#[test]
fn three_turns_each() {
    let mut board = Board::new();

    board.execute_path(&path(&[(5, 2), (4, 3)]));
    board.execute_path(&path(&[(2, 5), (3, 4)]));

    // The advanced red man must take the only available capture.
    let paths = board.generate_paths("E4");
    assert_eq!(paths, vec![path(&[(4, 3), (2, 5)])]);

    assert_eq!(color_at(&board, 3, 4), Some(Color::White));
    board.execute_path(&path(&[(4, 3), (2, 5)]));
    assert_eq!(color_at(&board, 3, 4), None);

    // White recaptures.
    assert_eq!(color_at(&board, 2, 5), Some(Color::Red));
    board.execute_path(&path(&[(1, 4), (3, 6)]));
    assert_eq!(color_at(&board, 2, 5), None);

    board.execute_path(&path(&[(5, 4), (4, 5)]));
    let paths = board.generate_paths("D7");
    assert_eq!(paths, vec![path(&[(3, 6), (5, 4)])]);

    assert_eq!(color_at(&board, 4, 5), Some(Color::Red));
    board.execute_path(&path(&[(3, 6), (5, 4)]));
    assert_eq!(color_at(&board, 4, 5), None);

    let paths = board.generate_paths("G4");
    assert_eq!(paths, vec![path(&[(6, 3), (4, 5)])]);

    assert_eq!(color_at(&board, 5, 4), Some(Color::White));
    board.execute_path(&path(&[(6, 3), (4, 5)]));
    assert_eq!(color_at(&board, 5, 4), None);

    let paths = board.generate_paths("C8");
    assert_eq!(paths, vec![path(&[(2, 7), (3, 6)])]);
    board.execute_path(&path(&[(2, 7), (3, 6)]));

    board.execute_path(&path(&[(2, 1), (3, 0)]));
    board.execute_path(&path(&[(7, 4), (6, 3)]));
    board.execute_path(&path(&[(0, 5), (1, 4)]));

    // A double capture has opened up for the red man at E6.
    let paths = board.generate_paths("E6");
    assert_eq!(paths, vec![path(&[(4, 5), (2, 7), (0, 5)])]);

    assert_eq!(color_at(&board, 3, 6), Some(Color::White));
    assert_eq!(color_at(&board, 1, 6), Some(Color::White));
    board.execute_path(&path(&[(4, 5), (2, 7), (0, 5)]));
    assert_eq!(color_at(&board, 3, 6), None);
    assert_eq!(color_at(&board, 1, 6), None);

    // The red man landed on row 0 and is now a king; its only move is the
    // ordinary step into the square its chain just emptied.
    assert_eq!(
        board.piece_at(sq(0, 5)),
        Some(Piece::king(Color::Red))
    );
    let paths = board.generate_paths("A6");
    assert_eq!(paths, vec![path(&[(0, 5), (1, 6)])]);
}

#[test]
fn piece_counts_track_captures() {
    let mut board = Board::new();
    assert_eq!(board.count_pieces(Color::White), 12);
    assert_eq!(board.count_pieces(Color::Red), 12);

    board.execute_path(&path(&[(5, 2), (4, 3)]));
    board.execute_path(&path(&[(2, 5), (3, 4)]));
    board.execute_path(&path(&[(4, 3), (2, 5)]));

    assert_eq!(board.count_pieces(Color::White), 11);
    assert_eq!(board.count_pieces(Color::Red), 12);
}
