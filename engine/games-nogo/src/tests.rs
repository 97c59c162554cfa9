use super::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_initial_state() {
    let board = Board::new();
    assert_eq!(board.width(), 9);
    assert_eq!(board.height(), 9);
    assert_eq!(board.num_cells(), 81);
    assert_eq!(board.side_to_move(), Side::Black);
    assert_eq!(board.moves_played(), 0);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_invalid_sizes() {
    assert_eq!(
        Board::with_size(0, 3),
        Err(BoardError::InvalidSize {
            width: 0,
            height: 3
        })
    );
    assert!(Board::with_size(20, 9).is_err());
    assert!(Board::with_size(19, 19).is_ok());
}

#[test]
fn test_legal_moves_empty_board() {
    let board = Board::with_size(2, 2).unwrap();
    let legal = board.legal_moves();
    assert_eq!(legal.len(), 4);
    assert!(legal.iter().all(|place| place.side == Side::Black));
}

#[test]
fn test_make_move() {
    let mut board = Board::with_size(3, 3).unwrap();
    let outcome = board.apply(Place::new(4, Side::Black));

    assert_eq!(outcome, PlaceOutcome::Legal);
    assert_eq!(board.stone_at(4), Some(Side::Black));
    assert_eq!(board.side_to_move(), Side::White);
    assert_eq!(board.moves_played(), 1);
}

#[test]
fn test_occupied_cell_is_illegal() {
    let mut board = Board::with_size(3, 3).unwrap();
    board.apply(Place::new(4, Side::Black));

    let before = board.clone();
    assert_eq!(board.apply(Place::new(4, Side::White)), PlaceOutcome::Illegal);
    assert_eq!(board, before);
}

#[test]
fn test_wrong_side_is_illegal() {
    let mut board = Board::with_size(3, 3).unwrap();
    let before = board.clone();

    assert_eq!(board.apply(Place::new(0, Side::White)), PlaceOutcome::Illegal);
    assert_eq!(board, before);
}

#[test]
fn test_out_of_range_is_illegal() {
    let mut board = Board::with_size(2, 2).unwrap();
    assert_eq!(board.apply(Place::new(4, Side::Black)), PlaceOutcome::Illegal);
}

#[test]
fn test_suicide_is_illegal() {
    // Black at the single cell of a 1x1 board has no liberty
    let mut board = Board::with_size(1, 1).unwrap();
    assert_eq!(board.apply(Place::new(0, Side::Black)), PlaceOutcome::Illegal);
    assert!(!board.has_legal_move());
    assert_eq!(board.winner(), Some(Side::White));
}

#[test]
fn test_capture_is_illegal() {
    // X at 0 has a single liberty at 1; White filling it would capture
    let mut board = Board::from_layout("X...X", Side::White).unwrap();
    let before = board.clone();

    assert_eq!(board.apply(Place::new(1, Side::White)), PlaceOutcome::Illegal);
    assert_eq!(board.apply(Place::new(3, Side::White)), PlaceOutcome::Illegal);
    assert_eq!(board, before);

    assert_eq!(board.legal_moves(), vec![Place::new(2, Side::White)]);
}

#[test]
fn test_group_liberties_are_shared() {
    // White at 2 touches the black pair, which still breathes through 4 and 5
    let mut board = Board::from_layout("XX../..../..../....", Side::White).unwrap();
    assert!(board.apply(Place::new(2, Side::White)).is_legal());
    assert!(board.apply(Place::new(5, Side::Black)).is_legal());
}

#[test]
fn test_terminal_position() {
    // After X at 0 on a 2x1 strip, White's only cell would capture and be suicide
    let mut board = Board::with_size(2, 1).unwrap();
    assert!(board.apply(Place::new(0, Side::Black)).is_legal());

    assert!(board.legal_moves().is_empty());
    assert!(!board.has_legal_move());
    assert_eq!(board.winner(), Some(Side::Black));
}

#[test]
fn test_from_layout_errors() {
    assert_eq!(
        Board::from_layout("..\n...", Side::Black),
        Err(BoardError::RaggedRow {
            row: 1,
            expected: 2,
            actual: 3
        })
    );
    assert_eq!(
        Board::from_layout("..?", Side::Black),
        Err(BoardError::UnknownCell('?'))
    );
    assert!(matches!(
        Board::from_layout("", Side::Black),
        Err(BoardError::InvalidSize { .. })
    ));
}

#[test]
fn test_display() {
    let board = Board::from_layout("X./.O", Side::Black).unwrap();
    let text = board.to_string();
    assert!(text.contains("A B"));
    assert!(text.contains("1 X ."));
    assert!(text.contains("2 . O"));
    assert!(text.ends_with("black to move"));
}

#[test]
fn test_random_games_terminate() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..20 {
        let mut board = Board::with_size(5, 5).unwrap();
        let mut plies = 0;

        while let Some(place) = board.legal_moves().choose(&mut rng).copied() {
            assert!(board.apply(place).is_legal());
            plies += 1;
        }

        // Every legal placement adds exactly one stone and nothing is captured
        assert_eq!(board.moves_played(), plies);
        assert!(plies < board.num_cells());
        assert_eq!(board.winner(), Some(board.side_to_move().opponent()));
    }
}
