//! Behavioural properties of the rules, evaluator and search, checked
//! through the public API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gomoku::board::TOTAL_CELLS;
use gomoku::eval::{evaluate_board, Direction, WIN_SCORE};
use gomoku::rules::has_five_in_row;
use gomoku::search::{generate_candidates, Searcher};
use gomoku::{
    apply_move, check_win, find_best_move, is_board_full, Board, Pos, SearchConfig, Stone,
    BOARD_SIZE,
};

/// Random midgame: `stones` alternating moves in the middle of the board,
/// with no five already on it.
fn random_midgame(rng: &mut StdRng, stones: usize) -> Board {
    loop {
        let mut board = Board::new();
        let mut side = Stone::Black;
        while board.history().len() < stones {
            let pos = Pos::new(rng.gen_range(4..11), rng.gen_range(4..11));
            if apply_move(&mut board, pos, side).is_ok() {
                side = side.opponent();
            }
        }
        if !has_five_in_row(&board, Stone::Black) && !has_five_in_row(&board, Stone::White) {
            return board;
        }
    }
}

fn side_to_move(board: &Board) -> Stone {
    if board.history().len() % 2 == 0 {
        Stone::Black
    } else {
        Stone::White
    }
}

#[test]
fn test_every_stone_of_a_five_wins() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let dir = Direction::ALL[rng.gen_range(0..4)];
        let (dr, dc) = dir.delta();
        let start = Pos::new(rng.gen_range(4..11), rng.gen_range(4..11));
        let line: Vec<Pos> = (0..5).filter_map(|i| start.step(dr, dc, i)).collect();
        if line.len() < 5 {
            continue;
        }

        let mut board = Board::new();
        for &pos in &line {
            board.place(pos, Stone::White).unwrap();
        }
        for &pos in &line {
            assert!(check_win(&board, pos, Stone::White), "{:?} {:?}", dir, pos);
            assert!(!check_win(&board, pos, Stone::Black));
        }
    }
}

#[test]
fn test_random_boards_without_five_never_win() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..30 {
        let board = random_midgame(&mut rng, 12);
        for record in board.history() {
            assert!(!check_win(&board, record.pos, record.stone));
        }
    }
}

#[test]
fn test_place_remove_reversible() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut board = random_midgame(&mut rng, 10);
    let before = board.clone();

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) {
            board.place(pos, Stone::Black).unwrap();
            board.remove(pos);
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_evaluation_swap_symmetry() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let board = random_midgame(&mut rng, 14);
        let swapped = board.swapped();
        assert_eq!(
            evaluate_board(&board, Stone::White),
            -evaluate_board(&swapped, Stone::White)
        );
        assert_eq!(
            evaluate_board(&board, Stone::Black),
            -evaluate_board(&board, Stone::White)
        );
    }
}

#[test]
fn test_opening_is_center_at_every_depth() {
    let center = Pos::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8);
    for depth in 1..=4 {
        let mut board = Board::new();
        assert_eq!(find_best_move(&mut board, Stone::Black, depth), Ok(Some(center)));
        assert!(board.is_board_empty());
    }
}

#[test]
fn test_pruning_matches_plain_minimax() {
    let mut rng = StdRng::seed_from_u64(2024);
    for round in 0..12 {
        let depth = if round < 9 { 2 } else { 3 };
        let mut board = random_midgame(&mut rng, 8);
        let before = board.clone();
        let side = side_to_move(&board);

        let mut pruned = Searcher::new(SearchConfig::with_depth(depth));
        let mut plain = Searcher::new(SearchConfig::with_depth(depth).without_pruning());
        let a = pruned.search(&mut board, side).unwrap();
        let b = plain.search(&mut board, side).unwrap();

        assert_eq!(a.best_move, b.best_move, "round {}", round);
        assert_eq!(a.score, b.score, "round {}", round);
        assert!(a.nodes <= b.nodes);
        assert_eq!(board, before);
    }
}

#[test]
fn test_forced_win_found() {
    // Black four on column 3 rows 5-8, closed at row 4
    let mut board = Board::new();
    let moves = [(5, 3), (4, 3), (6, 3), (9, 10), (7, 3), (10, 11), (8, 3)];
    let mut side = Stone::Black;
    for (r, c) in moves {
        apply_move(&mut board, Pos::new(r, c), side).unwrap();
        side = side.opponent();
    }

    for depth in 1..=3 {
        let mut searcher = Searcher::new(SearchConfig::with_depth(depth));
        let result = searcher.search(&mut board, Stone::Black).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(9, 3)), "depth {}", depth);
        assert_eq!(result.score, WIN_SCORE);
    }

    // White to move has to block the same cell
    assert_eq!(find_best_move(&mut board, Stone::White, 2), Ok(Some(Pos::new(9, 3))));

    apply_move(&mut board, Pos::new(9, 3), Stone::Black).unwrap();
    assert!(check_win(&board, Pos::new(9, 3), Stone::Black));
}

#[test]
fn test_candidate_cap_respected() {
    let mut rng = StdRng::seed_from_u64(99);
    let config = SearchConfig::default();
    for _ in 0..20 {
        let board = random_midgame(&mut rng, 10);
        let moves = generate_candidates(&board, Stone::White, &config);
        assert!(!moves.is_empty());
        assert!(moves.len() <= config.candidate_limit);
        assert!(moves.iter().all(|&m| board.is_empty(m)));
    }
}

#[test]
fn test_full_board_has_no_move() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place(Pos::from_index(idx), stone).unwrap();
    }
    assert!(is_board_full(&board));
    assert_eq!(find_best_move(&mut board, Stone::White, 2), Ok(None));
}
