//! Integration tests for the game engine.

use mnk_env::core::{Action, Coord, Symbol};
use mnk_env::rules::{Direction, Game, GameResult};
use mnk_env::Error;

fn play_all(game: &mut Game, moves: &[(usize, usize, Symbol)]) -> GameResult {
    let mut result = GameResult::Undecided;
    for &(row, column, symbol) in moves {
        let action = Action::new(row, column, symbol);
        assert!(game.is_valid_move(&action), "illegal move {}", action);
        game.play(&action).unwrap();
        result = game.evaluate();
    }
    result
}

/// Full board with runs of at most two in every direction.
fn striped_board(size: usize) -> Vec<(usize, usize, Symbol)> {
    let mut cells = Vec::new();
    for row in 0..size {
        for column in 0..size {
            let symbol = if ((column + 2 * row) / 2) % 2 == 0 {
                Symbol::X
            } else {
                Symbol::O
            };
            cells.push((row, column, symbol));
        }
    }
    cells
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_construction_rejects_long_streak() {
    for (size, streak) in [(3, 4), (1, 2), (5, 6)] {
        let err = Game::new(size, streak).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}

#[test]
fn test_construction_starts_empty() {
    let game = Game::new(5, 4).unwrap();
    assert_eq!(game.board().empty_count(), 25);
    assert_eq!(game.result(), GameResult::Undecided);
    assert!(!game.is_terminal());
    assert_eq!(game.move_count(), 0);
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_scenario_top_row_win() {
    let mut game = Game::new(3, 3).unwrap();
    let result = play_all(
        &mut game,
        &[
            (0, 0, Symbol::X),
            (1, 1, Symbol::O),
            (0, 1, Symbol::X),
            (2, 2, Symbol::O),
        ],
    );
    // O's (1,1),(2,2) is only two long
    assert_eq!(result, GameResult::Undecided);

    let result = play_all(&mut game, &[(0, 2, Symbol::X)]);
    assert_eq!(result, GameResult::WonX);
    assert!(game.is_terminal());
    assert_eq!(game.board().empty_count(), 4);
}

#[test]
fn test_win_in_each_direction() {
    let cases: [(Direction, [(usize, usize); 4]); 4] = [
        (Direction::Horizontal, [(2, 1), (2, 2), (2, 3), (2, 4)]),
        (Direction::Vertical, [(0, 4), (1, 4), (2, 4), (3, 4)]),
        (Direction::Diagonal, [(1, 0), (2, 1), (3, 2), (4, 3)]),
        (Direction::AntiDiagonal, [(0, 3), (1, 2), (2, 1), (3, 0)]),
    ];

    for (direction, cells) in cases {
        let mut game = Game::new(5, 4).unwrap();
        for (i, &(row, column)) in cells.iter().enumerate() {
            let action = Action::new(row, column, Symbol::O);
            game.play(&action).unwrap();
            let expected = if i == 3 {
                GameResult::WonO
            } else {
                GameResult::Undecided
            };
            assert_eq!(game.evaluate(), expected, "{:?} after {} marks", direction, i + 1);
        }

        let line = game.winning_line().unwrap();
        assert_eq!(line.direction, direction);
        let expected: Vec<Coord> = cells.iter().map(|&c| c.into()).collect();
        assert_eq!(line.cells.to_vec(), expected);
    }
}

#[test]
fn test_broken_line_is_not_a_win() {
    let mut game = Game::new(5, 4).unwrap();
    let result = play_all(
        &mut game,
        &[
            (0, 0, Symbol::X),
            (0, 1, Symbol::X),
            (0, 2, Symbol::O),
            (0, 3, Symbol::X),
            (0, 4, Symbol::X),
        ],
    );
    assert_eq!(result, GameResult::Undecided);
}

#[test]
fn test_streak_one_any_first_move_wins() {
    for symbol in Symbol::PLAYERS {
        for index in 0..9 {
            let mut game = Game::new(3, 1).unwrap();
            let action = Action::from_index(index, 3, symbol);
            game.play(&action).unwrap();
            assert_eq!(game.evaluate(), GameResult::won_by(symbol));
        }
    }
}

#[test]
fn test_size_equal_to_streak_only_full_lines() {
    let mut game = Game::new(5, 5).unwrap();
    let result = play_all(
        &mut game,
        &[
            (0, 0, Symbol::X),
            (1, 1, Symbol::X),
            (2, 2, Symbol::X),
            (3, 3, Symbol::X),
        ],
    );
    assert_eq!(result, GameResult::Undecided);
    assert_eq!(play_all(&mut game, &[(4, 4, Symbol::X)]), GameResult::WonX);
}

// =============================================================================
// Draws and Terminal State
// =============================================================================

#[test]
fn test_full_board_without_streak_is_drawn() {
    for size in 3..=8 {
        for streak in 3..=size {
            let mut game = Game::new(size, streak).unwrap();
            let cells = striped_board(size);
            let (last, rest) = cells.split_last().unwrap();

            assert_eq!(play_all(&mut game, rest), GameResult::Undecided);
            assert_eq!(
                play_all(&mut game, std::slice::from_ref(last)),
                GameResult::Drawn,
                "size {} streak {}",
                size,
                streak
            );
        }
    }
}

#[test]
fn test_terminal_result_is_sticky() {
    let mut game = Game::new(3, 3).unwrap();
    play_all(
        &mut game,
        &[(0, 0, Symbol::O), (1, 0, Symbol::O), (2, 0, Symbol::O)],
    );
    assert_eq!(game.result(), GameResult::WonO);

    for _ in 0..3 {
        assert_eq!(game.evaluate(), GameResult::WonO);
    }
    let err = game.play(&Action::new(1, 1, Symbol::X)).unwrap_err();
    assert!(matches!(err, Error::GameOver { .. }));
    assert_eq!(game.move_count(), 3);
}

#[test]
fn test_x_reported_when_both_hold_lines() {
    let mut game = Game::new(3, 3).unwrap();
    for column in 0..3 {
        game.play(&Action::new(0, column, Symbol::O)).unwrap();
        game.play(&Action::new(2, column, Symbol::X)).unwrap();
    }
    assert_eq!(game.evaluate(), GameResult::WonX);
}

// =============================================================================
// Move Generation
// =============================================================================

#[test]
fn test_valid_moves_shrink_as_board_fills() {
    let mut game = Game::new(4, 4).unwrap();
    assert_eq!(game.valid_moves().count(), 16);

    game.play(&Action::new(0, 0, Symbol::X)).unwrap();
    game.play(&Action::new(3, 3, Symbol::O)).unwrap();

    let moves: Vec<_> = game.valid_moves().collect();
    assert_eq!(moves.len(), 14);
    assert!(!moves.contains(&Coord::new(0, 0)));
    assert!(!moves.contains(&Coord::new(3, 3)));
    assert!(moves.windows(2).all(|w| w[0] < w[1]), "row-major order");
}

#[test]
fn test_played_cell_becomes_invalid() {
    let mut game = Game::new(3, 3).unwrap();
    let action = Action::new(2, 1, Symbol::X);
    assert!(game.is_valid_move(&action));
    game.play(&action).unwrap();

    assert!(!game.is_valid_move(&action));
    assert!(!game.is_valid_move(&Action::new(2, 1, Symbol::O)));
}
