//! Streak detection.
//!
//! Every line of the board in each of the four directions is walked once
//! with a sliding window of length `streak`: the cell entering the window is
//! added to a running count of matching marks and the cell leaving it is
//! subtracted. A window whose count reaches `streak` is a win. Each direction
//! costs O(size²) per symbol, independent of the streak length.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Coord, Symbol};

/// One of the four line directions a streak can run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// The next cell along this direction, or `None` when it leaves the board.
    #[must_use]
    pub fn step(self, coord: Coord, size: usize) -> Option<Coord> {
        let (row, column) = match self {
            Direction::Horizontal => (coord.row, coord.column + 1),
            Direction::Vertical => (coord.row + 1, coord.column),
            Direction::Diagonal => (coord.row + 1, coord.column + 1),
            Direction::AntiDiagonal => (coord.row + 1, coord.column.checked_sub(1)?),
        };
        (row < size && column < size).then_some(Coord::new(row, column))
    }

    /// First cell of every maximal line in this direction.
    pub fn line_starts(self, size: usize) -> impl Iterator<Item = Coord> {
        // Lines start on the top row and/or down one side column.
        let top = match self {
            Direction::Horizontal => 0,
            _ => size,
        };
        let side = match self {
            Direction::Horizontal => 0..size,
            Direction::Vertical => 0..0,
            Direction::Diagonal | Direction::AntiDiagonal => 1..size,
        };
        let column = match self {
            Direction::AntiDiagonal => size.saturating_sub(1),
            _ => 0,
        };
        (0..top)
            .map(|c| Coord::new(0, c))
            .chain(side.map(move |r| Coord::new(r, column)))
    }
}

/// Cells of a detected streak, in line order.
pub type LineCells = SmallVec<[Coord; 8]>;

/// A completed streak.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub symbol: Symbol,
    pub direction: Direction,
    pub cells: LineCells,
}

/// Find the first window of `streak` consecutive `symbol` marks.
///
/// Directions are searched in [`Direction::ALL`] order and lines in
/// row-major order of their first cell. `Empty` never forms a line.
#[must_use]
pub fn find_line(board: &Board, symbol: Symbol, streak: usize) -> Option<WinningLine> {
    if !symbol.is_player() || streak == 0 {
        return None;
    }

    Direction::ALL.iter().find_map(|&direction| {
        direction
            .line_starts(board.size())
            .find_map(|start| scan_line(board, symbol, streak, direction, start))
            .map(|window_start| WinningLine {
                symbol,
                direction,
                cells: window_cells(window_start, direction, streak, board.size()),
            })
    })
}

/// True if `symbol` holds `streak` consecutive cells anywhere.
#[must_use]
pub fn has_line(board: &Board, symbol: Symbol, streak: usize) -> bool {
    find_line(board, symbol, streak).is_some()
}

/// Slide a window along one line; return the first cell of a full window.
fn scan_line(
    board: &Board,
    symbol: Symbol,
    streak: usize,
    direction: Direction,
    start: Coord,
) -> Option<Coord> {
    let size = board.size();
    let cells = board.cells();
    let mask = |c: Coord| usize::from(cells[c.to_index(size)] == symbol);

    let mut sum = 0;
    let mut len = 0;
    let mut trailing = start;
    let mut current = Some(start);

    while let Some(cell) = current {
        sum += mask(cell);
        len += 1;
        if len > streak {
            sum -= mask(trailing);
            if let Some(next) = direction.step(trailing, size) {
                trailing = next;
            }
        }
        if len >= streak && sum == streak {
            return Some(trailing);
        }
        current = direction.step(cell, size);
    }

    None
}

fn window_cells(start: Coord, direction: Direction, streak: usize, size: usize) -> LineCells {
    std::iter::successors(Some(start), |&c| direction.step(c, size))
        .take(streak)
        .collect()
}
