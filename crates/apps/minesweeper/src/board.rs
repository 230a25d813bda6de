//! Minesweeper board snapshots.
//!
//! Every operation returns a new [`Board`]; the status is derived from cell state, so a no-op
//! move always reports the status the board already had.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mines among the up-to-8 neighbors. Zero for mine cells.
    pub adjacent_mines: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Square grid of cells, stored row-major and addressed as `(x, y)` = (column, row).
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a `size × size` board with `mine_count` mines on distinct, uniformly chosen cells.
    ///
    /// `mine_count` is clamped to the number of cells.
    pub fn new<R: Rng + ?Sized>(size: usize, mine_count: usize, rng: &mut R) -> Self {
        let total = size * size;
        let mine_count = mine_count.min(total);
        let mut order: Vec<usize> = (0..total).collect();
        for i in 0..mine_count {
            let j = rng.random_range(i..total);
            order.swap(i, j);
        }
        Self::with_mine_indices(size, &order[..mine_count])
    }

    /// Builds a board with mines at exactly the given `(x, y)` cells. Out-of-range cells are
    /// skipped.
    pub fn from_mines(size: usize, mines: &[(usize, usize)]) -> Self {
        let indices: Vec<usize> = mines
            .iter()
            .filter(|(x, y)| *x < size && *y < size)
            .map(|(x, y)| y * size + x)
            .collect();
        Self::with_mine_indices(size, &indices)
    }

    fn with_mine_indices(size: usize, mines: &[usize]) -> Self {
        let mut board = Self {
            size,
            cells: vec![Cell::default(); size * size],
        };
        for &index in mines {
            board.cells[index].has_mine = true;
        }
        for y in 0..size {
            for x in 0..size {
                if board.cells[y * size + x].has_mine {
                    continue;
                }
                let adjacent = board
                    .neighbors(x, y)
                    .filter(|&(nx, ny)| board.cells[ny * size + nx].has_mine)
                    .count();
                board.cells[y * size + x].adjacent_mines = adjacent as u8;
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|index| &self.cells[index])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_mine).count()
    }

    pub fn flagged_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.flagged).count()
    }

    /// Mines minus flags. Goes negative when the player over-flags.
    pub fn mines_remaining(&self) -> i64 {
        self.mine_count() as i64 - self.flagged_count() as i64
    }

    pub fn status(&self) -> GameStatus {
        if self.cells.iter().any(|cell| cell.has_mine && cell.revealed) {
            GameStatus::Lost
        } else if self
            .cells
            .iter()
            .all(|cell| cell.has_mine || cell.revealed)
        {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Reveals `(x, y)`, flooding outward from zero-adjacency cells.
    ///
    /// Revealed, flagged, and out-of-range cells are no-ops. A mine ends the game without
    /// flooding.
    pub fn reveal(&self, x: usize, y: usize) -> (Board, GameStatus) {
        let mut next = self.clone();
        let Some(start) = self.index(x, y) else {
            return (next, self.status());
        };
        let target = self.cells[start];
        if target.revealed || target.flagged {
            return (next, self.status());
        }
        if target.has_mine {
            next.cells[start].revealed = true;
            return (next, GameStatus::Lost);
        }

        let mut queue = VecDeque::from([(x, y)]);
        while let Some((cx, cy)) = queue.pop_front() {
            let index = cy * self.size + cx;
            let cell = &mut next.cells[index];
            if cell.revealed || cell.flagged || cell.has_mine {
                continue;
            }
            cell.revealed = true;
            if cell.adjacent_mines > 0 {
                continue;
            }
            for (nx, ny) in self.neighbors(cx, cy) {
                let neighbor = next.cells[ny * self.size + nx];
                if !neighbor.revealed && !neighbor.flagged {
                    queue.push_back((nx, ny));
                }
            }
        }

        let status = next.status();
        (next, status)
    }

    /// Toggles the flag on an unrevealed cell. Revealed and out-of-range cells are unchanged.
    pub fn toggle_flag(&self, x: usize, y: usize) -> Board {
        let mut next = self.clone();
        if let Some(index) = self.index(x, y) {
            let cell = &mut next.cells[index];
            if !cell.revealed {
                cell.flagged = !cell.flagged;
            }
        }
        next
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }

    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        let xs = x.saturating_sub(1)..=(x + 1).min(size.saturating_sub(1));
        xs.flat_map(move |nx| {
            let ys = y.saturating_sub(1)..=(y + 1).min(size.saturating_sub(1));
            ys.map(move |ny| (nx, ny))
        })
        .filter(move |&(nx, ny)| (nx, ny) != (x, y))
    }
}
