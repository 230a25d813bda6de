//! Minesweeper desktop app: a pure board engine plus its window screen.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[allow(missing_docs)]
pub mod board;

use leptos::*;
use platform_host::unix_time_ms_now;
use rand::{rngs::SmallRng, SeedableRng};

pub use board::{Board, Cell, GameStatus};

/// Grid edge length of a new game.
pub const BOARD_SIZE: usize = 8;
/// Mines placed in a new game.
pub const MINE_COUNT: usize = 10;

fn status_face(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => ":)",
        GameStatus::Won => "B)",
        GameStatus::Lost => "X(",
    }
}

fn cell_text(cell: &Cell) -> String {
    match (cell.revealed, cell.flagged, cell.has_mine) {
        (false, true, _) => "F".to_string(),
        (false, false, _) => String::new(),
        (true, _, true) => "*".to_string(),
        (true, _, false) if cell.adjacent_mines == 0 => String::new(),
        (true, _, false) => cell.adjacent_mines.to_string(),
    }
}

#[component]
/// Minesweeper window contents.
///
/// Left click reveals, right click toggles a flag. Input is ignored once the game is over.
pub fn MinesweeperApp() -> impl IntoView {
    let rng = store_value(SmallRng::seed_from_u64(unix_time_ms_now()));
    let board = create_rw_signal(
        rng.try_update_value(|rng| Board::new(BOARD_SIZE, MINE_COUNT, rng))
            .unwrap_or_else(|| Board::from_mines(BOARD_SIZE, &[])),
    );
    let status = create_memo(move |_| board.with(Board::status));

    let new_game = move |_| {
        rng.update_value(|rng| board.set(Board::new(BOARD_SIZE, MINE_COUNT, rng)));
    };
    let reveal = move |x: usize, y: usize| {
        if status.get_untracked().is_over() {
            return;
        }
        let (next, _) = board.with_untracked(|board| board.reveal(x, y));
        board.set(next);
    };
    let flag = move |x: usize, y: usize| {
        if status.get_untracked().is_over() {
            return;
        }
        let next = board.with_untracked(|board| board.toggle_flag(x, y));
        board.set(next);
    };

    view! {
        <div class="app-panel minesweeper">
            <div class="minesweeper-header">
                <span class="minesweeper-counter" aria-label="Mines remaining">
                    {move || board.with(Board::mines_remaining)}
                </span>
                <button
                    type="button"
                    class="menu-button minesweeper-reset"
                    aria-label="New Game"
                    on:click=new_game
                >
                    {move || status_face(status.get())}
                </button>
                <span class="minesweeper-status" role="status">
                    {move || match status.get() {
                        GameStatus::Playing => "",
                        GameStatus::Won => "You win!",
                        GameStatus::Lost => "Boom! Game over.",
                    }}
                </span>
            </div>
            <div
                class="minesweeper-grid"
                role="grid"
                style=format!("grid-template-columns: repeat({BOARD_SIZE}, 1fr);")
            >
                {move || {
                    board
                        .with(|board| {
                            board
                                .rows()
                                .enumerate()
                                .flat_map(|(y, row)| {
                                    row.iter().enumerate().map(move |(x, cell)| (x, y, *cell))
                                })
                                .collect::<Vec<_>>()
                        })
                        .into_iter()
                        .map(|(x, y, cell)| {
                            view! {
                                <button
                                    type="button"
                                    class="mine-cell"
                                    class:revealed=cell.revealed
                                    class:flagged=cell.flagged
                                    role="gridcell"
                                    data-adjacent=cell.adjacent_mines
                                    on:click=move |_| reveal(x, y)
                                    on:contextmenu=move |ev| {
                                        ev.prevent_default();
                                        flag(x, y);
                                    }
                                >
                                    {cell_text(&cell)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cells_render_flags_mines_and_counts() {
        let hidden = Cell::default();
        assert_eq!(cell_text(&hidden), "");
        assert_eq!(
            cell_text(&Cell {
                flagged: true,
                ..hidden
            }),
            "F"
        );
        assert_eq!(
            cell_text(&Cell {
                revealed: true,
                has_mine: true,
                ..hidden
            }),
            "*"
        );
        assert_eq!(
            cell_text(&Cell {
                revealed: true,
                adjacent_mines: 3,
                ..hidden
            }),
            "3"
        );
    }

    #[test]
    fn faces_follow_the_game_status() {
        assert_eq!(status_face(GameStatus::Playing), ":)");
        assert_eq!(status_face(GameStatus::Lost), "X(");
    }
}
