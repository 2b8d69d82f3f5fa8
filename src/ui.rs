#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::Board,
    common::{ColumnLabel, Location, TileView},
    grid::GridView,
};

fn glyph(view: TileView) -> char {
    match view {
        TileView::Sea => '.',
        TileView::Ship => 'S',
        TileView::Hit => 'X',
        TileView::Miss => 'o',
    }
}

fn render_with<F>(width: usize, height: usize, tile: F) -> String
where
    F: Fn(Location) -> Option<TileView>,
{
    // Columns past Z take two letters, so every cell widens to match.
    let cell = ColumnLabel(width.saturating_sub(1)).to_string().len();
    let margin = height.to_string().len().max(2);
    let mut out = String::new();
    let _ = write!(out, "{:margin$} ", "");
    for c in 0..width {
        let _ = write!(out, " {:>cell$}", ColumnLabel(c).to_string());
    }
    out.push('\n');
    for r in 0..height {
        let _ = write!(out, "{:>margin$} ", r + 1);
        for c in 0..width {
            let ch = tile(Location::new(r, c)).map_or(' ', glyph);
            let _ = write!(out, " {:>cell$}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render the opponent's sea as the attacker sees it.
pub fn render_enemy_view(grid: &dyn GridView) -> String {
    render_with(grid.width(), grid.height(), |at| grid.tile(at))
}

/// Render a board with its ships revealed.
pub fn render_own_board(board: &Board) -> String {
    render_with(board.width(), board.height(), |at| board.reveal(at))
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(own: &Board, enemy: &dyn GridView) {
    println!("Opponent board:");
    print!("{}", render_enemy_view(enemy));
    println!("\nYour board:");
    print!("{}", render_own_board(own));
}
