//! ASCII views of a grid.
//!
//! Rows are drawn highest first so row 0 sits at the bottom, next to the
//! column legend. Colour goes through `colored` and follows its global
//! override, so callers can switch it off with
//! `colored::control::set_override(false)`.

use std::collections::HashSet;
use std::fmt::Write;

use colored::Colorize;

use crate::grid::{Grid, Position, Tile, TileKind};

const COST_CELL_WIDTH: usize = 6;

/// The board with obstacles, endpoints and, when given, the path (`@`).
pub fn render_board(grid: &Grid, path: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    // two-digit columns need a wider cell to keep the legend apart
    let cell_width = if grid.cols() > 10 { 3 } else { 2 };
    let pad = cell_width - 1;

    render(grid, cell_width, |tile| {
        let cell = if on_path.contains(&tile.position) {
            format!("{:>pad$}", '@').yellow().bold()
        } else {
            let symbol = format!("{:>pad$}", tile.kind.symbol());
            match tile.kind {
                TileKind::Empty => symbol.normal(),
                TileKind::Obstacle => symbol.green(),
                TileKind::Start | TileKind::Goal => symbol.cyan().bold(),
            }
        };
        format!("|{cell}")
    })
}

/// The cost of every tile, `inf` where nothing has been relaxed.
pub fn render_costs(grid: &Grid) -> String {
    render(grid, COST_CELL_WIDTH, |tile| {
        let cost = format!("{:5.1}", tile.cost);
        if tile.visited {
            format!("|{}", cost.dimmed())
        } else {
            format!("|{cost}")
        }
    })
}

/// `[r, c]->[r, c]->...`
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join("->")
}

fn render(grid: &Grid, cell_width: usize, mut cell: impl FnMut(&Tile) -> String) -> String {
    let rule = format!("   {}", "-".repeat(cell_width * grid.cols() + 1));
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');

    for row in (0..grid.rows()).rev() {
        let _ = write!(out, "{row:>2} ");
        for tile in grid.row(row) {
            out.push_str(&cell(tile));
        }
        out.push_str("|\n");
    }

    out.push_str(&rule);
    out.push('\n');

    out.push_str("   ");
    for col in 0..grid.cols() {
        let _ = write!(out, "{col:>cell_width$}");
    }
    out.push('\n');

    out
}
