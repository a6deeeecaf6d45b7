//! Grid and lattice layout constants for glyph tracing.
//!
//! A glyph bitmap is a 6×10 cell grid. Only the leftmost 5 columns and the
//! top 9 rows carry ink; column 5 and row 9 are reserved margin so that
//! adjacent characters keep their spacing.
//!
//! ```text
//!   column:  0   1   2   3   4   5
//!          ┌───┬───┬───┬───┬───┬╌╌╌┐
//!   row 0  │   │   │ # │   │   │   │   bitmap rows run top-down
//!   row 1  │   │ # │   │ # │   │   │
//!    ...   │           ...        ╎
//!   row 8  │ # │   │   │   │ # │   │
//!   row 9  ├╌╌╌┴╌╌╌┴╌╌╌┴╌╌╌┴╌╌╌┴╌╌╌┤   margin row, always clear
//!          └╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┘
//! ```
//!
//! Outline vertices live on a finer integer lattice where every cell spans a
//! 4×4 square: cell `(cx, cy)` owns `x ∈ [4cx, 4cx+4]`, and the lattice
//! y-axis points up, so bitmap row `GRID_HEIGHT - 1` sits at lattice `y = 0`.
//! The 4× subdivision is what lets one polygon per cell encode both the
//! plain pixel (rasterised at 10 px) and the rounded pixel (at 20 px).

/// Cells per row, including the right margin column.
pub const GRID_WIDTH: usize = 6;

/// Cells per column, including the bottom margin row.
pub const GRID_HEIGHT: usize = 10;

/// Columns that may carry ink (0..=4).
pub const ACTIVE_COLUMNS: usize = 5;

/// Rows that may carry ink (0..=8).
pub const ACTIVE_ROWS: usize = 9;

/// Lattice units per cell edge.
pub const CELL: i32 = 4;

/// Lattice extent along x (`4 · GRID_WIDTH`).
pub const LATTICE_WIDTH: i32 = GRID_WIDTH as i32 * CELL;

/// Lattice extent along y (`4 · GRID_HEIGHT`).
pub const LATTICE_HEIGHT: i32 = GRID_HEIGHT as i32 * CELL;

/// Point arena capacity, sized for the worst-case glyph.
///
/// An empty cell surrounded by the right diagonal neighbours emits up to
/// four corner triangles of up to five points each, so 20 points per cell
/// bounds any bitmap.
pub const POOL_CAPACITY: usize = GRID_WIDTH * GRID_HEIGHT * 20;

/// Flat index of cell `(x, y)` in a row-major `GRID_WIDTH × GRID_HEIGHT`
/// array.
#[inline(always)]
pub const fn cell_index(x: usize, y: usize) -> usize {
  y * GRID_WIDTH + x
}

/// Lattice origin (bottom-left corner) of the cell at bitmap column `x`,
/// bitmap row `y`.
///
/// Applies the y-flip from top-down bitmap rows to the y-up lattice.
#[inline(always)]
pub const fn cell_origin(x: usize, y: usize) -> (i32, i32) {
  (x as i32 * CELL, (GRID_HEIGHT - 1 - y) as i32 * CELL)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
