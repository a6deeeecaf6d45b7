//! Per-cell corner classification.
//!
//! For every cell of the grid this pass decides which of its four unit
//! corners are filled in the vector output. The rules are a geometric
//! reading of the SAA5050 character-rounding heuristic: wherever the
//! hardware would add sub-pixels to a 2×2 diagonal clump, a filled cell
//! gives up two opposite corners and the empty cell across the diagonal
//! gains one.
//!
//! ```text
//!   bitmap        corners                outline
//!
//!   . #           cell (1,0): bl,tr cut   . ◢█
//!   # .           cell (0,1): bl,tr cut   █◤ .
//! ```
//!
//! # Filled cells
//!
//! Start from all four corners filled, then trim:
//!
//! - anti-diagonal trim clears `tr` and `bl` when a `/`-clump touches the
//!   cell: `(left, above) clear with above-left set`, or
//!   `(right, below) clear with below-right set`;
//! - main-diagonal trim clears `tl` and `br` for the mirrored `\`-clump.
//!
//! Afterwards a gap-avoidance pass forces a corner back on whenever any of
//! the three cells meeting at that corner is filled. A diagonal stem
//! running into an orthogonal one must keep its full corner there or the
//! join shows a notch; the override therefore runs strictly after both
//! trims and may undo them entirely.
//!
//! # Empty cells
//!
//! Start clear. A corner is set only where the two edge-adjacent
//! neighbours around it are filled and the diagonal neighbour between them
//! is not: that is exactly where the rounding rule pushes a triangle of
//! ink into the empty cell.

use crate::bitmap::{GlyphBitmap, JoinFlags};
use crate::constants::{cell_index, GRID_HEIGHT, GRID_WIDTH};

/// Which unit corners of one cell are filled in the vector output.
///
/// `tl`/`tr`/`bl`/`br` are in bitmap orientation (top = towards row 0);
/// the y-flip to the lattice maps them onto the same corners of the output
/// cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCorners {
  pub tl: bool,
  pub tr: bool,
  pub bl: bool,
  pub br: bool,
}

impl CellCorners {
  pub const EMPTY: Self = Self {
    tl: false,
    tr: false,
    bl: false,
    br: false,
  };

  pub const FULL: Self = Self {
    tl: true,
    tr: true,
    bl: true,
    br: true,
  };
}

/// Corner records for every cell of one glyph.
pub struct CornerGrid {
  cells: [CellCorners; GRID_WIDTH * GRID_HEIGHT],
}

impl CornerGrid {
  /// Classify every cell of `bitmap`.
  pub fn classify(bitmap: &GlyphBitmap, flags: JoinFlags) -> Self {
    let mut cells = [CellCorners::EMPTY; GRID_WIDTH * GRID_HEIGHT];

    for y in 0..GRID_HEIGHT as i32 {
      for x in 0..GRID_WIDTH as i32 {
        let pix = |dx: i32, dy: i32| bitmap.pixel(flags, x + dx, y + dy);
        cells[cell_index(x as usize, y as usize)] = if pix(0, 0) {
          classify_filled(&pix)
        } else {
          classify_empty(&pix)
        };
      }
    }

    Self { cells }
  }

  #[inline]
  pub fn get(&self, x: usize, y: usize) -> CellCorners {
    self.cells[cell_index(x, y)]
  }
}

/// Corner record for a filled cell, given its neighbourhood.
///
/// `pix(dx, dy)` reads the bitmap relative to the cell, `dy` positive
/// towards lower rows.
fn classify_filled(pix: &impl Fn(i32, i32) -> bool) -> CellCorners {
  let mut c = CellCorners::FULL;

  // Anti-diagonal trim: a `/` clump through this cell.
  if (!pix(-1, 0) && !pix(0, -1) && pix(-1, -1)) || (!pix(1, 0) && !pix(0, 1) && pix(1, 1)) {
    c.tr = false;
    c.bl = false;
  }
  // Main-diagonal trim: the mirrored `\` clump.
  if (!pix(1, 0) && !pix(0, -1) && pix(1, -1)) || (!pix(-1, 0) && !pix(0, 1) && pix(-1, 1)) {
    c.tl = false;
    c.br = false;
  }

  // Gap avoidance: never cut a corner shared with more ink. Must run
  // after the trims; reordering chips joints between diagonal and
  // orthogonal stems.
  if pix(-1, 0) || pix(-1, -1) || pix(0, -1) {
    c.tl = true;
  }
  if pix(1, 0) || pix(1, -1) || pix(0, -1) {
    c.tr = true;
  }
  if pix(-1, 0) || pix(-1, 1) || pix(0, 1) {
    c.bl = true;
  }
  if pix(1, 0) || pix(1, 1) || pix(0, 1) {
    c.br = true;
  }

  c
}

/// Corner record for an empty cell: one corner per diagonal clump whose
/// rounding spills into this cell.
fn classify_empty(pix: &impl Fn(i32, i32) -> bool) -> CellCorners {
  let mut c = CellCorners::EMPTY;

  if pix(-1, 0) && pix(0, -1) && !pix(-1, -1) {
    c.tl = true;
  }
  if pix(1, 0) && pix(0, -1) && !pix(1, -1) {
    c.tr = true;
  }
  if pix(-1, 0) && pix(0, 1) && !pix(-1, 1) {
    c.bl = true;
  }
  if pix(1, 0) && pix(0, 1) && !pix(1, 1) {
    c.br = true;
  }

  c
}

#[cfg(test)]
#[path = "corners_test.rs"]
mod corners_test;
