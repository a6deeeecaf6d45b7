//! Per-cell polygon emission on the 4× lattice.
//!
//! Each cell contributes small closed rings to the point pool; welding
//! them into glyph-sized outlines is the cleaner's job. Working one cell
//! at a time keeps the rounding rule local: a corner bit either keeps the
//! exact cell corner or trades it for a one-unit 45° chamfer, and the 4×4
//! sub-grid is exactly fine enough that sampling the result at cell or
//! half-cell resolution lands back on the two canonical pixel shapes.
//!
//! ```text
//!  all corners kept    bl corner cut      empty cell, bl set
//!
//!   ┌─────────┐         ┌─────────┐              │
//!   │         │         │         │            ◣ hypotenuse legs
//!   │         │         │         │            ██ abut the two
//!   │         │         ╲         │            ███ filled
//!   └─────────┘          ╰────────┘           ────┘ neighbours
//! ```
//!
//! Coordinates are lattice-absolute; callers pass the cell position in
//! output orientation (y already flipped).

use crate::constants::CELL;
use crate::corners::CellCorners;
use crate::pool::PointPool;

/// Append the ring of a filled cell at output-space cell `(x, y)`.
///
/// Walks bl → tl → tr → br and closes. A set corner visits the exact
/// cell corner; a cleared one is cut with a chamfer one unit in along
/// each edge, which yields anything from the full square (all set) to an
/// octagon (none set).
pub fn solid_cell(pool: &mut PointPool, x: i32, y: i32, c: CellCorners) {
  let (x, y) = (x * CELL, y * CELL);

  if c.bl {
    pool.move_to(x, y);
  } else {
    pool.move_to(x + 1, y);
    pool.line_to(x, y + 1);
  }
  if c.tl {
    pool.line_to(x, y + 4);
  } else {
    pool.line_to(x, y + 3);
    pool.line_to(x + 1, y + 4);
  }
  if c.tr {
    pool.line_to(x + 4, y + 4);
  } else {
    pool.line_to(x + 3, y + 4);
    pool.line_to(x + 4, y + 3);
  }
  if c.br {
    pool.line_to(x + 4, y);
  } else {
    pool.line_to(x + 4, y + 1);
    pool.line_to(x + 3, y);
  }
  pool.close_ring();
}

/// Append one triangle per set corner of an empty cell at output-space
/// cell `(x, y)`.
///
/// The canonical triangle has three-unit legs along the two cell edges
/// whose neighbours are filled. When the adjacent corner of the same cell
/// is also set, the two hypotenuses would cross; the shared leg is pulled
/// back to two units and stepped so the fills stay disjoint.
pub fn open_cell(pool: &mut PointPool, x: i32, y: i32, c: CellCorners) {
  let (x, y) = (x * CELL, y * CELL);

  if c.bl {
    pool.move_to(x, y);
    if c.tl {
      pool.line_to(x, y + 2);
      pool.line_to(x + 1, y + 2);
    } else {
      pool.line_to(x, y + 3);
    }
    if c.br {
      pool.line_to(x + 2, y + 1);
      pool.line_to(x + 2, y);
    } else {
      pool.line_to(x + 3, y);
    }
    pool.close_ring();
  }
  if c.tl {
    pool.move_to(x, y + 4);
    if c.tr {
      pool.line_to(x + 2, y + 4);
      pool.line_to(x + 2, y + 3);
    } else {
      pool.line_to(x + 3, y + 4);
    }
    if c.bl {
      pool.line_to(x + 1, y + 2);
      pool.line_to(x, y + 2);
    } else {
      pool.line_to(x, y + 1);
    }
    pool.close_ring();
  }
  if c.tr {
    pool.move_to(x + 4, y + 4);
    if c.br {
      pool.line_to(x + 4, y + 2);
      pool.line_to(x + 3, y + 2);
    } else {
      pool.line_to(x + 4, y + 1);
    }
    if c.tl {
      pool.line_to(x + 2, y + 3);
      pool.line_to(x + 2, y + 4);
    } else {
      pool.line_to(x + 1, y + 4);
    }
    pool.close_ring();
  }
  if c.br {
    pool.move_to(x + 4, y);
    if c.bl {
      pool.line_to(x + 2, y);
      pool.line_to(x + 2, y + 1);
    } else {
      pool.line_to(x + 1, y);
    }
    if c.tr {
      pool.line_to(x + 3, y + 2);
      pool.line_to(x + 4, y + 2);
    } else {
      pool.line_to(x + 4, y + 3);
    }
    pool.close_ring();
  }
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;
