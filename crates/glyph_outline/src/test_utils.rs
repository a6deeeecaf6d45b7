//! Shared fixtures for the test suite: glyph bitmaps, a reference
//! centre-sampling rasteriser, and a direct implementation of the SAA5050
//! smoothing rule to compare outlines against.

use glam::IVec2;

use crate::bitmap::{GlyphBitmap, JoinFlags};
use crate::constants::{GRID_HEIGHT, GRID_WIDTH, LATTICE_HEIGHT, LATTICE_WIDTH};
use crate::types::Outline;

/// The letter T: full top bar, centre stem.
pub const LETTER_T: [u8; GRID_HEIGHT] = [
  0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0, 0,
];

/// The letter O: a ring with a hole.
pub const LETTER_O: [u8; GRID_HEIGHT] = [
  0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0, 0, 0,
];

/// The letter X: crossing diagonals.
pub const LETTER_X: [u8; GRID_HEIGHT] = [
  0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001, 0, 0, 0,
];

/// The letter Z: diagonal between bars.
pub const LETTER_Z: [u8; GRID_HEIGHT] = [
  0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111, 0, 0, 0,
];

/// Solid ink over the whole active region.
pub const FULL_BLOCK: [u8; GRID_HEIGHT] = [
  0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0,
];

pub fn bitmap(rows: [u8; GRID_HEIGHT]) -> GlyphBitmap {
  GlyphBitmap::new(rows)
}

/// Sample the outline on a `cols × rows` grid covering the whole lattice,
/// one even-odd point-in-polygon query at each grid cell centre. Rows run
/// top-down like bitmap rows.
///
/// `cols`/`rows` must divide the lattice evenly; 6×10 samples at cell
/// centres, 12×20 at half-cell centres. Sample points then sit strictly
/// between lattice lines the outline can run along, so no query ever
/// lands on an edge.
pub fn rasterize(outline: &Outline, cols: usize, rows: usize) -> Vec<Vec<bool>> {
  let step = LATTICE_WIDTH / cols as i32;
  assert_eq!(step * cols as i32, LATTICE_WIDTH);
  assert_eq!(step * rows as i32, LATTICE_HEIGHT);

  (0..rows)
    .map(|gy| {
      (0..cols)
        .map(|gx| {
          let px = gx as i32 * step + step / 2;
          let py = LATTICE_HEIGHT - (gy as i32 * step + step / 2);
          inside(outline, IVec2::new(px, py))
        })
        .collect()
    })
    .collect()
}

/// Even-odd ray cast towards +x. Exact integer arithmetic; every outline
/// edge is axis-aligned or at 45°, so the intersection abscissa is an
/// integer.
fn inside(outline: &Outline, p: IVec2) -> bool {
  let mut crossings = 0;
  for contour in &outline.contours {
    let n = contour.points.len();
    for k in 0..n {
      let a = contour.points[k];
      let b = contour.points[(k + 1) % n];
      if a.y == b.y {
        continue;
      }
      let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
      if p.y < lo.y || p.y >= hi.y {
        continue;
      }
      let (dx, dy) = (b.x - a.x, b.y - a.y);
      debug_assert!(dx == 0 || dx.abs() == dy.abs(), "edge off the compass");
      let xi = a.x + (p.y - a.y) * (dx / dy);
      if xi > p.x {
        crossings += 1;
      }
    }
  }
  crossings % 2 == 1
}

/// The bitmap as a top-down boolean grid, for comparing against
/// [`rasterize`] at native resolution.
pub fn native_grid(bitmap: &GlyphBitmap, flags: JoinFlags) -> Vec<Vec<bool>> {
  (0..GRID_HEIGHT as i32)
    .map(|y| {
      (0..GRID_WIDTH as i32)
        .map(|x| bitmap.pixel(flags, x, y))
        .collect()
    })
    .collect()
}

/// The SAA5050 character-rounding rule, applied directly to the bitmap:
/// double every pixel to 2×2, then for each 2×2 clump of pixels holding a
/// diagonal pair add the two sub-pixels that smooth the step. Overlapping
/// clumps all contribute.
pub fn smoothed_grid(bitmap: &GlyphBitmap, flags: JoinFlags) -> Vec<Vec<bool>> {
  let mut grid = vec![vec![false; 2 * GRID_WIDTH]; 2 * GRID_HEIGHT];

  for y in 0..GRID_HEIGHT as i32 {
    for x in 0..GRID_WIDTH as i32 {
      if bitmap.pixel(flags, x, y) {
        for (dy, dx) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
          grid[(2 * y + dy) as usize][(2 * x + dx) as usize] = true;
        }
      }
    }
  }

  for y in 0..GRID_HEIGHT as i32 - 1 {
    for x in 0..GRID_WIDTH as i32 - 1 {
      let p = |dx: i32, dy: i32| bitmap.pixel(flags, x + dx, y + dy);
      let (x, y) = (x as usize, y as usize);
      // `\` pair: sub-pixels fill the inner step corners.
      if p(0, 0) && p(1, 1) && !p(1, 0) && !p(0, 1) {
        grid[2 * y + 1][2 * x + 2] = true;
        grid[2 * y + 2][2 * x + 1] = true;
      }
      // `/` pair, mirrored.
      if p(1, 0) && p(0, 1) && !p(0, 0) && !p(1, 1) {
        grid[2 * y + 1][2 * x + 1] = true;
        grid[2 * y + 2][2 * x + 2] = true;
      }
    }
  }

  grid
}

/// Render a sample grid as `#`/`.` rows for assertion messages.
pub fn grid_to_string(grid: &[Vec<bool>]) -> String {
  grid
    .iter()
    .map(|row| {
      row
        .iter()
        .map(|&b| if b { '#' } else { '.' })
        .collect::<String>()
    })
    .collect::<Vec<_>>()
    .join("\n")
}
