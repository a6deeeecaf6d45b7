use super::*;

/// Build a bitmap from row values, leftmost pixel = most significant of
/// the five active bits.
fn bitmap(rows: [u8; GRID_HEIGHT]) -> GlyphBitmap {
  GlyphBitmap::new(rows)
}

fn classify(rows: [u8; GRID_HEIGHT]) -> CornerGrid {
  CornerGrid::classify(&bitmap(rows), JoinFlags::NONE)
}

#[test]
fn test_isolated_pixel_keeps_all_corners() {
  // No diagonal neighbour, so neither trim fires.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[4] = 0b00100; // column 2
  let grid = classify(rows);
  assert_eq!(grid.get(2, 4), CellCorners::FULL);
}

#[test]
fn test_empty_grid_is_all_clear() {
  let grid = classify([0; GRID_HEIGHT]);
  for y in 0..GRID_HEIGHT {
    for x in 0..GRID_WIDTH {
      assert_eq!(grid.get(x, y), CellCorners::EMPTY);
    }
  }
}

#[test]
fn test_anti_diagonal_trim_both_cells() {
  // Pixels at (1,1) and (2,2): a lone `\` stem.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b01000;
  rows[2] = 0b00100;
  let grid = classify(rows);

  // (1,1) trims via its below-right neighbour, (2,2) via above-left.
  let expected = CellCorners {
    tl: true,
    tr: false,
    bl: false,
    br: true,
  };
  assert_eq!(grid.get(1, 1), expected);
  assert_eq!(grid.get(2, 2), expected);
}

#[test]
fn test_main_diagonal_trim_both_cells() {
  // Pixels at (2,1) and (1,2): a lone `/` stem.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b00100;
  rows[2] = 0b01000;
  let grid = classify(rows);

  let expected = CellCorners {
    tl: false,
    tr: true,
    bl: true,
    br: false,
  };
  assert_eq!(grid.get(2, 1), expected);
  assert_eq!(grid.get(1, 2), expected);
}

#[test]
fn test_empty_cell_gains_corner_across_diagonal() {
  // `\` stem at (1,1)-(2,2): the empty cells either side of the
  // diagonal each contribute one triangle corner.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b01000;
  rows[2] = 0b00100;
  let grid = classify(rows);

  // (2,1): filled left and below, empty below-left.
  assert_eq!(
    grid.get(2, 1),
    CellCorners {
      tl: false,
      tr: false,
      bl: true,
      br: false,
    }
  );
  // (1,2): filled right and above, empty above-right.
  assert_eq!(
    grid.get(1, 2),
    CellCorners {
      tl: false,
      tr: true,
      bl: false,
      br: false,
    }
  );
}

#[test]
fn test_empty_cell_with_filled_diagonal_stays_clear() {
  // Cell diagonally off the corner of a 2×2 block: only its above-left
  // neighbour is filled, so no triangle corner appears.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b01100;
  rows[2] = 0b01100;
  let grid = classify(rows);
  assert_eq!(grid.get(3, 3), CellCorners::EMPTY);
}

#[test]
fn test_gap_avoidance_restores_trimmed_corner() {
  // Diagonal stem joining a horizontal bar:
  //   . # #
  //   # . .
  // The pixel at (1,0) trims tl/br via its below-left partner, but the
  // bar to its right forces br back on; tl has no ink around it and
  // stays cut.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[0] = 0b01100;
  rows[1] = 0b10000;
  let grid = classify(rows);

  let c = grid.get(1, 0);
  assert!(c.br, "gap avoidance must restore br against the bar");
  assert!(!c.tl, "the free corner of the trim stays cut");
  assert!(c.tr && c.bl);
}

#[test]
fn test_gap_avoidance_runs_after_trims() {
  // Interior pixel of a solid block: the trims cannot fire, and even if
  // they could, every corner touches more ink and is forced on.
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b11100;
  rows[2] = 0b11100;
  rows[3] = 0b11100;
  let grid = classify(rows);
  assert_eq!(grid.get(1, 2), CellCorners::FULL);
}

#[test]
fn test_join_left_treats_row_five_edge_as_ink() {
  // Row 5 empty at column 0; with the join flag the reader sees ink at
  // and beyond the left edge, so (0,5) classifies as a filled cell.
  let joins = JoinFlags {
    left: true,
    right: false,
  };
  let grid = CornerGrid::classify(&bitmap([0; GRID_HEIGHT]), joins);
  assert_eq!(grid.get(0, 5), CellCorners::FULL);
  assert_eq!(grid.get(1, 5), CellCorners::EMPTY);
}
