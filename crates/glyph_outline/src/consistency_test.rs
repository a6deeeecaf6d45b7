//! End-to-end pipeline properties, checked against a reference rasteriser
//! and a direct implementation of the SAA5050 smoothing rule.

use glam::IVec2;

use crate::bearing::inline3;
use crate::bitmap::JoinFlags;
use crate::constants::{GRID_HEIGHT, LATTICE_HEIGHT, LATTICE_WIDTH};
use crate::test_utils::*;
use crate::trace::{trace_glyph, OutlineTracer};
use crate::types::{Outline, RepairEvent};

/// Bitmaps that between them exercise every emitter shape: straight
/// stems, bars, a hole, lone and crossing diagonals, a solid block, a
/// lone pixel, and the stepped-boundary zigzag.
fn fixtures() -> Vec<(&'static str, [u8; GRID_HEIGHT])> {
  vec![
    ("letter_t", LETTER_T),
    ("letter_o", LETTER_O),
    ("letter_x", LETTER_X),
    ("letter_z", LETTER_Z),
    ("full_block", FULL_BLOCK),
    ("single_pixel", single_pixel()),
    ("diagonal_pair", diagonal_pair()),
    ("zigzag", zigzag()),
  ]
}

fn single_pixel() -> [u8; GRID_HEIGHT] {
  let mut rows = [0u8; GRID_HEIGHT];
  rows[4] = 0b00100;
  rows
}

fn diagonal_pair() -> [u8; GRID_HEIGHT] {
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b01000;
  rows[2] = 0b00100;
  rows
}

/// Stacked diagonals sharing a column: the empty cell at (2,2) gets both
/// its tl and bl corners, forcing the stepped triangle boundaries.
fn zigzag() -> [u8; GRID_HEIGHT] {
  let mut rows = [0u8; GRID_HEIGHT];
  rows[1] = 0b00100;
  rows[2] = 0b01000;
  rows[3] = 0b00100;
  rows
}

fn trace_clean(rows: [u8; GRID_HEIGHT]) -> Outline {
  let mut events: Vec<RepairEvent> = Vec::new();
  let outline =
    OutlineTracer::new().trace_with_sink(&bitmap(rows), JoinFlags::NONE, &mut events);
  assert!(events.is_empty(), "repairs on a well-formed glyph");
  outline
}

#[test]
fn test_empty_glyph_produces_no_contours() {
  let outline = trace_clean([0; GRID_HEIGHT]);
  assert!(outline.is_empty());
}

#[test]
fn test_full_block_merges_to_single_rectangle() {
  let outline = trace_clean(FULL_BLOCK);
  assert_eq!(outline.contour_count(), 1);

  let mut corners = outline.contours[0].points.clone();
  corners.sort_by_key(|p| (p.x, p.y));
  assert_eq!(
    corners,
    vec![
      IVec2::new(0, 4),
      IVec2::new(0, 40),
      IVec2::new(20, 4),
      IVec2::new(20, 40),
    ]
  );
}

#[test]
fn test_single_pixel_keeps_its_square() {
  // An isolated pixel has no diagonal neighbours, so no corner is
  // trimmed and the cell stays a full square.
  let outline = trace_clean(single_pixel());
  assert_eq!(outline.contour_count(), 1);
  assert_eq!(
    outline.contours[0].points,
    vec![
      IVec2::new(8, 20),
      IVec2::new(8, 24),
      IVec2::new(12, 24),
      IVec2::new(12, 20),
    ]
  );
}

#[test]
fn test_diagonal_pair_merges_to_single_ribbon() {
  // Two chamfered squares plus the two triangles across the diagonal
  // weld into one ring.
  let outline = trace_clean(diagonal_pair());
  assert_eq!(outline.contour_count(), 1);
}

#[test]
fn test_letter_t_is_one_contour() {
  let outline = trace_clean(LETTER_T);
  assert_eq!(outline.contour_count(), 1);
}

#[test]
fn test_letter_o_hole_winds_opposite() {
  let outline = trace_clean(LETTER_O);
  assert_eq!(outline.contour_count(), 2);

  let a0 = outline.contours[0].signed_area_x2();
  let a1 = outline.contours[1].signed_area_x2();
  assert!(
    (a0 < 0) != (a1 < 0),
    "hole must wind opposite to the outer boundary: {a0} vs {a1}"
  );
  // The outer boundary encloses the hole, so it carries the larger area.
  let (outer, hole) = if a0.abs() > a1.abs() { (a0, a1) } else { (a1, a0) };
  assert!(outer < 0, "outer boundaries wind clockwise in the y-up lattice");
  assert!(hole > 0);
}

#[test]
fn test_outer_windings_agree_across_glyphs() {
  for (name, rows) in fixtures() {
    let outline = trace_clean(rows);
    for contour in &outline.contours {
      // Every fixture except the O has only outer boundaries.
      if name != "letter_o" {
        assert!(
          contour.signed_area_x2() < 0,
          "{name}: outer boundary wound the wrong way"
        );
      }
    }
  }
}

#[test]
fn test_native_roundtrip() {
  for (name, rows) in fixtures() {
    let bm = bitmap(rows);
    let outline = trace_clean(rows);
    let got = rasterize(&outline, 6, 10);
    let want = native_grid(&bm, JoinFlags::NONE);
    assert_eq!(
      got,
      want,
      "{name}: 10px rasterisation diverged from the bitmap\ngot:\n{}\nwant:\n{}",
      grid_to_string(&got),
      grid_to_string(&want),
    );
  }
}

#[test]
fn test_double_resolution_matches_saa5050_smoothing() {
  for (name, rows) in fixtures() {
    let bm = bitmap(rows);
    let outline = trace_clean(rows);
    let got = rasterize(&outline, 12, 20);
    let want = smoothed_grid(&bm, JoinFlags::NONE);
    assert_eq!(
      got,
      want,
      "{name}: 20px rasterisation diverged from SAA5050 smoothing\ngot:\n{}\nwant:\n{}",
      grid_to_string(&got),
      grid_to_string(&want),
    );
  }
}

#[test]
fn test_contours_stay_on_lattice_and_clean() {
  for (name, rows) in fixtures() {
    let outline = trace_clean(rows);
    for contour in &outline.contours {
      let n = contour.len();
      assert!(n >= 3, "{name}: contour below three vertices");
      for k in 0..n {
        let p = contour.points[k];
        assert!(
          (0..=LATTICE_WIDTH).contains(&p.x) && (0..=LATTICE_HEIGHT).contains(&p.y),
          "{name}: vertex {p} off the lattice"
        );
        let q = contour.points[(k + 1) % n];
        let r = contour.points[(k + 2) % n];
        assert_ne!(p, q, "{name}: repeated vertex");
        assert!(!inline3(p, q, r), "{name}: collinear run survived cleaning");
      }
    }
  }
}

#[test]
fn test_join_left_extends_outline_to_edge() {
  // Row 5 carries no ink at all; the join flag alone pulls the outline
  // out to x == 0 across the row-5 band.
  let joins = JoinFlags {
    left: true,
    right: false,
  };
  let outline = trace_glyph(&bitmap([0; GRID_HEIGHT]), joins);
  assert_eq!(outline.contour_count(), 1);
  assert_eq!(
    outline.contours[0].points,
    vec![
      IVec2::new(0, 16),
      IVec2::new(0, 20),
      IVec2::new(4, 20),
      IVec2::new(4, 16),
    ]
  );
}

#[test]
fn test_join_left_with_row_five_ink() {
  let mut rows = [0u8; GRID_HEIGHT];
  rows[5] = 0b10000;
  let joins = JoinFlags {
    left: true,
    right: false,
  };
  let outline = trace_glyph(&bitmap(rows), joins);
  assert!(outline
    .contours
    .iter()
    .flat_map(|c| c.points.iter())
    .any(|p| p.x == 0 && (16..=20).contains(&p.y)));
}

#[test]
fn test_join_right_mirrors_left() {
  let joins = JoinFlags {
    left: false,
    right: true,
  };
  let outline = trace_glyph(&bitmap([0; GRID_HEIGHT]), joins);
  // Nothing: the filled region starts at x == GRID_WIDTH, outside the
  // traced grid.
  assert!(outline.is_empty());
}
