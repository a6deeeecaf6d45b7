//! Outline output types and repair diagnostics.

use glam::IVec2;
use smallvec::SmallVec;

/// One closed polygon on the outline lattice.
///
/// The closing edge from the last point back to the first is implied and
/// not stored. Vertices are in traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contour {
  pub points: Vec<IVec2>,
}

impl Contour {
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Twice the signed area of the polygon (shoelace sum).
  ///
  /// Positive for counter-clockwise traversal in the y-up lattice.
  /// Callers use the sign to tell outer boundaries from holes.
  pub fn signed_area_x2(&self) -> i64 {
    let n = self.points.len();
    let mut sum = 0i64;
    for i in 0..n {
      let a = self.points[i];
      let b = self.points[(i + 1) % n];
      sum += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    sum
  }
}

/// All contours traced from one glyph, in pool creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
  pub contours: SmallVec<[Contour; 4]>,
}

impl Outline {
  /// True when the glyph produced no ink at all.
  pub fn is_empty(&self) -> bool {
    self.contours.is_empty()
  }

  pub fn contour_count(&self) -> usize {
    self.contours.len()
  }

  /// Total vertex count across all contours.
  pub fn point_count(&self) -> usize {
    self.contours.iter().map(Contour::len).sum()
  }
}

/// What the post-merge verification sweep had to repair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepairKind {
  /// Two successive ring points with equal coordinates.
  Identical,
  /// A ring point lying on the straight run between its neighbours.
  Collinear,
}

/// One repaired degeneracy, reported once per occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepairEvent {
  pub kind: RepairKind,
  /// Lattice position of the removed point.
  pub at: IVec2,
}

/// Receiver for repair diagnostics.
///
/// The cleaner repairs degeneracies silently as far as the output is
/// concerned, but every repair is also handed to the caller's sink so a
/// test suite can assert there were none on inputs expected to be clean.
pub trait RepairSink {
  fn repair(&mut self, event: RepairEvent);
}

/// Default sink: one log line per repaired point.
pub struct LogSink;

impl RepairSink for LogSink {
  fn repair(&mut self, event: RepairEvent) {
    log::warn!(
      "repaired {:?} point at ({}, {})",
      event.kind,
      event.at.x,
      event.at.y
    );
  }
}

/// Collecting sink for tests and batch reporting.
impl RepairSink for Vec<RepairEvent> {
  fn repair(&mut self, event: RepairEvent) {
    self.push(event);
  }
}
