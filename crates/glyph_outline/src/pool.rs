//! Append-only point arena backing the polygon graph.
//!
//! Every vertex of every per-cell polygon lives in one arena, and each
//! polygon is a closed doubly-linked ring threaded through it by index.
//! `prev`/`next` are optional indices rather than pointers; a dead point
//! has both cleared and is skipped by every pass, but keeps its slot so
//! that creation order survives merging (the path emitter roots each
//! surviving ring at its earliest-created point).
//!
//! Invariants, maintained by construction and asserted in the cleaner:
//! - for every live point `p`: `p.next.prev == p` and `p.prev.next == p`;
//! - a dead point has `prev == next == None`;
//! - no ring is empty; a would-be singleton collapses to dead.
//!
//! The arena never grows past [`POOL_CAPACITY`]. That bound covers the
//! worst case of any well-formed bitmap, so hitting it means the caller
//! fed something outside the glyph-grid contract and the pipeline stops
//! hard rather than degrade.

use glam::IVec2;

use crate::constants::POOL_CAPACITY;

/// Index of a point in its [`PointPool`].
pub type PointId = usize;

#[derive(Clone, Copy, Debug)]
struct PoolPoint {
  v: IVec2,
  prev: Option<PointId>,
  next: Option<PointId>,
}

/// Fixed-capacity arena of ring points for one glyph at a time.
pub struct PointPool {
  points: Vec<PoolPoint>,
}

impl PointPool {
  pub fn new() -> Self {
    Self {
      points: Vec::with_capacity(POOL_CAPACITY),
    }
  }

  /// Drop every point, keeping the allocation. Call before each glyph.
  pub fn reset(&mut self) {
    self.points.clear();
  }

  /// Number of points ever created for the current glyph, live or dead.
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  fn alloc(&mut self, v: IVec2) -> PointId {
    assert!(
      self.points.len() < POOL_CAPACITY,
      "point pool exhausted at {} points; input is not a well-formed glyph bitmap",
      POOL_CAPACITY,
    );
    self.points.push(PoolPoint {
      v,
      prev: None,
      next: None,
    });
    self.points.len() - 1
  }

  /// Start a new ring at `(x, y)`.
  pub fn move_to(&mut self, x: i32, y: i32) -> PointId {
    self.alloc(IVec2::new(x, y))
  }

  /// Append `(x, y)` to the ring under construction, linking it behind
  /// the most recently created point.
  pub fn line_to(&mut self, x: i32, y: i32) -> PointId {
    let id = self.alloc(IVec2::new(x, y));
    let prev = id - 1;
    self.points[id].prev = Some(prev);
    self.points[prev].next = Some(id);
    id
  }

  /// Close the ring under construction: walk back to its first point and
  /// join it to the last.
  pub fn close_ring(&mut self) {
    let last = self.points.len() - 1;
    let mut head = last;
    while let Some(p) = self.points[head].prev {
      head = p;
    }
    self.points[head].prev = Some(last);
    self.points[last].next = Some(head);
  }

  /// A point is live while it is linked into a ring.
  #[inline]
  pub fn is_live(&self, id: PointId) -> bool {
    self.points[id].next.is_some()
  }

  #[inline]
  pub fn pos(&self, id: PointId) -> IVec2 {
    self.points[id].v
  }

  #[inline]
  pub fn next(&self, id: PointId) -> Option<PointId> {
    self.points[id].next
  }

  #[inline]
  pub fn prev(&self, id: PointId) -> Option<PointId> {
    self.points[id].prev
  }

  /// Rewire `a → b`, so that `a.next == b` and `b.prev == a`.
  pub(crate) fn link(&mut self, a: PointId, b: PointId) {
    self.points[a].next = Some(b);
    self.points[b].prev = Some(a);
  }

  /// Splice a live point out of its ring and mark it dead.
  pub fn kill(&mut self, id: PointId) {
    let prev = self.points[id].prev.expect("kill on unlinked point");
    let next = self.points[id].next.expect("kill on unlinked point");
    self.points[prev].next = Some(next);
    self.points[next].prev = Some(prev);
    self.points[id].prev = None;
    self.points[id].next = None;
  }

  /// Clear a point's links without splicing its neighbours together.
  /// Used by the path emitter while consuming a ring.
  pub(crate) fn sever(&mut self, id: PointId) {
    self.points[id].prev = None;
    self.points[id].next = None;
  }

  /// Count of points still linked into rings.
  pub fn live_count(&self) -> usize {
    (0..self.points.len()).filter(|&i| self.is_live(i)).count()
  }
}

impl Default for PointPool {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "pool_test.rs"]
mod pool_test;
