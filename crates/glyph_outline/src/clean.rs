//! Iterative polygon-merge fixed point.
//!
//! The emitter leaves the pool full of per-cell rings whose boundaries
//! run along shared cell edges in opposite directions. This pass welds
//! them into the minimal set of closed outlines:
//!
//! ```text
//!   ┌────┐┌────┐        ┌──────────┐
//!   │ →  ││ →  │   ⇒    │    →     │     coincident anti-parallel
//!   └────┘└────┘        └──────────┘     edges rewired away
//! ```
//!
//! Each round scans every ordered pair of live points; a pair whose
//! outgoing edges are anti-parallel and collinear-overlapping (or sharing
//! an endpoint) is rewired, joining two rings into one (or splitting one
//! ring in two, when both edges belong to the same ring). Local cleanup
//! then drops the points the rewire made redundant. Rounds repeat until a
//! sweep does nothing; every merge strictly reduces ring count or vertex
//! count, so the loop terminates. O(P²) per round is fine at the few
//! hundred points a glyph produces.
//!
//! A final verification sweep re-checks every survivor. Anything it still
//! has to remove was missed by the local cleanup: it is repaired all the
//! same, but reported through the caller's [`RepairSink`] since a clean
//! input is not supposed to get there.

use crate::bearing::{bearing, inline3, inline4};
use crate::pool::{PointId, PointPool};
use crate::types::{RepairEvent, RepairKind, RepairSink};

/// Counters from one cleaning run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanStats {
  /// Sweeps over the point pool, including the final no-op one.
  pub rounds: usize,
  /// Successful edge merges.
  pub merges: usize,
  /// Degeneracies repaired by the verification sweep.
  pub repairs: usize,
}

/// Merge coincident boundaries until nothing changes, then verify.
pub fn clean(pool: &mut PointPool, sink: &mut dyn RepairSink) -> CleanStats {
  let mut stats = CleanStats::default();

  loop {
    stats.rounds += 1;
    let mut dirty = false;
    for i in 0..pool.len() {
      for j in (i + 1)..pool.len() {
        if !pool.is_live(i) {
          break;
        }
        if pool.is_live(j) && try_merge(pool, i, j) {
          stats.merges += 1;
          dirty = true;
        }
      }
    }
    if !dirty {
      break;
    }
  }

  stats.repairs = verify(pool, sink);
  stats
}

/// Attempt to weld the edges leaving `a0` and `b0`.
///
/// The edges `a0 → a1` and `b0 → b1` merge when they are anti-parallel
/// and either collinear-overlapping (one of the four inline orderings of
/// the endpoints) or sharing an endpoint. Rewiring swaps the ring
/// successors:
///
/// ```text
///   a0 ─→ a1          a0 ─╮ ╭─→ a1
///   b1 ←─ b0    ⇒     b1 ←╯ ╰── b0
/// ```
///
/// after which local cleanup drops any of the four points left isolated,
/// duplicated, or collinear.
fn try_merge(pool: &mut PointPool, a0: PointId, b0: PointId) -> bool {
  let a1 = pool.next(a0).expect("merge on dead point");
  let b1 = pool.next(b0).expect("merge on dead point");

  // Structural invariants; a violation is a bug, not bad input.
  assert_eq!(pool.prev(a1), Some(a0), "ring links inconsistent at a");
  assert_eq!(pool.prev(b1), Some(b0), "ring links inconsistent at b");
  assert!(a0 != a1 && a0 != b0 && a1 != b1 && b0 != b1, "self-paired edge");

  let (pa0, pa1) = (pool.pos(a0), pool.pos(a1));
  let (pb0, pb1) = (pool.pos(b0), pool.pos(b1));

  let anti_parallel = bearing(pa0 - pa1) == bearing(pb1 - pb0);
  if !anti_parallel {
    return false;
  }
  let touching = inline4(pa0, pb1, pa1, pb0)
    || inline4(pa0, pb1, pb0, pa1)
    || inline4(pb1, pa0, pb0, pa1)
    || inline4(pb1, pa0, pa1, pb0)
    || pa0 == pb1
    || pa1 == pb0;
  if !touching {
    return false;
  }

  pool.link(a0, b1);
  pool.link(b0, a1);

  fix_isolated(pool, a0);
  fix_identical(pool, a0);
  fix_collinear(pool, b1);
  fix_isolated(pool, b0);
  fix_identical(pool, b0);
  fix_collinear(pool, a1);

  true
}

/// Kill a point whose ring has collapsed onto it.
fn fix_isolated(pool: &mut PointPool, p: PointId) {
  if pool.next(p) == Some(p) {
    pool.kill(p);
  }
}

/// Kill a point that coincides with its successor.
fn fix_identical(pool: &mut PointPool, p: PointId) {
  if !pool.is_live(p) {
    return;
  }
  let next = pool.next(p).expect("checked live");
  if pool.pos(next) == pool.pos(p) {
    pool.kill(p);
  }
}

/// Kill a point lying on the straight run between its neighbours.
fn fix_collinear(pool: &mut PointPool, p: PointId) {
  if !pool.is_live(p) {
    return;
  }
  let prev = pool.prev(p).expect("checked live");
  let next = pool.next(p).expect("checked live");
  if inline3(pool.pos(prev), pool.pos(p), pool.pos(next)) {
    pool.kill(p);
  }
}

/// Post-fixed-point sweep: repair and report any degeneracy the local
/// cleanup missed. Returns the number of repairs.
fn verify(pool: &mut PointPool, sink: &mut dyn RepairSink) -> usize {
  let mut repairs = 0;
  loop {
    let mut repaired = false;
    for p in 0..pool.len() {
      if !pool.is_live(p) {
        continue;
      }
      let next = pool.next(p).expect("checked live");
      if next == p {
        // Degenerate singleton; releasing it needs no report since it
        // carries no geometry.
        pool.kill(p);
        repaired = true;
        continue;
      }
      if pool.pos(next) == pool.pos(p) {
        sink.repair(RepairEvent {
          kind: RepairKind::Identical,
          at: pool.pos(p),
        });
        pool.kill(p);
        repairs += 1;
        repaired = true;
        continue;
      }
      let prev = pool.prev(p).expect("checked live");
      if inline3(pool.pos(prev), pool.pos(p), pool.pos(next)) {
        sink.repair(RepairEvent {
          kind: RepairKind::Collinear,
          at: pool.pos(p),
        });
        pool.kill(p);
        repairs += 1;
        repaired = true;
      }
    }
    if !repaired {
      return repairs;
    }
  }
}

#[cfg(test)]
#[path = "clean_test.rs"]
mod clean_test;
