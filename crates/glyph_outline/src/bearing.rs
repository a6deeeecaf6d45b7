//! Eight-way bearings on the outline lattice.
//!
//! Every edge the emitter produces is axis-aligned or at 45 degrees, and
//! the cleaner preserves that, so a direction is fully described by one of
//! eight compass points. `-1` stands for the zero vector and any direction
//! off the eight-point compass; two `-1` bearings are never treated as
//! parallel.

use glam::IVec2;

/// Bearing of a lattice vector: 0..7 clockwise from +y in 45° steps, or
/// `-1` for anything off the compass (including zero).
///
/// ```text
///        0
///     7  │  1
///      ╲ │ ╱
///   6 ───┼─── 2
///      ╱ │ ╲
///     5  │  3
///        4
/// ```
#[inline]
pub fn bearing(v: IVec2) -> i32 {
  if v.x == 0 && v.y > 0 {
    return 0;
  }
  if v.x == v.y && v.x > 0 {
    return 1;
  }
  if v.x > 0 && v.y == 0 {
    return 2;
  }
  if v.x == -v.y && v.x > 0 {
    return 3;
  }
  if v.x == 0 && v.y < 0 {
    return 4;
  }
  if v.x == v.y && v.x < 0 {
    return 5;
  }
  if v.x < 0 && v.y == 0 {
    return 6;
  }
  if v.x == -v.y && v.x < 0 {
    return 7;
  }
  -1
}

/// True when `a`, `b`, `c` are successive points along one directed
/// compass line.
#[inline]
pub fn inline3(a: IVec2, b: IVec2, c: IVec2) -> bool {
  let ab = bearing(b - a);
  ab != -1 && ab == bearing(c - b)
}

/// [`inline3`] over both sliding windows of four points.
#[inline]
pub fn inline4(a: IVec2, b: IVec2, c: IVec2, d: IVec2) -> bool {
  inline3(a, b, c) && inline3(b, c, d)
}

#[cfg(test)]
#[path = "bearing_test.rs"]
mod bearing_test;
