use super::*;

fn triangle(pool: &mut PointPool) -> [PointId; 3] {
  let a = pool.move_to(0, 0);
  let b = pool.line_to(0, 3);
  let c = pool.line_to(3, 0);
  pool.close_ring();
  [a, b, c]
}

#[test]
fn test_closed_ring_is_consistent() {
  let mut pool = PointPool::new();
  let [a, b, c] = triangle(&mut pool);

  assert_eq!(pool.next(a), Some(b));
  assert_eq!(pool.next(b), Some(c));
  assert_eq!(pool.next(c), Some(a));
  assert_eq!(pool.prev(a), Some(c));
  assert_eq!(pool.prev(b), Some(a));
  assert_eq!(pool.prev(c), Some(b));
  for id in [a, b, c] {
    assert!(pool.is_live(id));
    assert_eq!(pool.prev(pool.next(id).unwrap()), Some(id));
    assert_eq!(pool.next(pool.prev(id).unwrap()), Some(id));
  }
}

#[test]
fn test_move_to_starts_unlinked() {
  let mut pool = PointPool::new();
  let a = pool.move_to(1, 2);
  assert!(!pool.is_live(a));
  assert_eq!(pool.pos(a), IVec2::new(1, 2));
}

#[test]
fn test_two_rings_stay_separate() {
  let mut pool = PointPool::new();
  let [a, ..] = triangle(&mut pool);
  let d = pool.move_to(8, 8);
  let e = pool.line_to(8, 11);
  let f = pool.line_to(11, 8);
  pool.close_ring();

  // Closing the second ring must not disturb the first.
  assert_eq!(pool.next(f), Some(d));
  assert_eq!(pool.prev(d), Some(f));
  assert_eq!(pool.prev(a), Some(a + 2));
  assert_eq!(pool.len(), 6);
  assert_eq!(pool.live_count(), 6);
  assert_eq!(pool.pos(e), IVec2::new(8, 11));
}

#[test]
fn test_kill_splices_neighbours() {
  let mut pool = PointPool::new();
  let [a, b, c] = triangle(&mut pool);

  pool.kill(b);
  assert!(!pool.is_live(b));
  assert_eq!(pool.prev(b), None);
  assert_eq!(pool.next(a), Some(c));
  assert_eq!(pool.prev(c), Some(a));
  assert_eq!(pool.live_count(), 2);
}

#[test]
fn test_kill_down_to_singleton_then_dead() {
  let mut pool = PointPool::new();
  let [a, b, c] = triangle(&mut pool);

  pool.kill(a);
  pool.kill(b);
  // c is now a self-loop; killing it clears the last link.
  assert_eq!(pool.next(c), Some(c));
  pool.kill(c);
  assert_eq!(pool.live_count(), 0);
}

#[test]
fn test_reset_keeps_capacity_drops_points() {
  let mut pool = PointPool::new();
  triangle(&mut pool);
  pool.reset();
  assert!(pool.is_empty());
  triangle(&mut pool);
  assert_eq!(pool.len(), 3);
}

#[test]
#[should_panic(expected = "point pool exhausted")]
fn test_capacity_overflow_panics() {
  let mut pool = PointPool::new();
  for _ in 0..=crate::constants::POOL_CAPACITY {
    pool.move_to(0, 0);
  }
}
