//! Per-glyph tracing pipeline.
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌────────────┐   ┌────────────┐
//! │ GlyphBitmap  ├──►│ corner        ├──►│ cell       ├──►│ path       ├──► Outline
//! │ + JoinFlags  │   │ classification│   │ emission   │   │ clean +    │
//! └──────────────┘   └───────────────┘   └────────────┘   │ extraction │
//!                                                         └────────────┘
//! ```
//!
//! The tracer owns one [`PointPool`] and resets it per glyph, so a single
//! tracer can run an entire font without reallocating. Glyphs are
//! independent; callers wanting parallelism shard by glyph with one
//! tracer per worker.

use crate::bitmap::{GlyphBitmap, JoinFlags};
use crate::clean::clean;
use crate::constants::{GRID_HEIGHT, GRID_WIDTH};
use crate::corners::CornerGrid;
use crate::emit::{open_cell, solid_cell};
use crate::pool::PointPool;
use crate::types::{Contour, LogSink, Outline, RepairSink};
#[cfg(feature = "metrics")]
use crate::metrics::TraceMetrics;

/// Reusable glyph tracer: one point pool, reset per glyph.
pub struct OutlineTracer {
  pool: PointPool,

  /// Tracing counters and timings.
  /// Only collected when compiled with the `metrics` feature.
  #[cfg(feature = "metrics")]
  pub metrics: TraceMetrics,
}

impl OutlineTracer {
  pub fn new() -> Self {
    Self {
      pool: PointPool::new(),
      #[cfg(feature = "metrics")]
      metrics: TraceMetrics::default(),
    }
  }

  /// Trace one glyph, logging any repair diagnostics.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "outline::trace")
  )]
  pub fn trace(&mut self, bitmap: &GlyphBitmap, flags: JoinFlags) -> Outline {
    self.trace_with_sink(bitmap, flags, &mut LogSink)
  }

  /// Trace one glyph, delivering repair diagnostics to `sink`.
  pub fn trace_with_sink(
    &mut self,
    bitmap: &GlyphBitmap,
    flags: JoinFlags,
    sink: &mut dyn RepairSink,
  ) -> Outline {
    #[cfg(feature = "metrics")]
    let start = web_time::Instant::now();

    self.pool.reset();
    let grid = CornerGrid::classify(bitmap, flags);

    {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("emit_pass").entered();
      for x in 0..GRID_WIDTH {
        for y in 0..GRID_HEIGHT {
          // Bitmap rows run top-down; the lattice is y-up.
          let oy = (GRID_HEIGHT - 1 - y) as i32;
          let corners = grid.get(x, y);
          if bitmap.pixel(flags, x as i32, y as i32) {
            solid_cell(&mut self.pool, x as i32, oy, corners);
          } else {
            open_cell(&mut self.pool, x as i32, oy, corners);
          }
        }
      }
    }

    let clean_stats = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("clean_pass").entered();
      clean(&mut self.pool, sink)
    };

    let outline = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("extract_pass").entered();
      self.extract()
    };

    #[cfg(feature = "metrics")]
    {
      let elapsed = start.elapsed().as_micros() as u64;
      self
        .metrics
        .record_trace(self.pool.len(), clean_stats, elapsed);
    }
    #[cfg(not(feature = "metrics"))]
    let _ = clean_stats;

    outline
  }

  /// Walk the surviving rings in creation order, consuming the pool.
  ///
  /// Each ring is rooted at its earliest-created live point and severed
  /// point by point as it is read, so no ring is visited twice.
  fn extract(&mut self) -> Outline {
    let mut outline = Outline::default();

    for root in 0..self.pool.len() {
      if !self.pool.is_live(root) {
        continue;
      }
      let mut points = Vec::new();
      let mut p = root;
      loop {
        points.push(self.pool.pos(p));
        let next = self.pool.next(p).expect("ring broken during extraction");
        self.pool.sever(p);
        if next == root {
          break;
        }
        p = next;
      }
      outline.contours.push(Contour { points });
    }

    outline
  }
}

impl Default for OutlineTracer {
  fn default() -> Self {
    Self::new()
  }
}

/// Trace a single glyph with a throwaway tracer.
///
/// Batch callers should hold an [`OutlineTracer`] instead and reuse its
/// pool.
pub fn trace_glyph(bitmap: &GlyphBitmap, flags: JoinFlags) -> Outline {
  OutlineTracer::new().trace(bitmap, flags)
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;
