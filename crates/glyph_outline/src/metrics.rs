//! Engine-agnostic metrics collection for glyph tracing.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use glyph_outline::metrics::{TraceMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // After a batch:
//! println!("avg trace: {:.1}us", tracer.metrics.avg_trace_us());
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use crate::clean::CleanStats;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }
}

impl RollingWindow<u64> {
    /// Compute the average of all values.
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.buffer.iter().sum::<u64>() as f64 / self.buffer.len() as f64
        }
    }

    /// Get min and max values.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        if self.buffer.is_empty() {
            None
        } else {
            let min = *self.buffer.iter().min().unwrap();
            let max = *self.buffer.iter().max().unwrap();
            Some((min, max))
        }
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Per-tracer statistics updated after each glyph.
#[derive(Debug, Clone, Default)]
pub struct TraceMetrics {
    /// Glyphs traced since creation.
    pub glyphs_traced: u64,
    /// Total points allocated across all glyphs.
    pub points_allocated: u64,
    /// Total cleaner sweeps across all glyphs.
    pub merge_rounds: u64,
    /// Total edge merges across all glyphs.
    pub merges: u64,
    /// Total verification-sweep repairs across all glyphs.
    pub repairs: u64,
    /// Rolling window of per-glyph trace times in microseconds.
    pub trace_timings: RollingWindow<u64>,
    /// Last trace time in microseconds.
    pub last_trace_us: u64,
}

impl TraceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters and timings.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one traced glyph.
    pub fn record_trace(&mut self, points: usize, stats: CleanStats, timing_us: u64) {
        if !is_enabled() {
            return;
        }
        self.glyphs_traced += 1;
        self.points_allocated += points as u64;
        self.merge_rounds += stats.rounds as u64;
        self.merges += stats.merges as u64;
        self.repairs += stats.repairs as u64;
        self.trace_timings.push(timing_us);
        self.last_trace_us = timing_us;
    }

    /// Average trace time over the rolling window, in microseconds.
    pub fn avg_trace_us(&self) -> f64 {
        self.trace_timings.average()
    }
}
