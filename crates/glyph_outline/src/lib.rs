//! glyph_outline - vector outlines from teletext-style bitmap glyphs
//!
//! This crate turns 5×9 bitmap glyphs (drawn in the manner of the Mullard
//! SAA5050 teletext character generator) into closed polygonal outlines
//! suitable for a vector font. The SAA5050's 2×2 diagonal-smoothing
//! heuristic is lifted from a pixel-doubling trick into a geometric one:
//! each bitmap cell contributes a small polygon whose corners are kept or
//! chamfered according to the neighbourhood, and an iterative cleaning
//! pass welds the per-cell polygons into minimal closed outlines.
//!
//! The outlines have one deliberately preserved property: rasterised at
//! exactly 10 pixels tall they reproduce the input bitmap, and at 20
//! pixels tall the SAA5050-smoothed bitmap.
//!
//! # Pipeline
//!
//! 1. **Bitmap reader** - total pixel access with join-flag edge handling
//! 2. **Corner classifier** - per-cell corner records from the
//!    neighbourhood
//! 3. **Cell emitter** - per-cell polygons on a 4× integer lattice
//! 4. **Path cleaner** - fixed-point merging of coincident boundaries
//! 5. **Path emitter** - surviving rings out as closed contours
//!
//! # Example
//!
//! ```ignore
//! use glyph_outline::{GlyphBitmap, JoinFlags, OutlineTracer};
//!
//! // The letter T.
//! let bitmap = GlyphBitmap::new([
//!     0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0, 0,
//! ]);
//!
//! let mut tracer = OutlineTracer::new();
//! let outline = tracer.trace(&bitmap, JoinFlags::NONE);
//!
//! for contour in &outline.contours {
//!     println!("{} vertices", contour.len());
//! }
//! ```

pub mod bearing;
pub mod bitmap;
pub mod clean;
pub mod constants;
pub mod corners;
pub mod emit;
pub mod metrics;
pub mod pool;
pub mod trace;
pub mod types;

// Re-export commonly used items
pub use bitmap::{GlyphBitmap, JoinFlags, JOIN_ROW};
pub use clean::CleanStats;
pub use constants::{CELL, GRID_HEIGHT, GRID_WIDTH, LATTICE_HEIGHT, LATTICE_WIDTH, POOL_CAPACITY};
pub use corners::{CellCorners, CornerGrid};
pub use pool::{PointId, PointPool};
pub use trace::{trace_glyph, OutlineTracer};
pub use types::{Contour, LogSink, Outline, RepairEvent, RepairKind, RepairSink};

// Shared fixtures for the test suite
#[cfg(test)]
mod test_utils;

// End-to-end pipeline properties
#[cfg(test)]
#[path = "consistency_test.rs"]
mod consistency_test;
