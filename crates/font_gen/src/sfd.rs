//! Spline Font Database serialisation.
//!
//! Writes the traced outlines as a FontForge SFD file. The outline core
//! works on its own integer lattice; the affine map into font units lives
//! entirely here: 25 units per lattice step, shifted down 300 units so
//! the glyph baseline (lattice row 12) lands on y = 0.

use std::io::{self, Write};

use glyph_outline::Outline;

use crate::glyphs::GlyphEntry;

/// Font units per lattice unit.
pub const UNITS_PER_LATTICE: i32 = 25;

/// Downward shift in font units placing the baseline.
pub const DESCENT_UNITS: i32 = 300;

/// Advance width of every glyph: six cells of four lattice units.
pub const ADVANCE_UNITS: i32 = 600;

/// First encoding slot handed to glyphs without a code point.
const PRIVATE_SLOT_BASE: usize = 65536;

/// Write a complete SFD font from traced glyphs, in table order.
pub fn write_font<W: Write>(
	out: &mut W,
	font_name: &str,
	glyphs: &[(&GlyphEntry, Outline)],
) -> io::Result<()> {
	let unencoded = glyphs
		.iter()
		.filter(|(entry, _)| entry.unicode.is_none())
		.count();

	writeln!(out, "SplineFontDB: 3.0")?;
	writeln!(out, "FontName: {font_name}")?;
	writeln!(out, "FullName: {font_name}")?;
	writeln!(out, "FamilyName: {font_name}")?;
	writeln!(out, "Weight: Medium")?;
	writeln!(out, "Version: 000.001")?;
	writeln!(out, "ItalicAngle: 0")?;
	writeln!(out, "UnderlinePosition: -50")?;
	writeln!(out, "UnderlineWidth: 50")?;
	writeln!(out, "Ascent: 700")?;
	writeln!(out, "Descent: {DESCENT_UNITS}")?;
	writeln!(out, "LayerCount: 2")?;
	writeln!(out, "Layer: 0 0 \"Back\" 1")?;
	writeln!(out, "Layer: 1 0 \"Fore\" 0")?;
	writeln!(out, "Encoding: UnicodeBmp")?;
	writeln!(out, "NameList: Adobe Glyph List")?;
	writeln!(out, "DisplaySize: -24")?;
	writeln!(out, "AntiAlias: 1")?;
	writeln!(out, "FitToEm: 1")?;
	writeln!(out, "BeginPrivate: 2")?;
	writeln!(out, " StdHW 5 [100]")?;
	writeln!(out, " StdVW 5 [100]")?;
	writeln!(out, "EndPrivate")?;
	writeln!(out, "BeginChars: {} {}", PRIVATE_SLOT_BASE + unencoded, glyphs.len())?;

	let mut next_private_slot = PRIVATE_SLOT_BASE;
	for (index, &(entry, ref outline)) in glyphs.iter().enumerate() {
		let slot = match entry.unicode {
			Some(code) => code as usize,
			None => {
				let slot = next_private_slot;
				next_private_slot += 1;
				slot
			}
		};
		write_glyph(out, entry, outline, slot, index)?;
	}

	writeln!(out, "EndChars")?;
	writeln!(out, "EndSplineFont")?;
	Ok(())
}

fn write_glyph<W: Write>(
	out: &mut W,
	entry: &GlyphEntry,
	outline: &Outline,
	slot: usize,
	index: usize,
) -> io::Result<()> {
	// SFD wants -1 for glyphs without a code point.
	let code = entry.unicode.map_or(-1, |c| c as i64);

	writeln!(out)?;
	writeln!(out, "StartChar: {}", entry.name)?;
	writeln!(out, "Encoding: {slot} {code} {index}")?;
	writeln!(out, "Width: {ADVANCE_UNITS}")?;
	writeln!(out, "Flags: W")?;
	writeln!(out, "LayerCount: 2")?;
	if !outline.is_empty() {
		writeln!(out, "Fore")?;
		writeln!(out, "SplineSet")?;
		for contour in &outline.contours {
			for (k, p) in contour.points.iter().enumerate() {
				let verb = if k == 0 { "m" } else { "l" };
				writeln!(out, " {} {} {} 1", to_units_x(p.x), to_units_y(p.y), verb)?;
			}
			// Close the contour back onto its first point.
			let first = contour.points[0];
			writeln!(out, " {} {} l 1", to_units_x(first.x), to_units_y(first.y))?;
		}
		writeln!(out, "EndSplineSet")?;
	}
	writeln!(out, "EndChar")?;
	Ok(())
}

#[inline]
fn to_units_x(x: i32) -> i32 {
	x * UNITS_PER_LATTICE
}

#[inline]
fn to_units_y(y: i32) -> i32 {
	y * UNITS_PER_LATTICE - DESCENT_UNITS
}

#[cfg(test)]
#[path = "sfd_test.rs"]
mod sfd_test;
