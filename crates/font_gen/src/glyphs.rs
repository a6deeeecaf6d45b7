//! Embedded SAA5050-family glyph bitmaps.
//!
//! The table covers every character generator in the family: the US-ASCII
//! base set plus the English, German, Swedish, Italian, Belgian, Hebrew
//! and Cyrillic variants as the datasheets draw them, along with a number
//! of later additions on the same 5×9 matrix. Where languages disagree on
//! a shape for the same code point, the alternates are carried as
//! unencoded variants.
//!
//! Rows are top-down octal values with the leftmost pixel in the most
//! significant of the five active bits, which keeps the pixel art
//! legible: `0o021` is `# . . . #`.

use glyph_outline::GlyphBitmap;

/// One glyph of the embedded table.
pub struct GlyphEntry {
	/// Bitmap rows, top-down.
	pub rows: [u8; 10],
	/// Code point, or `None` for named variants outside Unicode.
	pub unicode: Option<u32>,
	/// Adobe Glyph List name, used in the SFD output.
	pub name: &'static str,
}

impl GlyphEntry {
	pub fn bitmap(&self) -> GlyphBitmap {
		GlyphBitmap::new(self.rows)
	}
}

const fn g(rows: [u8; 10], unicode: u32, name: &'static str) -> GlyphEntry {
	GlyphEntry {
		rows,
		unicode: Some(unicode),
		name,
	}
}

const fn unencoded(rows: [u8; 10], name: &'static str) -> GlyphEntry {
	GlyphEntry {
		rows,
		unicode: None,
		name,
	}
}

/// The full glyph table, in font order.
#[rustfmt::skip]
pub static GLYPHS: &[GlyphEntry] = &[
	// US-ASCII set (SAA5055)
	g([0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x0020, "space"),
	g([0o004, 0o004, 0o004, 0o004, 0o004, 0o000, 0o004, 0o000, 0o000, 0o000], 0x0021, "exclam"),
	g([0o012, 0o012, 0o012, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x0022, "quotedbl"),
	g([0o012, 0o012, 0o037, 0o012, 0o037, 0o012, 0o012, 0o000, 0o000, 0o000], 0x0023, "numbersign"),
	g([0o016, 0o025, 0o024, 0o016, 0o005, 0o025, 0o016, 0o000, 0o000, 0o000], 0x0024, "dollar"),
	g([0o030, 0o031, 0o002, 0o004, 0o010, 0o023, 0o003, 0o000, 0o000, 0o000], 0x0025, "percent"),
	g([0o010, 0o024, 0o024, 0o010, 0o025, 0o022, 0o015, 0o000, 0o000, 0o000], 0x0026, "ampersand"),
	g([0o004, 0o004, 0o010, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x2019, "quoteright"),
	g([0o002, 0o004, 0o010, 0o010, 0o010, 0o004, 0o002, 0o000, 0o000, 0o000], 0x0028, "parenleft"),
	g([0o010, 0o004, 0o002, 0o002, 0o002, 0o004, 0o010, 0o000, 0o000, 0o000], 0x0029, "parenright"),
	g([0o004, 0o025, 0o016, 0o004, 0o016, 0o025, 0o004, 0o000, 0o000, 0o000], 0x002a, "asterisk"),
	g([0o000, 0o004, 0o004, 0o037, 0o004, 0o004, 0o000, 0o000, 0o000, 0o000], 0x002b, "plus"),
	g([0o000, 0o000, 0o000, 0o000, 0o000, 0o004, 0o004, 0o010, 0o000, 0o000], 0x002c, "comma"),
	g([0o000, 0o000, 0o000, 0o016, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x002d, "hyphen"),
	g([0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o004, 0o000, 0o000, 0o000], 0x002e, "period"),
	g([0o000, 0o001, 0o002, 0o004, 0o010, 0o020, 0o000, 0o000, 0o000, 0o000], 0x002f, "slash"),
	g([0o004, 0o012, 0o021, 0o021, 0o021, 0o012, 0o004, 0o000, 0o000, 0o000], 0x0030, "zero"),
	g([0o004, 0o014, 0o004, 0o004, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x0031, "one"),
	g([0o016, 0o021, 0o001, 0o006, 0o010, 0o020, 0o037, 0o000, 0o000, 0o000], 0x0032, "two"),
	g([0o037, 0o001, 0o002, 0o006, 0o001, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0033, "three"),
	g([0o002, 0o006, 0o012, 0o022, 0o037, 0o002, 0o002, 0o000, 0o000, 0o000], 0x0034, "four"),
	g([0o037, 0o020, 0o036, 0o001, 0o001, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0035, "five"),
	g([0o006, 0o010, 0o020, 0o036, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0036, "six"),
	g([0o037, 0o001, 0o002, 0o004, 0o010, 0o010, 0o010, 0o000, 0o000, 0o000], 0x0037, "seven"),
	g([0o016, 0o021, 0o021, 0o016, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0038, "eight"),
	g([0o016, 0o021, 0o021, 0o017, 0o001, 0o002, 0o014, 0o000, 0o000, 0o000], 0x0039, "nine"),
	g([0o000, 0o000, 0o004, 0o000, 0o000, 0o000, 0o004, 0o000, 0o000, 0o000], 0x003a, "colon"),
	g([0o000, 0o000, 0o004, 0o000, 0o000, 0o004, 0o004, 0o010, 0o000, 0o000], 0x003b, "semicolon"),
	g([0o002, 0o004, 0o010, 0o020, 0o010, 0o004, 0o002, 0o000, 0o000, 0o000], 0x003c, "less"),
	g([0o000, 0o000, 0o037, 0o000, 0o037, 0o000, 0o000, 0o000, 0o000, 0o000], 0x003d, "equal"),
	g([0o010, 0o004, 0o002, 0o001, 0o002, 0o004, 0o010, 0o000, 0o000, 0o000], 0x003e, "greater"),
	g([0o016, 0o021, 0o002, 0o004, 0o004, 0o000, 0o004, 0o000, 0o000, 0o000], 0x003f, "question"),
	g([0o016, 0o021, 0o027, 0o025, 0o027, 0o020, 0o016, 0o000, 0o000, 0o000], 0x0040, "at"),
	g([0o004, 0o012, 0o021, 0o021, 0o037, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0041, "A"),
	g([0o036, 0o021, 0o021, 0o036, 0o021, 0o021, 0o036, 0o000, 0o000, 0o000], 0x0042, "B"),
	g([0o016, 0o021, 0o020, 0o020, 0o020, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0043, "C"),
	g([0o036, 0o021, 0o021, 0o021, 0o021, 0o021, 0o036, 0o000, 0o000, 0o000], 0x0044, "D"),
	g([0o037, 0o020, 0o020, 0o036, 0o020, 0o020, 0o037, 0o000, 0o000, 0o000], 0x0045, "E"),
	g([0o037, 0o020, 0o020, 0o036, 0o020, 0o020, 0o020, 0o000, 0o000, 0o000], 0x0046, "F"),
	g([0o016, 0o021, 0o020, 0o020, 0o023, 0o021, 0o017, 0o000, 0o000, 0o000], 0x0047, "G"),
	g([0o021, 0o021, 0o021, 0o037, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0048, "H"),
	g([0o016, 0o004, 0o004, 0o004, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x0049, "I"),
	g([0o001, 0o001, 0o001, 0o001, 0o001, 0o021, 0o016, 0o000, 0o000, 0o000], 0x004a, "J"),
	g([0o021, 0o022, 0o024, 0o030, 0o024, 0o022, 0o021, 0o000, 0o000, 0o000], 0x004b, "K"),
	g([0o020, 0o020, 0o020, 0o020, 0o020, 0o020, 0o037, 0o000, 0o000, 0o000], 0x004c, "L"),
	g([0o021, 0o033, 0o025, 0o025, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x004d, "M"),
	g([0o021, 0o021, 0o031, 0o025, 0o023, 0o021, 0o021, 0o000, 0o000, 0o000], 0x004e, "N"),
	g([0o016, 0o021, 0o021, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x004f, "O"),
	g([0o036, 0o021, 0o021, 0o036, 0o020, 0o020, 0o020, 0o000, 0o000, 0o000], 0x0050, "P"),
	g([0o016, 0o021, 0o021, 0o021, 0o025, 0o022, 0o015, 0o000, 0o000, 0o000], 0x0051, "Q"),
	g([0o036, 0o021, 0o021, 0o036, 0o024, 0o022, 0o021, 0o000, 0o000, 0o000], 0x0052, "R"),
	g([0o016, 0o021, 0o020, 0o016, 0o001, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0053, "S"),
	g([0o037, 0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x0054, "T"),
	g([0o021, 0o021, 0o021, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0055, "U"),
	g([0o021, 0o021, 0o021, 0o012, 0o012, 0o004, 0o004, 0o000, 0o000, 0o000], 0x0056, "V"),
	g([0o021, 0o021, 0o021, 0o025, 0o025, 0o025, 0o012, 0o000, 0o000, 0o000], 0x0057, "W"),
	g([0o021, 0o021, 0o012, 0o004, 0o012, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0058, "X"),
	g([0o021, 0o021, 0o012, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x0059, "Y"),
	g([0o037, 0o001, 0o002, 0o004, 0o010, 0o020, 0o037, 0o000, 0o000, 0o000], 0x005a, "Z"),
	g([0o017, 0o010, 0o010, 0o010, 0o010, 0o010, 0o017, 0o000, 0o000, 0o000], 0x005b, "bracketleft"),
	g([0o000, 0o020, 0o010, 0o004, 0o002, 0o001, 0o000, 0o000, 0o000, 0o000], 0x005c, "backslash"),
	g([0o036, 0o002, 0o002, 0o002, 0o002, 0o002, 0o036, 0o000, 0o000, 0o000], 0x005d, "bracketright"),
	g([0o004, 0o012, 0o021, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x005e, "asciicircum"),
	g([0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o037, 0o000, 0o000, 0o000], 0x005f, "underscore"),
	g([0o004, 0o004, 0o002, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x201b, "quotereversed"),
	g([0o000, 0o000, 0o016, 0o001, 0o017, 0o021, 0o017, 0o000, 0o000, 0o000], 0x0061, "a"),
	g([0o020, 0o020, 0o036, 0o021, 0o021, 0o021, 0o036, 0o000, 0o000, 0o000], 0x0062, "b"),
	g([0o000, 0o000, 0o017, 0o020, 0o020, 0o020, 0o017, 0o000, 0o000, 0o000], 0x0063, "c"),
	g([0o001, 0o001, 0o017, 0o021, 0o021, 0o021, 0o017, 0o000, 0o000, 0o000], 0x0064, "d"),
	g([0o000, 0o000, 0o016, 0o021, 0o037, 0o020, 0o016, 0o000, 0o000, 0o000], 0x0065, "e"),
	g([0o002, 0o004, 0o004, 0o016, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x0066, "f"),
	g([0o000, 0o000, 0o017, 0o021, 0o021, 0o021, 0o017, 0o001, 0o016, 0o000], 0x0067, "g"),
	g([0o020, 0o020, 0o036, 0o021, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0068, "h"),
	g([0o004, 0o000, 0o014, 0o004, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x0069, "i"),
	g([0o004, 0o000, 0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o010, 0o000], 0x006a, "j"),
	g([0o010, 0o010, 0o011, 0o012, 0o014, 0o012, 0o011, 0o000, 0o000, 0o000], 0x006b, "k"),
	g([0o014, 0o004, 0o004, 0o004, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x006c, "l"),
	g([0o000, 0o000, 0o032, 0o025, 0o025, 0o025, 0o025, 0o000, 0o000, 0o000], 0x006d, "m"),
	g([0o000, 0o000, 0o036, 0o021, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x006e, "n"),
	g([0o000, 0o000, 0o016, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x006f, "o"),
	g([0o000, 0o000, 0o036, 0o021, 0o021, 0o021, 0o036, 0o020, 0o020, 0o000], 0x0070, "p"),
	g([0o000, 0o000, 0o017, 0o021, 0o021, 0o021, 0o017, 0o001, 0o001, 0o000], 0x0071, "q"),
	g([0o000, 0o000, 0o013, 0o014, 0o010, 0o010, 0o010, 0o000, 0o000, 0o000], 0x0072, "r"),
	g([0o000, 0o000, 0o017, 0o020, 0o016, 0o001, 0o036, 0o000, 0o000, 0o000], 0x0073, "s"),
	g([0o004, 0o004, 0o016, 0o004, 0o004, 0o004, 0o002, 0o000, 0o000, 0o000], 0x0074, "t"),
	g([0o000, 0o000, 0o021, 0o021, 0o021, 0o021, 0o017, 0o000, 0o000, 0o000], 0x0075, "u"),
	g([0o000, 0o000, 0o021, 0o021, 0o012, 0o012, 0o004, 0o000, 0o000, 0o000], 0x0076, "v"),
	g([0o000, 0o000, 0o021, 0o021, 0o025, 0o025, 0o012, 0o000, 0o000, 0o000], 0x0077, "w"),
	g([0o000, 0o000, 0o021, 0o012, 0o004, 0o012, 0o021, 0o000, 0o000, 0o000], 0x0078, "x"),
	g([0o000, 0o000, 0o021, 0o021, 0o021, 0o021, 0o017, 0o001, 0o016, 0o000], 0x0079, "y"),
	g([0o000, 0o000, 0o037, 0o002, 0o004, 0o010, 0o037, 0o000, 0o000, 0o000], 0x007a, "z"),
	g([0o003, 0o004, 0o004, 0o010, 0o004, 0o004, 0o003, 0o000, 0o000, 0o000], 0x007b, "braceleft"),
	g([0o004, 0o004, 0o004, 0o000, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x00a6, "brokenbar"),
	g([0o030, 0o004, 0o004, 0o002, 0o004, 0o004, 0o030, 0o000, 0o000, 0o000], 0x007d, "braceright"),
	g([0o010, 0o025, 0o002, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x007e, "asciitilde"),
	g([0o037, 0o037, 0o037, 0o037, 0o037, 0o037, 0o037, 0o000, 0o000, 0o000], 0x2588, "block"),

	// English extras (SAA5050)
	g([0o006, 0o011, 0o010, 0o034, 0o010, 0o010, 0o037, 0o000, 0o000, 0o000], 0x00a3, "sterling"),
	g([0o004, 0o004, 0o004, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x0027, "quotesingle"),
	g([0o000, 0o004, 0o010, 0o037, 0o010, 0o004, 0o000, 0o000, 0o000, 0o000], 0x2190, "arrowleft"),
	g([0o020, 0o020, 0o020, 0o020, 0o026, 0o001, 0o002, 0o004, 0o007, 0o000], 0x00bd, "onehalf"),
	g([0o000, 0o004, 0o002, 0o037, 0o002, 0o004, 0o000, 0o000, 0o000, 0o000], 0x2192, "arrowright"),
	g([0o000, 0o004, 0o016, 0o025, 0o004, 0o004, 0o000, 0o000, 0o000, 0o000], 0x2191, "arrowup"),
	g([0o000, 0o000, 0o000, 0o037, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x2013, "endash"),
	g([0o010, 0o010, 0o010, 0o010, 0o011, 0o003, 0o005, 0o007, 0o001, 0o000], 0x00bc, "onequarter"),
	g([0o012, 0o012, 0o012, 0o012, 0o012, 0o012, 0o012, 0o000, 0o000, 0o000], 0x2016, "dblverticalbar"),
	g([0o030, 0o004, 0o030, 0o004, 0o031, 0o003, 0o005, 0o007, 0o001, 0o000], 0x00be, "threequarters"),
	g([0o000, 0o004, 0o000, 0o037, 0o000, 0o004, 0o000, 0o000, 0o000, 0o000], 0x00f7, "divide"),

	// German extras (SAA5051)
	unencoded([0o000, 0o000, 0o000, 0o000, 0o000, 0o010, 0o010, 0o020, 0o000, 0o000], "comma.alt"),
	unencoded([0o000, 0o000, 0o000, 0o000, 0o000, 0o014, 0o014, 0o000, 0o000, 0o000], "period.alt"),
	unencoded([0o000, 0o000, 0o000, 0o010, 0o000, 0o000, 0o010, 0o000, 0o000, 0o000], "colon.alt"),
	unencoded([0o000, 0o000, 0o010, 0o000, 0o000, 0o010, 0o010, 0o020, 0o000, 0o000], "semicolon.alt"),
	g([0o016, 0o021, 0o020, 0o016, 0o021, 0o016, 0o001, 0o021, 0o016, 0o000], 0x00a7, "section"),
	g([0o012, 0o000, 0o016, 0o021, 0o037, 0o021, 0o021, 0o000, 0o000, 0o000], 0x00c4, "Adieresis"),
	g([0o012, 0o000, 0o016, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x00d6, "Odieresis"),
	g([0o012, 0o000, 0o021, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x00dc, "Udieresis"),
	g([0o006, 0o011, 0o006, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x00b0, "degree"),
	g([0o012, 0o000, 0o016, 0o001, 0o017, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00e4, "adieresis"),
	g([0o000, 0o012, 0o000, 0o016, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x00f6, "odieresis"),
	g([0o000, 0o012, 0o000, 0o021, 0o021, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00fc, "udieresis"),
	g([0o014, 0o022, 0o022, 0o026, 0o021, 0o021, 0o026, 0o020, 0o020, 0o000], 0x00df, "germandbls"),

	// Swedish extras (SAA5052)
	g([0o000, 0o000, 0o021, 0o016, 0o012, 0o016, 0o021, 0o000, 0o000, 0o000], 0x00a4, "currency"),
	g([0o002, 0o004, 0o037, 0o020, 0o036, 0o020, 0o037, 0o000, 0o000, 0o000], 0x00c9, "Eacute"),
	unencoded([0o016, 0o011, 0o011, 0o011, 0o011, 0o011, 0o016, 0o000, 0o000, 0o000], "D.alt"),
	unencoded([0o010, 0o010, 0o010, 0o010, 0o010, 0o010, 0o017, 0o000, 0o000, 0o000], "L.alt"),
	g([0o004, 0o000, 0o016, 0o021, 0o037, 0o021, 0o021, 0o000, 0o000, 0o000], 0x00c5, "Aring"),
	g([0o002, 0o004, 0o016, 0o021, 0o037, 0o020, 0o016, 0o000, 0o000, 0o000], 0x00e9, "eacute"),
	g([0o004, 0o000, 0o016, 0o001, 0o017, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00e5, "aring"),

	// Italian extras (SAA5053)
	g([0o000, 0o000, 0o017, 0o020, 0o020, 0o020, 0o017, 0o002, 0o004, 0o000], 0x00e7, "ccedilla"),
	g([0o010, 0o004, 0o021, 0o021, 0o021, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00f9, "ugrave"),
	g([0o010, 0o004, 0o016, 0o001, 0o017, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00e0, "agrave"),
	g([0o010, 0o004, 0o000, 0o016, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x00f2, "ograve"),
	g([0o010, 0o004, 0o016, 0o021, 0o037, 0o020, 0o016, 0o000, 0o000, 0o000], 0x00e8, "egrave"),
	g([0o010, 0o004, 0o000, 0o014, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x00ec, "igrave"),

	// Belgian extras (SAA5054)
	g([0o012, 0o000, 0o014, 0o004, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x00ef, "idieresis"),
	g([0o012, 0o000, 0o016, 0o021, 0o037, 0o020, 0o016, 0o000, 0o000, 0o000], 0x00eb, "edieresis"),
	g([0o004, 0o012, 0o016, 0o021, 0o037, 0o020, 0o016, 0o000, 0o000, 0o000], 0x00ea, "ecircumflex"),
	unencoded([0o004, 0o002, 0o021, 0o021, 0o021, 0o021, 0o017, 0o000, 0o000, 0o000], "ugrave.alt"),
	g([0o004, 0o012, 0o000, 0o014, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], 0x00ee, "icircumflex"),
	g([0o004, 0o012, 0o016, 0o001, 0o017, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00e2, "acircumflex"),
	g([0o004, 0o012, 0o016, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x00f4, "ocircumflex"),
	g([0o004, 0o012, 0o000, 0o021, 0o021, 0o021, 0o017, 0o000, 0o000, 0o000], 0x00fb, "ucircumflex"),
	unencoded([0o000, 0o000, 0o017, 0o020, 0o020, 0o020, 0o017, 0o002, 0o006, 0o000], "ccedilla.alt"),

	// Hebrew set (SAA5056)
	g([0o000, 0o021, 0o011, 0o025, 0o022, 0o021, 0o021, 0o000, 0o000, 0o000], 0x05d0, "afii57664"), // alef
	g([0o000, 0o016, 0o002, 0o002, 0o002, 0o002, 0o037, 0o000, 0o000, 0o000], 0x05d1, "afii57665"), // bet
	g([0o000, 0o003, 0o001, 0o001, 0o003, 0o005, 0o011, 0o000, 0o000, 0o000], 0x05d2, "afii57666"), // gimel
	g([0o000, 0o037, 0o002, 0o002, 0o002, 0o002, 0o002, 0o000, 0o000, 0o000], 0x05d3, "afii57667"), // dalet
	g([0o000, 0o037, 0o001, 0o001, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x05d4, "afii57668"), // he
	g([0o000, 0o014, 0o004, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x05d5, "afii57669"), // vav
	g([0o000, 0o016, 0o004, 0o010, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x05d6, "afii57670"), // zayin
	g([0o000, 0o037, 0o021, 0o021, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x05d7, "afii57671"), // het
	g([0o000, 0o021, 0o023, 0o025, 0o021, 0o021, 0o037, 0o000, 0o000, 0o000], 0x05d8, "afii57672"), // tet
	g([0o000, 0o014, 0o004, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x05d9, "afii57673"), // yod
	g([0o000, 0o037, 0o001, 0o001, 0o001, 0o001, 0o001, 0o001, 0o000, 0o000], 0x05da, "afii57674"), // kaffinal
	g([0o000, 0o037, 0o001, 0o001, 0o001, 0o001, 0o037, 0o000, 0o000, 0o000], 0x05db, "afii57675"), // kaf
	g([0o020, 0o037, 0o001, 0o001, 0o001, 0o002, 0o014, 0o000, 0o000, 0o000], 0x05dc, "afii57676"), // lamed
	g([0o000, 0o037, 0o021, 0o021, 0o021, 0o021, 0o037, 0o000, 0o000, 0o000], 0x05dd, "afii57677"), // memfinal
	g([0o000, 0o026, 0o011, 0o021, 0o021, 0o021, 0o027, 0o000, 0o000, 0o000], 0x05de, "afii57678"), // mem
	g([0o000, 0o014, 0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o000], 0x05df, "afii57679"), // nunfinal
	g([0o000, 0o006, 0o002, 0o002, 0o002, 0o002, 0o016, 0o000, 0o000, 0o000], 0x05e0, "afii57680"), // nun
	g([0o000, 0o037, 0o011, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x05e1, "afii57681"), // samekh
	g([0o000, 0o011, 0o011, 0o011, 0o011, 0o012, 0o034, 0o000, 0o000, 0o000], 0x05e2, "afii57682"), // ayin
	g([0o000, 0o037, 0o011, 0o015, 0o001, 0o001, 0o001, 0o001, 0o000, 0o000], 0x05e3, "afii57683"), // pefinal
	g([0o000, 0o037, 0o011, 0o015, 0o001, 0o001, 0o037, 0o000, 0o000, 0o000], 0x05e4, "afii57684"), // pe
	g([0o000, 0o031, 0o012, 0o014, 0o010, 0o010, 0o010, 0o010, 0o000, 0o000], 0x05e5, "afii57685"), // tsadifin
	g([0o000, 0o021, 0o021, 0o012, 0o004, 0o002, 0o037, 0o000, 0o000, 0o000], 0x05e6, "afii57686"), // tsadi
	g([0o000, 0o037, 0o001, 0o011, 0o011, 0o012, 0o010, 0o010, 0o000, 0o000], 0x05e7, "afii57687"), // qof
	g([0o000, 0o037, 0o001, 0o001, 0o001, 0o001, 0o001, 0o000, 0o000, 0o000], 0x05e8, "afii57688"), // resh
	g([0o000, 0o025, 0o025, 0o025, 0o031, 0o021, 0o036, 0o000, 0o000, 0o000], 0x05e9, "afii57689"), // shin
	g([0o000, 0o017, 0o011, 0o011, 0o011, 0o011, 0o031, 0o000, 0o000, 0o000], 0x05ea, "afii57690"), // tav
	unencoded([0o000, 0o000, 0o025, 0o025, 0o016, 0o000, 0o000, 0o000, 0o000, 0o000], "oldsheqel"),

	// Cyrillic set (SAA5057)
	g([0o000, 0o000, 0o021, 0o021, 0o035, 0o025, 0o035, 0o000, 0o000, 0o000], 0x044b, "afii10093"), // yeru
	g([0o022, 0o025, 0o025, 0o035, 0o025, 0o025, 0o022, 0o000, 0o000, 0o000], 0x042e, "afii10048"), // Iu
	g([0o016, 0o021, 0o021, 0o021, 0o037, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0410, "afii10017"), // A
	g([0o037, 0o020, 0o020, 0o037, 0o021, 0o021, 0o037, 0o000, 0o000, 0o000], 0x0411, "afii10018"), // Be
	g([0o022, 0o022, 0o022, 0o022, 0o022, 0o022, 0o037, 0o001, 0o000, 0o000], 0x0426, "afii10040"), // Tse
	g([0o006, 0o012, 0o012, 0o012, 0o012, 0o012, 0o037, 0o021, 0o000, 0o000], 0x0414, "afii10021"), // De
	g([0o037, 0o020, 0o020, 0o036, 0o020, 0o020, 0o037, 0o000, 0o000, 0o000], 0x0415, "afii10022"), // Ie
	g([0o004, 0o037, 0o025, 0o025, 0o025, 0o037, 0o004, 0o000, 0o000, 0o000], 0x0424, "afii10038"), // Ef
	g([0o037, 0o020, 0o020, 0o020, 0o020, 0o020, 0o020, 0o000, 0o000, 0o000], 0x0413, "afii10020"), // Ghe
	g([0o021, 0o021, 0o012, 0o004, 0o012, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0425, "afii10039"), // Ha
	g([0o021, 0o021, 0o023, 0o025, 0o031, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0418, "afii10026"), // I
	g([0o025, 0o021, 0o023, 0o025, 0o031, 0o021, 0o021, 0o000, 0o000, 0o000], 0x0419, "afii10027"), // Ishort
	g([0o021, 0o022, 0o024, 0o030, 0o024, 0o022, 0o021, 0o000, 0o000, 0o000], 0x041a, "afii10028"), // Ka
	g([0o007, 0o011, 0o011, 0o011, 0o011, 0o011, 0o031, 0o000, 0o000, 0o000], 0x041b, "afii10029"), // El
	g([0o021, 0o033, 0o025, 0o025, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x041c, "afii10030"), // Em
	g([0o021, 0o021, 0o021, 0o037, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x041d, "afii10031"), // En
	g([0o016, 0o021, 0o021, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x041e, "afii10032"), // O
	g([0o037, 0o021, 0o021, 0o021, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x041f, "afii10033"), // Pe
	g([0o017, 0o021, 0o021, 0o017, 0o005, 0o011, 0o021, 0o000, 0o000, 0o000], 0x042f, "afii10049"), // Ya
	g([0o036, 0o021, 0o021, 0o036, 0o020, 0o020, 0o020, 0o000, 0o000, 0o000], 0x0420, "afii10034"), // Er
	g([0o016, 0o021, 0o020, 0o020, 0o020, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0421, "afii10035"), // Es
	g([0o037, 0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x0422, "afii10036"), // Te
	g([0o021, 0o021, 0o021, 0o037, 0o001, 0o001, 0o037, 0o000, 0o000, 0o000], 0x0423, "afii10037"), // U
	g([0o025, 0o025, 0o025, 0o016, 0o025, 0o025, 0o025, 0o000, 0o000, 0o000], 0x0416, "afii10024"), // Zhe
	g([0o036, 0o021, 0o021, 0o036, 0o021, 0o021, 0o036, 0o000, 0o000, 0o000], 0x0412, "afii10019"), // Ve
	g([0o020, 0o020, 0o020, 0o037, 0o021, 0o021, 0o037, 0o000, 0o000, 0o000], 0x042c, "afii10046"), // Soft
	g([0o030, 0o010, 0o010, 0o017, 0o011, 0o011, 0o017, 0o000, 0o000, 0o000], 0x042a, "afii10044"), // Hard
	g([0o016, 0o021, 0o001, 0o006, 0o001, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0417, "afii10025"), // Ze
	g([0o025, 0o025, 0o025, 0o025, 0o025, 0o025, 0o037, 0o000, 0o000, 0o000], 0x0428, "afii10042"), // Sha
	g([0o014, 0o022, 0o001, 0o007, 0o001, 0o022, 0o014, 0o000, 0o000, 0o000], 0x042d, "afii10047"), // E
	g([0o025, 0o025, 0o025, 0o025, 0o025, 0o025, 0o037, 0o001, 0o000, 0o000], 0x0429, "afii10043"), // Shcha
	g([0o021, 0o021, 0o021, 0o037, 0o001, 0o001, 0o001, 0o000, 0o000, 0o000], 0x0427, "afii10041"), // Che
	g([0o021, 0o021, 0o021, 0o035, 0o025, 0o025, 0o035, 0o000, 0o000, 0o000], 0x042b, "afii10045"), // Yeru
	g([0o000, 0o000, 0o022, 0o025, 0o035, 0o025, 0o022, 0o000, 0o000, 0o000], 0x044e, "afii10096"), // yu
	g([0o000, 0o000, 0o016, 0o001, 0o017, 0o021, 0o017, 0o000, 0o000, 0o000], 0x0430, "afii10065"), // a
	g([0o016, 0o020, 0o036, 0o021, 0o021, 0o021, 0o036, 0o000, 0o000, 0o000], 0x0431, "afii10066"), // be
	g([0o000, 0o000, 0o022, 0o022, 0o022, 0o022, 0o037, 0o001, 0o000, 0o000], 0x0446, "afii10088"), // tse
	g([0o000, 0o000, 0o006, 0o012, 0o012, 0o012, 0o037, 0o021, 0o000, 0o000], 0x0434, "afii10069"), // de
	g([0o000, 0o000, 0o016, 0o021, 0o037, 0o020, 0o016, 0o000, 0o000, 0o000], 0x0435, "afii10070"), // ie
	g([0o000, 0o004, 0o016, 0o025, 0o025, 0o025, 0o016, 0o004, 0o000, 0o000], 0x0444, "afii10086"), // ef
	g([0o000, 0o000, 0o037, 0o020, 0o020, 0o020, 0o020, 0o000, 0o000, 0o000], 0x0433, "afii10068"), // ghe
	g([0o000, 0o000, 0o021, 0o012, 0o004, 0o012, 0o021, 0o000, 0o000, 0o000], 0x0445, "afii10087"), // ha
	g([0o000, 0o000, 0o021, 0o023, 0o025, 0o031, 0o021, 0o000, 0o000, 0o000], 0x0438, "afii10074"), // i
	g([0o000, 0o004, 0o021, 0o023, 0o025, 0o031, 0o021, 0o000, 0o000, 0o000], 0x0439, "afii10075"), // ishort
	g([0o000, 0o000, 0o021, 0o022, 0o034, 0o022, 0o021, 0o000, 0o000, 0o000], 0x043a, "afii10076"), // ka
	g([0o000, 0o000, 0o007, 0o011, 0o011, 0o011, 0o031, 0o000, 0o000, 0o000], 0x043b, "afii10077"), // el
	g([0o000, 0o000, 0o021, 0o033, 0o025, 0o021, 0o021, 0o000, 0o000, 0o000], 0x043c, "afii10078"), // em
	g([0o000, 0o000, 0o021, 0o021, 0o037, 0o021, 0o021, 0o000, 0o000, 0o000], 0x043d, "afii10079"), // en
	g([0o000, 0o000, 0o016, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], 0x043e, "afii10080"), // o
	g([0o000, 0o000, 0o037, 0o021, 0o021, 0o021, 0o021, 0o000, 0o000, 0o000], 0x043f, "afii10081"), // pe
	g([0o000, 0o000, 0o017, 0o021, 0o017, 0o005, 0o031, 0o000, 0o000, 0o000], 0x044f, "afii10097"), // ya
	g([0o000, 0o000, 0o036, 0o021, 0o021, 0o021, 0o036, 0o020, 0o020, 0o000], 0x0440, "afii10082"), // er
	g([0o000, 0o000, 0o016, 0o021, 0o020, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0441, "afii10083"), // es
	g([0o000, 0o000, 0o037, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x0442, "afii10084"), // te
	g([0o000, 0o000, 0o021, 0o021, 0o021, 0o021, 0o017, 0o001, 0o016, 0o000], 0x0443, "afii10085"), // u
	g([0o000, 0o000, 0o025, 0o025, 0o016, 0o025, 0o025, 0o000, 0o000, 0o000], 0x0436, "afii10072"), // zhe
	g([0o000, 0o000, 0o036, 0o021, 0o036, 0o021, 0o036, 0o000, 0o000, 0o000], 0x0432, "afii10067"), // ve
	g([0o000, 0o000, 0o020, 0o020, 0o036, 0o021, 0o036, 0o000, 0o000, 0o000], 0x044c, "afii10094"), // soft
	g([0o000, 0o000, 0o030, 0o010, 0o016, 0o011, 0o016, 0o000, 0o000, 0o000], 0x044a, "afii10092"), // hard
	g([0o000, 0o000, 0o016, 0o021, 0o006, 0o021, 0o016, 0o000, 0o000, 0o000], 0x0437, "afii10073"), // ze
	g([0o000, 0o000, 0o025, 0o025, 0o025, 0o025, 0o037, 0o000, 0o000, 0o000], 0x0448, "afii10090"), // sha
	g([0o000, 0o000, 0o014, 0o022, 0o006, 0o022, 0o014, 0o000, 0o000, 0o000], 0x044d, "afii10095"), // e
	g([0o000, 0o000, 0o025, 0o025, 0o025, 0o025, 0o037, 0o001, 0o000, 0o000], 0x0449, "afii10091"), // shcha
	g([0o000, 0o000, 0o021, 0o021, 0o021, 0o017, 0o001, 0o000, 0o000, 0o000], 0x0447, "afii10089"), // che

	// Later additions outside the SAA5050 family
	g([0o010, 0o004, 0o002, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x0060, "grave"),
	g([0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x007c, "bar"),
	g([0o004, 0o000, 0o004, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], 0x00a1, "exclamdown"),
	g([0o000, 0o004, 0o017, 0o024, 0o024, 0o024, 0o017, 0o004, 0o000, 0o000], 0x00a2, "cent"),
	g([0o021, 0o012, 0o037, 0o004, 0o037, 0o004, 0o004, 0o000, 0o000, 0o000], 0x00a5, "yen"),
	g([0o022, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x00a8, "dieresis"),
	g([0o037, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x00af, "macron"),
	g([0o004, 0o004, 0o037, 0o004, 0o004, 0o000, 0o037, 0o000, 0o000, 0o000], 0x00b1, "plusminus"),
	g([0o002, 0o004, 0o010, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x00b4, "acute"),
	g([0o000, 0o000, 0o022, 0o022, 0o022, 0o022, 0o035, 0o020, 0o020, 0o000], 0x00b5, "uni00b5"), // micro
	g([0o015, 0o025, 0o025, 0o015, 0o005, 0o005, 0o005, 0o000, 0o000, 0o000], 0x00b6, "paragraph"),
	g([0o000, 0o000, 0o000, 0o004, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x00b7, "periodcentered"),
	g([0o004, 0o000, 0o004, 0o004, 0o010, 0o021, 0o016, 0o000, 0o000, 0o000], 0x00bf, "questiondown"),
	g([0o000, 0o021, 0o012, 0o004, 0o012, 0o021, 0o000, 0o000, 0o000, 0o000], 0x00d7, "multiply"),
	g([0o002, 0o004, 0o004, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x2018, "quoteleft"),
	g([0o000, 0o000, 0o000, 0o000, 0o000, 0o004, 0o004, 0o010, 0o000, 0o000], 0x201a, "quotesinglbase"),
	g([0o011, 0o022, 0o022, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x201c, "quotedblleft"),
	g([0o011, 0o011, 0o022, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x201d, "quotedblright"),
	g([0o000, 0o000, 0o000, 0o000, 0o000, 0o011, 0o011, 0o022, 0o000, 0o000], 0x201e, "quotedblbase"),
	g([0o022, 0o022, 0o011, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000], 0x201f, "uni201F"),
	g([0o000, 0o004, 0o004, 0o025, 0o016, 0o004, 0o000, 0o000, 0o000, 0o000], 0x2193, "arrowdown"),

	// Small capitals
	unencoded([0o000, 0o000, 0o004, 0o012, 0o021, 0o037, 0o021, 0o000, 0o000, 0o000], "a.sc"),
	unencoded([0o000, 0o000, 0o036, 0o021, 0o036, 0o021, 0o036, 0o000, 0o000, 0o000], "b.sc"),
	unencoded([0o000, 0o000, 0o016, 0o021, 0o020, 0o021, 0o016, 0o000, 0o000, 0o000], "c.sc"),
	unencoded([0o000, 0o000, 0o036, 0o021, 0o021, 0o021, 0o036, 0o000, 0o000, 0o000], "d.sc"),
	unencoded([0o000, 0o000, 0o037, 0o020, 0o036, 0o020, 0o037, 0o000, 0o000, 0o000], "e.sc"),
	unencoded([0o000, 0o000, 0o037, 0o020, 0o036, 0o020, 0o020, 0o000, 0o000, 0o000], "f.sc"),
	unencoded([0o000, 0o000, 0o017, 0o020, 0o023, 0o021, 0o017, 0o000, 0o000, 0o000], "g.sc"),
	unencoded([0o000, 0o000, 0o021, 0o021, 0o037, 0o021, 0o021, 0o000, 0o000, 0o000], "h.sc"),
	unencoded([0o000, 0o000, 0o016, 0o004, 0o004, 0o004, 0o016, 0o000, 0o000, 0o000], "i.sc"),
	unencoded([0o000, 0o000, 0o001, 0o001, 0o001, 0o021, 0o016, 0o000, 0o000, 0o000], "j.sc"),
	unencoded([0o000, 0o000, 0o021, 0o022, 0o034, 0o022, 0o021, 0o000, 0o000, 0o000], "k.sc"),
	unencoded([0o000, 0o000, 0o020, 0o020, 0o020, 0o020, 0o037, 0o000, 0o000, 0o000], "l.sc"),
	unencoded([0o000, 0o000, 0o021, 0o033, 0o025, 0o021, 0o021, 0o000, 0o000, 0o000], "m.sc"),
	unencoded([0o000, 0o000, 0o021, 0o031, 0o025, 0o023, 0o021, 0o000, 0o000, 0o000], "n.sc"),
	unencoded([0o000, 0o000, 0o016, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], "o.sc"),
	unencoded([0o000, 0o000, 0o036, 0o021, 0o036, 0o020, 0o020, 0o000, 0o000, 0o000], "p.sc"),
	unencoded([0o000, 0o000, 0o016, 0o021, 0o025, 0o022, 0o015, 0o000, 0o000, 0o000], "q.sc"),
	unencoded([0o000, 0o000, 0o036, 0o021, 0o036, 0o022, 0o021, 0o000, 0o000, 0o000], "r.sc"),
	unencoded([0o000, 0o000, 0o017, 0o020, 0o016, 0o001, 0o036, 0o000, 0o000, 0o000], "s.sc"),
	unencoded([0o000, 0o000, 0o037, 0o004, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], "t.sc"),
	unencoded([0o000, 0o000, 0o021, 0o021, 0o021, 0o021, 0o016, 0o000, 0o000, 0o000], "u.sc"),
	unencoded([0o000, 0o000, 0o021, 0o021, 0o012, 0o012, 0o004, 0o000, 0o000, 0o000], "v.sc"),
	unencoded([0o000, 0o000, 0o021, 0o021, 0o025, 0o025, 0o012, 0o000, 0o000, 0o000], "w.sc"),
	unencoded([0o000, 0o000, 0o021, 0o012, 0o004, 0o012, 0o021, 0o000, 0o000, 0o000], "x.sc"),
	unencoded([0o000, 0o000, 0o021, 0o012, 0o004, 0o004, 0o004, 0o000, 0o000, 0o000], "y.sc"),
	unencoded([0o000, 0o000, 0o037, 0o002, 0o004, 0o010, 0o037, 0o000, 0o000, 0o000], "z.sc"),
];

#[cfg(test)]
#[path = "glyphs_test.rs"]
mod glyphs_test;
