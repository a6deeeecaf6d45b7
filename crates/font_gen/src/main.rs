//! Teletext outline font generator.
//!
//! Traces every glyph in the embedded SAA5050-family table through the
//! outline pipeline and writes a complete Spline Font Database file,
//! ready for FontForge to turn into whatever format is wanted.

mod glyphs;
mod sfd;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glyph_outline::{JoinFlags, Outline, OutlineTracer, RepairEvent};
use rayon::prelude::*;

use glyphs::{GlyphEntry, GLYPHS};

/// Teletext outline font generator.
#[derive(Parser, Debug)]
#[command(name = "gen_font")]
#[command(about = "Builds an SFD outline font from the embedded teletext glyph table")]
struct Args {
	/// Output SFD path (stdout when omitted).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Font name written into the SFD header.
	#[arg(long, default_value = "Telemast")]
	font_name: String,
}

fn main() -> Result<()> {
	let args = Args::parse();

	// Glyphs are independent, so shard across workers with one tracer
	// (and thus one point pool) per worker.
	let traced: Vec<(&GlyphEntry, Outline, Vec<RepairEvent>)> = GLYPHS
		.par_iter()
		.map_init(OutlineTracer::new, |tracer, entry| {
			let mut events: Vec<RepairEvent> = Vec::new();
			let outline = tracer.trace_with_sink(&entry.bitmap(), JoinFlags::NONE, &mut events);
			(entry, outline, events)
		})
		.collect();

	for (entry, _, events) in &traced {
		for event in events {
			eprintln!(
				"warning: {}: repaired {:?} point at ({}, {})",
				entry.name, event.kind, event.at.x, event.at.y
			);
		}
	}

	let outlines: Vec<(&GlyphEntry, Outline)> = traced
		.into_iter()
		.map(|(entry, outline, _)| (entry, outline))
		.collect();

	match &args.output {
		Some(path) => {
			let file =
				File::create(path).with_context(|| format!("creating {}", path.display()))?;
			let mut out = BufWriter::new(file);
			sfd::write_font(&mut out, &args.font_name, &outlines)
				.with_context(|| format!("writing {}", path.display()))?;
			out.flush()?;
			eprintln!("Wrote {} glyphs to {}", outlines.len(), path.display());
		}
		None => {
			let stdout = io::stdout();
			let mut out = BufWriter::new(stdout.lock());
			sfd::write_font(&mut out, &args.font_name, &outlines).context("writing to stdout")?;
			out.flush()?;
		}
	}

	Ok(())
}
