// ══════════════════════════════════════════════════════════════════════════════
// PALETTE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Severity colors and the styling seam. Every severity, plus the timestamp
// segment, owns a font color and a background color. A Styler turns a color and
// a piece of text into a styled string; the ANSI styler is used for terminals,
// the plain styler leaves text untouched.

use colored::Colorize;
use crate::constants::*;

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Font and background colors bound to one palette key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
	pub font: Rgb,
	pub background: Rgb,
}

/// Palette entry for the timestamp segment, whatever the severity.
pub const DATE: Descriptor = Descriptor { font: DATE_FONT, background: DATE_BACKGROUND };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
	Info,
	Warn,
	Error,
	Debug,
}

impl Severity {
	pub const ALL: [Severity; 4] = [Severity::Info, Severity::Warn, Severity::Error, Severity::Debug];

	pub fn label(self) -> &'static str {
		match self {
			Severity::Info => INFO_LABEL,
			Severity::Warn => WARN_LABEL,
			Severity::Error => ERROR_LABEL,
			Severity::Debug => DEBUG_LABEL,
		}
	}

	pub fn descriptor(self) -> Descriptor {
		match self {
			Severity::Info => Descriptor { font: INFO_FONT, background: INFO_BACKGROUND },
			Severity::Warn => Descriptor { font: WARN_FONT, background: WARN_BACKGROUND },
			Severity::Error => Descriptor { font: ERROR_FONT, background: ERROR_BACKGROUND },
			Severity::Debug => Descriptor { font: DEBUG_FONT, background: DEBUG_BACKGROUND },
		}
	}
}

/// Wraps text in the escape sequences for a color.
pub trait Styler: Send + Sync {
	fn with_font(&self, color: Rgb, text: &str) -> String;
	fn with_background(&self, color: Rgb, text: &str) -> String;
}

/// Truecolor ANSI styling. Background styles also force a bold white font so the
/// text stays readable on the highlight.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
	fn with_font(&self, Rgb(r, g, b): Rgb, text: &str) -> String {
		text.truecolor(r, g, b).to_string()
	}

	fn with_background(&self, Rgb(r, g, b): Rgb, text: &str) -> String {
		text.on_truecolor(r, g, b).white().bold().to_string()
	}
}

/// Identity styling.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
	fn with_font(&self, _color: Rgb, text: &str) -> String {
		text.to_string()
	}

	fn with_background(&self, _color: Rgb, text: &str) -> String {
		text.to_string()
	}
}
