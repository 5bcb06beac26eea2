// ══════════════════════════════════════════════════════════════════════════════
// FORMAT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Line layouts. A log call produces two versions of the same line: a plain one
// for files and uncolored consoles, and a styled one for colored consoles. The
// styled line is assembled from the exact same text segments as the plain line,
// so removing the escape sequences gives the plain line back.
//
//   layout 1: [15:05:09.042] [INFO] - api : started
//   layout 2: INFO [15:05:09.042] | api - started

use std::fmt;
use std::str::FromStr;
use serde::Deserialize;
use crate::error::LoggerError;
use crate::palette::{DATE, Severity, Styler};

/// Numeric `logFormat` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
	Bracket,
	Pipe,
	/// Accepted at construction, produces no output.
	Unsupported(u8),
}

impl From<u8> for LogFormat {
	fn from(value: u8) -> Self {
		match value {
			1 => LogFormat::Bracket,
			2 => LogFormat::Pipe,
			other => LogFormat::Unsupported(other),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
	Background,
	Font,
}

impl FromStr for ColorType {
	type Err = LoggerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"background" | "bg" => Ok(ColorType::Background),
			"font" | "fg" => Ok(ColorType::Font),
			_ => Err(LoggerError::InvalidColorType(s.to_string())),
		}
	}
}

impl fmt::Display for ColorType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ColorType::Background => f.write_str("background"),
			ColorType::Font => f.write_str("font"),
		}
	}
}

/// Everything a line is built from.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
	pub date: &'a str,
	pub severity: Severity,
	pub name: &'a str,
	pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLines {
	pub plain: String,
	pub colored: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
	BackgroundBracket,
	BackgroundPipe,
	FontBracket,
	FontPipe,
}

impl Template {
	/// None for layouts that have no template.
	pub fn select(color: ColorType, format: LogFormat) -> Option<Self> {
		match (color, format) {
			(ColorType::Background, LogFormat::Bracket) => Some(Template::BackgroundBracket),
			(ColorType::Background, LogFormat::Pipe) => Some(Template::BackgroundPipe),
			(ColorType::Font, LogFormat::Bracket) => Some(Template::FontBracket),
			(ColorType::Font, LogFormat::Pipe) => Some(Template::FontPipe),
			(_, LogFormat::Unsupported(_)) => None,
		}
	}

	pub fn render(self, record: &Record<'_>, styler: &dyn Styler) -> LogLines {
		let Record { date, severity, name, message } = *record;
		let level = severity.label();
		let tone = severity.descriptor();

		match self {
			Template::BackgroundBracket => LogLines {
				plain: bracket_line(date, level, name, message),
				colored: [
					styler.with_background(DATE.background, &format!("[{}]", date)),
					styler.with_background(tone.background, &format!(" [{}] ", level)),
					styler.with_background(tone.background, &format!("- {} : ", name)),
					styler.with_font(tone.font, message),
				].concat(),
			},
			Template::BackgroundPipe => LogLines {
				plain: pipe_line(date, level, name, message),
				colored: [
					styler.with_background(tone.background, &format!("{} ", level)),
					styler.with_background(DATE.background, &format!("[{}]", date)),
					styler.with_background(tone.background, &format!(" | {} - ", name)),
					styler.with_font(tone.font, message),
				].concat(),
			},
			Template::FontBracket => LogLines {
				plain: bracket_line(date, level, name, message),
				colored: [
					styler.with_font(DATE.font, &format!("[{}]", date)),
					styler.with_font(tone.font, &format!(" [{}] ", level)),
					styler.with_font(DATE.font, "- "),
					styler.with_font(tone.font, &format!("{} ", name)),
					styler.with_font(DATE.font, ": "),
					styler.with_font(tone.font, message),
				].concat(),
			},
			Template::FontPipe => LogLines {
				plain: pipe_line(date, level, name, message),
				colored: [
					styler.with_font(tone.font, &format!("{} ", level)),
					styler.with_font(DATE.font, &format!("[{}]", date)),
					styler.with_font(DATE.font, " |"),
					styler.with_font(tone.font, &format!(" {} ", name)),
					styler.with_font(DATE.font, "- "),
					styler.with_font(tone.font, message),
				].concat(),
			},
		}
	}
}

fn bracket_line(date: &str, level: &str, name: &str, message: &str) -> String {
	format!("[{}] [{}] - {} : {}", date, level, name, message)
}

fn pipe_line(date: &str, level: &str, name: &str, message: &str) -> String {
	format!("{} [{}] | {} - {}", level, date, name, message)
}
