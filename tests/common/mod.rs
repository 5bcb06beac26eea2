#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use tintlog::Console;

/// Console that keeps every line in memory.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<String>>>);

impl Capture {
	pub fn lines(&self) -> Vec<String> {
		self.0.lock().unwrap().clone()
	}
}

impl Console for Capture {
	fn write_line(&self, line: &str) -> io::Result<()> {
		self.0.lock().unwrap().push(line.to_string());
		Ok(())
	}
}

/// Removes CSI escape sequences (`ESC [ ... final-byte`).
pub fn strip_ansi(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut chars = input.chars().peekable();
	while let Some(c) = chars.next() {
		if c == '\u{1b}' && chars.peek() == Some(&'[') {
			chars.next();
			// final byte is in 0x40..=0x7E
			while let Some(nc) = chars.next() {
				if ('\u{40}'..='\u{7e}').contains(&nc) {
					break;
				}
			}
			continue;
		}
		out.push(c);
	}
	out
}

/// True for `HH:MM:SS.mmm`.
pub fn is_timestamp(s: &str) -> bool {
	s.len() == 12
		&& s.chars().enumerate().all(|(i, c)| match i {
			2 | 5 => c == ':',
			8 => c == '.',
			_ => c.is_ascii_digit(),
		})
}
