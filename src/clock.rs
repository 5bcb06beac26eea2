// ══════════════════════════════════════════════════════════════════════════════
// CLOCK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Timezone-aware timestamp capture. A moment is first rendered the way a person
// in that zone would read it (date, wall-clock time, 12 or 24-hour convention),
// then reduced to the fixed-width HH:MM:SS.mmm form used in log lines.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use crate::constants::HOUR12;
use crate::error::LoggerError;

const RAW_12H: &str = "%m/%d/%Y, %I:%M:%S%.3f %p";
const RAW_24H: &str = "%m/%d/%Y, %H:%M:%S%.3f";
const NORMALIZED: &str = "%H:%M:%S%.3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockConvention {
	Hour12,
	Hour24,
}

impl ClockConvention {
	/// `12` picks the 12-hour clock, anything else the 24-hour one.
	pub fn from_time_format(time_format: u8) -> Self {
		if time_format == HOUR12 { ClockConvention::Hour12 } else { ClockConvention::Hour24 }
	}

	fn pattern(self) -> &'static str {
		match self {
			ClockConvention::Hour12 => RAW_12H,
			ClockConvention::Hour24 => RAW_24H,
		}
	}
}

/// Returns true if `name` is a known IANA zone, e.g. `Europe/Berlin`.
pub fn is_valid_zone(name: &str) -> bool {
	name.parse::<Tz>().is_ok()
}

pub fn parse_zone(name: &str) -> Result<Tz, LoggerError> {
	name.parse::<Tz>().map_err(|_| LoggerError::InvalidTimezone(name.to_string()))
}

/// Renders the current moment as local wall-clock text in `zone`.
pub fn capture(zone: Tz, clock: ClockConvention) -> String {
	capture_at(Utc::now(), zone, clock)
}

pub fn capture_at(instant: DateTime<Utc>, zone: Tz, clock: ClockConvention) -> String {
	instant.with_timezone(&zone).format(clock.pattern()).to_string()
}

/// Reduces a captured timestamp to `HH:MM:SS.mmm` on the 24-hour clock.
pub fn normalize(raw: &str) -> Result<String, LoggerError> {
	let trimmed = raw.trim();
	let pattern = if trimmed.ends_with("AM") || trimmed.ends_with("PM") { RAW_12H } else { RAW_24H };
	let parsed = NaiveDateTime::parse_from_str(trimmed, pattern)
		.map_err(|_| LoggerError::InvalidTimestamp(raw.to_string()))?;
	Ok(parsed.format(NORMALIZED).to_string())
}
