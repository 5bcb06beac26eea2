// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Fixed values shared across the crate.
// - Palette RGB triples for every severity and the timestamp segment
// - Level labels as they appear in a log line
// - File naming and option defaults

use crate::palette::Rgb;

pub const INFO_FONT: Rgb = Rgb(65, 198, 50);
pub const INFO_BACKGROUND: Rgb = Rgb(65, 198, 50);

pub const WARN_FONT: Rgb = Rgb(255, 254, 50);
pub const WARN_BACKGROUND: Rgb = Rgb(255, 131, 50);

pub const ERROR_FONT: Rgb = Rgb(255, 50, 50);
pub const ERROR_BACKGROUND: Rgb = Rgb(255, 50, 50);

pub const DEBUG_FONT: Rgb = Rgb(64, 81, 255);
pub const DEBUG_BACKGROUND: Rgb = Rgb(64, 81, 255);

pub const DATE_FONT: Rgb = Rgb(95, 113, 131);
pub const DATE_BACKGROUND: Rgb = Rgb(44, 62, 80);

pub const INFO_LABEL: &str = "INFO";
pub const WARN_LABEL: &str = "WARN";
pub const ERROR_LABEL: &str = "ERROR";
pub const DEBUG_LABEL: &str = "DEBUG";

pub const LOG_EXTENSION: &str = "log";

pub const DEFAULT_LOG_DIR: &str = "./logs";
pub const DEFAULT_TIME_FORMAT: u8 = 24;
pub const DEFAULT_LOG_FORMAT: u8 = 1;

/// `timeFormat` value selecting the 12-hour clock.
pub const HOUR12: u8 = 12;
