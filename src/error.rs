// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Every failure the logger can report. Construction errors stop the Logger from
// being created; write errors come back from the individual log calls.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
	#[error("Logger name is not set")]
	MissingLoggerName,
	#[error("Timezone is not set")]
	MissingTimezone,
	#[error("Time format is not set")]
	MissingTimeFormat,
	#[error("File output directory is not set")]
	MissingOutDirFile,
	#[error("Console output is not set")]
	MissingOutDirConsole,
	#[error("Log format is not set")]
	MissingLogFormat,
	#[error("Color type is not set")]
	MissingColorType,
	#[error("Invalid timezone: {0}")]
	InvalidTimezone(String),
	#[error("Invalid color type: {0} (expected: background|font)")]
	InvalidColorType(String),
	#[error("Unrecognised timestamp: {0}")]
	InvalidTimestamp(String),
	#[error("Failed to write log file {}: {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("Failed to write to console: {0}")]
	Console(#[source] io::Error),
	#[error("Cannot read config file {}: {source}", .path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("Invalid config file {}: {source}", .path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl LoggerError {
	/// Option field a construction error is about, by its config-file key.
	pub fn field(&self) -> Option<&'static str> {
		match self {
			LoggerError::MissingLoggerName => Some("loggerName"),
			LoggerError::MissingTimezone | LoggerError::InvalidTimezone(_) => Some("timezone"),
			LoggerError::MissingTimeFormat => Some("timeFormat"),
			LoggerError::MissingOutDirFile => Some("outDirFile"),
			LoggerError::MissingOutDirConsole => Some("outDirConsole"),
			LoggerError::MissingLogFormat => Some("logFormat"),
			LoggerError::MissingColorType | LoggerError::InvalidColorType(_) => Some("colorType"),
			_ => None,
		}
	}
}
