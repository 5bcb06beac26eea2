// ══════════════════════════════════════════════════════════════════════════════
// OPTIONS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Construction input for a Logger. Every field may be absent so that a missing
// setting is reported by name when the Logger is built. The same shape can be
// loaded from a JSON file using camelCase keys:
//
//   {
//     "loggerName": "api",
//     "timezone": "Europe/Berlin",
//     "timeFormat": 24,
//     "outDirFile": { "enabled": true, "path": "./logs" },
//     "outDirConsole": { "enabled": true, "colored": true },
//     "logFormat": 1,
//     "colorType": "background"
//   }

use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_LOG_FORMAT, DEFAULT_TIME_FORMAT};
use crate::error::LoggerError;
use crate::format::ColorType;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutDirFile {
	pub enabled: bool,
	pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OutDirConsole {
	pub enabled: bool,
	pub colored: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
	pub logger_name: Option<String>,
	pub timezone: Option<String>,
	pub time_format: Option<u8>,
	pub out_dir_file: Option<OutDirFile>,
	pub out_dir_console: Option<OutDirConsole>,
	pub log_format: Option<u8>,
	pub color_type: Option<ColorType>,
}

impl Options {
	/// Complete options: 24-hour clock, colored console, layout 1 with
	/// background coloring, file output off.
	pub fn new(name: impl Into<String>, timezone: impl Into<String>) -> Self {
		Self {
			logger_name: Some(name.into()),
			timezone: Some(timezone.into()),
			time_format: Some(DEFAULT_TIME_FORMAT),
			out_dir_file: Some(OutDirFile { enabled: false, path: PathBuf::from(DEFAULT_LOG_DIR) }),
			out_dir_console: Some(OutDirConsole { enabled: true, colored: true }),
			log_format: Some(DEFAULT_LOG_FORMAT),
			color_type: Some(ColorType::Background),
		}
	}

	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	pub fn from_file(path: &Path) -> Result<Self, LoggerError> {
		let text = fs::read_to_string(path)
			.map_err(|source| LoggerError::ConfigRead { path: path.to_path_buf(), source })?;
		Self::from_json(&text).map_err(|source| LoggerError::ConfigParse { path: path.to_path_buf(), source })
	}

	pub fn time_format(mut self, time_format: u8) -> Self {
		self.time_format = Some(time_format);
		self
	}

	pub fn log_format(mut self, log_format: u8) -> Self {
		self.log_format = Some(log_format);
		self
	}

	pub fn color_type(mut self, color_type: ColorType) -> Self {
		self.color_type = Some(color_type);
		self
	}

	pub fn file(mut self, enabled: bool, path: impl Into<PathBuf>) -> Self {
		self.out_dir_file = Some(OutDirFile { enabled, path: path.into() });
		self
	}

	pub fn console(mut self, enabled: bool, colored: bool) -> Self {
		self.out_dir_console = Some(OutDirConsole { enabled, colored });
		self
	}
}
