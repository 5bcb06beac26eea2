// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Named, leveled logger writing timestamped lines to the console and/or a
// per-logger file. The timestamp is taken once, when the Logger is built, and
// every line the instance writes carries that same time.

use std::path::PathBuf;
use chrono_tz::Tz;
use tracing::debug;
use crate::clock::{self, ClockConvention};
use crate::error::LoggerError;
use crate::format::{ColorType, LogFormat, LogLines, Record, Template};
use crate::io::{self, Console, Stdout};
use crate::options::{Options, OutDirConsole, OutDirFile};
use crate::palette::{AnsiStyler, Severity, Styler};

pub struct Logger {
	name: String,
	timezone: Tz,
	clock: ClockConvention,
	file: OutDirFile,
	console: OutDirConsole,
	log_format: LogFormat,
	color_type: ColorType,
	date: String,
	styler: Box<dyn Styler>,
	out: Box<dyn Console>,
}

impl Logger {
	/// Validates `options` and captures the timestamp used by every line.
	///
	/// Fields are checked in declaration order and the first problem wins; the
	/// timezone name is only looked up once every field is present.
	pub fn new(options: Options) -> Result<Self, LoggerError> {
		let name = options.logger_name.filter(|n| !n.is_empty()).ok_or(LoggerError::MissingLoggerName)?;
		let zone = options.timezone.filter(|z| !z.is_empty()).ok_or(LoggerError::MissingTimezone)?;
		let time_format = options.time_format.filter(|&t| t != 0).ok_or(LoggerError::MissingTimeFormat)?;
		let file = options.out_dir_file.ok_or(LoggerError::MissingOutDirFile)?;
		let console = options.out_dir_console.ok_or(LoggerError::MissingOutDirConsole)?;
		let log_format = options.log_format.filter(|&f| f != 0).ok_or(LoggerError::MissingLogFormat)?;
		let color_type = options.color_type.ok_or(LoggerError::MissingColorType)?;
		let timezone = clock::parse_zone(&zone)?;

		let convention = ClockConvention::from_time_format(time_format);
		let date = clock::normalize(&clock::capture(timezone, convention))?;
		debug!(logger = %name, timezone = timezone.name(), date = %date, "logger created");

		Ok(Self {
			name,
			timezone,
			clock: convention,
			file,
			console,
			log_format: LogFormat::from(log_format),
			color_type,
			date,
			styler: Box::new(AnsiStyler),
			out: Box::new(Stdout),
		})
	}

	pub fn with_styler(mut self, styler: impl Styler + 'static) -> Self {
		self.styler = Box::new(styler);
		self
	}

	pub fn with_console(mut self, console: impl Console + 'static) -> Self {
		self.out = Box::new(console);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// `HH:MM:SS.mmm` captured at construction.
	pub fn date(&self) -> &str {
		&self.date
	}

	pub fn timezone(&self) -> Tz {
		self.timezone
	}

	pub fn clock(&self) -> ClockConvention {
		self.clock
	}

	pub fn log_format(&self) -> LogFormat {
		self.log_format
	}

	pub fn color_type(&self) -> ColorType {
		self.color_type
	}

	/// File the logger appends to, if file output is on.
	pub fn log_file(&self) -> Option<PathBuf> {
		self.file.enabled.then(|| io::log_path(&self.file.path, &self.name))
	}

	pub fn info(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Info, message)
	}

	pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Warn, message)
	}

	pub fn error(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Error, message)
	}

	pub fn debug(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Debug, message)
	}

	/// Plain and colored versions of the line for `message`, or None when the
	/// configured layout has no template.
	pub fn lines(&self, severity: Severity, message: &str) -> Option<LogLines> {
		let template = Template::select(self.color_type, self.log_format)?;
		let record = Record { date: &self.date, severity, name: &self.name, message };
		Some(template.render(&record, self.styler.as_ref()))
	}

	/// Writes one line to every enabled sink.
	///
	/// The console is written even when the file append fails; the file error is
	/// returned afterwards.
	pub fn log(&self, severity: Severity, message: &str) -> Result<(), LoggerError> {
		let Some(lines) = self.lines(severity, message) else {
			return Ok(());
		};

		let filed = if self.file.enabled { self.write_to_file(&lines.plain) } else { Ok(()) };

		if self.console.enabled {
			let line = if self.console.colored { &lines.colored } else { &lines.plain };
			self.out.write_line(line).map_err(LoggerError::Console)?;
		}

		filed
	}

	fn write_to_file(&self, line: &str) -> Result<(), LoggerError> {
		io::ensure_dir(&self.file.path)?;
		io::append_line(&io::log_path(&self.file.path, &self.name), line)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::palette::PlainStyler;

	fn options() -> Options {
		Options::new("api", "UTC").console(false, false)
	}

	#[test]
	fn test_date_is_fixed_width() {
		let logger = Logger::new(options()).unwrap();
		let date = logger.date();
		assert_eq!(date.len(), 12);
		assert!(date.chars().enumerate().all(|(i, c)| match i {
			2 | 5 => c == ':',
			8 => c == '.',
			_ => c.is_ascii_digit(),
		}), "got {}", date);
	}

	#[test]
	fn test_time_format_selects_clock() {
		assert_eq!(Logger::new(options().time_format(12)).unwrap().clock(), ClockConvention::Hour12);
		assert_eq!(Logger::new(options().time_format(24)).unwrap().clock(), ClockConvention::Hour24);
	}

	#[test]
	fn test_unsupported_layout_yields_nothing() {
		let logger = Logger::new(options().log_format(3)).unwrap();
		assert_eq!(logger.log_format(), LogFormat::Unsupported(3));
		assert!(logger.lines(Severity::Info, "x").is_none());
		assert!(logger.info("x").is_ok());
	}

	#[test]
	fn test_lines_use_captured_date() {
		let logger = Logger::new(options()).unwrap().with_styler(PlainStyler);
		let lines = logger.lines(Severity::Debug, "x").unwrap();
		assert_eq!(lines.plain, format!("[{}] [DEBUG] - api : x", logger.date()));
		assert_eq!(lines.colored, lines.plain);
	}

	#[test]
	fn test_log_file_only_when_enabled() {
		assert_eq!(Logger::new(options()).unwrap().log_file(), None);
		let logger = Logger::new(options().file(true, "/var/log/app")).unwrap();
		assert_eq!(logger.log_file(), Some(PathBuf::from("/var/log/app/api.log")));
	}
}
