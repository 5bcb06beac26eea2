// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The two output sinks. Log files are opened in append mode, written and closed
// on every call; no handle is kept between calls. The console is a small trait
// so tests can capture what would have gone to stdout.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use crate::constants::LOG_EXTENSION;
use crate::error::LoggerError;

/// `<dir>/<name>.log`
pub fn log_path(dir: &Path, name: &str) -> PathBuf {
	dir.join(format!("{}.{}", name, LOG_EXTENSION))
}

/// Creates `dir` if it does not exist. Only the last path component is created.
pub fn ensure_dir(dir: &Path) -> Result<(), LoggerError> {
	if dir.exists() {
		return Ok(());
	}
	match fs::create_dir(dir) {
		Ok(()) => {
			debug!(dir = %dir.display(), "created log directory");
			Ok(())
		}
		// Another writer got there first.
		Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
		Err(source) => Err(LoggerError::Write { path: dir.to_path_buf(), source }),
	}
}

/// Appends `line` and a trailing newline to the file at `path`.
pub fn append_line(path: &Path, line: &str) -> Result<(), LoggerError> {
	let write = || -> io::Result<()> {
		let mut file = OpenOptions::new().create(true).append(true).open(path)?;
		file.write_all(format!("{}\n", line).as_bytes())
	};
	write().map_err(|source| LoggerError::Write { path: path.to_path_buf(), source })?;
	trace!(path = %path.display(), bytes = line.len() + 1, "appended log line");
	Ok(())
}

/// Destination for console lines.
pub trait Console: Send + Sync {
	fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Standard output, one line per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
	fn write_line(&self, line: &str) -> io::Result<()> {
		let mut out = io::stdout().lock();
		writeln!(out, "{}", line)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_log_path() {
		assert_eq!(log_path(Path::new("./logs"), "api"), PathBuf::from("./logs/api.log"));
	}

	#[test]
	fn test_ensure_dir_creates_single_level() {
		let tmp = tempfile::tempdir().unwrap();
		let dir = tmp.path().join("logs");
		ensure_dir(&dir).unwrap();
		assert!(dir.is_dir());
		// second call is a no-op
		ensure_dir(&dir).unwrap();
	}

	#[test]
	fn test_ensure_dir_does_not_create_parents() {
		let tmp = tempfile::tempdir().unwrap();
		let dir = tmp.path().join("a").join("b");
		let err = ensure_dir(&dir).unwrap_err();
		assert!(matches!(err, LoggerError::Write { .. }));
		assert!(!tmp.path().join("a").exists());
	}

	#[test]
	fn test_append_line_appends() {
		let tmp = tempfile::tempdir().unwrap();
		let path = tmp.path().join("api.log");
		append_line(&path, "one").unwrap();
		append_line(&path, "two").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
	}
}
