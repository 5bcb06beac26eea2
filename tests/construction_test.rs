mod common;

use common::is_timestamp;
use tintlog::{ColorType, Logger, LoggerError, Options};

const FIELDS: [&str; 7] = [
	"loggerName",
	"timezone",
	"timeFormat",
	"outDirFile",
	"outDirConsole",
	"logFormat",
	"colorType",
];

fn clear(options: &mut Options, field: &str) {
	match field {
		"loggerName" => options.logger_name = None,
		"timezone" => options.timezone = None,
		"timeFormat" => options.time_format = None,
		"outDirFile" => options.out_dir_file = None,
		"outDirConsole" => options.out_dir_console = None,
		"logFormat" => options.log_format = None,
		"colorType" => options.color_type = None,
		other => panic!("unknown field {}", other),
	}
}

fn valid() -> Options {
	Options::new("svc", "UTC").console(false, false)
}

#[test]
fn test_valid_options_construct() {
	for zone in ["UTC", "Europe/Berlin", "America/Sao_Paulo", "Asia/Kolkata"] {
		for time_format in [12, 24] {
			for log_format in [1, 2] {
				for color_type in [ColorType::Background, ColorType::Font] {
					let options = Options::new("svc", zone)
						.time_format(time_format)
						.log_format(log_format)
						.color_type(color_type);
					let logger = Logger::new(options).unwrap();
					assert!(is_timestamp(logger.date()), "bad date {:?}", logger.date());
				}
			}
		}
	}
}

#[test]
fn test_each_missing_field_is_named() {
	for field in FIELDS {
		let mut options = valid();
		clear(&mut options, field);
		let err = Logger::new(options).err().expect("construction should fail");
		assert_eq!(err.field(), Some(field), "{}: {}", field, err);
	}
}

#[test]
fn test_first_missing_field_wins() {
	for (i, field) in FIELDS.iter().enumerate() {
		let mut options = valid();
		for later in &FIELDS[i..] {
			clear(&mut options, later);
		}
		// a bad zone must not be reported before a missing field either
		if i > 1 {
			options.timezone = Some("Europe/Berlin/".to_string());
		}
		let err = Logger::new(options).err().expect("construction should fail");
		assert_eq!(err.field(), Some(*field), "got {}", err);
		assert!(!matches!(err, LoggerError::InvalidTimezone(_)));
	}
}

#[test]
fn test_empty_strings_count_as_missing() {
	let mut options = valid();
	options.logger_name = Some(String::new());
	assert!(matches!(Logger::new(options), Err(LoggerError::MissingLoggerName)));

	let mut options = valid();
	options.timezone = Some(String::new());
	assert!(matches!(Logger::new(options), Err(LoggerError::MissingTimezone)));
}

#[test]
fn test_zero_formats_count_as_missing() {
	assert!(matches!(Logger::new(valid().time_format(0)), Err(LoggerError::MissingTimeFormat)));
	assert!(matches!(Logger::new(valid().log_format(0)), Err(LoggerError::MissingLogFormat)));
}

#[test]
fn test_invalid_timezone() {
	let err = Logger::new(Options::new("svc", "Europe/Berlin/")).err().expect("construction should fail");
	assert!(matches!(&err, LoggerError::InvalidTimezone(zone) if zone == "Europe/Berlin/"));
	assert_eq!(err.to_string(), "Invalid timezone: Europe/Berlin/");
}

#[test]
fn test_error_messages() {
	let mut options = valid();
	options.logger_name = None;
	assert_eq!(Logger::new(options).err().unwrap().to_string(), "Logger name is not set");

	let mut options = valid();
	options.color_type = None;
	assert_eq!(Logger::new(options).err().unwrap().to_string(), "Color type is not set");
}

#[test]
fn test_options_from_json_file() {
	let tmp = tempfile::tempdir().unwrap();
	let path = tmp.path().join("tintlog.json");
	std::fs::write(&path, r#"{
		"loggerName": "svc",
		"timezone": "UTC",
		"timeFormat": 24,
		"outDirFile": { "enabled": false, "path": "./logs" },
		"outDirConsole": { "enabled": false, "colored": false },
		"logFormat": 2,
		"colorType": "font"
	}"#).unwrap();

	let logger = Logger::new(Options::from_file(&path).unwrap()).unwrap();
	assert_eq!(logger.name(), "svc");
	assert_eq!(logger.color_type(), ColorType::Font);

	std::fs::write(&path, "{ not json").unwrap();
	assert!(matches!(Options::from_file(&path), Err(LoggerError::ConfigParse { .. })));
}
