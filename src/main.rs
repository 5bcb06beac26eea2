// ══════════════════════════════════════════════════════════════════════════════
// TINTLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Command-line front end for the logger. Options come from an optional JSON file
// and are overridden by flags, then one subcommand writes through the Logger:
//
//   tintlog -n api -t Europe/Berlin info "server started"
//   tintlog -c tintlog.json -o ./logs error "disk full"
//   tintlog -f 2 --color-type font demo
//
// Internal diagnostics go to stderr and are controlled with RUST_LOG.

use std::path::PathBuf;
use std::process::exit;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;
use tintlog::{ColorType, Logger, LoggerError, Options, OutDirConsole, Severity};

const DEFAULT_NAME: &str = "tintlog";
const DEFAULT_TIMEZONE: &str = "UTC";

/// Colored, timezone-aware leveled logging from the shell
#[derive(Parser)]
#[command(name = "tintlog")]
#[command(version)]
#[command(about = "Write timestamped log lines to the console and log files", long_about = None)]
struct Cli {
	/// JSON options file (camelCase keys)
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Logger name, used in every line and as the log file name
	#[arg(short, long, global = true)]
	name: Option<String>,

	/// IANA timezone, e.g. Europe/Berlin
	#[arg(short, long, global = true)]
	timezone: Option<String>,

	/// Clock convention: 12 or 24
	#[arg(long, global = true)]
	time_format: Option<u8>,

	/// Line layout: 1 (brackets) or 2 (pipes)
	#[arg(short = 'f', long, global = true)]
	log_format: Option<u8>,

	/// Where the severity color goes: background or font
	#[arg(long, global = true)]
	color_type: Option<ColorType>,

	/// Also append lines to <FILE_DIR>/<name>.log
	#[arg(short = 'o', long, global = true)]
	file_dir: Option<PathBuf>,

	/// Do not write to the console
	#[arg(long, global = true)]
	no_console: bool,

	/// Write uncolored console lines
	#[arg(long, global = true)]
	plain: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Log an INFO line
	Info {
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Log a WARN line
	Warn {
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Log an ERROR line
	Error {
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Log a DEBUG line
	Debug {
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Log one sample line per severity
	Demo,

	/// Validate the options and show the captured timestamp
	Check,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	if let Err(e) = run(cli) {
		eprintln!("{} {}", "✘".red().bold(), e);
		exit(1);
	}
}

fn run(cli: Cli) -> Result<(), LoggerError> {
	let logger = Logger::new(options(&cli)?)?;

	match cli.command {
		Commands::Info { message } => logger.info(&message.join(" ")),
		Commands::Warn { message } => logger.warn(&message.join(" ")),
		Commands::Error { message } => logger.error(&message.join(" ")),
		Commands::Debug { message } => logger.debug(&message.join(" ")),
		Commands::Demo => {
			for severity in Severity::ALL {
				logger.log(severity, &format!("this is how {} looks", severity.label().to_lowercase()))?;
			}
			Ok(())
		}
		Commands::Check => {
			println!("{} {} ({})", "✔".green().bold(), logger.name().cyan(), logger.timezone().name());
			println!("  timestamp  {}", logger.date());
			println!("  layout     {:?} / {}", logger.log_format(), logger.color_type());
			if let Some(path) = logger.log_file() {
				println!("  file       {}", path.display());
			}
			Ok(())
		}
	}
}

/// Config file first, flags on top.
fn options(cli: &Cli) -> Result<Options, LoggerError> {
	let mut options = match &cli.config {
		Some(path) => Options::from_file(path)?,
		None => Options::new(
			cli.name.as_deref().unwrap_or(DEFAULT_NAME),
			cli.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE),
		),
	};

	if let Some(name) = &cli.name {
		options.logger_name = Some(name.clone());
	}
	if let Some(timezone) = &cli.timezone {
		options.timezone = Some(timezone.clone());
	}
	if let Some(time_format) = cli.time_format {
		options = options.time_format(time_format);
	}
	if let Some(log_format) = cli.log_format {
		options = options.log_format(log_format);
	}
	if let Some(color_type) = cli.color_type {
		options = options.color_type(color_type);
	}
	if let Some(dir) = &cli.file_dir {
		options = options.file(true, dir.clone());
	}
	if cli.no_console || cli.plain {
		let current = options.out_dir_console.unwrap_or(OutDirConsole { enabled: true, colored: true });
		options = options.console(current.enabled && !cli.no_console, current.colored && !cli.plain);
	}

	Ok(options)
}
