// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 TINTLOG                                      ║
// ║                   Colored, Timezone-Aware Leveled Logger                     ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 WHAT IT DOES
// ---------------
// A Logger has a name, a timezone and a couple of layout switches. Every call to
// info/warn/error/debug builds one line and sends it to the enabled outputs:
//
//   console  →  the line, truecolor-styled or plain
//   file     →  <dir>/<name>.log, always plain, one line appended per call
//
// 🕰️ TIMESTAMPS
// -------------
// The timestamp is captured in the configured zone when the Logger is built and
// then reused for every line the instance writes. Build a new Logger to get a
// fresh time.
//
// 🎨 LAYOUTS
// ----------
//   logFormat 1:  [15:05:09.042] [INFO] - api : started
//   logFormat 2:  INFO [15:05:09.042] | api - started
//
// colorType "background" highlights the date, level and name segments;
// colorType "font" only recolors the text.
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod clock;
pub mod constants;
pub mod error;
pub mod format;
pub mod io;
pub mod logger;
pub mod options;
pub mod palette;

pub use clock::{ClockConvention, is_valid_zone};
pub use error::LoggerError;
pub use format::{ColorType, LogFormat, LogLines};
pub use io::{Console, Stdout};
pub use logger::Logger;
pub use options::{Options, OutDirConsole, OutDirFile};
pub use palette::{AnsiStyler, PlainStyler, Rgb, Severity, Styler};
