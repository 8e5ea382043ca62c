/*!
`log` backend that writes to the browser console.

Each level goes to the matching console method so devtools filtering works.
*/

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Line written for one record.
pub fn format_record(record: &Record<'_>) -> String {
  format!("[tailor] {} {}: {}", record.level(), record.target(), record.args())
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record<'_>) {
    if self.enabled(record.metadata()) {
      write(record.level(), &format_record(record));
    }
  }

  fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, line: &str) {
  let line = wasm_bindgen::JsValue::from_str(line);
  match level {
    Level::Error => web_sys::console::error_1(&line),
    Level::Warn => web_sys::console::warn_1(&line),
    Level::Info => web_sys::console::info_1(&line),
    Level::Debug => web_sys::console::log_1(&line),
    Level::Trace => web_sys::console::debug_1(&line),
  }
}

#[cfg(not(target_arch = "wasm32"))]
fn write(_level: Level, line: &str) {
  eprintln!("{line}");
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
  if log::set_logger(&LOGGER).is_err() {
    log::debug!("Console logger already installed");
  }
  log::set_max_level(level);
}
