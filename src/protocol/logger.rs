//! Minimal `log` backend for the command loop.
//!
//! Search progress is emitted through the `log` facade; this logger prints
//! it to stderr so stdout stays reserved for protocol responses.

use log::{LevelFilter, Log, Metadata, Record};

pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger, silenced until `set_debug(true)`.
pub fn init() {
    // Another logger may already be installed (e.g. by a test harness).
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Off);
}

pub fn set_debug(enabled: bool) {
    log::set_max_level(if enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    });
}
