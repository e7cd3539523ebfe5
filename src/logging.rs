#![cfg(feature = "std")]

use std::env;
use log::{self, Level, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => {
                eprintln!("{} [{}] {}", record.level(), record.target(), record.args())
            }
            _ => println!("{} [{}] {}", record.level(), record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the process logger with a level taken from `BOARDGAME_LOG`.
/// Defaults to `info` if the variable is not set or invalid. Safe to call
/// more than once; later calls keep the first logger.
pub fn init_logging() {
    let level = env::var("BOARDGAME_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
