//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a bounded ring
//! buffer and forwards every record to the platform sink: the browser
//! console on `wasm32`, stderr elsewhere.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Bounded in-memory logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the retained lines, oldest first. Nothing in the page
    /// renders it; it is there for inspection from tests or a debugger.
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record, Utc::now());
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Format one record as `<rfc3339> <LEVEL> [target] message`
pub fn format_record(record: &Record, at: DateTime<Utc>) -> String {
    format!(
        "{} {:<5} [{}] {}",
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init(capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines retained by the global logger (empty before `init`). Inspection
/// only: the page itself never reads the ring.
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log_line(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_latest() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        log_line(&logger, Level::Info, "dropped");
        log_line(&logger, Level::Error, "kept");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("ERROR"));
    }

    #[test]
    fn test_format_record() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("cart")
                .args(format_args!("bad payload"))
                .build(),
            at,
        );
        assert_eq!(line, "2024-05-01T12:30:00.000Z WARN  [cart] bad payload");
    }
}
