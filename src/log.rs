// src/log.rs
//
// Session log for the catalogue browser. One file per working directory,
// appended across runs; each run opens the sink once and starts with a
// session marker so consecutive runs stay readable. Logging never fails the
// caller: an unopenable sink degrades to a no-op.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

const LOG_FILE: &str = "photocat.log";

#[derive(Clone, Copy)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        }
    }
}

struct Sink {
    file: Option<File>,
    started: Instant,
}

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

fn sink() -> &'static Mutex<Sink> {
    SINK.get_or_init(|| {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
            .ok();

        let mut sink = Sink {
            file,
            started: Instant::now(),
        };
        if let Some(f) = sink.file.as_mut() {
            let _ = writeln!(f, "==== photocat session ====");
        }
        Mutex::new(sink)
    })
}

fn stamp(elapsed: Duration) -> String {
    let ms = elapsed.as_millis() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1_000,
        ms % 1_000
    )
}

pub fn write_log(level: Level, msg: &str) {
    if let Ok(mut sink) = sink().lock() {
        let at = stamp(sink.started.elapsed());
        if let Some(file) = sink.file.as_mut() {
            let _ = writeln!(file, "[{at}][{}] {msg}", level.tag());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
