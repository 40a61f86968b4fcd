use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::io::stderr;

/// Longest formatted log line; the rest of a longer record is dropped.
const LINE_SIZE: usize = 256;

/// Stack buffer a single record is formatted into before the write.
struct LineBuffer {
    buffer: [u8; LINE_SIZE],
    position: usize,
}

impl LineBuffer {
    const fn new() -> Self {
        Self {
            buffer: [0; LINE_SIZE],
            position: 0,
        }
    }

    fn contents(&self) -> &[u8] {
        &self.buffer[..self.position]
    }
}

impl Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let remaining = LINE_SIZE - self.position;
        let take = bytes.len().min(remaining);

        self.buffer[self.position..self.position + take].copy_from_slice(&bytes[..take]);
        self.position += take;

        if take < bytes.len() {
            return Err(fmt::Error);
        }
        Ok(())
    }
}

/// Writes each record to stderr as `[LEVEL] target: message`.
///
/// stdout carries only the program's one line of output.
pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut line = LineBuffer::new();
        let _ = format_line(&mut line, record);
        if line.position == LINE_SIZE {
            line.buffer[LINE_SIZE - 1] = b'\n';
        }
        let _ = stderr().write(line.contents());
    }

    fn flush(&self) {}
}

fn format_line(out: &mut impl Write, record: &Record) -> fmt::Result {
    writeln!(out, "[{:>5}] {}: {}", record.level(), record.target(), record.args())
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger and set the max level.
///
/// The level is applied even if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&LOGGER)
}
