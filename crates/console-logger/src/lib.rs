//! Console Logger
//!
//! Installs a `tracing-subscriber` fmt subscriber whose output goes to the
//! browser console, at the console method matching the event level. The last
//! `DEFAULT_CAPACITY` formatted lines are also kept in a ring; `recent_lines`
//! returns them for the in-page activity panel.
//! Off wasm32 the lines go to stderr instead.

use std::collections::VecDeque;
use std::io;
use std::sync::{Mutex, OnceLock};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Number of lines kept by `init`
pub const DEFAULT_CAPACITY: usize = 200;

static RING: OnceLock<LogRing> = OnceLock::new();

/// Bounded buffer of formatted log lines, oldest dropped first
#[derive(Debug)]
pub struct LogRing {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.lines.lock() else { return };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Install the global subscriber. Returns false if one was already installed.
pub fn init(level: Level) -> bool {
    let ring = RING.get_or_init(|| LogRing::new(DEFAULT_CAPACITY));
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter { ring });

    // SystemTime is unavailable in the browser
    #[cfg(target_arch = "wasm32")]
    let result = builder.without_time().try_init();
    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.try_init();

    result.is_ok()
}

/// Recent lines captured since `init`
pub fn recent_lines() -> Vec<String> {
    RING.get().map(LogRing::snapshot).unwrap_or_default()
}

/// Hands out one `ConsoleWriter` per event
#[derive(Clone, Copy, Debug)]
pub struct ConsoleMakeWriter {
    ring: &'static LogRing,
}

impl ConsoleMakeWriter {
    pub fn new(ring: &'static LogRing) -> Self {
        Self { ring }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.ring)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.ring)
    }
}

/// Buffers one formatted event and flushes it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    ring: &'static LogRing,
}

impl ConsoleWriter {
    fn new(level: Level, ring: &'static LogRing) -> Self {
        Self { level, buf: Vec::new(), ring }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        emit(self.level, line);
        self.ring.push(line.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&msg);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&msg);
    } else if level == Level::INFO {
        web_sys::console::info_1(&msg);
    } else {
        web_sys::console::debug_1(&msg);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn leaked_ring(capacity: usize) -> &'static LogRing {
        Box::leak(Box::new(LogRing::new(capacity)))
    }

    #[test]
    fn test_ring_drops_oldest() {
        let ring = LogRing::new(2);
        ring.push("a".to_string());
        ring.push("b".to_string());
        ring.push("c".to_string());
        assert_eq!(ring.snapshot(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let ring = LogRing::new(0);
        ring.push("a".to_string());
        assert!(ring.snapshot().is_empty());
    }

    #[test]
    fn test_writer_flushes_one_line_on_drop() {
        let ring = leaked_ring(4);
        let make = ConsoleMakeWriter::new(ring);
        {
            let mut writer = make.make_writer();
            writer.write_all(b" INFO loaded ").unwrap();
            writer.write_all(b"3 employees\n").unwrap();
        }
        assert_eq!(ring.snapshot(), vec![" INFO loaded 3 employees".to_string()]);
    }

    #[test]
    fn test_empty_writer_records_nothing() {
        let ring = leaked_ring(4);
        drop(ConsoleMakeWriter::new(ring).make_writer());
        assert!(ring.snapshot().is_empty());
    }

    #[test]
    fn test_init_installs_once_and_captures_lines() {
        // Only test in this crate that touches the global subscriber
        assert!(recent_lines().is_empty());
        assert!(init(Level::DEBUG));
        assert!(!init(Level::DEBUG));

        tracing::info!(count = 2, "employees loaded");
        tracing::trace!("below the max level");
        let lines = recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("employees loaded count=2"));
    }
}
