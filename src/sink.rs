//! Status-line sink for per-file and per-page conversion events.
//!
//! The conversion routine never signals success or failure through a return
//! value; callers observe progress through a stream of human-readable status
//! lines sent to a [`LogSink`]. The default sink writes to standard output;
//! an interface shell can instead route lines into an on-screen panel, and
//! tests can capture them with [`MemorySink`].
//!
//! # Why a sink trait instead of a channel?
//!
//! The sink is the least-invasive integration point: the library stays
//! synchronous and single-threaded, and the host decides how lines travel —
//! printed, appended to a text widget, or forwarded over a channel from a
//! worker thread. Any `FnMut(Status, &str)` closure is a sink, so the common
//! case needs no new type at all.
//!
//! # Example
//!
//! ```rust
//! use pdf2png::sink::{LogSink, Status};
//!
//! let mut lines = Vec::new();
//! let mut sink = |status: Status, message: &str| {
//!     lines.push(format!("[{}] {}", status.tag(), message));
//! };
//! sink.log(Status::Ok, "report.pdf -> report.png");
//! assert_eq!(lines[0], "[OK] report.pdf -> report.png");
//! ```

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A file (or whole document) was converted.
    Ok,
    /// A target already exists and overwrite was not requested.
    Skip,
    /// A page failed to render/save, or a document has zero pages.
    Warn,
    /// A document could not be opened or authenticated.
    Error,
    /// Batch-level progress notes (counts, headers).
    Info,
}

impl Status {
    /// The bracketed tag used in rendered lines: `OK`, `SKIP`, `WARN`,
    /// `ERROR`, `INFO`.
    pub fn tag(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Skip => "SKIP",
            Status::Warn => "WARN",
            Status::Error => "ERROR",
            Status::Info => "INFO",
        }
    }
}

/// Receives one status line per conversion event.
///
/// Implementations take `&mut self` — processing is strictly sequential, so
/// no synchronisation is required.
pub trait LogSink {
    fn log(&mut self, status: Status, message: &str);
}

/// Any `FnMut(Status, &str)` closure is a sink.
impl<F: FnMut(Status, &str)> LogSink for F {
    fn log(&mut self, status: Status, message: &str) {
        self(status, message)
    }
}

/// The default sink: renders `[TAG] message` lines on standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&mut self, status: Status, message: &str) {
        println!("[{}] {}", status.tag(), message);
    }
}

/// A sink that collects lines in memory, for tests and embedding hosts
/// that poll rather than stream.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<(Status, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines received so far, in order.
    pub fn lines(&self) -> &[(Status, String)] {
        &self.lines
    }

    /// Count of lines with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.lines.iter().filter(|(s, _)| *s == status).count()
    }
}

impl LogSink for MemorySink {
    fn log(&mut self, status: Status, message: &str) {
        self.lines.push((status, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.log(Status::Ok, "a.pdf -> a.png");
        sink.log(Status::Skip, "exists: b.png");
        sink.log(Status::Ok, "c.pdf -> c.png");

        assert_eq!(sink.lines().len(), 3);
        assert_eq!(sink.count(Status::Ok), 2);
        assert_eq!(sink.count(Status::Skip), 1);
        assert_eq!(sink.lines()[1].1, "exists: b.png");
    }

    #[test]
    fn closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |status: Status, msg: &str| seen.push((status, msg.to_string()));
            sink.log(Status::Warn, "page 2 failed");
        }
        assert_eq!(seen, vec![(Status::Warn, "page 2 failed".to_string())]);
    }

    #[test]
    fn tags_match_the_line_contract() {
        assert_eq!(Status::Ok.tag(), "OK");
        assert_eq!(Status::Skip.tag(), "SKIP");
        assert_eq!(Status::Warn.tag(), "WARN");
        assert_eq!(Status::Error.tag(), "ERROR");
        assert_eq!(Status::Info.tag(), "INFO");
    }
}
