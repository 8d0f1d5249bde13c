//! Tracing output routed to the browser console.
//!
//! [`ConsoleMakeWriter`] plugs into `tracing_subscriber::fmt` and hands each
//! formatted event to a sink together with the console method matching the
//! event's level. The wasm build supplies a sink that calls
//! `console.error` / `console.warn` / ...; tests supply a capturing closure.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    /// Method for a tracing level. `TRACE` shares `console.debug`.
    #[must_use]
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Property name on the `console` object.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Buffers one formatted event and emits it on flush or drop.
pub struct ConsoleWriter<F: Fn(ConsoleMethod, &str)> {
    method: ConsoleMethod,
    buf: Vec<u8>,
    sink: F,
}

impl<F: Fn(ConsoleMethod, &str)> ConsoleWriter<F> {
    pub fn new(method: ConsoleMethod, sink: F) -> Self {
        Self {
            method,
            buf: Vec::new(),
            sink,
        }
    }

    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches(['\n', '\r']);
        if !line.is_empty() {
            (self.sink)(self.method, line);
        }
        self.buf.clear();
    }
}

impl<F: Fn(ConsoleMethod, &str)> Write for ConsoleWriter<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl<F: Fn(ConsoleMethod, &str)> Drop for ConsoleWriter<F> {
    fn drop(&mut self) {
        self.emit();
    }
}

/// `MakeWriter` that opens a [`ConsoleWriter`] per event.
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter<F> {
    sink: F,
}

impl<F> ConsoleMakeWriter<F>
where
    F: Fn(ConsoleMethod, &str) + Clone,
{
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

impl<'a, F> MakeWriter<'a> for ConsoleMakeWriter<F>
where
    F: Fn(ConsoleMethod, &str) + Clone + 'a,
{
    type Writer = ConsoleWriter<F>;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info, self.sink.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()), self.sink.clone())
    }
}
