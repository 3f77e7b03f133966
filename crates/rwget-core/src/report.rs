//! wget-style report output: the console, or a buffer flushed to `wget-log`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::WgetError;

enum Sink {
    Console,
    Buffer(Vec<u8>),
}

/// Destination for report entries. Cheap to clone; clones share the same sink,
/// so the batch consumer and a blocking download can both hold one.
#[derive(Clone)]
pub struct ReportWriter {
    sink: Arc<Mutex<Sink>>,
}

impl ReportWriter {
    /// Entries go straight to stdout (flushed each time so `\r` progress lines show up).
    pub fn console() -> Self {
        Self::with_sink(Sink::Console)
    }

    /// Entries accumulate in memory until `finish`.
    pub fn buffered() -> Self {
        Self::with_sink(Sink::Buffer(Vec::new()))
    }

    fn with_sink(sink: Sink) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_buffered(&self) -> bool {
        matches!(*self.lock(), Sink::Buffer(_))
    }

    /// Writes one entry verbatim. Entries carry their own newlines.
    pub fn entry(&self, text: &str) {
        match &mut *self.lock() {
            Sink::Console => {
                let mut out = io::stdout().lock();
                // A closed stdout must not abort a download.
                let _ = out.write_all(text.as_bytes());
                let _ = out.flush();
            }
            Sink::Buffer(buf) => buf.extend_from_slice(text.as_bytes()),
        }
    }

    /// Everything captured so far (always empty for the console).
    pub fn contents(&self) -> String {
        match &*self.lock() {
            Sink::Console => String::new(),
            Sink::Buffer(buf) => String::from_utf8_lossy(buf).into_owned(),
        }
    }

    /// Writes the captured buffer to `path`, replacing any previous file.
    /// No-op for the console.
    pub fn finish(&self, path: &Path) -> Result<(), WgetError> {
        let guard = self.lock();
        let Sink::Buffer(buf) = &*guard else {
            return Ok(());
        };
        fs::write(path, buf).map_err(|source| WgetError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = buf.len(), "report flushed");
        Ok(())
    }
}
