//! Output destinations: a file opened for binary write, or standard output.

use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

use crate::error::{WavError, WavResult};

/// Destination path that selects standard output.
pub const STDOUT_PATH: &str = "-";

/// An append-only byte sink.
///
/// Dropping a sink closes it; call [`Sink::finish`] to flush and observe
/// any error from the final write.
#[derive(Debug)]
pub enum Sink {
    /// A file created (or truncated) at open time.
    File(BufWriter<File>),
    /// The process's standard output.
    Stdout(StdoutLock<'static>),
}

impl Sink {
    /// Opens the sink for `path`; `"-"` selects standard output.
    pub fn open(path: &Path) -> WavResult<Self> {
        if is_stdout(path) {
            Ok(Self::stdout())
        } else {
            Self::file(path)
        }
    }

    /// Creates or truncates the file at `path`.
    pub fn file(path: &Path) -> WavResult<Self> {
        let file = File::create(path).map_err(|e| WavError::open_failed(path, e))?;
        Ok(Self::File(BufWriter::new(file)))
    }

    /// Binds to standard output. Never fails.
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout().lock())
    }

    /// Flushes buffered bytes and releases the destination.
    pub fn finish(mut self) -> WavResult<()> {
        self.flush()?;
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(w) => w.write(buf),
            Sink::Stdout(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Sink::File(w) => w.write_all(buf),
            Sink::Stdout(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(w) => w.flush(),
            Sink::Stdout(w) => w.flush(),
        }
    }
}

/// Returns true if `path` is the standard output sentinel.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_PATH
}
