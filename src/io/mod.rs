//! Types for managing boundary diagnostic output to various targets.
//!
//! The native solver writes its own progress log to the process stdout.
//! The print targets here only receive the summary that the boundary
//! itself writes around each native call when `verbose` is set.

use std::fs::File;
use std::io::{stdout, Error, ErrorKind, Result, Stdout, Write};

/// Destination of the boundary diagnostics of one solver handle
pub(crate) enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink,
}

impl PrintTarget {
    fn name(&self) -> &'static str {
        match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink => "Sink",
        }
    }

    // None when output is discarded
    fn writer(&mut self) -> Option<&mut dyn Write> {
        match self {
            PrintTarget::Stdout(stdout) => Some(stdout),
            PrintTarget::File(file) => Some(file),
            PrintTarget::Buffer(buffer) => Some(buffer),
            PrintTarget::Stream(stream) => Some(stream.as_mut()),
            PrintTarget::Sink => None,
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrintTarget::{}", self.name())
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self.writer() {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.writer().map_or(Ok(()), |w| w.flush())
    }
}

/// Redirection of the boundary diagnostics.
///
/// With `verbose` set, every solve writes a summary of the problem, the
/// cone composition, the settings and the number of pinned buffers
/// before the native call, and the exit status after it.  Nothing is
/// written when `verbose` is unset, and a failing target never fails
/// the solve.  The native iteration log is unaffected by the target.
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout (the default)
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// discard all print output
    fn print_to_sink(&mut self);
    /// redirect print output to a fresh internal buffer
    fn print_to_buffer(&mut self);
    /// everything written since the last `print_to_buffer`.
    /// Fails if output is not being buffered.
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink;
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).into_owned()),
            other => Err(Error::new(
                ErrorKind::Other,
                format!("print buffering is not configured (target is {})", other.name()),
            )),
        }
    }
}

#[test]
fn test_print_target_buffer() {
    let mut target = PrintTarget::default();
    assert!(target.get_print_buffer().is_err());

    target.print_to_buffer();
    write!(target, "hello {}", 1).unwrap();
    assert_eq!(target.get_print_buffer().unwrap(), "hello 1");

    target.print_to_sink();
    writeln!(target, "discarded").unwrap();
    assert!(target.flush().is_ok());
    assert_eq!(format!("{:?}", target), "PrintTarget::Sink");
    let err = target.get_print_buffer().unwrap_err();
    assert!(err.to_string().contains("Sink"));
}
