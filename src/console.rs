//! Line-oriented console shared by the runner and every demonstration.
//!
//! A [`Console`] is a cheap, cloneable handle over two streams: the output
//! stream carrying the catalogue text and the error stream used for
//! diagnostics. Each line is written while holding the stream's lock, so
//! lines produced by detached threads interleave with other output but never
//! tear.
//!
//! [`UnitOutput`] binds a console to one demonstration's label and provides
//! the labelled line shapes the catalogue uses.
//!
//! # Examples
//!
//! ```rust
//! use lambda_catalogue::console::Console;
//!
//! let (console, captured) = Console::capture();
//! let output = console.for_unit(3, "filter_list_with_lambda");
//! output.headline("starts with 'J':");
//! output.line("Java");
//!
//! assert_eq!(
//!     captured.stdout(),
//!     "3. filter_list_with_lambda => starts with 'J':\nJava\n"
//! );
//! ```

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

// =============================================================================
// Console
// =============================================================================

/// A thread-safe handle over an output stream and an error stream.
#[derive(Clone)]
pub struct Console {
    stdout: SharedWriter,
    stderr: SharedWriter,
}

static_assertions::assert_impl_all!(Console: Send, Sync, Clone);

impl Console {
    /// Creates a console writing to the process's standard streams.
    pub fn stdio() -> Self {
        Self::from_writers(io::stdout(), io::stderr())
    }

    /// Creates a console over arbitrary writers.
    pub fn from_writers<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            stdout: Arc::new(Mutex::new(Box::new(stdout))),
            stderr: Arc::new(Mutex::new(Box::new(stderr))),
        }
    }

    /// Creates a console writing into memory, with a handle to read it back.
    pub fn capture() -> (Self, Captured) {
        let captured = Captured::default();
        let console = Self::from_writers(
            CaptureWriter(Arc::clone(&captured.stdout)),
            CaptureWriter(Arc::clone(&captured.stderr)),
        );
        (console, captured)
    }

    /// Writes one line to the output stream.
    pub fn line(&self, text: impl Display) {
        write_line(&self.stdout, &text, "stdout");
    }

    /// Writes an empty line to the output stream.
    pub fn blank(&self) {
        self.line("");
    }

    /// Writes one line to the error stream.
    pub fn error_line(&self, text: impl Display) {
        write_line(&self.stderr, &text, "stderr");
    }

    /// Binds this console to the label `"{ordinal}. {name}"`.
    pub fn for_unit(&self, ordinal: usize, name: &str) -> UnitOutput {
        UnitOutput {
            console: self.clone(),
            label: Arc::from(format!("{ordinal}. {name}")),
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Console").finish_non_exhaustive()
    }
}

fn write_line(writer: &SharedWriter, text: &dyn Display, stream: &'static str) {
    let mut guard = writer.lock();
    if let Err(error) = writeln!(guard, "{text}").and_then(|()| guard.flush()) {
        tracing::error!(stream, %error, "failed to write console line");
    }
}

// =============================================================================
// UnitOutput
// =============================================================================

/// A console bound to one demonstration's label.
///
/// Cloneable and `Send`, so work started by a demonstration on another thread
/// can keep writing labelled lines.
#[derive(Clone, Debug)]
pub struct UnitOutput {
    console: Console,
    label: Arc<str>,
}

static_assertions::assert_impl_all!(UnitOutput: Send, Sync, Clone);

impl UnitOutput {
    /// The label, for example `"21. stream_reduce_with_lambda"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Writes `"{label} => {message}"`.
    pub fn headline(&self, message: impl Display) {
        self.console.line(format_args!("{} => {message}", self.label));
    }

    /// Writes `"{label}:"`, introducing the item lines that follow.
    pub fn heading(&self) {
        self.console.line(format_args!("{}:", self.label));
    }

    /// Writes an unlabelled item line.
    pub fn line<T: Display>(&self, text: T) {
        self.console.line(text);
    }

    /// Writes an unlabelled line to the error stream.
    pub fn error_line(&self, text: impl Display) {
        self.console.error_line(text);
    }
}

// =============================================================================
// Captured
// =============================================================================

/// Read side of a console created by [`Console::capture`].
#[derive(Clone, Debug, Default)]
pub struct Captured {
    stdout: Arc<Mutex<Vec<u8>>>,
    stderr: Arc<Mutex<Vec<u8>>>,
}

impl Captured {
    /// Everything written to the output stream so far.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout.lock()).into_owned()
    }

    /// Everything written to the error stream so far.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.stderr.lock()).into_owned()
    }

    /// The output stream split into lines.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout().lines().map(str::to_string).collect()
    }
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
