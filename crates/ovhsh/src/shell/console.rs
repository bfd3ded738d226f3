use std::fmt;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O: command output, report output and input.
pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    input: Box<dyn BufRead>,
}

impl Console {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        Self { out, err, input }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            Box::new(io::stdin().lock()),
        )
    }

    pub fn println(&mut self, line: impl fmt::Display) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %err, "failed to write output");
        }
    }

    pub fn eprintln(&mut self, line: impl fmt::Display) {
        if let Err(err) = writeln!(self.err, "{line}") {
            tracing::warn!(error = %err, "failed to write report");
        }
    }

    /// Write `text` without a newline and flush it.
    pub fn prompt(&mut self, text: &str) {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(err) = written {
            tracing::warn!(error = %err, "failed to write prompt");
        }
    }

    /// Next input line without its line terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
