//! Line-oriented terminal I/O used by the quiz.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::SessionError;

/// Blocking line console.
pub trait Console {
    /// Write `text` as-is and flush.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Ask a `Y/n` question until the answer starts with `y` or `n`
/// (case-insensitive).
///
/// # Errors
///
/// Returns `SessionError::InputClosed` if input ends before a valid answer.
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, question: &str) -> Result<bool, SessionError> {
    console.write(&format!("{question} Y/n\n"))?;
    loop {
        let line = console.read_line()?.ok_or(SessionError::InputClosed)?;
        match line.chars().next() {
            Some('Y' | 'y') => return Ok(true),
            Some('N' | 'n') => return Ok(false),
            _ => console.write("Invalid input, try again!\n")?,
        }
    }
}

//
// ─── STDIO ─────────────────────────────────────────────────────────────────────
//

/// Console bound to the process stdin/stdout.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, the same way
    /// the phrase file is decoded, so such input still compares consistently.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.stdin.lock().read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(decode_line(&buf)))
    }
}

/// Strip the line terminator and decode leniently.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

//
// ─── SCRIPTED ──────────────────────────────────────────────────────────────────
//

type Responder = Box<dyn FnMut(&str) -> Option<String>>;

/// In-memory console for tests and scripted runs.
///
/// Input comes either from a fixed queue of lines or from a responder that
/// sees everything written since the previous read. All output is kept in a
/// transcript.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    responder: Option<Responder>,
    transcript: String,
    unread_from: usize,
}

impl ScriptedConsole {
    /// Console that answers reads from `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            responder: None,
            transcript: String::new(),
            unread_from: 0,
        }
    }

    /// Console that asks `responder` for each line, passing the output
    /// written since the previous read. Returning `None` ends input.
    pub fn with_responder(responder: impl FnMut(&str) -> Option<String> + 'static) -> Self {
        Self {
            inputs: VecDeque::new(),
            responder: Some(Box::new(responder)),
            transcript: String::new(),
            unread_from: 0,
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let fresh = &self.transcript[self.unread_from..];
        let line = match self.responder.as_mut() {
            Some(responder) => responder(fresh),
            None => self.inputs.pop_front(),
        };
        self.unread_from = self.transcript.len();
        Ok(line)
    }
}
