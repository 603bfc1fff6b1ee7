//! Line splitting for term lists.
//!
//! Term lists arrive from any platform, so `\n`, `\r\n` and a bare `\r` all
//! end a line.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the lines of a reader, accepting every line-ending style.
pub struct TermLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> TermLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Reads up to the next `\n` and queues every line it contains.
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        let mut chunk = self.buf.as_slice();
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        // Terminator of the last line in the chunk, CRLF or bare CR
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }

        let text = std::str::from_utf8(chunk)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.pending.extend(text.split('\r').map(str::to_string));

        Ok(true)
    }
}

impl<R: BufRead> Iterator for TermLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
