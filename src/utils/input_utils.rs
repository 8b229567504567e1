use log::warn;
use std::io::{self, BufRead};

// Same set as C `isspace` in the default locale.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Reads console-style input: whitespace separated tokens and whole lines.
///
/// Once the end of the stream has been seen (or a read failed) every later
/// read returns `None` without touching the underlying reader again, so a
/// terminal is not polled a second time after Ctrl-D.
pub struct ConsoleInput<R> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    // Next byte without consuming it.
    fn peek(&mut self) -> Option<u8> {
        if self.exhausted {
            return None;
        }

        loop {
            match self.reader.fill_buf() {
                Ok(buf) if buf.is_empty() => {
                    self.exhausted = true;
                    return None;
                }
                Ok(buf) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Console read failed, treating as end of input: {}", e);
                    self.exhausted = true;
                    return None;
                }
            }
        }
    }

    /// Skips leading whitespace (line breaks included) and returns the run of
    /// non-whitespace that follows. The delimiter after the token is left in
    /// the stream.
    pub fn read_token(&mut self) -> Option<String> {
        while let Some(byte) = self.peek() {
            if !is_space(byte) {
                break;
            }
            self.reader.consume(1);
        }

        let mut token = Vec::new();
        while let Some(byte) = self.peek() {
            if is_space(byte) {
                break;
            }
            token.push(byte);
            self.reader.consume(1);
        }

        if token.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&token).into_owned())
        }
    }

    /// Drops one leftover character, normally the newline after a token.
    /// `\r\n` counts as one.
    pub fn skip_line_terminator(&mut self) {
        if let Some(byte) = self.peek() {
            self.reader.consume(1);
            if byte == b'\r' && self.peek() == Some(b'\n') {
                self.reader.consume(1);
            }
        }
    }

    /// Everything up to the next `\n`. The terminator (and a `\r` before it)
    /// is consumed but not returned.
    pub fn read_line(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.exhausted = true;
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Console read failed, treating as end of input: {}", e);
                self.exhausted = true;
                if line.is_empty() {
                    return None;
                }
            }
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        } else {
            self.exhausted = true;
        }

        Some(String::from_utf8_lossy(&line).into_owned())
    }
}
