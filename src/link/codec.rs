//! Line codec for the host serial link.
//!
//! Wire format: one command per line, terminated by `\n`.  A single `\r`
//! before the terminator is stripped (hosts send CRLF).
//!
//! The decoder accumulates incoming bytes into a fixed buffer and yields
//! complete lines.  A line longer than [`MAX_LINE_LEN`] is discarded up to
//! its terminator and reported once as [`LinkError::LineTooLong`].

use heapless::Vec;

use crate::error::LinkError;

/// Longest accepted inbound line, excluding the terminator.
pub const MAX_LINE_LEN: usize = 64;

/// Streaming line decoder.
pub struct LineDecoder {
    buf: Vec<u8, MAX_LINE_LEN>,
    /// Dropping bytes until the next terminator.
    discarding: bool,
    /// `buf` holds a line already handed out; clear before the next byte.
    complete: bool,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            discarding: false,
            complete: false,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Some(Ok(line))` when a terminator completes a line; the
    /// slice is valid until the next call.  Returns `Some(Err(_))` when an
    /// overlong line ends.
    pub fn push(&mut self, byte: u8) -> Option<Result<&[u8], LinkError>> {
        if self.complete {
            self.buf.clear();
            self.complete = false;
        }

        if byte == b'\n' {
            if self.discarding {
                self.discarding = false;
                return Some(Err(LinkError::LineTooLong));
            }
            self.complete = true;
            let line = self.buf.as_slice();
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            return Some(Ok(line));
        }

        if !self.discarding && self.buf.push(byte).is_err() {
            self.buf.clear();
            self.discarding = true;
        }
        None
    }

    /// Bytes of the line currently being assembled.
    pub fn pending(&self) -> usize {
        if self.complete { 0 } else { self.buf.len() }
    }

    /// Drop any partial line (e.g. after a transport error).
    pub fn reset(&mut self) {
        self.buf.clear();
        self.discarding = false;
        self.complete = false;
    }
}
