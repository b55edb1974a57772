//! Incremental UTF-8 decoding over raw byte buffers.
//!
//! The distance engine walks both inputs one Unicode scalar at a time, in
//! either direction, without collecting a `Vec<char>` and without requiring
//! the whole buffer to be valid UTF-8 up front. Decoding stops silently at
//! the first malformed byte sequence or embedded NUL: the caller observes
//! a shorter sequence, never an error.

use std::str;

use crate::Direction;

/// Decode one codepoint from the front of `buf`.
///
/// Returns the scalar and the number of bytes it occupies, or `None` when
/// the buffer is empty or does not start with a well-formed sequence.
pub fn decode_forward(buf: &[u8]) -> Option<(char, usize)> {
    let window = &buf[..buf.len().min(4)];
    match str::from_utf8(window) {
        Ok(s) => s.chars().next().map(|c| (c, c.len_utf8())),
        // The leading codepoint may still be fine when a later byte in the
        // window is not.
        Err(e) if e.valid_up_to() > 0 => {
            let s = str::from_utf8(&window[..e.valid_up_to()]).ok()?;
            s.chars().next().map(|c| (c, c.len_utf8()))
        }
        Err(_) => None,
    }
}

/// Decode one codepoint from the back of `buf`.
///
/// Scans backward over at most four bytes looking for a lead byte, then
/// requires the lead byte's sequence to end exactly at the buffer end.
pub fn decode_backward(buf: &[u8]) -> Option<(char, usize)> {
    let len = buf.len();
    if len == 0 {
        return None;
    }
    let floor = len.saturating_sub(4);
    let mut start = len - 1;
    while start > floor && buf[start] & 0xC0 == 0x80 {
        start -= 1;
    }
    let (c, n) = decode_forward(&buf[start..])?;
    (start + n == len).then_some((c, n))
}

/// Simple per-codepoint case folding.
///
/// Mappings that would expand to more than one codepoint (e.g. `'İ'`) are
/// left unfolded so folding never changes sequence length.
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Iterator over the codepoints of a byte buffer in a fixed direction.
///
/// NUL is the reserved "no value" sentinel: a decoded `'\0'` ends the
/// sequence just like malformed bytes do, so downstream comparisons never
/// see it.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    rest: &'a [u8],
    direction: Direction,
    fold: bool,
}

impl<'a> Codepoints<'a> {
    /// Iterate `buf` in `direction`, folding case when `fold` is set.
    pub fn new(buf: &'a [u8], direction: Direction, fold: bool) -> Self {
        Self { rest: buf, direction, fold }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let (c, n) = match self.direction {
            Direction::Forward => decode_forward(self.rest)?,
            Direction::Reverse => decode_backward(self.rest)?,
        };
        if c == '\0' {
            self.rest = &[];
            return None;
        }
        self.rest = match self.direction {
            Direction::Forward => &self.rest[n..],
            Direction::Reverse => &self.rest[..self.rest.len() - n],
        };
        Some(if self.fold { fold(c) } else { c })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
