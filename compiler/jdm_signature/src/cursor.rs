//! Byte cursor over signature text.
//!
//! Every grammar delimiter is ASCII, so the cursor steps over bytes and only
//! ever stops on character boundaries: names are sliced between a marker and
//! the next `;` or `<`, both of which are single-byte.

use crate::error::{MalformedSignature, SignatureErrorKind};

/// Bytes that may not appear inside a reference name.
#[inline]
pub(crate) fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b';' | b'<' | b'>' | b'(' | b')' | b'[')
}

/// Forward-only cursor. [`Copy`] so callers can snapshot a position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte at the current position, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Character at the current position, for error reporting.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[cfg(test)]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Consume `byte` if it is next. Returns whether it was consumed.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.current() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume consecutive `byte`s, returning how many were eaten.
    pub(crate) fn eat_run(&mut self, byte: u8) -> usize {
        let start = self.pos;
        while self.eat(byte) {}
        self.pos - start
    }

    /// Consume a reference name up to (not including) the next `;` or `<`.
    ///
    /// Fails if no terminator follows, if the name is empty, or if it
    /// contains another grammar delimiter.
    pub(crate) fn eat_name(&mut self) -> Result<&'a str, MalformedSignature> {
        let text = self.text;
        let start = self.pos;
        let rest = &text.as_bytes()[start..];
        let Some(len) = memchr::memchr2(b';', b'<', rest) else {
            if let Some(bad) = rest.iter().position(|&b| is_delimiter(b)) {
                self.pos = start + bad;
                return Err(self.unexpected_delimiter());
            }
            self.pos = text.len();
            return Err(self.error(SignatureErrorKind::UnterminatedName));
        };
        if let Some(bad) = rest[..len].iter().position(|&b| is_delimiter(b)) {
            self.pos = start + bad;
            return Err(self.unexpected_delimiter());
        }
        if len == 0 {
            return Err(self.error(SignatureErrorKind::EmptyName));
        }
        self.pos = start + len;
        Ok(&text[start..self.pos])
    }

    /// Require `byte` next, reporting what was found instead.
    pub(crate) fn expect(&mut self, byte: u8) -> Result<(), MalformedSignature> {
        if self.eat(byte) {
            return Ok(());
        }
        match self.current_char() {
            None => Err(self.error(SignatureErrorKind::UnexpectedEnd)),
            Some(found) => Err(self.error(SignatureErrorKind::Expected {
                expected: char::from(byte),
                found,
            })),
        }
    }

    /// Build an error at the current position.
    pub(crate) fn error(&self, kind: SignatureErrorKind) -> MalformedSignature {
        MalformedSignature {
            text: self.text.to_owned(),
            offset: self.pos,
            kind,
        }
    }

    fn unexpected_delimiter(&self) -> MalformedSignature {
        let found = self.current_char().unwrap_or(';');
        self.error(SignatureErrorKind::UnexpectedDelimiter(found))
    }
}
