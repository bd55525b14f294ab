//! Decode errors.

use thiserror::Error;

/// Text that does not match the signature grammar.
///
/// Always carries the full offending text and the byte offset at which
/// decoding stopped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed signature `{text}` at byte {offset}: {kind}")]
pub struct MalformedSignature {
    pub text: String,
    pub offset: usize,
    pub kind: SignatureErrorKind,
}

/// What went wrong while decoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureErrorKind {
    /// Input ended where a type or delimiter was required.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// Byte is neither a primitive code, a reference marker nor `[`.
    #[error("unknown type code '{0}'")]
    UnknownPrimitive(char),
    /// Reference marker followed directly by its terminator.
    #[error("empty type name")]
    EmptyName,
    /// Reference name with no `;` or `<` after it.
    #[error("unterminated type name")]
    UnterminatedName,
    /// Grammar delimiter where a type or name character was expected.
    #[error("unexpected '{0}'")]
    UnexpectedDelimiter(char),
    /// `<>` with nothing between.
    #[error("empty type argument list")]
    EmptyTypeArguments,
    /// A specific delimiter was required.
    #[error("expected '{expected}', found '{found}'")]
    Expected { expected: char, found: char },
    /// Input continues after a complete signature.
    #[error("trailing content after signature")]
    TrailingContent,
}
