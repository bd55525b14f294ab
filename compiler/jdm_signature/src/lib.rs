//! Compact signature codec for program elements.
//!
//! Parameter types, return types and whole method signatures are carried
//! around as single strings so that element handles stay cheap to build
//! and compare. This crate converts between that text and the structured
//! [`TypeSignature`] / [`MethodSignature`] values, and derives the display
//! forms tools show to users.
//!
//! # Encoding
//!
//! | Shape | Encoding | Example |
//! |-------|----------|---------|
//! | primitive | one of `V Z B C S I J F D` | `I` |
//! | reference (source form) | `Q` name `;` | `QString;` |
//! | reference (binary form) | `L` name `;` | `Ljava/lang/String;` |
//! | parameterized | name followed by `<` args `>` | `QList<QString;>;` |
//! | array | one `[` per dimension | `[[I` |
//! | method | `(` params `)` return | `(QString;I)V` |
//!
//! Names use `/`-separated segments. Decoding is a single forward pass
//! over a byte cursor with one byte of lookahead; nesting depth is bounded
//! only by available memory.
//!
//! The codec is pure: every function here is safe to call from any thread.

mod cursor;
mod decode;
mod display;
mod encode;
mod error;
mod kind;
mod signature;
mod stack;

pub use decode::{decode_method, decode_type};
pub use display::{
    method_display, parameter_count, parameter_types, qualified_name, return_type, simple_name,
};
pub use encode::{encode_method, encode_type};
pub use error::{MalformedSignature, SignatureErrorKind};
pub use kind::{PrimitiveKind, ReferenceForm};
pub use signature::{MethodSignature, TypeSignature};
pub use stack::ensure_sufficient_stack;
