//! Encoding back to text.
//!
//! `Display` on both signature types prints the encoding, so encoded text
//! can be written straight into a formatter without an intermediate string.

use std::fmt::{self, Write};

use crate::signature::{MethodSignature, TypeSignature};
use crate::stack::ensure_sufficient_stack;

/// Encode a type signature.
///
/// `decode_type(&encode_type(t)) == Ok(t)` for every `t` the decoder can
/// produce.
pub fn encode_type(ty: &TypeSignature) -> String {
    ty.to_string()
}

/// Encode a method signature as `( params ) return`.
pub fn encode_method(signature: &MethodSignature) -> String {
    signature.to_string()
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Primitive(kind) => f.write_char(char::from(kind.code())),
            TypeSignature::Reference {
                form,
                name,
                type_arguments,
            } => {
                f.write_char(char::from(form.marker()))?;
                f.write_str(name)?;
                if !type_arguments.is_empty() {
                    f.write_char('<')?;
                    for argument in type_arguments {
                        ensure_sufficient_stack(|| fmt::Display::fmt(argument, f))?;
                    }
                    f.write_char('>')?;
                }
                f.write_char(';')
            }
            TypeSignature::Array {
                element,
                dimensions,
            } => {
                for _ in 0..dimensions.get() {
                    f.write_char('[')?;
                }
                fmt::Display::fmt(element, f)
            }
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        for parameter in &self.parameters {
            fmt::Display::fmt(parameter, f)?;
        }
        f.write_char(')')?;
        fmt::Display::fmt(&self.return_type, f)
    }
}
