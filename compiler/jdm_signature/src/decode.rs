//! Recursive-descent decoder.
//!
//! One function per grammar production, all sharing a [`Cursor`]. No
//! production needs more than one byte of lookahead, so decoding is a
//! single pass, linear in the input length.

use crate::cursor::{is_delimiter, Cursor};
use crate::error::{MalformedSignature, SignatureErrorKind};
use crate::kind::{PrimitiveKind, ReferenceForm};
use crate::signature::{MethodSignature, TypeSignature};
use crate::stack::ensure_sufficient_stack;

/// Decode exactly one type signature.
///
/// ```
/// use jdm_signature::{decode_type, PrimitiveKind, TypeSignature};
///
/// assert_eq!(decode_type("I").ok(), Some(TypeSignature::Primitive(PrimitiveKind::Int)));
/// assert!(decode_type("Q").is_err());
/// ```
pub fn decode_type(text: &str) -> Result<TypeSignature, MalformedSignature> {
    let mut cursor = Cursor::new(text);
    let ty = parse_type(&mut cursor)?;
    finish(&cursor)?;
    Ok(ty)
}

/// Decode a method signature `( params ) return`.
///
/// Rejects unbalanced parameter delimiters and anything after the return
/// type.
pub fn decode_method(text: &str) -> Result<MethodSignature, MalformedSignature> {
    let mut cursor = Cursor::new(text);
    cursor.expect(b'(')?;

    let mut parameters = Vec::new();
    while !cursor.eat(b')') {
        parameters.push(parse_type(&mut cursor)?);
    }

    let return_type = parse_type(&mut cursor)?;
    finish(&cursor)?;
    Ok(MethodSignature {
        parameters,
        return_type,
    })
}

fn finish(cursor: &Cursor<'_>) -> Result<(), MalformedSignature> {
    if cursor.is_eof() {
        Ok(())
    } else {
        Err(cursor.error(SignatureErrorKind::TrailingContent))
    }
}

/// `'['* element`
fn parse_type(cursor: &mut Cursor<'_>) -> Result<TypeSignature, MalformedSignature> {
    let dimensions = cursor.eat_run(b'[');
    let element = parse_element(cursor)?;
    let dimensions = u32::try_from(dimensions).unwrap_or(u32::MAX);
    Ok(TypeSignature::array(element, dimensions))
}

/// `primitive | ('Q' | 'L') reference`
fn parse_element(cursor: &mut Cursor<'_>) -> Result<TypeSignature, MalformedSignature> {
    let Some(byte) = cursor.current() else {
        return Err(cursor.error(SignatureErrorKind::UnexpectedEnd));
    };

    if let Some(kind) = PrimitiveKind::from_code(byte) {
        cursor.advance();
        return Ok(TypeSignature::Primitive(kind));
    }
    if let Some(form) = ReferenceForm::from_marker(byte) {
        cursor.advance();
        return parse_reference(cursor, form);
    }

    let found = cursor.current_char().unwrap_or(char::from(byte));
    let kind = if is_delimiter(byte) {
        SignatureErrorKind::UnexpectedDelimiter(found)
    } else {
        SignatureErrorKind::UnknownPrimitive(found)
    };
    Err(cursor.error(kind))
}

/// `name ('<' type+ '>')? ';'`, marker already consumed.
fn parse_reference(
    cursor: &mut Cursor<'_>,
    form: ReferenceForm,
) -> Result<TypeSignature, MalformedSignature> {
    let name = cursor.eat_name()?.to_owned();

    let mut type_arguments = Vec::new();
    if cursor.eat(b'<') {
        if cursor.current() == Some(b'>') {
            return Err(cursor.error(SignatureErrorKind::EmptyTypeArguments));
        }
        while !cursor.eat(b'>') {
            let argument = ensure_sufficient_stack(|| parse_type(cursor))?;
            type_arguments.push(argument);
        }
    }

    cursor.expect(b';')?;
    Ok(TypeSignature::Reference {
        form,
        name,
        type_arguments,
    })
}
