//! Derived display forms.
//!
//! - Simple names drop qualifiers: `Ljava/lang/String;` is `String`.
//! - Qualified names keep them, dotted: `java.lang.String`.
//! - Method displays read like a declaration: `String foo(String text, int length)`.

use crate::decode::{decode_method, decode_type};
use crate::error::MalformedSignature;
use crate::kind::{PrimitiveKind, ReferenceForm};
use crate::signature::{MethodSignature, TypeSignature};
use crate::stack::ensure_sufficient_stack;

/// Simple (unqualified) display name of an encoded type.
///
/// Never fails. Text that does not decode falls back to a lexical strip:
/// array markers become `[]` suffixes, a `Q`/`L` wrapper and any type
/// arguments are dropped, and everything up to the last `/` or `.` is
/// removed. An unqualified plain name comes back unchanged.
///
/// ```
/// assert_eq!(jdm_signature::simple_name("Qjava/lang/String;"), "String");
/// assert_eq!(jdm_signature::simple_name("[I"), "int[]");
/// assert_eq!(jdm_signature::simple_name("String"), "String");
/// ```
pub fn simple_name(text: &str) -> String {
    match decode_type(text) {
        Ok(ty) => ty.simple_name(),
        Err(_) => lexical_simple_name(text),
    }
}

/// Fully qualified, dotted display name of an encoded type.
pub fn qualified_name(text: &str) -> Result<String, MalformedSignature> {
    decode_type(text).map(|ty| ty.qualified_name())
}

/// Number of parameters in an encoded method signature.
pub fn parameter_count(method: &str) -> Result<usize, MalformedSignature> {
    decode_method(method).map(|sig| sig.parameter_count())
}

/// Encoded parameter types of an encoded method signature, in order.
pub fn parameter_types(method: &str) -> Result<Vec<String>, MalformedSignature> {
    let sig = decode_method(method)?;
    Ok(sig.parameters.iter().map(ToString::to_string).collect())
}

/// Encoded return type of an encoded method signature.
pub fn return_type(method: &str) -> Result<String, MalformedSignature> {
    decode_method(method).map(|sig| sig.return_type.to_string())
}

/// Render a method the way it would be declared.
///
/// Parameter names are used positionally where given; `qualify` selects
/// qualified over simple type names.
///
/// ```
/// use jdm_signature::{decode_method, method_display};
///
/// let sig = decode_method("(QString;I)V").unwrap_or_else(|e| panic!("{e}"));
/// let names = ["text".to_owned(), "length".to_owned()];
/// assert_eq!(method_display(&sig, "foo", Some(names.as_slice()), false), "void foo(String text, int length)");
/// ```
pub fn method_display(
    signature: &MethodSignature,
    name: &str,
    parameter_names: Option<&[String]>,
    qualify: bool,
) -> String {
    let render = |ty: &TypeSignature| {
        if qualify {
            ty.qualified_name()
        } else {
            ty.simple_name()
        }
    };

    let mut out = render(&signature.return_type);
    out.push(' ');
    out.push_str(name);
    out.push('(');
    for (i, parameter) in signature.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render(parameter));
        if let Some(param_name) = parameter_names.and_then(|names| names.get(i)) {
            out.push(' ');
            out.push_str(param_name);
        }
    }
    out.push(')');
    out
}

impl TypeSignature {
    /// Display name without package qualifiers (`List<String>[]`).
    pub fn simple_name(&self) -> String {
        let mut out = String::new();
        write_name(self, &mut out, NameStyle::Simple);
        out
    }

    /// Display name with dotted qualifiers (`java.util.List<java.lang.String>[]`).
    pub fn qualified_name(&self) -> String {
        let mut out = String::new();
        write_name(self, &mut out, NameStyle::Qualified);
        out
    }
}

#[derive(Copy, Clone)]
enum NameStyle {
    Simple,
    Qualified,
}

fn write_name(ty: &TypeSignature, out: &mut String, style: NameStyle) {
    match ty {
        TypeSignature::Primitive(kind) => out.push_str(kind.keyword()),
        TypeSignature::Reference {
            name,
            type_arguments,
            ..
        } => {
            match style {
                NameStyle::Simple => out.push_str(last_segment(name)),
                NameStyle::Qualified => {
                    out.extend(name.chars().map(|c| if c == '/' { '.' } else { c }));
                }
            }
            if !type_arguments.is_empty() {
                out.push('<');
                for (i, argument) in type_arguments.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    ensure_sufficient_stack(|| write_name(argument, out, style));
                }
                out.push('>');
            }
        }
        TypeSignature::Array {
            element,
            dimensions,
        } => {
            write_name(element, out, style);
            for _ in 0..dimensions.get() {
                out.push_str("[]");
            }
        }
    }
}

/// Everything after the last `/` or `.`.
fn last_segment(name: &str) -> &str {
    name.rfind(['/', '.']).map_or(name, |i| &name[i + 1..])
}

/// Best-effort simple name for text the decoder rejected.
fn lexical_simple_name(text: &str) -> String {
    let body = text.trim_start_matches('[');
    let dimensions = text.len() - body.len();

    let mut name = body;
    let wrapped = name
        .as_bytes()
        .first()
        .is_some_and(|&b| ReferenceForm::from_marker(b).is_some())
        && name.ends_with(';');
    if wrapped {
        name = &name[1..name.len() - 1];
    }
    if let Some(open) = name.find('<') {
        name = &name[..open];
    }

    let mut out = match name.as_bytes() {
        [code] => PrimitiveKind::from_code(*code)
            .map_or_else(|| name.to_owned(), |kind| kind.keyword().to_owned()),
        _ => last_segment(name).to_owned(),
    };
    for _ in 0..dimensions {
        out.push_str("[]");
    }
    out
}
