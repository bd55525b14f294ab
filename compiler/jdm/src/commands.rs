//! `jdm` subcommands.
//!
//! Each command returns its report as text; decode failures come back as
//! [`MalformedSignature`] for the caller to print.

use std::fmt::{self, Write};

use jdm_model::{MethodHandle, TypeRef};
use jdm_signature::{
    decode_method, decode_type, ensure_sufficient_stack, method_display, parameter_types,
    simple_name, MalformedSignature, ReferenceForm, TypeSignature,
};

/// Enclosing type used for handles built from command-line input.
const COMMAND_LINE_TYPE: &str = "<command-line>";

fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    if write(&mut out).is_err() {
        tracing::warn!("formatting a report failed; output is truncated");
    }
    out
}

/// `jdm decode <type>`
pub fn describe_type(text: &str) -> Result<String, MalformedSignature> {
    let ty = decode_type(text)?;
    tracing::debug!(%ty, "decoded type");
    Ok(render(|out| {
        writeln!(out, "encoding:  {ty}")?;
        writeln!(out, "simple:    {}", ty.simple_name())?;
        writeln!(out, "qualified: {}", ty.qualified_name())?;
        writeln!(out, "structure:")?;
        write_tree(out, &ty, 1)
    }))
}

fn write_tree(out: &mut String, ty: &TypeSignature, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match ty {
        TypeSignature::Primitive(kind) => writeln!(out, "{indent}primitive {}", kind.keyword()),
        TypeSignature::Reference {
            form,
            name,
            type_arguments,
        } => {
            let form = match form {
                ReferenceForm::Source => "source",
                ReferenceForm::Binary => "binary",
            };
            writeln!(out, "{indent}reference {name} ({form})")?;
            for argument in type_arguments {
                ensure_sufficient_stack(|| write_tree(out, argument, depth + 1))?;
            }
            Ok(())
        }
        TypeSignature::Array {
            element,
            dimensions,
        } => {
            writeln!(out, "{indent}array of {dimensions}")?;
            ensure_sufficient_stack(|| write_tree(out, element, depth + 1))
        }
    }
}

/// `jdm method <method>`
pub fn describe_method(text: &str) -> Result<String, MalformedSignature> {
    let sig = decode_method(text)?;
    Ok(render(|out| {
        writeln!(out, "encoding:   {sig}")?;
        writeln!(out, "parameters: {}", sig.parameter_count())?;
        for (i, parameter) in sig.parameters.iter().enumerate() {
            writeln!(out, "  {i}: {parameter}  {}", parameter.simple_name())?;
        }
        writeln!(
            out,
            "returns:    {}  {}",
            sig.return_type,
            sig.return_type.simple_name()
        )?;
        writeln!(out, "display:    {}", method_display(&sig, "method", None, false))
    }))
}

/// `jdm simple <type>...`; never fails.
pub fn simple_names(texts: &[String]) -> String {
    render(|out| {
        for text in texts {
            writeln!(out, "{}", simple_name(text))?;
        }
        Ok(())
    })
}

/// `jdm similar <name> <method> <method>`
pub fn similar(name: &str, first: &str, second: &str) -> Result<String, MalformedSignature> {
    let first = MethodHandle::method(TypeRef::new(COMMAND_LINE_TYPE), name, parameter_types(first)?);
    let second =
        MethodHandle::method(TypeRef::new(COMMAND_LINE_TYPE), name, parameter_types(second)?);
    let verdict = if first.is_similar(&second) {
        "similar"
    } else {
        "not similar"
    };
    Ok(format!("{verdict}\n"))
}

#[cfg(test)]
mod tests;
