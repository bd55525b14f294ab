//! Resolving queries.
//!
//! Each query performs exactly one store lookup and computes its answer
//! from that snapshot. Nothing is cached on the handle, so two calls may
//! see different states of a store that changes in between.

use jdm_signature::{decode_type, MethodSignature};

use crate::error::ModelError;
use crate::handle::MethodHandle;
use crate::store::{Declaration, DeclarationKind, Modifiers, ParameterNames, ProgramStore};

/// Element name a main method must have.
const MAIN_METHOD_NAME: &str = "main";

/// Simple name of the element type of a main method's only parameter.
const STRING_TYPE_NAME: &str = "String";

/// Name given to parameter `index` (0-based) when none was declared.
fn synthetic_parameter_name(index: usize) -> String {
    format!("arg{}", index + 1)
}

impl MethodHandle {
    /// Fetch the live declaration behind this handle.
    #[tracing::instrument(level = "trace", skip_all, fields(method = %self))]
    pub fn declaration<S>(&self, store: &S) -> Result<Declaration, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let found = store.lookup_declaration(
            self.enclosing_type(),
            self.element_name(),
            self.raw_parameter_signatures(),
        )?;
        found.ok_or_else(|| {
            tracing::debug!(method = %self, "no live declaration, handle is stale");
            ModelError::StaleHandle {
                handle: Box::new(self.clone()),
            }
        })
    }

    /// Whether a live declaration exists. Store failures still propagate.
    pub fn exists<S>(&self, store: &S) -> Result<bool, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        match self.declaration(store) {
            Ok(_) => Ok(true),
            Err(ModelError::StaleHandle { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Parameter names in order, one per parameter.
    ///
    /// Positions without a declared name get `arg1`, `arg2`, ... by
    /// 1-based position.
    pub fn parameter_names<S>(&self, store: &S) -> Result<Vec<String>, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        let declared: &[String] = match &declaration.parameter_names {
            ParameterNames::Declared(names) => names,
            ParameterNames::Unavailable => &[],
        };
        Ok((0..self.parameter_count())
            .map(|i| match declared.get(i) {
                Some(name) if !name.is_empty() => name.clone(),
                _ => synthetic_parameter_name(i),
            })
            .collect())
    }

    /// Encoded thrown types in declaration order; empty when none.
    pub fn exception_types<S>(&self, store: &S) -> Result<Vec<String>, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        Ok(declaration
            .thrown_types
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Encoded return type; `V` for constructors.
    pub fn return_type<S>(&self, store: &S) -> Result<String, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        Ok(declaration.kind.return_type().to_string())
    }

    /// Encoded `( params ) return` signature, without name or exceptions.
    ///
    /// Parameters appear exactly as stored in the handle.
    pub fn full_signature<S>(&self, store: &S) -> Result<String, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        let mut signature = String::from("(");
        for parameter in self.raw_parameter_signatures() {
            signature.push_str(parameter);
        }
        signature.push(')');
        signature.push_str(&declaration.kind.return_type().to_string());
        Ok(signature)
    }

    /// Decoded form of [`full_signature`](Self::full_signature), or `None`
    /// when a stored parameter encoding does not decode.
    pub fn method_signature<S>(&self, store: &S) -> Result<Option<MethodSignature>, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        let parameters: Result<Vec<_>, _> = self
            .raw_parameter_signatures()
            .iter()
            .map(|p| decode_type(p))
            .collect();
        let return_type = declaration.kind.return_type().clone();
        Ok(parameters
            .ok()
            .map(|parameters| MethodSignature::new(parameters, return_type)))
    }

    pub fn is_constructor<S>(&self, store: &S) -> Result<bool, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        Ok(matches!(declaration.kind, DeclarationKind::Constructor))
    }

    /// Whether this is a program entry point: named `main`, `public
    /// static`, returning `void`, taking exactly one `String[]`.
    ///
    /// The declaration is looked up even when the name already rules the
    /// handle out, so a stale handle always reports as stale.
    pub fn is_main_method<S>(&self, store: &S) -> Result<bool, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        let declaration = self.declaration(store)?;
        Ok(self.element_name() == MAIN_METHOD_NAME
            && declaration.kind.return_type().is_void()
            && declaration
                .modifiers
                .contains(Modifiers::PUBLIC | Modifiers::STATIC)
            && matches!(self.raw_parameter_signatures(), [only] if is_string_array(only)))
    }

    pub fn modifiers<S>(&self, store: &S) -> Result<Modifiers, ModelError>
    where
        S: ProgramStore + ?Sized,
    {
        Ok(self.declaration(store)?.modifiers)
    }
}

/// One-dimensional array whose element's simple name is `String`.
fn is_string_array(encoded: &str) -> bool {
    decode_type(encoded).is_ok_and(|ty| {
        ty.array_dimensions() == 1 && ty.element_type().simple_name() == STRING_TYPE_NAME
    })
}

#[cfg(test)]
mod tests;
