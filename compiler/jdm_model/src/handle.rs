//! Method handles and their handle-only queries.

use std::fmt;

use jdm_signature::simple_name;

/// Element name reserved for static initializers.
pub const STATIC_INITIALIZER_NAME: &str = "<clinit>";

/// Opaque reference to an enclosing type.
///
/// The store decides what the text means; the model only compares it and
/// derives a simple name from it for constructors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment after any `/`, `.` or `$` separator.
    pub fn simple_name(&self) -> &str {
        self.0
            .rfind(['/', '.', '$'])
            .map_or(self.0.as_str(), |i| &self.0[i + 1..])
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a declared method.
///
/// Two handles with the same enclosing type, name and parameter encodings
/// denote the same element, whether or not they are the same allocation.
/// A handle never holds resolved details; see the resolving queries for
/// those.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodHandle {
    enclosing: TypeRef,
    name: String,
    parameter_types: Vec<String>,
}

impl MethodHandle {
    /// Handle for an ordinary method.
    pub fn method<P>(enclosing: TypeRef, name: impl Into<String>, parameter_types: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            enclosing,
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Handle for a constructor, named after the enclosing type.
    pub fn constructor<P>(enclosing: TypeRef, parameter_types: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let name = enclosing.simple_name().to_owned();
        Self::method(enclosing, name, parameter_types)
    }

    /// Handle for a type's static initializer.
    pub fn static_initializer(enclosing: TypeRef) -> Self {
        Self::method(enclosing, STATIC_INITIALIZER_NAME, std::iter::empty::<String>())
    }

    pub fn enclosing_type(&self) -> &TypeRef {
        &self.enclosing
    }

    /// Declared name; the type's simple name for constructors,
    /// [`STATIC_INITIALIZER_NAME`] for static initializers.
    pub fn element_name(&self) -> &str {
        &self.name
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_types.len()
    }

    /// Encoded parameter types exactly as the handle was built with them.
    pub fn raw_parameter_signatures(&self) -> &[String] {
        &self.parameter_types
    }

    /// Loose "looks like the same method" check.
    ///
    /// Names and arities must match, and each parameter's simple type name
    /// must match positionally. Qualifiers, encoding form, return types and
    /// exceptions are ignored, so `QString;` is similar to
    /// `Ljava/lang/String;`.
    pub fn is_similar(&self, other: &MethodHandle) -> bool {
        self.name == other.name
            && self.parameter_count() == other.parameter_count()
            && self
                .parameter_types
                .iter()
                .zip(&other.parameter_types)
                .all(|(a, b)| a == b || simple_name(a) == simple_name(b))
    }
}

impl fmt::Display for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}(", self.enclosing, self.name)?;
        for parameter in &self.parameter_types {
            f.write_str(parameter)?;
        }
        f.write_str(")")
    }
}
