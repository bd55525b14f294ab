//! Structured type and method signatures.
//!
//! `TypeSignature` nests without a depth limit. Dropping, comparing and
//! hashing walk an explicit worklist; `Clone` and `Debug` recurse under the
//! stack guard.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::num::NonZeroU32;

use crate::kind::{PrimitiveKind, ReferenceForm};
use crate::stack::ensure_sufficient_stack;

/// Structural shape of a type: primitive, (possibly parameterized)
/// reference, or array.
///
/// # Invariants
///
/// - `Array::element` is never itself an `Array`; extra dimensions are
///   folded into `dimensions`. [`TypeSignature::array`] maintains this.
/// - Reference names are non-empty and free of encoding delimiters
///   (`; < > ( ) [`).
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeSignature {
    Primitive(PrimitiveKind),
    Reference {
        form: ReferenceForm,
        /// `/`-separated, qualified or not.
        name: String,
        /// Empty for non-generic references.
        type_arguments: Vec<TypeSignature>,
    },
    Array {
        element: Box<TypeSignature>,
        dimensions: NonZeroU32,
    },
}

impl TypeSignature {
    pub const VOID: Self = Self::Primitive(PrimitiveKind::Void);

    /// Non-generic reference in source form (`QName;`).
    pub fn source(name: impl Into<String>) -> Self {
        Self::Reference {
            form: ReferenceForm::Source,
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Non-generic reference in binary form (`LName;`).
    pub fn binary(name: impl Into<String>) -> Self {
        Self::Reference {
            form: ReferenceForm::Binary,
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn parameterized(
        form: ReferenceForm,
        name: impl Into<String>,
        type_arguments: Vec<TypeSignature>,
    ) -> Self {
        Self::Reference {
            form,
            name: name.into(),
            type_arguments,
        }
    }

    /// Wrap `element` in `dimensions` array levels.
    ///
    /// Zero dimensions returns `element` unchanged. An array element has its
    /// dimensions merged, so `array(array(I, 1), 2)` is `[[[I`.
    pub fn array(mut element: TypeSignature, dimensions: u32) -> Self {
        let Some(dimensions) = NonZeroU32::new(dimensions) else {
            return element;
        };
        if let Self::Array {
            dimensions: inner, ..
        } = &mut element
        {
            *inner = inner.saturating_add(dimensions.get());
            return element;
        }
        Self::Array {
            element: Box::new(element),
            dimensions,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveKind::Void))
    }

    /// Number of array dimensions, `0` for non-arrays.
    pub fn array_dimensions(&self) -> u32 {
        match self {
            Self::Array { dimensions, .. } => dimensions.get(),
            _ => 0,
        }
    }

    /// The innermost element type; `self` for non-arrays.
    pub fn element_type(&self) -> &TypeSignature {
        match self {
            Self::Array { element, .. } => element,
            other => other,
        }
    }

    /// Move the direct children of `self` into `into`, leaving `self`
    /// without nested signatures.
    fn detach_children(&mut self, into: &mut Vec<TypeSignature>) {
        match self {
            Self::Primitive(_) => {}
            Self::Reference { type_arguments, .. } => into.append(type_arguments),
            Self::Array { element, .. } => {
                if !element.is_primitive() {
                    into.push(mem::replace(&mut **element, Self::VOID));
                }
            }
        }
    }

    fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}

impl Drop for TypeSignature {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut ty) = pending.pop() {
            ty.detach_children(&mut pending);
        }
    }
}

impl PartialEq for TypeSignature {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            match (left, right) {
                (Self::Primitive(a), Self::Primitive(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Self::Reference {
                        form: left_form,
                        name: left_name,
                        type_arguments: left_arguments,
                    },
                    Self::Reference {
                        form: right_form,
                        name: right_name,
                        type_arguments: right_arguments,
                    },
                ) => {
                    if left_form != right_form
                        || left_name != right_name
                        || left_arguments.len() != right_arguments.len()
                    {
                        return false;
                    }
                    pending.extend(left_arguments.iter().zip(right_arguments));
                }
                (
                    Self::Array {
                        element: left_element,
                        dimensions: left_dimensions,
                    },
                    Self::Array {
                        element: right_element,
                        dimensions: right_dimensions,
                    },
                ) => {
                    if left_dimensions != right_dimensions {
                        return false;
                    }
                    pending.push((&**left_element, &**right_element));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for TypeSignature {}

impl Hash for TypeSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(ty) = pending.pop() {
            mem::discriminant(ty).hash(state);
            match ty {
                Self::Primitive(kind) => kind.hash(state),
                Self::Reference {
                    form,
                    name,
                    type_arguments,
                } => {
                    form.hash(state);
                    name.hash(state);
                    type_arguments.len().hash(state);
                    pending.extend(type_arguments.iter().rev());
                }
                Self::Array {
                    element,
                    dimensions,
                } => {
                    dimensions.hash(state);
                    pending.push(&**element);
                }
            }
        }
    }
}

impl Clone for TypeSignature {
    fn clone(&self) -> Self {
        match self {
            Self::Primitive(kind) => Self::Primitive(*kind),
            Self::Reference {
                form,
                name,
                type_arguments,
            } => Self::Reference {
                form: *form,
                name: name.clone(),
                type_arguments: ensure_sufficient_stack(|| type_arguments.clone()),
            },
            Self::Array {
                element,
                dimensions,
            } => Self::Array {
                element: ensure_sufficient_stack(|| element.clone()),
                dimensions: *dimensions,
            },
        }
    }
}

impl fmt::Debug for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.debug_tuple("Primitive").field(kind).finish(),
            Self::Reference {
                form,
                name,
                type_arguments,
            } => ensure_sufficient_stack(|| {
                f.debug_struct("Reference")
                    .field("form", form)
                    .field("name", name)
                    .field("type_arguments", type_arguments)
                    .finish()
            }),
            Self::Array {
                element,
                dimensions,
            } => ensure_sufficient_stack(|| {
                f.debug_struct("Array")
                    .field("element", element)
                    .field("dimensions", dimensions)
                    .finish()
            }),
        }
    }
}

impl From<PrimitiveKind> for TypeSignature {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

/// Parameter types in declaration order plus a return type.
///
/// Thrown exception types are not part of a method signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSignature {
    pub parameters: Vec<TypeSignature>,
    pub return_type: TypeSignature,
}

impl MethodSignature {
    pub fn new(parameters: Vec<TypeSignature>, return_type: TypeSignature) -> Self {
        Self {
            parameters,
            return_type,
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}
