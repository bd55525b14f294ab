//! The boundary with the program store.
//!
//! The store owns source text, compiled artifacts and whatever index maps
//! a handle's identity to a live declaration. This module only describes
//! what the model asks of it ([`ProgramStore`]) and the snapshot it gets
//! back ([`Declaration`]).

use bitflags::bitflags;
use jdm_signature::TypeSignature;
use thiserror::Error;

use crate::handle::TypeRef;

bitflags! {
    /// Declared modifiers.
    ///
    /// Bit positions follow class-file access flags where one exists.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICTFP = 0x0800;
        /// Marked deprecated (no class-file access bit).
        const DEPRECATED = 0x0010_0000;
    }
}

/// Structural kind of a declaration, with the data only that kind has.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    Method { return_type: TypeSignature },
    Constructor,
    StaticInitializer,
}

static VOID: TypeSignature = TypeSignature::VOID;

impl DeclarationKind {
    /// Declared return type; `void` for constructors and initializers.
    pub fn return_type(&self) -> &TypeSignature {
        match self {
            Self::Method { return_type } => return_type,
            Self::Constructor | Self::StaticInitializer => &VOID,
        }
    }
}

/// Where parameter names come from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterNames {
    /// Names as written in source, in parameter order.
    Declared(Vec<String>),
    /// No source names (e.g. a binary declaration without attached source).
    Unavailable,
}

/// Snapshot of a live declaration, as returned by one store lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub modifiers: Modifiers,
    pub parameter_names: ParameterNames,
    /// Thrown types in declaration order.
    pub thrown_types: Vec<TypeSignature>,
}

impl Declaration {
    fn new(kind: DeclarationKind) -> Self {
        Self {
            kind,
            modifiers: Modifiers::empty(),
            parameter_names: ParameterNames::Unavailable,
            thrown_types: Vec::new(),
        }
    }

    pub fn method(return_type: TypeSignature) -> Self {
        Self::new(DeclarationKind::Method { return_type })
    }

    pub fn constructor() -> Self {
        Self::new(DeclarationKind::Constructor)
    }

    pub fn static_initializer() -> Self {
        Self::new(DeclarationKind::StaticInitializer).with_modifiers(Modifiers::STATIC)
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_parameter_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.parameter_names = ParameterNames::Declared(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_thrown_types(mut self, thrown: impl IntoIterator<Item = TypeSignature>) -> Self {
        self.thrown_types = thrown.into_iter().collect();
        self
    }
}

/// Failure inside the store (unreadable resource, corrupt index, ...).
///
/// The model never interprets it; it is passed through to the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lookup capability the resolving queries run against.
///
/// Implementations apply their own locking; each call should return a
/// consistent snapshot, but nothing is promised across calls.
pub trait ProgramStore {
    /// Find the declaration in `enclosing` named `name` whose encoded
    /// parameter types equal `parameter_types`.
    ///
    /// `Ok(None)` when the type or the member is gone.
    fn lookup_declaration(
        &self,
        enclosing: &TypeRef,
        name: &str,
        parameter_types: &[String],
    ) -> Result<Option<Declaration>, StoreError>;
}
