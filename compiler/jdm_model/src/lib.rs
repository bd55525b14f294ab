//! Lightweight handles over declared methods.
//!
//! A [`MethodHandle`] identifies a method, constructor or static initializer
//! by enclosing type, name and encoded parameter types. It is cheap to
//! build, immutable, and comparable without touching any program state.
//!
//! Queries split in two:
//!
//! - **Handle-only** (`element_name`, `parameter_count`,
//!   `raw_parameter_signatures`, `is_similar`): answered from the handle's
//!   own fields; they cannot fail.
//! - **Resolving** (`parameter_names`, `exception_types`, `return_type`,
//!   `full_signature`, `is_constructor`, `is_main_method`, `modifiers`):
//!   look up the live [`Declaration`] through a [`ProgramStore`] on every
//!   call. Nothing is cached, so a handle can outlive its declaration;
//!   staleness only shows up as [`ModelError::StaleHandle`] from these
//!   calls.
//!
//! [`InMemoryStore`] is a thread-safe store suitable for tests and small
//! tools.

mod error;
mod handle;
mod memory;
mod resolve;
mod store;

pub use error::ModelError;
pub use handle::{MethodHandle, TypeRef, STATIC_INITIALIZER_NAME};
pub use memory::InMemoryStore;
pub use store::{Declaration, DeclarationKind, Modifiers, ParameterNames, ProgramStore, StoreError};
