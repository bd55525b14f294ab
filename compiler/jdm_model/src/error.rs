//! Errors from resolving queries.

use thiserror::Error;

use crate::handle::MethodHandle;
use crate::store::StoreError;

/// Why a resolving query failed.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No live declaration matches the handle's identity. Recover by
    /// re-enumerating the enclosing type for fresh handles.
    #[error("`{handle}` does not exist")]
    StaleHandle { handle: Box<MethodHandle> },
    /// The store itself failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ModelError {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleHandle { .. })
    }
}
