//! Errors reported by the containers in this crate.
//!
//! Most lookups report absence through `Option` instead. The variants here
//! cover the few operations that can be misused.

use crate::content::ContentType;

/// Errors raised by fallible constructors and conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A hash table needs at least one bucket.
    #[error("hash table capacity must be at least 1")]
    ZeroCapacity,
    /// The content stored in a node was not of the requested type.
    #[error("expected {expected} content, found {found}")]
    TypeMismatch {
        /// The type the caller asked for.
        expected: ContentType,
        /// The type actually stored.
        found: ContentType,
    },
}
