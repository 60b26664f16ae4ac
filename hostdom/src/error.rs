//! Host document errors.

use thiserror::Error;

/// Errors raised by [`Document`](crate::Document) lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("no mount point named '{0}' in the document")]
    UnknownMountPoint(String),

    #[error("no element with id '{0}' in the document")]
    UnknownElement(String),
}
