//! Error types for wrapper operations.

use thiserror::Error;

use crate::path::AccessPath;
use crate::value::Kind;

/// Result type alias for wrapper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong, without the location.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The node has the wrong shape for the requested operation.
    #[error("type error: wanted {want}, got {got}")]
    TypeMismatch { want: &'static str, got: Kind },

    #[error("index out of bounds {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Signed int64 overflow error")]
    Int64Overflow,

    #[error("Unsigned uint64 underflow error")]
    Uint64Underflow,

    /// The written value contains the container it is written into.
    #[error("cyclic insert error")]
    CyclicInsert,

    /// A 64-bit value does not fit the platform-width target.
    #[error("{target} overflow error")]
    NarrowingOverflow { target: &'static str },
}

/// An [`ErrorKind`] tagged with the path of the node where it was raised.
///
/// Renders as `<path>: <message>`, for example
/// `<root>.tres: type error: wanted int, got string`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{path}: {kind}")]
pub struct Error {
    path: AccessPath,
    kind: ErrorKind,
}

impl Error {
    pub fn new(path: AccessPath, kind: ErrorKind) -> Self {
        Error { path, kind }
    }

    #[inline]
    pub fn type_mismatch(path: AccessPath, want: &'static str, got: Kind) -> Self {
        Self::new(path, ErrorKind::TypeMismatch { want, got })
    }

    #[inline]
    pub fn index_out_of_bounds(path: AccessPath, index: usize, len: usize) -> Self {
        Self::new(path, ErrorKind::IndexOutOfBounds { index, len })
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Path of the node on which the failing check ran.
    pub fn path(&self) -> &AccessPath {
        &self.path
    }

    /// The message without its path prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
