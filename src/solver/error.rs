use crate::algebra::{ScsInt, SparseFormatError};
use crate::solver::SettingsError;
use thiserror::Error;

/// Error type returned by the boundary operations of [`Scs`](crate::solver::Scs).
///
/// A negative native exit flag is not an error.  It is reported as a
/// regular [`ScsStatus`](crate::solver::ScsStatus).
#[derive(Error, Debug)]
pub enum ScsError {
    /// A sparse matrix is not in valid CSC format
    #[error("Sparse matrix format error: {0}")]
    SparseFormat(#[from] SparseFormatError),
    /// An array or matrix extent disagrees with the problem dimensions
    #[error("Incompatible dimension for \"{field}\": expected {expected}, found {found}")]
    IncompatibleDimension {
        /// offending field
        field: &'static str,
        /// required extent
        expected: usize,
        /// actual extent
        found: usize,
    },
    /// A count does not fit the native integer type
    #[error("Value of \"{0}\" exceeds the native integer range")]
    IntegerOverflow(&'static str),
    /// A string passed to the native side contains a NUL byte
    #[error("String \"{0}\" contains an interior NUL byte")]
    InteriorNul(&'static str),
    /// A string returned by the native side could not be decoded
    #[error("Native string \"{0}\" is null or not valid UTF-8")]
    InvalidString(&'static str),
    /// A required filename setting is absent
    #[error("Setting \"{0}\" is required for this operation")]
    MissingFilename(&'static str),
    /// The native cone validator rejected the cone composition
    #[error("Cone validation failed with native code {code}")]
    InvalidCones {
        /// native return code
        code: ScsInt,
    },
    /// The native solver returned an exit flag with no known meaning
    #[error("Unrecognized native status code {0}")]
    UnrecognizedStatus(ScsInt),
    /// The native entry point is not available in the loaded library
    #[error("Native entry point \"{0}\" is not available")]
    NotImplemented(&'static str),
    /// Settings failed numerical validation
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
    /// File or stream error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
