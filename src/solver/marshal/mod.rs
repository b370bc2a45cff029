//! Transactional marshalling of problem data across the native boundary.
//!
//! A [`Marshaller`] opens one transaction. It pins every array that
//! native code will read or write in its [`PinRegistry`], builds the flat
//! records, and releases all pins when the transaction ends.

mod flatten;
mod registry;

pub use flatten::*;
pub use registry::*;
