//! Boundary to the native SCS solver.
//!
//! The user facing entry point is [`Scs`], which owns a table of native
//! entry points ([`ScsApi`](ffi::ScsApi)).  Problem data is described by
//! [`ScsData`], [`ScsCone`] and [`ScsSettings`] and results are returned
//! as [`ScsStatus`], [`ScsSolution`] and [`ScsInfo`].
//!
//! Flat native records live in [`ffi`], and the pinning protocol used to
//! hand caller data to native code lives in [`marshal`].

mod cones;
mod data;
mod error;
mod info;
mod info_print;
mod scs;
mod settings;
mod solution;
mod status;

pub mod ffi;
pub mod marshal;

pub use cones::*;
pub use data::*;
pub use error::*;
pub use info::*;
pub use scs::*;
pub use settings::*;
pub use solution::*;
pub use status::*;

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "serde")]
pub use json::*;
