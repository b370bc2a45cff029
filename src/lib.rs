//! __scsbridge__ is a Rust boundary layer for the
//! [SCS](https://github.com/cvxgrp/scs) conic solver.  SCS solves
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T P x + c^T x\\\\\[2ex\]
//!  \text{subject to} & Ax + s = b \\\\\[1ex\]
//!         & s \in \mathcal{K}
//!  \end{array}
//! $$
//!
//! with decision variables
//! $x \in \mathbb{R}^n$,
//! $s \in \mathbb{R}^m$
//! and data matrices
//! $P=P^\top \succeq 0$,
//! $c \in \mathbb{R}^n$,
//! $A \in \mathbb{R}^{m \times n}$, and
//! $b \in \mathbb{R}^m$.
//! The convex set $\mathcal{K}$ is a composition of zero, nonnegative,
//! box, second order, semidefinite, exponential and power cones.
//!
//! The solver itself is an external native library.  This crate
//! provides
//!
//! * __Sparse encoding__: conversion of dense matrices to the compressed
//!   sparse column format read by the solver, see [`algebra::CscMatrix`].
//!
//! * __Marshalling__: each call to the native library runs as a single
//!   transaction that pins every buffer the library reads or writes and
//!   releases all of them on every exit path, see [`solver::marshal`].
//!
//! * __Native linkage__: build with the `link-scs` feature to link the
//!   native library (`SCS_LIB_DIR`, `SCS_LIB_NAME`), or pass any table of
//!   entry points to [`solver::Scs::new`].
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "link-scs")] {
//! use scsbridge::algebra::*;
//! use scsbridge::solver::*;
//!
//! let A = CscMatrix::from(&[
//!     [-1., 1.], //
//!     [1., 1.], //
//! ]);
//! let data = ScsData::new(A, None, vec![1., 2.], vec![-1., -1.]);
//! let cone = ScsCone { l: 2, ..ScsCone::default() };
//!
//! let mut scs = Scs::linked();
//! let result = scs.solve(&data, &cone, &ScsSettings::default()).unwrap();
//! println!("{} x = {:?}", result.status, result.solution.x);
//! # }
//! ```

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of this crate (not of the native library, see
/// [`solver::Scs::version`])
pub fn crate_version() -> &'static str {
    VERSION
}

pub mod algebra;
pub mod io;
pub mod solver;
