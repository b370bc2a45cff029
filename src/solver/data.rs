#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, ScsFloat, ShapedMatrix};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Problem data for the conic program
///
/// ```text
/// minimize    (1/2) x'Px + c'x
/// subject to  Ax + s = b,  s in K
/// ```
///
/// `P` is optional and, if present, must be the upper triangle of a
/// symmetric positive semidefinite `n x n` matrix.  The upper triangular
/// property is not checked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScsData {
    /// number of constraint rows
    pub m: usize,
    /// number of variables
    pub n: usize,
    /// constraint matrix, `m x n`
    pub A: CscMatrix<ScsFloat>,
    /// quadratic cost matrix, `n x n` upper triangle
    pub P: Option<CscMatrix<ScsFloat>>,
    /// constraint right hand side, length `m`
    pub b: Vec<ScsFloat>,
    /// linear cost, length `n`
    pub c: Vec<ScsFloat>,
}

impl ScsData {
    /// Assemble problem data, taking the problem dimensions from `A`.
    ///
    /// No dimension checks are made here.  Incompatible extents are
    /// reported when the data is handed to the solver.
    pub fn new(
        A: CscMatrix<ScsFloat>,
        P: Option<CscMatrix<ScsFloat>>,
        b: Vec<ScsFloat>,
        c: Vec<ScsFloat>,
    ) -> Self {
        let (m, n) = A.size();
        Self { m, n, A, P, b, c }
    }
}
