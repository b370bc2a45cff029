#![allow(non_snake_case)]

use crate::algebra::{FloatT, ScsInt, ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// Row indices and column pointers are stored with the native
/// integer type [`ScsInt`] so that they can be handed to the solver
/// without conversion.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```
/// use scsbridge::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<ScsInt>,
    /// vector of row indices
    pub rowval: Vec<ScsInt>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that data is arranged
    /// such that entries within each column appear in order of increasing
    /// row index.   Responsibility for ensuring these conditions hold
    /// is left to the caller.
    ///
    pub fn new(
        m: usize,
        n: usize,
        colptr: Vec<ScsInt>,
        rowval: Vec<ScsInt>,
        nzval: Vec<T>,
    ) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n] as usize, rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0..=n as ScsInt).collect();
        let rowval = (0..n as ScsInt).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n] as usize
    }

    /// Check that matrix data is correctly formatted.
    ///
    /// All of these conditions must hold before the matrix can be
    /// exposed to the native solver, since the solver indexes the
    /// value and row arrays through the column pointers directly.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] < 0
            || self.colptr[self.n] as usize != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = (self.colptr[col] as usize)..(self.colptr[col + 1] as usize);
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }
        //check for row values out of bounds
        if !self
            .rowval
            .iter()
            .all(|&r| r >= 0 && (r as usize) < self.m)
        {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
}

#[test]
fn test_csc_check_format() {
    let good = || CscMatrix::new(3, 2, vec![0, 2, 3], vec![0, 2, 1], vec![1., 2., 3.]);
    assert!(good().check_format().is_ok());

    let mut A = good();
    A.rowval[1] = 0;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowOrdering));

    let mut A = good();
    A.rowval[2] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    let mut A = good();
    A.colptr[1] = 4;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadColptr));

    let mut A = good();
    A.nzval.pop();
    assert_eq!(
        A.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );

    let mut A = good();
    A.n = 3;
    assert_eq!(
        A.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
}
