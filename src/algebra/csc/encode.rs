#![allow(non_snake_case)]

//---------------------------------------------------------
// conversion between dense matrices and CSC format.
//---------------------------------------------------------

use crate::algebra::{to_scs_int, CscMatrix, FloatT, Matrix, ScsInt};

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Encode a dense matrix in CSC format.
    ///
    /// Columns are scanned left to right and rows top to bottom, so
    /// row indices within each column are strictly increasing.  Only
    /// entries that compare unequal to zero are stored.  The comparison
    /// is exact, i.e. tiny or subnormal values are kept while both
    /// `0.0` and `-0.0` are dropped.
    ///
    /// # Panics
    /// Panics if the number of rows or stored entries exceeds the
    /// range of the native integer type.
    pub fn from_dense(A: &Matrix<T>) -> Self {
        let (m, n) = (A.m, A.n);
        assert!(
            to_scs_int(m).is_some() && to_scs_int(m * n).is_some(),
            "dense matrix exceeds the native integer range"
        );

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        for col in 0..n {
            // an empty column starts where the previous one ended
            colptr.push(rowval.len() as ScsInt);
            for (row, &v) in A.col_slice(col).iter().enumerate() {
                if v != T::zero() {
                    rowval.push(row as ScsInt);
                    nzval.push(v);
                }
            }
        }
        colptr.push(rowval.len() as ScsInt);

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Decode to a dense matrix
    pub fn to_dense(&self) -> Matrix<T> {
        let mut A = Matrix::zeros((self.m, self.n));
        for col in 0..self.n {
            let first = self.colptr[col] as usize;
            let last = self.colptr[col + 1] as usize;
            for (&row, &v) in self.rowval[first..last].iter().zip(&self.nzval[first..last]) {
                A[(row as usize, col)] = v;
            }
        }
        A
    }
}

impl<T> From<&Matrix<T>> for CscMatrix<T>
where
    T: FloatT,
{
    fn from(A: &Matrix<T>) -> Self {
        CscMatrix::from_dense(A)
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for CscMatrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        CscMatrix::from_dense(&Matrix::from(rows))
    }
}

#[test]
fn test_encode_empty_columns() {
    let A = CscMatrix::from(&[
        [0., 1., 0., 0.], //
        [0., 2., 0., 3.], //
    ]);

    assert_eq!(A.colptr, vec![0, 0, 2, 2, 3]);
    assert_eq!(A.rowval, vec![0, 1, 1]);
    assert_eq!(A.nzval, vec![1., 2., 3.]);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_encode_exact_zero_policy() {
    let tiny = f64::MIN_POSITIVE / 4.0; // subnormal
    let A = CscMatrix::from(&[
        [-0.0, tiny], //
        [f64::NAN, 0.0], //
    ]);

    assert_eq!(A.colptr, vec![0, 1, 2]);
    assert_eq!(A.rowval, vec![1, 0]);
    assert!(A.nzval[0].is_nan());
    assert_eq!(A.nzval[1], tiny);
}

#[test]
fn test_encode_zero_matrix() {
    let A = CscMatrix::from_dense(&Matrix::<f64>::zeros((3, 4)));
    assert_eq!(A.nnz(), 0);
    assert_eq!(A.colptr, vec![0; 5]);
    assert!(A.rowval.is_empty());
    assert!(A.nzval.is_empty());
}

#[test]
fn test_decode() {
    let B = Matrix::from(&[
        [1., 0., 2.], //
        [0., 0., 3.], //
    ]);
    let A = CscMatrix::from(&B);
    assert_eq!(A.to_dense(), B);
    assert_eq!(CscMatrix::<f64>::identity(2).to_dense(), Matrix::from(&[[1., 0.], [0., 1.]]));
}
