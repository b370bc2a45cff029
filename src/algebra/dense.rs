#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Dense matrix stored in column major format
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [1.  0.  5.]
///     [2.  4.  0.]
/// ```
///
/// ```
/// use scsbridge::algebra::Matrix;
///
/// let A = Matrix::from(&[
///     [1., 0., 5.], //
///     [2., 4., 0.], //
/// ]);
///
/// assert_eq!(A[(1, 1)], 4.);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// An `m x n` matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// column major data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// values of column `col`
    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        assert!(idx.0 < self.m && idx.1 < self.n);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        assert!(idx.0 < self.m && idx.1 < self.n);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

// construct from a nested array of rows, i.e. the matrix
// is written down in the way it reads on the page

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut A = Matrix::zeros((R, C));
        for (r, row) in rows.iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                A[(r, c)] = val;
            }
        }
        A
    }
}

#[test]
fn test_dense_from_rows() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(A.col_slice(2), &[3., 6.]);
    assert_eq!(A[(1, 0)], 4.);
}
