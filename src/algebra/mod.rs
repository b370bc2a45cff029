//! Dense and sparse matrix types exchanged with the native solver.
//!
//! The only sparse format understood by the native interface is standard
//! compressed sparse column (CSC) with zero based indexing.  Dense
//! matrices are provided so that small problems can be written down
//! directly and then encoded with [`CscMatrix::from`].

mod scalars;
pub use scalars::*;
mod error_types;
pub use error_types::*;
mod dense;
pub use dense::*;
mod csc;
pub use csc::*;

/// Dimension queries shared by the dense and sparse matrix types
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize {
        self.size().0
    }
    /// number of columns
    fn ncols(&self) -> usize {
        self.size().1
    }
    /// (rows, columns)
    fn size(&self) -> (usize, usize);
}
