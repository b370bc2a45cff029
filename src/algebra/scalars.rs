use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Core trait for floating point values held in dense and sparse matrices.
///
/// `FloatT` relies on [`num_traits`](num_traits) for its constituent trait
/// bounds.  Only the type selected by [`ScsFloat`] can cross the native
/// boundary, but the encoder works for any `FloatT`.
pub trait FloatT:
    'static + Send + Sync + Float + NumAssign + Default + Display + LowerExp + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static + Send + Sync + Float + NumAssign + Default + Display + LowerExp + Debug + Sized
{
}

// The native library fixes the widths of its integer and floating
// point types at compile time (DLONG and SFLOAT in the SCS build).
// Both must agree with the library actually linked.

cfg_if::cfg_if! {
    if #[cfg(feature = "dlong")] {
        /// Native integer type used for indices and dimensions.
        pub type ScsInt = i64;
    } else {
        /// Native integer type used for indices and dimensions.
        pub type ScsInt = libc::c_int;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "sfloat")] {
        /// Native floating point type.
        pub type ScsFloat = libc::c_float;
    } else {
        /// Native floating point type.
        pub type ScsFloat = libc::c_double;
    }
}

/// Converts a host side count into a native integer, returning `None`
/// if it does not fit.
pub(crate) fn to_scs_int(value: usize) -> Option<ScsInt> {
    ScsInt::try_from(value).ok()
}
