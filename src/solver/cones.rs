use crate::algebra::ScsFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Box cone `{(t, s) : t * bl <= s <= t * bu}`.
///
/// The cone occupies `bl.len() + 1` rows, the first of which holds the
/// scale variable `t`.  Infinite bounds are allowed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxCone {
    /// lower bounds
    pub bl: Vec<ScsFloat>,
    /// upper bounds
    pub bu: Vec<ScsFloat>,
}

impl BoxCone {
    /// Box cone with the given bounds
    pub fn new(bl: Vec<ScsFloat>, bu: Vec<ScsFloat>) -> Self {
        Self { bl, bu }
    }

    /// Number of rows occupied by the cone, including the scale row
    pub fn rows(&self) -> usize {
        self.bl.len() + 1
    }
}

/// Cone composition of the constraint rows.
///
/// The rows of `A` and `b` are assigned to cones in the fixed order
/// zero, nonnegative, box, second-order, semidefinite, primal
/// exponential, dual exponential, power.  Empty lists and a missing box
/// cone are passed to the native solver as null pointers.
///
/// ```
/// use scsbridge::solver::ScsCone;
///
/// let cone = ScsCone {
///     l: 2,
///     q: vec![3],
///     ..ScsCone::default()
/// };
/// assert_eq!(cone.rows(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScsCone {
    /// number of zero (equality) rows
    pub z: usize,
    /// number of nonnegative rows
    pub l: usize,
    /// optional box cone
    pub bbox: Option<BoxCone>,
    /// second-order cone sizes
    pub q: Vec<usize>,
    /// semidefinite cone sizes, as matrix dimension
    pub s: Vec<usize>,
    /// number of primal exponential cone triples
    pub ep: usize,
    /// number of dual exponential cone triples
    pub ed: usize,
    /// power cone parameters in `[-1, 1]`, negative for the dual cone
    pub p: Vec<ScsFloat>,
}

impl ScsCone {
    /// Number of constraint rows implied by the cone composition.
    ///
    /// A semidefinite cone of size `s` is stored as the scaled lower
    /// triangle and contributes `s(s+1)/2` rows.
    pub fn rows(&self) -> usize {
        self.z
            + self.l
            + self.bbox.as_ref().map_or(0, |b| b.rows())
            + self.q.iter().sum::<usize>()
            + self.s.iter().map(|&s| s * (s + 1) / 2).sum::<usize>()
            + 3 * self.ep
            + 3 * self.ed
            + 3 * self.p.len()
    }

    /// Number of box cone rows, or 0 when no box cone is present
    pub fn bsize(&self) -> usize {
        self.bbox.as_ref().map_or(0, |b| b.rows())
    }
}

#[test]
fn test_cone_rows() {
    assert_eq!(ScsCone::default().rows(), 0);

    let cone = ScsCone {
        z: 1,
        l: 2,
        bbox: Some(BoxCone::new(vec![0., 0.], vec![1., 1.])),
        q: vec![3, 4],
        s: vec![2, 3],
        ep: 1,
        ed: 2,
        p: vec![0.5, -0.3],
    };
    // 1 + 2 + 3 + 7 + (3 + 6) + 3 + 6 + 6
    assert_eq!(cone.bsize(), 3);
    assert_eq!(cone.rows(), 37);
}
