use crate::algebra::ScsFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primal-dual solution vectors
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScsSolution {
    /// primal variables, length `n`
    pub x: Vec<ScsFloat>,
    /// dual variables, length `m`
    pub y: Vec<ScsFloat>,
    /// primal slacks, length `m`
    pub s: Vec<ScsFloat>,
}

impl ScsSolution {
    /// Zeroed solution for a problem with `n` variables and `m` rows
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            x: vec![0.; n],
            y: vec![0.; m],
            s: vec![0.; m],
        }
    }
}
