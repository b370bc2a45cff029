use crate::algebra::ScsInt;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Exit flag returned by the native solver.
///
/// Negative values denote abnormal termination, positive values a
/// (possibly inaccurate) solution.  The numeric values match the native
/// status codes and are available through [`code`](ScsStatus::code).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScsStatus {
    /// Problem is primal infeasible (reduced accuracy).
    InfeasibleInaccurate = -7,
    /// Problem is primal unbounded (reduced accuracy).
    UnboundedInaccurate = -6,
    /// Solve was interrupted by a signal.
    Interrupted = -5,
    /// Solver failed, e.g. because the problem data was rejected.
    Failed = -4,
    /// Solver could not reach a conclusion.
    Indeterminate = -3,
    /// Primal infeasible, dual unbounded.
    Infeasible = -2,
    /// Primal unbounded, dual infeasible.
    Unbounded = -1,
    /// Never returned by a completed solve, used as placeholder.
    Unfinished = 0,
    /// Solver terminated with a solution.
    Solved = 1,
    /// Solver terminated with a solution (reduced accuracy).
    SolvedInaccurate = 2,
}

impl ScsStatus {
    /// Map a native exit flag, returning `None` for unknown values.
    pub fn from_code(code: ScsInt) -> Option<Self> {
        ScsStatus::from_i64(code as i64)
    }

    /// Native exit flag
    pub fn code(&self) -> ScsInt {
        *self as ScsInt
    }

    /// True for `Solved` and `SolvedInaccurate`.
    pub fn is_solved(&self) -> bool {
        self.code() > 0
    }

    /// True if the native output buffers carry data that is copied
    /// back to the caller's solution.
    pub fn has_solution(&self) -> bool {
        self.code() >= 0
    }

    /// True for any primal infeasibility outcome
    pub fn is_infeasible(&self) -> bool {
        matches!(
            *self,
            ScsStatus::Infeasible | ScsStatus::InfeasibleInaccurate
        )
    }

    /// True for any primal unboundedness outcome
    pub fn is_unbounded(&self) -> bool {
        matches!(*self, ScsStatus::Unbounded | ScsStatus::UnboundedInaccurate)
    }
}

impl std::fmt::Display for ScsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScsStatus::InfeasibleInaccurate => "infeasible (inaccurate)",
            ScsStatus::UnboundedInaccurate => "unbounded (inaccurate)",
            ScsStatus::Interrupted => "interrupted",
            ScsStatus::Failed => "failure",
            ScsStatus::Indeterminate => "indeterminate",
            ScsStatus::Infeasible => "infeasible",
            ScsStatus::Unbounded => "unbounded",
            ScsStatus::Unfinished => "unfinished",
            ScsStatus::Solved => "solved",
            ScsStatus::SolvedInaccurate => "solved (inaccurate)",
        };
        write!(f, "{}", s)
    }
}

#[test]
fn test_status_codes() {
    for code in -7..=2 {
        let status = ScsStatus::from_code(code).unwrap();
        assert_eq!(status.code(), code);
        assert_eq!(status.has_solution(), code >= 0);
        assert_eq!(status.is_solved(), code > 0);
    }
    assert!(ScsStatus::from_code(-8).is_none());
    assert!(ScsStatus::from_code(3).is_none());

    assert!(ScsStatus::InfeasibleInaccurate.is_infeasible());
    assert!(ScsStatus::Unbounded.is_unbounded());
    assert!(!ScsStatus::Solved.is_infeasible());
    assert_eq!(ScsStatus::SolvedInaccurate.to_string(), "solved (inaccurate)");
}
