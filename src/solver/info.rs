use crate::algebra::{ScsFloat, ScsInt};
use libc::c_char;

const INFO_STRLEN: usize = 128;

/// Solve report filled by the native solver.
///
/// The layout matches the native info record, so a pointer to this
/// struct is passed to the solver directly.  Times are in milliseconds.
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(missing_docs)]
pub struct ScsInfo {
    pub iter: ScsInt,
    status: [c_char; INFO_STRLEN],
    lin_sys_solver: [c_char; INFO_STRLEN],
    pub status_val: ScsInt,
    pub scale_updates: ScsInt,
    pub pobj: ScsFloat,
    pub dobj: ScsFloat,
    pub res_pri: ScsFloat,
    pub res_dual: ScsFloat,
    pub gap: ScsFloat,
    pub res_infeas: ScsFloat,
    pub res_unbdd_a: ScsFloat,
    pub res_unbdd_p: ScsFloat,
    pub setup_time: ScsFloat,
    pub solve_time: ScsFloat,
    pub scale: ScsFloat,
    pub comp_slack: ScsFloat,
    pub rejected_accel_steps: ScsInt,
    pub accepted_accel_steps: ScsInt,
    pub lin_sys_time: ScsFloat,
    pub cone_time: ScsFloat,
    pub accel_time: ScsFloat,
}

impl Default for ScsInfo {
    fn default() -> Self {
        Self {
            iter: 0,
            status: [0; INFO_STRLEN],
            lin_sys_solver: [0; INFO_STRLEN],
            status_val: 0,
            scale_updates: 0,
            pobj: 0.,
            dobj: 0.,
            res_pri: 0.,
            res_dual: 0.,
            gap: 0.,
            res_infeas: 0.,
            res_unbdd_a: 0.,
            res_unbdd_p: 0.,
            setup_time: 0.,
            solve_time: 0.,
            scale: 0.,
            comp_slack: 0.,
            rejected_accel_steps: 0,
            accepted_accel_steps: 0,
            lin_sys_time: 0.,
            cone_time: 0.,
            accel_time: 0.,
        }
    }
}

impl ScsInfo {
    /// Status string, e.g. "solved"
    pub fn status(&self) -> String {
        decode_fixed(&self.status)
    }

    /// Name of the linear system solver used by the native library
    pub fn lin_sys_solver(&self) -> String {
        decode_fixed(&self.lin_sys_solver)
    }

    /// Overwrite the status string, truncating to the fixed width.
    /// Intended for native test doubles.
    pub fn set_status(&mut self, s: &str) {
        encode_fixed(&mut self.status, s);
    }

    /// Overwrite the linear system solver name, truncating to the
    /// fixed width.  Intended for native test doubles.
    pub fn set_lin_sys_solver(&mut self, s: &str) {
        encode_fixed(&mut self.lin_sys_solver, s);
    }
}

impl std::fmt::Debug for ScsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScsInfo")
            .field("iter", &self.iter)
            .field("status", &self.status())
            .field("lin_sys_solver", &self.lin_sys_solver())
            .field("status_val", &self.status_val)
            .field("pobj", &self.pobj)
            .field("dobj", &self.dobj)
            .field("res_pri", &self.res_pri)
            .field("res_dual", &self.res_dual)
            .field("gap", &self.gap)
            .field("setup_time", &self.setup_time)
            .field("solve_time", &self.solve_time)
            .finish_non_exhaustive()
    }
}

// the native side may fill all 128 bytes without a terminator
fn decode_fixed(buf: &[c_char; INFO_STRLEN]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn encode_fixed(buf: &mut [c_char; INFO_STRLEN], s: &str) {
    *buf = [0; INFO_STRLEN];
    for (dst, &src) in buf.iter_mut().zip(s.as_bytes().iter().take(INFO_STRLEN - 1)) {
        *dst = src as c_char;
    }
}

#[test]
fn test_info_strings() {
    let mut info = ScsInfo::default();
    assert_eq!(info.status(), "");
    assert_eq!(info.iter, 0);

    info.set_status("solved");
    info.set_lin_sys_solver("sparse-direct-amd-qdldl");
    assert_eq!(info.status(), "solved");
    assert_eq!(info.lin_sys_solver(), "sparse-direct-amd-qdldl");

    // unterminated buffer is cut at its fixed width
    info.status = [b'a' as c_char; INFO_STRLEN];
    assert_eq!(info.status().len(), INFO_STRLEN);
}
