// Native test double for the SCS entry points.
//
// Each entry point is a plain `extern "C"` function that reads the flat
// records through raw pointers, exactly as the native library would,
// and records what it saw in thread local state.

#![allow(dead_code)]
#![allow(non_snake_case)]

use scsbridge::algebra::*;
use scsbridge::solver::ffi::*;
use scsbridge::solver::*;
use std::cell::RefCell;
use std::ffi::CStr;
use std::io::Write;

/// Everything the native side observed during the last call
#[derive(Debug, Clone, Default)]
pub struct Seen {
    pub m: usize,
    pub n: usize,
    pub A: Option<CscMatrix<ScsFloat>>,
    pub P: Option<CscMatrix<ScsFloat>>,
    pub b: Vec<ScsFloat>,
    pub c: Vec<ScsFloat>,
    pub cone: ScsCone,
    pub settings: Option<ScsSettings>,
    pub initial: ScsSolution,
    // names of pointer fields that were passed as null
    pub null_fields: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct MockState {
    pub exit_flag: ScsInt,
    pub solve_calls: usize,
    pub validate_calls: usize,
    pub write_calls: usize,
    pub seen: Option<Seen>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            exit_flag: 1,
            solve_calls: 0,
            validate_calls: 0,
            write_calls: 0,
            seen: None,
        }
    }
}

thread_local! {
    static MOCK: RefCell<MockState> = RefCell::new(MockState::default());
}

/// reset the test double and set the exit flag of the next solve
pub fn reset_mock(exit_flag: ScsInt) {
    MOCK.with(|m| {
        *m.borrow_mut() = MockState {
            exit_flag,
            ..MockState::default()
        }
    });
}

pub fn mock_state() -> MockState {
    MOCK.with(|m| m.borrow().clone())
}

/// table with every entry point
pub fn mock_api() -> ScsApi {
    ScsApi {
        scs: mock_scs,
        set_default_settings: mock_set_default_settings,
        version: mock_version,
        validate_cones: Some(mock_validate_cones),
        write_data: Some(mock_write_data),
    }
}

/// table of a native version without validator and data writer
pub fn legacy_api() -> ScsApi {
    ScsApi {
        validate_cones: None,
        write_data: None,
        ..mock_api()
    }
}

/// quiet default settings
pub fn quiet_settings() -> ScsSettings {
    ScsSettings {
        verbose: false,
        ..ScsSettings::default()
    }
}

// -------------------------------------
// raw record readers
// -------------------------------------

unsafe fn read_slice<T: Copy>(
    ptr: *const T,
    len: usize,
    field: &'static str,
    nulls: &mut Vec<&'static str>,
) -> Vec<T> {
    if ptr.is_null() {
        nulls.push(field);
        return Vec::new();
    }
    std::slice::from_raw_parts(ptr, len).to_vec()
}

unsafe fn output_slice<'a>(
    ptr: *mut ScsFloat,
    len: usize,
    field: &'static str,
    nulls: &mut Vec<&'static str>,
) -> &'a mut [ScsFloat] {
    if ptr.is_null() {
        nulls.push(field);
        &mut []
    } else {
        std::slice::from_raw_parts_mut(ptr, len)
    }
}

unsafe fn read_matrix(
    M: *const ScsMatrixFFI,
    field: &'static str,
    nulls: &mut Vec<&'static str>,
) -> Option<CscMatrix<ScsFloat>> {
    if M.is_null() {
        nulls.push(field);
        return None;
    }
    let M = &*M;
    let n = M.n as usize;
    let colptr = std::slice::from_raw_parts(M.p, n + 1).to_vec();
    let nnz = colptr[n] as usize;
    let rowval = read_slice(M.i, nnz, "i", nulls);
    let nzval = read_slice(M.x, nnz, "x", nulls);
    Some(CscMatrix {
        m: M.m as usize,
        n,
        colptr,
        rowval,
        nzval,
    })
}

unsafe fn read_problem(d: *const ScsDataFFI, k: *const ScsConeFFI) -> Seen {
    let mut nulls = Vec::new();
    let d = &*d;
    let k = &*k;
    let (m, n) = (d.m as usize, d.n as usize);

    let A = read_matrix(d.A, "A", &mut nulls);
    let P = read_matrix(d.P, "P", &mut nulls);
    let b = read_slice(d.b, m, "b", &mut nulls);
    let c = read_slice(d.c, n, "c", &mut nulls);

    let bbox = if k.bsize > 0 {
        let len = k.bsize as usize - 1;
        Some(BoxCone {
            bl: read_slice(k.bl, len, "bl", &mut nulls),
            bu: read_slice(k.bu, len, "bu", &mut nulls),
        })
    } else {
        None
    };
    let q = read_slice(k.q, k.qsize as usize, "q", &mut nulls);
    let s = read_slice(k.s, k.ssize as usize, "s", &mut nulls);
    let p = read_slice(k.p, k.psize as usize, "p", &mut nulls);

    let cone = ScsCone {
        z: k.z as usize,
        l: k.l as usize,
        bbox,
        q: q.into_iter().map(|v| v as usize).collect(),
        s: s.into_iter().map(|v| v as usize).collect(),
        ep: k.ep as usize,
        ed: k.ed as usize,
        p,
    };

    Seen {
        m,
        n,
        A,
        P,
        b,
        c,
        cone,
        null_fields: nulls,
        ..Seen::default()
    }
}

// -------------------------------------
// entry points
// -------------------------------------

extern "C" fn mock_scs(
    d: *const ScsDataFFI,
    k: *const ScsConeFFI,
    stgs: *const ScsSettingsFFI,
    sol: *mut ScsSolutionFFI,
    info: *mut ScsInfo,
) -> ScsInt {
    let exit_flag = MOCK.with(|m| m.borrow().exit_flag);

    unsafe {
        let mut seen = read_problem(d, k);
        seen.settings = (*stgs).to_settings().ok();

        let sol = &*sol;
        let (m, n) = (seen.m, seen.n);
        let nulls = &mut seen.null_fields;
        let x = output_slice(sol.x, n, "sol.x", nulls);
        let y = output_slice(sol.y, m, "sol.y", nulls);
        let s = output_slice(sol.s, m, "sol.s", nulls);
        seen.initial = ScsSolution {
            x: x.to_vec(),
            y: y.to_vec(),
            s: s.to_vec(),
        };

        // a recognizable answer on success, garbage otherwise
        let fill = |v: &mut [ScsFloat], base: ScsFloat| {
            for (i, vi) in v.iter_mut().enumerate() {
                *vi = if exit_flag >= 0 {
                    base + i as ScsFloat
                } else {
                    ScsFloat::NAN
                };
            }
        };
        fill(x, 1.);
        fill(y, 10.);
        fill(s, 100.);

        let info = &mut *info;
        info.iter = 7;
        info.status_val = exit_flag;
        info.pobj = -1.5;
        info.set_status(if exit_flag >= 0 { "solved" } else { "failure" });
        info.set_lin_sys_solver("sparse-direct-amd-qdldl");

        MOCK.with(|m| {
            let mut m = m.borrow_mut();
            m.solve_calls += 1;
            m.seen = Some(seen);
        });
    }
    exit_flag
}

extern "C" fn mock_set_default_settings(stgs: *mut ScsSettingsFFI) {
    let stgs = unsafe { &mut *stgs };
    stgs.normalize = 1;
    stgs.scale = 0.1;
    stgs.adaptive_scale = 1;
    stgs.rho_x = 1e-6;
    stgs.max_iters = 100_000;
    stgs.eps_abs = 1e-4;
    stgs.eps_rel = 1e-4;
    stgs.eps_infeas = 1e-7;
    stgs.alpha = 1.5;
    stgs.time_limit_secs = 0.;
    stgs.verbose = 1;
    stgs.warm_start = 0;
    stgs.acceleration_lookback = 10;
    stgs.acceleration_interval = 10;
    stgs.write_data_filename = std::ptr::null();
    stgs.log_csv_filename = std::ptr::null();
}

extern "C" fn mock_version() -> *const libc::c_char {
    b"3.2.4\0".as_ptr() as *const libc::c_char
}

// follows the checks of the native cone validator
extern "C" fn mock_validate_cones(d: *const ScsDataFFI, k: *const ScsConeFFI) -> ScsInt {
    let seen = unsafe { read_problem(d, k) };
    let cone = &seen.cone;

    let bad_rows = cone.rows() != seen.m;
    let bad_box = cone
        .bbox
        .as_ref()
        .map_or(false, |bbox| bbox.bl.iter().zip(&bbox.bu).any(|(l, u)| l > u));
    let bad_power = cone.p.iter().any(|&p| !(-1. ..=1.).contains(&p));
    let code = if bad_rows || bad_box || bad_power { -1 } else { 0 };

    MOCK.with(|m| {
        let mut m = m.borrow_mut();
        m.validate_calls += 1;
        m.seen = Some(seen);
    });
    code
}

// writes a one line summary instead of the native binary format
extern "C" fn mock_write_data(
    d: *const ScsDataFFI,
    k: *const ScsConeFFI,
    stgs: *const ScsSettingsFFI,
) {
    unsafe {
        let seen = read_problem(d, k);
        let stgs = &*stgs;
        if !stgs.write_data_filename.is_null() {
            if let Ok(path) = CStr::from_ptr(stgs.write_data_filename).to_str() {
                if let Ok(mut file) = std::fs::File::create(path) {
                    let nnz = seen.A.as_ref().map_or(0, |A| A.nnz());
                    let _ = writeln!(file, "m={} n={} nnz(A)={}", seen.m, seen.n, nnz);
                }
            }
        }
        MOCK.with(|m| m.borrow_mut().write_calls += 1);
    }
}

// -------------------------------------
// problem data
// -------------------------------------

/// maximize x + y subject to sqrt(x^2 + y^2) <= sqrt(2), x, y >= 0
///
/// 5 x 2 second order cone problem with cones {l: 2, q: [3]}
pub fn basic_socp() -> (ScsData, ScsCone) {
    let A = CscMatrix::from(&[
        [-1., 0.], // x >= 0
        [0., -1.], // y >= 0
        [0., 0.],  //
        [-1., 0.], //
        [0., -1.], //
    ]);
    let b = vec![0., 0., (2.0 as ScsFloat).sqrt(), 0., 0.];
    let c = vec![-1., -1.];
    let cone = ScsCone {
        l: 2,
        q: vec![3],
        ..ScsCone::default()
    };
    (ScsData::new(A, None, b, c), cone)
}
