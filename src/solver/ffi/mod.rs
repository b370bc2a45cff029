//! Flat `#[repr(C)]` records matching the native call interface.
//!
//! These records only ever live inside a
//! [`PinRegistry`](crate::solver::marshal::PinRegistry) transaction.
//! Every pointer field either addresses storage pinned by that registry
//! or is null for an absent or empty array.

#![allow(non_snake_case)]
#![allow(missing_docs)]

mod api;
pub use api::*;

use crate::algebra::{ScsFloat, ScsInt};
use crate::solver::{ScsError, ScsSettings};
use libc::c_char;
use std::ffi::CStr;
use std::ptr;

/// Native CSC matrix record
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScsMatrixFFI {
    pub x: *const ScsFloat,
    pub i: *const ScsInt,
    pub p: *const ScsInt,
    pub m: ScsInt,
    pub n: ScsInt,
}

/// Native problem data record
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScsDataFFI {
    pub m: ScsInt,
    pub n: ScsInt,
    pub A: *const ScsMatrixFFI,
    pub P: *const ScsMatrixFFI,
    pub b: *const ScsFloat,
    pub c: *const ScsFloat,
}

/// Native cone record
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScsConeFFI {
    pub z: ScsInt,
    pub l: ScsInt,
    pub bu: *const ScsFloat,
    pub bl: *const ScsFloat,
    pub bsize: ScsInt,
    pub q: *const ScsInt,
    pub qsize: ScsInt,
    pub s: *const ScsInt,
    pub ssize: ScsInt,
    pub ep: ScsInt,
    pub ed: ScsInt,
    pub p: *const ScsFloat,
    pub psize: ScsInt,
}

/// Native solution record.  The arrays are written by the solver.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScsSolutionFFI {
    pub x: *mut ScsFloat,
    pub y: *mut ScsFloat,
    pub s: *mut ScsFloat,
}

/// Native settings record
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScsSettingsFFI {
    pub normalize: ScsInt,
    pub scale: ScsFloat,
    pub adaptive_scale: ScsInt,
    pub rho_x: ScsFloat,
    pub max_iters: ScsInt,
    pub eps_abs: ScsFloat,
    pub eps_rel: ScsFloat,
    pub eps_infeas: ScsFloat,
    pub alpha: ScsFloat,
    pub time_limit_secs: ScsFloat,
    pub verbose: ScsInt,
    pub warm_start: ScsInt,
    pub acceleration_lookback: ScsInt,
    pub acceleration_interval: ScsInt,
    pub write_data_filename: *const c_char,
    pub log_csv_filename: *const c_char,
}

impl Default for ScsSettingsFFI {
    fn default() -> Self {
        Self {
            normalize: 0,
            scale: 0.,
            adaptive_scale: 0,
            rho_x: 0.,
            max_iters: 0,
            eps_abs: 0.,
            eps_rel: 0.,
            eps_infeas: 0.,
            alpha: 0.,
            time_limit_secs: 0.,
            verbose: 0,
            warm_start: 0,
            acceleration_lookback: 0,
            acceleration_interval: 0,
            write_data_filename: ptr::null(),
            log_csv_filename: ptr::null(),
        }
    }
}

impl ScsSettingsFFI {
    /// Flatten settings.  The filename pointers must have been pinned
    /// by the caller.
    pub(crate) fn from_settings(
        settings: &ScsSettings,
        write_data_filename: *const c_char,
        log_csv_filename: *const c_char,
    ) -> Self {
        Self {
            normalize: settings.normalize as ScsInt,
            scale: settings.scale,
            adaptive_scale: settings.adaptive_scale as ScsInt,
            rho_x: settings.rho_x,
            max_iters: settings.max_iters,
            eps_abs: settings.eps_abs,
            eps_rel: settings.eps_rel,
            eps_infeas: settings.eps_infeas,
            alpha: settings.alpha,
            time_limit_secs: settings.time_limit_secs,
            verbose: settings.verbose as ScsInt,
            warm_start: settings.warm_start as ScsInt,
            acceleration_lookback: settings.acceleration_lookback,
            acceleration_interval: settings.acceleration_interval,
            write_data_filename,
            log_csv_filename,
        }
    }

    /// Read back into an owned settings value.
    ///
    /// # Safety
    /// Non-null filename pointers must address NUL terminated strings.
    pub unsafe fn to_settings(&self) -> Result<ScsSettings, ScsError> {
        Ok(ScsSettings {
            normalize: self.normalize != 0,
            scale: self.scale,
            adaptive_scale: self.adaptive_scale != 0,
            rho_x: self.rho_x,
            max_iters: self.max_iters,
            eps_abs: self.eps_abs,
            eps_rel: self.eps_rel,
            eps_infeas: self.eps_infeas,
            alpha: self.alpha,
            time_limit_secs: self.time_limit_secs,
            verbose: self.verbose != 0,
            warm_start: self.warm_start != 0,
            acceleration_lookback: self.acceleration_lookback,
            acceleration_interval: self.acceleration_interval,
            write_data_filename: read_optional_cstr(
                self.write_data_filename,
                "write_data_filename",
            )?,
            log_csv_filename: read_optional_cstr(self.log_csv_filename, "log_csv_filename")?,
        })
    }
}

/// Copy a native-owned C string, mapping null to `None`.
///
/// # Safety
/// A non-null `ptr` must address a NUL terminated string that stays
/// valid for the duration of the call.
pub(crate) unsafe fn read_optional_cstr(
    ptr: *const c_char,
    field: &'static str,
) -> Result<Option<String>, ScsError> {
    if ptr.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(|s| Some(s.to_owned()))
        .map_err(|_| ScsError::InvalidString(field))
}

#[test]
fn test_settings_ffi() {
    let settings = ScsSettings {
        max_iters: 123,
        warm_start: true,
        ..ScsSettings::default()
    };
    let settings_ffi = ScsSettingsFFI::from_settings(&settings, ptr::null(), ptr::null());
    assert_eq!(settings_ffi.max_iters, 123);
    assert_eq!(settings_ffi.warm_start, 1);
    assert_eq!(settings_ffi.normalize, 1);

    let back = unsafe { settings_ffi.to_settings() }.unwrap();
    assert_eq!(back, settings);
}

#[test]
fn test_read_optional_cstr() {
    let owned = std::ffi::CString::new("out.dat").unwrap();
    let s = unsafe { read_optional_cstr(owned.as_ptr(), "f") }.unwrap();
    assert_eq!(s.as_deref(), Some("out.dat"));
    assert!(unsafe { read_optional_cstr(ptr::null(), "f") }
        .unwrap()
        .is_none());
}
