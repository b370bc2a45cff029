use super::*;
use crate::algebra::ScsInt;
use crate::solver::ScsInfo;
use libc::c_char;

pub type ScsFn = unsafe extern "C" fn(
    d: *const ScsDataFFI,
    k: *const ScsConeFFI,
    stgs: *const ScsSettingsFFI,
    sol: *mut ScsSolutionFFI,
    info: *mut ScsInfo,
) -> ScsInt;

pub type SetDefaultSettingsFn = unsafe extern "C" fn(stgs: *mut ScsSettingsFFI);

pub type VersionFn = unsafe extern "C" fn() -> *const c_char;

pub type ValidateConesFn =
    unsafe extern "C" fn(d: *const ScsDataFFI, k: *const ScsConeFFI) -> ScsInt;

pub type WriteDataFn = unsafe extern "C" fn(
    d: *const ScsDataFFI,
    k: *const ScsConeFFI,
    stgs: *const ScsSettingsFFI,
);

/// Table of native entry points.
///
/// The boundary never calls the native library except through this
/// table.  Older native versions do not export the cone validator or the
/// data writer, in which case those entries are `None` and the matching
/// operations fail with [`ScsError::NotImplemented`].
#[derive(Debug, Clone, Copy)]
pub struct ScsApi {
    pub scs: ScsFn,
    pub set_default_settings: SetDefaultSettingsFn,
    pub version: VersionFn,
    pub validate_cones: Option<ValidateConesFn>,
    pub write_data: Option<WriteDataFn>,
}

#[cfg(feature = "link-scs")]
mod linked {
    use super::*;

    extern "C" {
        pub fn scs(
            d: *const ScsDataFFI,
            k: *const ScsConeFFI,
            stgs: *const ScsSettingsFFI,
            sol: *mut ScsSolutionFFI,
            info: *mut ScsInfo,
        ) -> ScsInt;
        pub fn scs_set_default_settings(stgs: *mut ScsSettingsFFI);
        pub fn scs_version() -> *const c_char;
        pub fn scs_validate_cones(d: *const ScsDataFFI, k: *const ScsConeFFI) -> ScsInt;
        pub fn scs_write_data(
            d: *const ScsDataFFI,
            k: *const ScsConeFFI,
            stgs: *const ScsSettingsFFI,
        );
    }
}

impl ScsApi {
    /// Entry points of the native library linked at build time
    #[cfg(feature = "link-scs")]
    pub fn linked() -> Self {
        Self {
            scs: linked::scs,
            set_default_settings: linked::scs_set_default_settings,
            version: linked::scs_version,
            validate_cones: Some(linked::scs_validate_cones),
            write_data: Some(linked::scs_write_data),
        }
    }

    pub(crate) fn validate_cones_fn(&self) -> Result<ValidateConesFn, ScsError> {
        self.validate_cones
            .ok_or(ScsError::NotImplemented("validate_cones"))
    }

    pub(crate) fn write_data_fn(&self) -> Result<WriteDataFn, ScsError> {
        self.write_data.ok_or(ScsError::NotImplemented("write_data"))
    }
}
