use crate::algebra::{ScsFloat, ScsInt};
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value the native solver would reject
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings passed to the native solver.
///
/// Defaults are the values documented for the native library, so a
/// settings object built here is identical to one populated through
/// [`Scs::set_default_settings`](crate::solver::Scs::set_default_settings).
/// The boundary forwards the settings unmodified.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScsSettings {
    ///heuristically rescale the data before solve
    #[builder(default = "true")]
    pub normalize: bool,

    ///initial dual scaling factor (may be updated if adaptive_scale is on)
    #[builder(default = "0.1")]
    pub scale: ScsFloat,

    ///adaptively update `scale`
    #[builder(default = "true")]
    pub adaptive_scale: bool,

    ///primal constraint scaling factor
    #[builder(default = "1e-6")]
    pub rho_x: ScsFloat,

    ///maximum number of iterations
    #[builder(default = "100_000")]
    pub max_iters: ScsInt,

    ///absolute convergence tolerance
    #[builder(default = "1e-4")]
    pub eps_abs: ScsFloat,

    ///relative convergence tolerance
    #[builder(default = "1e-4")]
    pub eps_rel: ScsFloat,

    ///infeasibility convergence tolerance
    #[builder(default = "1e-7")]
    pub eps_infeas: ScsFloat,

    ///Douglas-Rachford relaxation parameter
    #[builder(default = "1.5")]
    pub alpha: ScsFloat,

    ///time limit in seconds (can be fractional), 0 for no limit
    #[builder(default = "0.")]
    pub time_limit_secs: ScsFloat,

    ///native progress printing
    #[builder(default = "true")]
    pub verbose: bool,

    ///use the solution passed to the solver as initial guess
    #[builder(default = "false")]
    pub warm_start: bool,

    ///memory for acceleration
    #[builder(default = "10")]
    pub acceleration_lookback: ScsInt,

    ///interval (in iterations) at which acceleration is applied
    #[builder(default = "10")]
    pub acceleration_interval: ScsInt,

    ///if set, the native solver dumps the raw problem data to this file
    #[builder(default, setter(into, strip_option))]
    pub write_data_filename: Option<String>,

    ///if set, the native solver logs iterations to this csv file
    ///(makes the solver very slow)
    #[builder(default, setter(into, strip_option))]
    pub log_csv_filename: Option<String>,
}

impl Default for ScsSettings {
    fn default() -> ScsSettings {
        ScsSettingsBuilder::default().build().unwrap()
    }
}

impl ScsSettings {
    /// Checks that numerical values lie in the ranges accepted by the
    /// native solver.  Never called by the boundary itself.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_max_iters(self.max_iters)?;
        validate_tolerance(self.eps_abs, "eps_abs")?;
        validate_tolerance(self.eps_rel, "eps_rel")?;
        validate_tolerance(self.eps_infeas, "eps_infeas")?;
        validate_alpha(self.alpha)?;
        validate_positive(self.rho_x, "rho_x")?;
        validate_positive(self.scale, "scale")?;
        validate_time_limit(self.time_limit_secs)?;
        validate_acceleration_interval(self.acceleration_interval)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ScsSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ScsSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl ScsSettingsBuilder {
    /// check the numerical values of all fields that have been set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_iters) = self.max_iters {
            validate_max_iters(max_iters)?;
        }
        if let Some(eps_abs) = self.eps_abs {
            validate_tolerance(eps_abs, "eps_abs")?;
        }
        if let Some(eps_rel) = self.eps_rel {
            validate_tolerance(eps_rel, "eps_rel")?;
        }
        if let Some(eps_infeas) = self.eps_infeas {
            validate_tolerance(eps_infeas, "eps_infeas")?;
        }
        if let Some(alpha) = self.alpha {
            validate_alpha(alpha)?;
        }
        if let Some(rho_x) = self.rho_x {
            validate_positive(rho_x, "rho_x")?;
        }
        if let Some(scale) = self.scale {
            validate_positive(scale, "scale")?;
        }
        if let Some(time_limit_secs) = self.time_limit_secs {
            validate_time_limit(time_limit_secs)?;
        }
        if let Some(interval) = self.acceleration_interval {
            validate_acceleration_interval(interval)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_max_iters(max_iters: ScsInt) -> Result<(), SettingsError> {
    if max_iters > 0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("max_iters"))
    }
}

fn validate_tolerance(eps: ScsFloat, field: &'static str) -> Result<(), SettingsError> {
    if eps >= 0. {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

fn validate_alpha(alpha: ScsFloat) -> Result<(), SettingsError> {
    if alpha > 0. && alpha < 2. {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("alpha"))
    }
}

fn validate_positive(value: ScsFloat, field: &'static str) -> Result<(), SettingsError> {
    if value > 0. {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

fn validate_time_limit(time_limit_secs: ScsFloat) -> Result<(), SettingsError> {
    if time_limit_secs >= 0. {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("time_limit_secs"))
    }
}

fn validate_acceleration_interval(interval: ScsInt) -> Result<(), SettingsError> {
    if interval > 0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("acceleration_interval"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = ScsSettingsBuilder::default().build().unwrap();
    assert!(settings.validate().is_ok());
    assert_eq!(settings, ScsSettings::default());

    // fail on bad relaxation parameter
    assert!(ScsSettingsBuilder::default().alpha(2.0).build().is_err());

    // fail on negative tolerance
    assert!(ScsSettingsBuilder::default().eps_rel(-1e-3).build().is_err());

    // filenames are passed as plain strings
    let settings = ScsSettingsBuilder::default()
        .write_data_filename("dump.bin")
        .verbose(false)
        .build()
        .unwrap();
    assert_eq!(settings.write_data_filename.as_deref(), Some("dump.bin"));
    assert!(settings.log_csv_filename.is_none());

    // directly construct bad settings and manually check
    let settings = ScsSettings {
        max_iters: 0,
        ..ScsSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("max_iters"))
    );
}
