use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::solver::ffi::{read_optional_cstr, ScsApi, ScsSettingsFFI};
use crate::solver::info_print;
use crate::solver::marshal::{Marshaller, PinLedger};
use crate::solver::*;
use std::io::Write;

/// Results of a call to [`Scs::solve`]
#[derive(Debug, Clone)]
pub struct ScsOutput {
    /// exit status
    pub status: ScsStatus,
    /// solution vectors.  All zeros unless the status is non-negative.
    pub solution: ScsSolution,
    /// solve report
    pub info: ScsInfo,
}

/// Handle to the native solver.
///
/// Every operation that crosses the boundary with problem data runs one
/// [`Marshaller`] transaction and makes exactly one native call.  All
/// pins taken by a transaction are released before the operation
/// returns, and are counted in the handle's [`PinLedger`].
///
/// Transactions take `&mut self`.  Use a separate handle per thread,
/// since handles are cheap and share no state.
#[derive(Debug)]
pub struct Scs {
    api: ScsApi,
    ledger: PinLedger,
    stream: PrintTarget,
}

impl Scs {
    /// Create a handle calling through the given entry point table
    pub fn new(api: ScsApi) -> Self {
        Self {
            api,
            ledger: PinLedger::new(),
            stream: PrintTarget::default(),
        }
    }

    /// Create a handle for the native library linked at build time
    #[cfg(feature = "link-scs")]
    pub fn linked() -> Self {
        Self::new(ScsApi::linked())
    }

    /// The native entry point table
    pub fn api(&self) -> &ScsApi {
        &self.api
    }

    /// Pin counts of all transactions run by this handle
    pub fn pin_ledger(&self) -> &PinLedger {
        &self.ledger
    }

    /// Version string reported by the native library
    pub fn version(&self) -> Result<String, ScsError> {
        unsafe {
            let version = (self.api.version)();
            read_optional_cstr(version, "version")?.ok_or(ScsError::InvalidString("version"))
        }
    }

    /// Overwrite `settings` with the native default settings.
    ///
    /// This is a plain value exchange: no buffers are pinned.
    pub fn set_default_settings(&self, settings: &mut ScsSettings) -> Result<(), ScsError> {
        let mut settings_ffi = ScsSettingsFFI::default();
        unsafe {
            (self.api.set_default_settings)(&mut settings_ffi);
            *settings = settings_ffi.to_settings()?;
        }
        Ok(())
    }

    /// The native default settings
    pub fn default_settings(&self) -> Result<ScsSettings, ScsError> {
        let mut settings = ScsSettings::default();
        self.set_default_settings(&mut settings)?;
        Ok(settings)
    }

    /// Check the cone composition against the problem data with the
    /// native validator.  Inputs are not modified.
    pub fn validate_cones(&mut self, data: &ScsData, cone: &ScsCone) -> Result<(), ScsError> {
        let validate = self.api.validate_cones_fn()?;

        let mut marshal = Marshaller::new(&mut self.ledger);
        let d = marshal.data(data)?;
        let k = marshal.cone(cone)?;

        let code = unsafe { validate(d, k) };
        marshal.release();

        match code {
            0 => Ok(()),
            code => Err(ScsError::InvalidCones { code }),
        }
    }

    /// Ask the native library to dump the problem to
    /// `settings.write_data_filename`.
    pub fn write_data(
        &mut self,
        data: &ScsData,
        cone: &ScsCone,
        settings: &ScsSettings,
    ) -> Result<(), ScsError> {
        let write_data = self.api.write_data_fn()?;
        if settings.write_data_filename.is_none() {
            return Err(ScsError::MissingFilename("write_data_filename"));
        }

        let mut marshal = Marshaller::new(&mut self.ledger);
        let d = marshal.data(data)?;
        let k = marshal.cone(cone)?;
        let stgs = marshal.settings(settings)?;

        unsafe { write_data(d, k, stgs) };
        marshal.release();
        Ok(())
    }

    /// Solve the problem from a zero starting point.
    ///
    /// A negative native status is not an error.  The solution is then
    /// left at zero and the status reports the outcome.
    pub fn solve(
        &mut self,
        data: &ScsData,
        cone: &ScsCone,
        settings: &ScsSettings,
    ) -> Result<ScsOutput, ScsError> {
        let mut solution = ScsSolution::new(data.n, data.m);
        let (status, info) = self.solve_with(data, cone, settings, &mut solution)?;
        Ok(ScsOutput {
            status,
            solution,
            info,
        })
    }

    /// Solve the problem, writing the result into `solution`.
    ///
    /// When `settings.warm_start` is set the native solver starts from
    /// the contents of `solution`, which must then have lengths matching
    /// the problem.  `solution` is overwritten only if the native status
    /// is non-negative and is left untouched otherwise.
    pub fn solve_with(
        &mut self,
        data: &ScsData,
        cone: &ScsCone,
        settings: &ScsSettings,
        solution: &mut ScsSolution,
    ) -> Result<(ScsStatus, ScsInfo), ScsError> {
        let mut marshal = Marshaller::new(&mut self.ledger);

        let d = marshal.data(data)?;
        let k = marshal.cone(cone)?;
        let stgs = marshal.settings(settings)?;
        let initial = if settings.warm_start {
            Some(&*solution)
        } else {
            None
        };
        let outputs = marshal.solution(initial, data.n, data.m)?;
        let info = marshal.info();

        let _ = info_print::print_configuration(
            &mut self.stream,
            data,
            cone,
            settings,
            marshal.registry().pins(),
        );

        let code = unsafe { (self.api.scs)(d, k, stgs, outputs.record.ptr(), info.ptr()) };

        let status = ScsStatus::from_code(code);
        if matches!(status, Some(status) if status.has_solution()) {
            marshal.copy_solution(&outputs, solution);
        }
        let info = marshal.read_info(&info).unwrap_or_default();
        marshal.release();

        let _ = info_print::print_footer(&mut self.stream, settings, status, &info);

        let status = status.ok_or(ScsError::UnrecognizedStatus(code))?;
        Ok((status, info))
    }
}

impl ConfigurablePrintTarget for Scs {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
