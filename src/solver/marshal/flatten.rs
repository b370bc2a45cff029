#![allow(non_snake_case)]

use super::registry::*;
use crate::algebra::{to_scs_int, CscMatrix, ScsFloat, ScsInt, ShapedMatrix};
use crate::solver::ffi::*;
use crate::solver::{ScsCone, ScsData, ScsError, ScsInfo, ScsSettings, ScsSolution};
use std::ptr;

/// Output arrays of one solve, plus the record pointing at them
pub struct SolutionBuffers {
    /// primal variables
    pub x: OutputBuffer,
    /// dual variables
    pub y: OutputBuffer,
    /// slacks
    pub s: OutputBuffer,
    /// native solution record
    pub record: PinnedRecord<ScsSolutionFFI>,
}

/// Builds flat native records from the caller's nested data.
///
/// Records are flattened leaf first, so that every pointer stored in a
/// record addresses storage that is already pinned.  All pins belong to
/// the marshaller's [`PinRegistry`] and are released when the
/// marshaller is released or dropped, whether or not flattening
/// succeeded.
pub struct Marshaller<'a> {
    registry: PinRegistry<'a>,
}

impl<'a> Marshaller<'a> {
    /// Open a transaction reporting to `ledger`
    pub fn new(ledger: &'a mut PinLedger) -> Self {
        Self {
            registry: PinRegistry::new(ledger),
        }
    }

    /// The underlying pin registry
    pub fn registry(&self) -> &PinRegistry<'a> {
        &self.registry
    }

    /// Release every pin taken so far.  Safe to call more than once.
    pub fn release(&mut self) {
        self.registry.release();
    }

    /// Flatten the problem data.  `A` is checked to be `m x n` and `P`
    /// to be `n x n`, both in valid CSC format.
    pub fn data(&mut self, data: &'a ScsData) -> Result<*const ScsDataFFI, ScsError> {
        let (m, n) = (data.m, data.n);

        // leaf arrays and matrix records first
        let A = self.matrix(&data.A, (m, n), "A")?;
        let P = match &data.P {
            Some(P) => self.matrix(P, (n, n), "P")?,
            None => ptr::null(),
        };

        check_len(data.b.len(), m, "b")?;
        check_len(data.c.len(), n, "c")?;
        let b = self.registry.pin_slice(&data.b);
        let c = self.registry.pin_slice(&data.c);

        let record = ScsDataFFI {
            m: scs_int(m, "m")?,
            n: scs_int(n, "n")?,
            A,
            P,
            b,
            c,
        };
        Ok(self.registry.pin_record(record).ptr())
    }

    fn matrix(
        &mut self,
        M: &'a CscMatrix<ScsFloat>,
        size: (usize, usize),
        field: &'static str,
    ) -> Result<*const ScsMatrixFFI, ScsError> {
        if M.nrows() != size.0 {
            return Err(dimension_error(field, size.0, M.nrows()));
        }
        if M.ncols() != size.1 {
            return Err(dimension_error(field, size.1, M.ncols()));
        }
        M.check_format()?;

        let record = ScsMatrixFFI {
            x: self.registry.pin_slice(&M.nzval),
            i: self.registry.pin_slice(&M.rowval),
            p: self.registry.pin_slice(&M.colptr),
            m: scs_int(M.m, field)?,
            n: scs_int(M.n, field)?,
        };
        Ok(self.registry.pin_record(record).ptr())
    }

    /// Flatten the cone composition.  The row count implied by the
    /// cones is not compared with the problem dimensions here.
    pub fn cone(&mut self, cone: &'a ScsCone) -> Result<*const ScsConeFFI, ScsError> {
        let (bl, bu, bsize) = match &cone.bbox {
            Some(bbox) => {
                check_len(bbox.bu.len(), bbox.bl.len(), "bu")?;
                (
                    self.registry.pin_slice(&bbox.bl),
                    self.registry.pin_slice(&bbox.bu),
                    scs_int(bbox.rows(), "bsize")?,
                )
            }
            None => (ptr::null(), ptr::null(), 0),
        };

        // cone sizes are converted to the native integer width
        let q = self.registry.pin_vec(scs_ints(&cone.q, "q")?);
        let s = self.registry.pin_vec(scs_ints(&cone.s, "s")?);
        let p = self.registry.pin_slice(&cone.p);

        let record = ScsConeFFI {
            z: scs_int(cone.z, "z")?,
            l: scs_int(cone.l, "l")?,
            bu,
            bl,
            bsize,
            q,
            qsize: scs_int(cone.q.len(), "qsize")?,
            s,
            ssize: scs_int(cone.s.len(), "ssize")?,
            ep: scs_int(cone.ep, "ep")?,
            ed: scs_int(cone.ed, "ed")?,
            p,
            psize: scs_int(cone.p.len(), "psize")?,
        };
        Ok(self.registry.pin_record(record).ptr())
    }

    /// Flatten the settings, passing all values through unmodified
    pub fn settings(
        &mut self,
        settings: &ScsSettings,
    ) -> Result<*const ScsSettingsFFI, ScsError> {
        let write_data_filename = self.registry.pin_cstring(
            settings.write_data_filename.as_deref(),
            "write_data_filename",
        )?;
        let log_csv_filename = self
            .registry
            .pin_cstring(settings.log_csv_filename.as_deref(), "log_csv_filename")?;

        let record =
            ScsSettingsFFI::from_settings(settings, write_data_filename, log_csv_filename);
        Ok(self.registry.pin_record(record).ptr())
    }

    /// Allocate output scratch for a problem with `n` variables and `m`
    /// rows.  The scratch starts from `initial` when given (warm start),
    /// and from zeros otherwise.
    pub fn solution(
        &mut self,
        initial: Option<&ScsSolution>,
        n: usize,
        m: usize,
    ) -> Result<SolutionBuffers, ScsError> {
        let (x, y, s) = match initial {
            Some(sol) => {
                check_len(sol.x.len(), n, "x")?;
                check_len(sol.y.len(), m, "y")?;
                check_len(sol.s.len(), m, "s")?;
                (sol.x.clone(), sol.y.clone(), sol.s.clone())
            }
            None => (vec![0.; n], vec![0.; m], vec![0.; m]),
        };

        let x = self.registry.alloc_output(x);
        let y = self.registry.alloc_output(y);
        let s = self.registry.alloc_output(s);
        let record = self.registry.pin_record(ScsSolutionFFI {
            x: x.ptr(),
            y: y.ptr(),
            s: s.ptr(),
        });
        Ok(SolutionBuffers { x, y, s, record })
    }

    /// Allocate a zeroed info record
    pub fn info(&mut self) -> PinnedRecord<ScsInfo> {
        self.registry.pin_record(ScsInfo::default())
    }

    /// Copy output scratch into the caller's solution, resized to the
    /// output extents.  Does nothing after release.
    pub fn copy_solution(&self, buffers: &SolutionBuffers, solution: &mut ScsSolution) {
        copy_into(&self.registry, &buffers.x, &mut solution.x);
        copy_into(&self.registry, &buffers.y, &mut solution.y);
        copy_into(&self.registry, &buffers.s, &mut solution.s);
    }

    /// Copy the info record back out, or `None` after release
    pub fn read_info(&self, info: &PinnedRecord<ScsInfo>) -> Option<ScsInfo> {
        self.registry.read_record(info)
    }
}

fn copy_into(registry: &PinRegistry, buf: &OutputBuffer, dst: &mut Vec<ScsFloat>) {
    if let Some(src) = registry.read_output(buf) {
        dst.clear();
        dst.extend_from_slice(src);
    }
}

fn scs_int(value: usize, field: &'static str) -> Result<ScsInt, ScsError> {
    to_scs_int(value).ok_or(ScsError::IntegerOverflow(field))
}

fn scs_ints(values: &[usize], field: &'static str) -> Result<Vec<ScsInt>, ScsError> {
    values.iter().map(|&v| scs_int(v, field)).collect()
}

fn check_len(found: usize, expected: usize, field: &'static str) -> Result<(), ScsError> {
    if found == expected {
        Ok(())
    } else {
        Err(dimension_error(field, expected, found))
    }
}

fn dimension_error(field: &'static str, expected: usize, found: usize) -> ScsError {
    ScsError::IncompatibleDimension {
        field,
        expected,
        found,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::solver::BoxCone;

    fn test_data() -> ScsData {
        let A = CscMatrix::from(&[
            [1., 0.], //
            [0., 2.], //
            [3., 0.], //
        ]);
        ScsData::new(A, None, vec![1., 2., 3.], vec![-1., -1.])
    }

    #[test]
    fn test_flatten_data() {
        let data = test_data();
        let mut ledger = PinLedger::new();
        let mut marshal = Marshaller::new(&mut ledger);

        let d = marshal.data(&data).unwrap();
        let d = unsafe { &*d };
        assert_eq!((d.m, d.n), (3, 2));
        assert!(d.P.is_null());
        assert_eq!(d.b, data.b.as_ptr());
        assert_eq!(d.c, data.c.as_ptr());

        let A = unsafe { &*d.A };
        assert_eq!((A.m, A.n), (3, 2));
        assert_eq!(A.x, data.A.nzval.as_ptr());
        assert_eq!(A.p, data.A.colptr.as_ptr());

        // x, i, p, record for A, b, c, record for data
        assert_eq!(marshal.registry().pins(), 7);
    }

    #[test]
    fn test_flatten_bad_extents() {
        let mut data = test_data();
        data.b.pop();
        let mut ledger = PinLedger::new();
        {
            let mut marshal = Marshaller::new(&mut ledger);
            let err = marshal.data(&data).unwrap_err();
            assert!(matches!(
                err,
                ScsError::IncompatibleDimension {
                    field: "b",
                    expected: 3,
                    found: 2
                }
            ));
        }
        assert!(ledger.acquired() > 0);
        assert!(ledger.is_balanced());

        let mut data = test_data();
        data.P = Some(CscMatrix::identity(3));
        let mut ledger = PinLedger::new();
        let mut marshal = Marshaller::new(&mut ledger);
        assert!(matches!(
            marshal.data(&data),
            Err(ScsError::IncompatibleDimension { field: "P", .. })
        ));
    }

    #[test]
    fn test_flatten_cone() {
        let cone = ScsCone {
            l: 1,
            bbox: Some(BoxCone::new(vec![0., -1.], vec![1., 1.])),
            q: vec![3],
            ..ScsCone::default()
        };
        let bad = ScsCone {
            bbox: Some(BoxCone::new(vec![0.], vec![1., 1.])),
            ..ScsCone::default()
        };
        let mut ledger = PinLedger::new();
        let mut marshal = Marshaller::new(&mut ledger);
        let k = unsafe { &*marshal.cone(&cone).unwrap() };

        assert_eq!(k.bsize, 3);
        assert_eq!(k.qsize, 1);
        assert_eq!(unsafe { *k.q }, 3);
        assert!(k.s.is_null());
        assert!(k.p.is_null());
        assert_eq!(k.ssize, 0);
        assert_eq!(k.psize, 0);

        let bl = unsafe { std::slice::from_raw_parts(k.bl, 2) };
        let bu = unsafe { std::slice::from_raw_parts(k.bu, 2) };
        assert_eq!(bl, &[0., -1.]);
        assert_eq!(bu, &[1., 1.]);

        assert!(matches!(
            marshal.cone(&bad),
            Err(ScsError::IncompatibleDimension { field: "bu", .. })
        ));
    }

    #[test]
    fn test_flatten_solution() {
        let mut ledger = PinLedger::new();
        let mut marshal = Marshaller::new(&mut ledger);

        let warm = ScsSolution {
            x: vec![1., 2.],
            y: vec![3.],
            s: vec![4.],
        };
        let buffers = marshal.solution(Some(&warm), 2, 1).unwrap();
        let rec = unsafe { &*buffers.record.ptr() };
        assert_eq!(unsafe { *rec.x.add(1) }, 2.);

        let mut out = ScsSolution::default();
        marshal.copy_solution(&buffers, &mut out);
        assert_eq!(out, warm);

        assert!(marshal.solution(Some(&warm), 3, 1).is_err());
    }
}
