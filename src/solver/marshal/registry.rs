use crate::algebra::ScsFloat;
use crate::solver::ScsError;
use libc::c_char;
use std::any::Any;
use std::ffi::CString;
use std::marker::PhantomData;
use std::ptr;

/// Observable counters of pin acquisitions and releases.
///
/// A ledger outlives the transactions that report to it, so that leak
/// freedom can be checked after the fact: once every registry using the
/// ledger has been dropped, `acquired() == released()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PinLedger {
    acquired: usize,
    released: usize,
}

impl PinLedger {
    /// Empty ledger
    pub fn new() -> Self {
        Self::default()
    }
    /// total number of pins taken
    pub fn acquired(&self) -> usize {
        self.acquired
    }
    /// total number of pins released
    pub fn released(&self) -> usize {
        self.released
    }
    /// pins taken but not yet released
    pub fn outstanding(&self) -> usize {
        self.acquired - self.released
    }
    /// true if every pin taken has been released
    pub fn is_balanced(&self) -> bool {
        self.acquired == self.released
    }
}

// A release token.  Borrowed pins keep caller storage alive through the
// registry lifetime, owned pins keep a registry allocation alive until
// release.  Owned values are heap arrays, whose addresses are stable.
enum Pin<'a> {
    Borrowed(PhantomData<&'a ()>),
    Owned(Box<dyn Any>),
}

/// Handle to a record allocated by a [`PinRegistry`].
#[derive(Debug)]
pub struct PinnedRecord<T> {
    index: usize,
    ptr: *mut T,
}

impl<T> PinnedRecord<T> {
    /// Native address of the record
    pub fn ptr(&self) -> *mut T {
        self.ptr
    }
}

/// Handle to an output array allocated by a [`PinRegistry`].
///
/// The native address is never null.  A zero-length output is backed by
/// a one element placeholder, since native code allocates any output
/// array it finds null and that allocation is never freed.
#[derive(Debug)]
pub struct OutputBuffer {
    index: usize,
    ptr: *mut ScsFloat,
    len: usize,
}

impl OutputBuffer {
    /// Native address of the array
    pub fn ptr(&self) -> *mut ScsFloat {
        self.ptr
    }
    /// number of elements
    pub fn len(&self) -> usize {
        self.len
    }
    /// true if the buffer has no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Transaction scoped set of pinned buffers.
///
/// Every address handed to native code during one transaction is
/// obtained here.  Borrowed caller arrays are held for `'a`, so they can
/// be neither moved nor mutated while the registry is alive.  Flattened
/// records, C strings and output scratch are owned by the registry.
///
/// All pins are released exactly once, either by an explicit
/// [`release`](PinRegistry::release) or when the registry is dropped,
/// including during unwinding.
///
/// ```
/// use scsbridge::solver::marshal::{PinLedger, PinRegistry};
///
/// let b = vec![1.0, 2.0];
/// let mut ledger = PinLedger::new();
/// {
///     let mut registry = PinRegistry::new(&mut ledger);
///     let p = registry.pin_slice(&b);
///     assert_eq!(unsafe { *p.add(1) }, 2.0);
///     assert!(registry.pin_slice::<f64>(&[]).is_null());
///     assert_eq!(registry.pins(), 1);
/// }
/// assert!(ledger.is_balanced());
/// ```
pub struct PinRegistry<'a> {
    ledger: &'a mut PinLedger,
    pins: Vec<Pin<'a>>,
}

impl<'a> PinRegistry<'a> {
    /// Open a transaction reporting to `ledger`
    pub fn new(ledger: &'a mut PinLedger) -> Self {
        Self {
            ledger,
            pins: Vec::new(),
        }
    }

    /// number of pins currently held
    pub fn pins(&self) -> usize {
        self.pins.len()
    }

    fn push(&mut self, pin: Pin<'a>) -> usize {
        self.pins.push(pin);
        self.ledger.acquired += 1;
        self.pins.len() - 1
    }

    /// Pin a caller array for the lifetime of the registry.
    /// An empty slice maps to null and takes no pin.
    pub fn pin_slice<T>(&mut self, data: &'a [T]) -> *const T {
        if data.is_empty() {
            return ptr::null();
        }
        self.push(Pin::Borrowed(PhantomData));
        data.as_ptr()
    }

    /// Move an array into the registry and return its stable address.
    /// An empty array maps to null and takes no pin.
    pub fn pin_vec<T: 'static>(&mut self, data: Vec<T>) -> *const T {
        if data.is_empty() {
            return ptr::null();
        }
        let p = data.as_ptr();
        self.push(Pin::Owned(Box::new(data)));
        p
    }

    /// Move a record into the registry and return a handle to it
    pub fn pin_record<T: 'static>(&mut self, value: T) -> PinnedRecord<T> {
        // held as a one element array so the address survives the move
        let mut slot = vec![value];
        let ptr = slot.as_mut_ptr();
        let index = self.push(Pin::Owned(Box::new(slot)));
        PinnedRecord { index, ptr }
    }

    /// Copy a record back out of the registry.  Returns `None` after
    /// release.
    pub fn read_record<T: Copy + 'static>(&self, record: &PinnedRecord<T>) -> Option<T> {
        self.owned::<Vec<T>>(record.index)
            .and_then(|slot| slot.first())
            .copied()
    }

    /// Pin an optional string as a NUL terminated C string.
    /// An absent string maps to null and takes no pin.
    pub fn pin_cstring(
        &mut self,
        s: Option<&str>,
        field: &'static str,
    ) -> Result<*const c_char, ScsError> {
        let Some(s) = s else {
            return Ok(ptr::null());
        };
        let cstring = CString::new(s).map_err(|_| ScsError::InteriorNul(field))?;
        let p = cstring.as_ptr();
        self.push(Pin::Owned(Box::new(cstring)));
        Ok(p)
    }

    /// Allocate an output array initialised with `init`
    pub fn alloc_output(&mut self, init: Vec<ScsFloat>) -> OutputBuffer {
        let len = init.len();
        let mut scratch = if len == 0 { vec![0.] } else { init };
        let ptr = scratch.as_mut_ptr();
        let index = self.push(Pin::Owned(Box::new(scratch)));
        OutputBuffer { index, ptr, len }
    }

    /// Contents of an output array, or `None` after release
    pub fn read_output(&self, buf: &OutputBuffer) -> Option<&[ScsFloat]> {
        self.owned::<Vec<ScsFloat>>(buf.index)
            .map(|v| &v[..buf.len])
    }

    fn owned<T: 'static>(&self, index: usize) -> Option<&T> {
        match self.pins.get(index) {
            Some(Pin::Owned(boxed)) => boxed.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Release every pin.  Safe to call more than once.
    pub fn release(&mut self) {
        let count = self.pins.len();
        // owned allocations are freed here
        self.pins.clear();
        self.ledger.released += count;
    }
}

impl Drop for PinRegistry<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

#[test]
fn test_registry_release_once() {
    let a = [1.0, 2.0, 3.0];
    let mut ledger = PinLedger::new();
    {
        let mut registry = PinRegistry::new(&mut ledger);
        registry.pin_slice(&a);
        registry.pin_vec(vec![1, 2]);
        registry.pin_cstring(Some("file"), "f").unwrap();
        assert!(registry.pin_cstring(None, "f").unwrap().is_null());
        assert!(registry.pin_vec(Vec::<i32>::new()).is_null());
        assert_eq!(registry.pins(), 3);

        registry.release();
        registry.release();
        assert_eq!(registry.pins(), 0);
    }
    assert_eq!(ledger.acquired(), 3);
    assert_eq!(ledger.released(), 3);
}

#[test]
fn test_registry_interior_nul() {
    let mut ledger = PinLedger::new();
    let mut registry = PinRegistry::new(&mut ledger);
    let err = registry.pin_cstring(Some("a\0b"), "log_csv_filename");
    assert!(matches!(err, Err(ScsError::InteriorNul("log_csv_filename"))));
    assert_eq!(registry.pins(), 0);
}

#[test]
fn test_registry_outputs() {
    let mut ledger = PinLedger::new();
    let mut registry = PinRegistry::new(&mut ledger);

    let out = registry.alloc_output(vec![0.; 3]);
    unsafe { *out.ptr().add(2) = 7.0 };
    assert_eq!(registry.read_output(&out), Some(&[0., 0., 7.][..]));

    let empty = registry.alloc_output(Vec::new());
    assert!(!empty.ptr().is_null());
    assert!(empty.is_empty());
    unsafe { *empty.ptr() = 1.0 };
    assert_eq!(registry.read_output(&empty), Some(&[][..]));
    assert_eq!(registry.pins(), 2);

    let rec = registry.pin_record(5_i64);
    unsafe { *rec.ptr() += 1 };
    assert_eq!(registry.read_record(&rec), Some(6));

    registry.release();
    assert!(registry.read_output(&out).is_none());
    assert!(registry.read_output(&empty).is_none());
    assert!(registry.read_record(&rec).is_none());
}
