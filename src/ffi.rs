use libc::{c_double, c_int, c_void, size_t};
use std::ptr;
use std::slice;

use crate::headtail;

/// Wrapper for a void pointer to a sequence of numbers produced by head/tail breaks, and the
/// sequence length. Used for FFI.
///
/// `data` is a `Vec<c_double>` for break points, and a `Vec<size_t>` for class sizes and
/// memberships.
#[repr(C)]
pub struct InternalArray {
    pub data: *const c_void,
    pub len: size_t,
}

/// Wrapper for a void pointer to a sequence of floats representing data to be classified using
/// head/tail breaks, and the sequence length. Used for FFI.
///
/// `data` is a `Vec<c_double>`.
#[repr(C)]
pub struct ExternalArray {
    pub data: *const c_void,
    pub len: size_t,
}

/// A head/tail breaks result that can be passed across the FFI boundary.
///
/// All three arrays are empty if fewer than two classes were requested, or the input was invalid.
/// Pass it to [`drop_headtail_result`] once you're done with it.
#[repr(C)]
pub struct HeadTailResult {
    /// Break points (`c_double`)
    pub breaks: InternalArray,
    /// Class sizes (`size_t`)
    pub sizes: InternalArray,
    /// 1-based class of each input value (`size_t`)
    pub members: InternalArray,
}

/// We don't need to take ownership of incoming data to be classified
impl<'a> From<&'a ExternalArray> for &'a [f64] {
    fn from(arr: &'a ExternalArray) -> Self {
        if arr.data.is_null() || arr.len == 0 {
            return &[];
        }
        unsafe { slice::from_raw_parts(arr.data as *const f64, arr.len) }
    }
}

// Convert result sequences into things that can be leaked across the FFI boundary
impl From<Vec<c_double>> for InternalArray {
    fn from(v: Vec<c_double>) -> Self {
        let boxed = v.into_boxed_slice();
        let blen = boxed.len();
        let rawp = Box::into_raw(boxed);
        InternalArray {
            data: rawp as *const c_void,
            len: blen as size_t,
        }
    }
}

impl From<Vec<size_t>> for InternalArray {
    fn from(v: Vec<size_t>) -> Self {
        let boxed = v.into_boxed_slice();
        let blen = boxed.len();
        let rawp = Box::into_raw(boxed);
        InternalArray {
            data: rawp as *const c_void,
            len: blen as size_t,
        }
    }
}

impl From<Vec<f64>> for ExternalArray {
    fn from(v: Vec<f64>) -> Self {
        let boxed = v.into_boxed_slice();
        let blen = boxed.len();
        let rawp = Box::into_raw(boxed);
        ExternalArray {
            data: rawp as *const c_void,
            len: blen as size_t,
        }
    }
}

impl InternalArray {
    // we originated this data, so pointer-to-slice -> box -> vec
    unsafe fn reclaim<T>(self) -> Vec<T> {
        unsafe {
            let p = ptr::slice_from_raw_parts_mut(self.data as *mut T, self.len);
            Box::from_raw(p).into_vec()
        }
    }
}

impl HeadTailResult {
    fn empty() -> Self {
        HeadTailResult {
            breaks: Vec::<c_double>::new().into(),
            sizes: Vec::<size_t>::new().into(),
            members: Vec::<size_t>::new().into(),
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn headtail_ffi(data: &ExternalArray, classes: c_int) -> HeadTailResult {
    let input: &[f64] = data.into();
    match headtail(input, classes) {
        Ok(Some(ht)) => HeadTailResult {
            breaks: ht.breaks.into(),
            sizes: ht.sizes.into(),
            members: ht.members.into(),
        },
        Ok(None) | Err(_) => HeadTailResult::empty(),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn drop_headtail_result(result: HeadTailResult) {
    unsafe {
        let _: Vec<c_double> = result.breaks.reclaim();
        let _: Vec<size_t> = result.sizes.reclaim();
        let _: Vec<size_t> = result.members.reclaim();
    }
}
