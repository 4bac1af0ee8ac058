//! Win32 kernel object handle policies.
//!
//! Win32 APIs disagree on the failure sentinel for `HANDLE`: file-style
//! calls (`CreateFileW`) return `INVALID_HANDLE_VALUE`, object-style calls
//! (`CreateEventW`, `OpenProcess`) return null. Both kinds are released
//! with `CloseHandle`, so the two policies below share the scalar type but
//! are distinct wrapper types, and a handle acquired under one convention
//! cannot be stored under the other by accident.

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, INVALID_HANDLE_VALUE};

use crate::resource_policy;
use crate::UniqueResource;

resource_policy! {
    /// Closes a kernel object handle whose failure sentinel is
    /// `INVALID_HANDLE_VALUE`.
    pub HandleClose: HANDLE, invalid: INVALID_HANDLE_VALUE, cleanup: |handle| {
        // SAFETY: the wrapper's exactly-once contract guarantees `handle`
        // is a live kernel object handle owned by this process.
        unsafe {
            CloseHandle(handle);
        }
    }
}

resource_policy! {
    /// Closes a kernel object handle whose failure sentinel is null.
    pub NullHandleClose: HANDLE, invalid: 0, cleanup: |handle| {
        // SAFETY: as for `HandleClose`.
        unsafe {
            CloseHandle(handle);
        }
    }
}

/// An owned handle from an `INVALID_HANDLE_VALUE`-convention API.
pub type HandleHolder = UniqueResource<HandleClose>;

/// An owned handle from a null-convention API.
pub type NullHandleHolder = UniqueResource<NullHandleClose>;
