//! POSIX file descriptor policies.

use std::os::fd::RawFd;

use crate::resource_policy;
use crate::UniqueResource;

resource_policy! {
    /// Closes a POSIX file descriptor via `close(2)`.
    ///
    /// The sentinel is `-1`, the failure value returned by `open(2)` and
    /// friends, so a fallible acquisition result can be wrapped directly.
    /// `close` errors are ignored: by the time the call returns, the
    /// descriptor is gone either way and there is nothing left to act on.
    pub FdClose: RawFd, invalid: -1, cleanup: |fd| {
        // SAFETY: the wrapper's exactly-once contract guarantees `fd` is a
        // descriptor this process still owns; double-close cannot happen.
        unsafe {
            libc::close(fd);
        }
    }
}

/// An owned POSIX file descriptor, closed on drop.
pub type FdHolder = UniqueResource<FdClose>;
