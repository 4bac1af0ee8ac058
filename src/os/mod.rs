//! Platform resource policies for the common OS handle kinds.
//!
//! Each submodule declares concrete [`ResourcePolicy`](crate::ResourcePolicy)
//! types for one platform's native handles plus ready-made wrapper aliases.
//! The split mirrors the underlying system APIs: descriptors closed with
//! `close(2)` on Unix, kernel object handles closed with `CloseHandle` on
//! Windows.

#[cfg(unix)]
pub mod unix;
#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub use unix::{FdClose, FdHolder};
#[cfg(windows)]
pub use windows::{HandleClose, HandleHolder, NullHandleClose, NullHandleHolder};
