//! `UniqueResource` - move-only ownership of one scalar handle.
//!
//! This is the ergonomic core of the crate. It is intentionally "thin": the
//! wrapper is a single scalar field plus a zero-sized policy marker, so in
//! optimized builds every observer compiles down to a plain scalar read and
//! the only code the wrapper adds is the drop-time cleanup call.
//!
//! The module tree is stratified the same way as the rest of the crate:
//! - this module holds the state machine itself,
//! - [`Acceptor`] is the scoped out-parameter guard built on top of it.

mod acceptor;

pub use acceptor::Acceptor;

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};

use crate::policy::ResourcePolicy;

/// A move-only owner of one scalar resource handle.
///
/// The wrapper is always in one of two states, decided solely by comparing
/// the stored value against [`P::INVALID`](ResourcePolicy::INVALID):
///
/// - **Empty**: the stored value is the sentinel; dropping runs no cleanup.
/// - **Owning**: any other value; dropping runs [`P::cleanup`](ResourcePolicy::cleanup)
///   exactly once with that value.
///
/// ## Ownership invariant
///
/// At most one live wrapper owns a given non-sentinel value along any
/// ownership chain. The type implements neither `Copy` nor `Clone`, so
/// duplicating an owner is a compile-time rejection; moves transfer the
/// value and statically invalidate the source, which also makes self-move
/// and double-cleanup unrepresentable. Assigning over an Owning wrapper
/// drops the previous owner first, releasing its value exactly once.
///
/// No operation on this type has a runtime failure path. Acquisition
/// failures live in the value itself: wrapping a sentinel produces an Empty
/// wrapper, and callers detect "no resource" through [`is_valid`](Self::is_valid).
///
/// # Example
///
/// ```rust
/// use grip::{resource_policy, UniqueResource};
///
/// resource_policy! {
///     Silent: i32, invalid: -1, cleanup: |_raw| {}
/// }
///
/// let mut held = UniqueResource::<Silent>::new(3);
/// assert!(held.is_valid());
///
/// let raw = held.release();
/// assert_eq!(raw, 3);
/// assert!(held.is_invalid());
/// ```
#[must_use = "dropping a UniqueResource immediately releases the handle"]
pub struct UniqueResource<P: ResourcePolicy> {
    raw: P::Raw,
    _policy: PhantomData<P>,
}

impl<P: ResourcePolicy> UniqueResource<P> {
    /// Creates an Empty wrapper holding the sentinel value.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            raw: P::INVALID,
            _policy: PhantomData,
        }
    }

    /// Takes ownership of `raw`.
    ///
    /// Wrapping the sentinel yields an Empty wrapper, so the result of a
    /// fallible acquisition call can be stored directly and inspected with
    /// [`is_valid`](Self::is_valid) afterward.
    #[inline]
    pub const fn new(raw: P::Raw) -> Self {
        Self {
            raw,
            _policy: PhantomData,
        }
    }

    /// Returns whether a resource is currently held.
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.raw != P::INVALID
    }

    /// Returns whether the wrapper is Empty.
    #[inline(always)]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Observes the stored value without changing state.
    ///
    /// Returns the sentinel when Empty. The wrapper still owns the handle;
    /// the returned copy must not outlive it.
    #[inline(always)]
    pub fn get(&self) -> P::Raw {
        self.raw
    }

    /// Relinquishes ownership and returns the stored value.
    ///
    /// The wrapper becomes Empty and no cleanup runs for the returned value,
    /// now or at drop. Returns the sentinel when already Empty.
    #[inline]
    #[must_use = "the returned handle is unowned; dropping it leaks the resource"]
    pub fn release(&mut self) -> P::Raw {
        mem::replace(&mut self.raw, P::INVALID)
    }

    /// Consuming form of [`release`](Self::release).
    ///
    /// Destroys the wrapper without running cleanup and hands the stored
    /// value to the caller.
    #[inline]
    #[must_use = "the returned handle is unowned; dropping it leaks the resource"]
    pub fn into_raw(self) -> P::Raw {
        let mut this = ManuallyDrop::new(self);
        this.release()
    }

    /// Releases the held resource, if any, and becomes Empty.
    ///
    /// No-op when already Empty.
    #[inline]
    pub fn reset(&mut self) {
        self.reset_to(P::INVALID);
    }

    /// Replaces the owned value, releasing the old one.
    ///
    /// When `raw` equals the stored value this is a no-op: the wrapper
    /// already owns that handle and cleaning it up would be a double
    /// release. Otherwise the previous value (if any) is cleaned up exactly
    /// once and `raw` is adopted, leaving the wrapper Owning unless `raw`
    /// is the sentinel.
    pub fn reset_to(&mut self, raw: P::Raw) {
        if self.raw == raw {
            return;
        }
        let old = mem::replace(&mut self.raw, raw);
        if old != P::INVALID {
            #[cfg(feature = "tracing")]
            tracing::trace!(policy = core::any::type_name::<P>(), "releasing owned handle");
            P::cleanup(old);
        }
    }

    /// Exchanges owned values with `other`.
    ///
    /// Pure exchange: no cleanup runs on either side.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Produces a scoped out-parameter acceptor for this wrapper.
    ///
    /// See [`Acceptor`] for the adoption protocol. The acceptor mutably
    /// borrows the wrapper for its whole lifetime, so no other access can
    /// race with the adoption at scope end.
    #[inline]
    pub fn acceptor(&mut self) -> Acceptor<'_, P> {
        let seed = self.raw;
        Acceptor {
            owner: self,
            slot: seed,
        }
    }
}

impl<P, T> UniqueResource<P>
where
    P: ResourcePolicy<Raw = *mut T>,
{
    /// Returns the stored pointer without changing state.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.raw
    }

    /// Borrows the pointee of a pointer-shaped handle.
    ///
    /// # Safety
    ///
    /// The wrapper must be Owning and the stored pointer must be valid for
    /// reads, properly aligned, and point to a live `T` for the duration of
    /// the borrow. Calling this on an Empty wrapper is undefined behavior
    /// (debug builds assert).
    #[inline]
    pub unsafe fn pointee(&self) -> &T {
        debug_assert!(self.is_valid(), "dereferenced an empty resource wrapper");
        &*self.raw
    }

    /// Mutably borrows the pointee of a pointer-shaped handle.
    ///
    /// # Safety
    ///
    /// Same requirements as [`pointee`](Self::pointee), plus the pointer
    /// must be valid for writes and not aliased for the duration of the
    /// borrow.
    #[inline]
    pub unsafe fn pointee_mut(&mut self) -> &mut T {
        debug_assert!(self.is_valid(), "dereferenced an empty resource wrapper");
        &mut *self.raw
    }
}

impl<P: ResourcePolicy> Default for UniqueResource<P> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: ResourcePolicy> Drop for UniqueResource<P> {
    #[inline]
    fn drop(&mut self) {
        self.reset();
    }
}

impl<P: ResourcePolicy> fmt::Debug for UniqueResource<P>
where
    P::Raw: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueResource")
            .field("raw", &self.raw)
            .field("valid", &self.is_valid())
            .finish()
    }
}
