use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::policy::ResourcePolicy;

use super::UniqueResource;

/// Scoped out-parameter acceptor for [`UniqueResource`].
///
/// Many C-style APIs produce a handle by writing through an out-parameter
/// and signal success separately, rather than returning the handle by
/// value. The acceptor bridges that convention: it exposes a writable slot,
/// seeded with the wrapper's current value, and when it is dropped (on
/// every exit path, early returns included) it performs
/// [`reset_to`](UniqueResource::reset_to) with the slot's final contents.
///
/// - If the external call wrote a new value, the wrapper adopts it and the
///   previously held handle is released exactly once.
/// - If the call failed or never touched the slot, the slot still holds the
///   seed value and `reset_to` is a no-op, so the wrapper is preserved
///   unchanged.
///
/// The acceptor mutably borrows its wrapper, so it cannot be copied, cannot
/// outlive the wrapper, and excludes all other access while live. It is
/// meant to be used as an immediate temporary:
///
/// ```rust
/// use grip::{resource_policy, UniqueResource};
///
/// resource_policy! {
///     Silent: i32, invalid: -1, cleanup: |_raw| {}
/// }
///
/// fn fake_acquire(out: *mut i32) {
///     unsafe { *out = 12 };
/// }
///
/// let mut held = UniqueResource::<Silent>::empty();
/// fake_acquire(held.acceptor().as_mut_ptr());
/// assert_eq!(held.get(), 12);
/// ```
pub struct Acceptor<'owner, P: ResourcePolicy> {
    pub(super) owner: &'owner mut UniqueResource<P>,
    pub(super) slot: P::Raw,
}

impl<'owner, P: ResourcePolicy> Acceptor<'owner, P> {
    /// Returns a raw pointer to the slot, for FFI out-parameters.
    ///
    /// The pointer is valid for reads and writes as long as the acceptor is
    /// alive. Whatever value the slot holds when the acceptor is dropped is
    /// what the wrapper adopts.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut P::Raw {
        &mut self.slot
    }

    /// Observes the slot's current contents.
    #[inline(always)]
    pub fn get(&self) -> P::Raw {
        self.slot
    }
}

impl<'owner, P: ResourcePolicy> Deref for Acceptor<'owner, P> {
    type Target = P::Raw;

    #[inline(always)]
    fn deref(&self) -> &P::Raw {
        &self.slot
    }
}

impl<'owner, P: ResourcePolicy> DerefMut for Acceptor<'owner, P> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut P::Raw {
        &mut self.slot
    }
}

impl<'owner, P: ResourcePolicy> Drop for Acceptor<'owner, P> {
    fn drop(&mut self) {
        // Adopt whatever the out-parameter call left in the slot. When the
        // slot was never written this is a no-op by the reset_to equality
        // guard, preserving the wrapper's prior value.
        let written = self.slot;
        self.owner.reset_to(written);
    }
}

impl<'owner, P: ResourcePolicy> fmt::Debug for Acceptor<'owner, P>
where
    P::Raw: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acceptor").field("slot", &self.slot).finish()
    }
}
