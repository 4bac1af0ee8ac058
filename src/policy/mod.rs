//! Resource policies - compile-time descriptors for scalar OS handles.
//!
//! A policy binds three static facts about one kind of handle: the scalar
//! type that identifies it, the sentinel value meaning "nothing held", and
//! the operation that releases a held handle back to the system. Policies
//! carry no runtime state; they exist only to parameterize
//! [`UniqueResource`](crate::UniqueResource) and are resolved entirely at
//! compile time, with no dynamic dispatch anywhere on the cleanup path.
//!
//! ## Core invariant (policy distinctness)
//!
//! The wrapper is parameterized by the *policy*, not by the scalar type.
//! Two policies over the same scalar (say, two different `i32`-shaped handle
//! kinds) therefore produce distinct, non-interchangeable wrapper types, and
//! a handle can never be released through the wrong cleanup routine.

/// Macro for declaring policies without the impl boilerplate.
pub mod macros;

/// A compile-time descriptor for one kind of scalar resource handle.
///
/// Implementors are expected to be zero-sized unit types; the trait is never
/// used as a trait object and no instance of the policy is ever constructed
/// by the wrapper.
///
/// The `Copy + Eq` bounds on [`Raw`](Self::Raw) are the contract that the
/// handle is a plain scalar: duplicating a bit pattern and comparing two of
/// them must be trivial and infallible. Types with allocation, interior
/// state, or partial equality do not qualify.
///
/// # Example
///
/// ```rust
/// use grip::ResourcePolicy;
///
/// struct LogClose;
///
/// impl ResourcePolicy for LogClose {
///     type Raw = i32;
///     const INVALID: i32 = -1;
///
///     fn cleanup(raw: i32) {
///         println!("closing {raw}");
///     }
/// }
/// ```
pub trait ResourcePolicy {
    /// The scalar value type identifying the resource.
    type Raw: Copy + Eq;

    /// The sentinel value meaning "no resource held".
    ///
    /// Comparison against this value is the wrapper's sole validity test.
    const INVALID: Self::Raw;

    /// Releases a held handle back to the system.
    ///
    /// # Contract
    ///
    /// - Never invoked on [`INVALID`](Self::INVALID); implementations may
    ///   assume `raw` identifies a live resource.
    /// - Must not panic. Release-style OS calls (`close`, `CloseHandle`)
    ///   report errors through return codes the caller cannot act on once
    ///   the handle is gone; implementations ignore them rather than unwind.
    fn cleanup(raw: Self::Raw);
}
