/// A macro helper for declaring a [`ResourcePolicy`](crate::ResourcePolicy).
///
/// Expands to a zero-sized unit struct plus the trait impl, so a policy
/// declaration reads as a single fact sheet: name, scalar type, sentinel,
/// cleanup body. Doc comments and attributes on the declaration are carried
/// onto the generated struct.
///
/// # Example
///
/// ```rust
/// use grip::{resource_policy, UniqueResource};
///
/// resource_policy! {
///     /// A fake handle kind that just prints on release.
///     pub Printed: u32, invalid: 0, cleanup: |raw| {
///         println!("released {raw}");
///     }
/// }
///
/// let held = UniqueResource::<Printed>::new(7);
/// assert!(held.is_valid());
/// ```
#[macro_export]
macro_rules! resource_policy {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $raw:ty,
        invalid: $invalid:expr,
        cleanup: |$arg:ident| $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::policy::ResourcePolicy for $name {
            type Raw = $raw;

            const INVALID: Self::Raw = $invalid;

            #[inline]
            fn cleanup($arg: Self::Raw) $body
        }
    };
}
