//! Compile-time assertion macros.

/// Fails to compile unless the two dimensions have identical exponents.
///
/// Usable at item level or inside a function body.
///
/// ```rust
/// use dimq_core::{assert_same_dimension, dims, Product};
///
/// assert_same_dimension!(Product<dims::Mass, dims::Accel>, dims::Force);
/// ```
///
/// ```compile_fail
/// use dimq_core::{assert_same_dimension, dims};
///
/// assert_same_dimension!(dims::Force, dims::Torque);
/// ```
#[macro_export]
macro_rules! assert_same_dimension {
    ($a:ty, $b:ty $(,)?) => {
        const _: fn() = || {
            fn same<A: $crate::Dimension, B: $crate::SameDimension<A>>() {}
            same::<$a, $b>();
        };
    };
}
