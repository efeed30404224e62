//! Scalar representations.
//!
//! The `f32-precision` feature only switches the default between `f64` and `f32`. Any other scalar, integers
//! included, is chosen per quantity through the explicit `V` parameter of [`Quantity<D, V>`](crate::Quantity):
//!
//! ```rust
//! use dimq_core::{dims, Quantity};
//!
//! let steps = Quantity::<dims::Length, i64>::new(3) + Quantity::new(4);
//! assert_eq!(steps.value(), 7);
//! ```

/// Scalar type used by [`Quantity`](crate::Quantity) when none is given.
///
/// `f64`, or `f32` when the `f32-precision` feature is enabled.
#[cfg(not(feature = "f32-precision"))]
pub type DefaultPrecision = f64;

/// Scalar type used by [`Quantity`](crate::Quantity) when none is given.
///
/// `f64`, or `f32` when the `f32-precision` feature is enabled.
#[cfg(feature = "f32-precision")]
pub type DefaultPrecision = f32;

/// Floating-point operations needed beyond `core::ops`.
///
/// With `std` disabled these are backed by `libm`.
pub trait Real: Copy + PartialOrd {
    /// Square root, following IEEE-754 (`NaN` for negative inputs).
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
}

impl Real for f64 {
    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self)
        }
    }

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabs(self)
        }
    }
}

impl Real for f32 {
    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self)
        }
    }

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabsf(self)
        }
    }
}
