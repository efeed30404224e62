//! Dimension types and the type-level dimension algebra.
//!
//! A dimension is a vector of integer exponents over the basis `time, mass, length, angle` plus four reserved
//! axes. Exponents are `typenum` integers, so the arithmetic below runs entirely inside the trait solver and two
//! structurally equal [`Dim`] vectors are literally the same type.

use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use typenum::{Diff, Integer, PartialDiv, PartialQuot, Sum, P2, Z0};

use crate::exponents::Exponents;

/// Trait implemented by every **dimension** type.
///
/// Each associated type is the exponent of one basis axis. The canonical implementor is [`Dim`]; marker types may
/// implement the trait directly (or through `#[derive(Dimension)]` in the `dimq` crate) to give a dimension its
/// own name:
///
/// ```rust
/// use dimq_core::typenum::{N2, P1, Z0};
/// use dimq_core::Dimension;
///
/// pub enum Thrust {}
/// impl Dimension for Thrust {
///     type Time = N2;
///     type Mass = P1;
///     type Length = P1;
///     type Angle = Z0;
///     type Reserved0 = Z0;
///     type Reserved1 = Z0;
///     type Reserved2 = Z0;
///     type Reserved3 = Z0;
/// }
///
/// assert_eq!(Thrust::EXPONENTS.as_array(), [-2, 1, 1, 0, 0, 0, 0, 0]);
/// ```
pub trait Dimension: 'static {
    /// Exponent of time.
    type Time: Integer;
    /// Exponent of mass.
    type Mass: Integer;
    /// Exponent of length.
    type Length: Integer;
    /// Exponent of plane angle.
    type Angle: Integer;
    /// Reserved axis, zero for every built-in dimension.
    type Reserved0: Integer;
    /// Reserved axis.
    type Reserved1: Integer;
    /// Reserved axis.
    type Reserved2: Integer;
    /// Reserved axis.
    type Reserved3: Integer;

    /// The exponents as a value, computed at compile time.
    const EXPONENTS: Exponents = Exponents::new([
        <Self::Time as Integer>::I32,
        <Self::Mass as Integer>::I32,
        <Self::Length as Integer>::I32,
        <Self::Angle as Integer>::I32,
        <Self::Reserved0 as Integer>::I32,
        <Self::Reserved1 as Integer>::I32,
        <Self::Reserved2 as Integer>::I32,
        <Self::Reserved3 as Integer>::I32,
    ]);
}

/// Canonical dimension vector.
///
/// Zero-sized; only ever used as a type parameter. The reserved axes default to zero, so four parameters are
/// enough for every physical dimension:
///
/// ```rust
/// use dimq_core::typenum::{N1, P1, Z0};
/// use dimq_core::{dims, Dim};
///
/// let _: core::marker::PhantomData<Dim<N1, Z0, P1, Z0>> = core::marker::PhantomData::<dims::Speed>;
/// ```
pub struct Dim<T, M, L, A, R0 = Z0, R1 = Z0, R2 = Z0, R3 = Z0>(PhantomData<fn() -> (T, M, L, A, R0, R1, R2, R3)>);

impl<T, M, L, A, R0, R1, R2, R3> Dimension for Dim<T, M, L, A, R0, R1, R2, R3>
where
    T: Integer + 'static,
    M: Integer + 'static,
    L: Integer + 'static,
    A: Integer + 'static,
    R0: Integer + 'static,
    R1: Integer + 'static,
    R2: Integer + 'static,
    R3: Integer + 'static,
{
    type Time = T;
    type Mass = M;
    type Length = L;
    type Angle = A;
    type Reserved0 = R0;
    type Reserved1 = R1;
    type Reserved2 = R2;
    type Reserved3 = R3;
}

impl<T, M, L, A, R0, R1, R2, R3> Clone for Dim<T, M, L, A, R0, R1, R2, R3> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M, L, A, R0, R1, R2, R3> Copy for Dim<T, M, L, A, R0, R1, R2, R3> {}

impl<T, M, L, A, R0, R1, R2, R3> Default for Dim<T, M, L, A, R0, R1, R2, R3> {
    fn default() -> Self {
        Dim(PhantomData)
    }
}

impl<T, M, L, A, R0, R1, R2, R3> PartialEq for Dim<T, M, L, A, R0, R1, R2, R3> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T, M, L, A, R0, R1, R2, R3> Eq for Dim<T, M, L, A, R0, R1, R2, R3> {}

impl<T, M, L, A, R0, R1, R2, R3> Hash for Dim<T, M, L, A, R0, R1, R2, R3> {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<T, M, L, A, R0, R1, R2, R3> Debug for Dim<T, M, L, A, R0, R1, R2, R3>
where
    Self: Dimension,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Dim({})", Self::EXPONENTS)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Algebra
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of a product: elementwise sum of exponents.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

impl<L, R> DimMul<R> for L
where
    L: Dimension,
    R: Dimension,
    L::Time: Add<R::Time>,
    L::Mass: Add<R::Mass>,
    L::Length: Add<R::Length>,
    L::Angle: Add<R::Angle>,
    L::Reserved0: Add<R::Reserved0>,
    L::Reserved1: Add<R::Reserved1>,
    L::Reserved2: Add<R::Reserved2>,
    L::Reserved3: Add<R::Reserved3>,
    Sum<L::Time, R::Time>: Integer + 'static,
    Sum<L::Mass, R::Mass>: Integer + 'static,
    Sum<L::Length, R::Length>: Integer + 'static,
    Sum<L::Angle, R::Angle>: Integer + 'static,
    Sum<L::Reserved0, R::Reserved0>: Integer + 'static,
    Sum<L::Reserved1, R::Reserved1>: Integer + 'static,
    Sum<L::Reserved2, R::Reserved2>: Integer + 'static,
    Sum<L::Reserved3, R::Reserved3>: Integer + 'static,
{
    type Output = Dim<
        Sum<L::Time, R::Time>,
        Sum<L::Mass, R::Mass>,
        Sum<L::Length, R::Length>,
        Sum<L::Angle, R::Angle>,
        Sum<L::Reserved0, R::Reserved0>,
        Sum<L::Reserved1, R::Reserved1>,
        Sum<L::Reserved2, R::Reserved2>,
        Sum<L::Reserved3, R::Reserved3>,
    >;
}

/// Dimension of a quotient: elementwise difference of exponents.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

impl<L, R> DimDiv<R> for L
where
    L: Dimension,
    R: Dimension,
    L::Time: Sub<R::Time>,
    L::Mass: Sub<R::Mass>,
    L::Length: Sub<R::Length>,
    L::Angle: Sub<R::Angle>,
    L::Reserved0: Sub<R::Reserved0>,
    L::Reserved1: Sub<R::Reserved1>,
    L::Reserved2: Sub<R::Reserved2>,
    L::Reserved3: Sub<R::Reserved3>,
    Diff<L::Time, R::Time>: Integer + 'static,
    Diff<L::Mass, R::Mass>: Integer + 'static,
    Diff<L::Length, R::Length>: Integer + 'static,
    Diff<L::Angle, R::Angle>: Integer + 'static,
    Diff<L::Reserved0, R::Reserved0>: Integer + 'static,
    Diff<L::Reserved1, R::Reserved1>: Integer + 'static,
    Diff<L::Reserved2, R::Reserved2>: Integer + 'static,
    Diff<L::Reserved3, R::Reserved3>: Integer + 'static,
{
    type Output = Dim<
        Diff<L::Time, R::Time>,
        Diff<L::Mass, R::Mass>,
        Diff<L::Length, R::Length>,
        Diff<L::Angle, R::Angle>,
        Diff<L::Reserved0, R::Reserved0>,
        Diff<L::Reserved1, R::Reserved1>,
        Diff<L::Reserved2, R::Reserved2>,
        Diff<L::Reserved3, R::Reserved3>,
    >;
}

/// Dimension of a square root: every exponent halved.
///
/// Only implemented when every exponent is even (`PartialDiv` requires an exact quotient), so `sqrt` of a length
/// does not compile:
///
/// ```compile_fail
/// use dimq_core::{dims, Root};
/// let _: core::marker::PhantomData<Root<dims::Length>> = core::marker::PhantomData;
/// ```
pub trait DimSqrt: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

impl<D> DimSqrt for D
where
    D: Dimension,
    D::Time: PartialDiv<P2>,
    D::Mass: PartialDiv<P2>,
    D::Length: PartialDiv<P2>,
    D::Angle: PartialDiv<P2>,
    D::Reserved0: PartialDiv<P2>,
    D::Reserved1: PartialDiv<P2>,
    D::Reserved2: PartialDiv<P2>,
    D::Reserved3: PartialDiv<P2>,
    PartialQuot<D::Time, P2>: Integer + 'static,
    PartialQuot<D::Mass, P2>: Integer + 'static,
    PartialQuot<D::Length, P2>: Integer + 'static,
    PartialQuot<D::Angle, P2>: Integer + 'static,
    PartialQuot<D::Reserved0, P2>: Integer + 'static,
    PartialQuot<D::Reserved1, P2>: Integer + 'static,
    PartialQuot<D::Reserved2, P2>: Integer + 'static,
    PartialQuot<D::Reserved3, P2>: Integer + 'static,
{
    type Output = Dim<
        PartialQuot<D::Time, P2>,
        PartialQuot<D::Mass, P2>,
        PartialQuot<D::Length, P2>,
        PartialQuot<D::Angle, P2>,
        PartialQuot<D::Reserved0, P2>,
        PartialQuot<D::Reserved1, P2>,
        PartialQuot<D::Reserved2, P2>,
        PartialQuot<D::Reserved3, P2>,
    >;
}

/// Structural equality of dimensions.
///
/// `B: SameDimension<A>` holds exactly when every exponent of `B` equals the corresponding exponent of `A`,
/// whatever names the two types carry. This gates [`Quantity::convert`](crate::Quantity::convert).
pub trait SameDimension<D: Dimension>: Dimension {}

impl<A, B> SameDimension<A> for B
where
    A: Dimension,
    B: Dimension<
        Time = A::Time,
        Mass = A::Mass,
        Length = A::Length,
        Angle = A::Angle,
        Reserved0 = A::Reserved0,
        Reserved1 = A::Reserved1,
        Reserved2 = A::Reserved2,
        Reserved3 = A::Reserved3,
    >,
{
}

/// Dimension of `A * B`.
pub type Product<A, B> = <A as DimMul<B>>::Output;

/// Dimension of `A / B`.
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;

/// Dimension of `sqrt(A)`.
pub type Root<A> = <A as DimSqrt>::Output;

/// Compile-time `true` iff `A` and `B` have the same exponents.
///
/// The value-level counterpart of [`SameDimension`], usable in `const` items.
pub const fn dimension_equal<A: Dimension, B: Dimension>() -> bool {
    A::EXPONENTS.equals(&B::EXPONENTS)
}
