//! Quantity type and its implementations.

use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

use crate::dimension::{DimDiv, DimMul, DimSqrt, Dimension, Product, Quotient, Root, SameDimension};
use crate::dims::Dimensionless;
use crate::exponents::Exponents;
use crate::precision::{DefaultPrecision, Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar tagged with a dimension.
///
/// `Quantity<D, V>` stores one `V` (by default [`DefaultPrecision`]) and carries the dimension `D` only as a
/// phantom type, so it has exactly the size of `V`. Addition, subtraction and comparison require identical
/// dimensions; multiplication and division compute the result dimension with [`Product`] and [`Quotient`].
///
/// # Examples
///
/// ```rust
/// use dimq_core::{dims, Quantity};
///
/// let m = Quantity::<dims::Mass>::new(20.0);
/// let a = Quantity::<dims::Accel>::new(9.81);
/// let f: Quantity<dims::Force> = m * a;
/// assert!((f.value() - 196.2).abs() < 1e-9);
/// ```
pub struct Quantity<D: Dimension, V = DefaultPrecision> {
    value: V,
    dimension: PhantomData<fn() -> D>,
}

impl<D: Dimension, V> Quantity<D, V> {
    /// Exponents of this quantity's dimension.
    ///
    /// ```rust
    /// use dimq_core::{dims, Quantity};
    /// assert_eq!(Quantity::<dims::Speed>::DIMENSION.to_string(), "T^-1·L");
    /// ```
    pub const DIMENSION: Exponents = D::EXPONENTS;

    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Same as [`new`](Self::new).
    #[inline]
    pub fn from_value(value: V) -> Self {
        Self::new(value)
    }

    /// Consumes the quantity and returns the scalar.
    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Mutable access to the scalar. The dimension cannot change through it.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Builds a quantity from another one whose dimension is structurally equal.
    ///
    /// This is how a product or quotient is given a named dimension type. Unequal dimensions do not compile.
    ///
    /// ```rust
    /// use dimq_core::typenum::{N2, P1, Z0};
    /// use dimq_core::{dims, Dimension, Quantity};
    ///
    /// pub enum Weight {}
    /// impl Dimension for Weight {
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
    /// let f = Quantity::<dims::Mass>::new(2.0) * Quantity::<dims::Accel>::new(9.81);
    /// let w = Quantity::<Weight>::convert(f);
    /// assert_eq!(w.value(), f.value());
    /// ```
    ///
    /// ```compile_fail
    /// use dimq_core::{dims, Quantity};
    /// let t = Quantity::<dims::Torque>::new(1.0);
    /// let _ = Quantity::<dims::Force>::convert(t);
    /// ```
    #[inline]
    pub fn convert<D2>(other: Quantity<D2, V>) -> Self
    where
        D2: SameDimension<D>,
    {
        Self::new(other.value)
    }

    /// Re-tags this quantity with a structurally equal dimension; the method form of [`convert`](Self::convert).
    ///
    /// An inverse time is not dimensionless:
    ///
    /// ```compile_fail
    /// use dimq_core::{dims, Quantity};
    /// let per_second = 1.0 / Quantity::<dims::Time>::new(4.0);
    /// let _ = per_second.to_dimension::<dims::Dimensionless>();
    /// ```
    #[inline]
    pub fn to_dimension<D2>(self) -> Quantity<D2, V>
    where
        D2: Dimension,
        D: SameDimension<D2>,
    {
        Quantity::convert(self)
    }

    /// Changes the scalar representation, keeping the dimension.
    ///
    /// ```rust
    /// use dimq_core::{dims, Quantity};
    /// let n = Quantity::<dims::Length, f32>::new(1.5);
    /// let d: Quantity<dims::Length, f64> = n.cast();
    /// assert_eq!(d.value(), 1.5);
    /// ```
    #[inline]
    pub fn cast<W>(self) -> Quantity<D, W>
    where
        V: Into<W>,
    {
        Quantity::new(self.value.into())
    }
}

impl<D: Dimension, V: Copy> Quantity<D, V> {
    /// Returns the raw scalar, without dimension information.
    ///
    /// ```rust
    /// use dimq_core::si::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }

    /// `self * self`.
    ///
    /// ```rust
    /// use dimq_core::{dims, Quantity};
    /// let a: Quantity<dims::Area> = Quantity::<dims::Length>::new(3.0).squared();
    /// assert_eq!(a.value(), 9.0);
    /// ```
    #[inline]
    pub fn squared(self) -> Quantity<Product<D, D>, V>
    where
        D: DimMul<D>,
        V: Mul<Output = V>,
    {
        Quantity::new(self.value * self.value)
    }
}

impl<D: Dimension, V: PartialOrd> Quantity<D, V> {
    /// Returns the smaller of two quantities (`self` on ties or unordered values).
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert_eq!(Meters::new(3.0).min(Meters::new(5.0)).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities (`self` on ties or unordered values).
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.value > self.value {
            other
        } else {
            self
        }
    }
}

impl<D: Dimension, V: Real> Quantity<D, V> {
    /// Returns the absolute value.
    ///
    /// ```rust
    /// use dimq_core::si::Newtons;
    /// assert_eq!(Newtons::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Square root; every exponent of the dimension is halved.
    ///
    /// Only available when all exponents of `D` are even. A negative scalar yields `NaN`.
    ///
    /// ```rust
    /// use dimq_core::{dims, Quantity};
    /// let side: Quantity<dims::Length> = Quantity::<dims::Area>::new(25.0).sqrt();
    /// assert_eq!(side.value(), 5.0);
    /// ```
    ///
    /// ```compile_fail
    /// use dimq_core::{dims, Quantity};
    /// let _ = Quantity::<dims::Length>::new(4.0).sqrt();
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<D>, V>
    where
        D: DimSqrt,
    {
        Quantity::new(self.value.sqrt())
    }
}

/// Free-function form of [`Quantity::sqrt`].
#[inline]
pub fn sqrt<D, V>(q: Quantity<D, V>) -> Quantity<Root<D>, V>
where
    D: DimSqrt,
    V: Real,
{
    q.sqrt()
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-like trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, V: Clone> Clone for Quantity<D, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<D: Dimension, V: Copy> Copy for Quantity<D, V> {}

/// Zero for every primitive numeric precision.
impl<D: Dimension, V: Default> Default for Quantity<D, V> {
    #[inline]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<D: Dimension, V: Debug> Debug for Quantity<D, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &format_args!("{}", D::EXPONENTS))
            .finish()
    }
}

/// Prints the scalar only; the dimension has no runtime representation.
impl<D: Dimension, V: Display> Display for Quantity<D, V> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

impl<D: Dimension, V: PartialEq> PartialEq for Quantity<D, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension, V: Eq> Eq for Quantity<D, V> {}

impl<D: Dimension, V: PartialOrd> PartialOrd for Quantity<D, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension, V: Ord> Ord for Quantity<D, V> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<D: Dimension, V: Hash> Hash for Quantity<D, V> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, V: Add<Output = V>> Add for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<D: Dimension, V: AddAssign> AddAssign for Quantity<D, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D: Dimension, V: Sub<Output = V>> Sub for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<D: Dimension, V: SubAssign> SubAssign for Quantity<D, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D: Dimension, V: Neg<Output = V>> Neg for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<D1, D2, V> Mul<Quantity<D2, V>> for Quantity<D1, V>
where
    D1: DimMul<D2>,
    D2: Dimension,
    V: Mul<Output = V>,
{
    type Output = Quantity<Product<D1, D2>, V>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, V>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

/// Division by a zero scalar is not checked; it does whatever `V`'s division does.
impl<D1, D2, V> Div<Quantity<D2, V>> for Quantity<D1, V>
where
    D1: DimDiv<D2>,
    D2: Dimension,
    V: Div<Output = V>,
{
    type Output = Quantity<Quotient<D1, D2>, V>;
    #[inline]
    fn div(self, rhs: Quantity<D2, V>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

impl<D: Dimension, V: Add<Output = V> + Default> Sum for Quantity<D, V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| acc + q)
    }
}

impl<'a, D: Dimension, V: Add<Output = V> + Default + Copy> Sum<&'a Quantity<D, V>> for Quantity<D, V> {
    fn sum<I: Iterator<Item = &'a Quantity<D, V>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Scalar scaling by bare numbers of the same precision.
///
/// A bare number on either side keeps the dimension; a bare number divided by a quantity inverts it.
macro_rules! impl_scalar_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<D: Dimension> Mul<$t> for Quantity<D, $t> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::new(self.value * rhs)
                }
            }

            impl<D: Dimension> Mul<Quantity<D, $t>> for $t {
                type Output = Quantity<D, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: Dimension> Div<$t> for Quantity<D, $t> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::new(self.value / rhs)
                }
            }

            impl<D> Div<Quantity<D, $t>> for $t
            where
                Dimensionless: DimDiv<D>,
                D: Dimension,
            {
                type Output = Quantity<Quotient<Dimensionless, D>, $t>;
                #[inline]
                fn div(self, rhs: Quantity<D, $t>) -> Self::Output {
                    Quantity::new(self / rhs.value)
                }
            }

            impl<D: Dimension> MulAssign<$t> for Quantity<D, $t> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.value *= rhs;
                }
            }

            impl<D: Dimension> DivAssign<$t> for Quantity<D, $t> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.value /= rhs;
                }
            }
        )+
    };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, V: Serialize> Serialize for Quantity<D, V> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, V: Deserialize<'de>> Deserialize<'de> for Quantity<D, V> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = V::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their exponents.
///
/// Use with `#[serde(with = "...")]` where the serialized form should be self-describing. Deserialization checks
/// the stored exponents against the field's type.
///
/// # Examples
///
/// ```rust
/// use dimq_core::si::{Meters, Newtons};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Spring {
///     #[serde(with = "dimq_core::serde_with_dims")]
///     rest_length: Meters, // {"value": 0.3, "exponents": [0, 0, 1, 0, 0, 0, 0, 0]}
///
///     preload: Newtons, // 12.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dims {
    use super::*;
    use crate::exponents::AXES;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<D, V>` as a struct with `value` and `exponents` fields.
    pub fn serialize<D, V, S>(quantity: &Quantity<D, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        V: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value)?;
        state.serialize_field("exponents", &D::EXPONENTS.as_array())?;
        state.end()
    }

    /// Deserializes a `Quantity<D, V>` from a struct with `value` and optionally `exponents` fields.
    ///
    /// Exponents that differ from `D`'s are rejected.
    pub fn deserialize<'de, D, V, De>(deserializer: De) -> Result<Quantity<D, V>, De::Error>
    where
        D: Dimension,
        V: Deserialize<'de>,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Exponents,
        }

        struct QuantityVisitor<D, V>(PhantomData<fn() -> (D, V)>);

        impl<'de, D: Dimension, V: Deserialize<'de>> Visitor<'de> for QuantityVisitor<D, V> {
            type Value = Quantity<D, V>;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("struct Quantity with value and exponents fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Quantity<D, V>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<V> = None;
                let mut exponents: Option<[i32; AXES]> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Exponents => {
                            if exponents.is_some() {
                                return Err(de::Error::duplicate_field("exponents"));
                            }
                            exponents = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = exponents {
                    D::EXPONENTS
                        .ensure_matches(Exponents::new(found))
                        .map_err(de::Error::custom)?;
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "exponents"],
            QuantityVisitor(PhantomData),
        )
    }
}
