//! Const-evaluable mirror of the type-level dimension vector.
//!
//! Every [`Dimension`](crate::Dimension) carries its exponents as an [`Exponents`] value in
//! [`Dimension::EXPONENTS`](crate::Dimension::EXPONENTS). The type system does the real checking; this value exists
//! so the same algebra can be used in `const` assertions, printed, and property tested.

use core::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Number of axes in a dimension vector: four physical axes plus four reserved ones.
pub const AXES: usize = 8;

/// One axis of the dimension basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Time (seconds).
    Time,
    /// Mass (kilograms).
    Mass,
    /// Length (metres).
    Length,
    /// Plane angle (radians).
    Angle,
    /// Reserved for future basis growth; always zero for built-in dimensions.
    Reserved0,
    /// Reserved.
    Reserved1,
    /// Reserved.
    Reserved2,
    /// Reserved.
    Reserved3,
}

impl Axis {
    /// All axes in basis order.
    pub const ALL: [Axis; AXES] = [
        Axis::Time,
        Axis::Mass,
        Axis::Length,
        Axis::Angle,
        Axis::Reserved0,
        Axis::Reserved1,
        Axis::Reserved2,
        Axis::Reserved3,
    ];

    /// Position of this axis in an exponent vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Time => "time",
            Axis::Mass => "mass",
            Axis::Length => "length",
            Axis::Angle => "angle",
            Axis::Reserved0 => "reserved0",
            Axis::Reserved1 => "reserved1",
            Axis::Reserved2 => "reserved2",
            Axis::Reserved3 => "reserved3",
        }
    }

    /// Short symbol used when printing exponent vectors.
    pub const fn symbol(self) -> &'static str {
        match self {
            Axis::Time => "T",
            Axis::Mass => "M",
            Axis::Length => "L",
            Axis::Angle => "A",
            Axis::Reserved0 => "R0",
            Axis::Reserved1 => "R1",
            Axis::Reserved2 => "R2",
            Axis::Reserved3 => "R3",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Errors produced by the runtime side of the dimension algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// A square root was requested for a dimension with an odd exponent.
    #[error("cannot take the square root of a dimension with odd {axis} exponent {exponent}")]
    OddExponent {
        /// First offending axis.
        axis: Axis,
        /// The odd exponent found there.
        exponent: i32,
    },
    /// Two dimension vectors were expected to match.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    Mismatch {
        /// Dimension required by the type.
        expected: Exponents,
        /// Dimension actually supplied.
        found: Exponents,
    },
}

/// Exponent vector over the basis `time, mass, length, angle, reserved0..3`.
///
/// ```rust
/// use dimq_core::Exponents;
///
/// let mass = Exponents::new([0, 1, 0, 0, 0, 0, 0, 0]);
/// let accel = Exponents::new([-2, 0, 1, 0, 0, 0, 0, 0]);
/// let force = mass.multiply(accel);
/// assert_eq!(force.as_array(), [-2, 1, 1, 0, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exponents([i32; AXES]);

impl Exponents {
    /// The all-zero vector.
    pub const DIMENSIONLESS: Self = Self([0; AXES]);

    /// Builds a vector from raw exponents in basis order.
    #[inline]
    pub const fn new(exponents: [i32; AXES]) -> Self {
        Self(exponents)
    }

    /// Returns the raw exponents in basis order.
    #[inline]
    pub const fn as_array(self) -> [i32; AXES] {
        self.0
    }

    /// Exponent of a single axis.
    #[inline]
    pub const fn get(self, axis: Axis) -> i32 {
        self.0[axis.index()]
    }

    /// Elementwise sum: the dimension of a product.
    pub const fn multiply(self, rhs: Self) -> Self {
        let mut out = [0; AXES];
        let mut i = 0;
        while i < AXES {
            out[i] = self.0[i] + rhs.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Elementwise difference: the dimension of a quotient.
    pub const fn divide(self, rhs: Self) -> Self {
        let mut out = [0; AXES];
        let mut i = 0;
        while i < AXES {
            out[i] = self.0[i] - rhs.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Elementwise halving: the dimension of a square root.
    ///
    /// Fails on the first axis whose exponent is odd.
    pub const fn checked_sqrt(self) -> Result<Self, DimensionError> {
        let mut out = [0; AXES];
        let mut i = 0;
        while i < AXES {
            if self.0[i] % 2 != 0 {
                return Err(DimensionError::OddExponent {
                    axis: Axis::ALL[i],
                    exponent: self.0[i],
                });
            }
            out[i] = self.0[i] / 2;
            i += 1;
        }
        Ok(Self(out))
    }

    /// Like [`checked_sqrt`](Self::checked_sqrt) but panics on an odd exponent.
    ///
    /// Inside a `const` item the panic becomes a compile error.
    pub const fn sqrt(self) -> Self {
        match self.checked_sqrt() {
            Ok(root) => root,
            Err(_) => panic!("square root of a dimension with an odd exponent"),
        }
    }

    /// Axis-by-axis equality, usable in `const` contexts.
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < AXES {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::DIMENSIONLESS)
    }

    /// Returns `Ok(())` if both vectors match, a [`DimensionError::Mismatch`] otherwise.
    pub fn ensure_matches(self, found: Self) -> Result<(), DimensionError> {
        if self.equals(&found) {
            Ok(())
        } else {
            Err(DimensionError::Mismatch {
                expected: self,
                found,
            })
        }
    }
}

impl Display for Exponents {
    /// Formats as `T^-2·M·L`; the dimensionless vector prints as `1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (axis, &exp) in Axis::ALL.iter().zip(self.0.iter()) {
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if exp == 1 {
                f.write_str(axis.symbol())?;
            } else {
                write!(f, "{}^{}", axis.symbol(), exp)?;
            }
        }
        Ok(())
    }
}
