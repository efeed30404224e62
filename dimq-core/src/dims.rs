//! Named dimensions.
//!
//! Axis order is `time, mass, length, angle`; each value is the exponent of that axis. By convention the base
//! units are the second, the kilogram, the metre and the radian, but nothing here depends on a unit choice.
//!
//! These are fixed lookup values rather than computed ones. The relationships between them are checked by the
//! compiler at the bottom of this file.

use typenum::{N1, N2, N3, P1, P2, P3, Z0};

use crate::dimension::{Dim, Product, Quotient};

/// Dimensionless scalar.
///
/// For unit-less coefficients and ratios; don't use it to avoid declaring the dimensions of values.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0>;

/// Time (s).
pub type Time = Dim<P1, Z0, Z0, Z0>;

/// Mass (kg).
pub type Mass = Dim<Z0, P1, Z0, Z0>;

/// Length (m).
pub type Length = Dim<Z0, Z0, P1, Z0>;

/// Plane angle (rad).
pub type Angle = Dim<Z0, Z0, Z0, P1>;

/// Area (m²).
pub type Area = Dim<Z0, Z0, P2, Z0>;

/// Volume (m³).
pub type Volume = Dim<Z0, Z0, P3, Z0>;

/// Density (kg/m³).
pub type Density = Dim<Z0, P1, N3, Z0>;

/// Speed (m/s).
pub type Speed = Dim<N1, Z0, P1, Z0>;

/// Acceleration (m/s²).
pub type Accel = Dim<N2, Z0, P1, Z0>;

/// Angular speed (rad/s).
pub type AngSpeed = Dim<N1, Z0, Z0, P1>;

/// Angular acceleration (rad/s²).
pub type AngAccel = Dim<N2, Z0, Z0, P1>;

/// Force (N = kg·m/s²).
pub type Force = Dim<N2, P1, P1, Z0>;

/// Linear stiffness (N/m = kg/s²).
pub type Stiffness = Dim<N2, P1, Z0, Z0>;

/// Linear damping coefficient (N·s/m = kg/s).
pub type Viscosity = Dim<N1, P1, Z0, Z0>;

/// Torque (N·m).
pub type Torque = Dim<N2, P1, P2, Z0>;

/// Angular stiffness (N·m/rad).
pub type AngStiffness = Dim<N2, P1, P2, N1>;

/// Angular damping coefficient (N·m·s/rad).
pub type AngViscosity = Dim<N1, P1, P2, N1>;

/// Moment of inertia (kg·m²).
pub type MomentOfInertia = Dim<Z0, P1, P2, Z0>;

macro_rules! assert_relation {
    ($lhs:ty, $rhs:ty) => {
        const _: () = assert!(<$lhs as $crate::Dimension>::EXPONENTS
            .equals(&<$rhs as $crate::Dimension>::EXPONENTS));
    };
}

assert_relation!(Product<Mass, Accel>, Force);
assert_relation!(Product<Force, Length>, Torque);
assert_relation!(Quotient<Length, Time>, Speed);
assert_relation!(Quotient<Speed, Time>, Accel);
assert_relation!(Quotient<Angle, Time>, AngSpeed);
assert_relation!(Quotient<AngSpeed, Time>, AngAccel);
assert_relation!(Product<Length, Length>, Area);
assert_relation!(Product<Area, Length>, Volume);
assert_relation!(Quotient<Mass, Volume>, Density);
assert_relation!(Quotient<Force, Length>, Stiffness);
assert_relation!(Quotient<Force, Speed>, Viscosity);
assert_relation!(Quotient<Torque, Angle>, AngStiffness);
assert_relation!(Quotient<Torque, AngSpeed>, AngViscosity);
assert_relation!(Product<Mass, Area>, MomentOfInertia);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dimension, Root, SameDimension};
    use crate::exponents::{Axis, Exponents};

    fn same<A: Dimension, B: SameDimension<A>>() {}

    #[test]
    fn base_dimensions_are_unit_vectors() {
        assert_eq!(Time::EXPONENTS.get(Axis::Time), 1);
        assert_eq!(Mass::EXPONENTS.get(Axis::Mass), 1);
        assert_eq!(Length::EXPONENTS.get(Axis::Length), 1);
        assert_eq!(Angle::EXPONENTS.get(Axis::Angle), 1);
        assert_eq!(Dimensionless::EXPONENTS, Exponents::DIMENSIONLESS);
    }

    #[test]
    fn reserved_axes_are_zero() {
        let all = [
            Dimensionless::EXPONENTS,
            Time::EXPONENTS,
            Mass::EXPONENTS,
            Length::EXPONENTS,
            Angle::EXPONENTS,
            Area::EXPONENTS,
            Volume::EXPONENTS,
            Density::EXPONENTS,
            Speed::EXPONENTS,
            Accel::EXPONENTS,
            AngSpeed::EXPONENTS,
            AngAccel::EXPONENTS,
            Force::EXPONENTS,
            Stiffness::EXPONENTS,
            Viscosity::EXPONENTS,
            Torque::EXPONENTS,
            AngStiffness::EXPONENTS,
            AngViscosity::EXPONENTS,
            MomentOfInertia::EXPONENTS,
        ];
        for e in all {
            for axis in [Axis::Reserved0, Axis::Reserved1, Axis::Reserved2, Axis::Reserved3] {
                assert_eq!(e.get(axis), 0, "{e} has a non-zero {axis} exponent");
            }
        }
    }

    #[test]
    fn derived_dimensions_are_consistent_at_type_level() {
        same::<Product<Mass, Accel>, Force>();
        same::<Product<Force, Length>, Torque>();
        same::<Quotient<Length, Time>, Speed>();
        same::<Quotient<Speed, Time>, Accel>();
        same::<Product<Density, Volume>, Mass>();
        same::<Product<Stiffness, Length>, Force>();
        same::<Product<Viscosity, Speed>, Force>();
        same::<Product<AngStiffness, Angle>, Torque>();
        same::<Product<AngViscosity, AngSpeed>, Torque>();
        same::<Root<Area>, Length>();
    }

    #[test]
    fn angle_is_a_real_axis() {
        // Radians are tracked, so torque and angular stiffness differ.
        assert_ne!(Torque::EXPONENTS, AngStiffness::EXPONENTS);
        assert_ne!(<Product<MomentOfInertia, AngAccel>>::EXPONENTS, Torque::EXPONENTS);
    }
}
