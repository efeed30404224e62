//! Integration-level tests for the `dimq` facade crate.

use dimq::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

#[derive(Dimension)]
#[dimension(time = -2, mass = 1, length = 1)]
pub enum Weight {}

#[derive(Dimension)]
#[dimension(angle = 1)]
pub struct Heading;

#[derive(Dimension)]
pub enum Ratio {}

#[test]
fn newtons_second_law() {
    let m = Kilograms::new(20.0);
    let a = MetersPerSecondSquared::new(9.81);
    let f: Newtons = m * a;
    assert_abs_diff_eq!(f.value(), 196.2, epsilon = 1e-4);
}

#[test]
fn accumulate_in_place() {
    let mut d = Meters::new(1.5);
    d += Meters::new(2.5);
    assert_eq!(d.value(), 4.0);
    d -= Meters::new(1.0);
    assert_eq!(d.value(), 3.0);
}

#[test]
fn like_quotient_is_dimensionless() {
    let r: Unitless = Meters::new(10.0) / Meters::new(2.0);
    assert_eq!(r.value(), 5.0);
    assert!(Unitless::DIMENSION.is_dimensionless());
}

#[test]
fn ordering_agrees_with_scalars() {
    let pairs = [(1.0, 2.0), (2.0, 1.0), (3.0, 3.0), (-0.5, 0.5)];
    for (x, y) in pairs {
        let (a, b) = (Newtons::new(x), Newtons::new(y));
        assert_eq!(a < b, x < y);
        assert_eq!(a <= b, x <= y);
        assert_eq!(a > b, x > y);
        assert_eq!(a >= b, x >= y);
        assert_eq!(a == b, x == y);
        assert_eq!(a != b, x != y);
    }
}

#[test]
fn nan_is_unordered() {
    let nan = Quantity::<dims::Time, f64>::new(f64::NAN);
    assert!(nan != nan);
    assert_eq!(nan.partial_cmp(&Quantity::new(1.0)), None);
}

#[test]
fn derived_marker_converts_both_ways() {
    let f: Newtons = Kilograms::new(3.0) * MetersPerSecondSquared::new(2.0);
    let w = Quantity::<Weight>::convert(f);
    assert_eq!(w.value(), 6.0);
    assert_eq!(Quantity::<Weight>::DIMENSION, Newtons::DIMENSION);

    let back: Newtons = w.to_dimension();
    assert_eq!(back, f);
}

#[test]
fn derived_markers_have_expected_exponents() {
    assert_eq!(Weight::EXPONENTS.as_array(), [-2, 1, 1, 0, 0, 0, 0, 0]);
    assert_eq!(Heading::EXPONENTS, dims::Angle::EXPONENTS);
    assert!(Ratio::EXPONENTS.is_dimensionless());
    assert!(dimension_equal::<Weight, dims::Force>());
    assert!(!dimension_equal::<Weight, dims::Torque>());
}

assert_same_dimension!(Weight, dims::Force);
assert_same_dimension!(Product<dims::Mass, dims::Accel>, Weight);
assert_same_dimension!(Heading, dims::Angle);

#[test]
fn derived_marker_takes_part_in_algebra() {
    let w = Quantity::<Weight>::new(10.0);
    let torque: NewtonMeters = (w * Meters::new(0.5)).to_dimension();
    assert_eq!(torque.value(), 5.0);

    let turn = Quantity::<Heading, f64>::new(core::f64::consts::PI);
    let rate: Quantity<dims::AngSpeed, f64> = (turn / Quantity::<dims::Time, f64>::new(2.0)).to_dimension();
    assert_abs_diff_eq!(rate.value(), core::f64::consts::FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn spring_and_damper_forces() {
    let k = NewtonsPerMeter::new(250.0);
    let b = NewtonSecondsPerMeter::new(4.0);
    let x = Meters::new(0.1);
    let v = MetersPerSecond::new(-0.5);
    let f: Newtons = -(k * x) - b * v;
    assert_abs_diff_eq!(f.value(), -23.0, epsilon = 1e-5);
}

#[test]
fn rotational_analogues() {
    let k = NewtonMetersPerRadian::new(12.0);
    let theta = Radians::new(0.25);
    let tau: NewtonMeters = k * theta;
    assert_abs_diff_eq!(tau.value(), 3.0, epsilon = 1e-12);

    let inertia = KilogramMetersSquared::new(2.0);
    let alpha = RadiansPerSecondSquared::new(1.5);
    let tau2: Quantity<Product<dims::MomentOfInertia, dims::AngAccel>> = inertia * alpha;
    assert_eq!(tau2.value(), 3.0);
    assert_ne!(tau2.dimension_string(), NewtonMeters::DIMENSION.to_string());
}

#[test]
fn density_times_volume_is_mass() {
    let rho = KilogramsPerCubicMeter::new(1000.0);
    let vol = CubicMeters::new(0.002);
    let m: Kilograms = rho * vol;
    assert_relative_eq!(m.value(), 2.0, max_relative = 1e-6);
}

#[test]
fn natural_frequency_via_sqrt() {
    let k = NewtonsPerMeter::new(400.0);
    let m = Kilograms::new(4.0);
    let omega: Quantity<Root<Quotient<dims::Stiffness, dims::Mass>>> = sqrt(k / m);
    assert_abs_diff_eq!(omega.value(), 10.0, epsilon = 1e-12);
    assert_eq!(omega.dimension_string(), "T^-1");
}

#[test]
fn display_shows_scalar() {
    assert_eq!(Newtons::new(196.2).to_string(), "196.2");
    assert_eq!(format!("{:>8.3}", Meters::new(1.5)), "   1.500");
}

#[test]
fn default_is_zero() {
    assert_eq!(Newtons::default().value(), 0.0);
    assert_eq!(Quantity::<Weight, i64>::default().value(), 0);
}

#[test]
fn division_by_zero_is_infinite() {
    let v: MetersPerSecond = Meters::new(1.0) / Seconds::new(0.0);
    assert!(v.value().is_infinite());
    assert!(v.value().is_sign_positive());
}

#[test]
fn scalar_scaling_keeps_dimension() {
    let f = Newtons::new(10.0);
    let doubled: Newtons = 2.0 * f;
    let halved: Newtons = f / 2.0;
    assert_eq!(doubled.value(), 20.0);
    assert_eq!(halved.value(), 5.0);
}

#[test]
fn sum_over_iterator() {
    let forces = [Newtons::new(1.0), Newtons::new(-3.0), Newtons::new(7.5)];
    let net: Newtons = forces.iter().sum();
    assert_eq!(net.value(), 5.5);
}

#[test]
fn quantities_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Newtons>();
    assert_send_sync::<Quantity<Weight, i32>>();
}

#[test]
fn exponents_error_messages() {
    let err = dims::Length::EXPONENTS.checked_sqrt().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot take the square root of a dimension with odd length exponent 1"
    );

    let err = dims::Force::EXPONENTS.ensure_matches(dims::Torque::EXPONENTS).unwrap_err();
    assert_eq!(err.to_string(), "dimension mismatch: expected T^-2·M·L, found T^-2·M·L^2");
}

proptest! {
    #[test]
    fn prop_derived_marker_matches_named_dimension(m in 1e-3..1e3f64, a in -1e3..1e3f64) {
        let f: Quantity<dims::Force, f64> = Quantity::<dims::Mass, f64>::new(m) * Quantity::<dims::Accel, f64>::new(a);
        let w = Quantity::<Weight, f64>::convert(f);
        prop_assert_eq!(w.value(), m * a);
        prop_assert_eq!(w.to_dimension::<dims::Force>(), f);
    }

    #[test]
    fn prop_ordering_agrees_with_scalars(x in -1e6..1e6f64, y in -1e6..1e6f64) {
        let (a, b) = (Quantity::<Weight, f64>::new(x), Quantity::<Weight, f64>::new(y));
        prop_assert_eq!(a < b, x < y);
        prop_assert_eq!(a >= b, x >= y);
        prop_assert_eq!(a == b, x == y);
    }

    #[test]
    fn prop_accumulation_matches_scalars(xs in proptest::collection::vec(-1e3..1e3f64, 0..32)) {
        let mut total = Quantity::<dims::Length, f64>::default();
        for &x in &xs {
            total += Quantity::new(x);
        }
        prop_assert_eq!(total.value(), xs.iter().fold(0.0, |acc, x| acc + x));
    }
}

trait DimensionString {
    fn dimension_string(&self) -> String;
}

impl<D: Dimension, V> DimensionString for Quantity<D, V> {
    fn dimension_string(&self) -> String {
        D::EXPONENTS.to_string()
    }
}
