//! Minimal end-to-end example: Newton's second law, a dimensionless ratio and a square root.

use dimq::{dims, sqrt, Kilograms, Meters, MetersPerSecondSquared, Newtons, NewtonsPerMeter, Quantity, Unitless};

fn main() {
    let m = Kilograms::new(20.0);
    let a = MetersPerSecondSquared::new(9.81);
    let f: Newtons = m * a;
    assert!((f.value() - 196.2).abs() < 1e-9);

    let r: Unitless = Meters::new(10.0) / Meters::new(2.0);
    assert_eq!(r.value(), 5.0);

    let omega: Quantity<dims::AngSpeed> = sqrt(NewtonsPerMeter::new(400.0) / Kilograms::new(4.0))
        * Quantity::<dims::Angle>::new(1.0);
    assert!((omega.value() - 10.0).abs() < 1e-12);

    println!("F = {f} N, ratio = {r}, omega = {omega} rad/s");
}
