//! Quantity aliases named after SI units.
//!
//! These are for convenience only; each is a plain `Quantity<dims::X>` at [`DefaultPrecision`] and is
//! interchangeable with the spelled-out type.
//!
//! ```rust
//! use dimq_core::si::{Kilograms, MetersPerSecondSquared, Newtons};
//!
//! let m = Kilograms::new(20.0);
//! let a = MetersPerSecondSquared::new(9.81);
//! let f: Newtons = m * a;
//! assert!((f.value() - 196.2).abs() < 1e-9);
//! ```
//!
//! [`DefaultPrecision`]: crate::DefaultPrecision

use crate::dims;
use crate::Quantity;

/// Dimensionless number.
pub type Unitless = Quantity<dims::Dimensionless>;
/// Time in seconds.
pub type Seconds = Quantity<dims::Time>;
/// Mass in kilograms.
pub type Kilograms = Quantity<dims::Mass>;
/// Length in metres.
pub type Meters = Quantity<dims::Length>;
/// Plane angle in radians.
pub type Radians = Quantity<dims::Angle>;

/// Area in square metres.
pub type SquareMeters = Quantity<dims::Area>;
/// Volume in cubic metres.
pub type CubicMeters = Quantity<dims::Volume>;
/// Density in kg/m³.
pub type KilogramsPerCubicMeter = Quantity<dims::Density>;

/// Speed in m/s.
pub type MetersPerSecond = Quantity<dims::Speed>;
/// Acceleration in m/s².
pub type MetersPerSecondSquared = Quantity<dims::Accel>;
/// Angular speed in rad/s.
pub type RadiansPerSecond = Quantity<dims::AngSpeed>;
/// Angular acceleration in rad/s².
pub type RadiansPerSecondSquared = Quantity<dims::AngAccel>;

/// Force in newtons.
pub type Newtons = Quantity<dims::Force>;
/// Linear stiffness in N/m.
pub type NewtonsPerMeter = Quantity<dims::Stiffness>;
/// Linear damping coefficient in N·s/m.
pub type NewtonSecondsPerMeter = Quantity<dims::Viscosity>;
/// Linear damping coefficient in kg/s (same dimension as [`NewtonSecondsPerMeter`]).
pub type KilogramsPerSecond = Quantity<dims::Viscosity>;

/// Torque in N·m.
pub type NewtonMeters = Quantity<dims::Torque>;
/// Angular stiffness in N·m/rad.
pub type NewtonMetersPerRadian = Quantity<dims::AngStiffness>;
/// Angular damping coefficient in N·m·s/rad.
pub type NewtonMeterSecondsPerRadian = Quantity<dims::AngViscosity>;
/// Moment of inertia in kg·m².
pub type KilogramMetersSquared = Quantity<dims::MomentOfInertia>;
