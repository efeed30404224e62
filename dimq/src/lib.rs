//! Compile-time dimensional analysis for physical quantities.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core`, the SI-named
//! quantity aliases and the `#[derive(Dimension)]` macro.
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is a zero-sized type holding the exponents of
//! time, mass, length and angle as type-level integers. Dimensions are checked by the compiler and cost nothing at
//! run time; a `Quantity<D>` is exactly one `f64` (or whatever scalar you pick).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add kilograms to metres or compare a force with a torque).
//! - Computes result dimensions of products, quotients and square roots at compile time.
//! - Lets dimensions carry their own names while staying interchangeable with structurally equal ones.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion or unit prefixes: values are stored as given, conventionally in SI base units.
//! - Mixed-precision arithmetic: both operands of a binary operator use the same scalar type.
//! - Runtime-typed dimensions.
//!
//! # Quick start
//!
//! Newton's second law:
//!
//! ```rust
//! use dimq::{Kilograms, MetersPerSecondSquared, Newtons};
//!
//! let m = Kilograms::new(20.0);
//! let a = MetersPerSecondSquared::new(9.81);
//! let f: Newtons = m * a;
//! assert!((f.value() - 196.2).abs() < 1e-9);
//! ```
//!
//! Ratios of like quantities are dimensionless:
//!
//! ```rust
//! use dimq::{Meters, Unitless};
//!
//! let r: Unitless = Meters::new(10.0) / Meters::new(2.0);
//! assert_eq!(r.value(), 5.0);
//! ```
//!
//! Give a dimension a name of its own with the derive:
//!
//! ```rust
//! use dimq::{Dimension, Kilograms, MetersPerSecondSquared, Quantity};
//!
//! #[derive(Dimension)]
//! #[dimension(time = -2, mass = 1, length = 1)]
//! pub enum Weight {}
//!
//! let w = Quantity::<Weight>::convert(Kilograms::new(2.0) * MetersPerSecondSquared::new(9.81));
//! assert!((w.value() - 19.62).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use dimq::{Kilograms, Meters};
//!
//! let _ = Kilograms::new(20.0) + Meters::new(5.0);
//! ```
//!
//! Comparing different dimensions:
//!
//! ```compile_fail
//! use dimq::{Newtons, NewtonMeters};
//!
//! let _ = Newtons::new(1.0) < NewtonMeters::new(1.0);
//! ```
//!
//! Assigning a product to the wrong dimension:
//!
//! ```compile_fail
//! use dimq::{Kilograms, Meters, Newtons};
//!
//! let _: Newtons = Kilograms::new(1.0) * Meters::new(1.0);
//! ```
//!
//! Square root of a dimension with odd exponents:
//!
//! ```compile_fail
//! use dimq::Meters;
//!
//! let _ = Meters::new(4.0).sqrt();
//! ```
//!
//! Mixing precisions:
//!
//! ```compile_fail
//! use dimq::{dims, Quantity};
//!
//! let a = Quantity::<dims::Mass, f32>::new(1.0);
//! let b = Quantity::<dims::Accel, f64>::new(1.0);
//! let _ = a * b;
//! ```
//!
//! Converting between unequal dimensions:
//!
//! ```compile_fail
//! use dimq::{dims, Quantity, NewtonMeters};
//!
//! let _ = Quantity::<dims::AngStiffness>::convert(NewtonMeters::new(1.0));
//! ```
//!
//! # Modules
//!
//! - `dimq::dims`: named dimension vectors (`Force`, `Stiffness`, `AngViscosity`, …)
//! - `dimq::si`: `Quantity` aliases named after SI units, also re-exported at the crate root
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: enables `serde` support for `Quantity<D, V>` and the `serde_with_dims` helper.
//! - `f32-precision`: the default scalar becomes `f32`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimension mistakes are compile errors. Arithmetic on the scalar behaves exactly like the scalar: IEEE-754 for
//! floats, the usual integer panics for integer division by zero.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

/// Derives [`Dimension`](trait@dimq_core::Dimension) for a marker type from a `#[dimension(...)]` attribute.
///
/// Keys are `time`, `mass`, `length` and `angle` (integer exponents, default `0`) and `crate` (path to this crate,
/// default `::dimq`).
pub use dimq_derive::Dimension;

pub use dimq_core::si::*;
