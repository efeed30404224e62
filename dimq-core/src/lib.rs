//! Core type system for compile-time dimensioned quantities.
//!
//! `dimq-core` provides a minimal, zero-cost dimension model:
//!
//! - A *dimension* is a type implementing [`Dimension`]: a vector of `typenum` integer exponents over the basis
//!   `time, mass, length, angle` (plus four reserved axes that are always zero).
//! - A value tagged with a dimension is a [`Quantity<D, V>`], backed by one scalar `V` ([`DefaultPrecision`] unless
//!   stated otherwise).
//! - Products, quotients and square roots compute their dimension with [`Product`], [`Quotient`] and [`Root`],
//!   entirely at compile time.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: a mass cannot be added to a length, compared with a force, or
//!   converted into one.
//! - Zero runtime overhead for dimension tags (phantom types only).
//! - Dimensional analysis: `Mass * Accel` *is* `Force`, because both are the same exponent vector.
//!
//! # What this crate does not try to solve
//!
//! - Units and unit conversion: a quantity stores whatever scalar you give it, by convention in SI base units.
//! - Parsing quantities from strings.
//! - Non-multiplicative relationships (offsets such as °C, logarithmic scales).
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::si::{Kilograms, MetersPerSecondSquared, Newtons};
//!
//! let f: Newtons = Kilograms::new(20.0) * MetersPerSecondSquared::new(9.81);
//! assert!((f.value() - 196.2).abs() < 1e-9);
//! ```
//!
//! Dimensions that don't match are rejected by the compiler:
//!
//! ```compile_fail
//! use dimq_core::si::{Kilograms, Meters};
//!
//! let _ = Kilograms::new(20.0) + Meters::new(5.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, `sqrt` and `abs` are provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<D, V>` (the raw scalar) and the [`serde_with_dims`] helper.
//! - `f32-precision`: makes [`DefaultPrecision`] `f32` instead of `f64`.
//!
//! # Panics and errors
//!
//! Dimension errors are compile errors. At run time, arithmetic follows the scalar type: IEEE-754 for floats
//! (division by zero gives infinity or NaN, `sqrt` of a negative value gives NaN), the usual panics for integer
//! division by zero. [`DimensionError`] is only produced by the value-level [`Exponents`] algebra and by
//! deserialization.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod exponents;
mod macros;
mod precision;
mod quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    dimension_equal, Dim, DimDiv, DimMul, DimSqrt, Dimension, Product, Quotient, Root, SameDimension,
};
pub use exponents::{Axis, DimensionError, Exponents, AXES};
pub use precision::{DefaultPrecision, Real};
pub use quantity::{sqrt, Quantity};

#[cfg(feature = "serde")]
pub use quantity::serde_with_dims;

/// Type-level integers used as exponents.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Named dimensions and aliases
// ─────────────────────────────────────────────────────────────────────────────

pub mod dims;
pub mod si;
