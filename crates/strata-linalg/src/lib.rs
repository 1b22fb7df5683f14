//! Immutable vectors and matrices over integer, single and double precision elements.
//!
//! # Motivation
//!
//! Geometric code frequently mixes element kinds: pixel coordinates are integers, GPU-facing data
//! is single precision, and accumulated transforms want double precision. This library provides
//! small value types for that kind of work, where combining operands of different element kinds
//! "just works" and produces a result of the wider kind.
//!
//! # Promotion
//!
//! The three supported element kinds form a total order, `i32 < f32 < f64` (see
//! [`ElementKind`]). Every binary operation on two containers (or on a container and a scalar)
//! yields elements of the wider kind of its operands:
//!
//! ```
//! # use strata_linalg::*;
//! let sum = vec3(1i32, 2, 3).plus(vec3(0.5f64, 0.5, 0.5));
//! assert_eq!(sum, vec3(1.5, 2.5, 3.5));
//!
//! let scaled: Mat3f = Mat3i::identity().multiplied_by(0.5f32);
//! assert_eq!(scaled.trace(), 1.5);
//! ```
//!
//! Promotion is resolved at compile time through the [`Promote`] trait, so there is no run-time
//! dispatch on the element kind.
//!
//! # Fixed and Arbitrary Sizes
//!
//! [`Vector`] and [`Matrix`] have their dimensions encoded in their type via const generics. Since
//! operands are always conformable, their operations never fail, and passing [`None`] as the second
//! operand is treated as passing a zero vector or matrix.
//!
//! [`DVector`] and [`DMatrix`] have their dimensions chosen at run time. Their binary operations
//! check shapes and return a [`LinalgError`] for non-conformable or missing operands.
//!
//! # Integer Overflow
//!
//! Integer arithmetic wraps around on overflow in every build profile (see [`WrappingOps`]), so a
//! debug build and a release build compute the same result:
//!
//! ```
//! # use strata_linalg::*;
//! assert_eq!(vec2(i32::MAX, 0).plus(vec2(1i32, 0)), vec2(i32::MIN, 0));
//! ```
//!
//! Integer division by zero panics.
//!
//! # Goals & Non-Goals
//!
//! - All containers are immutable values: every operation returns a new container.
//! - Support only a single, column-major, unpadded data layout for matrices.
//! - Keep the API small and predictable. Operations are named methods (`plus`, `multiply_matrix`,
//!   ...); the `std::ops` operators are only provided for operands of the same element kind.
//! - No SIMD, sparse storage or arbitrary-precision arithmetic.

mod dmatrix;
mod dvector;
mod error;
mod inverse;
mod matrix;
mod promote;
mod traits;
mod vector;

pub use dmatrix::*;
pub use dvector::*;
pub use error::{Axis, LinalgError, Malformed, Operation, Result, Shape};
pub use matrix::*;
pub use promote::{ElementKind, Promote, Promoted, Scalar};
pub use traits::{Number, One, WrappingOps, Zero};
pub use vector::*;
