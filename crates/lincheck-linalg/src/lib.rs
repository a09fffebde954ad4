//! A small linear algebra library for lincheck.
//!
//! # Motivation
//!
//! The lincheck tools work exclusively with tiny, fixed-size equation systems, so their linear
//! algebra needs are narrow: fixed-size matrices and vectors, a matrix-vector product, and
//! tolerance-based comparison of the results. This library covers exactly that surface.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices. Rows correspond to
//!   equations everywhere in this workspace, and row access is the hot path.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Don't have any third-party dependencies.

pub mod approx;
mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
