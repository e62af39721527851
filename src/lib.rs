//! Arithmetic substrate for the BLS12-381 pairing-friendly elliptic curve.
//!
//! This crate implements the layers everything else on this curve is built
//! from: the 381-bit base field `Fp` in Montgomery form, its quadratic
//! extension `Fp2`, the 255-bit scalar field, and the group `G1` in affine
//! and homogeneous projective coordinates, together with the standard
//! compressed (48-byte) and uncompressed (96-byte) point encodings.
//!
//! Every fallible operation (inversion of zero, square root of a
//! non-residue, decoding of a malformed byte string) returns a
//! [`subtle::CtOption`] rather than a sentinel value, so every constructed
//! value satisfies its type's invariants. The higher extension towers,
//! G2, and pairings are deliberately out of scope.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod field;
pub mod g1;
pub mod scalar;
pub mod util;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use field::fp::Fp;
pub use field::fp2::Fp2;
pub use g1::{G1Affine, G1Projective};
pub use scalar::Scalar;

/// Absolute value of the BLS parameter x = -0xd201_0000_0001_0000
/// defining this curve.
pub(crate) const BLS_X: u64 = 0xd201_0000_0001_0000;
/// The BLS parameter x is negative.
pub(crate) const BLS_X_IS_NEGATIVE: bool = true;
