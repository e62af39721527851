//! Finite fields underlying the curve: the base field and its quadratic
//! extension.

pub mod fp;
pub mod fp2;
