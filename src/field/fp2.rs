//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::field::fp::Fp;

/// An element `c0 + c1·u` of the quadratic extension field.
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Constant coefficient
    pub c0: Fp,
    /// Coefficient of `u`
    pub c1: Fp,
}

impl Fp2 {
    /// The additive identity.
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// The multiplicative identity.
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Returns whether both coefficients are zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Samples a uniformly random element.
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Adds another element to this one, componentwise.
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Subtracts another element from this one, componentwise.
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Negates this element.
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Doubles this element.
    #[inline]
    pub const fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Multiplies this element by another.
    ///
    /// With u^2 = -1 the product of `a0 + a1·u` and `b0 + b1·u` is
    /// `(a0·b0 - a1·b1) + (a0·b1 + a1·b0)·u`; each coefficient is one
    /// fused sum of products, sharing the Montgomery reduction.
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::sum_of_products([self.c0, -self.c1], [rhs.c0, rhs.c1]),
            c1: Fp::sum_of_products([self.c0, self.c1], [rhs.c1, rhs.c0]),
        }
    }

    /// Squares this element.
    ///
    /// Complex squaring: with a = c0 + c1, b = c0 - c1, c = 2·c0 the
    /// square is `(a·b, c·c1)`, trading one multiplication for cheap
    /// additions.
    pub const fn square(&self) -> Fp2 {
        let a = (&self.c0).add(&self.c1);
        let b = (&self.c0).sub(&self.c1);
        let c = (&self.c0).add(&self.c0);

        Fp2 {
            c0: (&a).mul(&b),
            c1: (&c).mul(&self.c1),
        }
    }

    /// Returns the conjugate `c0 - c1·u`.
    #[inline]
    pub const fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: (&self.c1).neg(),
        }
    }

    /// Raises this element to the power p.
    ///
    /// For this tower the Frobenius endomorphism coincides with
    /// conjugation; that only holds because p ≡ 3 (mod 4). Porting to a
    /// different prime requires re-deriving this map.
    #[inline]
    pub const fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiplies by the non-residue `1 + u` used to build the next tower
    /// level: `(c0 - c1) + (c0 + c1)·u`.
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&self.c1),
            c1: (&self.c0).add(&self.c1),
        }
    }

    /// Returns whether this element is strictly lexicographically larger
    /// than its negation: c1 decides, c0 breaks the tie when c1 is zero.
    #[inline]
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// Computes a square root of this element, if one exists.
    ///
    /// Algorithm 9 of eprint 2012/685: with `a1 = self^((p-3)/4)`,
    /// `alpha = a1^2 · self` and `x0 = a1 · self`, the root is
    /// `(-x0.c1, x0.c0)` when `alpha = -1` (the subfield branch) and
    /// `(alpha + 1)^((p-1)/2) · x0` otherwise. The final squaring check
    /// rejects non-residues.
    pub fn sqrt(&self) -> CtOption<Fp2> {
        CtOption::new(Fp2::zero(), self.is_zero()).or_else(|| {
            // a1 = self^((p - 3) / 4)
            let a1 = self.pow_vartime(&[
                0xee7f_bfff_ffff_eaaa,
                0x07aa_ffff_ac54_ffff,
                0xd9cc_34a8_3dac_3d89,
                0xd91d_d2e1_3ce1_44af,
                0x92c6_e9ed_90d2_eb35,
                0x0680_447a_8e5f_f9a6,
            ]);

            // alpha = self^((p - 1) / 2)
            let alpha = a1.square() * self;

            // x0 = self^((p + 1) / 4)
            let x0 = a1 * self;

            // alpha = -1 means self lies in the subfield Fp scaled onto the
            // "twist" branch; the root is x0 · u.
            CtOption::new(
                Fp2 {
                    c0: -x0.c1,
                    c1: x0.c0,
                },
                alpha.ct_eq(&(&Fp2::one()).neg()),
            )
            .or_else(|| {
                CtOption::new(
                    (alpha + Fp2::one()).pow_vartime(&[
                        0xdcff_7fff_ffff_d555,
                        0x0f55_ffff_58a9_ffff,
                        0xb398_6950_7b58_7b12,
                        0xb23b_a5c2_79c2_895f,
                        0x258d_d3db_21a5_d66b,
                        0x0d00_88f5_1cbf_f34d,
                    ]) * x0,
                    Choice::from(1),
                )
            })
            .and_then(|sqrt| CtOption::new(sqrt, sqrt.square().ct_eq(self)))
        })
    }

    /// Computes the multiplicative inverse, absent for zero.
    ///
    /// `(a + bu)(a - bu) = a^2 + b^2`, so the inverse is the conjugate
    /// divided by the norm, costing a single Fp inversion. The norm is
    /// zero only for the zero element.
    pub fn invert(&self) -> CtOption<Fp2> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }

    /// Exponentiation by a 384-bit exponent, square-and-multiply from the
    /// most significant bit down. Variable time in the exponent's bit
    /// pattern; only use with public exponents.
    pub fn pow_vartime(&self, by: &[u64; 6]) -> Fp2 {
        let mut res = Fp2::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// `pow_vartime` for an exponent of arbitrary width, little-endian
    /// limbs.
    pub fn pow_vartime_extended(&self, by: &[u64]) -> Fp2 {
        let mut res = Fp2::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl<'b> Add<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        &self + rhs
    }
}

impl<'a> Add<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 {
        self + &rhs
    }
}

impl Add<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 {
        &self + &rhs
    }
}

impl<'b> Sub<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        &self - rhs
    }
}

impl<'a> Sub<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 {
        self - &rhs
    }
}

impl Sub<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 {
        &self - &rhs
    }
}

impl<'b> Mul<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        &self * rhs
    }
}

impl<'a> Mul<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 {
        self * &rhs
    }
}

impl Mul<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 {
        &self * &rhs
    }
}

impl AddAssign<Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp2) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp2) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp2) {
        *self = &*self * &rhs;
    }
}

impl<'b> AddAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self + rhs;
    }
}

impl<'b> SubAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self - rhs;
    }
}

impl<'b> MulAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self * rhs;
    }
}
