//! The G1 group: points on `y^2 = x^3 + 4` over the base field.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::{validate, Error, Result};
use crate::field::fp::Fp;
use crate::scalar::Scalar;
use crate::{BLS_X, BLS_X_IS_NEGATIVE};

/// A point in affine coordinates, with an explicit infinity flag.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) infinity: Choice,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for G1Affine {}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G1Projective> for G1Affine {
    fn from(p: &'a G1Projective) -> G1Affine {
        let zinv = p.z.invert().unwrap_or(Fp::zero());
        let x = p.x * zinv;
        let y = p.y * zinv;

        let tmp = G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        // zinv is zero exactly when p is the identity
        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        // The identity keeps y = 1 so its encoding stays canonical
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        self + &(-rhs)
    }
}

impl<T> Sum<T> for G1Projective
where
    T: Borrow<G1Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl<'b> Add<&'b G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        &self + rhs
    }
}
impl<'a> Add<G1Affine> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Affine) -> G1Projective {
        self + &rhs
    }
}
impl Add<G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Affine) -> G1Projective {
        &self + &rhs
    }
}
impl<'b> Sub<&'b G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        &self - rhs
    }
}
impl<'a> Sub<G1Affine> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Affine) -> G1Projective {
        self - &rhs
    }
}
impl Sub<G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Affine) -> G1Projective {
        &self - &rhs
    }
}
impl SubAssign<G1Affine> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: G1Affine) {
        *self = &*self - &rhs;
    }
}
impl AddAssign<G1Affine> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: G1Affine) {
        *self = &*self + &rhs;
    }
}
impl<'b> SubAssign<&'b G1Affine> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b G1Affine) {
        *self = &*self - rhs;
    }
}
impl<'b> AddAssign<&'b G1Affine> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: &'b G1Affine) {
        *self = &*self + rhs;
    }
}

impl<'b> Add<&'b G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        &self + rhs
    }
}
impl<'a> Add<G1Projective> for &'a G1Affine {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        self + &rhs
    }
}
impl Add<G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        &self + &rhs
    }
}
impl<'b> Sub<&'b G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        &self - rhs
    }
}
impl<'a> Sub<G1Projective> for &'a G1Affine {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        self - &rhs
    }
}
impl Sub<G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        &self - &rhs
    }
}

// Curve constant b = 4
const B: Fp = Fp::from_raw_unchecked([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]);

/// A nontrivial cube root of unity in the base field, the scaling factor of
/// the degree-one endomorphism `(x, y) -> (BETA*x, y)`.
pub const BETA: Fp = Fp::from_raw_unchecked([
    0x30f1_361b_798a_64e8,
    0xf3b8_ddab_7ece_5a2a,
    0x16a8_ca3a_c615_77f7,
    0xc26a_2ff8_74fd_029b,
    0x3636_b766_6070_1c6e,
    0x051b_a4ab_241b_6160,
]);

fn endomorphism(p: &G1Affine) -> G1Affine {
    // (x, y) -> (BETA*x, y), an order-3 automorphism of the curve
    let mut res = *p;
    res.x *= BETA;
    res
}

impl G1Affine {
    /// The point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// The fixed generator of the prime-order subgroup.
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::from_raw_unchecked([
                0x5cb3_8790_fd53_0c16,
                0x7817_fc67_9976_fff5,
                0x154f_95c7_143b_a1c1,
                0xf0ae_6acd_f3d0_e747,
                0xedce_6ecc_21db_f440,
                0x1201_7741_9e0b_fb75,
            ]),
            y: Fp::from_raw_unchecked([
                0xbaac_93d5_0ce7_2271,
                0x8c22_631a_7918_fd8e,
                0xdd59_5f13_5707_25ce,
                0x51ac_5829_5040_5194,
                0x0e1c_8c3f_ad00_59c0,
                0x0bbc_3efc_5008_a26a,
            ]),
            infinity: Choice::from(0u8),
        }
    }

    /// Returns whether this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Returns whether this point satisfies the curve equation.
    pub fn is_on_curve(&self) -> Choice {
        // y^2 - x^3 = 4, vacuously true at infinity
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Returns whether this point lies in the prime-order subgroup.
    ///
    /// Uses the endomorphism criterion: P is in the subgroup exactly when
    /// `-x^2 * P` equals the image of P under the BETA endomorphism, which
    /// replaces a full order-r scalar multiplication with two short ones.
    pub fn is_torsion_free(&self) -> Choice {
        let minus_x_squared_times_p = G1Projective::from(self).mul_by_x().mul_by_x().neg();
        let endomorphism_p = endomorphism(self);
        minus_x_squared_times_p.ct_eq(&G1Projective::from(endomorphism_p))
    }

    /// Serializes to the 48-byte compressed encoding.
    ///
    /// Bit 7 of the leading byte marks compression, bit 6 infinity, and
    /// bit 5 records which of the two y roots was meant.
    pub fn to_compressed(&self) -> [u8; 48] {
        let mut res = Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes();

        res[0] |= 1u8 << 7;
        res[0] |= u8::conditional_select(&0u8, &(1u8 << 6), self.infinity);
        res[0] |= u8::conditional_select(
            &0u8,
            &(1u8 << 5),
            (!self.infinity) & self.y.lexicographically_largest(),
        );

        res
    }

    /// Serializes to the 96-byte uncompressed encoding.
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let mut res = [0; 96];

        res[0..48].copy_from_slice(
            &Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res[48..96].copy_from_slice(
            &Fp::conditional_select(&self.y, &Fp::zero(), self.infinity).to_bytes()[..],
        );

        res[0] |= u8::conditional_select(&0u8, &(1u8 << 6), self.infinity);

        res
    }

    /// Parses the 96-byte uncompressed encoding, checking curve and subgroup
    /// membership.
    pub fn from_uncompressed(bytes: &[u8; 96]) -> CtOption<Self> {
        Self::from_uncompressed_unchecked(bytes)
            .and_then(|p| CtOption::new(p, p.is_on_curve() & p.is_torsion_free()))
    }

    /// Parses the 96-byte uncompressed encoding without checking that the
    /// point is on the curve or in the subgroup.
    pub fn from_uncompressed_unchecked(bytes: &[u8; 96]) -> CtOption<Self> {
        let compression_flag_set = Choice::from((bytes[0] >> 7) & 1);
        let infinity_flag_set = Choice::from((bytes[0] >> 6) & 1);
        let sort_flag_set = Choice::from((bytes[0] >> 5) & 1);

        let x = {
            let mut tmp = [0; 48];
            tmp.copy_from_slice(&bytes[0..48]);

            // Flag bits only carry meaning in the first half
            tmp[0] &= 0b0001_1111;

            Fp::from_bytes(&tmp)
        };
        let mut tmp = [0; 48];
        tmp.copy_from_slice(&bytes[48..96]);
        let y = Fp::from_bytes(&tmp);

        x.and_then(|x| {
            y.and_then(|y| {
                let p = G1Affine::conditional_select(
                    &G1Affine {
                        x,
                        y,
                        infinity: infinity_flag_set,
                    },
                    &G1Affine::identity(),
                    infinity_flag_set,
                );

                CtOption::new(
                    p,
                    // Infinity must come with zero coordinates, and the
                    // compressed-only flags must be clear
                    ((!infinity_flag_set) | (infinity_flag_set & x.is_zero() & y.is_zero()))
                        & (!compression_flag_set)
                        & (!sort_flag_set),
                )
            })
        })
    }

    /// Parses the 48-byte compressed encoding, checking subgroup membership.
    ///
    /// Decompression solves the curve equation for y, so an explicit
    /// on-curve check is unnecessary.
    pub fn from_compressed(bytes: &[u8; 48]) -> CtOption<Self> {
        Self::from_compressed_unchecked(bytes)
            .and_then(|p| CtOption::new(p, p.is_torsion_free()))
    }

    /// Parses the 48-byte compressed encoding without the subgroup check.
    pub fn from_compressed_unchecked(bytes: &[u8; 48]) -> CtOption<Self> {
        let compression_flag_set = Choice::from((bytes[0] >> 7) & 1);
        let infinity_flag_set = Choice::from((bytes[0] >> 6) & 1);
        let sort_flag_set = Choice::from((bytes[0] >> 5) & 1);

        let x = {
            let mut tmp = *bytes;
            tmp[0] &= 0b0001_1111;
            Fp::from_bytes(&tmp)
        };

        x.and_then(|x| {
            // Infinity: compression set, sort clear, x zero
            CtOption::new(
                G1Affine::identity(),
                infinity_flag_set & compression_flag_set & (!sort_flag_set) & x.is_zero(),
            )
            .or_else(|| {
                ((x.square() * x) + B).sqrt().and_then(|y| {
                    // Pick the root matching the sort flag
                    let y = Fp::conditional_select(
                        &y,
                        &-y,
                        y.lexicographically_largest() ^ sort_flag_set,
                    );

                    CtOption::new(
                        G1Affine {
                            x,
                            y,
                            infinity: infinity_flag_set,
                        },
                        (!infinity_flag_set) & compression_flag_set,
                    )
                })
            })
        })
    }

    /// Parses a compressed point from a slice, validating the length first.
    pub fn from_compressed_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("G1Affine::from_compressed", bytes.len(), 48)?;

        let mut array = [0u8; 48];
        array.copy_from_slice(bytes);

        Self::from_compressed(&array)
            .into_option()
            .ok_or(Error::param("compressed_bytes", "invalid G1 point encoding"))
    }

    /// Parses an uncompressed point from a slice, validating the length
    /// first.
    pub fn from_uncompressed_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("G1Affine::from_uncompressed", bytes.len(), 96)?;

        let mut array = [0u8; 96];
        array.copy_from_slice(bytes);

        Self::from_uncompressed(&array)
            .into_option()
            .ok_or(Error::param("uncompressed_bytes", "invalid G1 point encoding"))
    }
}

/// A point in homogeneous projective coordinates `(X : Y : Z)`.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for G1Projective {}

impl fmt::Display for G1Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G1Affine> for G1Projective {
    fn from(p: &'a G1Affine) -> G1Projective {
        G1Projective {
            x: p.x,
            y: p.y,
            z: Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity),
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

impl ConstantTimeEq for G1Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (x1/z1, y1/z1) == (x2/z2, y2/z2), cross-multiplied to avoid
        // inversions
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;

        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G1Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Projective {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Projective {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G1Projective> for &'a Scalar {
    type Output = G1Projective;

    #[inline]
    fn mul(self, rhs: &'b G1Projective) -> Self::Output {
        rhs * self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Affine {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G1Projective::from(self).multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G1Affine> for &'a Scalar {
    type Output = G1Projective;

    #[inline]
    fn mul(self, rhs: &'b G1Affine) -> Self::Output {
        rhs * self
    }
}

impl<'b> Add<&'b G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        &self + rhs
    }
}
impl<'a> Add<G1Projective> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        self + &rhs
    }
}
impl Add<G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        &self + &rhs
    }
}
impl<'b> Sub<&'b G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        &self - rhs
    }
}
impl<'a> Sub<G1Projective> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        self - &rhs
    }
}
impl Sub<G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        &self - &rhs
    }
}
impl SubAssign<G1Projective> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: G1Projective) {
        *self = &*self - &rhs;
    }
}
impl AddAssign<G1Projective> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: G1Projective) {
        *self = &*self + &rhs;
    }
}
impl<'b> SubAssign<&'b G1Projective> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b G1Projective) {
        *self = &*self - rhs;
    }
}
impl<'b> AddAssign<&'b G1Projective> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: &'b G1Projective) {
        *self = &*self + rhs;
    }
}

impl<'b> Mul<&'b Scalar> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<Scalar> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        self * &rhs
    }
}
impl Mul<Scalar> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        &self * &rhs
    }
}
impl MulAssign<Scalar> for G1Projective {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = &*self * &rhs;
    }
}
impl<'b> MulAssign<&'b Scalar> for G1Projective {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

impl<'b> Mul<&'b Scalar> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<Scalar> for &'a G1Affine {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        self * &rhs
    }
}
impl Mul<Scalar> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        &self * &rhs
    }
}

impl<'b> Mul<&'b G1Affine> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b G1Affine) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<G1Affine> for &'a Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Affine) -> G1Projective {
        self * &rhs
    }
}
impl Mul<G1Affine> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Affine) -> G1Projective {
        &self * &rhs
    }
}

impl<'b> Mul<&'b G1Projective> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b G1Projective) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<G1Projective> for &'a Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Projective) -> G1Projective {
        self * &rhs
    }
}
impl Mul<G1Projective> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Projective) -> G1Projective {
        &self * &rhs
    }
}

#[inline(always)]
fn mul_by_3b(a: Fp) -> Fp {
    let a = a + a; // 2
    let a = a + a; // 4
    a + a + a // 12
}

impl G1Projective {
    /// The point at infinity.
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
        }
    }

    /// The fixed generator of the prime-order subgroup.
    pub fn generator() -> G1Projective {
        G1Projective {
            x: G1Affine::generator().x,
            y: G1Affine::generator().y,
            z: Fp::one(),
        }
    }

    /// Samples a uniformly random subgroup point by rejection over x
    /// coordinates, clearing the cofactor of the found curve point.
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let x = Fp::random(&mut rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let p = ((x.square() * x) + B).sqrt().map(|y| G1Affine {
                x,
                y: if flip_sign { -y } else { y },
                infinity: 0.into(),
            });

            if p.is_some().into() {
                let p = G1Projective::from(p.unwrap()).clear_cofactor();

                if !bool::from(p.is_identity()) {
                    return p;
                }
            }
        }
    }

    /// Doubles this point.
    pub fn double(&self) -> G1Projective {
        // Algorithm 9 of eprint 2015/1060, complete for a = 0
        let t0 = self.y.square();
        let z3 = t0 + t0;
        let z3 = z3 + z3;
        let z3 = z3 + z3;
        let t1 = self.y * self.z;
        let t2 = self.z.square();
        let t2 = mul_by_3b(t2);
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = t0 * t1;
        let x3 = x3 + x3;

        let tmp = G1Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        // The formula maps the identity to (0 : 0 : 0)
        G1Projective::conditional_select(&tmp, &G1Projective::identity(), self.is_identity())
    }

    /// Adds another point to this one.
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
        // Algorithm 7 of eprint 2015/1060, complete on the whole group
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = self.x + self.y;
        let t4 = rhs.x + rhs.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.y + self.z;
        let x3 = rhs.y + rhs.z;
        let t4 = t4 * x3;
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = self.x + self.z;
        let y3 = rhs.x + rhs.z;
        let x3 = x3 * y3;
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(t2);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        G1Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Adds an affine point to this one.
    pub fn add_mixed(&self, rhs: &G1Affine) -> G1Projective {
        // Algorithm 8 of eprint 2015/1060, specialised for z2 = 1
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = rhs.x + rhs.y;
        let t4 = self.x + self.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z;
        let t4 = t4 + self.y;
        let y3 = rhs.x * self.z;
        let y3 = y3 + self.x;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(self.z);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = G1Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        // The z2 = 1 assumption breaks for the affine identity
        G1Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Multiplies by a scalar given as its canonical little-endian
    /// encoding, one conditional addition per bit.
    pub fn multiply(&self, by: &[u8; 32]) -> G1Projective {
        let mut acc = G1Projective::identity();

        for &byte in by.iter().rev() {
            for i in (0..8).rev() {
                acc = acc.double();
                let bit = Choice::from((byte >> i) & 1u8);
                acc = G1Projective::conditional_select(&acc, &(acc + self), bit);
            }
        }

        acc
    }

    /// Multiplies by the curve parameter x, exploiting its low Hamming
    /// weight. Variable time, but x is a fixed public constant.
    pub(crate) fn mul_by_x(&self) -> G1Projective {
        let mut xself = G1Projective::identity();

        // The low bit of x is zero
        let mut x = BLS_X >> 1;
        let mut tmp = *self;
        while x != 0 {
            tmp = tmp.double();

            if x % 2 == 1 {
                xself += tmp;
            }
            x >>= 1;
        }
        if BLS_X_IS_NEGATIVE {
            xself = -xself;
        }
        xself
    }

    /// Maps this curve point into the prime-order subgroup by multiplying
    /// with the cofactor, via the effective endomorphism `P - [x]P`.
    pub fn clear_cofactor(&self) -> G1Projective {
        self - &self.mul_by_x()
    }

    /// Converts a slice of projective points to affine form with a single
    /// field inversion (Montgomery's trick).
    ///
    /// Panics if the slices have different lengths.
    pub fn batch_normalize(p: &[Self], q: &mut [G1Affine]) {
        assert_eq!(p.len(), q.len());

        let mut acc = Fp::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            // Stash the prefix product in q.x, skipping identities so the
            // running product stays invertible
            q.x = acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // acc is a product of nonzero z values, hence nonzero
        acc = acc.invert().unwrap();

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();

            // tmp is now 1/z for this point
            let tmp = q.x * acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, skip);

            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);

            *q = G1Affine::conditional_select(q, &G1Affine::identity(), skip);
        }
    }

    /// Returns whether this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns whether this point satisfies the homogeneous curve equation
    /// `y^2 z = x^3 + 4 z^3`.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z).ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * B))
            | self.z.is_zero()
    }
}
