//! Fixed-width integer/byte conversions shared by every serializer.
//!
//! All of the 48-, 96- and 32-byte encodings in this crate are assembled
//! from whole 64-bit limbs; these helpers are the single place where limb
//! endianness is decided. They are public so higher layers encoding raw
//! limbs can reuse them.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Read a `u64` from the first 8 bytes of `bytes`, big-endian.
///
/// Panics if `bytes` is shorter than 8 bytes; callers pass windows of
/// fixed-size arrays.
#[inline(always)]
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

/// Write `value` into the first 8 bytes of `out`, big-endian.
#[inline(always)]
pub fn u64_to_be_bytes(value: u64, out: &mut [u8]) {
    BigEndian::write_u64(out, value)
}

/// Read a `u64` from the first 8 bytes of `bytes`, little-endian.
#[inline(always)]
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    LittleEndian::read_u64(bytes)
}

/// Write `value` into the first 8 bytes of `out`, little-endian.
#[inline(always)]
pub fn u64_to_le_bytes(value: u64, out: &mut [u8]) {
    LittleEndian::write_u64(out, value)
}
