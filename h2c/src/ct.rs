//! Constant-time helpers shared by the hash-to-curve stages.

use crate::{Error, Field, FieldElement, Result};
use alloc::{vec, vec::Vec};
use bigint::Uint;
use subtle::{Choice, ConditionallySelectable};

/// Returns `b` when `condition` is set and `a` otherwise, without branching.
#[inline]
pub fn select<T: ConditionallySelectable>(a: &T, b: &T, condition: Choice) -> T {
    T::conditional_select(a, b, condition)
}

/// Integer-to-octet-string primitive: big-endian encoding of `value` in
/// exactly `len` bytes.
pub fn i2osp<const LIMBS: usize>(value: &Uint<LIMBS>, len: usize) -> Result<Vec<u8>> {
    let mut bytes = be_bytes(value);
    if len >= bytes.len() {
        let mut out = vec![0u8; len - bytes.len()];
        out.append(&mut bytes);
        return Ok(out);
    }

    let tail = bytes.split_off(bytes.len() - len);
    let overflow = bytes.iter().fold(0u8, |acc, byte| acc | byte);
    if overflow != 0 {
        return Err(Error::EncodingTooLarge);
    }
    Ok(tail)
}

/// Octet-string-to-integer primitive: interprets `bytes` as a big-endian
/// unsigned integer.
pub fn os2ip<const LIMBS: usize>(bytes: &[u8]) -> Result<Uint<LIMBS>> {
    let excess = bytes.len().saturating_sub(Uint::<LIMBS>::BYTES);
    let (high, low) = bytes.split_at(excess);
    if high.iter().fold(0u8, |acc, byte| acc | byte) != 0 {
        return Err(Error::EncodingTooLarge);
    }
    Ok(uint_from_be_bytes(low))
}

/// Bytewise XOR of two equal-length strings.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch);
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Sign of a field element as defined for prime fields: its parity.
///
/// Extension fields (`m > 1`) are rejected with [`Error::UnsupportedField`].
pub fn sgn0<const LIMBS: usize>(
    value: &FieldElement<LIMBS>,
    field: &Field<LIMBS>,
) -> Result<Choice> {
    if field.degree() != 1 {
        return Err(Error::UnsupportedField);
    }
    Ok(value.is_odd())
}

/// Inversion with `inv0(0) == 0`.
#[inline]
pub fn inv0<const LIMBS: usize>(value: &FieldElement<LIMBS>) -> FieldElement<LIMBS> {
    value.invert()
}

/// Full-width big-endian encoding of `value`.
pub(crate) fn be_bytes<const LIMBS: usize>(value: &Uint<LIMBS>) -> Vec<u8> {
    value
        .as_words()
        .iter()
        .rev()
        .flat_map(|word| word.to_be_bytes())
        .collect()
}

/// Loads at most `Uint::<LIMBS>::BYTES` big-endian bytes, left-padding with zeros.
pub(crate) fn uint_from_be_bytes<const LIMBS: usize>(bytes: &[u8]) -> Uint<LIMBS> {
    debug_assert!(bytes.len() <= Uint::<LIMBS>::BYTES);
    let mut buf = vec![0u8; Uint::<LIMBS>::BYTES];
    let offset = buf.len() - bytes.len();
    buf[offset..].copy_from_slice(bytes);
    Uint::from_be_slice(&buf)
}
