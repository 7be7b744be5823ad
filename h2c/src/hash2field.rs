//! Traits for hashing to field elements.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html>

mod expand_msg;

pub use expand_msg::*;

use crate::{Error, Field, FieldElement, Result};
use alloc::vec::Vec;

/// Number of field elements produced per message by the random-oracle encoding.
pub const RO_COUNT: usize = 2;

/// Hashes a message to one or more elements of a field.
pub trait HashToField {
    /// Element type of the target field.
    type Element;

    /// Returns `count` elements of `GF(p^m)`, each given as its `m` prime
    /// field coordinates.
    fn process(&self, message: &[u8]) -> Result<Vec<Vec<Self::Element>>>;
}

/// Convert an arbitrary byte sequence into `count` field elements.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-hash_to_field-implementatio>
///
/// `len_in_bytes = count * m * l`
///
/// # Errors
/// - `l == 0`
/// - `count * m * l` overflows `usize`
/// - See [`MessageExpansion::expand_message`] for additional errors.
pub fn hash_to_field<E, const LIMBS: usize>(
    expander: &E,
    message: &[u8],
    dst: &[u8],
    field: &Field<LIMBS>,
    count: usize,
    l: usize,
) -> Result<Vec<Vec<FieldElement<LIMBS>>>>
where
    E: MessageExpansion + ?Sized,
{
    if l == 0 {
        return Err(Error::InvalidExpansionParameters);
    }

    let m = field.degree();
    let len_in_bytes = count
        .checked_mul(m)
        .and_then(|len| len.checked_mul(l))
        .ok_or(Error::InvalidExpansionParameters)?;
    let uniform_bytes = expander.expand_message(message, dst, len_in_bytes)?;

    Ok(uniform_bytes
        .chunks_exact(m * l)
        .take(count)
        .map(|element| {
            element
                .chunks_exact(l)
                .map(|tv| field.reduce_bytes(tv))
                .collect()
        })
        .collect())
}

/// [`HashToField`] over a [`Field`] with a configurable expander.
#[derive(Clone, Debug)]
pub struct GenericHashToField<E, const LIMBS: usize> {
    dst: Vec<u8>,
    field: Field<LIMBS>,
    expander: E,
    l: usize,
    count: usize,
}

impl<E, const LIMBS: usize> GenericHashToField<E, LIMBS>
where
    E: MessageExpansion,
{
    /// Random-oracle encoding producing two elements per message.
    pub fn new(dst: &[u8], field: Field<LIMBS>, expander: E, l: usize) -> Self {
        Self::with_count(dst, field, expander, l, RO_COUNT)
    }

    /// Produce `count` elements per message.
    pub fn with_count(
        dst: &[u8],
        field: Field<LIMBS>,
        expander: E,
        l: usize,
        count: usize,
    ) -> Self {
        Self {
            dst: dst.to_vec(),
            field,
            expander,
            l,
            count,
        }
    }

    /// Target field.
    pub fn field(&self) -> &Field<LIMBS> {
        &self.field
    }
}

impl<E, const LIMBS: usize> HashToField for GenericHashToField<E, LIMBS>
where
    E: MessageExpansion,
{
    type Element = FieldElement<LIMBS>;

    fn process(&self, message: &[u8]) -> Result<Vec<Vec<FieldElement<LIMBS>>>> {
        hash_to_field(
            &self.expander,
            message,
            &self.dst,
            &self.field,
            self.count,
            self.l,
        )
    }
}
