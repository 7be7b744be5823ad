//! Hashing to scalars for OPRF-style protocols.
//!
//! <https://www.rfc-editor.org/rfc/rfc9497.html#name-ciphersuites>

use crate::{
    CurveParams, Error, ExpandMsgXmd, Field, FieldElement, MessageExpansion, Result, Suite,
};
use bigint::Uint;

/// Hashes arbitrary input to an integer modulo the group order.
pub trait HashToScalar {
    /// Scalar type.
    type Scalar;

    /// Returns a scalar in `[0, n)` derived from `input` under `dst`.
    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Self::Scalar>;
}

/// `HashToScalar` expanding to `L = ceil((bits(n - 1) + k) / 8)` bytes and
/// reducing modulo `n`.
#[derive(Clone, Copy, Debug)]
pub struct OprfHashToScalar<E, const LIMBS: usize> {
    order: Field<LIMBS>,
    expander: E,
    l: usize,
}

impl<E, const LIMBS: usize> OprfHashToScalar<E, LIMBS>
where
    E: MessageExpansion,
{
    /// Hash to scalars of `curve` at security level `k` bits.
    pub fn new(curve: &CurveParams<LIMBS>, expander: E, k: usize) -> Result<Self> {
        let order = curve.scalar_field()?;
        let bits = curve.n.wrapping_sub(&Uint::ONE).bits_vartime();

        Ok(Self {
            order,
            expander,
            l: (bits + k).div_ceil(8),
        })
    }

    /// Scalar field modulo `n`.
    pub fn order(&self) -> &Field<LIMBS> {
        &self.order
    }

    /// Number of uniform bytes drawn per scalar.
    pub fn len_in_bytes(&self) -> usize {
        self.l
    }
}

impl<const LIMBS: usize> OprfHashToScalar<ExpandMsgXmd, LIMBS> {
    /// Hash to scalars with the digest and security level of `suite`.
    ///
    /// Fails with [`Error::UnknownSuite`] if `suite` does not target `curve`.
    pub fn from_suite(suite: &Suite, curve: &CurveParams<LIMBS>) -> Result<Self> {
        if suite.curve != curve.name {
            return Err(Error::UnknownSuite);
        }

        Self::new(curve, ExpandMsgXmd::new(suite.hash, suite.k)?, suite.k)
    }
}

impl<E, const LIMBS: usize> HashToScalar for OprfHashToScalar<E, LIMBS>
where
    E: MessageExpansion,
{
    type Scalar = FieldElement<LIMBS>;

    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<FieldElement<LIMBS>> {
        let uniform_bytes = self.expander.expand_message(input, dst, self.l)?;
        Ok(self.order.reduce_bytes(&uniform_bytes))
    }
}
