//! `expand_message_xmd` based on a hash function.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd>

use super::{DigestAlgorithm, MAX_DST_LEN, MessageExpansion, OVERSIZE_DST_SALT};
use crate::{Error, Result, ct};
use alloc::{vec, vec::Vec};

/// Largest number of digest blocks `expand_message_xmd` may produce.
const MAX_ELL: usize = 255;
/// Largest output length, bounded by its two-byte encoding.
const MAX_LEN_IN_BYTES: usize = 65535;

/// Implements `expand_message_xmd` for any of the [`DigestAlgorithm`]s.
///
/// # Errors
/// - `dst.len() > 255`
/// - `len_in_bytes > 65535`
/// - `ceil(len_in_bytes / b_in_bytes) > 255`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExpandMsgXmd {
    digest: DigestAlgorithm,
}

impl ExpandMsgXmd {
    /// Expander over `digest` for a target security level of `k` bits.
    ///
    /// Fails with [`Error::InsufficientSecurityMargin`] when the digest output
    /// is shorter than `2 * k` bits.
    pub fn new(digest: DigestAlgorithm, k: usize) -> Result<Self> {
        if digest.output_size() < (2 * k).div_ceil(8) {
            return Err(Error::InsufficientSecurityMargin);
        }
        Ok(Self { digest })
    }

    /// Expander over the digest called `name`, e.g. `SHA-384`.
    pub fn from_name(name: &str, k: usize) -> Result<Self> {
        Self::new(DigestAlgorithm::from_name(name)?, k)
    }

    /// Underlying digest.
    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// Derives a short tag from a domain separation tag longer than 255 bytes:
    /// `H("H2C-OVERSIZE-DST-" || dst)`.
    ///
    /// <https://www.rfc-editor.org/rfc/rfc9380.html#name-using-dsts-longer-than-255->
    pub fn hash_oversize_dst(&self, dst: &[u8]) -> Vec<u8> {
        self.digest.hash(&[OVERSIZE_DST_SALT, dst])
    }
}

impl MessageExpansion for ExpandMsgXmd {
    fn expand_message(&self, msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
        let b_in_bytes = self.digest.output_size();
        let ell = len_in_bytes.div_ceil(b_in_bytes);
        if ell > MAX_ELL || len_in_bytes > MAX_LEN_IN_BYTES || dst.len() > MAX_DST_LEN {
            return Err(Error::InvalidExpansionParameters);
        }

        let l_i_b_str = u16::try_from(len_in_bytes)
            .map_err(|_| Error::InvalidExpansionParameters)?
            .to_be_bytes();
        let dst_len = [u8::try_from(dst.len()).map_err(|_| Error::InvalidExpansionParameters)?];
        let z_pad = vec![0u8; self.digest.block_size_bits() / 8];

        let b_0 = self.digest.hash(&[
            z_pad.as_slice(),
            msg,
            &l_i_b_str,
            &[0],
            dst,
            &dst_len,
        ]);
        let mut b_i = self.digest.hash(&[b_0.as_slice(), &[1], dst, &dst_len]);

        let mut uniform_bytes = Vec::with_capacity(ell * b_in_bytes);
        uniform_bytes.extend_from_slice(&b_i);
        for i in 2..=ell {
            let i = u8::try_from(i).map_err(|_| Error::InvalidExpansionParameters)?;
            let chained = ct::xor(&b_0, &b_i)?;
            b_i = self.digest.hash(&[chained.as_slice(), &[i], dst, &dst_len]);
            uniform_bytes.extend_from_slice(&b_i);
        }

        uniform_bytes.truncate(len_in_bytes);
        Ok(uniform_bytes)
    }
}
