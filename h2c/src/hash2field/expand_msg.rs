//! `expand_message` interface for `hash_to_field`.

mod xmd;

pub use xmd::ExpandMsgXmd;

use crate::{Error, Result};
use alloc::vec::Vec;
use core::{fmt, str::FromStr};
use digest::Digest;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

/// Salt when the DST is too long
pub(crate) const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";
/// Maximum domain separation tag length
pub(crate) const MAX_DST_LEN: usize = 255;

/// Expands a message into a uniformly random byte string.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message>
pub trait MessageExpansion {
    /// Produces exactly `len_in_bytes` bytes derived from `msg` under the
    /// domain separation tag `dst`.
    ///
    /// # Errors
    /// See implementors for errors.
    fn expand_message(&self, msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>>;
}

/// Fixed-output digest functions usable with [`ExpandMsgXmd`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

impl DigestAlgorithm {
    /// Every supported digest.
    pub const ALL: [Self; 7] = [
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Algorithm name, e.g. `SHA-256` or `SHA3-512`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }

    /// Look up a digest by name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|digest| digest.name() == name)
            .ok_or(Error::UnsupportedDigest)
    }

    /// Digest output length in bytes (`b_in_bytes`).
    pub fn output_size(self) -> usize {
        match self {
            Self::Sha256 => <Sha256 as Digest>::output_size(),
            Self::Sha384 => <Sha384 as Digest>::output_size(),
            Self::Sha512 => <Sha512 as Digest>::output_size(),
            Self::Sha3_224 => <Sha3_224 as Digest>::output_size(),
            Self::Sha3_256 => <Sha3_256 as Digest>::output_size(),
            Self::Sha3_384 => <Sha3_384 as Digest>::output_size(),
            Self::Sha3_512 => <Sha3_512 as Digest>::output_size(),
        }
    }

    /// Input block size in bits (`s_in_bytes * 8`), i.e. the rate for SHA-3.
    pub const fn block_size_bits(self) -> usize {
        match self {
            Self::Sha256 => 512,
            Self::Sha384 | Self::Sha512 => 1024,
            Self::Sha3_224 => 1152,
            Self::Sha3_256 => 1088,
            Self::Sha3_384 => 832,
            Self::Sha3_512 => 576,
        }
    }

    /// Hash the concatenation of `parts`.
    pub fn hash(self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::Sha256 => hash_parts::<Sha256>(parts),
            Self::Sha384 => hash_parts::<Sha384>(parts),
            Self::Sha512 => hash_parts::<Sha512>(parts),
            Self::Sha3_224 => hash_parts::<Sha3_224>(parts),
            Self::Sha3_256 => hash_parts::<Sha3_256>(parts),
            Self::Sha3_384 => hash_parts::<Sha3_384>(parts),
            Self::Sha3_512 => hash_parts::<Sha3_512>(parts),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

fn hash_parts<H: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hash = H::new();
    for part in parts {
        Digest::update(&mut hash, part);
    }
    hash.finalize().to_vec()
}
