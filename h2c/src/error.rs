//! Error types.

use core::fmt;

/// Result type with the `h2c` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// `expand_message` was asked for more than 255 digest blocks, more than
    /// 65535 bytes, or was given a domain separation tag longer than 255 bytes.
    InvalidExpansionParameters,

    /// The digest output is shorter than `ceil(2 * k / 8)` bytes.
    InsufficientSecurityMargin,

    /// The digest algorithm is not one of the supported SHA-2/SHA-3 variants.
    UnsupportedDigest,

    /// The value does not fit in the requested number of bytes.
    EncodingTooLarge,

    /// Operands of a bytewise operation differ in length.
    LengthMismatch,

    /// The operation is only defined over prime fields (extension degree 1).
    UnsupportedField,

    /// No quadratic non-residue was found below the search limit.
    NoNonSquareFound,

    /// The modulus is even or too small to define a usable prime field.
    InvalidModulus,

    /// No suite is registered under the requested identifier.
    UnknownSuite,

    /// The map constant `Z` does not satisfy the simplified SWU criteria.
    InvalidZ,

    /// Coordinates could not be turned into a point of the target group.
    InvalidPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidExpansionParameters => "invalid message expansion parameters",
            Error::InsufficientSecurityMargin => {
                "digest output too short for the requested security level"
            }
            Error::UnsupportedDigest => "unsupported digest algorithm",
            Error::EncodingTooLarge => "integer too large for the requested encoding length",
            Error::LengthMismatch => "operand lengths differ",
            Error::UnsupportedField => "operation only supported over prime fields",
            Error::NoNonSquareFound => "no quadratic non-residue found",
            Error::InvalidModulus => "invalid field modulus",
            Error::UnknownSuite => "unknown hash-to-curve suite",
            Error::InvalidZ => "invalid simplified SWU constant Z",
            Error::InvalidPoint => "coordinates do not describe a curve point",
        })
    }
}

impl core::error::Error for Error {}
