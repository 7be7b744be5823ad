#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ct;
mod error;
mod field;
mod group;
mod group_digest;
mod hash2field;
mod map2curve;
mod oprf;
mod parameters;
mod sqrt_ratio;

pub use crate::{
    error::{Error, Result},
    field::{Field, FieldElement},
    group::*,
    group_digest::*,
    hash2field::*,
    map2curve::*,
    oprf::*,
    parameters::*,
    sqrt_ratio::*,
};
pub use bigint;
pub use digest;
pub use subtle;

#[cfg(feature = "arithmetic")]
pub use elliptic_curve;
