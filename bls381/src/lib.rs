#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! let params = bls381::bls12_381().expect("BLS12-381 parameters are valid");
//! assert_eq!(params.modulus().bits(), 381);
//! assert_eq!(params.embedding_degree(), 12);
//! # }
//! ```

mod arithmetic;
mod derive;
mod encoding;
mod error;
mod hash;
mod params;
mod tags;
mod validate;

pub use crate::{
    arithmetic::Fp2,
    derive::{BLS12_381_X, CurveFamilySeed, DerivedParameters, derive},
    encoding::{ENCODED_LEN, EncodedParameters},
    error::{Error, FormatError, InvalidCurveError, Result},
    params::{CurveParameters, LiteralConstants, build},
    tags::{CurveType, HashAlgorithm, PairingFamily, SexticTwist, SignOfX},
    validate::validate,
};
pub use bigint::{self, U384};
pub use num_bigint;

use bigint::Encoding;
use num_bigint::BigUint;

#[cfg(feature = "std")]
use once_cell::sync::Lazy;

/// Elliptic curve field size in bytes.
pub const EFS: usize = 48;

/// Byte representation of a base field element.
pub type FieldBytes = [u8; EFS];

/// Validated BLS12-381 parameters, shared for the lifetime of the process.
///
/// Derivation and validation run at most once, successful or not; later calls
/// return the cached outcome.
///
/// # Errors
///
/// Only if the built-in constants fail validation, in which case every call
/// returns the same error and no caller can obtain a parameter set.
#[cfg(feature = "std")]
pub fn bls12_381() -> Result<&'static CurveParameters> {
    static PARAMS: Lazy<Result<CurveParameters>> = Lazy::new(CurveParameters::bls12_381);
    PARAMS.as_ref().map_err(|err| *err)
}

fn uint_to_biguint(uint: &U384) -> BigUint {
    BigUint::from_bytes_be(&uint.to_be_bytes())
}

/// Encode `n mod 2³⁸⁴` as a fixed-width integer.
///
/// Every integer held by a [`CurveParameters`] is below `2³⁸⁴`.
fn biguint_to_uint(n: &BigUint) -> U384 {
    let bytes = n.to_bytes_be();
    let len = bytes.len().min(EFS);
    let mut buf = [0u8; EFS];
    buf[EFS - len..].copy_from_slice(&bytes[bytes.len() - len..]);
    U384::from_be_bytes(buf)
}
