#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Key sizes
//!
//! Every key structure is generic over a [`KeySize`]:
//!
//! | Key size    | Public key          | Private key          | CRT key          |
//! |-------------|---------------------|----------------------|------------------|
//! | [`Rsa1024`] | [`Rsa1024PublicKey`]| [`Rsa1024PrivateKey`]| [`Rsa1024CrtKey`]|
//! | [`Rsa2048`] | [`Rsa2048PublicKey`]| [`Rsa2048PrivateKey`]| [`Rsa2048CrtKey`]|
//!
//! Moduli and private exponents are stored as [`KeySize::Full`] integers
//! (32 words for 1024-bit keys), primes, CRT exponents and the CRT
//! coefficient as [`KeySize::Half`] integers (16 words).
//!
//! # Width rules
//!
//! | Component                    | Rule                        |
//! |------------------------------|-----------------------------|
//! | modulus `n`                  | exactly `BITS` bits         |
//! | private exponent `d`         | at most `BITS` bits         |
//! | primes `p`, `q`              | exactly `BITS / 2` bits     |
//! | `dp`, `dq`, `qinv`           | at most `BITS / 2` bits     |
//!
//! Leading zero bytes are accepted as long as the whole buffer is no longer
//! than the component's byte size. Empty buffers are always rejected.

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;

pub mod errors;
pub mod traits;
pub mod uint;

mod encoding;
mod key;

#[cfg(test)]
mod test_vectors;

pub use pkcs1;

pub use crate::{
    errors::{Component, Error, LengthError, Result},
    key::{
        init_crt_secret_key, init_public_key, init_secret_key, RsaCrtKey, RsaPrivateKey,
        RsaPublicKey,
    },
    traits::{CrtKeyParts, KeySize, PrivateKeyParts, PublicKeyParts, Rsa1024, Rsa2048},
    uint::{Uint, Width},
};

/// The public exponent shared by every key, `2^16 + 1`.
///
/// It is never passed in and never stored.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// 1024-bit RSA public key.
pub type Rsa1024PublicKey = RsaPublicKey<Rsa1024>;
/// 1024-bit RSA private key.
pub type Rsa1024PrivateKey = RsaPrivateKey<Rsa1024>;
/// 1024-bit RSA private key in CRT form.
pub type Rsa1024CrtKey = RsaCrtKey<Rsa1024>;

/// 2048-bit RSA public key.
pub type Rsa2048PublicKey = RsaPublicKey<Rsa2048>;
/// 2048-bit RSA private key.
pub type Rsa2048PrivateKey = RsaPrivateKey<Rsa2048>;
/// 2048-bit RSA private key in CRT form.
pub type Rsa2048CrtKey = RsaCrtKey<Rsa2048>;
