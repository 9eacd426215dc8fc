//! PKCS#1 encoding support.
//!
//! Integers decoded from a document go through the same width rules as
//! components passed in directly.

use alloc::vec::Vec;
use pkcs1::der::{Decode, Encode};

use crate::{
    errors::{Error, Result},
    key::{RsaCrtKey, RsaPrivateKey, RsaPublicKey},
    traits::{FixedUint, KeySize, PublicKeyParts},
    PUBLIC_EXPONENT,
};

/// Verify that the public exponent of a document is the fixed one.
fn verify_public_exponent(e: &pkcs1::UintRef<'_>) -> Result<()> {
    let bytes = e.as_bytes();
    let value = (bytes.len() <= 4)
        .then(|| bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)));
    if value != Some(PUBLIC_EXPONENT) {
        return Err(Error::InvalidPublicExponent);
    }
    Ok(())
}

/// Multi-prime RSA keys are not supported.
fn verify_two_prime(pkcs1_key: &pkcs1::RsaPrivateKey<'_>) -> Result<()> {
    if pkcs1_key.version() != pkcs1::Version::TwoPrime {
        return Err(pkcs1::Error::Version.into());
    }
    Ok(())
}

impl<S: KeySize> TryFrom<pkcs1::RsaPublicKey<'_>> for RsaPublicKey<S> {
    type Error = Error;

    fn try_from(pkcs1_key: pkcs1::RsaPublicKey<'_>) -> Result<Self> {
        verify_public_exponent(&pkcs1_key.public_exponent)?;
        Self::new(pkcs1_key.modulus.as_bytes())
    }
}

impl<S: KeySize> TryFrom<pkcs1::RsaPrivateKey<'_>> for RsaPrivateKey<S> {
    type Error = Error;

    fn try_from(pkcs1_key: pkcs1::RsaPrivateKey<'_>) -> Result<Self> {
        verify_two_prime(&pkcs1_key)?;
        verify_public_exponent(&pkcs1_key.public_exponent)?;
        Self::new(
            pkcs1_key.modulus.as_bytes(),
            pkcs1_key.private_exponent.as_bytes(),
        )
    }
}

impl<S: KeySize> TryFrom<pkcs1::RsaPrivateKey<'_>> for RsaCrtKey<S> {
    type Error = Error;

    fn try_from(pkcs1_key: pkcs1::RsaPrivateKey<'_>) -> Result<Self> {
        verify_two_prime(&pkcs1_key)?;
        verify_public_exponent(&pkcs1_key.public_exponent)?;

        // The modulus is not kept, but it decides whether the document
        // holds a key of this size at all.
        RsaPublicKey::<S>::new(pkcs1_key.modulus.as_bytes())?;

        Self::new(
            pkcs1_key.prime1.as_bytes(),
            pkcs1_key.prime2.as_bytes(),
            pkcs1_key.exponent1.as_bytes(),
            pkcs1_key.exponent2.as_bytes(),
            pkcs1_key.coefficient.as_bytes(),
        )
    }
}

impl<S: KeySize> RsaPublicKey<S> {
    /// Decode a public key from a PKCS#1 `RSAPublicKey` DER document.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        Self::try_from(pkcs1::RsaPublicKey::from_der(der)?)
    }

    /// Encode the public key as a PKCS#1 `RSAPublicKey` DER document.
    pub fn to_pkcs1_der(&self) -> Result<Vec<u8>> {
        let modulus = self.n().to_be_bytes();
        let public_exponent = PUBLIC_EXPONENT.to_be_bytes();

        let der = pkcs1::RsaPublicKey {
            modulus: pkcs1::UintRef::new(&modulus)?,
            public_exponent: pkcs1::UintRef::new(&public_exponent)?,
        }
        .to_der()?;
        Ok(der)
    }
}

impl<S: KeySize> RsaPrivateKey<S> {
    /// Decode `(n, d)` from a PKCS#1 `RSAPrivateKey` DER document.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        Self::try_from(pkcs1::RsaPrivateKey::from_der(der)?)
    }
}

impl<S: KeySize> RsaCrtKey<S> {
    /// Decode the CRT components from a PKCS#1 `RSAPrivateKey` DER document.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        Self::try_from(pkcs1::RsaPrivateKey::from_der(der)?)
    }
}
