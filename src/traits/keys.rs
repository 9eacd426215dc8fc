//! Traits related to the key components

use super::KeySize;
use crate::PUBLIC_EXPONENT;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Key size of the key.
    type Size: KeySize;

    /// Returns the modulus of the key.
    fn n(&self) -> &<Self::Size as KeySize>::Full;

    /// Returns the public exponent of the key, always [`PUBLIC_EXPONENT`].
    fn e(&self) -> u32 {
        PUBLIC_EXPONENT
    }

    /// Returns the modulus size in bytes. Raw signatures and ciphertexts for
    /// or by this public key will have the same size.
    fn size(&self) -> usize {
        <Self::Size as KeySize>::BYTES
    }
}

/// Components of an RSA private key.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent of the key.
    fn d(&self) -> &<Self::Size as KeySize>::Full;
}

/// Components of an RSA private key in Chinese Remainder Theorem form.
pub trait CrtKeyParts {
    /// Key size of the key.
    type Size: KeySize;

    /// Returns the first prime factor.
    fn p(&self) -> &<Self::Size as KeySize>::Half;

    /// Returns the second prime factor.
    fn q(&self) -> &<Self::Size as KeySize>::Half;

    /// Returns the first CRT exponent, D mod (P-1)
    fn dp(&self) -> &<Self::Size as KeySize>::Half;

    /// Returns the second CRT exponent, D mod (Q-1)
    fn dq(&self) -> &<Self::Size as KeySize>::Half;

    /// Returns the CRT coefficient, Q^-1 mod P
    fn qinv(&self) -> &<Self::Size as KeySize>::Half;
}
