use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::errors::{Component, Error, Result};
use crate::traits::{CrtKeyParts, FixedUint, KeySize, PrivateKeyParts, PublicKeyParts};
use crate::uint::Width;

#[cfg(feature = "serde")]
mod repr;

/// Represents the public part of an RSA key.
///
/// The modulus is exactly `S::BITS` long. The public exponent is always
/// [`PUBLIC_EXPONENT`](crate::PUBLIC_EXPONENT) and is not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsaPublicKey<S: KeySize> {
    n: S::Full,
}

/// Represents a whole RSA key, public and private parts, as `(n, d)`.
#[derive(Clone, Default)]
pub struct RsaPrivateKey<S: KeySize> {
    /// Modulus
    n: S::Full,
    /// Private exponent
    d: S::Full,
}

/// Represents an RSA private key in Chinese Remainder Theorem form.
///
/// The modulus is not stored; [`RsaCrtKey::to_public_key`] derives it from
/// `p` and `q`.
///
/// Only the lengths of the components are checked; whether `p * q` is the
/// modulus or `qinv` really inverts `q` is left to the arithmetic using
/// the key.
#[derive(Clone, Default)]
pub struct RsaCrtKey<S: KeySize> {
    p: S::Half,
    q: S::Half,
    /// D mod (P-1)
    dp: S::Half,
    /// D mod (Q-1)
    dq: S::Half,
    /// Q^-1 mod P
    qinv: S::Half,
}

impl<S: KeySize> RsaPublicKey<S> {
    /// Create a new public key from its big-endian modulus.
    ///
    /// The modulus must be exactly `S::BITS` bits long; leading zero bytes
    /// are only allowed within `S::BYTES` bytes, which a modulus of the
    /// right length never needs.
    pub fn new(n: &[u8]) -> Result<Self> {
        let mut key = Self::default();
        set_component(&mut key.n, n, Width::Exact(S::BITS), Component::Modulus)?;
        Ok(key)
    }
}

impl<S: KeySize> PublicKeyParts for RsaPublicKey<S> {
    type Size = S;

    fn n(&self) -> &S::Full {
        &self.n
    }
}

impl<S: KeySize> From<&RsaPrivateKey<S>> for RsaPublicKey<S> {
    fn from(private_key: &RsaPrivateKey<S>) -> Self {
        RsaPublicKey {
            n: private_key.n.clone(),
        }
    }
}

impl<S: KeySize> RsaPrivateKey<S> {
    /// Constructs an RSA key pair from its big-endian modulus `n` and
    /// private exponent `d`.
    ///
    /// `n` must be exactly `S::BITS` bits long and `d` at most `S::BITS`.
    pub fn new(n: &[u8], d: &[u8]) -> Result<Self> {
        let mut key = Self::default();
        set_component(&mut key.n, n, Width::Exact(S::BITS), Component::Modulus)?;
        set_component(
            &mut key.d,
            d,
            Width::AtMost(S::BITS),
            Component::PrivateExponent,
        )?;
        Ok(key)
    }

    /// Get the public key from the private key, cloning `n`.
    pub fn to_public_key(&self) -> RsaPublicKey<S> {
        RsaPublicKey::from(self)
    }
}

impl<S: KeySize> PublicKeyParts for RsaPrivateKey<S> {
    type Size = S;

    fn n(&self) -> &S::Full {
        &self.n
    }
}

impl<S: KeySize> PrivateKeyParts for RsaPrivateKey<S> {
    fn d(&self) -> &S::Full {
        &self.d
    }
}

impl<S: KeySize> ConstantTimeEq for RsaPrivateKey<S> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.n.ct_eq(&other.n) & self.d.ct_eq(&other.d)
    }
}

impl<S: KeySize> PartialEq for RsaPrivateKey<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<S: KeySize> Eq for RsaPrivateKey<S> {}

impl<S: KeySize> fmt::Debug for RsaPrivateKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl<S: KeySize> Zeroize for RsaPrivateKey<S> {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl<S: KeySize> Drop for RsaPrivateKey<S> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<S: KeySize> ZeroizeOnDrop for RsaPrivateKey<S> {}

impl<S: KeySize> RsaCrtKey<S> {
    /// Constructs a CRT private key from its big-endian components.
    ///
    /// `p` and `q` must be exactly `S::HALF_BITS` bits long, `dp`, `dq`
    /// and `qinv` at most `S::HALF_BITS`. Components are checked in
    /// argument order and the first failure is reported.
    pub fn new(p: &[u8], q: &[u8], dp: &[u8], dq: &[u8], qinv: &[u8]) -> Result<Self> {
        let prime = Width::Exact(S::HALF_BITS);
        let bounded = Width::AtMost(S::HALF_BITS);

        // A partially filled key is zeroized on drop if a later component fails.
        let mut key = Self::default();
        set_component(&mut key.p, p, prime, Component::Prime1)?;
        set_component(&mut key.q, q, prime, Component::Prime2)?;
        set_component(&mut key.dp, dp, bounded, Component::Exponent1)?;
        set_component(&mut key.dq, dq, bounded, Component::Exponent2)?;
        set_component(&mut key.qinv, qinv, bounded, Component::Coefficient)?;
        Ok(key)
    }

    /// Computes the public key `n = p * q`.
    ///
    /// Fails with [`Component::Modulus`] if the product is not exactly
    /// `S::BITS` long, which happens when the top bits of the primes are
    /// too small.
    pub fn to_public_key(&self) -> Result<RsaPublicKey<S>> {
        let p = Zeroizing::new(self.p.to_biguint());
        let q = Zeroizing::new(self.q.to_biguint());
        let n = &*p * &*q;
        RsaPublicKey::new(&n.to_bytes_be())
    }
}

impl<S: KeySize> CrtKeyParts for RsaCrtKey<S> {
    type Size = S;

    fn p(&self) -> &S::Half {
        &self.p
    }

    fn q(&self) -> &S::Half {
        &self.q
    }

    fn dp(&self) -> &S::Half {
        &self.dp
    }

    fn dq(&self) -> &S::Half {
        &self.dq
    }

    fn qinv(&self) -> &S::Half {
        &self.qinv
    }
}

impl<S: KeySize> ConstantTimeEq for RsaCrtKey<S> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.p.ct_eq(&other.p)
            & self.q.ct_eq(&other.q)
            & self.dp.ct_eq(&other.dp)
            & self.dq.ct_eq(&other.dq)
            & self.qinv.ct_eq(&other.qinv)
    }
}

impl<S: KeySize> PartialEq for RsaCrtKey<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<S: KeySize> Eq for RsaCrtKey<S> {}

impl<S: KeySize> fmt::Debug for RsaCrtKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaCrtKey").finish_non_exhaustive()
    }
}

impl<S: KeySize> Zeroize for RsaCrtKey<S> {
    fn zeroize(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

impl<S: KeySize> Drop for RsaCrtKey<S> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<S: KeySize> ZeroizeOnDrop for RsaCrtKey<S> {}

/// Initialises a public key in place from its big-endian modulus.
///
/// `key` is only written if the modulus is accepted. Calling it again on an
/// initialised key replaces the key.
pub fn init_public_key<S: KeySize>(key: &mut RsaPublicKey<S>, n: &[u8]) -> Result<()> {
    *key = RsaPublicKey::new(n)?;
    Ok(())
}

/// Initialises a private key in place from its big-endian modulus and
/// private exponent.
///
/// `key` is only written if both components are accepted.
pub fn init_secret_key<S: KeySize>(key: &mut RsaPrivateKey<S>, n: &[u8], d: &[u8]) -> Result<()> {
    *key = RsaPrivateKey::new(n, d)?;
    Ok(())
}

/// Initialises a CRT private key in place from its big-endian components.
///
/// `key` is only written if all five components are accepted.
pub fn init_crt_secret_key<S: KeySize>(
    key: &mut RsaCrtKey<S>,
    p: &[u8],
    q: &[u8],
    dp: &[u8],
    dq: &[u8],
    qinv: &[u8],
) -> Result<()> {
    *key = RsaCrtKey::new(p, q, dp, dq, qinv)?;
    Ok(())
}

fn set_component<U: FixedUint>(
    target: &mut U,
    bytes: &[u8],
    width: Width,
    component: Component,
) -> Result<()> {
    target
        .set_from_be_slice(bytes, width)
        .map_err(Error::length(component))
}
