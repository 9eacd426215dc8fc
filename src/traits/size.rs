//! Supported key sizes and the integer types backing them.

use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::sealed;
use crate::errors::LengthError;
use crate::uint::{Uint, Width};

/// Fixed-width integer usable as a key component.
///
/// Implemented for every [`Uint`]; lets the key structures be written once
/// for all [`KeySize`]s.
pub trait FixedUint:
    Clone + Default + Eq + fmt::Debug + fmt::LowerHex + ConstantTimeEq + Zeroize + sealed::Sealed
{
    /// Capacity in bits.
    const BITS: usize;

    /// Imports a big-endian buffer checked against `width` into `self`,
    /// leaving `self` untouched on error.
    fn set_from_be_slice(&mut self, bytes: &[u8], width: Width) -> Result<(), LengthError>;

    /// Big-endian encoding of the full width.
    fn to_be_bytes(&self) -> Vec<u8>;

    /// Converts into a [`BigUint`].
    fn to_biguint(&self) -> BigUint;
}

/// An RSA key size.
///
/// The size is fixed at compile time: keys of different sizes are distinct
/// types, and no import path branches on the size at runtime.
pub trait KeySize:
    Copy + Default + Eq + fmt::Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Size of the modulus in bits.
    const BITS: usize;

    /// Size of the modulus in bytes.
    const BYTES: usize = Self::BITS / 8;

    /// Size of each prime factor in bits.
    const HALF_BITS: usize = Self::BITS / 2;

    /// Integer holding the modulus and the private exponent.
    type Full: FixedUint;

    /// Integer holding the primes, the CRT exponents and the CRT coefficient.
    type Half: FixedUint;
}

/// 1024-bit RSA.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rsa1024;

impl sealed::Sealed for Rsa1024 {}

impl KeySize for Rsa1024 {
    const BITS: usize = 1024;
    type Full = Uint<32>;
    type Half = Uint<16>;
}

/// 2048-bit RSA.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rsa2048;

impl sealed::Sealed for Rsa2048 {}

impl KeySize for Rsa2048 {
    const BITS: usize = 2048;
    type Full = Uint<64>;
    type Half = Uint<32>;
}

const _: () = {
    assert!(<<Rsa1024 as KeySize>::Full as FixedUint>::BITS == <Rsa1024 as KeySize>::BITS);
    assert!(<<Rsa1024 as KeySize>::Half as FixedUint>::BITS == <Rsa1024 as KeySize>::HALF_BITS);
    assert!(<<Rsa2048 as KeySize>::Full as FixedUint>::BITS == <Rsa2048 as KeySize>::BITS);
    assert!(<<Rsa2048 as KeySize>::Half as FixedUint>::BITS == <Rsa2048 as KeySize>::HALF_BITS);
};
