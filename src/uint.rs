//! Fixed-width unsigned integers holding RSA key components.
//!
//! Components arrive as big-endian byte strings and are stored as arrays of
//! [`Word`]s, least significant word first. The array length is a const
//! generic, so every key size gets its own statically sized type and no
//! component ever allocates.

use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::errors::LengthError;
use crate::traits::{sealed, FixedUint};

/// Machine word the integers are stored in.
pub type Word = u32;

/// Size of a [`Word`] in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

const WORD_BYTES: usize = WORD_BITS / 8;

/// Bit-length rule a component has to satisfy to be imported.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Width {
    /// The most significant set bit must be bit `bits - 1`. Used for moduli
    /// and primes.
    Exact(usize),
    /// The value must fit into `bits` bits. Used for exponents and the CRT
    /// coefficient; zero is accepted.
    AtMost(usize),
}

impl Width {
    /// Number of bits the rule refers to.
    pub const fn bits(self) -> usize {
        match self {
            Width::Exact(bits) | Width::AtMost(bits) => bits,
        }
    }

    /// Longest big-endian encoding accepted, leading zero bytes included.
    pub const fn max_bytes(self) -> usize {
        self.bits().div_ceil(8)
    }

    fn admits(self, bits: usize) -> bool {
        match self {
            Width::Exact(expected) => bits == expected,
            Width::AtMost(bound) => bits <= bound,
        }
    }

    /// Checks a big-endian buffer against this rule.
    ///
    /// An empty buffer, or one longer than [`Width::max_bytes`], is rejected
    /// no matter what it contains.
    pub fn check(self, bytes: &[u8]) -> Result<(), LengthError> {
        let bits = be_bit_length(bytes);
        if bytes.is_empty() || bytes.len() > self.max_bytes() || !self.admits(bits) {
            return Err(LengthError {
                width: self,
                len: bytes.len(),
                bits,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Exact(bits) => write!(f, "exactly {} bits", bits),
            Width::AtMost(bits) => write!(f, "at most {} bits", bits),
        }
    }
}

/// Position of the most significant set bit of a big-endian integer, 0 for zero.
pub(crate) fn be_bit_length(bytes: &[u8]) -> usize {
    match bytes.iter().position(|&b| b != 0) {
        Some(i) => (bytes.len() - i) * 8 - bytes[i].leading_zeros() as usize,
        None => 0,
    }
}

/// Unsigned integer of exactly `WORDS` words.
#[derive(Clone, Eq)]
pub struct Uint<const WORDS: usize> {
    words: [Word; WORDS],
}

impl<const WORDS: usize> Uint<WORDS> {
    /// Capacity in bits.
    pub const BITS: usize = WORDS * WORD_BITS;

    /// Capacity in bytes.
    pub const BYTES: usize = WORDS * WORD_BYTES;

    /// The zero value, also the state of an uninitialised key component.
    pub const ZERO: Self = Self { words: [0; WORDS] };

    /// Creates an integer from its words, least significant first.
    pub const fn from_words(words: [Word; WORDS]) -> Self {
        Self { words }
    }

    /// Returns the words, least significant first.
    pub const fn as_words(&self) -> &[Word; WORDS] {
        &self.words
    }

    /// Imports a big-endian buffer checked against `width`.
    pub fn from_be_slice(bytes: &[u8], width: Width) -> Result<Self, LengthError> {
        let mut ret = Self::ZERO;
        ret.set_from_be_slice(bytes, width)?;
        Ok(ret)
    }

    /// Imports a big-endian buffer checked against `width` into `self`.
    ///
    /// `self` is only written once the buffer has been accepted.
    pub fn set_from_be_slice(&mut self, bytes: &[u8], width: Width) -> Result<(), LengthError> {
        width.check(bytes)?;
        if bytes.len() > Self::BYTES {
            return Err(LengthError {
                width,
                len: bytes.len(),
                bits: be_bit_length(bytes),
            });
        }

        self.words = [0; WORDS];
        for (i, byte) in bytes.iter().rev().enumerate() {
            self.words[i / WORD_BYTES] |= Word::from(*byte) << (8 * (i % WORD_BYTES));
        }
        Ok(())
    }

    /// Big-endian encoding, always [`Self::BYTES`] long.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        self.fill_be_bytes(&mut out);
        out
    }

    /// Writes the big-endian encoding into `out`, left-padded with zeros.
    ///
    /// `out` may be shorter than [`Self::BYTES`] as long as the value fits.
    pub fn write_be_bytes(&self, out: &mut [u8]) -> Result<(), LengthError> {
        let bits = self.bits();
        if bits > out.len() * 8 {
            return Err(LengthError {
                width: Width::AtMost(out.len() * 8),
                len: (bits + 7) / 8,
                bits,
            });
        }
        self.fill_be_bytes(out);
        Ok(())
    }

    fn fill_be_bytes(&self, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().rev().enumerate() {
            *byte = if i < Self::BYTES {
                (self.words[i / WORD_BYTES] >> (8 * (i % WORD_BYTES))) as u8
            } else {
                0
            };
        }
    }

    /// Position of the most significant set bit, 0 for zero.
    pub fn bits(&self) -> usize {
        match self.words.iter().rposition(|&w| w != 0) {
            Some(i) => (i + 1) * WORD_BITS - self.words[i].leading_zeros() as usize,
            None => 0,
        }
    }

    /// Whether every word is zero.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Converts into a [`BigUint`] for use with arbitrary precision arithmetic.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_slice(&self.words)
    }
}

impl<const WORDS: usize> Default for Uint<WORDS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const WORDS: usize> ConstantTimeEq for Uint<WORDS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.words[..].ct_eq(&other.words[..])
    }
}

impl<const WORDS: usize> PartialEq for Uint<WORDS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const WORDS: usize> Zeroize for Uint<WORDS> {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl<const WORDS: usize> fmt::LowerHex for Uint<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl<const WORDS: usize> fmt::UpperHex for Uint<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:08X}", word)?;
        }
        Ok(())
    }
}

impl<const WORDS: usize> fmt::Debug for Uint<WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{:x})", self)
    }
}

impl<const WORDS: usize> From<&Uint<WORDS>> for BigUint {
    fn from(value: &Uint<WORDS>) -> Self {
        value.to_biguint()
    }
}

impl<const WORDS: usize> TryFrom<&BigUint> for Uint<WORDS> {
    type Error = LengthError;

    fn try_from(value: &BigUint) -> Result<Self, LengthError> {
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        Self::from_be_slice(&value.to_bytes_be(), Width::AtMost(Self::BITS))
    }
}

impl<const WORDS: usize> sealed::Sealed for Uint<WORDS> {}

impl<const WORDS: usize> FixedUint for Uint<WORDS> {
    const BITS: usize = WORDS * WORD_BITS;

    fn set_from_be_slice(&mut self, bytes: &[u8], width: Width) -> Result<(), LengthError> {
        Uint::<WORDS>::set_from_be_slice(self, bytes, width)
    }

    fn to_be_bytes(&self) -> Vec<u8> {
        Uint::<WORDS>::to_be_bytes(self)
    }

    fn to_biguint(&self) -> BigUint {
        Uint::<WORDS>::to_biguint(self)
    }
}
