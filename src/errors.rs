//! Error types.

use core::fmt;

use crate::uint::Width;

/// Alias for [`core::result::Result`] with the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A key component does not have the length its key size requires.
    InvalidLength {
        /// The component that was rejected.
        component: Component,
        /// Why its length was rejected.
        cause: LengthError,
    },

    /// The public exponent is not [`PUBLIC_EXPONENT`](crate::PUBLIC_EXPONENT).
    InvalidPublicExponent,

    /// PKCS#1 error.
    Pkcs1(pkcs1::Error),
}

impl Error {
    /// Returns a closure tagging a [`LengthError`] with the given component,
    /// for use with `map_err`.
    pub(crate) fn length(component: Component) -> impl FnOnce(LengthError) -> Error {
        move |cause| Error::InvalidLength { component, cause }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { component, cause } => {
                write!(f, "invalid {} length: {}", component, cause)
            }
            Error::InvalidPublicExponent => write!(f, "public exponent must be 65537"),
            Error::Pkcs1(err) => write!(f, "{}", err),
        }
    }
}

impl From<pkcs1::Error> for Error {
    fn from(err: pkcs1::Error) -> Error {
        Error::Pkcs1(err)
    }
}

impl From<pkcs1::der::Error> for Error {
    fn from(err: pkcs1::der::Error) -> Error {
        Error::Pkcs1(err.into())
    }
}

/// The component of an RSA key an error refers to.
///
/// Names follow the `RSAPrivateKey` ASN.1 structure of RFC 8017.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Component {
    /// Modulus `n`.
    Modulus,
    /// Private exponent `d`.
    PrivateExponent,
    /// First prime factor `p`.
    Prime1,
    /// Second prime factor `q`.
    Prime2,
    /// `dp = d mod (p - 1)`.
    Exponent1,
    /// `dq = d mod (q - 1)`.
    Exponent2,
    /// `qinv = q^-1 mod p`.
    Coefficient,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Modulus => "modulus",
            Component::PrivateExponent => "private exponent",
            Component::Prime1 => "first prime",
            Component::Prime2 => "second prime",
            Component::Exponent1 => "first CRT exponent",
            Component::Exponent2 => "second CRT exponent",
            Component::Coefficient => "CRT coefficient",
        })
    }
}

/// A big-endian buffer could not be imported under a [`Width`] rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LengthError {
    pub(crate) width: Width,
    pub(crate) len: usize,
    pub(crate) bits: usize,
}

impl LengthError {
    /// The rule the input was checked against.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Length of the rejected input in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the rejected input was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit length of the value encoded by the rejected input.
    pub fn bits(&self) -> usize {
        self.bits
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthError {}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            return write!(f, "empty input, expected {}", self.width);
        }
        if self.len > self.width.max_bytes() {
            return write!(
                f,
                "{} bytes exceeds the {} bytes allowed for {}",
                self.len,
                self.width.max_bytes(),
                self.width
            );
        }
        write!(f, "{}-bit value, expected {}", self.bits, self.width)
    }
}
