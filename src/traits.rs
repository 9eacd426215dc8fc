//! RSA-related trait definitions.

pub(crate) mod keys;
mod size;

pub use keys::{CrtKeyParts, PrivateKeyParts, PublicKeyParts};
pub use size::{FixedUint, KeySize, Rsa1024, Rsa2048};

pub(crate) mod sealed {
    pub trait Sealed {}
}
