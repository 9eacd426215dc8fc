//! Serde representation of keys.
//!
//! Every component is written as its full-width big-endian encoding, as
//! lowercase hex in human-readable formats and a byte sequence otherwise. Reading
//! a key back goes through the constructors, so a serialised key is subject
//! to the same length checks as any other input.

use alloc::vec::Vec;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

use super::{RsaCrtKey, RsaPrivateKey, RsaPublicKey};
use crate::traits::{FixedUint, KeySize};

mod hex_or_bin {
    use alloc::vec::Vec;
    use serde::{Deserializer, Serializer};

    pub(super) fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        serdect::slice::serialize_hex_lower_or_bin(bytes, serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        serdect::slice::deserialize_hex_or_bin_vec(deserializer)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "RsaPublicKey")]
struct PublicKeyRepr {
    #[serde(with = "hex_or_bin")]
    n: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "RsaPrivateKey")]
struct PrivateKeyRepr {
    #[serde(with = "hex_or_bin")]
    n: Vec<u8>,
    #[serde(with = "hex_or_bin")]
    d: Vec<u8>,
}

impl Drop for PrivateKeyRepr {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "RsaCrtKey")]
struct CrtKeyRepr {
    #[serde(with = "hex_or_bin")]
    p: Vec<u8>,
    #[serde(with = "hex_or_bin")]
    q: Vec<u8>,
    #[serde(with = "hex_or_bin")]
    dp: Vec<u8>,
    #[serde(with = "hex_or_bin")]
    dq: Vec<u8>,
    #[serde(with = "hex_or_bin")]
    qinv: Vec<u8>,
}

impl Drop for CrtKeyRepr {
    fn drop(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

impl<S: KeySize> Serialize for RsaPublicKey<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        PublicKeyRepr {
            n: self.n.to_be_bytes(),
        }
        .serialize(serializer)
    }
}

impl<'de, S: KeySize> Deserialize<'de> for RsaPublicKey<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = PublicKeyRepr::deserialize(deserializer)?;
        Self::new(&repr.n).map_err(de::Error::custom)
    }
}

impl<S: KeySize> Serialize for RsaPrivateKey<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        PrivateKeyRepr {
            n: self.n.to_be_bytes(),
            d: self.d.to_be_bytes(),
        }
        .serialize(serializer)
    }
}

impl<'de, S: KeySize> Deserialize<'de> for RsaPrivateKey<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = PrivateKeyRepr::deserialize(deserializer)?;
        Self::new(&repr.n, &repr.d).map_err(de::Error::custom)
    }
}

impl<S: KeySize> Serialize for RsaCrtKey<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        CrtKeyRepr {
            p: self.p.to_be_bytes(),
            q: self.q.to_be_bytes(),
            dp: self.dp.to_be_bytes(),
            dq: self.dq.to_be_bytes(),
            qinv: self.qinv.to_be_bytes(),
        }
        .serialize(serializer)
    }
}

impl<'de, S: KeySize> Deserialize<'de> for RsaCrtKey<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = CrtKeyRepr::deserialize(deserializer)?;
        Self::new(&repr.p, &repr.q, &repr.dp, &repr.dq, &repr.qinv).map_err(de::Error::custom)
    }
}
