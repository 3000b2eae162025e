//! Zone signing keys.
//!
//! Every zone that is to be signed needs a key pair. The [`ZoneKey`]
//! type wraps the raw cryptographic secret together with its public
//! half; the [`ZoneKeys`] map collects the keys of all zones touched by
//! a signing run, keyed by zone name.
//!
//! Key files map each zone name to a two-element list of the signing key
//! and the verify key in hex:
//!
//! ```json
//! {
//!     "example.com.": [
//!         "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
//!         "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
//!     ]
//! }
//! ```

use crate::base::wire::SecAlg;
use core::fmt;
use ring::error::Unspecified;
use ring::rand::{SecureRandom, SystemRandom};
use ring::signature::{
    EcdsaKeyPair, Ed25519KeyPair, ECDSA_P256_SHA256_FIXED_SIGNING,
};
use std::collections::HashMap;

//------------ ZoneKey -------------------------------------------------------

/// The signing key pair of a zone.
pub struct ZoneKey {
    /// The raw private key.
    inner: KeyInner,

    /// The raw public key.
    public: Vec<u8>,
}

enum KeyInner {
    Ed25519(Ed25519KeyPair),
    EcdsaP256(EcdsaKeyPair),
}

impl ZoneKey {
    /// Creates an Ed25519 key from the hex fields of a key file.
    ///
    /// The seed and public key must form a consistent pair.
    pub fn ed25519_from_hex(
        signing_key: &str,
        verify_key: &str,
    ) -> Result<Self, KeyError> {
        let seed = hex::decode(signing_key).map_err(|_| KeyError::bad_hex())?;
        let public =
            hex::decode(verify_key).map_err(|_| KeyError::bad_hex())?;
        let key = Ed25519KeyPair::from_seed_and_public_key(&seed, &public)
            .map_err(|_| KeyError::rejected())?;
        Ok(ZoneKey { inner: KeyInner::Ed25519(key), public })
    }

    /// Creates an ECDSA P-256 key from the hex fields of a key file.
    ///
    /// The private key is the raw scalar, the public key the
    /// uncompressed point.
    pub fn ecdsa_p256_from_hex(
        signing_key: &str,
        verify_key: &str,
    ) -> Result<Self, KeyError> {
        let private =
            hex::decode(signing_key).map_err(|_| KeyError::bad_hex())?;
        let public =
            hex::decode(verify_key).map_err(|_| KeyError::bad_hex())?;
        let rng = SystemRandom::new();
        let key = EcdsaKeyPair::from_private_key_and_public_key(
            &ECDSA_P256_SHA256_FIXED_SIGNING,
            &private,
            &public,
            &rng,
        )
        .map_err(|_| KeyError::rejected())?;
        Ok(ZoneKey { inner: KeyInner::EcdsaP256(key), public })
    }

    /// Returns the algorithm of the key.
    pub fn algorithm(&self) -> SecAlg {
        match self.inner {
            KeyInner::Ed25519(_) => SecAlg::Ed25519,
            KeyInner::EcdsaP256(_) => SecAlg::EcdsaP256,
        }
    }

    /// Returns the raw public key.
    pub fn verify_key(&self) -> &[u8] {
        &self.public
    }

    /// Signs a message, returning the raw signature.
    pub fn sign(
        &self,
        rng: &dyn SecureRandom,
        msg: &[u8],
    ) -> Result<Vec<u8>, Unspecified> {
        match self.inner {
            KeyInner::Ed25519(ref key) => Ok(key.sign(msg).as_ref().to_vec()),
            KeyInner::EcdsaP256(ref key) => {
                key.sign(rng, msg).map(|sig| sig.as_ref().to_vec())
            }
        }
    }
}

impl fmt::Debug for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneKey")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

//------------ ZoneKeys ------------------------------------------------------

/// The signing keys of a set of zones, keyed by zone name.
#[derive(Debug, Default)]
pub struct ZoneKeys {
    keys: HashMap<String, ZoneKey>,
}

impl ZoneKeys {
    /// Creates an empty key map.
    pub fn new() -> Self {
        Default::default()
    }

    /// Inserts the key for a zone.
    pub fn insert(&mut self, zone: impl Into<String>, key: ZoneKey) {
        self.keys.insert(zone.into(), key);
    }

    /// Returns the key for a zone.
    pub fn get(&self, zone: &str) -> Option<&ZoneKey> {
        self.keys.get(zone)
    }

    /// Returns whether there is a key for a zone.
    pub fn contains(&self, zone: &str) -> bool {
        self.keys.contains_key(zone)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Creates a key map from the JSON key-file format.
    ///
    /// The file maps zone names to `[signingKeyHex, verifyKeyHex]`
    /// Ed25519 pairs.
    pub fn from_json_str(json: &str) -> Result<Self, KeyError> {
        let raw: HashMap<String, (String, String)> =
            serde_json::from_str(json).map_err(|_| KeyError::bad_file())?;
        let mut keys = Self::new();
        for (zone, (signing_key, verify_key)) in raw {
            keys.insert(
                zone,
                ZoneKey::ed25519_from_hex(&signing_key, &verify_key)?,
            );
        }
        Ok(keys)
    }

    /// Creates a key map by loading JSON from the given reader.
    pub fn load(read: &mut impl std::io::Read) -> Result<Self, KeyError> {
        let mut json = String::new();
        read.read_to_string(&mut json).map_err(|_| KeyError::bad_file())?;
        Self::from_json_str(&json)
    }
}

//------------ KeyError ------------------------------------------------------

/// Key material could not be used.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyError(&'static str);

impl KeyError {
    fn bad_hex() -> Self {
        KeyError("invalid hex in key material")
    }

    fn rejected() -> Self {
        KeyError("key material rejected")
    }

    fn bad_file() -> Self {
        KeyError("malformed key file")
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for KeyError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    // The Ed25519 test vector from RFC 8032, section 7.1.
    const SEED: &str =
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC: &str =
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    #[test]
    fn ed25519_key_from_hex() {
        let key = ZoneKey::ed25519_from_hex(SEED, PUBLIC).unwrap();
        assert_eq!(key.algorithm(), SecAlg::Ed25519);
        assert_eq!(hex::encode(key.verify_key()), PUBLIC);
    }

    #[test]
    fn inconsistent_pair_is_rejected() {
        let mut wrong = String::from(PUBLIC);
        wrong.replace_range(0..2, "00");
        let err = ZoneKey::ed25519_from_hex(SEED, &wrong)
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err, KeyError::rejected());
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(ZoneKey::ed25519_from_hex("zz", PUBLIC).is_err());
    }

    #[test]
    fn key_file_parsing() {
        let json = format!(
            "{{\"example.com.\": [\"{}\", \"{}\"]}}",
            SEED, PUBLIC
        );
        let keys = ZoneKeys::from_json_str(&json).unwrap();
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("example.com."));
        assert!(keys.get("example.org.").is_none());
    }

    #[test]
    fn malformed_key_files_are_rejected() {
        assert!(ZoneKeys::from_json_str("[]").is_err());
        assert!(
            ZoneKeys::from_json_str("{\"z.\": [\"only-one\"]}").is_err()
        );
    }

    // The P-256 key pair from RFC 6979, appendix A.2.5.
    const P256_PRIVATE: &str =
        "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
    const P256_PUBLIC: &str =
        "0460fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
         7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

    #[test]
    fn ecdsa_p256_key_from_hex() {
        let key =
            ZoneKey::ecdsa_p256_from_hex(P256_PRIVATE, P256_PUBLIC).unwrap();
        assert_eq!(key.algorithm(), SecAlg::EcdsaP256);
        assert_eq!(key.verify_key().len(), 65);

        let rng = SystemRandom::new();
        let sig = key.sign(&rng, b"message").unwrap();
        assert_eq!(sig.len(), 64);
    }

    #[test]
    fn signing_is_deterministic_for_ed25519() {
        let key = ZoneKey::ed25519_from_hex(SEED, PUBLIC).unwrap();
        let rng = SystemRandom::new();
        let one = key.sign(&rng, b"message").unwrap();
        let two = key.sign(&rng, b"message").unwrap();
        assert_eq!(one, two);
        assert_eq!(one.len(), 64);
    }
}
