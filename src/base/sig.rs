//! Section signatures.

use super::timestamp::Timestamp;
use super::wire::SecAlg;
use bytes::Bytes;

//------------ Signature -----------------------------------------------------

/// A time-bounded signature over a section's canonical encoding.
///
/// While a signature is being computed, its `bytes` field is absent: the
/// signer encodes the section with such a placeholder in place so that
/// the signed bytes cover the signature's own algorithm and validity
/// window. A finished document only carries signatures whose bytes are
/// present.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    /// The signature algorithm.
    algorithm: SecAlg,

    /// The start of the validity window.
    valid_since: Timestamp,

    /// The end of the validity window.
    valid_until: Timestamp,

    /// The index of the key space the signing key lives in.
    key_space: u64,

    /// The raw signature, or `None` for a placeholder.
    bytes: Option<Bytes>,
}

impl Signature {
    /// Creates a new signature.
    pub fn new(
        algorithm: SecAlg,
        valid_since: Timestamp,
        valid_until: Timestamp,
        key_space: u64,
        bytes: Option<Bytes>,
    ) -> Self {
        Signature { algorithm, valid_since, valid_until, key_space, bytes }
    }

    /// Creates a placeholder signature with absent bytes.
    pub(crate) fn placeholder(
        algorithm: SecAlg,
        valid_since: Timestamp,
        valid_until: Timestamp,
        key_space: u64,
    ) -> Self {
        Signature::new(algorithm, valid_since, valid_until, key_space, None)
    }

    /// Returns the signature algorithm.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the start of the validity window.
    pub fn valid_since(&self) -> Timestamp {
        self.valid_since
    }

    /// Returns the end of the validity window.
    pub fn valid_until(&self) -> Timestamp {
        self.valid_until
    }

    /// Returns the key space index.
    pub fn key_space(&self) -> u64 {
        self.key_space
    }

    /// Returns the raw signature if present.
    pub fn bytes(&self) -> Option<&Bytes> {
        self.bytes.as_ref()
    }

    /// Fills in the raw signature.
    pub(crate) fn set_bytes(&mut self, bytes: Bytes) {
        self.bytes = Some(bytes)
    }

    /// Returns a copy of this signature with the bytes cleared.
    ///
    /// This reconstructs the placeholder state the signature's bytes
    /// were computed over.
    pub(crate) fn without_bytes(&self) -> Self {
        Signature { bytes: None, ..self.clone() }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn placeholder_round_trip() {
        let mut sig = Signature::placeholder(
            SecAlg::Ed25519,
            Timestamp::from_secs(10),
            Timestamp::from_secs(20),
            0,
        );
        assert_eq!(sig.bytes(), None);
        sig.set_bytes(Bytes::from_static(b"\xab\xcd"));
        assert_eq!(
            sig.bytes().map(|b| b.as_ref()),
            Some(b"\xab\xcd".as_ref())
        );
        assert_eq!(sig.without_bytes().bytes(), None);
        assert_eq!(sig.without_bytes().algorithm(), SecAlg::Ed25519);
    }
}
