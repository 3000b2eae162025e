//! Signing assertions.
//!
//! Signing attaches one new time-bounded signature to every assertion
//! reachable in a document. The signature covers the assertion's
//! canonical CBOR encoding in a well-defined *placeholder state*: the
//! assertion's signature list holds exactly one entry carrying the new
//! signature's algorithm, validity window, and key space, but no
//! signature bytes yet. Signing that encoding and then filling the bytes
//! into the placeholder authenticates the validity window along with the
//! content. Signatures the assertion already carried are set aside while
//! the bytes are computed and reattached in front of the new signature
//! afterwards.
//!
//! The whole run is atomic: every signature is computed against a
//! placeholder-state copy before any node of the document is touched, so
//! a missing key or a failing signing operation leaves the document
//! unchanged.

pub mod key;

pub use self::key::{KeyError, ZoneKey, ZoneKeys};

use crate::base::{Document, Signature, Timestamp};
use crate::cbor::{self, EncodeError};
use core::fmt;
use ring::rand::SystemRandom;
use tracing::debug;

//------------ sign ----------------------------------------------------------

/// Signs every assertion in the document.
///
/// Each assertion receives one new signature by its zone's key, valid
/// from now for `ttl` seconds. Fails without touching the document if
/// any reachable assertion's zone has no key in `keys`.
pub fn sign(
    document: &mut Document,
    ttl: u64,
    keys: &ZoneKeys,
) -> Result<(), SignError> {
    sign_at(document, Timestamp::now(), ttl, keys)
}

/// Signs every assertion in the document with an explicit validity
/// start.
///
/// This is [`sign`] with the clock injected: the validity window of
/// every new signature is `valid_since` to `valid_since + ttl`.
pub fn sign_at(
    document: &mut Document,
    valid_since: Timestamp,
    ttl: u64,
    keys: &ZoneKeys,
) -> Result<(), SignError> {
    let valid_until = valid_since + ttl;
    let rng = SystemRandom::new();

    // First pass: compute all signatures against placeholder-state
    // copies, leaving the document untouched.
    let mut computed = Vec::new();
    document.try_for_each_assertion(&mut |assertion| -> Result<(), SignError> {
        let key = keys
            .get(assertion.zone())
            .ok_or_else(|| SignError::missing_key(assertion.zone()))?;
        let mut placeholder = Signature::placeholder(
            key.algorithm(),
            valid_since,
            valid_until,
            0,
        );
        let mut stub = assertion.clone();
        stub.set_signatures(vec![placeholder.clone()]);
        let msg = cbor::assertion_bytes(&stub)?;
        let sig = key.sign(&rng, &msg).map_err(|_| SignError::Signing)?;
        placeholder.set_bytes(sig.into());
        computed.push(placeholder);
        Ok(())
    })?;

    // Second pass: attach them. Both passes traverse in document order.
    let total = computed.len();
    let mut computed = computed.into_iter();
    document.for_each_assertion_mut(&mut |assertion| {
        if let Some(signature) = computed.next() {
            assertion.push_signature(signature);
        }
    });
    debug!("signed {} assertions, valid until {}", total, valid_until);
    Ok(())
}

//------------ SignError -----------------------------------------------------

/// Signing a document failed.
#[derive(Debug)]
pub enum SignError {
    /// An assertion's zone has no key in the key map.
    MissingKey {
        /// The zone without a key.
        zone: String,
    },

    /// Canonical encoding of an assertion failed.
    Encode(EncodeError),

    /// The signing operation itself failed.
    Signing,
}

impl SignError {
    fn missing_key(zone: &str) -> Self {
        SignError::MissingKey { zone: zone.into() }
    }
}

impl From<EncodeError> for SignError {
    fn from(err: EncodeError) -> Self {
        SignError::Encode(err)
    }
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignError::MissingKey { zone } => {
                write!(f, "no signing key for zone {}", zone)
            }
            SignError::Encode(err) => err.fmt(f),
            SignError::Signing => f.write_str("signing operation failed"),
        }
    }
}

impl std::error::Error for SignError {}

//============ Tests =========================================================
