//! The canonical CBOR encoding of documents.
//!
//! Sections are encoded as CBOR maps keyed by the small integers of
//! [`MapKey`][crate::base::wire::MapKey]; objects, signatures, and
//! section bodies are tagged with their wire discriminants. The encoding
//! is canonical: maps are built over sorted keys and all lengths are
//! definite, so encoding the same logical node twice produces
//! byte-identical output. The signer relies on this: an assertion's
//! signature is computed over exactly the bytes this module produces for
//! the assertion in its placeholder state.
//!
//! A document becomes a message carrying one content entry per top-level
//! section. Placeholder signatures encode without their final element;
//! everything else encodes completely.

use crate::base::{
    Assertion, Document, Object, Section, Shard, Signature, Zone, ZoneEntry,
};
use crate::base::wire::{MapKey, SectionType};
use core::fmt;
use serde_cbor::Value;
use std::collections::BTreeMap;

//------------ Value construction --------------------------------------------

fn int(value: u64) -> Value {
    Value::Integer(value as i128)
}

fn field(key: MapKey) -> Value {
    Value::Integer(key.to_int() as i128)
}

fn text(value: &str) -> Value {
    Value::Text(value.into())
}

/// Returns the value for a message carrying the document's sections.
pub fn message_value(doc: &Document) -> Value {
    let mut map = BTreeMap::new();
    map.insert(
        field(MapKey::Content),
        Value::Array(doc.sections().iter().map(section_value).collect()),
    );
    Value::Map(map)
}

/// Returns the tagged value for a top-level section.
pub fn section_value(section: &Section) -> Value {
    match section {
        Section::Zone(zone) => Value::Array(vec![
            int(SectionType::Zone.to_int()),
            zone_value(zone),
        ]),
        Section::Shard(shard) => Value::Array(vec![
            int(SectionType::Shard.to_int()),
            shard_value(shard),
        ]),
        Section::Assertion(assertion) => Value::Array(vec![
            int(SectionType::Assertion.to_int()),
            assertion_value(assertion),
        ]),
    }
}

/// Returns the value for a zone body.
pub fn zone_value(zone: &Zone) -> Value {
    let content = zone
        .content()
        .iter()
        .map(|entry| match entry {
            ZoneEntry::Shard(shard) => Value::Array(vec![
                int(SectionType::Shard.to_int()),
                shard_value(shard),
            ]),
            ZoneEntry::Assertion(assertion) => Value::Array(vec![
                int(SectionType::Assertion.to_int()),
                assertion_value(assertion),
            ]),
        })
        .collect();
    let mut map = BTreeMap::new();
    map.insert(field(MapKey::SubjectZone), text(zone.name()));
    map.insert(field(MapKey::Context), text(zone.context()));
    map.insert(field(MapKey::Content), Value::Array(content));
    map.insert(field(MapKey::Signatures), signatures_value(zone.signatures()));
    Value::Map(map)
}

/// Returns the value for a shard body.
pub fn shard_value(shard: &Shard) -> Value {
    let bound = |bound: Option<&str>| match bound {
        Some(name) => text(name),
        None => Value::Null,
    };
    let content = shard
        .content()
        .iter()
        .map(|assertion| {
            Value::Array(vec![
                int(SectionType::Assertion.to_int()),
                assertion_value(assertion),
            ])
        })
        .collect();
    let mut map = BTreeMap::new();
    map.insert(field(MapKey::SubjectZone), text(shard.zone()));
    map.insert(field(MapKey::Context), text(shard.context()));
    map.insert(
        field(MapKey::ShardRange),
        Value::Array(vec![
            bound(shard.range().lower()),
            bound(shard.range().upper()),
        ]),
    );
    map.insert(field(MapKey::Content), Value::Array(content));
    map.insert(
        field(MapKey::Signatures),
        signatures_value(shard.signatures()),
    );
    Value::Map(map)
}

/// Returns the value for an assertion body.
pub fn assertion_value(assertion: &Assertion) -> Value {
    let mut map = BTreeMap::new();
    map.insert(field(MapKey::SubjectName), text(assertion.subject()));
    map.insert(field(MapKey::SubjectZone), text(assertion.zone()));
    map.insert(field(MapKey::Context), text(assertion.context()));
    map.insert(
        field(MapKey::Objects),
        Value::Array(assertion.objects().iter().map(object_value).collect()),
    );
    map.insert(
        field(MapKey::Signatures),
        signatures_value(assertion.signatures()),
    );
    Value::Map(map)
}

/// Returns the tagged value for an object.
pub fn object_value(object: &Object) -> Value {
    let key_info = |key: &crate::base::KeyInfo| {
        Value::Array(vec![
            int(key.algorithm().to_int()),
            Value::Bytes(key.key().to_vec()),
        ])
    };
    let value = match object {
        Object::Name(name) => text(name),
        Object::Ipv4(addr) => Value::Bytes(addr.octets().to_vec()),
        Object::Ipv6(addr) => Value::Bytes(addr.octets().to_vec()),
        Object::Redirection(name) => text(name),
        Object::Delegation(key) => key_info(key),
        Object::NameSet(expr) => text(expr),
        Object::CertInfo(data) => Value::Bytes(data.to_vec()),
        Object::ServiceInfo(info) => Value::Array(vec![
            text(info.host()),
            int(info.port().into()),
            int(info.priority().into()),
        ]),
        Object::Registrar(name) => text(name),
        Object::Registrant(name) => text(name),
        Object::InfraKey(key) => key_info(key),
    };
    Value::Array(vec![int(object.otype().to_int()), value])
}

/// Returns the value for a signature list.
fn signatures_value(signatures: &[Signature]) -> Value {
    Value::Array(signatures.iter().map(signature_value).collect())
}

/// Returns the value for a single signature.
///
/// A placeholder signature encodes without its final element.
pub fn signature_value(signature: &Signature) -> Value {
    let mut parts = vec![
        int(signature.algorithm().to_int()),
        int(signature.key_space()),
        Value::Integer(signature.valid_since().as_secs() as i128),
        Value::Integer(signature.valid_until().as_secs() as i128),
    ];
    if let Some(bytes) = signature.bytes() {
        parts.push(Value::Bytes(bytes.to_vec()));
    }
    Value::Array(parts)
}

//------------ Byte encoding -------------------------------------------------

/// Encodes a value into its CBOR bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    serde_cbor::to_vec(value).map_err(EncodeError)
}

/// Encodes a whole document as a message.
pub fn message_bytes(doc: &Document) -> Result<Vec<u8>, EncodeError> {
    encode(&message_value(doc))
}

/// Encodes a single assertion body.
///
/// This is the encoding assertion signatures are computed over.
pub fn assertion_bytes(
    assertion: &Assertion,
) -> Result<Vec<u8>, EncodeError> {
    encode(&assertion_value(assertion))
}

//------------ EncodeError ---------------------------------------------------

/// CBOR serialization failed.
#[derive(Debug)]
pub struct EncodeError(serde_cbor::Error);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CBOR encoding failed: {}", self.0)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::{SecAlg, Timestamp};
    use crate::zonefile::compile;
    use bytes::Bytes;

    fn sample() -> Document {
        compile(
            "Zone \"example.com.\" \".\" [ Shard (aaa,aac) [ \
             Assertion aaa [ ip4 192.0.2.33 ip6 2001:db8::33 ] ] ]",
        )
        .unwrap()
    }

    #[test]
    fn encoding_is_deterministic() {
        let doc = sample();
        assert_eq!(
            message_bytes(&doc).unwrap(),
            message_bytes(&doc).unwrap()
        );
    }

    #[test]
    fn distinct_documents_encode_differently() {
        let other = compile(
            "Zone \"example.com.\" \".\" [ Shard (aaa,aac) [ \
             Assertion aab [ ip4 192.0.2.33 ip6 2001:db8::33 ] ] ]",
        )
        .unwrap();
        assert_ne!(
            message_bytes(&sample()).unwrap(),
            message_bytes(&other).unwrap()
        );
    }

    #[test]
    fn assertion_map_shape() {
        let mut assertion = Assertion::new(
            "example.com.".into(),
            ".".into(),
            "aaa".into(),
        );
        assertion.push_object(Object::Ipv4("192.0.2.33".parse().unwrap()));
        let value = assertion_value(&assertion);
        let map = match value {
            Value::Map(map) => map,
            other => panic!("expected a map, got {:?}", other),
        };
        assert_eq!(
            map.get(&Value::Integer(3)),
            Some(&Value::Text("aaa".into()))
        );
        assert_eq!(
            map.get(&Value::Integer(4)),
            Some(&Value::Text("example.com.".into()))
        );
        assert_eq!(
            map.get(&Value::Integer(6)),
            Some(&Value::Text(".".into()))
        );
        assert_eq!(
            map.get(&Value::Integer(7)),
            Some(&Value::Array(vec![Value::Array(vec![
                Value::Integer(3),
                Value::Bytes(vec![192, 0, 2, 33]),
            ])]))
        );
        assert_eq!(
            map.get(&Value::Integer(2)),
            Some(&Value::Array(Vec::new()))
        );
    }

    #[test]
    fn placeholder_signature_has_no_bytes_element() {
        let placeholder = Signature::new(
            SecAlg::Ed25519,
            Timestamp::from_secs(10),
            Timestamp::from_secs(20),
            0,
            None,
        );
        match signature_value(&placeholder) {
            Value::Array(parts) => {
                assert_eq!(
                    parts,
                    vec![
                        Value::Integer(4),
                        Value::Integer(0),
                        Value::Integer(10),
                        Value::Integer(20),
                    ]
                );
            }
            other => panic!("expected an array, got {:?}", other),
        }

        let complete = Signature::new(
            SecAlg::Ed25519,
            Timestamp::from_secs(10),
            Timestamp::from_secs(20),
            0,
            Some(Bytes::from_static(b"\xab\xcd")),
        );
        match signature_value(&complete) {
            Value::Array(parts) => {
                assert_eq!(parts.len(), 5);
                assert_eq!(parts[4], Value::Bytes(vec![0xab, 0xcd]));
            }
            other => panic!("expected an array, got {:?}", other),
        }
    }

    #[test]
    fn nameset_encodes_though_it_has_no_zonefile_tag() {
        let object = Object::NameSet("[a-m]*".into());
        assert_eq!(
            object_value(&object),
            Value::Array(vec![
                Value::Integer(6),
                Value::Text("[a-m]*".into()),
            ])
        );
    }

    #[test]
    fn shard_range_bounds_encode_as_nulls_when_absent() {
        let doc = compile("Zone z . [ Shard (,bbb) [ ] ]").unwrap();
        let zone = match &doc.sections()[0] {
            Section::Zone(zone) => zone,
            _ => unreachable!(),
        };
        let shard = match &zone.content()[0] {
            ZoneEntry::Shard(shard) => shard,
            _ => unreachable!(),
        };
        let map = match shard_value(shard) {
            Value::Map(map) => map,
            other => panic!("expected a map, got {:?}", other),
        };
        assert_eq!(
            map.get(&Value::Integer(11)),
            Some(&Value::Array(vec![
                Value::Null,
                Value::Text("bbb".into()),
            ]))
        );
    }

    #[test]
    fn round_trips_through_a_cbor_reader() {
        let bytes = message_bytes(&sample()).unwrap();
        let value: Value = serde_cbor::from_slice(&bytes).unwrap();
        match value {
            Value::Map(map) => {
                assert!(map.contains_key(&Value::Integer(0)));
            }
            other => panic!("expected a map, got {:?}", other),
        }
    }
}
