//! Assertion objects.
//!
//! An assertion binds its subject name to an ordered sequence of typed
//! objects. The [`Object`] enum carries one value per wire object type.
//! The value shape depends on the type: parsed addresses for the address
//! types, strings for names, and algorithm-tagged or opaque key material
//! for the rest.

use super::wire::{ObjectType, SecAlg};
use bytes::Bytes;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Object --------------------------------------------------------

/// A single typed value attached to an assertion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Object {
    /// A name associated with the subject.
    Name(String),

    /// An IPv4 address of the subject.
    Ipv4(Ipv4Addr),

    /// An IPv6 address of the subject.
    Ipv6(Ipv6Addr),

    /// The name of a zone authority server.
    Redirection(String),

    /// A public key for zone delegation.
    Delegation(KeyInfo),

    /// A name set expression for the zone.
    ///
    /// Name sets have a wire discriminant but no zonefile tag; they can
    /// only be constructed programmatically.
    NameSet(String),

    /// Certificate information for the subject.
    CertInfo(Bytes),

    /// Service information for a service name.
    ServiceInfo(ServiceInfo),

    /// Registrar information.
    Registrar(String),

    /// Registrant information.
    Registrant(String),

    /// A public key for RAINS infrastructure.
    InfraKey(KeyInfo),
}

impl Object {
    /// Returns the wire object type of this object.
    pub fn otype(&self) -> ObjectType {
        match self {
            Object::Name(_) => ObjectType::Name,
            Object::Ipv4(_) => ObjectType::Ipv4Addr,
            Object::Ipv6(_) => ObjectType::Ipv6Addr,
            Object::Redirection(_) => ObjectType::Redirection,
            Object::Delegation(_) => ObjectType::Delegation,
            Object::NameSet(_) => ObjectType::NameSet,
            Object::CertInfo(_) => ObjectType::CertInfo,
            Object::ServiceInfo(_) => ObjectType::ServiceInfo,
            Object::Registrar(_) => ObjectType::Registrar,
            Object::Registrant(_) => ObjectType::Registrant,
            Object::InfraKey(_) => ObjectType::InfraKey,
        }
    }
}

//------------ KeyInfo -------------------------------------------------------

/// An algorithm-tagged public key carried by a delegation or infrakey
/// object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyInfo {
    /// The algorithm the key is for.
    algorithm: SecAlg,

    /// The raw public key.
    key: Bytes,
}

impl KeyInfo {
    /// Creates a new value from an algorithm and the raw key.
    pub fn new(algorithm: SecAlg, key: Bytes) -> Self {
        KeyInfo { algorithm, key }
    }

    /// Returns the key's algorithm.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the raw public key.
    pub fn key(&self) -> &Bytes {
        &self.key
    }
}

//------------ ServiceInfo ---------------------------------------------------

/// Service information for a service name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceInfo {
    /// The host providing the service.
    host: String,

    /// The transport port the service listens on.
    port: u16,

    /// The priority of this entry, lower first.
    priority: u16,
}

impl ServiceInfo {
    /// Creates a new value from host, port, and priority.
    pub fn new(host: String, port: u16, priority: u16) -> Self {
        ServiceInfo { host, port, priority }
    }

    /// Returns the host name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the transport port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the priority.
    pub fn priority(&self) -> u16 {
        self.priority
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn otype() {
        assert_eq!(
            Object::Ipv4(Ipv4Addr::new(192, 0, 2, 33)).otype(),
            ObjectType::Ipv4Addr
        );
        assert_eq!(
            Object::Name(String::from("www")).otype(),
            ObjectType::Name
        );
        assert_eq!(
            Object::Delegation(KeyInfo::new(
                SecAlg::Ed25519,
                Bytes::from_static(b"\x01\x02"),
            ))
            .otype(),
            ObjectType::Delegation
        );
    }
}
