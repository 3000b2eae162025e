//! Wire-format tag numbers.
//!
//! The RAINS wire format encodes sections as CBOR maps with small integer
//! keys and tags object types, section types, and signature algorithms
//! with stable integer discriminants. Both the parser and the canonical
//! encoder import these registries from here, so the wire contract lives
//! in exactly one place.

use core::fmt;

//------------ MapKey --------------------------------------------------------

/// Keys of the CBOR maps that carry messages and sections.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MapKey {
    /// Content of a message, shard, or zone.
    Content = 0,

    /// Capabilities of the server sending a message.
    Capabilities = 1,

    /// Signatures on a message or section.
    Signatures = 2,

    /// Subject name in an assertion.
    SubjectName = 3,

    /// Zone name in an assertion.
    SubjectZone = 4,

    /// Qualified subject name in a query.
    QueryName = 5,

    /// Context of an assertion.
    Context = 6,

    /// Objects of an assertion.
    Objects = 7,

    /// Token for referring to a data item.
    Token = 8,

    /// Lexical range of the assertions in a shard.
    ShardRange = 11,

    /// Acceptable object types for a query.
    QueryTypes = 14,

    /// Notification type.
    NoteType = 17,

    /// Query options requested.
    QueryOpts = 22,

    /// Additional notification data.
    NoteData = 23,
}

impl MapKey {
    /// Returns the key's integer value.
    pub fn to_int(self) -> u64 {
        self as u64
    }
}

//------------ SectionType ---------------------------------------------------

/// Discriminants of message sections.
///
/// Query and notification sections are part of the wire protocol but are
/// neither read nor written by this compiler; their discriminants are
/// kept here so the registry covers the whole message format.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SectionType {
    Assertion = 1,
    Shard = 2,
    Zone = 3,
    Query = 4,
    Notification = 23,
}

impl SectionType {
    /// Returns the discriminant's integer value.
    pub fn to_int(self) -> u64 {
        self as u64
    }

    /// Returns the section type for an integer value.
    pub fn from_int(value: u64) -> Option<Self> {
        match value {
            1 => Some(SectionType::Assertion),
            2 => Some(SectionType::Shard),
            3 => Some(SectionType::Zone),
            4 => Some(SectionType::Query),
            23 => Some(SectionType::Notification),
            _ => None,
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionType::Assertion => "assertion",
            SectionType::Shard => "shard",
            SectionType::Zone => "zone",
            SectionType::Query => "query",
            SectionType::Notification => "notification",
        })
    }
}

//------------ ObjectType ----------------------------------------------------

/// Discriminants of assertion object types.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ObjectType {
    /// A name associated with the subject.
    Name = 1,

    /// An IPv6 address of the subject.
    Ipv6Addr = 2,

    /// An IPv4 address of the subject.
    Ipv4Addr = 3,

    /// The name of a zone authority server.
    Redirection = 4,

    /// A public key for zone delegation.
    Delegation = 5,

    /// A name set expression for the zone.
    NameSet = 6,

    /// Certificate information for the name.
    CertInfo = 7,

    /// Service information for a service name.
    ServiceInfo = 8,

    /// Registrar information.
    Registrar = 9,

    /// Registrant information.
    Registrant = 10,

    /// A public key for RAINS infrastructure.
    InfraKey = 11,
}

impl ObjectType {
    /// Returns the discriminant's integer value.
    pub fn to_int(self) -> u64 {
        self as u64
    }

    /// Returns the object type for an integer value.
    pub fn from_int(value: u64) -> Option<Self> {
        match value {
            1 => Some(ObjectType::Name),
            2 => Some(ObjectType::Ipv6Addr),
            3 => Some(ObjectType::Ipv4Addr),
            4 => Some(ObjectType::Redirection),
            5 => Some(ObjectType::Delegation),
            6 => Some(ObjectType::NameSet),
            7 => Some(ObjectType::CertInfo),
            8 => Some(ObjectType::ServiceInfo),
            9 => Some(ObjectType::Registrar),
            10 => Some(ObjectType::Registrant),
            11 => Some(ObjectType::InfraKey),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectType::Name => "name",
            ObjectType::Ipv6Addr => "ip6",
            ObjectType::Ipv4Addr => "ip4",
            ObjectType::Redirection => "redirection",
            ObjectType::Delegation => "delegation",
            ObjectType::NameSet => "nameset",
            ObjectType::CertInfo => "certificate",
            ObjectType::ServiceInfo => "service",
            ObjectType::Registrar => "registrar",
            ObjectType::Registrant => "registrant",
            ObjectType::InfraKey => "infrakey",
        })
    }
}

//------------ SecAlg --------------------------------------------------------

/// Signature algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SecAlg {
    /// ECDSA over the NIST P-256 curve with SHA-256.
    EcdsaP256 = 2,

    /// Ed25519.
    Ed25519 = 4,
}

impl SecAlg {
    /// Returns the algorithm's integer value.
    pub fn to_int(self) -> u64 {
        self as u64
    }

    /// Returns the algorithm for an integer value.
    pub fn from_int(value: u64) -> Option<Self> {
        match value {
            2 => Some(SecAlg::EcdsaP256),
            4 => Some(SecAlg::Ed25519),
            _ => None,
        }
    }

    /// Returns the mnemonic used for the algorithm in zonefiles.
    pub fn mnemonic(self) -> &'static str {
        match self {
            SecAlg::EcdsaP256 => "ecdsa-p256",
            SecAlg::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for SecAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

//============ Tests =========================================================
