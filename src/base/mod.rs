//! The RAINS data model.
//!
//! This module collects the types that make up a parsed document tree:
//! [`Document`], [`Zone`], [`Shard`], [`Assertion`], [`Object`], and
//! [`Signature`]. It also provides the [`Timestamp`] type used for
//! signature validity windows and the wire-format tag registry in
//! [`wire`].

pub mod object;
pub mod section;
pub mod sig;
pub mod timestamp;
pub mod wire;

pub use self::object::{KeyInfo, Object, ServiceInfo};
pub use self::section::{
    Assertion, Document, Section, Shard, ShardRange, Zone, ZoneEntry,
};
pub use self::sig::Signature;
pub use self::timestamp::Timestamp;
pub use self::wire::{MapKey, ObjectType, SecAlg, SectionType};
