//! A RAINS zonefile compiler for Rust.
//!
//! RAINS is an experimental naming system: a zone authority publishes
//! *assertions* binding subject names to typed objects (addresses,
//! delegations, service information), grouped into *shards* and *zones*
//! and attested by time-bounded signatures. This crate turns the textual
//! zonefile representation of such a dataset into the canonical CBOR wire
//! format consumed by the protocol, and attaches assertion signatures
//! over that canonical encoding.
//!
//! The crate is a batch compiler, not a server: it performs no I/O of its
//! own beyond reading key material handed to it, and no networking.
//!
//! # Modules
//!
//! * [base] contains the data model (documents, sections, objects,
//!   signatures, timestamps) and the wire-format tag registry shared
//!   between the parser and the encoder,
//! * [zonefile] reads zonefile text into a [`Document`][base::Document],
//! * [cbor] produces the canonical, deterministic CBOR encoding of a
//!   document or any of its sections,
//! * [sign] computes and attaches assertion signatures, and
//! * [validate] checks attached signatures against zone verify keys.
//!
//! # Example
//!
//! ```
//! use rains_zonefile::zonefile;
//!
//! let doc = zonefile::compile(
//!     "Zone \"example.com.\" \".\" [ Assertion www [ ip4 192.0.2.33 ] ]",
//! ).unwrap();
//! assert_eq!(doc.sections().len(), 1);
//! ```

pub mod base;
pub mod cbor;
pub mod sign;
pub mod validate;
pub mod zonefile;
