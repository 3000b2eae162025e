//! Document sections.
//!
//! A parsed zonefile is a [`Document`]: an ordered sequence of top-level
//! sections, each a [`Zone`], a bare [`Shard`], or a bare [`Assertion`].
//! Zones contain shards and assertions, shards contain assertions. The
//! zone name and context declared at the top level are copied into every
//! nested node while parsing, so each node is self-describing.
//!
//! Content order is preserved exactly as authored. In particular, the
//! assertions of a shard are not sorted against the shard's range;
//! whether a range is meaningful for lookup is a concern of the outer
//! protocol, not of this compiler.

use super::object::Object;
use super::sig::Signature;

//------------ Document ------------------------------------------------------

/// An ordered sequence of top-level sections.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    /// The top-level sections in authored order.
    sections: Vec<Section>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a top-level section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section)
    }

    /// Returns the top-level sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns whether the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Applies `op` to every assertion reachable in the document, in
    /// document order, stopping at the first error.
    pub fn try_for_each_assertion<E>(
        &self,
        op: &mut impl FnMut(&Assertion) -> Result<(), E>,
    ) -> Result<(), E> {
        for section in &self.sections {
            match section {
                Section::Zone(zone) => {
                    for entry in zone.content() {
                        match entry {
                            ZoneEntry::Shard(shard) => {
                                for assertion in shard.content() {
                                    op(assertion)?;
                                }
                            }
                            ZoneEntry::Assertion(assertion) => {
                                op(assertion)?;
                            }
                        }
                    }
                }
                Section::Shard(shard) => {
                    for assertion in shard.content() {
                        op(assertion)?;
                    }
                }
                Section::Assertion(assertion) => op(assertion)?,
            }
        }
        Ok(())
    }

    /// Applies `op` to every assertion, mutably, in document order.
    pub(crate) fn for_each_assertion_mut(
        &mut self,
        op: &mut impl FnMut(&mut Assertion),
    ) {
        for section in &mut self.sections {
            match section {
                Section::Zone(zone) => {
                    for entry in zone.content_mut() {
                        match entry {
                            ZoneEntry::Shard(shard) => {
                                for assertion in shard.content_mut() {
                                    op(assertion);
                                }
                            }
                            ZoneEntry::Assertion(assertion) => op(assertion),
                        }
                    }
                }
                Section::Shard(shard) => {
                    for assertion in shard.content_mut() {
                        op(assertion);
                    }
                }
                Section::Assertion(assertion) => op(assertion),
            }
        }
    }
}

//------------ Section -------------------------------------------------------

/// A top-level section of a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Section {
    /// A zone.
    Zone(Zone),

    /// A bare shard with its own explicit zone and context.
    Shard(Shard),

    /// A bare assertion with its own explicit zone and context.
    Assertion(Assertion),
}

//------------ Zone ----------------------------------------------------------

/// A named collection of shards and assertions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Zone {
    /// The fully-qualified zone name, with trailing separator.
    name: String,

    /// The context the zone's data lives in.
    context: String,

    /// The zone's shards and assertions in authored order.
    content: Vec<ZoneEntry>,

    /// Signatures on the zone.
    signatures: Vec<Signature>,
}

impl Zone {
    /// Creates an empty zone.
    pub fn new(name: String, context: String) -> Self {
        Zone { name, context, content: Vec::new(), signatures: Vec::new() }
    }

    /// Returns the zone name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the context.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Appends a shard or assertion.
    pub fn push_entry(&mut self, entry: ZoneEntry) {
        self.content.push(entry)
    }

    /// Returns the zone's content.
    pub fn content(&self) -> &[ZoneEntry] {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut [ZoneEntry] {
        &mut self.content
    }

    /// Returns the signatures on the zone.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub(crate) fn set_signatures(&mut self, signatures: Vec<Signature>) {
        self.signatures = signatures
    }
}

//------------ ZoneEntry -----------------------------------------------------

/// A single entry of a zone's content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ZoneEntry {
    /// A shard inheriting the zone's name and context.
    Shard(Shard),

    /// An assertion inheriting the zone's name and context.
    Assertion(Assertion),
}

//------------ Shard ---------------------------------------------------------

/// A subset of a zone's assertions, optionally bounded by a subject-name
/// range.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shard {
    /// The zone the shard belongs to.
    zone: String,

    /// The context the shard's data lives in.
    context: String,

    /// The lexicographic subject-name range the shard covers.
    range: ShardRange,

    /// The shard's assertions in authored order.
    content: Vec<Assertion>,

    /// Signatures on the shard.
    signatures: Vec<Signature>,
}

impl Shard {
    /// Creates an empty shard.
    pub fn new(zone: String, context: String, range: ShardRange) -> Self {
        Shard {
            zone,
            context,
            range,
            content: Vec::new(),
            signatures: Vec::new(),
        }
    }

    /// Returns the zone the shard belongs to.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Returns the context.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns the shard's range.
    pub fn range(&self) -> &ShardRange {
        &self.range
    }

    /// Appends an assertion.
    pub fn push_assertion(&mut self, assertion: Assertion) {
        self.content.push(assertion)
    }

    /// Returns the shard's assertions.
    pub fn content(&self) -> &[Assertion] {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut [Assertion] {
        &mut self.content
    }

    /// Returns the signatures on the shard.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub(crate) fn set_signatures(&mut self, signatures: Vec<Signature>) {
        self.signatures = signatures
    }
}

//------------ ShardRange ----------------------------------------------------

/// The lexicographic subject-name range of a shard.
///
/// An absent bound leaves the range unbounded on that side.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShardRange {
    /// The lower bound.
    lower: Option<String>,

    /// The upper bound.
    upper: Option<String>,
}

impl ShardRange {
    /// Creates a new range from its bounds.
    pub fn new(lower: Option<String>, upper: Option<String>) -> Self {
        ShardRange { lower, upper }
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> Option<&str> {
        self.lower.as_deref()
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> Option<&str> {
        self.upper.as_deref()
    }
}

//------------ Assertion -----------------------------------------------------

/// A claim binding a subject name to one or more objects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assertion {
    /// The zone the subject lives in.
    zone: String,

    /// The context the assertion is made in.
    context: String,

    /// The subject name, relative to the zone.
    subject: String,

    /// The objects bound to the subject, in authored order.
    objects: Vec<Object>,

    /// Signatures on the assertion.
    signatures: Vec<Signature>,
}

impl Assertion {
    /// Creates an assertion without objects or signatures.
    pub fn new(zone: String, context: String, subject: String) -> Self {
        Assertion {
            zone,
            context,
            subject,
            objects: Vec::new(),
            signatures: Vec::new(),
        }
    }

    /// Returns the zone the subject lives in.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Returns the context.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns the subject name.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Appends an object.
    pub fn push_object(&mut self, object: Object) {
        self.objects.push(object)
    }

    /// Returns the objects bound to the subject.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Appends a signature.
    pub fn push_signature(&mut self, signature: Signature) {
        self.signatures.push(signature)
    }

    /// Returns the signatures on the assertion.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub(crate) fn set_signatures(&mut self, signatures: Vec<Signature>) {
        self.signatures = signatures
    }
}

//============ Tests =========================================================
