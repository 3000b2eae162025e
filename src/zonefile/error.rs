//! Zonefile errors.
//!
//! Compilation fails fast: every stage aborts on the first fault and
//! reports the byte offset into the source text where it occurred. There
//! is no recovery and no partial output.

use core::fmt;

//------------ LexError ------------------------------------------------------

/// Some input could not be turned into a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexError {
    /// What was wrong with the input.
    msg: &'static str,

    /// The byte offset of the offending input.
    offset: usize,
}

impl LexError {
    /// No token class matched the input.
    pub(crate) fn unmatched(offset: usize) -> Self {
        LexError { msg: "unrecognized input", offset }
    }

    /// An IPv4 literal had an out-of-range octet.
    pub(crate) fn bad_ip4(offset: usize) -> Self {
        LexError { msg: "invalid IPv4 address", offset }
    }

    /// An IPv6 literal did not describe an address.
    pub(crate) fn bad_ip6(offset: usize) -> Self {
        LexError { msg: "invalid IPv6 address", offset }
    }

    /// A timestamp literal had impossible calendar fields.
    pub(crate) fn bad_timestamp(offset: usize) -> Self {
        LexError { msg: "invalid timestamp", offset }
    }

    /// An integer literal overflowed.
    pub(crate) fn bad_integer(offset: usize) -> Self {
        LexError { msg: "integer out of range", offset }
    }

    /// Returns the byte offset of the offending input.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.msg, self.offset)
    }
}

impl std::error::Error for LexError {}

//------------ ParseError ----------------------------------------------------

/// The token sequence did not match the grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// What the grammar expected at this point.
    expected: &'static str,

    /// A description of what was found instead.
    found: String,

    /// The byte offset of the offending token, or of the end of input.
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(
        expected: &'static str,
        found: String,
        offset: usize,
    ) -> Self {
        ParseError { expected, found, offset }
    }

    /// The token sequence ended where more input was required.
    pub(crate) fn eof(expected: &'static str, offset: usize) -> Self {
        ParseError {
            expected,
            found: String::from("end of input"),
            offset,
        }
    }

    /// Returns what the grammar expected.
    pub fn expected(&self) -> &str {
        self.expected
    }

    /// Returns a description of what was found instead.
    pub fn found(&self) -> &str {
        &self.found
    }

    /// Returns the byte offset of the offending token.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {}, found {} at offset {}",
            self.expected, self.found, self.offset
        )
    }
}

impl std::error::Error for ParseError {}

//------------ StructuralError -----------------------------------------------

/// A section was structurally incomplete.
///
/// Raised for a bare shard or assertion without an explicit zone and
/// context, and for malformed signature blocks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StructuralError {
    /// What was missing or malformed.
    msg: &'static str,

    /// The byte offset of the offending section or token.
    offset: usize,
}

impl StructuralError {
    pub(crate) fn new(msg: &'static str, offset: usize) -> Self {
        StructuralError { msg, offset }
    }

    /// Returns the byte offset of the offending section.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.msg, self.offset)
    }
}

impl std::error::Error for StructuralError {}

//------------ RangeError ----------------------------------------------------

/// A shard range was malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeError {
    /// What the range needed at this point.
    expected: &'static str,

    /// The byte offset of the offending token.
    offset: usize,
}

impl RangeError {
    pub(crate) fn new(expected: &'static str, offset: usize) -> Self {
        RangeError { expected, offset }
    }

    /// Returns the byte offset of the offending token.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed shard range: expected {} at offset {}",
            self.expected, self.offset
        )
    }
}

impl std::error::Error for RangeError {}

//------------ Error ---------------------------------------------------------

/// Any error produced while compiling a zonefile.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The text could not be tokenized.
    Lex(LexError),

    /// The token sequence did not match the grammar.
    Parse(ParseError),

    /// A section was structurally incomplete.
    Structural(StructuralError),

    /// A shard range was malformed.
    Range(RangeError),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<StructuralError> for Error {
    fn from(err: StructuralError) -> Self {
        Error::Structural(err)
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Error::Range(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => err.fmt(f),
            Error::Parse(err) => err.fmt(f),
            Error::Structural(err) => err.fmt(f),
            Error::Range(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
