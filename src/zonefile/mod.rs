//! Reading RAINS zonefiles.
//!
//! A zonefile is the textual representation of a zone's data: zones,
//! shards, and assertions with their objects, optionally already carrying
//! signatures. The [`compile`] function turns zonefile text into a
//! [`Document`]; lexing and parsing can also be driven separately
//! through the [`lexer`] and [`parser`] submodules.
//!
//! ```text
//! # The zone's data lives in the global context.
//! Zone "example.com." "." [
//!     Shard (aaa,aac) [
//!         Assertion "aaa" [
//!             ip4 192.0.2.33
//!             ip6 2001:db8::33
//!         ]
//!     ]
//! ]
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use self::error::Error;
pub use self::lexer::{tokenize, Lexer, Token, TokenKind};

use crate::base::Document;
use tracing::{debug, trace};

/// Compiles zonefile text into a document.
///
/// Fails with the error of the first stage that rejects the input; no
/// partial document is ever returned.
pub fn compile(text: &str) -> Result<Document, Error> {
    let tokens = lexer::tokenize(text)?;
    trace!("lexed zonefile into {} tokens", tokens.len());
    let doc = parser::parse(&tokens, text.len())?;
    debug!("compiled zonefile with {} top-level sections", doc.sections().len());
    Ok(doc)
}

//============ Tests =========================================================
