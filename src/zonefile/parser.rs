//! Parsing token sequences into documents.
//!
//! The parser is recursive descent with single-token lookahead and no
//! backtracking. It holds an immutable token slice and an advancing
//! cursor; each grammar rule consumes a prefix of the remaining tokens
//! and returns the constructed node. Any mismatch aborts the whole parse
//! with an error naming the expectation, what was found, and the source
//! offset; there is no recovery.
//!
//! The zone name and context declared by a top-level section are copied
//! into every shard and assertion nested inside it. Bare shards and
//! assertions at the top level instead carry their own explicit zone and
//! context, which must follow the section tag.

use super::error::{Error, ParseError, RangeError, StructuralError};
use super::lexer::{Token, TokenKind};
use crate::base::{
    Assertion, Document, KeyInfo, Object, Section, ServiceInfo, Shard,
    ShardRange, Signature, Timestamp, Zone, ZoneEntry,
};
use bytes::Bytes;
use crate::base::wire::SecAlg;

//------------ parse ---------------------------------------------------------

/// Parses a complete token sequence into a document.
///
/// `source_len` is the length of the source text; it is used as the
/// reported position when the token sequence ends prematurely.
pub fn parse(tokens: &[Token], source_len: usize) -> Result<Document, Error> {
    Parser::new(tokens, source_len).document()
}

//------------ Parser --------------------------------------------------------

/// The cursor state of a single parser run.
struct Parser<'a> {
    /// The complete token sequence.
    tokens: &'a [Token],

    /// The index of the next token to consume.
    cursor: usize,

    /// The length of the source text, reported on premature end.
    end: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], end: usize) -> Self {
        Parser { tokens, cursor: 0, end }
    }

    //--- Cursor primitives

    /// Returns the next token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the next token without consuming it.
    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.peek().map(Token::kind)
    }

    /// Consumes the next token.
    fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Returns the source offset of the next token or of the input end.
    fn offset(&self) -> usize {
        self.peek().map_or(self.end, Token::pos)
    }

    /// Builds a parse error describing the current token.
    fn unexpected(&self, expected: &'static str) -> Error {
        match self.peek() {
            Some(token) => ParseError::new(
                expected,
                token.kind().to_string(),
                token.pos(),
            )
            .into(),
            None => ParseError::eof(expected, self.end).into(),
        }
    }

    /// Consumes the next token if `matches` accepts its kind.
    fn eat(&mut self, matches: fn(&TokenKind) -> bool) -> bool {
        match self.peek_kind() {
            Some(kind) if matches(kind) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes the next token, requiring `matches` to accept its kind.
    fn expect(
        &mut self,
        expected: &'static str,
        matches: fn(&TokenKind) -> bool,
    ) -> Result<(), Error> {
        if self.eat(matches) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consumes a string-like token: a generic string, or a hex or
    /// integer token reinterpreted as text.
    fn string_like(&mut self, expected: &'static str) -> Result<String, Error> {
        let value = match self.peek_kind() {
            Some(TokenKind::Str(value)) => value.clone(),
            Some(TokenKind::Hex(value)) => value.clone(),
            Some(TokenKind::Integer(value)) => value.to_string(),
            _ => return Err(self.unexpected(expected)),
        };
        self.advance();
        Ok(value)
    }

    /// Consumes string-like tokens as long as there are any.
    fn string_likes(&mut self) -> Vec<String> {
        let mut values = Vec::new();
        while matches!(
            self.peek_kind(),
            Some(
                TokenKind::Str(_)
                    | TokenKind::Hex(_)
                    | TokenKind::Integer(_)
            )
        ) {
            // The peeked token is string-like, so this cannot fail.
            match self.string_like("string") {
                Ok(value) => values.push(value),
                Err(_) => break,
            }
        }
        values
    }

    //--- document

    /// `document := section+`
    fn document(mut self) -> Result<Document, Error> {
        let mut doc = Document::new();
        loop {
            match self.peek_kind() {
                None => break,
                Some(TokenKind::Zone) => {
                    let zone = self.zone()?;
                    doc.push(Section::Zone(zone));
                }
                Some(TokenKind::Shard) => {
                    let shard = self.bare_shard()?;
                    doc.push(Section::Shard(shard));
                }
                Some(TokenKind::Assertion) => {
                    let assertion = self.bare_assertion()?;
                    doc.push(Section::Assertion(assertion));
                }
                Some(_) => {
                    return Err(self.unexpected(
                        "`Zone`, `Shard`, or `Assertion`",
                    ));
                }
            }
        }
        if doc.is_empty() {
            return Err(ParseError::eof("at least one section", self.end).into());
        }
        Ok(doc)
    }

    //--- zone

    /// `zone := ZONE name context '[' (shard | assertion)* ']' signatures?`
    fn zone(&mut self) -> Result<Zone, Error> {
        self.advance(); // the `Zone` tag
        let name = self.string_like("zone name")?;
        let context = self.string_like("zone context")?;
        self.expect("`[`", |kind| matches!(kind, TokenKind::LeftBracket))?;
        let mut zone = Zone::new(name, context);
        loop {
            match self.peek_kind() {
                Some(TokenKind::RightBracket) => {
                    self.advance();
                    break;
                }
                Some(TokenKind::Shard) => {
                    let shard =
                        self.shard(zone.name().into(), zone.context().into())?;
                    zone.push_entry(ZoneEntry::Shard(shard));
                }
                Some(TokenKind::Assertion) => {
                    let assertion = self
                        .assertion(zone.name().into(), zone.context().into())?;
                    zone.push_entry(ZoneEntry::Assertion(assertion));
                }
                Some(_) => {
                    return Err(
                        self.unexpected("`Shard`, `Assertion`, or `]`")
                    );
                }
                None => {
                    return Err(ParseError::eof("`]`", self.end).into());
                }
            }
        }
        zone.set_signatures(self.opt_signatures()?);
        Ok(zone)
    }

    //--- shard

    /// `bareShard := SHARD zone context shardBody`
    fn bare_shard(&mut self) -> Result<Shard, Error> {
        let tag_pos = self.offset();
        self.advance(); // the `Shard` tag
        let mut names = self.string_likes();
        if names.len() != 2 {
            return Err(StructuralError::new(
                "bare shard requires an explicit zone and context",
                tag_pos,
            )
            .into());
        }
        let context = names.pop().expect("two names");
        let zone = names.pop().expect("two names");
        self.shard_body(zone, context)
    }

    /// `shard := SHARD shardBody` with inherited zone and context.
    fn shard(&mut self, zone: String, context: String) -> Result<Shard, Error> {
        self.advance(); // the `Shard` tag
        self.shard_body(zone, context)
    }

    /// `shardBody := range? '[' assertion* ']' signatures?`
    fn shard_body(
        &mut self,
        zone: String,
        context: String,
    ) -> Result<Shard, Error> {
        let range = if matches!(self.peek_kind(), Some(TokenKind::LeftParen)) {
            self.range()?
        } else {
            ShardRange::default()
        };
        self.expect("`[`", |kind| matches!(kind, TokenKind::LeftBracket))?;
        let mut shard = Shard::new(zone, context, range);
        loop {
            match self.peek_kind() {
                Some(TokenKind::RightBracket) => {
                    self.advance();
                    break;
                }
                Some(TokenKind::Assertion) => {
                    let assertion = self.assertion(
                        shard.zone().into(),
                        shard.context().into(),
                    )?;
                    shard.push_assertion(assertion);
                }
                Some(_) => {
                    return Err(self.unexpected("`Assertion` or `]`"));
                }
                None => {
                    return Err(ParseError::eof("`]`", self.end).into());
                }
            }
        }
        shard.set_signatures(self.opt_signatures()?);
        Ok(shard)
    }

    /// `range := '(' rangeEnd ',' rangeEnd ')'`
    ///
    /// An absent end is marked by an immediately following `,` or `)`.
    fn range(&mut self) -> Result<ShardRange, Error> {
        self.advance(); // `(`
        let lower = if matches!(self.peek_kind(), Some(TokenKind::Comma)) {
            None
        } else {
            Some(self.range_end()?)
        };
        if !self.eat(|kind| matches!(kind, TokenKind::Comma)) {
            return Err(self.range_fault("`,`"));
        }
        let upper = if matches!(self.peek_kind(), Some(TokenKind::RightParen)) {
            None
        } else {
            Some(self.range_end()?)
        };
        if !self.eat(|kind| matches!(kind, TokenKind::RightParen)) {
            return Err(self.range_fault("`)`"));
        }
        Ok(ShardRange::new(lower, upper))
    }

    /// Consumes one range end.
    fn range_end(&mut self) -> Result<String, Error> {
        match self.peek_kind() {
            Some(
                TokenKind::Str(_) | TokenKind::Hex(_) | TokenKind::Integer(_),
            ) => self.string_like("range end"),
            _ => Err(self.range_fault("a range end, `,`, or `)`")),
        }
    }

    /// Builds the error for a fault inside a shard range.
    ///
    /// A premature end of input stays a parse error naming the missing
    /// token; anything else is a range error.
    fn range_fault(&self, expected: &'static str) -> Error {
        match self.peek() {
            Some(token) => RangeError::new(expected, token.pos()).into(),
            None => ParseError::eof(expected, self.end).into(),
        }
    }

    //--- assertion

    /// `bareAssertion := ASSERTION zone context subject '[' object* ']'
    /// signatures?`
    fn bare_assertion(&mut self) -> Result<Assertion, Error> {
        let tag_pos = self.offset();
        self.advance(); // the `Assertion` tag
        let mut names = self.string_likes();
        if names.len() != 3 {
            return Err(StructuralError::new(
                "bare assertion requires an explicit zone and context \
                 before the subject",
                tag_pos,
            )
            .into());
        }
        let subject = names.pop().expect("three names");
        let context = names.pop().expect("three names");
        let zone = names.pop().expect("three names");
        self.assertion_body(zone, context, subject)
    }

    /// `assertion := ASSERTION subject '[' object* ']' signatures?` with
    /// inherited zone and context.
    fn assertion(
        &mut self,
        zone: String,
        context: String,
    ) -> Result<Assertion, Error> {
        self.advance(); // the `Assertion` tag
        let subject = self.string_like("subject name")?;
        self.assertion_body(zone, context, subject)
    }

    fn assertion_body(
        &mut self,
        zone: String,
        context: String,
        subject: String,
    ) -> Result<Assertion, Error> {
        self.expect("`[`", |kind| matches!(kind, TokenKind::LeftBracket))?;
        let mut assertion = Assertion::new(zone, context, subject);
        loop {
            match self.peek_kind() {
                Some(TokenKind::RightBracket) => {
                    self.advance();
                    break;
                }
                Some(_) => assertion.push_object(self.object()?),
                None => {
                    return Err(ParseError::eof("`]`", self.end).into());
                }
            }
        }
        assertion.set_signatures(self.opt_signatures()?);
        Ok(assertion)
    }

    //--- objects

    /// `object := objectTag value...`; the value shape depends on the tag.
    fn object(&mut self) -> Result<Object, Error> {
        match self.peek_kind() {
            Some(TokenKind::Ip4) => {
                self.advance();
                self.ip4_value().map(Object::Ipv4)
            }
            Some(TokenKind::Ip6) => {
                self.advance();
                self.ip6_value().map(Object::Ipv6)
            }
            Some(TokenKind::Name) => {
                self.advance();
                self.string_like("a name").map(Object::Name)
            }
            Some(TokenKind::Redirection) => {
                self.advance();
                self.string_like("an authority server name")
                    .map(Object::Redirection)
            }
            Some(TokenKind::Delegation) => {
                self.advance();
                self.key_info().map(Object::Delegation)
            }
            Some(TokenKind::Certificate) => {
                self.advance();
                self.hex_value("certificate data").map(Object::CertInfo)
            }
            Some(TokenKind::Service) => {
                self.advance();
                self.service_info().map(Object::ServiceInfo)
            }
            Some(TokenKind::Registrar) => {
                self.advance();
                self.string_like("registrar information")
                    .map(Object::Registrar)
            }
            Some(TokenKind::Registrant) => {
                self.advance();
                self.string_like("registrant information")
                    .map(Object::Registrant)
            }
            Some(TokenKind::InfraKey) => {
                self.advance();
                self.key_info().map(Object::InfraKey)
            }
            _ => Err(self.unexpected("an object type tag or `]`")),
        }
    }

    /// Consumes an IPv4 address value.
    fn ip4_value(&mut self) -> Result<std::net::Ipv4Addr, Error> {
        match self.peek_kind() {
            Some(TokenKind::Ipv4(addr)) => {
                let addr = *addr;
                self.advance();
                Ok(addr)
            }
            _ => Err(self.unexpected("an IPv4 address")),
        }
    }

    /// Consumes an IPv6 address value.
    fn ip6_value(&mut self) -> Result<std::net::Ipv6Addr, Error> {
        match self.peek_kind() {
            Some(TokenKind::Ipv6(addr)) => {
                let addr = *addr;
                self.advance();
                Ok(addr)
            }
            _ => Err(self.unexpected("an IPv6 address")),
        }
    }

    /// Consumes a hex token and decodes it.
    fn hex_value(&mut self, expected: &'static str) -> Result<Bytes, Error> {
        match self.peek_kind() {
            Some(TokenKind::Hex(value)) => {
                // The lexer only produces even-length hex digits.
                let bytes = hex::decode(value).unwrap_or_default();
                self.advance();
                Ok(Bytes::from(bytes))
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Consumes an algorithm tag and a hex public key.
    fn key_info(&mut self) -> Result<KeyInfo, Error> {
        let algorithm = match self.peek_kind() {
            Some(TokenKind::Ed25519) => SecAlg::Ed25519,
            Some(TokenKind::EcdsaP256) => SecAlg::EcdsaP256,
            _ => return Err(self.unexpected("a signature algorithm tag")),
        };
        self.advance();
        let key = self.hex_value("public key data")?;
        Ok(KeyInfo::new(algorithm, key))
    }

    /// Consumes a host name, port, and priority.
    fn service_info(&mut self) -> Result<ServiceInfo, Error> {
        let host = self.string_like("a service host name")?;
        let port = self.port_value("a transport port")?;
        let priority = self.port_value("a service priority")?;
        Ok(ServiceInfo::new(host, port, priority))
    }

    /// Consumes a 16 bit integer value.
    fn port_value(&mut self, expected: &'static str) -> Result<u16, Error> {
        match self.peek_kind() {
            Some(TokenKind::Integer(value)) => match u16::try_from(*value) {
                Ok(value) => {
                    self.advance();
                    Ok(value)
                }
                Err(_) => Err(self.unexpected(expected)),
            },
            _ => Err(self.unexpected(expected)),
        }
    }

    //--- signatures

    /// `signatures := '(' signature* ')' | ε`
    fn opt_signatures(&mut self) -> Result<Vec<Signature>, Error> {
        if !matches!(self.peek_kind(), Some(TokenKind::LeftParen)) {
            return Ok(Vec::new());
        }
        self.advance(); // `(`
        let mut signatures = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::RightParen) => {
                    self.advance();
                    break;
                }
                Some(_) => signatures.push(self.signature()?),
                None => {
                    return Err(ParseError::eof("`)`", self.end).into());
                }
            }
        }
        Ok(signatures)
    }

    /// `signature := algorithmTag validity validity hex`
    ///
    /// Faults inside a signature block are structural errors.
    fn signature(&mut self) -> Result<Signature, Error> {
        let algorithm = match self.peek_kind() {
            Some(TokenKind::Ed25519) => SecAlg::Ed25519,
            Some(TokenKind::EcdsaP256) => SecAlg::EcdsaP256,
            _ => {
                return Err(StructuralError::new(
                    "signature requires an algorithm tag",
                    self.offset(),
                )
                .into());
            }
        };
        self.advance();
        let valid_since = self.validity_time()?;
        let valid_until = self.validity_time()?;
        let bytes = match self.peek_kind() {
            Some(TokenKind::Hex(value)) => {
                // The lexer only produces even-length hex digits.
                let bytes = hex::decode(value).unwrap_or_default();
                self.advance();
                Bytes::from(bytes)
            }
            _ => {
                return Err(StructuralError::new(
                    "signature requires hex signature data",
                    self.offset(),
                )
                .into());
            }
        };
        Ok(Signature::new(
            algorithm,
            valid_since,
            valid_until,
            0,
            Some(bytes),
        ))
    }

    /// Consumes a validity time: a timestamp literal or a raw epoch
    /// seconds integer.
    fn validity_time(&mut self) -> Result<Timestamp, Error> {
        match self.peek_kind() {
            Some(TokenKind::Timestamp(when)) => {
                let when = *when;
                self.advance();
                Ok(when)
            }
            Some(TokenKind::Integer(secs)) => {
                let when = Timestamp::from_secs(*secs as i64);
                self.advance();
                Ok(when)
            }
            _ => Err(StructuralError::new(
                "signature requires a validity time",
                self.offset(),
            )
            .into()),
        }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::zonefile::error::Error;
    use crate::zonefile::lexer::tokenize;

    fn parse_str(text: &str) -> Result<Document, Error> {
        parse(&tokenize(text).unwrap(), text.len())
    }

    #[test]
    fn concrete_scenario() {
        let doc = parse_str(
            "Zone \"example.com.\" \".\" [ Shard [ \
             Assertion \"aaa\" [ ip4 192.0.2.33 ip6 2001:db8::33 ] \
             Assertion \"aab\" [ ip4 192.0.3.33 ] ] ]",
        )
        .unwrap();

        assert_eq!(doc.sections().len(), 1);
        let zone = match &doc.sections()[0] {
            Section::Zone(zone) => zone,
            other => panic!("expected a zone, got {:?}", other),
        };
        assert_eq!(zone.name(), "example.com.");
        assert_eq!(zone.context(), ".");
        assert_eq!(zone.content().len(), 1);

        let shard = match &zone.content()[0] {
            ZoneEntry::Shard(shard) => shard,
            other => panic!("expected a shard, got {:?}", other),
        };
        assert_eq!(shard.zone(), "example.com.");
        assert_eq!(shard.context(), ".");
        assert_eq!(shard.range().lower(), None);
        assert_eq!(shard.range().upper(), None);

        let subjects: Vec<_> =
            shard.content().iter().map(Assertion::subject).collect();
        assert_eq!(subjects, ["aaa", "aab"]);
        assert_eq!(shard.content()[0].objects().len(), 2);
        assert_eq!(shard.content()[1].objects().len(), 1);
        for assertion in shard.content() {
            assert_eq!(assertion.zone(), "example.com.");
            assert_eq!(assertion.context(), ".");
            assert!(assertion.signatures().is_empty());
        }
        assert_eq!(
            shard.content()[0].objects()[0],
            Object::Ipv4("192.0.2.33".parse().unwrap())
        );
        assert_eq!(
            shard.content()[0].objects()[1],
            Object::Ipv6("2001:db8::33".parse().unwrap())
        );
    }

    #[test]
    fn shard_ranges() {
        let doc = parse_str(
            "Zone z . [ Shard (aaa,) [ ] Shard (,bbb) [ ] \
             Shard (aaa,bbb) [ ] Shard ( , ) [ ] ]",
        )
        .unwrap();
        let zone = match &doc.sections()[0] {
            Section::Zone(zone) => zone,
            _ => unreachable!(),
        };
        let ranges: Vec<_> = zone
            .content()
            .iter()
            .map(|entry| match entry {
                ZoneEntry::Shard(shard) => {
                    (shard.range().lower(), shard.range().upper())
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(
            ranges,
            [
                (Some("aaa"), None),
                (None, Some("bbb")),
                (Some("aaa"), Some("bbb")),
                (None, None),
            ]
        );
    }

    #[test]
    fn order_is_preserved() {
        let doc = parse_str(
            "Zone z . [ \
             Shard [ Assertion a1 [ ] Assertion a2 [ ] ] \
             Shard [ Assertion b1 [ ] Assertion b2 [ ] ] ]",
        )
        .unwrap();
        let zone = match &doc.sections()[0] {
            Section::Zone(zone) => zone,
            _ => unreachable!(),
        };
        let mut subjects = Vec::new();
        for entry in zone.content() {
            match entry {
                ZoneEntry::Shard(shard) => {
                    for assertion in shard.content() {
                        subjects.push(assertion.subject().to_string());
                    }
                }
                _ => unreachable!(),
            }
        }
        assert_eq!(subjects, ["a1", "a2", "b1", "b2"]);
    }

    #[test]
    fn bare_sections() {
        let doc = parse_str(
            "Shard example.com. . (aaa,bbb) [ Assertion aab [ ] ] \
             Assertion example.com. . www [ ip4 192.0.2.1 ]",
        )
        .unwrap();
        assert_eq!(doc.sections().len(), 2);
        match &doc.sections()[0] {
            Section::Shard(shard) => {
                assert_eq!(shard.zone(), "example.com.");
                assert_eq!(shard.context(), ".");
                assert_eq!(shard.content()[0].zone(), "example.com.");
            }
            other => panic!("expected a shard, got {:?}", other),
        }
        match &doc.sections()[1] {
            Section::Assertion(assertion) => {
                assert_eq!(assertion.zone(), "example.com.");
                assert_eq!(assertion.context(), ".");
                assert_eq!(assertion.subject(), "www");
            }
            other => panic!("expected an assertion, got {:?}", other),
        }
    }

    #[test]
    fn bare_shard_without_context_is_structural() {
        let err = parse_str("Shard example.com. [ ]").unwrap_err();
        assert!(matches!(err, Error::Structural(_)), "got {:?}", err);
    }

    #[test]
    fn bare_assertion_without_zone_context_is_structural() {
        let err = parse_str("Assertion www [ ]").unwrap_err();
        assert!(matches!(err, Error::Structural(_)), "got {:?}", err);
    }

    #[test]
    fn missing_close_bracket_is_parse_error() {
        let err =
            parse_str("Zone z . [ Assertion a [ ip4 192.0.2.33 ]")
                .unwrap_err();
        match err {
            Error::Parse(err) => assert_eq!(err.expected(), "`]`"),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_range_is_range_error() {
        let err = parse_str("Zone z . [ Shard (aaa) [ ] ]").unwrap_err();
        assert!(matches!(err, Error::Range(_)), "got {:?}", err);
    }

    #[test]
    fn reserved_tag_is_rejected_at_parse_time() {
        // The tag lexes fine; the grammar rejects it.
        let err = parse_str("Zone z . [ Assertion a [ :foo: ] ]").unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn empty_input_is_parse_error() {
        assert!(matches!(parse_str(""), Err(Error::Parse(_))));
    }

    #[test]
    fn signatures_blocks() {
        let doc = parse_str(
            "Zone z . [ Assertion a [ ip4 192.0.2.33 ] \
             ( ed25519 2021-01-01T00:00:00 2022-01-01T00:00:00 abcd ) ] \
             ( ecdsa-p256 1000 2000 ffee )",
        )
        .unwrap();
        let zone = match &doc.sections()[0] {
            Section::Zone(zone) => zone,
            _ => unreachable!(),
        };
        assert_eq!(zone.signatures().len(), 1);
        let zone_sig = &zone.signatures()[0];
        assert_eq!(zone_sig.algorithm(), SecAlg::EcdsaP256);
        assert_eq!(zone_sig.valid_since(), Timestamp::from_secs(1000));
        assert_eq!(zone_sig.valid_until(), Timestamp::from_secs(2000));
        assert_eq!(
            zone_sig.bytes().map(|bytes| bytes.as_ref()),
            Some(b"\xff\xee".as_ref())
        );

        let assertion = match &zone.content()[0] {
            ZoneEntry::Assertion(assertion) => assertion,
            _ => unreachable!(),
        };
        assert_eq!(assertion.signatures().len(), 1);
        let sig = &assertion.signatures()[0];
        assert_eq!(sig.algorithm(), SecAlg::Ed25519);
        assert_eq!(sig.key_space(), 0);
        assert_eq!(
            sig.valid_since(),
            Timestamp::from_ymd_hms(2021, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn malformed_signature_block_is_structural() {
        let err = parse_str(
            "Zone z . [ ] ( ed25519 not-a-time 2000 abcd )",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Structural(_)), "got {:?}", err);
    }

    #[test]
    fn all_object_types() {
        let doc = parse_str(
            "Assertion example.com. . multi [ \
             name www.example.com. \
             redirection ns.example.net. \
             delegation ed25519 \
             d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a \
             certificate deadbeef \
             service mx.example.com. 25 10 \
             registrar acme-registrar \
             registrant acme-corp \
             infrakey ecdsa-p256 c0ffee00 \
             ]",
        )
        .unwrap();
        let assertion = match &doc.sections()[0] {
            Section::Assertion(assertion) => assertion,
            _ => unreachable!(),
        };
        assert_eq!(assertion.objects().len(), 8);
        assert_eq!(
            assertion.objects()[0],
            Object::Name("www.example.com.".into())
        );
        match &assertion.objects()[2] {
            Object::Delegation(key) => {
                assert_eq!(key.algorithm(), SecAlg::Ed25519);
                assert_eq!(key.key().len(), 32);
            }
            other => panic!("expected a delegation, got {:?}", other),
        }
        match &assertion.objects()[4] {
            Object::ServiceInfo(info) => {
                assert_eq!(info.host(), "mx.example.com.");
                assert_eq!(info.port(), 25);
                assert_eq!(info.priority(), 10);
            }
            other => panic!("expected service info, got {:?}", other),
        }
    }
}
