//! Tokenizing zonefile text.
//!
//! The lexer is a single ordered table of rules. At each position in the
//! input, the rules are tried top to bottom and the first whose pattern
//! matches wins; there is no longest-match resolution. The table starts
//! with the skip rules for whitespace and comments, followed by the token
//! classes in their mandatory priority order: punctuation, fixed keyword
//! tags, IPv4 and IPv6 literals, timestamps, integers, hex strings,
//! reserved `:word:` tags, and finally the generic string catch-all.
//!
//! Value classes only apply to a whole token: a match must end at
//! whitespace, structural punctuation, or the end of the input, and a
//! rule whose match stops short of that falls through to the classes
//! below it. This keeps `192.0.2.33` a single IPv4 token, makes a hex
//! string that happens to start with decimal digits lex as hex rather
//! than as an integer with trailing garbage, and lets `(aaa,)` split
//! into four tokens around the string. A value enclosed in double quotes
//! has the quotes stripped, which is also the way to force string
//! interpretation of something that would otherwise match an earlier
//! class.

use super::error::LexError;
use crate::base::Timestamp;
use core::fmt;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Token ---------------------------------------------------------

/// A single token of zonefile text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The kind of token, including any value it carries.
    kind: TokenKind,

    /// The byte offset of the token in the source text.
    pos: usize,
}

impl Token {
    fn new(kind: TokenKind, pos: usize) -> Self {
        Token { kind, pos }
    }

    /// Returns the kind of token.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Returns the byte offset of the token in the source text.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

//------------ TokenKind -----------------------------------------------------

/// The kinds of token, together with their values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// An opening parenthesis.
    LeftParen,

    /// A closing parenthesis.
    RightParen,

    /// An opening bracket.
    LeftBracket,

    /// A closing bracket.
    RightBracket,

    /// A comma.
    Comma,

    /// The `Zone` section tag.
    Zone,

    /// The `Shard` section tag.
    Shard,

    /// The `Assertion` section tag.
    Assertion,

    /// The `signature` tag.
    ///
    /// The tag is part of the keyword table for protocol completeness;
    /// the current grammar does not use it.
    Signature,

    /// The `ip4` object tag.
    Ip4,

    /// The `ip6` object tag.
    Ip6,

    /// The `name` object tag.
    Name,

    /// The `delegation` object tag.
    Delegation,

    /// The `redirection` object tag.
    Redirection,

    /// The `certificate` object tag.
    Certificate,

    /// The `infrakey` object tag.
    InfraKey,

    /// The `registrar` object tag.
    Registrar,

    /// The `registrant` object tag.
    Registrant,

    /// The `service` object tag.
    Service,

    /// The `ed25519` signature algorithm tag.
    Ed25519,

    /// The `ecdsa-p256` signature algorithm tag.
    EcdsaP256,

    /// A `:word:` tag not in the keyword table.
    ///
    /// Unknown tags lex successfully so that documents using newer tag
    /// types remain lexically parseable. The raw tag name is preserved.
    Reserved(String),

    /// An IPv4 address literal.
    Ipv4(Ipv4Addr),

    /// An IPv6 address literal.
    Ipv6(Ipv6Addr),

    /// A timestamp literal, converted to epoch seconds.
    Timestamp(Timestamp),

    /// A positive decimal integer.
    Integer(u64),

    /// A hex string of 2 to 128 digits, even length.
    Hex(String),

    /// Any other run of non-whitespace, non-punctuation characters.
    Str(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => f.write_str("`(`"),
            TokenKind::RightParen => f.write_str("`)`"),
            TokenKind::LeftBracket => f.write_str("`[`"),
            TokenKind::RightBracket => f.write_str("`]`"),
            TokenKind::Comma => f.write_str("`,`"),
            TokenKind::Zone => f.write_str("`Zone`"),
            TokenKind::Shard => f.write_str("`Shard`"),
            TokenKind::Assertion => f.write_str("`Assertion`"),
            TokenKind::Signature => f.write_str("`signature`"),
            TokenKind::Ip4 => f.write_str("`ip4`"),
            TokenKind::Ip6 => f.write_str("`ip6`"),
            TokenKind::Name => f.write_str("`name`"),
            TokenKind::Delegation => f.write_str("`delegation`"),
            TokenKind::Redirection => f.write_str("`redirection`"),
            TokenKind::Certificate => f.write_str("`certificate`"),
            TokenKind::InfraKey => f.write_str("`infrakey`"),
            TokenKind::Registrar => f.write_str("`registrar`"),
            TokenKind::Registrant => f.write_str("`registrant`"),
            TokenKind::Service => f.write_str("`service`"),
            TokenKind::Ed25519 => f.write_str("`ed25519`"),
            TokenKind::EcdsaP256 => f.write_str("`ecdsa-p256`"),
            TokenKind::Reserved(name) => write!(f, "reserved tag `:{}:`", name),
            TokenKind::Ipv4(addr) => write!(f, "IPv4 address {}", addr),
            TokenKind::Ipv6(addr) => write!(f, "IPv6 address {}", addr),
            TokenKind::Timestamp(when) => write!(f, "timestamp {}", when),
            TokenKind::Integer(value) => write!(f, "integer {}", value),
            TokenKind::Hex(value) => write!(f, "hex string {}", value),
            TokenKind::Str(value) => write!(f, "string \"{}\"", value),
        }
    }
}

//------------ Lexer ---------------------------------------------------------

/// A zonefile tokenizer.
///
/// A value of this type holds the compiled rule table. It can be reused
/// for any number of inputs. The free function [`tokenize`] is a
/// convenience for one-shot use.
pub struct Lexer {
    /// The rules in match priority order.
    rules: Vec<Rule>,
}

impl Lexer {
    /// Creates a lexer with the compiled rule table.
    pub fn new() -> Self {
        Lexer { rules: rules() }
    }

    /// Tokenizes the given text.
    ///
    /// Consumes the entire input or fails with a [`LexError`] naming the
    /// first offset that no rule matched or whose value was invalid.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        'input: while pos < text.len() {
            let rest = &text[pos..];
            for rule in &self.rules {
                let found = match rule.pattern.find(rest) {
                    Some(found) => found,
                    None => continue,
                };
                match rule.action {
                    Action::Skip => {}
                    Action::Keyword(ref kind) => {
                        tokens.push(Token::new(kind.clone(), pos));
                    }
                    Action::Extract(extract) => {
                        // Value classes must cover a whole token; a
                        // partial match falls through to later rules.
                        if !at_boundary(rest, found.end()) {
                            continue;
                        }
                        tokens.push(Token::new(
                            extract(found.as_str(), pos)?,
                            pos,
                        ));
                    }
                }
                pos += found.end();
                continue 'input;
            }
            return Err(LexError::unmatched(pos));
        }
        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes the given text with a fresh [`Lexer`].
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new().tokenize(text)
}

/// Returns whether a match ending at `end` ends a token.
fn at_boundary(rest: &str, end: usize) -> bool {
    match rest[end..].chars().next() {
        None => true,
        Some(ch) => {
            ch.is_whitespace() || matches!(ch, '(' | ')' | '[' | ']' | ',')
        }
    }
}

//------------ Rule ----------------------------------------------------------

/// A single entry of the rule table.
struct Rule {
    /// The pattern, anchored to the start of the remaining input.
    pattern: Regex,

    /// What to do with a match.
    action: Action,
}

/// The action taken when a rule matches.
enum Action {
    /// Discard the match.
    Skip,

    /// Emit a token of this kind.
    Keyword(TokenKind),

    /// Emit a token carrying a value extracted from the match.
    Extract(fn(&str, usize) -> Result<TokenKind, LexError>),
}

impl Rule {
    fn skip(pattern: &str) -> Self {
        Rule { pattern: anchored(pattern), action: Action::Skip }
    }

    fn symbol(pattern: &str, kind: TokenKind) -> Self {
        Rule { pattern: anchored(pattern), action: Action::Keyword(kind) }
    }

    /// A fixed keyword tag, recognized together with trailing whitespace
    /// or the end of the input.
    fn keyword(word: &str, kind: TokenKind) -> Self {
        Rule {
            pattern: anchored(&format!("{}(?:\\s|$)", word)),
            action: Action::Keyword(kind),
        }
    }

    fn value(
        pattern: &str,
        extract: fn(&str, usize) -> Result<TokenKind, LexError>,
    ) -> Self {
        Rule { pattern: anchored(pattern), action: Action::Extract(extract) }
    }
}

fn anchored(pattern: &str) -> Regex {
    // All patterns are literals below; compiling them cannot fail.
    Regex::new(&format!("^(?:{})", pattern)).unwrap()
}

/// Builds the rule table in match priority order.
fn rules() -> Vec<Rule> {
    let mut rules = vec![
        Rule::skip(r"\s+"),
        Rule::skip(r"#[^\n]*"),
        Rule::symbol(r"\(", TokenKind::LeftParen),
        Rule::symbol(r"\)", TokenKind::RightParen),
        Rule::symbol(r"\[", TokenKind::LeftBracket),
        Rule::symbol(r"\]", TokenKind::RightBracket),
        Rule::symbol(r",", TokenKind::Comma),
    ];
    for (word, kind) in [
        ("Zone", TokenKind::Zone),
        ("Shard", TokenKind::Shard),
        ("Assertion", TokenKind::Assertion),
        ("signature", TokenKind::Signature),
        ("ip4", TokenKind::Ip4),
        ("ip6", TokenKind::Ip6),
        ("name", TokenKind::Name),
        ("delegation", TokenKind::Delegation),
        ("redirection", TokenKind::Redirection),
        ("certificate", TokenKind::Certificate),
        ("infrakey", TokenKind::InfraKey),
        ("registrar", TokenKind::Registrar),
        ("registrant", TokenKind::Registrant),
        ("service", TokenKind::Service),
        ("ed25519", TokenKind::Ed25519),
        ("ecdsa-p256", TokenKind::EcdsaP256),
    ] {
        rules.push(Rule::keyword(word, kind));
    }
    rules.extend([
        Rule::value(r"\d+\.\d+\.\d+\.\d+", extract_ip4),
        Rule::value(
            r"[0-9a-fA-F]{1,4}(?::[0-9a-fA-F]{1,4}){7}",
            extract_ip6,
        ),
        Rule::value(
            r"::(?:[0-9a-fA-F]{1,4}(?::[0-9a-fA-F]{1,4})*)?",
            extract_ip6,
        ),
        Rule::value(
            r"(?:[0-9a-fA-F]{1,4}:)+:(?:[0-9a-fA-F]{1,4}(?::[0-9a-fA-F]{1,4})*)?",
            extract_ip6,
        ),
        Rule::value(
            r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}",
            extract_timestamp,
        ),
        Rule::value(r"\d+", extract_integer),
        Rule::value(r"(?:[0-9a-fA-F]{2}){1,64}", extract_hex),
        Rule::value(r":[a-zA-Z][a-zA-Z0-9_]*:", extract_reserved),
        Rule::value(r"[^\s()\[\],]+", extract_string),
    ]);
    rules
}

//------------ Value extractors ----------------------------------------------

fn extract_ip4(text: &str, pos: usize) -> Result<TokenKind, LexError> {
    text.parse::<Ipv4Addr>()
        .map(TokenKind::Ipv4)
        .map_err(|_| LexError::bad_ip4(pos))
}

fn extract_ip6(text: &str, pos: usize) -> Result<TokenKind, LexError> {
    text.parse::<Ipv6Addr>()
        .map(TokenKind::Ipv6)
        .map_err(|_| LexError::bad_ip6(pos))
}

fn extract_timestamp(text: &str, pos: usize) -> Result<TokenKind, LexError> {
    // The pattern guarantees fixed-width ASCII digit fields.
    let field = |range: core::ops::Range<usize>| {
        text[range].parse::<u16>().map_err(|_| LexError::bad_timestamp(pos))
    };
    Timestamp::from_ymd_hms(
        field(0..4)? as i32,
        field(5..7)? as u8,
        field(8..10)? as u8,
        field(11..13)? as u8,
        field(14..16)? as u8,
        field(17..19)? as u8,
    )
    .map(TokenKind::Timestamp)
    .map_err(|_| LexError::bad_timestamp(pos))
}

fn extract_integer(text: &str, pos: usize) -> Result<TokenKind, LexError> {
    text.parse::<u64>()
        .map(TokenKind::Integer)
        .map_err(|_| LexError::bad_integer(pos))
}

fn extract_hex(text: &str, _pos: usize) -> Result<TokenKind, LexError> {
    Ok(TokenKind::Hex(text.into()))
}

fn extract_reserved(text: &str, _pos: usize) -> Result<TokenKind, LexError> {
    Ok(TokenKind::Reserved(text[1..text.len() - 1].into()))
}

fn extract_string(text: &str, _pos: usize) -> Result<TokenKind, LexError> {
    let value = if text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
    {
        &text[1..text.len() - 1]
    } else {
        text
    };
    Ok(TokenKind::Str(value.into()))
}

//============ Tests =========================================================
