// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Zone file parser.
//!
//! A line-oriented state machine over the tokenizer's output. Each logical
//! line is an owner, optional TTL and class (in either order), a type, and
//! one or more RDATA values. `$ORIGIN` and `$TTL` directives adjust the
//! parser state between records.

use std::iter::Peekable;

use crate::domain::Domain;
use crate::error::{ParserError, RecordError};
use crate::rr::{self, Record, RrClass, RrType};
use crate::tokenizer::{Position, Token, TokenKind, Tokenizer};

use super::Zone;

/// What the parser expects next on the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Want {
    /// Start of line: owner name, directive, or nothing.
    Owner,
    /// After the owner: TTL, class, or type.
    Meta,
    /// After the type: RDATA until end of line.
    Rdata,
}

/// Fields gathered for the record on the current line.
#[derive(Debug)]
struct Line {
    want: Want,
    start: Position,
    owner: Option<Domain>,
    ttl: Option<u32>,
    class: Option<RrClass>,
    rtype: Option<RrType>,
    rdata: Vec<String>,
}

impl Line {
    fn new() -> Self {
        Self {
            want: Want::Owner,
            start: Position::new(1, 1),
            owner: None,
            ttl: None,
            class: None,
            rtype: None,
            rdata: Vec::new(),
        }
    }
}

pub struct ZoneParser<'a> {
    tokens: Peekable<Tokenizer<'a>>,
    zone: Zone,
    class: RrClass,
    origin: Domain,
    default_ttl: Option<u32>,
    last_ttl: Option<u32>,
    last_owner: Option<Domain>,
    line: Line,
}

impl<'a> ZoneParser<'a> {
    pub fn new(text: &'a str, name: Domain, class: RrClass) -> Self {
        let zone = Zone::new(name);
        let origin = zone.name().clone();
        Self {
            tokens: Tokenizer::new(text).peekable(),
            zone,
            class,
            origin,
            default_ttl: None,
            last_ttl: None,
            last_owner: None,
            line: Line::new(),
        }
    }

    /// TTL for records before the first `$TTL` directive.
    pub fn with_default_ttl(mut self, ttl: Option<u32>) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Consume all tokens and return the finished zone.
    pub fn parse(mut self) -> Result<Zone, ParserError> {
        while let Some(token) = self.tokens.next() {
            let token = token?;
            let position = token.position;
            match token.kind {
                TokenKind::Comment(_) => {}
                TokenKind::Space(_) => self.leading_space(position)?,
                TokenKind::Word(word) => self.word(word, position)?,
                TokenKind::String(s) => self.string(s, position)?,
                TokenKind::Eol => self.end_of_line(position, false)?,
                TokenKind::Eof => {
                    self.end_of_line(position, true)?;
                    break;
                }
            }
        }

        tracing::debug!(
            zone = %self.zone.name(),
            records = self.zone.len(),
            "parsed zone"
        );
        Ok(self.zone)
    }

    /// True if the next token is a word that is not a directive.
    fn next_is_record_word(&mut self) -> bool {
        matches!(
            self.tokens.peek(),
            Some(Ok(Token {
                kind: TokenKind::Word(word),
                ..
            })) if !word.starts_with('$')
        )
    }

    /// Leading whitespace before a word means "same owner as before".
    /// Before a directive, a comment, or nothing it is just indentation.
    fn leading_space(&mut self, position: Position) -> Result<(), ParserError> {
        if self.line.want != Want::Owner || !self.next_is_record_word() {
            return Ok(());
        }
        let owner = self.last_owner.clone().ok_or_else(|| ParserError::MissingData {
            field: "owner".to_string(),
            position,
        })?;
        self.line.start = position;
        self.line.owner = Some(owner);
        self.line.want = Want::Meta;
        Ok(())
    }

    fn word(&mut self, word: String, position: Position) -> Result<(), ParserError> {
        match self.line.want {
            Want::Owner if word.starts_with('$') => self.directive(word, position),
            Want::Owner => {
                let owner = self.resolve(&word, position)?;
                self.line.start = position;
                self.line.owner = Some(owner);
                self.line.want = Want::Meta;
                Ok(())
            }
            Want::Meta => self.meta(word, position),
            Want::Rdata => {
                self.line.rdata.push(word);
                Ok(())
            }
        }
    }

    fn meta(&mut self, word: String, position: Position) -> Result<(), ParserError> {
        if self.line.ttl.is_none() && word.starts_with(|c: char| c.is_ascii_digit()) {
            let ttl = parse_ttl(&word).ok_or(ParserError::InvalidTtl {
                value: word,
                position,
            })?;
            self.line.ttl = Some(ttl);
        } else if rr::is_type(&word) {
            let rtype = word
                .parse::<RrType>()
                .map_err(|source| ParserError::Record { source, position })?;
            self.line.rtype = Some(rtype);
            self.line.want = Want::Rdata;
        } else if self.line.class.is_none() && rr::is_class(&word) {
            let class = word
                .parse::<RrClass>()
                .map_err(|source| ParserError::Record { source, position })?;
            self.line.class = Some(class);
        } else {
            return Err(ParserError::UnexpectedToken {
                token: word,
                position,
            });
        }
        Ok(())
    }

    fn string(&mut self, s: String, position: Position) -> Result<(), ParserError> {
        if self.line.want != Want::Rdata {
            return Err(ParserError::UnexpectedToken { token: s, position });
        }
        self.line.rdata.push(s);
        Ok(())
    }

    fn end_of_line(&mut self, position: Position, eof: bool) -> Result<(), ParserError> {
        match self.line.want {
            Want::Owner => {}
            Want::Rdata if !self.line.rdata.is_empty() => self.compile()?,
            Want::Meta | Want::Rdata => {
                return Err(if eof {
                    ParserError::UnexpectedEof { position }
                } else {
                    ParserError::UnexpectedEol { position }
                });
            }
        }
        self.line = Line::new();
        Ok(())
    }

    fn compile(&mut self) -> Result<(), ParserError> {
        let line = std::mem::replace(&mut self.line, Line::new());
        let start = line.start;
        let owner = line.owner.ok_or_else(|| ParserError::MissingData {
            field: "owner".to_string(),
            position: start,
        })?;
        let rtype = line.rtype.ok_or_else(|| ParserError::MissingData {
            field: "type".to_string(),
            position: start,
        })?;
        let class = line.class.unwrap_or(self.class);
        if line.ttl.is_some() {
            self.last_ttl = line.ttl;
        }
        let ttl = line.ttl.or(self.default_ttl).or(self.last_ttl);

        let record = Record::from_values(rtype, owner.clone(), class, ttl, line.rdata).map_err(
            |source| match source {
                RecordError::MissingField(field) => ParserError::MissingData {
                    field: field.to_string(),
                    position: start,
                },
                source => ParserError::Record {
                    source,
                    position: start,
                },
            },
        )?;
        tracing::trace!(%record, "compiled record");

        self.zone.add_rr(record);
        self.last_owner = Some(owner);
        Ok(())
    }

    /// Complete a name against the current origin. `@` is the origin itself.
    fn resolve(&self, name: &str, position: Position) -> Result<Domain, ParserError> {
        let domain = if name == "@" {
            self.origin.clone()
        } else {
            Domain::new(name, Some(&self.origin))
        };
        domain
            .validate()
            .map_err(|source| ParserError::Domain { source, position })?;
        Ok(domain)
    }

    /// Collect the rest of a directive line and apply it.
    fn directive(&mut self, name: String, position: Position) -> Result<(), ParserError> {
        // The tokenizer is fused, so consuming a trailing EOF here also ends
        // the outer loop.
        let mut args = Vec::new();
        for token in self.tokens.by_ref() {
            let token = token?;
            match token.kind {
                TokenKind::Word(word) | TokenKind::String(word) => args.push(word),
                TokenKind::Comment(_) | TokenKind::Space(_) => {}
                TokenKind::Eol | TokenKind::Eof => break,
            }
        }

        match name.to_ascii_uppercase().as_str() {
            "$ORIGIN" => {
                let arg = args.first().ok_or_else(|| ParserError::MissingData {
                    field: "origin".to_string(),
                    position,
                })?;
                self.origin = self.resolve(arg, position)?.to_absolute();
                tracing::debug!(origin = %self.origin, "origin changed");
            }
            "$TTL" => {
                let arg = args.first().ok_or_else(|| ParserError::MissingData {
                    field: "ttl".to_string(),
                    position,
                })?;
                let ttl = parse_ttl(arg).ok_or_else(|| ParserError::InvalidTtl {
                    value: arg.clone(),
                    position,
                })?;
                self.default_ttl = Some(ttl);
                if self.zone.default_ttl().is_none() {
                    self.zone.set_default_ttl(Some(ttl));
                }
                tracing::debug!(ttl, "default TTL set");
            }
            _ => {
                return Err(ParserError::UnsupportedDirective {
                    directive: name,
                    position,
                });
            }
        }
        Ok(())
    }
}

/// Parse a TTL: plain seconds, or BIND-style units (`1h30m`, `2d`, `1W`).
pub fn parse_ttl(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().ok();
    }

    let mut total: u32 = 0;
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let unit: u32 = match c.to_ascii_lowercase() {
            's' => 1,
            'm' => 60,
            'h' => 3600,
            'd' => 86_400,
            'w' => 604_800,
            _ => return None,
        };
        if digits.is_empty() {
            return None;
        }
        let amount: u32 = digits.parse().ok()?;
        total = total.checked_add(amount.checked_mul(unit)?)?;
        digits.clear();
    }
    if !digits.is_empty() {
        return None;
    }
    Some(total)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
