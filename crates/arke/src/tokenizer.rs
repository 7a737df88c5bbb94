// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Master file tokenizer.
//!
//! Splits zone file text into words, quoted strings, comments, and line
//! structure. Parentheses are consumed here: newlines inside them are
//! swallowed so a parenthesised record reaches the parser as one line.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::TokenizerError;

/// 1-based line and column of a token. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// End of a logical line (newline outside parentheses).
    Eol,
    /// End of input.
    Eof,
    /// Whitespace at the start of a line, with its length in characters.
    Space(usize),
    /// Comment text, including the leading `;`.
    Comment(String),
    /// Quoted string, including both quotes.
    String(String),
    Word(String),
}

impl TokenKind {
    /// Short uppercase name used in diagnostics and token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eol => "EOL",
            TokenKind::Eof => "EOF",
            TokenKind::Space(_) => "SPACE",
            TokenKind::Comment(_) => "COMMENT",
            TokenKind::String(_) => "STRING",
            TokenKind::Word(_) => "WORD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Text carried by the token, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Comment(s) | TokenKind::String(s) | TokenKind::Word(s) => Some(s),
            TokenKind::Eol | TokenKind::Eof | TokenKind::Space(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Space(n) => write!(f, "{} {} {}", self.position, self.kind.name(), n),
            TokenKind::Comment(s) | TokenKind::String(s) | TokenKind::Word(s) => {
                write!(f, "{} {} {:?}", self.position, self.kind.name(), s)
            }
            TokenKind::Eol | TokenKind::Eof => write!(f, "{} {}", self.position, self.kind.name()),
        }
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ';' | '(' | ')' | '"') || c.is_whitespace()
}

/// Iterator over the tokens of a zone file.
///
/// Yields `Err` at most once; after an error or the `Eof` token the
/// iterator is exhausted.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    depth: usize,
    start_of_line: bool,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            depth: 0,
            start_of_line: true,
            done: false,
        }
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.column += 1;
        Some(c)
    }

    fn eat_whitespace(&mut self) -> usize {
        let mut eaten = 0;
        while let Some(&c) = self.chars.peek() {
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.bump();
            eaten += 1;
        }
        eaten
    }

    fn quoted_string(&mut self) -> Result<String, TokenizerError> {
        let mut value = String::new();
        if let Some(quote) = self.bump() {
            value.push(quote);
        }
        let mut escaped = false;
        loop {
            match self.chars.peek().copied() {
                None => {
                    return Err(TokenizerError::UnexpectedEof {
                        position: self.here(),
                        depth: self.depth,
                    });
                }
                Some('\n') => {
                    return Err(TokenizerError::UnexpectedEol {
                        position: self.here(),
                    });
                }
                Some(c) => {
                    self.bump();
                    value.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        return Ok(value);
                    }
                }
            }
        }
    }

    fn comment(&mut self) -> String {
        let mut value = String::new();
        while let Some(&c) = self.chars.peek() {
            // Inside parentheses a `)` closes the group even mid-comment.
            if c == '\n' || (c == ')' && self.depth > 0) {
                break;
            }
            self.bump();
            value.push(c);
        }
        value
    }

    fn word(&mut self) -> String {
        let mut value = String::new();
        while let Some(&c) = self.chars.peek() {
            if is_delimiter(c) {
                break;
            }
            self.bump();
            value.push(c);
        }
        value
    }

    fn fail(&mut self, err: TokenizerError) -> Option<Result<Token, TokenizerError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, TokenizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let position = self.here();
            let Some(&c) = self.chars.peek() else {
                if self.depth > 0 {
                    return self.fail(TokenizerError::UnexpectedEof {
                        position,
                        depth: self.depth,
                    });
                }
                self.done = true;
                return Some(Ok(Token::new(TokenKind::Eof, position)));
            };

            match c {
                '\n' => {
                    self.chars.next();
                    self.line += 1;
                    self.column = 1;
                    self.start_of_line = true;
                    if self.depth == 0 {
                        return Some(Ok(Token::new(TokenKind::Eol, position)));
                    }
                }
                c if c.is_whitespace() => {
                    let eaten = self.eat_whitespace();
                    let leading = self.start_of_line && self.depth == 0;
                    self.start_of_line = false;
                    if leading {
                        return Some(Ok(Token::new(TokenKind::Space(eaten), position)));
                    }
                }
                '"' => {
                    self.start_of_line = false;
                    return match self.quoted_string() {
                        Ok(s) => Some(Ok(Token::new(TokenKind::String(s), position))),
                        Err(e) => self.fail(e),
                    };
                }
                ';' => {
                    self.start_of_line = false;
                    let comment = self.comment();
                    return Some(Ok(Token::new(TokenKind::Comment(comment), position)));
                }
                '(' => {
                    self.bump();
                    self.depth += 1;
                    self.start_of_line = false;
                }
                ')' => {
                    if self.depth == 0 {
                        return self.fail(TokenizerError::UnbalancedParentheses { position });
                    }
                    self.bump();
                    self.depth -= 1;
                    self.start_of_line = false;
                }
                _ => {
                    self.start_of_line = false;
                    let word = self.word();
                    return Some(Ok(Token::new(TokenKind::Word(word), position)));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole input, stopping at the first error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
    Tokenizer::new(input).collect()
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
