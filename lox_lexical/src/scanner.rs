//! Contains the [`Scanner`] state machine that drives the tokenization.

use lox_base::diagnostic::Handler;

use crate::{
    error::{self, UnexpectedCharacter, UnterminatedBlockComment, UnterminatedString},
    literal::Literal,
    token::{Token, TokenKind},
};

fn is_alpha(byte: u8) -> bool { byte.is_ascii_alphabetic() || byte == b'_' }

fn is_alpha_numeric(byte: u8) -> bool { is_alpha(byte) || byte.is_ascii_digit() }

/// Walks the source code once, byte by byte, and collects the tokens it recognizes.
///
/// `start` is the index of the first byte of the lexeme being scanned and `current` is the index
/// of the next unread byte. Tokens only ever start and end next to ASCII bytes, so slicing the
/// source between the two always lands on a character boundary.
pub(crate) struct Scanner<'s, 'h> {
    source: &'s str,
    handler: &'h dyn Handler<error::Error>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'s, 'h> Scanner<'s, 'h> {
    pub(crate) fn new(source: &'s str, handler: &'h dyn Handler<error::Error>) -> Self {
        Self {
            source,
            handler,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source code and returns the tokens terminated by a [`TokenKind::Eof`].
    pub(crate) fn scan(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn is_at_end(&self) -> bool { self.current >= self.source.len() }

    fn peek(&self) -> Option<u8> { self.source.as_bytes().get(self.current).copied() }

    fn peek_next(&self) -> Option<u8> { self.source.as_bytes().get(self.current + 1).copied() }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.current += 1;
        Some(byte)
    }

    /// Consumes the next byte only if it is the expected one.
    fn match_next(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.source[self.start..self.current].to_owned();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn add_either(&mut self, second: u8, matched: TokenKind, single: TokenKind) {
        let kind = if self.match_next(second) {
            matched
        } else {
            single
        };

        self.add_token(kind, None);
    }

    /// Recognizes one lexeme starting at `start`; always consumes at least one byte.
    fn scan_token(&mut self) {
        let Some(byte) = self.advance() else {
            return;
        };

        match byte {
            b'(' => self.add_token(TokenKind::LeftParen, None),
            b')' => self.add_token(TokenKind::RightParen, None),
            b'{' => self.add_token(TokenKind::LeftBrace, None),
            b'}' => self.add_token(TokenKind::RightBrace, None),
            b':' => self.add_token(TokenKind::Colon, None),
            b',' => self.add_token(TokenKind::Comma, None),
            b'.' => self.add_token(TokenKind::Dot, None),
            b'?' => self.add_token(TokenKind::Question, None),
            b';' => self.add_token(TokenKind::Semicolon, None),
            b'*' => self.add_token(TokenKind::Star, None),

            b'!' => self.add_either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'>' => self.add_either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'<' => self.add_either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'-' => self.add_either(b'-', TokenKind::MinusMinus, TokenKind::Minus),
            b'+' => self.add_either(b'+', TokenKind::PlusPlus, TokenKind::Plus),

            b'/' => {
                if self.match_next(b'/') {
                    self.skip_line_comment();
                } else if self.match_next(b'*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            }

            b' ' | b'\t' | b'\r' => {}
            b'\n' => self.line += 1,

            b'"' => self.string(),
            byte if byte.is_ascii_digit() => self.number(),
            byte if is_alpha(byte) => self.identifier(),

            character => self.handler.receive(
                UnexpectedCharacter {
                    line: self.line,
                    character,
                }
                .into(),
            ),
        }
    }

    /// Skips up to, but not including, the next newline.
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|byte| byte != b'\n') {
            self.current += 1;
        }
    }

    /// Skips a possibly nested `/* ... */` comment whose opening has already been consumed.
    fn skip_block_comment(&mut self) {
        let mut depth = 1_usize;

        while depth > 0 {
            let Some(byte) = self.peek() else {
                self.handler
                    .receive(UnterminatedBlockComment { line: self.line }.into());
                return;
            };

            match (byte, self.peek_next()) {
                (b'/', Some(b'*')) => {
                    self.current += 1;
                    depth += 1;
                }
                (b'*', Some(b'/')) => {
                    self.current += 1;
                    depth -= 1;
                }
                (b'\n', _) => self.line += 1,
                _ => {}
            }

            self.current += 1;
        }
    }

    fn string(&mut self) {
        while let Some(byte) = self.peek() {
            if byte == b'"' {
                break;
            }

            if byte == b'\n' {
                self.line += 1;
            }

            self.current += 1;
        }

        if self.is_at_end() {
            self.handler
                .receive(UnterminatedString { line: self.line }.into());
            return;
        }

        // the closing quote
        self.current += 1;

        let text = self.source[self.start + 1..self.current - 1].to_owned();
        self.add_token(TokenKind::String, Some(Literal::Text(text)));
    }

    fn number(&mut self) {
        self.skip_digits();

        // a dot not followed by a digit is left for the next token
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|byte| byte.is_ascii_digit()) {
            self.current += 1;
            self.skip_digits();
        }

        let value = self.source[self.start..self.current]
            .parse()
            .expect("digits with an optional `.digits` fraction always parse as f64");
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
            self.current += 1;
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.current += 1;
        }

        let kind = TokenKind::lookup_identifier(&self.source[self.start..self.current]);
        self.add_token(kind, None);
    }
}
