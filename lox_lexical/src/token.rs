//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::literal::Literal;

/// Is an enumeration containing every kind of token of the Lox language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,
    Comma,
    Dot,
    Question,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Minus,
    MinusMinus,
    Plus,
    PlusPlus,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

/// Is an error that is returned when a string is not the spelling of any keyword in the
/// [`FromStr`] trait implementation of [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for TokenKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, TokenKind> = TokenKind::iter()
                .filter_map(|kind| kind.keyword_str().map(|spelling| (spelling, kind)))
                .collect();
        }

        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl TokenKind {
    /// Gets the name of the kind as it appears in token dumps, e.g. `BANG_EQUAL`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    /// Gets the reserved spelling of a keyword kind, or `None` for every other kind.
    #[must_use]
    pub fn keyword_str(self) -> Option<&'static str> {
        Some(match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::Fun => "fun",
            Self::For => "for",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            _ => return None,
        })
    }

    /// Checks if the kind is a reserved keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool { self.keyword_str().is_some() }

    /// Resolves a complete identifier-shaped word to its keyword kind, falling back to
    /// [`TokenKind::Identifier`].
    #[must_use]
    pub fn lookup_identifier(word: &str) -> Self { word.parse().unwrap_or(Self::Identifier) }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Is a classified, line-tagged piece of the source code.
///
/// Tokens are only made by the scanner, so a string or number token always carries its literal
/// and only the end-of-input token has an empty lexeme.
///
/// ```compile_fail
/// use lox_lexical::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::String, "\"a\"".to_string(), None, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the exact source text the token was made from.
    #[get = "pub"]
    lexeme: String,

    /// Gets the decoded value of string and number tokens.
    #[get = "pub"]
    literal: Option<Literal>,

    /// Gets the line the scanner was on when the token was completed.
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        lexeme: String,
        literal: Option<Literal>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// Creates the end-of-input token that terminates every token stream.
    #[must_use]
    pub fn eof(line: usize) -> Self { Self::new(TokenKind::Eof, String::new(), None, line) }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} ", self.line, self.kind, self.lexeme)?;

        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("No Literal"),
        }
    }
}
