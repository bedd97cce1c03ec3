//! Contains the [`TokenStream`] struct, the output of the lexical analysis phase.

use std::ops::Index;

use derive_more::Deref;
use lox_base::diagnostic::Handler;

use crate::{error, scanner::Scanner, token::Token};

/// Is the ordered list of tokens of a source code, always terminated by exactly one
/// [`crate::token::TokenKind::Eof`] token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// The source code is scanned exactly once from left to right. Malformed input is reported to
    /// the `handler` and skipped, so the call always returns a stream; callers that need to know
    /// whether the input was well formed must ask the handler.
    #[must_use]
    pub fn tokenize(source: &str, handler: &dyn Handler<error::Error>) -> Self {
        Self {
            tokens: Scanner::new(source, handler).scan(),
        }
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

impl IntoIterator for TokenStream {
    type IntoIter = std::vec::IntoIter<Token>;
    type Item = Token;

    fn into_iter(self) -> Self::IntoIter { self.tokens.into_iter() }
}
