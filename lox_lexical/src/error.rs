//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lox_base::diagnostic::Diagnostic;
use thiserror::Error;

/// The source code ends inside a `/*` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("block comment is not closed")]
pub struct UnterminatedBlockComment {
    /// The line at which the end of the source code was reached.
    pub line: usize,
}

/// The source code ends before the closing `"` of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("unterminated string")]
pub struct UnterminatedString {
    /// The line at which the end of the source code was reached.
    pub line: usize,
}

/// A byte that cannot start any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedCharacter {
    /// The line the byte was found on.
    pub line: usize,

    /// The offending byte.
    pub character: u8,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unexpected character: `{}`", self.character.escape_ascii())
    }
}

impl std::error::Error for UnexpectedCharacter {}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnterminatedBlockComment(UnterminatedBlockComment),

    #[error(transparent)]
    UnterminatedString(UnterminatedString),

    #[error(transparent)]
    UnexpectedCharacter(UnexpectedCharacter),
}

impl Diagnostic for Error {
    fn line(&self) -> usize {
        match self {
            Self::UnterminatedBlockComment(error) => error.line,
            Self::UnterminatedString(error) => error.line,
            Self::UnexpectedCharacter(error) => error.line,
        }
    }
}

#[cfg(test)]
mod tests {
    use lox_base::diagnostic::Diagnostic;

    use super::{Error, UnexpectedCharacter, UnterminatedBlockComment, UnterminatedString};

    #[test]
    fn messages() {
        assert_eq!(
            Error::from(UnterminatedBlockComment { line: 1 }).to_string(),
            "block comment is not closed"
        );
        assert_eq!(
            Error::from(UnterminatedString { line: 1 }).to_string(),
            "unterminated string"
        );
        assert_eq!(
            Error::from(UnexpectedCharacter {
                line: 1,
                character: b'@'
            })
            .to_string(),
            "unexpected character: `@`"
        );
    }

    #[test]
    fn non_printable_character_is_escaped() {
        let error = UnexpectedCharacter {
            line: 1,
            character: 0xC3,
        };

        assert_eq!(error.to_string(), "unexpected character: `\\xc3`");
    }

    #[test]
    fn line_is_forwarded() {
        assert_eq!(Error::from(UnterminatedString { line: 4 }).line(), 4);
        assert_eq!(
            Error::from(UnexpectedCharacter {
                line: 9,
                character: b'#'
            })
            .line(),
            9
        );
    }
}
