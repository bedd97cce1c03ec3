//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

impl Severity {
    fn header(self) -> formatting::WithColor<&'static str> {
        match self {
            Self::Error => Color::Red.with("[error]:"),
            Self::Info => Color::Green.with("[info]:"),
            Self::Warning => Color::Yellow.with("[warning]:"),
        }
    }
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            Style::Bold.with(self.severity.header()),
            Style::Bold.with(&self.display)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, Severity};

    #[test]
    fn error_message_has_red_bold_header() {
        let rendered = Message::new(Severity::Error, "line 1: unterminated string").to_string();

        assert_eq!(
            rendered,
            "\x1B[1m\x1B[31m[error]:\x1B[0m\x1B[0m \x1B[1mline 1: unterminated string\x1B[0m"
        );
    }

    #[test]
    fn severity_selects_header() {
        assert!(Message::new(Severity::Warning, "w")
            .to_string()
            .contains("[warning]:"));
        assert!(Message::new(Severity::Info, "i")
            .to_string()
            .contains("[info]:"));
    }
}
