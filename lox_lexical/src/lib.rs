//! This crate implements the lexical analysis phase of the Lox front end. This phase is
//! responsible for turning the source code into a flat sequence of tokens.
//!
//! The final output of this phase is a [`token_stream::TokenStream`], which always ends with a
//! single [`token::TokenKind::Eof`] token. Malformed input never aborts the phase: every problem
//! is handed to a [`lox_base::diagnostic::Handler`] and the scan carries on.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod literal;
mod scanner;
pub mod token;
pub mod token_stream;
