//! Parsing
//!
//! Reduces the token stream produced by [`crate::gift::lexing`] into a [`Document`].
//!
//! The pieces:
//! - [`grammar`]: chumsky combinators for documents, questions, brace blocks and answer lines.
//! - [`answers`]: interpretation of a single answer line (prefix, weight, text, kind).
//! - [`parser`]: the [`GiftParser`] value and the [`parse`] entry point.
//! - [`error`]: the [`ParseError`] reported when reduction fails.
//!
//! Parsing is all or nothing. A single malformed question aborts the whole parse and no
//! partial document is returned. Lexical errors, on the other hand, only skip one character
//! each and are handed back next to the document in [`Parsed`].
//!
//! [`Document`]: crate::gift::ast::Document

pub mod answers;
pub mod error;
pub mod grammar;
pub mod parser;

pub use answers::{interpret_answer, AnswerError};
pub use error::ParseError;
pub use parser::{parse, GiftParser, Parsed};
