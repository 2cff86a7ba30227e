//! Lexer
//!
//! Tokenization of GIFT source is done in a single pass by a logos lexer (see [`tokens`]).
//! The wrapper in [`base_tokenization`] attaches line numbers to every token and collects
//! lexical errors instead of aborting.
//!
//! Comment Handling
//!
//!     A comment is a line whose content before `//` is only spaces or tabs. The tokenizer
//!     checks for one at the start of every line and steps the lexer past it, so the
//!     comment never reaches the token stream while the newline that ends it survives.
//!     A `//` anywhere else on a line is plain text.
//!
//! Escapes
//!
//!     `\x` is kept verbatim (backslash included) as a single escaped token. Whether to
//!     unescape is a rendering decision, see [`crate::gift::ast::unescape`].

pub mod base_tokenization;
pub mod tokens;

pub use base_tokenization::{tokenize, LexError, Tokenized, Tokenizer};
pub use tokens::{Location, Token, TokenLocation};
