//! AST for GIFT documents
//!
//! A [`Document`] is a list of [`Question`]s in file order, each carrying the [`Answer`]s
//! of its brace block. Nodes are built once by the parser and never mutated afterwards.
//!
//! Text fields keep GIFT escapes verbatim (`\{` stays two characters); use
//! [`unescape`] or the `unescaped_text` helpers when the plain text is wanted.

pub mod elements;
pub mod text;

pub use elements::{Answer, AnswerKind, Document, Question};
pub use text::unescape;
