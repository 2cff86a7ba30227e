//! # gift
//!
//! A parser for the GIFT quiz format.
//!
//! GIFT source is tokenized by [`gift::lexing`], reduced into a [`gift::ast::Document`] by
//! [`gift::parsing`], and rendered by one of the formatters in [`gift::formats`].
//!
//! ```text
//! What is the capital of France?{
//! =Paris
//! ~London
//! }
//! ```

pub mod gift;

pub use crate::gift::ast::{Answer, AnswerKind, Document, Question};
pub use crate::gift::parsing::{parse, GiftParser, ParseError};
