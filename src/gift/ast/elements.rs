//! AST element definitions

pub mod answer;
pub mod document;
pub mod question;

pub use answer::{Answer, AnswerKind};
pub use document::Document;
pub use question::Question;
