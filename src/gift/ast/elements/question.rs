//! Question element definition

use super::super::text::unescape;
use super::answer::Answer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A question prompt plus the answers of its brace block
///
/// An empty answer list means an open (essay) question: either no brace block was
/// written, or it was empty (`{}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }

    pub fn open(text: impl Into<String>) -> Self {
        Self::new(text, vec![])
    }

    pub fn is_open(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|answer| answer.correct)
    }

    pub fn unescaped_text(&self) -> String {
        unescape(&self.text)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question({} answers)", self.answers.len())
    }
}
