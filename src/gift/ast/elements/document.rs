//! Document element definition
//!
//! The root of a parsed GIFT file. This is what the parser hands to formatters.

use super::question::Question;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All questions of a GIFT file, in file order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub questions: Vec<Question>,
}

impl Document {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Total number of answers across all questions
    pub fn answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.answers.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({} questions, {} answers)",
            self.len(),
            self.answer_count()
        )
    }
}
