//! Answer element definition

use super::super::text::unescape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an answer is classified
///
/// Only `=` combined with a `%N%` weight yields a short answer. A weighted `~` answer is
/// still multiple choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    ShortAnswer,
    MultipleChoice,
}

impl AnswerKind {
    pub fn classify(correct: bool, weight: Option<u32>) -> Self {
        if correct && weight.is_some() {
            AnswerKind::ShortAnswer
        } else {
            AnswerKind::MultipleChoice
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKind::ShortAnswer => "short-answer",
            AnswerKind::MultipleChoice => "multiple-choice",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a brace block, e.g. `=%50%Paris`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// `=` prefix when true, `~` when false
    pub correct: bool,
    /// Percentage from a `%N%` marker
    pub weight: Option<u32>,
    pub kind: AnswerKind,
    /// Text after prefix and weight, escapes kept
    pub text: String,
}

impl Answer {
    /// Build an answer, deriving its kind from `correct` and `weight`
    pub fn new(correct: bool, weight: Option<u32>, text: impl Into<String>) -> Self {
        Self {
            correct,
            weight,
            kind: AnswerKind::classify(correct, weight),
            text: text.into(),
        }
    }

    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(true, None, text)
    }

    pub fn incorrect(text: impl Into<String>) -> Self {
        Self::new(false, None, text)
    }

    pub fn with_weight(self, weight: u32) -> Self {
        Self::new(self.correct, Some(weight), self.text)
    }

    /// The GIFT prefix character for this answer
    pub fn prefix(&self) -> char {
        if self.correct {
            '='
        } else {
            '~'
        }
    }

    pub fn unescaped_text(&self) -> String {
        unescape(&self.text)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())?;
        if let Some(weight) = self.weight {
            write!(f, "%{}%", weight)?;
        }
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(AnswerKind::classify(true, Some(50)), AnswerKind::ShortAnswer);
        assert_eq!(AnswerKind::classify(false, Some(50)), AnswerKind::MultipleChoice);
        assert_eq!(AnswerKind::classify(true, None), AnswerKind::MultipleChoice);
        assert_eq!(AnswerKind::classify(false, None), AnswerKind::MultipleChoice);
    }

    #[test]
    fn test_with_weight_reclassifies() {
        let answer = Answer::correct("Paris").with_weight(100);
        assert_eq!(answer.kind, AnswerKind::ShortAnswer);
        assert_eq!(answer.weight, Some(100));
    }

    #[test]
    fn test_display_round_trips_gift_syntax() {
        assert_eq!(Answer::correct("Paris").with_weight(50).to_string(), "=%50%Paris");
        assert_eq!(Answer::incorrect("London").to_string(), "~London");
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&AnswerKind::ShortAnswer).unwrap();
        assert_eq!(json, "\"short-answer\"");
    }
}
