//! Answer line interpretation
//!
//! Turns the trimmed text of one answer line into an [`Answer`]:
//!
//! ```text
//! =Paris          correct, no weight, multiple choice
//! ~London         incorrect, no weight, multiple choice
//! =%50%Paris      correct, weight 50, short answer
//! ~%50%London     incorrect, weight 50, multiple choice
//! ```

use crate::gift::ast::Answer;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<prefix>[=~])(?:%(?P<weight>[0-9]+)%)?(?P<text>.*)$")
        .expect("valid answer regex")
});

/// Why an answer line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("answer must start with '=' or '~'")]
    MissingPrefix,
    #[error("answer has no text")]
    EmptyText,
    #[error("weight {0} is out of range")]
    WeightOutOfRange(String),
}

/// Interpret one answer line. Surrounding whitespace is trimmed first.
pub fn interpret_answer(raw: &str) -> Result<Answer, AnswerError> {
    let line = raw.trim();
    let captures = ANSWER_LINE
        .captures(line)
        .ok_or(AnswerError::MissingPrefix)?;

    let correct = &captures["prefix"] == "=";
    let weight = captures
        .name("weight")
        .map(|digits| {
            digits
                .as_str()
                .parse::<u32>()
                .map_err(|_| AnswerError::WeightOutOfRange(digits.as_str().to_string()))
        })
        .transpose()?;

    let text = &captures["text"];
    if text.is_empty() {
        return Err(AnswerError::EmptyText);
    }

    Ok(Answer::new(correct, weight, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gift::ast::AnswerKind;

    #[test]
    fn test_weighted_correct_is_short_answer() {
        let answer = interpret_answer("=%50%Paris").unwrap();
        assert!(answer.correct);
        assert_eq!(answer.weight, Some(50));
        assert_eq!(answer.kind, AnswerKind::ShortAnswer);
        assert_eq!(answer.text, "Paris");
    }

    #[test]
    fn test_weighted_incorrect_is_multiple_choice() {
        let answer = interpret_answer("~%50%London").unwrap();
        assert!(!answer.correct);
        assert_eq!(answer.weight, Some(50));
        assert_eq!(answer.kind, AnswerKind::MultipleChoice);
    }

    #[test]
    fn test_plain_correct() {
        let answer = interpret_answer("=Correct").unwrap();
        assert_eq!(answer, Answer::correct("Correct"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let answer = interpret_answer("   ~Berlin \t").unwrap();
        assert_eq!(answer, Answer::incorrect("Berlin"));
    }

    #[test]
    fn test_weight_without_text_is_rejected() {
        assert_eq!(interpret_answer("=%10%"), Err(AnswerError::EmptyText));
    }

    #[test]
    fn test_bare_prefix_is_rejected() {
        assert_eq!(interpret_answer("  =  "), Err(AnswerError::EmptyText));
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        assert_eq!(interpret_answer("Paris"), Err(AnswerError::MissingPrefix));
        assert_eq!(interpret_answer("   "), Err(AnswerError::MissingPrefix));
    }

    #[test]
    fn test_malformed_weight_is_text() {
        let answer = interpret_answer("=%abc%x").unwrap();
        assert_eq!(answer.weight, None);
        assert_eq!(answer.text, "%abc%x");
    }

    #[test]
    fn test_huge_weight_is_rejected() {
        assert_eq!(
            interpret_answer("=%99999999999%x"),
            Err(AnswerError::WeightOutOfRange("99999999999".to_string()))
        );
    }

    #[test]
    fn test_text_after_weight_keeps_inner_spacing() {
        let answer = interpret_answer("=%100% New  York").unwrap();
        assert_eq!(answer.text, " New  York");
    }
}
