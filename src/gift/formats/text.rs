//! Text summary format
//!
//! One line per question, blank line between questions:
//!
//! ```text
//! What is the capital of France? ([OK][multiple-choice]Paris, [ERROR][multiple-choice]London)
//!
//! Describe the water cycle.
//! ```

use super::registry::{FormatError, Formatter};
use crate::gift::ast::{Answer, AnswerKind, Document, Question};
use crate::gift::config::{LabelConfig, RenderConfig};

#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    labels: LabelConfig,
    unescape: bool,
}

impl TextFormatter {
    pub fn new(labels: LabelConfig, unescape: bool) -> Self {
        Self { labels, unescape }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.labels.clone(), config.unescape)
    }

    fn text_of(&self, raw: &str, unescaped: String) -> String {
        if self.unescape {
            unescaped
        } else {
            raw.to_string()
        }
    }

    fn render_answer(&self, answer: &Answer) -> String {
        let verdict = if answer.correct {
            &self.labels.correct
        } else {
            &self.labels.incorrect
        };
        let kind = match answer.kind {
            AnswerKind::ShortAnswer => &self.labels.short_answer,
            AnswerKind::MultipleChoice => &self.labels.multiple_choice,
        };
        format!(
            "[{}][{}]{}",
            verdict,
            kind,
            self.text_of(&answer.text, answer.unescaped_text())
        )
    }

    fn render_question(&self, question: &Question) -> String {
        let text = self.text_of(&question.text, question.unescaped_text());
        let text = text.trim_end();
        if question.is_open() {
            return text.to_string();
        }

        let answers: Vec<String> = question
            .answers
            .iter()
            .map(|answer| self.render_answer(answer))
            .collect();
        format!("{} ({})", text, answers.join(", "))
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut out = doc
            .iter()
            .map(|question| self.render_question(question))
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "One line per question with labelled answers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(vec![
            Question::new(
                "Capital of France? ",
                vec![
                    Answer::correct("Paris").with_weight(100),
                    Answer::incorrect(r"Lond\=on"),
                ],
            ),
            Question::open("Essay"),
        ])
    }

    #[test]
    fn test_default_labels() {
        let out = TextFormatter::default().serialize(&sample()).unwrap();
        assert_eq!(
            out,
            "Capital of France? ([OK][short-answer]Paris, [ERROR][multiple-choice]Lond\\=on)\n\nEssay\n"
        );
    }

    #[test]
    fn test_custom_labels_and_unescape() {
        let labels = LabelConfig {
            correct: "+".to_string(),
            incorrect: "-".to_string(),
            short_answer: "SA".to_string(),
            multiple_choice: "MC".to_string(),
        };
        let out = TextFormatter::new(labels, true).serialize(&sample()).unwrap();
        assert!(out.starts_with("Capital of France? ([+][SA]Paris, [-][MC]Lond=on)"));
    }

    #[test]
    fn test_empty_brace_block_renders_bare() {
        let doc = Document::new(vec![Question::open("Q")]);
        assert_eq!(TextFormatter::default().serialize(&doc).unwrap(), "Q\n");
    }
}
