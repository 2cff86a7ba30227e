//! GIFT source format
//!
//! Renders a document back into canonical GIFT. Parsing the output again yields the same
//! document: question and answer text keep their escapes, weights are written as `%N%`.

use super::registry::{FormatError, Formatter};
use crate::gift::ast::{Document, Question};

#[derive(Debug, Clone, Copy, Default)]
pub struct GiftFormatter;

fn render_question(question: &Question) -> String {
    if question.is_open() {
        return question.text.clone();
    }

    let mut out = String::new();
    out.push_str(&question.text);
    out.push_str("{\n");
    for answer in &question.answers {
        out.push_str(&answer.to_string());
        out.push('\n');
    }
    out.push('}');
    out
}

impl Formatter for GiftFormatter {
    fn name(&self) -> &str {
        "gift"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut out = doc
            .iter()
            .map(render_question)
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Canonical GIFT source"
    }
}
