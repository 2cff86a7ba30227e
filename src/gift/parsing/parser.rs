//! Parser entry point
//!
//! [`GiftParser`] runs the tokenizer and the grammar in one pass and converts chumsky's
//! errors into a single [`ParseError`]. When several errors are reported the one earliest in
//! the token stream wins, so a malformed answer is reported before any later syntax error.

use chumsky::error::SimpleReason;
use chumsky::Parser as _;

use super::error::ParseError;
use super::grammar::{collect_text, document, ParserError};
use crate::gift::ast::Document;
use crate::gift::lexing::{LexError, TokenLocation, Tokenizer};

/// A successful parse together with the lexical diagnostics collected on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub document: Document,
    pub lex_errors: Vec<LexError>,
}

/// The GIFT parser
///
/// Holds no global state: each value owns its tokenizer and builds the grammar on demand.
#[derive(Debug, Default, Clone, Copy)]
pub struct GiftParser {
    tokenizer: Tokenizer,
}

impl GiftParser {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize and reduce `source`
    pub fn parse(&self, source: &str) -> Result<Parsed, ParseError> {
        let tokenized = self.tokenizer.tokenize(source);
        let document = self.reduce(tokenized.tokens)?;
        Ok(Parsed {
            document,
            lex_errors: tokenized.errors,
        })
    }

    /// Reduce an already tokenized stream into a document
    pub fn reduce(&self, tokens: Vec<TokenLocation>) -> Result<Document, ParseError> {
        document()
            .parse(tokens.clone())
            .map_err(|errors| first_error(errors, &tokens))
    }
}

/// Parse GIFT source into a [`Document`], discarding lexical diagnostics
pub fn parse(source: &str) -> Result<Document, ParseError> {
    GiftParser::new().parse(source).map(|parsed| parsed.document)
}

fn first_error(errors: Vec<ParserError>, tokens: &[TokenLocation]) -> ParseError {
    errors
        .into_iter()
        .min_by_key(|error| error.span().start)
        .map(|error| convert_error(error, tokens))
        .unwrap_or(ParseError::UnexpectedEnd {
            line: last_line(tokens),
        })
}

fn convert_error(error: ParserError, tokens: &[TokenLocation]) -> ParseError {
    if let SimpleReason::Custom(reason) = error.reason() {
        // Custom errors come from answer lines; their span covers the line's tokens.
        let span = error.span();
        let end = span.end.min(tokens.len());
        let start = span.start.min(end);
        let line_tokens = &tokens[start..end];
        return ParseError::InvalidAnswer {
            answer: collect_text(line_tokens).trim().to_string(),
            line: line_tokens
                .first()
                .map(|(_, location)| location.line)
                .unwrap_or_else(|| last_line(tokens)),
            reason: reason.clone(),
        };
    }

    match error.found() {
        Some((token, location)) => ParseError::UnexpectedToken {
            found: token.to_string(),
            line: location.line,
        },
        None => ParseError::UnexpectedEnd {
            line: last_line(tokens),
        },
    }
}

/// Line the input ends on
fn last_line(tokens: &[TokenLocation]) -> usize {
    match tokens.last() {
        Some((token, location)) if token.is_newline() => location.line + 1,
        Some((_, location)) => location.line,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gift::ast::{Answer, Question};

    #[test]
    fn test_parse_reports_lex_errors() {
        let parsed = GiftParser::new().parse("Ratio 1:2?").unwrap();
        assert_eq!(parsed.document.questions[0].text, "Ratio 12?");
        assert_eq!(parsed.lex_errors.len(), 1);
        assert_eq!(parsed.lex_errors[0].character, ':');
    }

    #[test]
    fn test_reduce_pretokenized() {
        let parser = GiftParser::new();
        let tokens = parser.tokenizer().tokenize("Q{=a\n}").tokens;
        let doc = parser.reduce(tokens).unwrap();
        assert_eq!(
            doc.questions,
            vec![Question::new("Q", vec![Answer::correct("a")])]
        );
    }

    #[test]
    fn test_unexpected_token_line() {
        let err = parse("Q1\n\nQ2{\n=a\n}}").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                found: "}".to_string(),
                line: 5
            }
        );
    }

    #[test]
    fn test_unexpected_end() {
        let err = parse("Q{\n=a\n").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { line: 3 });
    }

    #[test]
    fn test_empty_source_is_an_error() {
        assert_eq!(parse(""), Err(ParseError::UnexpectedEnd { line: 1 }));
    }

    #[test]
    fn test_invalid_answer_wins_over_later_errors() {
        let err = parse("Q1{\n=%10%\n}\n\nQ2\nQ3").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidAnswer {
                answer: "=%10%".to_string(),
                line: 2,
                reason: "answer has no text".to_string(),
            }
        );
    }

    #[test]
    fn test_last_line() {
        let tokens = Tokenizer::new().tokenize("a\nb\n").tokens;
        assert_eq!(last_line(&tokens), 3);
        assert_eq!(last_line(&[]), 1);
    }
}
