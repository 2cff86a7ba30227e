//! GIFT grammar as chumsky combinators
//!
//! ```text
//! document   := NEWLINE* question (NEWLINE NEWLINE NEWLINE* question)* NEWLINE*
//! question   := text brace_expr?
//! brace_expr := '{' NEWLINE? answer* '}'
//! answer     := text NEWLINE
//! text       := (CHAR | ESCAPED)+
//! ```
//!
//! Questions must be separated by at least one blank line. `::` and the path separator
//! are never accepted, so title and category syntax fail as unexpected tokens.
//!
//! Answer lines are interpreted while they are reduced. A malformed answer is emitted as a
//! custom error carrying the reason; [`crate::gift::parsing::parser`] turns it into
//! [`crate::gift::parsing::ParseError::InvalidAnswer`].

use chumsky::prelude::*;
use chumsky::primitive::filter;

use crate::gift::ast::{Answer, Document, Question};
use crate::gift::lexing::{Token, TokenLocation};
use crate::gift::parsing::answers::interpret_answer;

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

/// Concatenate the text of character tokens
pub(crate) fn collect_text(tokens: &[TokenLocation]) -> String {
    let mut text = String::new();
    for (token, _) in tokens {
        token.push_text(&mut text);
    }
    text
}

/// Helper: match a specific token type, ignoring the location
pub(crate) fn token(t: Token) -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenLocation| tok == &t).ignored()
}

pub(crate) fn newline() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    token(Token::Newline)
}

/// A non-empty run of literal or escaped characters
/// Returns the collected tokens so callers still know their lines
pub(crate) fn text_run(
) -> impl Parser<TokenLocation, Vec<TokenLocation>, Error = ParserError> + Clone {
    filter(|(t, _location): &TokenLocation| t.is_character())
        .repeated()
        .at_least(1)
}

/// One answer line, newline included
///
/// Yields `None` for a malformed answer after emitting the error, so the surrounding block
/// still reduces and later errors do not mask this one.
pub(crate) fn answer_line(
) -> impl Parser<TokenLocation, Option<Answer>, Error = ParserError> + Clone {
    text_run()
        .then_ignore(newline())
        .validate(|tokens, span, emit| match interpret_answer(&collect_text(&tokens)) {
            Ok(answer) => Some(answer),
            Err(reason) => {
                emit(Simple::custom(span, reason));
                None
            }
        })
}

/// `{`, an optional newline, answer lines, `}`
pub(crate) fn brace_block() -> impl Parser<TokenLocation, Vec<Answer>, Error = ParserError> + Clone
{
    token(Token::OpenBrace)
        .ignore_then(newline().or_not())
        .ignore_then(answer_line().repeated())
        .then_ignore(token(Token::CloseBrace))
        .map(|answers: Vec<Option<Answer>>| answers.into_iter().flatten().collect::<Vec<_>>())
}

/// Question text followed by an optional brace block
pub(crate) fn question() -> impl Parser<TokenLocation, Question, Error = ParserError> + Clone {
    text_run()
        .then(brace_block().or_not())
        .map(|(text_tokens, answers)| {
            Question::new(collect_text(&text_tokens), answers.unwrap_or_default())
        })
}

/// Parse a whole document
pub(crate) fn document() -> impl Parser<TokenLocation, Document, Error = ParserError> + Clone {
    let separator = newline()
        .then(newline())
        .then(newline().repeated())
        .ignored();

    newline()
        .repeated()
        .ignore_then(question())
        .then(separator.ignore_then(question()).repeated())
        .then_ignore(newline().repeated())
        .then_ignore(end())
        .map(|(first, rest)| {
            let mut questions = Vec::with_capacity(rest.len() + 1);
            questions.push(first);
            questions.extend(rest);
            Document::new(questions)
        })
}
