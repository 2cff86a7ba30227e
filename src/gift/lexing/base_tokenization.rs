//! Base tokenization implementation for the GIFT lexer
//!
//! This module runs the logos lexer over a source string and pairs every token with
//! its [`Location`]. This is the entry point where source strings become token streams.
//!
//! Lexing never fails as a whole: a character that no rule accepts is recorded as a
//! [`LexError`] and skipped, and scanning continues with the next character.

use crate::gift::lexing::tokens::{Location, Token, TokenLocation};
use logos::{Lexer, Logos};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use thiserror::Error;

/// A whole-line comment, matched at the start of a line
static COMMENT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*//[^\r\n]*").expect("valid comment regex"));

/// A character outside the accepted set, skipped during tokenization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Illegal character '{character}' at line {line}")]
pub struct LexError {
    pub character: char,
    pub line: usize,
    pub span: Range<usize>,
}

/// Output of a tokenization pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tokenized {
    pub tokens: Vec<TokenLocation>,
    pub errors: Vec<LexError>,
}

impl Tokenized {
    /// Tokens without their locations
    pub fn kinds(&self) -> Vec<Token> {
        self.tokens.iter().map(|(token, _)| token.clone()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// The GIFT tokenizer
///
/// Holds no state between calls; construct one wherever it is needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    /// Tokenize source code with location information
    pub fn tokenize(&self, source: &str) -> Tokenized {
        let mut lexer = Token::lexer(source);
        let mut output = Tokenized::default();
        let mut line = 1;

        skip_comment_line(&mut lexer);
        while let Some(result) = lexer.next() {
            let span = lexer.span();

            match result {
                Ok(Token::Newline) => {
                    output.tokens.push((Token::Newline, Location::new(span, line)));
                    line += 1;
                    skip_comment_line(&mut lexer);
                }
                Ok(token) => output.tokens.push((token, Location::new(span, line))),
                Err(()) => {
                    let character = source[span.clone()].chars().next().unwrap_or('\0');
                    output.errors.push(LexError {
                        character,
                        line,
                        span,
                    });
                }
            }
        }

        output
    }
}

/// Step over a comment line if the lexer sits at the start of one.
/// The line break that ends the comment is left for the lexer.
fn skip_comment_line(lexer: &mut Lexer<'_, Token>) {
    if let Some(comment) = COMMENT_LINE.find(lexer.remainder()) {
        lexer.bump(comment.end());
    }
}

/// Convenience function to tokenize a string with a default [`Tokenizer`]
pub fn tokenize(source: &str) -> Tokenized {
    Tokenizer::new().tokenize(source)
}
