//! Token definitions for the GIFT format
//!
//! This module defines all the tokens that can be produced by the GIFT lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Where a token sits in the source: byte span plus 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub span: Range<usize>,
    pub line: usize,
}

impl Location {
    pub fn new(span: Range<usize>, line: usize) -> Self {
        Self { span, line }
    }
}

/// Type alias for token with location
pub type TokenLocation = (Token, Location);

/// All possible tokens in the GIFT format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub enum Token {
    /// Category path separator. Reserved: no lexical rule produces it, `/` lexes as `Char`.
    PathSeparator,

    // Title marker (`::Title::`). Lexed but never accepted by the grammar.
    #[token("::")]
    DoubleColon,

    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    #[regex(r"\r?\n")]
    Newline,

    // Backslash plus the next character, kept verbatim
    #[regex(r"\\[^\r\n]", |lex| lex.slice().to_owned())]
    Escaped(String),

    // Anything else except colon, braces, newline and backslash
    #[regex(r"[^:{}\n\\]", |lex| lex.slice().chars().next())]
    Char(char),
}

impl Token {
    /// Check if this token can be part of question or answer text
    pub fn is_character(&self) -> bool {
        matches!(self, Token::Char(_) | Token::Escaped(_))
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    /// The source text this token stands for
    pub fn raw(&self) -> String {
        match self {
            Token::PathSeparator => "/".to_string(),
            Token::DoubleColon => "::".to_string(),
            Token::OpenBrace => "{".to_string(),
            Token::CloseBrace => "}".to_string(),
            Token::Newline => "\n".to_string(),
            Token::Escaped(s) => s.clone(),
            Token::Char(c) => c.to_string(),
        }
    }

    /// Append this token's text to `buf`. Only character tokens contribute.
    pub fn push_text(&self, buf: &mut String) {
        match self {
            Token::Escaped(s) => buf.push_str(s),
            Token::Char(c) => buf.push(*c),
            _ => {}
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Newline => write!(f, "\\n"),
            other => write!(f, "{}", other.raw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            lex_all("::{}"),
            vec![Ok(Token::DoubleColon), Ok(Token::OpenBrace), Ok(Token::CloseBrace)]
        );
    }

    #[test]
    fn test_escape_keeps_backslash() {
        assert_eq!(lex_all(r"\{"), vec![Ok(Token::Escaped(r"\{".to_string()))]);
        assert_eq!(lex_all(r"\n"), vec![Ok(Token::Escaped(r"\n".to_string()))]);
    }

    #[test]
    fn test_characters_are_single() {
        assert_eq!(
            lex_all("a é"),
            vec![Ok(Token::Char('a')), Ok(Token::Char(' ')), Ok(Token::Char('é'))]
        );
    }

    #[test]
    fn test_slash_is_plain_character() {
        assert_eq!(
            lex_all("a/b"),
            vec![Ok(Token::Char('a')), Ok(Token::Char('/')), Ok(Token::Char('b'))]
        );
    }

    #[test]
    fn test_indentation_after_newline_is_text() {
        assert_eq!(
            lex_all("a\n \tb"),
            vec![
                Ok(Token::Char('a')),
                Ok(Token::Newline),
                Ok(Token::Char(' ')),
                Ok(Token::Char('\t')),
                Ok(Token::Char('b')),
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_newline() {
        assert_eq!(lex_all("\r\n"), vec![Ok(Token::Newline)]);
    }

    #[test]
    fn test_lone_colon_is_an_error() {
        assert_eq!(lex_all(":"), vec![Err(())]);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Char('x').is_character());
        assert!(Token::Escaped(r"\~".to_string()).is_character());
        assert!(!Token::OpenBrace.is_character());
        assert!(Token::Newline.is_newline());
        assert!(!Token::DoubleColon.is_newline());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Newline.to_string(), "\\n");
        assert_eq!(Token::CloseBrace.to_string(), "}");
        assert_eq!(Token::Escaped(r"\=".to_string()).to_string(), r"\=");
    }
}
