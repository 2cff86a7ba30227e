//! Parse errors
//!
//! Any grammar failure aborts the whole parse. The error names the offending token (or
//! end of input) and the line it was found on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that no grammar rule accepts at this point
    #[error("Syntax error at '{found}' in line {line}.")]
    UnexpectedToken { found: String, line: usize },

    /// Input ended while a question, brace block or answer was incomplete
    #[error("Syntax error at end of input (line {line}).")]
    UnexpectedEnd { line: usize },

    /// An answer line that is not `=`/`~`, optional `%N%`, then text
    #[error("Syntax error in the answer '{answer}' in line {line}: {reason}")]
    InvalidAnswer {
        answer: String,
        line: usize,
        reason: String,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedEnd { line }
            | ParseError::InvalidAnswer { line, .. } => *line,
        }
    }
}
