use thiserror::Error;

use crate::parser::token::TokenKind;

/// Errors raised while tokenizing or parsing a puzzle formula.
///
/// Each case carries enough context to reproduce the diagnostic: the
/// expected and found token kinds and, where applicable, the offending
/// lexeme or character position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognizable token sequence at position {position}: {character}")]
    UnrecognizedCharacter { character: char, position: usize },

    #[error("unexpected token {kind} ({lexeme}) while parsing primary expression")]
    UnexpectedToken { kind: TokenKind, lexeme: String },

    #[error("was expecting {expected}, but found {found} ({lexeme})")]
    MismatchedToken {
        expected: TokenKind,
        found: TokenKind,
        lexeme: String,
    },

    #[error("end of the expression reached while looking for {expected}")]
    UnexpectedEnd { expected: TokenKind },

    #[error("end of the expression reached while expecting a token")]
    MissingToken,

    #[error("all input text should have been parsed, but currently sitting at {kind} ({lexeme})")]
    TrailingInput { kind: TokenKind, lexeme: String },

    #[error("number literal {lexeme} is out of range")]
    NumberOutOfRange { lexeme: String },
}
