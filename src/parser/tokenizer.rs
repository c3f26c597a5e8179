use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::parser::errors::ParseError;
use crate::parser::token::{Token, TokenKind};

/// Breaks puzzle text into a flat list of tokens in a single left-to-right
/// pass.
///
/// Longest match wins: a run of decimal digits becomes one NUMBER token and
/// a run of uppercase Latin letters becomes one VARIABLE token. The
/// two-character operators `<=` and `>=` are matched greedily before their
/// single-character prefixes. Runs of whitespace and control characters
/// (code points 1 through 32) are consumed and discarded. The returned list
/// always ends with exactly one END token, even for empty input.
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedCharacter`] with the offending
/// character and its byte offset when any other character is encountered.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '^' => TokenKind::Circumflex,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '=' => TokenKind::Equals,
            '<' | '>' => {
                let followed_by_equals = matches!(chars.peek(), Some(&(_, '=')));
                let (kind, width) = match (ch, followed_by_equals) {
                    ('<', true) => (TokenKind::LessEquals, 2),
                    ('<', false) => (TokenKind::LessThan, 1),
                    ('>', true) => (TokenKind::GreaterEquals, 2),
                    _ => (TokenKind::GreaterThan, 1),
                };
                if followed_by_equals {
                    chars.next();
                }
                tokens.push(Token::new(kind, position..position + width));
                continue;
            }
            '0'..='9' => {
                let end = scan_run(&mut chars, position + 1, |ch| ch.is_ascii_digit());
                tokens.push(Token::new(TokenKind::Number, position..end));
                continue;
            }
            'A'..='Z' => {
                let end = scan_run(&mut chars, position + 1, |ch| ch.is_ascii_uppercase());
                tokens.push(Token::new(TokenKind::Variable, position..end));
                continue;
            }
            '\u{01}'..='\u{20}' => {
                scan_run(&mut chars, position + 1, |ch| {
                    matches!(ch, '\u{01}'..='\u{20}')
                });
                continue;
            }
            _ => {
                return Err(ParseError::UnrecognizedCharacter {
                    character: ch,
                    position,
                })
            }
        };
        tokens.push(Token::new(kind, position..position + 1));
    }

    tokens.push(Token::new(TokenKind::End, text.len()..text.len()));
    debug!("tokenized '{}' into {} tokens", text, tokens.len());
    Ok(tokens)
}

/// Consumes characters while `belongs` holds and returns the exclusive end
/// offset of the run.
fn scan_run(
    chars: &mut Peekable<CharIndices<'_>>,
    start: usize,
    belongs: impl Fn(char) -> bool,
) -> usize {
    let mut end = start;
    while let Some(&(position, ch)) = chars.peek() {
        if !belongs(ch) {
            break;
        }
        chars.next();
        end = position + 1;
    }
    end
}
