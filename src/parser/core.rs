use log::debug;

use crate::expression::Expression;
use crate::parser::errors::ParseError;
use crate::parser::token::{Token, TokenKind};
use crate::parser::tokenizer::tokenize;

/// Parses a puzzle formula into an expression tree.
///
/// Implements an LL(1) top-down parse of the grammar below, where the later
/// rules bind tighter:
///
/// ```text
/// Expression         := EqualityExpr
/// EqualityExpr       := AdditiveExpr ( (=|<|<=|>|>=) AdditiveExpr )*
/// AdditiveExpr       := MultiplicativeExpr ( (+|-) MultiplicativeExpr )*
/// MultiplicativeExpr := ExponentExpr ( (*|/) ExponentExpr )*
/// ExponentExpr       := PrimaryExpr ( ^ ExponentExpr )?
/// PrimaryExpr        := '(' Expression ')' | NUMBER | VARIABLE
/// ```
///
/// Comparison operators chain left-associatively, each producing a 1/0
/// result consumed by the next, so a formula may be any chain of
/// comparisons rather than a single top-level equality.
///
/// # Errors
///
/// Returns a [`ParseError`] when tokenization fails, when an unexpected
/// token is met, or when input remains after the start symbol has been
/// parsed.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    debug!("parsing expression '{}'", text);

    let mut parser = Parser {
        text,
        tokens: tokenize(text)?,
        cursor: 0,
    };
    let expression = parser.parse_expression()?;
    parser.expect_fully_consumed()?;
    Ok(expression)
}

struct Parser<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser<'_> {
    /// The current (lookahead) token. The token list always ends with END
    /// and the cursor never advances past it.
    fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    fn lexeme_of_current(&self) -> String {
        self.current().lexeme(self.text).to_string()
    }

    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_equality()
    }

    /// Generic handler for a binary rule with left associativity.
    fn parse_left_associative(
        &mut self,
        operand: fn(&mut Self) -> Result<Expression, ParseError>,
        accepted: &[TokenKind],
    ) -> Result<Expression, ParseError> {
        let mut left = operand(self)?;

        while accepted.contains(&self.current().kind) {
            let op = match self.current().kind.binary_operation() {
                Some(op) => op,
                None => break,
            };
            self.consume()?;
            let right = operand(self)?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        self.parse_left_associative(
            Self::parse_additive,
            &[
                TokenKind::Equals,
                TokenKind::LessThan,
                TokenKind::LessEquals,
                TokenKind::GreaterThan,
                TokenKind::GreaterEquals,
            ],
        )
    }

    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        self.parse_left_associative(
            Self::parse_multiplicative,
            &[TokenKind::Plus, TokenKind::Minus],
        )
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        self.parse_left_associative(
            Self::parse_exponent,
            &[TokenKind::Asterisk, TokenKind::Slash],
        )
    }

    /// Exponentiation is right-associative: `2^3^2` parses as `2^(3^2)`.
    fn parse_exponent(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_primary()?;

        if self.current().kind == TokenKind::Circumflex {
            if let Some(op) = self.current().kind.binary_operation() {
                self.consume()?;
                let right = self.parse_exponent()?;
                return Ok(Expression::binary(left, op, right));
            }
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.current().kind {
            TokenKind::LeftParen => {
                self.consume()?;
                let inner = self.parse_expression()?;
                self.consume_expected(TokenKind::RightParen)?;
                Ok(inner)
            }
            TokenKind::Number => self.parse_number(),
            TokenKind::Variable => {
                let token = self.consume()?;
                Ok(Expression::Variable(token.span))
            }
            kind => Err(ParseError::UnexpectedToken {
                kind,
                lexeme: self.lexeme_of_current(),
            }),
        }
    }

    fn parse_number(&mut self) -> Result<Expression, ParseError> {
        let token = self.consume_expected(TokenKind::Number)?;
        let lexeme = token.lexeme(self.text);
        let value = lexeme
            .parse::<i64>()
            .map_err(|_| ParseError::NumberOutOfRange {
                lexeme: lexeme.to_string(),
            })?;
        Ok(Expression::Literal(value))
    }

    /// Consumes the lookahead token regardless of its kind, unless it is the
    /// END marker.
    fn consume(&mut self) -> Result<Token, ParseError> {
        let token = self.current().clone();
        if token.kind == TokenKind::End {
            return Err(ParseError::MissingToken);
        }
        self.cursor += 1;
        Ok(token)
    }

    /// Consumes the lookahead token if it has the expected kind.
    fn consume_expected(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        match self.current().kind {
            kind if kind == expected => self.consume(),
            TokenKind::End => Err(ParseError::UnexpectedEnd { expected }),
            found => Err(ParseError::MismatchedToken {
                expected,
                found,
                lexeme: self.lexeme_of_current(),
            }),
        }
    }

    /// After the start symbol, the lookahead must be exactly END; trailing
    /// unconsumed input is an error rather than silently ignored.
    fn expect_fully_consumed(&self) -> Result<(), ParseError> {
        match self.current().kind {
            TokenKind::End => Ok(()),
            kind => Err(ParseError::TrailingInput {
                kind,
                lexeme: self.lexeme_of_current(),
            }),
        }
    }
}
