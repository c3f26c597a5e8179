use crate::correspondence::CorrespondenceMap;
use crate::expression::ast::Expression;
use crate::expression::errors::EvaluationError;

const DECIMAL: i64 = 10;

impl Expression {
    /// Evaluates this expression against the puzzle `text` it was parsed
    /// from and a letter-to-digit `correspondence`.
    ///
    /// Variables reconstruct their value by folding the letters of their
    /// span left to right, multiplying the accumulator by ten and adding the
    /// mapped digit, which is what makes multi-letter variables like `MONEY`
    /// work. If the expression was not parsed from `text`, the spans are
    /// meaningless and the result is unspecified.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] on division by zero, a negative
    /// exponent, or arithmetic overflow. Callers running a search treat any
    /// of these as "this digit assignment does not satisfy the puzzle".
    pub fn evaluate(
        &self,
        text: &str,
        correspondence: &CorrespondenceMap,
    ) -> Result<i64, EvaluationError> {
        match self {
            Expression::Literal(value) => Ok(*value),
            Expression::Variable(span) => {
                let mut number: i64 = 0;
                for ch in text[span.clone()].chars() {
                    number = number
                        .checked_mul(DECIMAL)
                        .and_then(|shifted| shifted.checked_add(i64::from(correspondence.get(ch))))
                        .ok_or(EvaluationError::Overflow)?;
                }
                Ok(number)
            }
            Expression::Binary { op, lhs, rhs } => {
                let left = lhs.evaluate(text, correspondence)?;
                let right = rhs.evaluate(text, correspondence)?;
                op(left, right)
            }
        }
    }
}
